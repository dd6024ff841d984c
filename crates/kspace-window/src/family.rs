//! Window family enumeration.
//!
//! The set of families is closed. Each family has a canonical name (the one
//! stored in filter descriptors and stack files) and a human label (the one a
//! configurator shows in its picker).
//!
//! # Example
//!
//! ```rust
//! use kspace_window::WindowFamily;
//!
//! let family: WindowFamily = "hann".parse().unwrap();
//! assert_eq!(family, WindowFamily::Hanning);
//! assert_eq!(family.name(), "hanning");
//! assert_eq!(WindowFamily::Chebwin.label(), "Dolph-Chebyshev");
//! ```

use crate::{WindowError, WindowResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named 1D taper family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowFamily {
    /// Modified Bartlett-Hann.
    Barthann,
    /// Triangular, zero at both ends.
    Bartlett,
    /// Three-term Blackman.
    Blackman,
    /// Four-term minimum Blackman-Harris.
    #[serde(alias = "blackman-harris")]
    BlackmanHarris,
    /// Bohman (convolution of two half-cosines).
    Bohman,
    /// Rectangular, uniformly 1.
    #[serde(alias = "rect", alias = "rectangular")]
    Boxcar,
    /// Dolph-Chebyshev; shape is the sidelobe attenuation in dB.
    Chebwin,
    /// Five-term flat top.
    #[serde(alias = "flat top")]
    Flattop,
    /// Gaussian; shape is the standard deviation in samples.
    Gaussian,
    /// Hamming.
    Hamming,
    /// Hann.
    #[serde(alias = "hann")]
    Hanning,
    /// Kaiser; shape is beta.
    Kaiser,
    /// Nuttall four-term Blackman-Harris.
    Nuttall,
    /// Parzen (de la Vallee Poussin).
    Parzen,
    /// Slepian (DPSS); shape is the full bandwidth.
    Slepian,
    /// Triangular, non-zero at both ends.
    #[serde(alias = "triangle")]
    Triang,
}

impl WindowFamily {
    /// Every family, in label order.
    pub const ALL: [WindowFamily; 16] = [
        WindowFamily::Barthann,
        WindowFamily::Bartlett,
        WindowFamily::Blackman,
        WindowFamily::BlackmanHarris,
        WindowFamily::Bohman,
        WindowFamily::Boxcar,
        WindowFamily::Chebwin,
        WindowFamily::Flattop,
        WindowFamily::Gaussian,
        WindowFamily::Hamming,
        WindowFamily::Hanning,
        WindowFamily::Kaiser,
        WindowFamily::Nuttall,
        WindowFamily::Parzen,
        WindowFamily::Slepian,
        WindowFamily::Triang,
    ];

    /// Canonical (lowercase) name.
    pub fn name(&self) -> &'static str {
        match self {
            WindowFamily::Barthann => "barthann",
            WindowFamily::Bartlett => "bartlett",
            WindowFamily::Blackman => "blackman",
            WindowFamily::BlackmanHarris => "blackmanharris",
            WindowFamily::Bohman => "bohman",
            WindowFamily::Boxcar => "boxcar",
            WindowFamily::Chebwin => "chebwin",
            WindowFamily::Flattop => "flattop",
            WindowFamily::Gaussian => "gaussian",
            WindowFamily::Hamming => "hamming",
            WindowFamily::Hanning => "hanning",
            WindowFamily::Kaiser => "kaiser",
            WindowFamily::Nuttall => "nuttall",
            WindowFamily::Parzen => "parzen",
            WindowFamily::Slepian => "slepian",
            WindowFamily::Triang => "triang",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            WindowFamily::Barthann => "Barthann",
            WindowFamily::Bartlett => "Bartlett",
            WindowFamily::Blackman => "Blackman",
            WindowFamily::BlackmanHarris => "Blackman-Harris",
            WindowFamily::Bohman => "Bohman",
            WindowFamily::Boxcar => "Boxcar",
            WindowFamily::Chebwin => "Dolph-Chebyshev",
            WindowFamily::Flattop => "Flat Top",
            WindowFamily::Gaussian => "Gaussian",
            WindowFamily::Hamming => "Hamming",
            WindowFamily::Hanning => "Hanning",
            WindowFamily::Kaiser => "Kaiser",
            WindowFamily::Nuttall => "Nuttall",
            WindowFamily::Parzen => "Parzen",
            WindowFamily::Slepian => "Slepian",
            WindowFamily::Triang => "Triangle",
        }
    }

    /// Looks a family up by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// True if the family needs a shape parameter.
    #[inline]
    pub fn is_parametric(&self) -> bool {
        matches!(
            self,
            WindowFamily::Chebwin
                | WindowFamily::Gaussian
                | WindowFamily::Kaiser
                | WindowFamily::Slepian
        )
    }
}

impl fmt::Display for WindowFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowFamily {
    type Err = WindowError;

    fn from_str(s: &str) -> WindowResult<Self> {
        let family = match s.trim().to_ascii_lowercase().as_str() {
            "barthann" => WindowFamily::Barthann,
            "bartlett" => WindowFamily::Bartlett,
            "blackman" => WindowFamily::Blackman,
            "blackmanharris" | "blackman-harris" => WindowFamily::BlackmanHarris,
            "bohman" => WindowFamily::Bohman,
            "boxcar" | "rect" | "rectangular" => WindowFamily::Boxcar,
            "chebwin" | "dolph-chebyshev" => WindowFamily::Chebwin,
            "flattop" | "flat top" => WindowFamily::Flattop,
            "gaussian" => WindowFamily::Gaussian,
            "hamming" => WindowFamily::Hamming,
            "hanning" | "hann" => WindowFamily::Hanning,
            "kaiser" => WindowFamily::Kaiser,
            "nuttall" => WindowFamily::Nuttall,
            "parzen" => WindowFamily::Parzen,
            "slepian" => WindowFamily::Slepian,
            "triang" | "triangle" => WindowFamily::Triang,
            _ => return Err(WindowError::UnknownFamily(s.to_string())),
        };
        Ok(family)
    }
}
