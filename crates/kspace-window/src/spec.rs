//! Window specification: a family, plus a shape parameter for parametric
//! families.
//!
//! In stack files a simple window is a bare string and a shaped window is a
//! two element sequence:
//!
//! ```yaml
//! window: hanning
//! ---
//! window: [kaiser, 8.6]
//! ```

use crate::{WindowError, WindowFamily, WindowResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved window specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWindowSpec", into = "RawWindowSpec")]
pub enum WindowSpec {
    /// Family without a shape parameter.
    Simple(WindowFamily),
    /// Parametric family with its shape parameter.
    Shaped(WindowFamily, f64),
}

impl WindowSpec {
    /// Creates a validated specification.
    ///
    /// A shape must be given exactly when the family is parametric.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kspace_window::{WindowFamily, WindowSpec};
    ///
    /// let kaiser = WindowSpec::new(WindowFamily::Kaiser, Some(8.6)).unwrap();
    /// assert_eq!(kaiser.shape(), Some(8.6));
    /// assert!(WindowSpec::new(WindowFamily::Kaiser, None).is_err());
    /// assert!(WindowSpec::new(WindowFamily::Hamming, Some(1.0)).is_err());
    /// ```
    pub fn new(family: WindowFamily, shape: Option<f64>) -> WindowResult<Self> {
        match (family.is_parametric(), shape) {
            (true, Some(shape)) => Ok(WindowSpec::Shaped(family, shape)),
            (false, None) => Ok(WindowSpec::Simple(family)),
            (true, None) => Err(WindowError::MissingShape(family.name().into())),
            (false, Some(_)) => Err(WindowError::UnexpectedShape(family.name().into())),
        }
    }

    /// Parses a family name and attaches an optional shape.
    pub fn parse(name: &str, shape: Option<f64>) -> WindowResult<Self> {
        Self::new(name.parse()?, shape)
    }

    /// The window family.
    #[inline]
    pub fn family(&self) -> WindowFamily {
        match *self {
            WindowSpec::Simple(f) | WindowSpec::Shaped(f, _) => f,
        }
    }

    /// The shape parameter, if any.
    #[inline]
    pub fn shape(&self) -> Option<f64> {
        match *self {
            WindowSpec::Simple(_) => None,
            WindowSpec::Shaped(_, s) => Some(s),
        }
    }

    /// Canonical family name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.family().name()
    }
}

impl From<WindowFamily> for WindowSpec {
    fn from(family: WindowFamily) -> Self {
        WindowSpec::Simple(family)
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowSpec::Simple(family) => write!(f, "{family}"),
            WindowSpec::Shaped(family, shape) => write!(f, "({family}, {shape})"),
        }
    }
}

/// Serialized form, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawWindowSpec {
    Name(String),
    Shaped(String, f64),
}

impl TryFrom<RawWindowSpec> for WindowSpec {
    type Error = WindowError;

    fn try_from(raw: RawWindowSpec) -> WindowResult<Self> {
        match raw {
            RawWindowSpec::Name(name) => WindowSpec::parse(&name, None),
            RawWindowSpec::Shaped(name, shape) => WindowSpec::parse(&name, Some(shape)),
        }
    }
}

impl From<WindowSpec> for RawWindowSpec {
    fn from(spec: WindowSpec) -> Self {
        match spec {
            WindowSpec::Simple(family) => RawWindowSpec::Name(family.name().into()),
            WindowSpec::Shaped(family, shape) => {
                RawWindowSpec::Shaped(family.name().into(), shape)
            }
        }
    }
}
