//! Filter object model.
//!
//! A [`Filter`] owns exactly one [`FilterParams`] record. Its transform is
//! never stored: [`Filter::apply`] dispatches on the record every time, so
//! the description and the behaviour cannot drift apart. To change a
//! parameter, build a new filter.
//!
//! Linear filters multiply the data by a mask computed from their geometry.
//! Nonlinear filters (DC offset, log, gamma) transform values directly.
//!
//! # Example
//!
//! ```rust
//! use kspace_ops::filter::{Filter, RadialGeometry};
//! use kspace_window::{WindowFamily, WindowSpec};
//! use ndarray::Array2;
//!
//! let lp = Filter::low_pass(
//!     RadialGeometry::new(WindowSpec::Simple(WindowFamily::Hanning), (16, 16)).diameter(8),
//! )
//! .unwrap();
//! assert!(lp.is_linear());
//! assert_eq!(lp.name(), "hanning");
//!
//! let out = lp.apply(&Array2::<f64>::ones((16, 16))).unwrap();
//! assert_eq!(out, lp.mask().unwrap().unwrap());
//! ```

use crate::builders::{self, resolve_diameter, Construction};
use crate::nonlinear::{compute_dc_offset, gamma_transform, log_transform};
use crate::resize::Contour;
use crate::{Dim, OpsError, OpsResult, Sample};
use kspace_window::{WindowFamily, WindowSpec};
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};
use std::fmt;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Corner block size of a newly created DC offset filter.
pub const DEFAULT_DC_SIZE: usize = 10;

/// Band and stripe width used when a stack file omits it.
pub const DEFAULT_WIDTH: usize = 3;

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_dc_size() -> usize {
    DEFAULT_DC_SIZE
}

/// Geometry of circular low/high-pass filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGeometry {
    /// Window profile.
    pub window: WindowSpec,
    /// Target shape `(rows, cols)`.
    pub dim: Dim,
    /// Profile length in pixels; 0 means `max(dim)`.
    #[serde(default)]
    pub diameter: usize,
    /// Outer product or rotational.
    #[serde(default)]
    pub construction: Construction,
    /// Contour policy.
    #[serde(default)]
    pub contour: Contour,
}

impl RadialGeometry {
    /// Rotational, full-size, constant-percentage geometry.
    pub fn new(window: WindowSpec, dim: Dim) -> Self {
        Self {
            window,
            dim,
            diameter: 0,
            construction: Construction::default(),
            contour: Contour::default(),
        }
    }

    /// Sets the diameter.
    pub fn diameter(mut self, diameter: usize) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the construction method.
    pub fn construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Sets the contour policy.
    pub fn contour(mut self, contour: Contour) -> Self {
        self.contour = contour;
        self
    }
}

/// Geometry of circular band-pass/stop filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnulusGeometry {
    /// Window profile across the band.
    pub window: WindowSpec,
    /// Target shape `(rows, cols)`.
    pub dim: Dim,
    /// Outer diameter in pixels; 0 means `max(dim)`.
    #[serde(default)]
    pub diameter: usize,
    /// Band width in pixels.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Contour policy.
    #[serde(default)]
    pub contour: Contour,
}

impl AnnulusGeometry {
    /// Full-size band of [`DEFAULT_WIDTH`] pixels.
    pub fn new(window: WindowSpec, dim: Dim) -> Self {
        Self {
            window,
            dim,
            diameter: 0,
            width: DEFAULT_WIDTH,
            contour: Contour::default(),
        }
    }

    /// Sets the outer diameter.
    pub fn diameter(mut self, diameter: usize) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the band width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the contour policy.
    pub fn contour(mut self, contour: Contour) -> Self {
        self.contour = contour;
        self
    }
}

/// Geometry of axis-aligned stripe filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripeGeometry {
    /// Window profile across the stripe.
    pub window: WindowSpec,
    /// Target shape `(rows, cols)`.
    pub dim: Dim,
    /// Column (vertical) or row (horizontal) the stripe is centred on.
    #[serde(default)]
    pub center: isize,
    /// Stripe width in pixels.
    #[serde(default = "default_width")]
    pub width: usize,
}

impl StripeGeometry {
    /// Stripe of [`DEFAULT_WIDTH`] pixels at `center`.
    pub fn new(window: WindowSpec, dim: Dim, center: isize) -> Self {
        Self { window, dim, center, width: DEFAULT_WIDTH }
    }

    /// Sets the stripe width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Geometry of notch filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotchGeometry {
    /// Window profile of the dip.
    pub window: WindowSpec,
    /// Target shape `(rows, cols)`.
    pub dim: Dim,
    /// `(row, col)` of the notch.
    pub center: (isize, isize),
    /// Dip diameter in pixels.
    #[serde(default = "default_width")]
    pub width: usize,
}

impl NotchGeometry {
    /// Notch of [`DEFAULT_WIDTH`] pixels at `center`.
    pub fn new(window: WindowSpec, dim: Dim, center: (isize, isize)) -> Self {
        Self { window, dim, center, width: DEFAULT_WIDTH }
    }

    /// Sets the dip diameter.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Descriptor of one filter: its type tag plus the record for that topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(missing_docs)]
pub enum FilterParams {
    #[serde(rename = "Low Pass")]
    LowPass(RadialGeometry),
    #[serde(rename = "High Pass")]
    HighPass(RadialGeometry),
    #[serde(rename = "Band Pass")]
    BandPass(AnnulusGeometry),
    #[serde(rename = "Band Stop")]
    BandStop(AnnulusGeometry),
    #[serde(rename = "Vertical Band Pass")]
    VerticalBandPass(StripeGeometry),
    #[serde(rename = "Vertical Band Stop")]
    VerticalBandStop(StripeGeometry),
    #[serde(rename = "Horizontal Band Pass")]
    HorizontalBandPass(StripeGeometry),
    #[serde(rename = "Horizontal Band Stop")]
    HorizontalBandStop(StripeGeometry),
    #[serde(rename = "Notch")]
    Notch(NotchGeometry),
    #[serde(rename = "DC Offset")]
    DcOffset {
        #[serde(default = "default_dc_size")]
        size: usize,
    },
    #[serde(rename = "Log Transform")]
    LogTransform,
    #[serde(rename = "Gamma Transform")]
    GammaTransform { gamma: f64 },
}

/// Type tag of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum FilterKind {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
    VerticalBandPass,
    VerticalBandStop,
    HorizontalBandPass,
    HorizontalBandStop,
    Notch,
    DcOffset,
    LogTransform,
    GammaTransform,
}

impl FilterKind {
    /// Every kind, in menu order.
    pub const ALL: [FilterKind; 12] = [
        FilterKind::LowPass,
        FilterKind::HighPass,
        FilterKind::BandPass,
        FilterKind::BandStop,
        FilterKind::VerticalBandPass,
        FilterKind::VerticalBandStop,
        FilterKind::HorizontalBandPass,
        FilterKind::HorizontalBandStop,
        FilterKind::Notch,
        FilterKind::DcOffset,
        FilterKind::LogTransform,
        FilterKind::GammaTransform,
    ];

    /// Human label, identical to the `type` tag in stack files.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::LowPass => "Low Pass",
            FilterKind::HighPass => "High Pass",
            FilterKind::BandPass => "Band Pass",
            FilterKind::BandStop => "Band Stop",
            FilterKind::VerticalBandPass => "Vertical Band Pass",
            FilterKind::VerticalBandStop => "Vertical Band Stop",
            FilterKind::HorizontalBandPass => "Horizontal Band Pass",
            FilterKind::HorizontalBandStop => "Horizontal Band Stop",
            FilterKind::Notch => "Notch",
            FilterKind::DcOffset => "DC Offset",
            FilterKind::LogTransform => "Log Transform",
            FilterKind::GammaTransform => "Gamma Transform",
        }
    }

    /// True for mask-multiplying kinds.
    pub fn is_linear(&self) -> bool {
        !matches!(
            self,
            FilterKind::DcOffset | FilterKind::LogTransform | FilterKind::GammaTransform
        )
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FilterParams {
    /// Type tag.
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterParams::LowPass(_) => FilterKind::LowPass,
            FilterParams::HighPass(_) => FilterKind::HighPass,
            FilterParams::BandPass(_) => FilterKind::BandPass,
            FilterParams::BandStop(_) => FilterKind::BandStop,
            FilterParams::VerticalBandPass(_) => FilterKind::VerticalBandPass,
            FilterParams::VerticalBandStop(_) => FilterKind::VerticalBandStop,
            FilterParams::HorizontalBandPass(_) => FilterKind::HorizontalBandPass,
            FilterParams::HorizontalBandStop(_) => FilterKind::HorizontalBandStop,
            FilterParams::Notch(_) => FilterKind::Notch,
            FilterParams::DcOffset { .. } => FilterKind::DcOffset,
            FilterParams::LogTransform => FilterKind::LogTransform,
            FilterParams::GammaTransform { .. } => FilterKind::GammaTransform,
        }
    }

    /// Window and target shape of geometric filters.
    fn geometry(&self) -> Option<(&WindowSpec, Dim)> {
        match self {
            FilterParams::LowPass(g) | FilterParams::HighPass(g) => Some((&g.window, g.dim)),
            FilterParams::BandPass(g) | FilterParams::BandStop(g) => Some((&g.window, g.dim)),
            FilterParams::VerticalBandPass(g)
            | FilterParams::VerticalBandStop(g)
            | FilterParams::HorizontalBandPass(g)
            | FilterParams::HorizontalBandStop(g) => Some((&g.window, g.dim)),
            FilterParams::Notch(g) => Some((&g.window, g.dim)),
            _ => None,
        }
    }

    fn validate(&self) -> OpsResult<()> {
        if let Some((_, dim)) = self.geometry() {
            if dim.0 == 0 || dim.1 == 0 {
                return Err(OpsError::InvalidDimensions(format!(
                    "{} filter needs a non-empty shape, got {}x{}",
                    self.kind(),
                    dim.0,
                    dim.1
                )));
            }
        }
        let width = match self {
            FilterParams::BandPass(g) | FilterParams::BandStop(g) => {
                let d = resolve_diameter(g.diameter, g.dim);
                if g.width > d {
                    return Err(OpsError::InvalidParameter(format!(
                        "band width {} exceeds diameter {}",
                        g.width, d
                    )));
                }
                Some(g.width)
            }
            FilterParams::VerticalBandPass(g)
            | FilterParams::VerticalBandStop(g)
            | FilterParams::HorizontalBandPass(g)
            | FilterParams::HorizontalBandStop(g) => Some(g.width),
            FilterParams::Notch(g) => Some(g.width),
            FilterParams::GammaTransform { gamma } if !gamma.is_finite() => {
                return Err(OpsError::InvalidParameter(format!("gamma must be finite, got {gamma}")));
            }
            _ => None,
        };
        if width == Some(0) {
            return Err(OpsError::InvalidParameter(format!(
                "{} filter needs a positive width",
                self.kind()
            )));
        }
        Ok(())
    }
}

/// A validated filter.
///
/// Obtained from one constructor per topology, or by deserializing a
/// [`FilterParams`] record (validated the same way).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FilterParams", into = "FilterParams")]
pub struct Filter {
    params: FilterParams,
}

impl TryFrom<FilterParams> for Filter {
    type Error = OpsError;

    fn try_from(params: FilterParams) -> OpsResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }
}

impl From<Filter> for FilterParams {
    fn from(filter: Filter) -> Self {
        filter.params
    }
}

impl Filter {
    /// Circular low-pass.
    pub fn low_pass(geometry: RadialGeometry) -> OpsResult<Self> {
        FilterParams::LowPass(geometry).try_into()
    }

    /// Circular high-pass.
    pub fn high_pass(geometry: RadialGeometry) -> OpsResult<Self> {
        FilterParams::HighPass(geometry).try_into()
    }

    /// Circular band-pass.
    pub fn band_pass(geometry: AnnulusGeometry) -> OpsResult<Self> {
        FilterParams::BandPass(geometry).try_into()
    }

    /// Circular band-stop.
    pub fn band_stop(geometry: AnnulusGeometry) -> OpsResult<Self> {
        FilterParams::BandStop(geometry).try_into()
    }

    /// Vertical stripe pass.
    pub fn vertical_band_pass(geometry: StripeGeometry) -> OpsResult<Self> {
        FilterParams::VerticalBandPass(geometry).try_into()
    }

    /// Vertical stripe stop.
    pub fn vertical_band_stop(geometry: StripeGeometry) -> OpsResult<Self> {
        FilterParams::VerticalBandStop(geometry).try_into()
    }

    /// Horizontal stripe pass.
    pub fn horizontal_band_pass(geometry: StripeGeometry) -> OpsResult<Self> {
        FilterParams::HorizontalBandPass(geometry).try_into()
    }

    /// Horizontal stripe stop.
    pub fn horizontal_band_stop(geometry: StripeGeometry) -> OpsResult<Self> {
        FilterParams::HorizontalBandStop(geometry).try_into()
    }

    /// Single-point notch.
    pub fn notch(geometry: NotchGeometry) -> OpsResult<Self> {
        FilterParams::Notch(geometry).try_into()
    }

    /// DC offset correction over corner blocks of `size` pixels.
    pub fn dc_offset(size: usize) -> Self {
        Self { params: FilterParams::DcOffset { size } }
    }

    /// `log10(1 + x)`.
    pub fn log_transform() -> Self {
        Self { params: FilterParams::LogTransform }
    }

    /// `x ^ gamma`.
    pub fn gamma_transform(gamma: f64) -> OpsResult<Self> {
        FilterParams::GammaTransform { gamma }.try_into()
    }

    /// Filter a configurator starts from: rotational hanning low-pass over
    /// the whole of `dim`.
    pub fn default_for(dim: Dim) -> OpsResult<Self> {
        Self::low_pass(RadialGeometry::new(WindowSpec::Simple(WindowFamily::Hanning), dim))
    }

    /// Type tag.
    pub fn kind(&self) -> FilterKind {
        self.params.kind()
    }

    /// True if the filter multiplies by a mask.
    pub fn is_linear(&self) -> bool {
        self.kind().is_linear()
    }

    /// Window family name, or the kind label for nonlinear filters.
    pub fn name(&self) -> &'static str {
        match self.params.geometry() {
            Some((window, _)) => window.name(),
            None => self.kind().label(),
        }
    }

    /// Descriptor.
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Window profile of geometric filters.
    pub fn window(&self) -> Option<&WindowSpec> {
        self.params.geometry().map(|(w, _)| w)
    }

    /// Target shape of geometric filters.
    pub fn dim(&self) -> Option<Dim> {
        self.params.geometry().map(|(_, d)| d)
    }

    /// Mask of a linear filter, rebuilt from the descriptor. `None` for
    /// nonlinear filters.
    pub fn mask(&self) -> OpsResult<Option<Array2<f64>>> {
        let mask = match &self.params {
            FilterParams::LowPass(g) => {
                builders::build_low_pass(&g.window, g.dim, g.diameter, g.construction, g.contour)
            }
            FilterParams::HighPass(g) => {
                builders::build_high_pass(&g.window, g.dim, g.diameter, g.construction, g.contour)
            }
            FilterParams::BandPass(g) => {
                builders::build_band_pass(&g.window, g.dim, g.diameter, g.width, g.contour)?
            }
            FilterParams::BandStop(g) => {
                builders::build_band_stop(&g.window, g.dim, g.diameter, g.width, g.contour)?
            }
            FilterParams::VerticalBandPass(g) => {
                builders::build_vertical_band_pass(&g.window, g.dim, g.center, g.width)
            }
            FilterParams::VerticalBandStop(g) => {
                builders::build_vertical_band_stop(&g.window, g.dim, g.center, g.width)
            }
            FilterParams::HorizontalBandPass(g) => {
                builders::build_horizontal_band_pass(&g.window, g.dim, g.center, g.width)
            }
            FilterParams::HorizontalBandStop(g) => {
                builders::build_horizontal_band_stop(&g.window, g.dim, g.center, g.width)
            }
            FilterParams::Notch(g) => builders::build_notch(&g.window, g.dim, g.center, g.width),
            FilterParams::DcOffset { .. }
            | FilterParams::LogTransform
            | FilterParams::GammaTransform { .. } => return Ok(None),
        };
        Ok(Some(mask))
    }

    /// Applies the filter, returning a new array of the same shape.
    ///
    /// # Errors
    ///
    /// [`OpsError::SizeMismatch`] if a linear filter's mask cannot be
    /// broadcast to `data`.
    pub fn apply<T: Sample>(&self, data: &Array2<T>) -> OpsResult<Array2<T>> {
        trace!(kind = %self.kind(), dim = ?data.dim(), "apply");
        match &self.params {
            FilterParams::DcOffset { size } => Ok(compute_dc_offset(data, *size)),
            FilterParams::LogTransform => Ok(log_transform(data)),
            FilterParams::GammaTransform { gamma } => Ok(gamma_transform(data, *gamma)),
            _ => match self.mask()? {
                Some(mask) => multiply(data, &mask),
                None => Ok(data.clone()),
            },
        }
    }

    /// What a configurator displays for this filter on a `dim` grid: the
    /// filter applied to ones, or zeros for DC offset.
    pub fn preview(&self, dim: Dim) -> OpsResult<Array2<f64>> {
        match self.params {
            FilterParams::DcOffset { .. } => Ok(Array2::zeros(dim)),
            _ => self.apply(&Array2::<f64>::ones(dim)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.window() {
            Some(window) => write!(f, "{} ({})", self.kind(), window),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// `data * mask`, broadcasting the mask over `data`.
fn multiply<T: Sample>(data: &Array2<T>, mask: &Array2<f64>) -> OpsResult<Array2<T>> {
    let view = mask.broadcast(data.dim()).ok_or_else(|| {
        OpsError::SizeMismatch(format!(
            "mask {:?} does not broadcast to data {:?}",
            mask.dim(),
            data.dim()
        ))
    })?;

    let mut out = data.clone();
    let zip = Zip::from(&mut out).and(&view);
    #[cfg(feature = "parallel")]
    zip.par_for_each(|d, &m| *d = *d * m);
    #[cfg(not(feature = "parallel"))]
    zip.for_each(|d, &m| *d = *d * m);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    fn hann() -> WindowSpec {
        WindowSpec::Simple(WindowFamily::Hanning)
    }

    #[test]
    fn test_kind_and_name() {
        let kaiser = WindowSpec::Shaped(WindowFamily::Kaiser, 8.6);
        let f = Filter::band_stop(AnnulusGeometry::new(kaiser, (32, 32)).diameter(20).width(6)).unwrap();
        assert_eq!(f.kind(), FilterKind::BandStop);
        assert_eq!(f.kind().to_string(), "Band Stop");
        assert_eq!(f.name(), "kaiser");
        assert_eq!(f.window(), Some(&kaiser));
        assert_eq!(f.dim(), Some((32, 32)));
        assert!(f.is_linear());

        let dco = Filter::dc_offset(DEFAULT_DC_SIZE);
        assert_eq!(dco.name(), "DC Offset");
        assert!(!dco.is_linear());
        assert_eq!(dco.window(), None);
        assert_eq!(Filter::log_transform().name(), "Log Transform");
    }

    #[test]
    fn test_linear_flags() {
        for kind in FilterKind::ALL {
            let nonlinear = matches!(
                kind,
                FilterKind::DcOffset | FilterKind::LogTransform | FilterKind::GammaTransform
            );
            assert_eq!(kind.is_linear(), !nonlinear, "{kind}");
        }
    }

    #[test]
    fn test_validation() {
        let err = Filter::low_pass(RadialGeometry::new(hann(), (0, 8)));
        assert!(matches!(err, Err(OpsError::InvalidDimensions(_))));

        let err = Filter::band_pass(AnnulusGeometry::new(hann(), (8, 8)).width(9));
        assert!(matches!(err, Err(OpsError::InvalidParameter(_))));

        let err = Filter::notch(NotchGeometry::new(hann(), (8, 8), (4, 4)).width(0));
        assert!(matches!(err, Err(OpsError::InvalidParameter(_))));

        assert!(Filter::gamma_transform(f64::NAN).is_err());
        assert!(Filter::gamma_transform(0.5).is_ok());
    }

    #[test]
    fn test_apply_matches_mask() {
        let f = Filter::low_pass(RadialGeometry::new(hann(), (12, 16)).diameter(10)).unwrap();
        let mask = f.mask().unwrap().unwrap();
        let data = Array2::from_shape_fn((12, 16), |(i, j)| Complex64::new(i as f64, j as f64));
        let out = f.apply(&data).unwrap();
        for ((o, d), m) in out.iter().zip(data.iter()).zip(mask.iter()) {
            assert_abs_diff_eq!(o.re, d.re * m, epsilon = 1e-12);
            assert_abs_diff_eq!(o.im, d.im * m, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_apply_rejects_wrong_shape() {
        let f = Filter::default_for((8, 8)).unwrap();
        let err = f.apply(&Array2::<f64>::ones((8, 9)));
        assert!(matches!(err, Err(OpsError::SizeMismatch(_))));
    }

    #[test]
    fn test_nonlinear_has_no_mask() {
        assert!(Filter::dc_offset(4).mask().unwrap().is_none());
        assert!(Filter::log_transform().mask().unwrap().is_none());
    }

    #[test]
    fn test_preview() {
        let dco = Filter::dc_offset(DEFAULT_DC_SIZE);
        assert!(dco.preview((4, 5)).unwrap().iter().all(|&v| v == 0.0));

        let gamma = Filter::gamma_transform(3.0).unwrap();
        assert!(gamma.preview((4, 5)).unwrap().iter().all(|&v| v == 1.0));

        let lp = Filter::default_for((6, 6)).unwrap();
        assert_eq!(lp.preview((6, 6)).unwrap(), lp.mask().unwrap().unwrap());
    }

    #[test]
    fn test_default_for() {
        let f = Filter::default_for((20, 30)).unwrap();
        match f.params() {
            FilterParams::LowPass(g) => {
                assert_eq!(g.window, hann());
                assert_eq!(g.diameter, 0);
                assert_eq!(g.construction, Construction::Rotational);
                assert_eq!(g.contour, Contour::ConstPercentage);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_yaml_record() {
        let yaml = "type: Vertical Band Stop\nwindow: [gaussian, 2.0]\ndim: [64, 32]\ncenter: 10\n";
        let f: Filter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(f.kind(), FilterKind::VerticalBandStop);
        match f.params() {
            FilterParams::VerticalBandStop(g) => {
                assert_eq!(g.center, 10);
                assert_eq!(g.width, DEFAULT_WIDTH);
            }
            other => panic!("unexpected {other:?}"),
        }

        let dco: Filter = serde_yaml::from_str("type: DC Offset").unwrap();
        assert_eq!(dco.params(), &FilterParams::DcOffset { size: DEFAULT_DC_SIZE });

        let bad = "type: Band Pass\nwindow: hanning\ndim: [8, 8]\ndiameter: 4\nwidth: 6\n";
        assert!(serde_yaml::from_str::<Filter>(bad).is_err());
    }

    #[test]
    fn test_display() {
        let f = Filter::default_for((8, 8)).unwrap();
        assert_eq!(f.to_string(), "Low Pass (hanning)");
        assert_eq!(Filter::gamma_transform(2.0).unwrap().to_string(), "Gamma Transform");
    }
}
