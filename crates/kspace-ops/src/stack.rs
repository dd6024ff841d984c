//! Ordered filter stacks and their execution.
//!
//! A stack is applied left to right. Order matters: nonlinear filters do not
//! commute with each other or with masks.
//!
//! Stacks persist as YAML:
//!
//! ```yaml
//! filters:
//!   - type: DC Offset
//!     size: 10
//!   - type: Low Pass
//!     window: hanning
//!     dim: [256, 256]
//!     diameter: 128
//!   - type: Gamma Transform
//!     gamma: 0.5
//! ```

use crate::filter::Filter;
use crate::{OpsError, OpsResult, Sample};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Folds `stack` over a copy of `data`. `data` is never modified.
///
/// An empty stack returns a copy. The first failing filter aborts the fold
/// and its error is returned.
pub fn apply_stack<T: Sample>(data: &Array2<T>, stack: &[Filter]) -> OpsResult<Array2<T>> {
    trace!(dim = ?data.dim(), filters = stack.len(), "apply_stack");
    stack.iter().enumerate().try_fold(data.clone(), |acc, (i, filter)| {
        debug!(index = i, filter = %filter, "applying");
        filter.apply(&acc)
    })
}

/// An owned, ordered list of filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterStack {
    filters: Vec<Filter>,
}

impl FilterStack {
    /// Empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter.
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Inserts at `index`, shifting later filters.
    pub fn insert(&mut self, index: usize, filter: Filter) -> OpsResult<()> {
        if index > self.filters.len() {
            return Err(self.out_of_range(index));
        }
        self.filters.insert(index, filter);
        Ok(())
    }

    /// Removes and returns the filter at `index`.
    pub fn remove(&mut self, index: usize) -> OpsResult<Filter> {
        if index >= self.filters.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.filters.remove(index))
    }

    /// Replaces the filter at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, filter: Filter) -> OpsResult<Filter> {
        match self.filters.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, filter)),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Filter at `index`.
    pub fn get(&self, index: usize) -> Option<&Filter> {
        self.filters.get(index)
    }

    /// Filters in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True if the stack holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Removes every filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Filters as a slice.
    pub fn as_slice(&self) -> &[Filter] {
        &self.filters
    }

    /// Puts a DC offset correction of `size` at the front, as done when new
    /// data is loaded.
    pub fn with_dc_offset(mut self, size: usize) -> Self {
        self.filters.insert(0, Filter::dc_offset(size));
        self
    }

    /// Runs the stack over `data`. See [`apply_stack`].
    pub fn apply<T: Sample>(&self, data: &Array2<T>) -> OpsResult<Array2<T>> {
        apply_stack(data, &self.filters)
    }

    /// Parses a stack document.
    pub fn from_yaml_str(text: &str) -> OpsResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serializes the stack document.
    pub fn to_yaml_string(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reads a stack file.
    pub fn load(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading stack");
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Writes a stack file.
    pub fn save(&self, path: impl AsRef<Path>) -> OpsResult<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), filters = self.len(), "saving stack");
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> OpsError {
        OpsError::InvalidParameter(format!(
            "index {} out of range for stack of {}",
            index,
            self.filters.len()
        ))
    }
}

impl From<Vec<Filter>> for FilterStack {
    fn from(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

impl FromIterator<Filter> for FilterStack {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self { filters: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a FilterStack {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterKind, RadialGeometry};
    use kspace_window::{WindowFamily, WindowSpec};

    fn lp() -> Filter {
        Filter::low_pass(RadialGeometry::new(WindowSpec::Simple(WindowFamily::Hamming), (8, 8))).unwrap()
    }

    #[test]
    fn test_editing() {
        let mut stack = FilterStack::new();
        assert!(stack.is_empty());
        stack.push(lp());
        stack.push(Filter::log_transform());
        stack.insert(1, Filter::dc_offset(3)).unwrap();
        let kinds: Vec<_> = stack.iter().map(Filter::kind).collect();
        assert_eq!(kinds, vec![FilterKind::LowPass, FilterKind::DcOffset, FilterKind::LogTransform]);

        let old = stack.replace(2, Filter::gamma_transform(2.0).unwrap()).unwrap();
        assert_eq!(old.kind(), FilterKind::LogTransform);
        assert_eq!(stack.remove(0).unwrap().kind(), FilterKind::LowPass);
        assert_eq!(stack.len(), 2);

        assert!(stack.insert(5, lp()).is_err());
        assert!(stack.remove(2).is_err());
        assert!(stack.replace(9, lp()).is_err());

        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_with_dc_offset_goes_first() {
        let stack = FilterStack::from(vec![lp()]).with_dc_offset(10);
        assert_eq!(stack.get(0).map(Filter::kind), Some(FilterKind::DcOffset));
        assert_eq!(stack.get(1).map(Filter::kind), Some(FilterKind::LowPass));
    }

    #[test]
    fn test_first_error_aborts() {
        let stack: FilterStack = vec![lp(), Filter::log_transform()].into_iter().collect();
        let err = stack.apply(&Array2::<f64>::ones((4, 4)));
        assert!(matches!(err, Err(OpsError::SizeMismatch(_))));
    }

    #[test]
    fn test_yaml_document() {
        let text = "filters:\n  - type: DC Offset\n    size: 4\n  - type: Gamma Transform\n    gamma: 2.0\n";
        let stack = FilterStack::from_yaml_str(text).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(FilterStack::from_yaml_str(&stack.to_yaml_string().unwrap()).unwrap(), stack);

        assert!(FilterStack::from_yaml_str("filters:\n  - type: Sharpen\n").is_err());
    }
}
