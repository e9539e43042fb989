//! Numeric series with explicit undefined markers.
//!
//! A [`Series`] is an ordered sequence of `Option<f64>`. `None` marks a
//! position where a computation has no defined value: the first element of a
//! differencing operation, a division by zero, a rolling window that is not
//! yet full. Aggregates exclude markers explicitly instead of letting NaN
//! spread through float arithmetic.

use std::ops::Deref;

use velella_core::Summarizable;

/// An ordered numeric series, possibly holding undefined positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    values: Vec<Option<f64>>,
}

impl Series {
    /// Build a series where every position is defined.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().map(Some).collect(),
        }
    }

    /// Build a series from explicit optional values.
    pub fn from_options(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// Number of positions, defined or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`; `None` if undefined or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Iterate over every position.
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().copied()
    }

    /// Iterate over defined values only, in order.
    pub fn defined(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// Number of defined values.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

impl Deref for Series {
    type Target = [Option<f64>];

    fn deref(&self) -> &[Option<f64>] {
        &self.values
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::from_options(values)
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl Summarizable for Series {
    fn summary(&self) -> String {
        format!("series of {} ({} defined)", self.len(), self.defined_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_all_defined() {
        let s = Series::from_values([1.0, 2.0, 3.0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.defined_count(), 3);
        assert_eq!(s.get(1), Some(2.0));
    }

    #[test]
    fn from_options_keeps_markers() {
        let s = Series::from_options(vec![None, Some(1.0), None]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.defined_count(), 1);
        assert_eq!(s.get(0), None);
        assert_eq!(s.get(1), Some(1.0));
    }

    #[test]
    fn get_out_of_range() {
        let s = Series::from_values([1.0]);
        assert_eq!(s.get(5), None);
    }

    #[test]
    fn defined_skips_markers() {
        let s = Series::from_options(vec![Some(1.0), None, Some(3.0)]);
        let defined: Vec<f64> = s.defined().collect();
        assert_eq!(defined, vec![1.0, 3.0]);
    }

    #[test]
    fn deref_to_slice() {
        let s = Series::from_values([1.0, 2.0]);
        let slice: &[Option<f64>] = &s;
        assert_eq!(slice[0], Some(1.0));
    }

    #[test]
    fn summarizable_impl() {
        let s = Series::from_options(vec![Some(1.0), None]);
        assert_eq!(s.summary(), "series of 2 (1 defined)");
    }
}
