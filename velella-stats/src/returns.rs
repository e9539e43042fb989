//! Period-over-period percentage change.

use crate::series::Series;

/// Percentage change between consecutive positions.
///
/// `out[i] = (s[i] - s[i-1]) / s[i-1] * 100`. The first position is
/// undefined, as is any position where either operand is undefined or the
/// predecessor is exactly zero (the division has no defined value).
///
/// Total function: never fails.
pub fn percent_change(series: &Series) -> Series {
    let values: Vec<Option<f64>> = (0..series.len())
        .map(|i| {
            if i == 0 {
                return None;
            }
            let prev = series.get(i - 1)?;
            let cur = series.get(i)?;
            if prev == 0.0 {
                return None;
            }
            Some((cur - prev) / prev * 100.0)
        })
        .collect();

    Series::from_options(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn daily_returns() {
        let s = Series::from_values([100.0, 110.0, 99.0]);
        let out = percent_change(&s);
        assert_eq!(out.get(0), None);
        assert!((out.get(1).unwrap() - 10.0).abs() < TOL);
        assert!((out.get(2).unwrap() - (-10.0)).abs() < TOL);
    }

    #[test]
    fn zero_predecessor_is_undefined() {
        let s = Series::from_values([5.0, 0.0, 10.0]);
        let out = percent_change(&s);
        assert!((out.get(1).unwrap() - (-100.0)).abs() < TOL);
        assert_eq!(out.get(2), None);
    }

    #[test]
    fn undefined_operands_propagate() {
        let s = Series::from_options(vec![Some(1.0), None, Some(2.0)]);
        let out = percent_change(&s);
        assert_eq!(out.defined_count(), 0);
    }

    #[test]
    fn single_element() {
        let s = Series::from_values([42.0]);
        let out = percent_change(&s);
        assert_eq!(&*out, &[None][..]);
    }

    #[test]
    fn empty_series() {
        let out = percent_change(&Series::from_values([]));
        assert!(out.is_empty());
    }

    #[test]
    fn negative_values() {
        let s = Series::from_values([-10.0, -5.0]);
        let out = percent_change(&s);
        // (-5 - -10) / -10 * 100 = -50
        assert!((out.get(1).unwrap() - (-50.0)).abs() < TOL);
    }
}
