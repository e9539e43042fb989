//! Rolling-window aggregation.

use velella_core::{Result, VelellaError};

use crate::series::Series;

/// Rolling arithmetic mean with a fixed window.
///
/// Output has the same length as the input. Positions with fewer than
/// `window` elements ending at them are undefined, and a window that covers
/// any undefined input position is undefined as a whole. A window larger
/// than the series leaves every position undefined.
///
/// Fails with `InvalidInput` when `window` is 0.
pub fn rolling_mean(series: &Series, window: usize) -> Result<Series> {
    if window == 0 {
        return Err(VelellaError::InvalidInput(
            "rolling_mean: window must be at least 1".into(),
        ));
    }

    let values: Vec<Option<f64>> = (0..series.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let start = i + 1 - window;
            let mut sum = 0.0;
            for j in start..=i {
                sum += series.get(j)?;
            }
            Some(sum / window as f64)
        })
        .collect();

    Ok(Series::from_options(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_three() {
        let s = Series::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
        let out = rolling_mean(&s, 3).unwrap();
        assert_eq!(
            &*out,
            &[None, None, Some(2.0), Some(3.0), Some(4.0)][..]
        );
    }

    #[test]
    fn window_one_is_identity() {
        let s = Series::from_values([1.5, -2.0, 0.0]);
        let out = rolling_mean(&s, 1).unwrap();
        assert_eq!(out, s);
    }

    #[test]
    fn window_zero_rejected() {
        let s = Series::from_values([1.0, 2.0]);
        assert!(rolling_mean(&s, 0).is_err());
    }

    #[test]
    fn window_longer_than_series() {
        let s = Series::from_values([1.0, 2.0, 3.0]);
        let out = rolling_mean(&s, 10).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out.defined_count(), 0);
    }

    #[test]
    fn undefined_input_poisons_covering_windows() {
        let s = Series::from_options(vec![
            Some(1.0),
            Some(2.0),
            None,
            Some(4.0),
            Some(5.0),
            Some(6.0),
        ]);
        let out = rolling_mean(&s, 2).unwrap();
        assert_eq!(
            &*out,
            &[None, Some(1.5), None, None, Some(4.5), Some(5.5)][..]
        );
    }

    #[test]
    fn empty_series() {
        let s = Series::from_values([]);
        let out = rolling_mean(&s, 3).unwrap();
        assert!(out.is_empty());
    }
}
