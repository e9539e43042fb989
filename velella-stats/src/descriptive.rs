//! Descriptive statistics for numeric series.
//!
//! [`summarize`] computes the usual one-pass summary (count, mean, sample
//! standard deviation, min, quartiles, max) over the defined values of a
//! [`Series`]. Undefined markers are excluded from every statistic.

use velella_core::Summarizable;

use crate::series::Series;

/// Aggregate descriptive statistics for a series.
///
/// Every statistic except `count` is optional: below 2 defined observations
/// the standard deviation and quartiles have no defined value, and with 0
/// defined observations nothing does.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesSummary {
    /// Number of defined observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation (Bessel's correction, divisor n-1).
    pub std_dev: Option<f64>,
    /// Minimum value.
    pub min: Option<f64>,
    /// First quartile (25th percentile).
    pub q1: Option<f64>,
    /// Median (50th percentile).
    pub median: Option<f64>,
    /// Third quartile (75th percentile).
    pub q3: Option<f64>,
    /// Maximum value.
    pub max: Option<f64>,
}

/// Compute descriptive statistics over the defined values of `series`.
///
/// Quartiles use linear interpolation between ranks. Total over all inputs:
/// never fails, undefined statistics come back as `None`.
pub fn summarize(series: &Series) -> SeriesSummary {
    let mut data: Vec<f64> = series.defined().collect();
    let n = data.len();
    if n == 0 {
        return SeriesSummary {
            count: 0,
            mean: None,
            std_dev: None,
            min: None,
            q1: None,
            median: None,
            q3: None,
            max: None,
        };
    }

    let n_f = n as f64;
    let mean_val = data.iter().sum::<f64>() / n_f;

    let std_dev = if n > 1 {
        let ss: f64 = data.iter().map(|&x| (x - mean_val).powi(2)).sum();
        Some((ss / (n_f - 1.0)).sqrt())
    } else {
        None
    };

    data.sort_by(|a, b| a.total_cmp(b));
    let min_val = data[0];
    let max_val = data[n - 1];

    let (q1, median, q3) = if n > 1 {
        (
            Some(quantile_sorted(&data, 0.25)),
            Some(quantile_sorted(&data, 0.5)),
            Some(quantile_sorted(&data, 0.75)),
        )
    } else {
        (None, None, None)
    };

    SeriesSummary {
        count: n,
        mean: Some(mean_val),
        std_dev,
        min: Some(min_val),
        q1,
        median,
        q3,
        max: Some(max_val),
    }
}

/// Compute a quantile from a pre-sorted slice using linear interpolation.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = lo + 1;
    let frac = pos - lo as f64;
    if hi >= n {
        sorted[n - 1]
    } else {
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

impl Summarizable for SeriesSummary {
    fn summary(&self) -> String {
        match (self.mean, self.std_dev) {
            (Some(mean), Some(std)) => {
                format!("n={}, mean={:.4}, std={:.4}", self.count, mean, std)
            }
            (Some(mean), None) => format!("n={}, mean={:.4}", self.count, mean),
            _ => format!("n={}", self.count),
        }
    }
}
