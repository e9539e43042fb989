//! Correlation analysis.
//!
//! Pairwise Pearson correlation over labeled columns, restricted to
//! pairwise-complete observations: each pair of columns is compared only
//! over the rows where both have defined values.

use velella_core::{Result, Summarizable, VelellaError};

use crate::series::Series;

/// Pearson product-moment correlation between `x` and `y` over
/// pairwise-complete rows.
///
/// Undefined when fewer than 2 complete rows exist, or when either side has
/// zero variance over them. Fails with `InvalidInput` on length mismatch.
pub fn pearson(x: &Series, y: &Series) -> Result<Option<f64>> {
    if x.len() != y.len() {
        return Err(VelellaError::InvalidInput(format!(
            "pearson: x and y must have the same length ({} vs {})",
            x.len(),
            y.len(),
        )));
    }
    Ok(pearson_complete(x, y))
}

/// Pairwise-complete Pearson with lengths already validated.
fn pearson_complete(x: &Series, y: &Series) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some((a?, b?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|&(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|&(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}

// ── Correlation matrix ─────────────────────────────────────────────────────

/// Pairwise Pearson correlation matrix over labeled columns.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationMatrix {
    /// Flat storage (row-major, n×n).
    data: Vec<Option<f64>>,
    /// Number of columns.
    size: usize,
    /// Column labels, in matrix order.
    labels: Vec<String>,
}

impl CorrelationMatrix {
    /// Build a correlation matrix from named columns.
    ///
    /// All columns must have the same length. Each off-diagonal entry is the
    /// Pearson coefficient over that pair's complete rows; the diagonal is
    /// 1.0 whenever the column has at least 2 defined values.
    pub fn from_columns(columns: &[(&str, &Series)]) -> Result<Self> {
        if columns.is_empty() {
            return Err(VelellaError::InvalidInput(
                "CorrelationMatrix: need at least one column".into(),
            ));
        }
        let rows = columns[0].1.len();
        for (name, series) in columns {
            if series.len() != rows {
                return Err(VelellaError::InvalidInput(format!(
                    "CorrelationMatrix: column '{}' has {} rows, expected {}",
                    name,
                    series.len(),
                    rows,
                )));
            }
        }

        let n = columns.len();
        let mut data = vec![None; n * n];
        for (i, (_, series)) in columns.iter().enumerate() {
            data[i * n + i] = if series.defined_count() >= 2 {
                Some(1.0)
            } else {
                None
            };
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let upper: Vec<Vec<(usize, Option<f64>)>> = (0..n)
                .into_par_iter()
                .map(|i| {
                    ((i + 1)..n)
                        .map(|j| (j, pearson_complete(columns[i].1, columns[j].1)))
                        .collect()
                })
                .collect();
            for (i, row) in upper.iter().enumerate() {
                for &(j, r) in row {
                    data[i * n + j] = r;
                    data[j * n + i] = r;
                }
            }
        }
        #[cfg(not(feature = "parallel"))]
        for i in 0..n {
            for j in (i + 1)..n {
                let r = pearson_complete(columns[i].1, columns[j].1);
                data[i * n + j] = r;
                data[j * n + i] = r;
            }
        }

        let labels = columns.iter().map(|(name, _)| name.to_string()).collect();
        Ok(Self {
            data,
            size: n,
            labels,
        })
    }

    /// Correlation between column `i` and column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data[i * self.size + j]
    }

    /// Number of columns.
    pub fn n(&self) -> usize {
        self.size
    }

    /// Column labels, in matrix order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the column named `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl Summarizable for CorrelationMatrix {
    fn summary(&self) -> String {
        format!("CorrelationMatrix: {}x{}", self.size, self.size)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
