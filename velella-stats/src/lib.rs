//! Statistical methods for the Velella analytics ecosystem.
//!
//! Operates on [`Series`], an ordered numeric series whose undefined
//! positions are explicit `None` markers rather than NaN:
//!
//! - **Rolling aggregation** — [`rolling_mean`]
//! - **Returns** — [`percent_change`]
//! - **Descriptive statistics** — [`summarize`] into a [`SeriesSummary`]
//! - **Correlation** — [`pearson`] and the pairwise-complete [`CorrelationMatrix`]
//!
//! # Example
//!
//! ```
//! use velella_stats::{percent_change, summarize, Series};
//!
//! let closes = Series::from_values([100.0, 110.0, 99.0]);
//! let returns = percent_change(&closes);
//! assert_eq!(returns.get(0), None);
//!
//! let summary = summarize(&returns);
//! assert_eq!(summary.count, 2);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod returns;
pub mod rolling;
pub mod series;

pub use correlation::{pearson, CorrelationMatrix};
pub use descriptive::{summarize, SeriesSummary};
pub use returns::percent_change;
pub use rolling::rolling_mean;
pub use series::Series;
