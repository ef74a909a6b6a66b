//! Pure transforms from daily series into chart-ready arrays.

mod charts;
mod units;

pub use charts::{BlobDailyCharts, BlockDailyCharts, Reshape, TransactionDailyCharts};
pub use units::{bytes_to_kilobytes, ratio, ratios, scale_together, EthUnit, ScaledSeries};
