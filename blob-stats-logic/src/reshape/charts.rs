use super::units::{bytes_to_kilobytes, ratios, scale_together, ScaledSeries};
use crate::stats::{BlobDailyStats, BlockDailyStats, TransactionDailyStats};
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde::Serialize;

/// Chart-ready arrays derived from a daily series.
///
/// Output arrays have the length of `days` of the input and
/// index `i` refers to the same day as in the input.
pub trait Reshape {
    type Charts;

    fn reshape(&self) -> Self::Charts;
}

fn decimals_to_f64(values: &[BigDecimal]) -> Vec<f64> {
    // finite for any `numeric(100, 0)` value
    values
        .iter()
        .map(|value| value.to_f64().unwrap_or_default())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDailyCharts {
    pub days: Vec<String>,
    pub transactions: Vec<i64>,
    pub unique_senders: Vec<i64>,
    pub unique_receivers: Vec<i64>,
    pub avg_max_blob_gas_fees: ScaledSeries,
    pub transactions_per_sender: Vec<f64>,
}

impl Reshape for TransactionDailyStats {
    type Charts = TransactionDailyCharts;

    fn reshape(&self) -> TransactionDailyCharts {
        TransactionDailyCharts {
            days: self.days.clone(),
            transactions: self.total_transactions.clone(),
            unique_senders: self.total_unique_senders.clone(),
            unique_receivers: self.total_unique_receivers.clone(),
            avg_max_blob_gas_fees: ScaledSeries::from_wei(&self.avg_max_blob_gas_fees),
            transactions_per_sender: ratios(&self.total_transactions, &self.total_unique_senders),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobDailyCharts {
    pub days: Vec<String>,
    pub blobs: Vec<i64>,
    pub unique_blobs: Vec<i64>,
    /// KB
    pub blob_sizes: Vec<f64>,
    /// KB
    pub avg_blob_sizes: Vec<f64>,
    pub unique_blob_ratios: Vec<f64>,
}

impl Reshape for BlobDailyStats {
    type Charts = BlobDailyCharts;

    fn reshape(&self) -> BlobDailyCharts {
        BlobDailyCharts {
            days: self.days.clone(),
            blobs: self.total_blobs.clone(),
            unique_blobs: self.total_unique_blobs.clone(),
            blob_sizes: bytes_to_kilobytes(&self.total_blob_sizes),
            avg_blob_sizes: bytes_to_kilobytes(&self.avg_blob_sizes),
            unique_blob_ratios: ratios(&self.total_unique_blobs, &self.total_blobs),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDailyCharts {
    pub days: Vec<String>,
    pub blocks: Vec<i64>,
    pub blob_gas_used: Vec<f64>,
    pub blob_as_calldata_gas_used: Vec<f64>,
    pub blob_fees: ScaledSeries,
    pub blob_as_calldata_fees: ScaledSeries,
    pub avg_blob_fees: ScaledSeries,
    pub avg_blob_as_calldata_fees: ScaledSeries,
    pub avg_blob_gas_prices: ScaledSeries,
    pub blob_gas_used_per_block: Vec<f64>,
    pub blob_as_calldata_fee_ratios: Vec<f64>,
}

impl Reshape for BlockDailyStats {
    type Charts = BlockDailyCharts;

    fn reshape(&self) -> BlockDailyCharts {
        let blob_gas_used = decimals_to_f64(&self.total_blob_gas_used);
        let blob_as_calldata_gas_used = decimals_to_f64(&self.total_blob_as_calldata_gas_used);
        let blob_fees = decimals_to_f64(&self.total_blob_fees);
        let blob_as_calldata_fees = decimals_to_f64(&self.total_blob_as_calldata_fees);

        let blob_gas_used_per_block = ratios(&blob_gas_used, &self.total_blocks);
        let blob_as_calldata_fee_ratios = ratios(&blob_as_calldata_fees, &blob_fees);
        let [blob_fees, blob_as_calldata_fees] =
            scale_together([&blob_fees[..], &blob_as_calldata_fees[..]]);
        let [avg_blob_fees, avg_blob_as_calldata_fees] =
            scale_together([&self.avg_blob_fees[..], &self.avg_blob_as_calldata_fees[..]]);

        BlockDailyCharts {
            days: self.days.clone(),
            blocks: self.total_blocks.clone(),
            blob_gas_used,
            blob_as_calldata_gas_used,
            blob_fees,
            blob_as_calldata_fees,
            avg_blob_fees,
            avg_blob_as_calldata_fees,
            avg_blob_gas_prices: ScaledSeries::from_wei(&self.avg_blob_gas_prices),
            blob_gas_used_per_block,
            blob_as_calldata_fee_ratios,
        }
    }
}
