use crate::proto;
use bigdecimal::BigDecimal;
use blob_stats_logic::{plain_decimal, reshape, stats};

fn to_strings(values: &[BigDecimal]) -> Vec<String> {
    values.iter().map(plain_decimal).collect()
}

pub fn scaled_values_from_logic(series: reshape::ScaledSeries) -> proto::ScaledValues {
    proto::ScaledValues {
        unit: series.unit.to_string(),
        values: series.values,
    }
}

pub fn transaction_daily_stats_from_logic(
    stats: stats::TransactionDailyStats,
) -> proto::TransactionDailyStats {
    proto::TransactionDailyStats {
        days: stats.days,
        total_transactions: stats.total_transactions,
        total_unique_senders: stats.total_unique_senders,
        total_unique_receivers: stats.total_unique_receivers,
        avg_max_blob_gas_fees: stats.avg_max_blob_gas_fees,
    }
}

pub fn blob_daily_stats_from_logic(stats: stats::BlobDailyStats) -> proto::BlobDailyStats {
    proto::BlobDailyStats {
        days: stats.days,
        total_blobs: stats.total_blobs,
        total_unique_blobs: stats.total_unique_blobs,
        total_blob_sizes: stats.total_blob_sizes,
        avg_blob_sizes: stats.avg_blob_sizes,
    }
}

pub fn block_daily_stats_from_logic(stats: stats::BlockDailyStats) -> proto::BlockDailyStats {
    proto::BlockDailyStats {
        total_blob_gas_used: to_strings(&stats.total_blob_gas_used),
        total_blob_as_calldata_gas_used: to_strings(&stats.total_blob_as_calldata_gas_used),
        total_blob_fees: to_strings(&stats.total_blob_fees),
        total_blob_as_calldata_fees: to_strings(&stats.total_blob_as_calldata_fees),
        days: stats.days,
        total_blocks: stats.total_blocks,
        avg_blob_fees: stats.avg_blob_fees,
        avg_blob_as_calldata_fees: stats.avg_blob_as_calldata_fees,
        avg_blob_gas_prices: stats.avg_blob_gas_prices,
    }
}

pub fn transaction_daily_charts_from_logic(
    charts: reshape::TransactionDailyCharts,
) -> proto::TransactionDailyCharts {
    proto::TransactionDailyCharts {
        days: charts.days,
        transactions: charts.transactions,
        unique_senders: charts.unique_senders,
        unique_receivers: charts.unique_receivers,
        avg_max_blob_gas_fees: Some(scaled_values_from_logic(charts.avg_max_blob_gas_fees)),
        transactions_per_sender: charts.transactions_per_sender,
    }
}

pub fn blob_daily_charts_from_logic(charts: reshape::BlobDailyCharts) -> proto::BlobDailyCharts {
    proto::BlobDailyCharts {
        days: charts.days,
        blobs: charts.blobs,
        unique_blobs: charts.unique_blobs,
        blob_sizes: charts.blob_sizes,
        avg_blob_sizes: charts.avg_blob_sizes,
        unique_blob_ratios: charts.unique_blob_ratios,
    }
}

pub fn block_daily_charts_from_logic(charts: reshape::BlockDailyCharts) -> proto::BlockDailyCharts {
    proto::BlockDailyCharts {
        days: charts.days,
        blocks: charts.blocks,
        blob_gas_used: charts.blob_gas_used,
        blob_as_calldata_gas_used: charts.blob_as_calldata_gas_used,
        blob_fees: Some(scaled_values_from_logic(charts.blob_fees)),
        blob_as_calldata_fees: Some(scaled_values_from_logic(charts.blob_as_calldata_fees)),
        avg_blob_fees: Some(scaled_values_from_logic(charts.avg_blob_fees)),
        avg_blob_as_calldata_fees: Some(scaled_values_from_logic(charts.avg_blob_as_calldata_fees)),
        avg_blob_gas_prices: Some(scaled_values_from_logic(charts.avg_blob_gas_prices)),
        blob_gas_used_per_block: charts.blob_gas_used_per_block,
        blob_as_calldata_fee_ratios: charts.blob_as_calldata_fee_ratios,
    }
}

pub fn transaction_overall_stats_from_logic(
    stats: stats::TransactionOverallStats,
) -> proto::TransactionOverallStats {
    proto::TransactionOverallStats {
        total_transactions: stats.total_transactions,
        total_unique_senders: stats.total_unique_senders,
        total_unique_receivers: stats.total_unique_receivers,
        avg_max_blob_gas_fee: stats.avg_max_blob_gas_fee,
        updated_at: stats.updated_at,
    }
}

pub fn blob_overall_stats_from_logic(stats: stats::BlobOverallStats) -> proto::BlobOverallStats {
    proto::BlobOverallStats {
        total_blobs: stats.total_blobs,
        total_unique_blobs: stats.total_unique_blobs,
        total_blob_size: plain_decimal(&stats.total_blob_size),
        avg_blob_size: stats.avg_blob_size,
        updated_at: stats.updated_at,
    }
}

pub fn block_overall_stats_from_logic(stats: stats::BlockOverallStats) -> proto::BlockOverallStats {
    proto::BlockOverallStats {
        total_blocks: stats.total_blocks,
        total_blob_gas_used: plain_decimal(&stats.total_blob_gas_used),
        total_blob_as_calldata_gas_used: plain_decimal(&stats.total_blob_as_calldata_gas_used),
        total_blob_fee: plain_decimal(&stats.total_blob_fee),
        total_blob_as_calldata_fee: plain_decimal(&stats.total_blob_as_calldata_fee),
        avg_blob_fee: stats.avg_blob_fee,
        avg_blob_as_calldata_fee: stats.avg_blob_as_calldata_fee,
        avg_blob_gas_price: stats.avg_blob_gas_price,
        updated_at: stats.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blob_stats_logic::reshape::{EthUnit, Reshape};
    use pretty_assertions::assert_eq;

    #[test]
    fn block_totals_become_decimal_strings() {
        let stats = stats::BlockDailyStats {
            days: vec!["2024-03-14T00:00:00.000Z".to_string()],
            total_blocks: vec![3],
            total_blob_gas_used: vec![393216.into()],
            total_blob_as_calldata_gas_used: vec![6291456.into()],
            total_blob_fees: vec![BigDecimal::new(100.into(), -16)],
            total_blob_as_calldata_fees: vec![0.into()],
            avg_blob_fees: vec![1.3e14],
            avg_blob_as_calldata_fees: vec![0.0],
            avg_blob_gas_prices: vec![1e9],
        };

        let proto = block_daily_stats_from_logic(stats.clone());
        assert_eq!(vec!["393216".to_string()], proto.total_blob_gas_used);
        assert_eq!(vec!["1000000000000000000".to_string()], proto.total_blob_fees);
        assert_eq!(vec!["0".to_string()], proto.total_blob_as_calldata_fees);
        assert_eq!(stats.days, proto.days);

        let charts = block_daily_charts_from_logic(stats.reshape());
        assert_eq!(
            Some(proto::ScaledValues {
                unit: EthUnit::Gwei.to_string(),
                values: vec![1.0],
            }),
            charts.avg_blob_gas_prices
        );
    }

    #[test]
    fn overall_totals_are_plain_digits() {
        let proto = block_overall_stats_from_logic(stats::BlockOverallStats {
            total_blob_fee: BigDecimal::new(10.into(), -20),
            ..Default::default()
        });
        assert_eq!("1000000000000000000000", proto.total_blob_fee);
        assert_eq!("0", proto.total_blob_gas_used);
    }

    #[test]
    fn missing_overall_stats_keep_updated_at_empty() {
        let proto = blob_overall_stats_from_logic(stats::BlobOverallStats::default());
        assert_eq!("0", proto.total_blob_size);
        assert_eq!(None, proto.updated_at);
    }
}
