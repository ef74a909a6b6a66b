use crate::{decimal::PlainDecimal, error::ServiceError, metrics};
use bigdecimal::BigDecimal;
use blob_stats_entity::{blob_overall_stats, block_overall_stats, transaction_overall_stats};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::Serialize;
use serde_with::serde_as;
use tracing::instrument;

/// All-time aggregates of one category, stored as a single row.
pub trait OverallStats: Default + From<<Self::Entity as EntityTrait>::Model> + Send {
    type Entity: EntityTrait;

    const NAME: &'static str;
}

fn format_updated_at(updated_at: DateTime<FixedOffset>) -> String {
    updated_at
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A missing row means the aggregation job has not run yet
/// and is reported as zeros without `updated_at`.
#[instrument(name = "get_overall_stats", skip_all, fields(stats = S::NAME), level = "debug")]
pub async fn get_overall_stats<S, C>(db: &C) -> Result<S, ServiceError>
where
    S: OverallStats,
    C: ConnectionTrait,
{
    let _timer = metrics::QUERY_TIME
        .with_label_values(&[S::NAME])
        .start_timer();
    let row = S::Entity::find()
        .one(db)
        .await
        .inspect_err(|_| metrics::QUERY_ERRORS.with_label_values(&[S::NAME]).inc())?;
    if row.is_none() {
        tracing::warn!(stats = S::NAME, "overall stats are not computed yet");
    }
    Ok(row.map(S::from).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOverallStats {
    pub total_transactions: i64,
    pub total_unique_senders: i64,
    pub total_unique_receivers: i64,
    pub avg_max_blob_gas_fee: f64,
    pub updated_at: Option<String>,
}

impl OverallStats for TransactionOverallStats {
    type Entity = transaction_overall_stats::Entity;

    const NAME: &'static str = "transaction_overall_stats";
}

impl From<transaction_overall_stats::Model> for TransactionOverallStats {
    fn from(row: transaction_overall_stats::Model) -> Self {
        Self {
            total_transactions: row.total_transactions,
            total_unique_senders: row.total_unique_senders,
            total_unique_receivers: row.total_unique_receivers,
            avg_max_blob_gas_fee: row.avg_max_blob_gas_fee,
            updated_at: Some(format_updated_at(row.updated_at)),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobOverallStats {
    pub total_blobs: i64,
    pub total_unique_blobs: i64,
    #[serde_as(as = "PlainDecimal")]
    pub total_blob_size: BigDecimal,
    pub avg_blob_size: f64,
    pub updated_at: Option<String>,
}

impl OverallStats for BlobOverallStats {
    type Entity = blob_overall_stats::Entity;

    const NAME: &'static str = "blob_overall_stats";
}

impl From<blob_overall_stats::Model> for BlobOverallStats {
    fn from(row: blob_overall_stats::Model) -> Self {
        Self {
            total_blobs: row.total_blobs,
            total_unique_blobs: row.total_unique_blobs,
            total_blob_size: row.total_blob_size,
            avg_blob_size: row.avg_blob_size,
            updated_at: Some(format_updated_at(row.updated_at)),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockOverallStats {
    pub total_blocks: i64,
    #[serde_as(as = "PlainDecimal")]
    pub total_blob_gas_used: BigDecimal,
    #[serde_as(as = "PlainDecimal")]
    pub total_blob_as_calldata_gas_used: BigDecimal,
    #[serde_as(as = "PlainDecimal")]
    pub total_blob_fee: BigDecimal,
    #[serde_as(as = "PlainDecimal")]
    pub total_blob_as_calldata_fee: BigDecimal,
    pub avg_blob_fee: f64,
    pub avg_blob_as_calldata_fee: f64,
    pub avg_blob_gas_price: f64,
    pub updated_at: Option<String>,
}

impl OverallStats for BlockOverallStats {
    type Entity = block_overall_stats::Entity;

    const NAME: &'static str = "block_overall_stats";
}

impl From<block_overall_stats::Model> for BlockOverallStats {
    fn from(row: block_overall_stats::Model) -> Self {
        Self {
            total_blocks: row.total_blocks,
            total_blob_gas_used: row.total_blob_gas_used,
            total_blob_as_calldata_gas_used: row.total_blob_as_calldata_gas_used,
            total_blob_fee: row.total_blob_fee,
            total_blob_as_calldata_fee: row.total_blob_as_calldata_fee,
            avg_blob_fee: row.avg_blob_fee,
            avg_blob_as_calldata_fee: row.avg_blob_as_calldata_fee,
            avg_blob_gas_price: row.avg_blob_gas_price,
            updated_at: Some(format_updated_at(row.updated_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn reads_single_overall_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![transaction_overall_stats::Model {
                id: 1,
                total_transactions: 1_250_000,
                total_unique_senders: 3_400,
                total_unique_receivers: 2_100,
                avg_max_blob_gas_fee: 4.2e10,
                updated_at: DateTime::parse_from_rfc3339("2024-03-15T01:02:03+02:00").unwrap(),
            }]])
            .into_connection();

        let stats: TransactionOverallStats = get_overall_stats(&db).await.unwrap();

        assert_eq!(
            TransactionOverallStats {
                total_transactions: 1_250_000,
                total_unique_senders: 3_400,
                total_unique_receivers: 2_100,
                avg_max_blob_gas_fee: 4.2e10,
                updated_at: Some("2024-03-14T23:02:03.000Z".to_string()),
            },
            stats
        );
    }

    #[tokio::test]
    async fn missing_row_gives_zeros() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<blob_overall_stats::Model>::new()])
            .into_connection();

        let stats: BlobOverallStats = get_overall_stats(&db).await.unwrap();

        assert_eq!(
            BlobOverallStats {
                total_blobs: 0,
                total_unique_blobs: 0,
                total_blob_size: BigDecimal::from(0),
                avg_blob_size: 0.0,
                updated_at: None,
            },
            stats
        );
        assert_eq!(
            serde_json::json!({
                "totalBlobs": 0,
                "totalUniqueBlobs": 0,
                "totalBlobSize": "0",
                "avgBlobSize": 0.0,
                "updatedAt": null,
            }),
            serde_json::to_value(&stats).unwrap()
        );
    }

    #[tokio::test]
    async fn block_totals_are_decimal_strings() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![block_overall_stats::Model {
                id: 1,
                total_blocks: 42,
                total_blob_gas_used: BigDecimal::from(393216),
                total_blob_as_calldata_gas_used: BigDecimal::from(6291456),
                total_blob_fee: BigDecimal::new(100.into(), -16),
                total_blob_as_calldata_fee: BigDecimal::from(6291456000000000u64),
                avg_blob_fee: 9.36e12,
                avg_blob_as_calldata_fee: 1.49e14,
                avg_blob_gas_price: 1e9,
                updated_at: DateTime::parse_from_rfc3339("2024-03-15T00:00:00Z").unwrap(),
            }]])
            .into_connection();

        let stats: BlockOverallStats = get_overall_stats(&db).await.unwrap();

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!("393216", json["totalBlobGasUsed"]);
        assert_eq!("1000000000000000000", json["totalBlobFee"]);
        assert_eq!(Some("2024-03-15T00:00:00.000Z".to_string()), stats.updated_at);
    }
}
