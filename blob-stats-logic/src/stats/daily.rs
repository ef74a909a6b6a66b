use crate::{
    decimal::PlainDecimal, error::ServiceError, metrics, time_frame::TimeInterval,
};
use bigdecimal::BigDecimal;
use blob_stats_entity::{blob_daily_stats, block_daily_stats, transaction_daily_stats};
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::Serialize;
use serde_with::serde_as;
use tracing::instrument;

pub fn day_start(date: &NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// `2024-01-01` -> `2024-01-01T00:00:00.000Z`
pub fn format_day(date: &NaiveDate) -> String {
    day_start(date).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parallel arrays accumulated from the daily aggregates of one category.
///
/// Implementors destructure the whole row in [`DailyStatsSeries::push`],
/// so adding a column to the table does not compile until the series
/// decides what to do with it.
pub trait DailyStatsSeries: Default + Send {
    type Entity: EntityTrait;

    /// Used as a label for logs and metrics.
    const NAME: &'static str;

    fn day_column() -> <Self::Entity as EntityTrait>::Column;

    fn push(&mut self, row: <Self::Entity as EntityTrait>::Model);

    fn days(&self) -> &[String];

    fn len(&self) -> usize {
        self.days().len()
    }

    fn is_empty(&self) -> bool {
        self.days().is_empty()
    }
}

pub fn daily_stats_query<S: DailyStatsSeries>(interval: &TimeInterval) -> Select<S::Entity> {
    S::Entity::find()
        .filter(S::day_column().gte(interval.from))
        .filter(S::day_column().lte(interval.to))
        .order_by_asc(S::day_column())
}

#[instrument(
    name = "get_daily_stats",
    skip_all,
    fields(series = S::NAME, from = %interval.from, to = %interval.to),
    level = "debug"
)]
pub async fn get_daily_stats<S, C>(db: &C, interval: &TimeInterval) -> Result<S, ServiceError>
where
    S: DailyStatsSeries,
    C: ConnectionTrait,
{
    let _timer = metrics::QUERY_TIME
        .with_label_values(&[S::NAME])
        .start_timer();
    let rows = daily_stats_query::<S>(interval)
        .all(db)
        .await
        .inspect_err(|_| metrics::QUERY_ERRORS.with_label_values(&[S::NAME]).inc())?;

    let series = rows.into_iter().fold(S::default(), |mut series, row| {
        series.push(row);
        series
    });
    tracing::debug!(series = S::NAME, days = series.len(), "daily stats read");
    Ok(series)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDailyStats {
    pub days: Vec<String>,
    pub total_transactions: Vec<i64>,
    pub total_unique_senders: Vec<i64>,
    pub total_unique_receivers: Vec<i64>,
    pub avg_max_blob_gas_fees: Vec<f64>,
}

impl DailyStatsSeries for TransactionDailyStats {
    type Entity = transaction_daily_stats::Entity;

    const NAME: &'static str = "transaction_daily_stats";

    fn day_column() -> transaction_daily_stats::Column {
        transaction_daily_stats::Column::Day
    }

    fn push(&mut self, row: transaction_daily_stats::Model) {
        let transaction_daily_stats::Model {
            day,
            total_transactions,
            total_unique_senders,
            total_unique_receivers,
            avg_max_blob_gas_fee,
            updated_at: _,
        } = row;
        self.days.push(format_day(&day));
        self.total_transactions.push(total_transactions.into());
        self.total_unique_senders.push(total_unique_senders.into());
        self.total_unique_receivers
            .push(total_unique_receivers.into());
        self.avg_max_blob_gas_fees.push(avg_max_blob_gas_fee);
    }

    fn days(&self) -> &[String] {
        &self.days
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobDailyStats {
    pub days: Vec<String>,
    pub total_blobs: Vec<i64>,
    pub total_unique_blobs: Vec<i64>,
    pub total_blob_sizes: Vec<i64>,
    pub avg_blob_sizes: Vec<f64>,
}

impl DailyStatsSeries for BlobDailyStats {
    type Entity = blob_daily_stats::Entity;

    const NAME: &'static str = "blob_daily_stats";

    fn day_column() -> blob_daily_stats::Column {
        blob_daily_stats::Column::Day
    }

    fn push(&mut self, row: blob_daily_stats::Model) {
        let blob_daily_stats::Model {
            day,
            total_blobs,
            total_unique_blobs,
            total_blob_size,
            avg_blob_size,
            updated_at: _,
        } = row;
        self.days.push(format_day(&day));
        self.total_blobs.push(total_blobs.into());
        self.total_unique_blobs.push(total_unique_blobs.into());
        self.total_blob_sizes.push(total_blob_size);
        self.avg_blob_sizes.push(avg_blob_size);
    }

    fn days(&self) -> &[String] {
        &self.days
    }
}

/// Gas and wei totals do not fit into 64-bit integers in general
/// and are serialized as decimal strings.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDailyStats {
    pub days: Vec<String>,
    pub total_blocks: Vec<i64>,
    #[serde_as(as = "Vec<PlainDecimal>")]
    pub total_blob_gas_used: Vec<BigDecimal>,
    #[serde_as(as = "Vec<PlainDecimal>")]
    pub total_blob_as_calldata_gas_used: Vec<BigDecimal>,
    #[serde_as(as = "Vec<PlainDecimal>")]
    pub total_blob_fees: Vec<BigDecimal>,
    #[serde_as(as = "Vec<PlainDecimal>")]
    pub total_blob_as_calldata_fees: Vec<BigDecimal>,
    pub avg_blob_fees: Vec<f64>,
    pub avg_blob_as_calldata_fees: Vec<f64>,
    pub avg_blob_gas_prices: Vec<f64>,
}

impl DailyStatsSeries for BlockDailyStats {
    type Entity = block_daily_stats::Entity;

    const NAME: &'static str = "block_daily_stats";

    fn day_column() -> block_daily_stats::Column {
        block_daily_stats::Column::Day
    }

    fn push(&mut self, row: block_daily_stats::Model) {
        let block_daily_stats::Model {
            day,
            total_blocks,
            total_blob_gas_used,
            total_blob_as_calldata_gas_used,
            total_blob_fee,
            total_blob_as_calldata_fee,
            avg_blob_fee,
            avg_blob_as_calldata_fee,
            avg_blob_gas_price,
            updated_at: _,
        } = row;
        self.days.push(format_day(&day));
        self.total_blocks.push(total_blocks.into());
        self.total_blob_gas_used.push(total_blob_gas_used);
        self.total_blob_as_calldata_gas_used
            .push(total_blob_as_calldata_gas_used);
        self.total_blob_fees.push(total_blob_fee);
        self.total_blob_as_calldata_fees
            .push(total_blob_as_calldata_fee);
        self.avg_blob_fees.push(avg_blob_fee);
        self.avg_blob_as_calldata_fees
            .push(avg_blob_as_calldata_fee);
        self.avg_blob_gas_prices.push(avg_blob_gas_price);
    }

    fn days(&self) -> &[String] {
        &self.days
    }
}
