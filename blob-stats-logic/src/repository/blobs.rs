use crate::{
    error::ServiceError,
    expands::Expands,
    metrics,
    projection::{blob_transactions_projection, blobs_on_transactions_projection, unflatten},
    types::{BlobOnTransactionView, BlobTransactionView, BlobView, DataStorageReference},
};
use anyhow::Context;
use blob_stats_entity::{blob_data_storage_references, blobs, blobs_on_transactions};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::instrument;

const QUERY_NAME: &str = "find_blob";
const TRANSACTION_BLOBS_QUERY_NAME: &str = "find_transaction_blobs";

pub async fn find_blob<C: ConnectionTrait>(
    db: &C,
    versioned_hash: &str,
    expands: &Expands,
) -> Result<BlobView, ServiceError> {
    let _timer = metrics::QUERY_TIME
        .with_label_values(&[QUERY_NAME])
        .start_timer();
    find_blob_inner(db, versioned_hash, expands)
        .await
        .inspect_err(|err| {
            if !matches!(err, ServiceError::NotFound(_)) {
                metrics::QUERY_ERRORS.with_label_values(&[QUERY_NAME]).inc();
            }
        })
}

#[instrument(skip(db), level = "debug", err(level = "warn"))]
async fn find_blob_inner<C: ConnectionTrait>(
    db: &C,
    versioned_hash: &str,
    expands: &Expands,
) -> Result<BlobView, ServiceError> {
    let blob = blobs::Entity::find_by_id(versioned_hash)
        .one(db)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("no blob with versioned hash '{versioned_hash}'"))
        })?;

    let data_storage_references = blob_data_storage_references::Entity::find()
        .filter(blob_data_storage_references::Column::BlobHash.eq(versioned_hash))
        .order_by_asc(blob_data_storage_references::Column::BlobStorage)
        .all(db)
        .await?
        .into_iter()
        .map(DataStorageReference::from)
        .collect();

    let transactions = find_blob_transactions(db, versioned_hash, expands).await?;

    Ok(BlobView::new(blob, data_storage_references, transactions))
}

/// Ordered by block number, then by position of the blob inside the transaction.
pub async fn find_blob_transactions<C: ConnectionTrait>(
    db: &C,
    versioned_hash: &str,
    expands: &Expands,
) -> Result<Vec<BlobTransactionView>, ServiceError> {
    let rows = blob_transactions_projection(expands)
        .apply(blobs_on_transactions::Entity::find())
        .filter(blobs_on_transactions::Column::BlobHash.eq(versioned_hash))
        .order_by_asc(blobs_on_transactions::Column::BlockNumber)
        .order_by_asc(blobs_on_transactions::Column::Index)
        .into_json()
        .all(db)
        .await?;

    decode_rows(rows)
}

/// Blobs carried by a transaction, ordered by their position inside it.
/// Unknown transactions have no blobs.
pub async fn find_transaction_blobs<C: ConnectionTrait>(
    db: &C,
    tx_hash: &str,
    expands: &Expands,
) -> Result<Vec<BlobOnTransactionView>, ServiceError> {
    let _timer = metrics::QUERY_TIME
        .with_label_values(&[TRANSACTION_BLOBS_QUERY_NAME])
        .start_timer();
    find_transaction_blobs_inner(db, tx_hash, expands)
        .await
        .inspect_err(|_| {
            metrics::QUERY_ERRORS
                .with_label_values(&[TRANSACTION_BLOBS_QUERY_NAME])
                .inc()
        })
}

#[instrument(skip(db), level = "debug", err(level = "warn"))]
async fn find_transaction_blobs_inner<C: ConnectionTrait>(
    db: &C,
    tx_hash: &str,
    expands: &Expands,
) -> Result<Vec<BlobOnTransactionView>, ServiceError> {
    let rows = blobs_on_transactions_projection(expands)
        .apply(blobs_on_transactions::Entity::find())
        .filter(blobs_on_transactions::Column::TxHash.eq(tx_hash))
        .order_by_asc(blobs_on_transactions::Column::Index)
        .into_json()
        .all(db)
        .await?;
    let mut views: Vec<BlobOnTransactionView> = decode_rows(rows)?;
    if views.is_empty() {
        return Ok(views);
    }

    let blob_hashes: Vec<&str> = views.iter().map(|view| view.blob_hash.as_str()).collect();
    let mut references: HashMap<String, Vec<DataStorageReference>> = HashMap::new();
    for reference in blob_data_storage_references::Entity::find()
        .filter(blob_data_storage_references::Column::BlobHash.is_in(blob_hashes))
        .order_by_asc(blob_data_storage_references::Column::BlobHash)
        .order_by_asc(blob_data_storage_references::Column::BlobStorage)
        .all(db)
        .await?
    {
        references
            .entry(reference.blob_hash.clone())
            .or_default()
            .push(DataStorageReference::from(reference));
    }

    for view in views.iter_mut() {
        view.blob.data_storage_references = references
            .get(&view.blob_hash)
            .cloned()
            .unwrap_or_default();
    }
    Ok(views)
}

fn decode_rows<T: DeserializeOwned>(rows: Vec<JsonValue>) -> Result<Vec<T>, ServiceError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(unflatten(row))
                .context("decoding projected row")
                .map_err(ServiceError::from)
        })
        .collect()
}
