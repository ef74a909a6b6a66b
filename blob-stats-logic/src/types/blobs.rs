use blob_stats_entity::{blob_data_storage_references, blobs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStorageReference {
    pub blob_storage: String,
    pub data_reference: String,
}

impl From<blob_data_storage_references::Model> for DataStorageReference {
    fn from(model: blob_data_storage_references::Model) -> Self {
        Self {
            blob_storage: model.blob_storage,
            data_reference: model.data_reference,
        }
    }
}

/// Wei and gas amounts are decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    pub hash: String,
    pub number: i64,
    pub timestamp: DateTime<Utc>,
    pub slot: i64,
    pub blob_gas_used: String,
    pub blob_as_calldata_gas_used: String,
    pub blob_gas_price: String,
    pub excess_blob_gas: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub max_fee_per_blob_gas: String,
    pub blob_as_calldata_gas_used: String,
}

/// A transaction carrying the blob. `block` and `transaction`
/// are only present when the matching expansion was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobTransactionView {
    pub tx_hash: String,
    pub index: i32,
    pub block_hash: String,
    pub block_number: i64,
    pub block_timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobView {
    pub versioned_hash: String,
    pub commitment: String,
    pub proof: Option<String>,
    pub size: i32,
    pub data_storage_references: Vec<DataStorageReference>,
    pub transactions: Vec<BlobTransactionView>,
}

impl BlobView {
    pub fn new(
        blob: blobs::Model,
        data_storage_references: Vec<DataStorageReference>,
        transactions: Vec<BlobTransactionView>,
    ) -> Self {
        Self {
            versioned_hash: blob.versioned_hash,
            commitment: blob.commitment,
            proof: blob.proof,
            size: blob.size,
            data_storage_references,
            transactions,
        }
    }
}

/// Blob fields without its transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobBaseView {
    pub versioned_hash: String,
    pub commitment: String,
    pub proof: Option<String>,
    pub size: i32,
    #[serde(default)]
    pub data_storage_references: Vec<DataStorageReference>,
}

/// A blob as carried by one transaction. `block` and `transaction`
/// are only present when the matching expansion was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobOnTransactionView {
    pub index: i32,
    pub blob_hash: String,
    pub block_hash: String,
    pub block_number: i64,
    pub block_timestamp: DateTime<Utc>,
    pub tx_hash: String,
    pub blob: BlobBaseView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionView>,
}
