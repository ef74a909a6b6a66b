use crate::proto;
use blob_stats_logic::types;
use chrono::{DateTime, SecondsFormat, Utc};

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn blob_from_logic(blob: types::BlobView) -> proto::Blob {
    proto::Blob {
        versioned_hash: blob.versioned_hash,
        commitment: blob.commitment,
        proof: blob.proof,
        size: blob.size,
        data_storage_references: blob
            .data_storage_references
            .into_iter()
            .map(data_storage_reference_from_logic)
            .collect(),
        transactions: blob
            .transactions
            .into_iter()
            .map(blob_transaction_from_logic)
            .collect(),
    }
}

pub fn transaction_blobs_from_logic(
    items: Vec<types::BlobOnTransactionView>,
) -> proto::TransactionBlobs {
    proto::TransactionBlobs {
        items: items.into_iter().map(blob_on_transaction_from_logic).collect(),
    }
}

pub fn blob_on_transaction_from_logic(
    item: types::BlobOnTransactionView,
) -> proto::BlobOnTransaction {
    proto::BlobOnTransaction {
        index: item.index,
        blob_hash: item.blob_hash,
        block_hash: item.block_hash,
        block_number: item.block_number,
        block_timestamp: format_timestamp(item.block_timestamp),
        tx_hash: item.tx_hash,
        blob: Some(blob_base_from_logic(item.blob)),
        block: item.block.map(block_from_logic),
        transaction: item.transaction.map(transaction_from_logic),
    }
}

pub fn blob_base_from_logic(blob: types::BlobBaseView) -> proto::BlobBase {
    proto::BlobBase {
        versioned_hash: blob.versioned_hash,
        commitment: blob.commitment,
        proof: blob.proof,
        size: blob.size,
        data_storage_references: blob
            .data_storage_references
            .into_iter()
            .map(data_storage_reference_from_logic)
            .collect(),
    }
}

pub fn data_storage_reference_from_logic(
    reference: types::DataStorageReference,
) -> proto::DataStorageReference {
    proto::DataStorageReference {
        blob_storage: reference.blob_storage,
        data_reference: reference.data_reference,
    }
}

pub fn blob_transaction_from_logic(tx: types::BlobTransactionView) -> proto::BlobTransaction {
    proto::BlobTransaction {
        tx_hash: tx.tx_hash,
        index: tx.index,
        block_hash: tx.block_hash,
        block_number: tx.block_number,
        block_timestamp: format_timestamp(tx.block_timestamp),
        block: tx.block.map(block_from_logic),
        transaction: tx.transaction.map(transaction_from_logic),
    }
}

pub fn block_from_logic(block: types::BlockView) -> proto::Block {
    proto::Block {
        hash: block.hash,
        number: block.number,
        timestamp: format_timestamp(block.timestamp),
        slot: block.slot,
        blob_gas_used: block.blob_gas_used,
        blob_as_calldata_gas_used: block.blob_as_calldata_gas_used,
        blob_gas_price: block.blob_gas_price,
        excess_blob_gas: block.excess_blob_gas,
    }
}

pub fn transaction_from_logic(tx: types::TransactionView) -> proto::Transaction {
    proto::Transaction {
        hash: tx.hash,
        from: tx.from,
        to: tx.to,
        max_fee_per_blob_gas: tx.max_fee_per_blob_gas,
        blob_as_calldata_gas_used: tx.blob_as_calldata_gas_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn unexpanded_entities_stay_empty() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let blob = types::BlobView {
            versioned_hash: "0x01".to_string(),
            commitment: "0xc0".to_string(),
            proof: None,
            size: 131072,
            data_storage_references: vec![],
            transactions: vec![types::BlobTransactionView {
                tx_hash: "0xtx".to_string(),
                index: 2,
                block_hash: "0xblock".to_string(),
                block_number: 1001,
                block_timestamp: timestamp,
                block: None,
                transaction: Some(types::TransactionView {
                    hash: "0xtx".to_string(),
                    from: "0xf0".to_string(),
                    to: "0x70".to_string(),
                    max_fee_per_blob_gas: "1000000000".to_string(),
                    blob_as_calldata_gas_used: "2097152".to_string(),
                }),
            }],
        };

        let proto = blob_from_logic(blob);
        let tx = &proto.transactions[0];
        assert_eq!("2024-03-15T12:00:00.000Z", tx.block_timestamp);
        assert_eq!(None, tx.block);
        assert_eq!(Some("0xf0"), tx.transaction.as_ref().map(|tx| tx.from.as_str()));
        assert_eq!(None, proto.proof);
    }

    #[test]
    fn transaction_blobs_keep_order_and_nested_blob() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let item = |index| types::BlobOnTransactionView {
            index,
            blob_hash: "0x01".to_string(),
            block_hash: "0xblock".to_string(),
            block_number: 1001,
            block_timestamp: timestamp,
            tx_hash: "0xtx".to_string(),
            blob: types::BlobBaseView {
                versioned_hash: "0x01".to_string(),
                commitment: "0xc0".to_string(),
                proof: Some("0xp0".to_string()),
                size: 131072,
                data_storage_references: vec![types::DataStorageReference {
                    blob_storage: "google".to_string(),
                    data_reference: "1/01.txt".to_string(),
                }],
            },
            block: None,
            transaction: None,
        };

        let proto = transaction_blobs_from_logic(vec![item(0), item(1)]);
        assert_eq!(vec![0, 1], proto.items.iter().map(|item| item.index).collect::<Vec<_>>());
        let blob = proto.items[1].blob.as_ref().unwrap();
        assert_eq!(Some("0xp0".to_string()), blob.proof);
        assert_eq!("google", blob.data_storage_references[0].blob_storage);
        assert_eq!("2024-03-15T12:00:00.000Z", proto.items[0].block_timestamp);
    }
}
