use crate::blockscout::blob_stats::v1::{self as proto};

#[test]
fn daily_stats_request_without_timeframe() {
    let request: proto::GetDailyStatsRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(None, request.timeframe);
    let request: proto::GetDailyStatsRequest =
        serde_json::from_str(r#"{"timeframe": "30d"}"#).unwrap();
    assert_eq!(Some("30d".to_string()), request.timeframe);
}

#[test]
fn daily_stats_are_serialized_in_camel_case() {
    let stats = proto::TransactionDailyStats {
        days: vec!["2024-01-01T00:00:00.000Z".to_owned()],
        total_transactions: vec![10],
        total_unique_senders: vec![5],
        total_unique_receivers: vec![5],
        avg_max_blob_gas_fees: vec![0.0],
    };
    let value = serde_json::to_value(&stats).unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        vec![
            "avgMaxBlobGasFees",
            "days",
            "totalTransactions",
            "totalUniqueReceivers",
            "totalUniqueSenders",
        ],
        keys
    );
    assert_eq!(serde_json::json!(["2024-01-01T00:00:00.000Z"]), value["days"]);
}

#[test]
fn single_int64_is_string_and_repeated_int64_is_number() {
    let overall = proto::TransactionOverallStats {
        total_transactions: 10,
        total_unique_senders: 5,
        total_unique_receivers: 5,
        avg_max_blob_gas_fee: 1.5,
        updated_at: None,
    };
    let value = serde_json::to_value(&overall).unwrap();
    assert_eq!(serde_json::json!("10"), value["totalTransactions"]);
    assert_eq!(serde_json::json!(1.5), value["avgMaxBlobGasFee"]);

    let daily = proto::TransactionDailyStats {
        days: vec!["2024-01-01T00:00:00.000Z".to_owned()],
        total_transactions: vec![10],
        total_unique_senders: vec![5],
        total_unique_receivers: vec![5],
        avg_max_blob_gas_fees: vec![0.0],
    };
    let value = serde_json::to_value(&daily).unwrap();
    assert_eq!(serde_json::json!([10]), value["totalTransactions"]);
}

#[test]
fn unexpanded_blob_transaction_omits_related_entities() {
    let transaction = proto::BlobTransaction {
        tx_hash: "0xtx".to_owned(),
        index: 0,
        block_hash: "0xblock".to_owned(),
        block_number: 1001,
        block_timestamp: "2024-03-15T12:00:00.000Z".to_owned(),
        block: None,
        transaction: None,
    };
    let value = serde_json::to_value(&transaction).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("block"));
    assert!(!object.contains_key("transaction"));
    assert!(object.contains_key("blockNumber"));
    assert!(object.contains_key("txHash"));
}

#[test]
fn unexpanded_blob_on_transaction_keeps_nested_blob() {
    let item = proto::BlobOnTransaction {
        index: 1,
        blob_hash: "0x01".to_owned(),
        block_hash: "0xblock".to_owned(),
        block_number: 1001,
        block_timestamp: "2024-03-15T12:00:00.000Z".to_owned(),
        tx_hash: "0xtx".to_owned(),
        blob: Some(proto::BlobBase {
            versioned_hash: "0x01".to_owned(),
            commitment: "0xc0".to_owned(),
            proof: None,
            size: 131072,
            data_storage_references: vec![],
        }),
        block: None,
        transaction: None,
    };
    let value = serde_json::to_value(&item).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("block"));
    assert!(!object.contains_key("transaction"));
    assert_eq!(serde_json::json!("0xc0"), value["blob"]["commitment"]);
    assert!(value["blob"]["dataStorageReferences"].is_array());
}
