mod helpers;

use bigdecimal::BigDecimal;
use blob_stats_entity::{
    blob_data_storage_references, blob_overall_stats, blobs, blobs_on_transactions, blocks,
    transaction_daily_stats, transactions,
};
use blob_stats_logic::TimeFrame;
use blockscout_service_launcher::test_server;
use chrono::{DateTime, FixedOffset, Utc};
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};
use serde_json::{json, Value};
use std::str::FromStr;

const BLOB_HASH: &str = "0x01a0000000000000000000000000000000000000000000000000000000000001";
const TX_HASH: &str = "0xa1";
const BLOCK_HASH: &str = "0xb1";

fn decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

fn timestamp(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

async fn insert_blob(db: &DatabaseConnection) {
    let block_timestamp = timestamp("2024-03-15T12:00:00Z");
    blocks::Model {
        hash: BLOCK_HASH.to_string(),
        number: 1001,
        timestamp: block_timestamp,
        slot: 8_626_176,
        blob_gas_used: decimal("131072"),
        blob_as_calldata_gas_used: decimal("2097152"),
        blob_gas_price: decimal("1000000000000000000000"),
        excess_blob_gas: decimal("0"),
    }
    .into_active_model()
    .insert(db)
    .await
    .unwrap();
    transactions::Model {
        hash: TX_HASH.to_string(),
        block_hash: BLOCK_HASH.to_string(),
        block_number: 1001,
        block_timestamp,
        index: 4,
        from_id: "0xf0".to_string(),
        to_id: "0x70".to_string(),
        max_fee_per_blob_gas: decimal("1000000000"),
        blob_as_calldata_gas_used: decimal("2097152"),
    }
    .into_active_model()
    .insert(db)
    .await
    .unwrap();
    blobs::Model {
        versioned_hash: BLOB_HASH.to_string(),
        commitment: "0xc0".to_string(),
        proof: None,
        size: 131072,
        first_block_number: 1001,
    }
    .into_active_model()
    .insert(db)
    .await
    .unwrap();
    blob_data_storage_references::Model {
        blob_hash: BLOB_HASH.to_string(),
        blob_storage: "google".to_string(),
        data_reference: "1/01/a0/01a0.txt".to_string(),
    }
    .into_active_model()
    .insert(db)
    .await
    .unwrap();
    blobs_on_transactions::Model {
        tx_hash: TX_HASH.to_string(),
        index: 0,
        blob_hash: BLOB_HASH.to_string(),
        block_hash: BLOCK_HASH.to_string(),
        block_number: 1001,
        block_timestamp,
    }
    .into_active_model()
    .insert(db)
    .await
    .unwrap();
}

#[tokio::test]
#[ignore = "Needs database to run"]
async fn daily_stats_cover_requested_time_frame() {
    let db = helpers::init_db("daily_stats").await;
    let client = db.client();
    let today = Utc::now().date_naive();
    let updated_at = timestamp("2024-03-15T00:00:00Z");
    for (day, total_transactions) in [(today, 5), (TimeFrame::All.resolve(today).from, 7)] {
        transaction_daily_stats::Model {
            day,
            total_transactions,
            total_unique_senders: 2,
            total_unique_receivers: 3,
            avg_max_blob_gas_fee: 2e9,
            updated_at,
        }
        .into_active_model()
        .insert(client.as_ref())
        .await
        .unwrap();
    }

    let base = helpers::init_server(db.db_url()).await;
    let today_label = format!("{}T00:00:00.000Z", today.format("%Y-%m-%d"));

    let response: Value =
        test_server::send_get_request(&base, "/api/v1/stats/transactions/daily").await;
    assert_eq!(json!([today_label]), response["days"]);
    assert_eq!(json!([2e9]), response["avgMaxBlobGasFees"]);

    let response: Value =
        test_server::send_get_request(&base, "/api/v1/stats/transactions/daily?timeframe=All")
            .await;
    assert_eq!(2, response["days"].as_array().unwrap().len());
    assert_eq!(json!(today_label), response["days"][1]);

    let response: Value =
        test_server::send_get_request(&base, "/api/v1/charts/transactions/daily").await;
    assert_eq!(json!({"unit": "Gwei", "values": [2.0]}), response["avgMaxBlobGasFees"]);

    let status = reqwest::get(
        base.join("/api/v1/stats/transactions/daily?timeframe=2d")
            .unwrap(),
    )
    .await
    .expect("error sending request")
    .status();
    assert_eq!(reqwest::StatusCode::BAD_REQUEST, status);
}

#[tokio::test]
#[ignore = "Needs database to run"]
async fn overall_stats_default_to_zeros() {
    let db = helpers::init_db("overall_stats").await;
    blob_overall_stats::Model {
        id: 1,
        total_blobs: 3,
        total_unique_blobs: 2,
        total_blob_size: decimal("393216"),
        avg_blob_size: 131072.0,
        updated_at: timestamp("2024-03-15T12:30:00Z"),
    }
    .into_active_model()
    .insert(db.client().as_ref())
    .await
    .unwrap();

    let base = helpers::init_server(db.db_url()).await;

    let response: Value = test_server::send_get_request(&base, "/api/v1/stats/blobs/overall").await;
    assert_eq!(json!("393216"), response["totalBlobSize"]);
    assert_eq!(json!("2024-03-15T12:30:00.000Z"), response["updatedAt"]);

    let response: Value =
        test_server::send_get_request(&base, "/api/v1/stats/blocks/overall").await;
    assert_eq!(json!("0"), response["totalBlobFee"]);
    assert_eq!(Value::Null, response["updatedAt"]);
}

#[tokio::test]
#[ignore = "Needs database to run"]
async fn blob_lookup_expands_related_entities() {
    let db = helpers::init_db("blob_lookup").await;
    insert_blob(db.client().as_ref()).await;

    let base = helpers::init_server(db.db_url()).await;

    let response: Value =
        test_server::send_get_request(&base, &format!("/api/v1/blobs/{BLOB_HASH}")).await;
    assert_eq!(json!(BLOB_HASH), response["versionedHash"]);
    assert_eq!(
        json!([{"blobStorage": "google", "dataReference": "1/01/a0/01a0.txt"}]),
        response["dataStorageReferences"]
    );
    let transaction = &response["transactions"][0];
    assert_eq!(json!(TX_HASH), transaction["txHash"]);
    assert_eq!(json!("2024-03-15T12:00:00.000Z"), transaction["blockTimestamp"]);
    assert_eq!(Value::Null, transaction["block"]);
    assert_eq!(Value::Null, transaction["transaction"]);

    let response: Value = test_server::send_get_request(
        &base,
        &format!("/api/v1/blobs/{BLOB_HASH}?expand=block,transaction"),
    )
    .await;
    let transaction = &response["transactions"][0];
    assert_eq!(json!("1000000000000000000000"), transaction["block"]["blobGasPrice"]);
    assert_eq!(json!("0xf0"), transaction["transaction"]["from"]);
    assert_eq!(json!("1000000000"), transaction["transaction"]["maxFeePerBlobGas"]);

    let status = reqwest::get(base.join("/api/v1/blobs/0xmissing").unwrap())
        .await
        .expect("error sending request")
        .status();
    assert_eq!(reqwest::StatusCode::NOT_FOUND, status);

    let status = reqwest::get(
        base.join(&format!("/api/v1/blobs/{BLOB_HASH}?expand=blob")).unwrap(),
    )
    .await
    .expect("error sending request")
    .status();
    assert_eq!(reqwest::StatusCode::BAD_REQUEST, status);

    let response: Value = test_server::send_get_request(
        &base,
        &format!("/api/v1/transactions/{TX_HASH}/blobs?expand=block"),
    )
    .await;
    let item = &response["items"][0];
    assert_eq!(json!(BLOB_HASH), item["blobHash"]);
    assert_eq!(json!("0xc0"), item["blob"]["commitment"]);
    assert_eq!(json!("google"), item["blob"]["dataStorageReferences"][0]["blobStorage"]);
    assert_eq!(json!("131072"), item["block"]["blobGasUsed"]);
    assert_eq!(Value::Null, item["transaction"]);

    let response: Value =
        test_server::send_get_request(&base, "/api/v1/transactions/0xnone/blobs").await;
    assert_eq!(json!([]), response["items"]);
}
