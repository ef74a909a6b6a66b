use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            CREATE TABLE "blocks" (
                "hash" text PRIMARY KEY,
                "number" bigint NOT NULL UNIQUE,
                "timestamp" timestamptz NOT NULL,
                "slot" bigint NOT NULL,
                "blob_gas_used" numeric(100, 0) NOT NULL,
                "blob_as_calldata_gas_used" numeric(100, 0) NOT NULL,
                "blob_gas_price" numeric(100, 0) NOT NULL,
                "excess_blob_gas" numeric(100, 0) NOT NULL
            );

            CREATE TABLE "transactions" (
                "hash" text PRIMARY KEY,
                "block_hash" text NOT NULL REFERENCES "blocks"("hash"),
                "block_number" bigint NOT NULL,
                "block_timestamp" timestamptz NOT NULL,
                "index" integer NOT NULL,
                "from_id" text NOT NULL,
                "to_id" text NOT NULL,
                "max_fee_per_blob_gas" numeric(100, 0) NOT NULL,
                "blob_as_calldata_gas_used" numeric(100, 0) NOT NULL
            );

            CREATE INDEX "transactions_block_number_index" ON "transactions" ("block_number");

            CREATE TABLE "blobs" (
                "versioned_hash" text PRIMARY KEY,
                "commitment" text NOT NULL UNIQUE,
                "proof" text,
                "size" integer NOT NULL,
                "first_block_number" bigint NOT NULL
            );

            CREATE TABLE "blob_data_storage_references" (
                "blob_hash" text NOT NULL REFERENCES "blobs"("versioned_hash"),
                "blob_storage" text NOT NULL,
                "data_reference" text NOT NULL,
                PRIMARY KEY ("blob_hash", "blob_storage")
            );

            CREATE TABLE "blobs_on_transactions" (
                "tx_hash" text NOT NULL REFERENCES "transactions"("hash"),
                "index" integer NOT NULL,
                "blob_hash" text NOT NULL REFERENCES "blobs"("versioned_hash"),
                "block_hash" text NOT NULL REFERENCES "blocks"("hash"),
                "block_number" bigint NOT NULL,
                "block_timestamp" timestamptz NOT NULL,
                PRIMARY KEY ("tx_hash", "index")
            );

            CREATE INDEX "blobs_on_transactions_blob_hash_index" ON "blobs_on_transactions" ("blob_hash");

            COMMENT ON TABLE "blocks" IS 'Execution layer blocks containing blob transactions';

            COMMENT ON TABLE "blobs_on_transactions" IS 'Links blobs to the transactions that carry them';
        "#;
        crate::from_sql(manager, sql).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            DROP TABLE "blobs_on_transactions";
            DROP TABLE "blob_data_storage_references";
            DROP TABLE "blobs";
            DROP TABLE "transactions";
            DROP TABLE "blocks";
        "#;

        crate::from_sql(manager, sql).await
    }
}
