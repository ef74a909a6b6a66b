use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            CREATE TABLE "transaction_daily_stats" (
                "day" date PRIMARY KEY,
                "total_transactions" integer NOT NULL DEFAULT 0,
                "total_unique_senders" integer NOT NULL DEFAULT 0,
                "total_unique_receivers" integer NOT NULL DEFAULT 0,
                "avg_max_blob_gas_fee" double precision NOT NULL DEFAULT 0,
                "updated_at" timestamptz NOT NULL DEFAULT now()
            );

            CREATE TABLE "blob_daily_stats" (
                "day" date PRIMARY KEY,
                "total_blobs" integer NOT NULL DEFAULT 0,
                "total_unique_blobs" integer NOT NULL DEFAULT 0,
                "total_blob_size" bigint NOT NULL DEFAULT 0,
                "avg_blob_size" double precision NOT NULL DEFAULT 0,
                "updated_at" timestamptz NOT NULL DEFAULT now()
            );

            CREATE TABLE "block_daily_stats" (
                "day" date PRIMARY KEY,
                "total_blocks" integer NOT NULL DEFAULT 0,
                "total_blob_gas_used" numeric(100, 0) NOT NULL DEFAULT 0,
                "total_blob_as_calldata_gas_used" numeric(100, 0) NOT NULL DEFAULT 0,
                "total_blob_fee" numeric(100, 0) NOT NULL DEFAULT 0,
                "total_blob_as_calldata_fee" numeric(100, 0) NOT NULL DEFAULT 0,
                "avg_blob_fee" double precision NOT NULL DEFAULT 0,
                "avg_blob_as_calldata_fee" double precision NOT NULL DEFAULT 0,
                "avg_blob_gas_price" double precision NOT NULL DEFAULT 0,
                "updated_at" timestamptz NOT NULL DEFAULT now()
            );

            CREATE TABLE "transaction_overall_stats" (
                "id" integer PRIMARY KEY CHECK ("id" = 1),
                "total_transactions" bigint NOT NULL DEFAULT 0,
                "total_unique_senders" bigint NOT NULL DEFAULT 0,
                "total_unique_receivers" bigint NOT NULL DEFAULT 0,
                "avg_max_blob_gas_fee" double precision NOT NULL DEFAULT 0,
                "updated_at" timestamptz NOT NULL DEFAULT now()
            );

            CREATE TABLE "blob_overall_stats" (
                "id" integer PRIMARY KEY CHECK ("id" = 1),
                "total_blobs" bigint NOT NULL DEFAULT 0,
                "total_unique_blobs" bigint NOT NULL DEFAULT 0,
                "total_blob_size" numeric(100, 0) NOT NULL DEFAULT 0,
                "avg_blob_size" double precision NOT NULL DEFAULT 0,
                "updated_at" timestamptz NOT NULL DEFAULT now()
            );

            CREATE TABLE "block_overall_stats" (
                "id" integer PRIMARY KEY CHECK ("id" = 1),
                "total_blocks" bigint NOT NULL DEFAULT 0,
                "total_blob_gas_used" numeric(100, 0) NOT NULL DEFAULT 0,
                "total_blob_as_calldata_gas_used" numeric(100, 0) NOT NULL DEFAULT 0,
                "total_blob_fee" numeric(100, 0) NOT NULL DEFAULT 0,
                "total_blob_as_calldata_fee" numeric(100, 0) NOT NULL DEFAULT 0,
                "avg_blob_fee" double precision NOT NULL DEFAULT 0,
                "avg_blob_as_calldata_fee" double precision NOT NULL DEFAULT 0,
                "avg_blob_gas_price" double precision NOT NULL DEFAULT 0,
                "updated_at" timestamptz NOT NULL DEFAULT now()
            );

            COMMENT ON TABLE "transaction_daily_stats" IS 'Per day transaction aggregates, written by the stats aggregation job';

            COMMENT ON TABLE "blob_daily_stats" IS 'Per day blob aggregates, written by the stats aggregation job';

            COMMENT ON TABLE "block_daily_stats" IS 'Per day block aggregates, written by the stats aggregation job';
        "#;
        crate::from_sql(manager, sql).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            DROP TABLE "block_overall_stats";
            DROP TABLE "blob_overall_stats";
            DROP TABLE "transaction_overall_stats";
            DROP TABLE "block_daily_stats";
            DROP TABLE "blob_daily_stats";
            DROP TABLE "transaction_daily_stats";
        "#;

        crate::from_sql(manager, sql).await
    }
}
