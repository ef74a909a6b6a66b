use actix_prost_build::{ActixGenerator, GeneratorList};
use prost_build::{Config, ServiceGenerator};
use std::path::Path;

// custom function to include custom generator
fn compile(
    protos: &[impl AsRef<Path>],
    includes: &[impl AsRef<Path>],
    generator: Box<dyn ServiceGenerator>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::new();
    config
        .service_generator(generator)
        .bytes(["."])
        .type_attribute(
            ".blockscout.blob_stats",
            "#[actix_prost_macros::serde(rename_all=\"camelCase\")]",
        )
        .type_attribute(
            ".grpc.health",
            "#[actix_prost_macros::serde(rename_all=\"snake_case\")]",
        )
        .field_attribute(
            ".blockscout.blob_stats.v1.BlobTransaction.block",
            "#[serde(skip_serializing_if = \"Option::is_none\")]",
        )
        .field_attribute(
            ".blockscout.blob_stats.v1.BlobTransaction.transaction",
            "#[serde(skip_serializing_if = \"Option::is_none\")]",
        )
        .field_attribute(
            ".blockscout.blob_stats.v1.BlobOnTransaction.block",
            "#[serde(skip_serializing_if = \"Option::is_none\")]",
        )
        .field_attribute(
            ".blockscout.blob_stats.v1.BlobOnTransaction.transaction",
            "#[serde(skip_serializing_if = \"Option::is_none\")]",
        );

    default_fields(
        &mut config,
        &[
            ".grpc.health.v1.HealthCheckRequest.service",
            ".blockscout.blob_stats.v1.GetDailyStatsRequest.timeframe",
            ".blockscout.blob_stats.v1.GetBlobRequest.expand",
            ".blockscout.blob_stats.v1.GetTransactionBlobsRequest.expand",
        ],
    );
    config.compile_protos(protos, includes)?;
    Ok(())
}

fn default_fields(config: &mut Config, fields: &[&str]) {
    for field in fields {
        config.field_attribute(field, "#[serde(default)]");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // We need to rebuild proto lib only if any of proto definitions
    // (or corresponding http mapping) has been changed.
    println!("cargo:rerun-if-changed=proto/");

    let gens = Box::new(GeneratorList::new(vec![
        tonic_build::configure().service_generator(),
        Box::new(ActixGenerator::new("proto/api_config_http.yaml").unwrap()),
    ]));
    compile(
        &["proto/blob_stats.proto", "proto/health.proto"],
        &["proto"],
        gens,
    )?;
    Ok(())
}
