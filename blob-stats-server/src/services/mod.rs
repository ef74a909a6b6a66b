mod blob_stats;
mod health;

pub use blob_stats::BlobStatsService;
pub use health::HealthService;
