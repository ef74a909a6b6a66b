pub use blob_stats_proto::blockscout::blob_stats::v1::{
    blob_stats_service_actix, blob_stats_service_server, Blob, BlobBase, BlobDailyCharts,
    BlobDailyStats, BlobOnTransaction, BlobOverallStats, BlobTransaction, Block,
    BlockDailyCharts, BlockDailyStats, BlockOverallStats, DataStorageReference, GetBlobRequest,
    GetDailyStatsRequest, GetOverallStatsRequest, GetTransactionBlobsRequest, ScaledValues,
    Transaction, TransactionBlobs, TransactionDailyCharts, TransactionDailyStats,
    TransactionOverallStats,
};

pub use blob_stats_proto::grpc::health::v1::{
    health_actix, health_check_response, health_server, HealthCheckRequest, HealthCheckResponse,
};
