use crate::{
    conversion::{self, map_service_error},
    proto::{
        blob_stats_service_server::BlobStatsService as BlobStats, Blob, BlobDailyCharts,
        BlobDailyStats, BlobOverallStats, BlockDailyCharts, BlockDailyStats, BlockOverallStats,
        GetBlobRequest, GetDailyStatsRequest, GetOverallStatsRequest, GetTransactionBlobsRequest,
        TransactionBlobs, TransactionDailyCharts, TransactionDailyStats, TransactionOverallStats,
    },
    settings::ApiSettings,
};
use blob_stats_logic::{
    parse_time_frame,
    repository::blobs,
    reshape::Reshape,
    stats::{self, DailyStatsSeries, OverallStats},
    Expands, ServiceError, TimeInterval,
};
use sea_orm::DatabaseConnection;
use tonic::{Request, Response, Status};

pub struct BlobStatsService {
    db: DatabaseConnection,
    settings: ApiSettings,
}

impl BlobStatsService {
    pub fn new(db: DatabaseConnection, settings: ApiSettings) -> Self {
        Self { db, settings }
    }

    fn interval(&self, request: &GetDailyStatsRequest) -> Result<TimeInterval, Status> {
        let time_frame = parse_time_frame(
            request.timeframe.as_deref(),
            self.settings.default_timeframe,
        )
        .map_err(|err| map_service_error(err.into()))?;
        Ok(time_frame.resolve_now())
    }

    async fn daily<S: DailyStatsSeries>(
        &self,
        request: Request<GetDailyStatsRequest>,
    ) -> Result<S, Status> {
        let interval = self.interval(request.get_ref())?;
        stats::get_daily_stats::<S, _>(&self.db, &interval)
            .await
            .map_err(map_service_error)
    }

    async fn overall<S: OverallStats>(&self) -> Result<S, Status> {
        stats::get_overall_stats::<S, _>(&self.db)
            .await
            .map_err(map_service_error)
    }
}

#[async_trait::async_trait]
impl BlobStats for BlobStatsService {
    async fn get_transaction_daily_stats(
        &self,
        request: Request<GetDailyStatsRequest>,
    ) -> Result<Response<TransactionDailyStats>, Status> {
        let stats = self.daily::<stats::TransactionDailyStats>(request).await?;
        Ok(Response::new(conversion::transaction_daily_stats_from_logic(stats)))
    }

    async fn get_blob_daily_stats(
        &self,
        request: Request<GetDailyStatsRequest>,
    ) -> Result<Response<BlobDailyStats>, Status> {
        let stats = self.daily::<stats::BlobDailyStats>(request).await?;
        Ok(Response::new(conversion::blob_daily_stats_from_logic(stats)))
    }

    async fn get_block_daily_stats(
        &self,
        request: Request<GetDailyStatsRequest>,
    ) -> Result<Response<BlockDailyStats>, Status> {
        let stats = self.daily::<stats::BlockDailyStats>(request).await?;
        Ok(Response::new(conversion::block_daily_stats_from_logic(stats)))
    }

    async fn get_transaction_daily_charts(
        &self,
        request: Request<GetDailyStatsRequest>,
    ) -> Result<Response<TransactionDailyCharts>, Status> {
        let stats = self.daily::<stats::TransactionDailyStats>(request).await?;
        Ok(Response::new(
            conversion::transaction_daily_charts_from_logic(stats.reshape()),
        ))
    }

    async fn get_blob_daily_charts(
        &self,
        request: Request<GetDailyStatsRequest>,
    ) -> Result<Response<BlobDailyCharts>, Status> {
        let stats = self.daily::<stats::BlobDailyStats>(request).await?;
        Ok(Response::new(conversion::blob_daily_charts_from_logic(stats.reshape())))
    }

    async fn get_block_daily_charts(
        &self,
        request: Request<GetDailyStatsRequest>,
    ) -> Result<Response<BlockDailyCharts>, Status> {
        let stats = self.daily::<stats::BlockDailyStats>(request).await?;
        Ok(Response::new(conversion::block_daily_charts_from_logic(stats.reshape())))
    }

    async fn get_transaction_overall_stats(
        &self,
        _request: Request<GetOverallStatsRequest>,
    ) -> Result<Response<TransactionOverallStats>, Status> {
        let stats = self.overall::<stats::TransactionOverallStats>().await?;
        Ok(Response::new(conversion::transaction_overall_stats_from_logic(stats)))
    }

    async fn get_blob_overall_stats(
        &self,
        _request: Request<GetOverallStatsRequest>,
    ) -> Result<Response<BlobOverallStats>, Status> {
        let stats = self.overall::<stats::BlobOverallStats>().await?;
        Ok(Response::new(conversion::blob_overall_stats_from_logic(stats)))
    }

    async fn get_block_overall_stats(
        &self,
        _request: Request<GetOverallStatsRequest>,
    ) -> Result<Response<BlockOverallStats>, Status> {
        let stats = self.overall::<stats::BlockOverallStats>().await?;
        Ok(Response::new(conversion::block_overall_stats_from_logic(stats)))
    }

    async fn get_blob(&self, request: Request<GetBlobRequest>) -> Result<Response<Blob>, Status> {
        let inner = request.into_inner();
        let expands = parse_expands(inner.expand.as_deref())?;

        let blob = blobs::find_blob(&self.db, inner.hash.trim(), &expands)
            .await
            .map_err(map_service_error)?;
        Ok(Response::new(conversion::blob_from_logic(blob)))
    }

    async fn get_transaction_blobs(
        &self,
        request: Request<GetTransactionBlobsRequest>,
    ) -> Result<Response<TransactionBlobs>, Status> {
        let inner = request.into_inner();
        let expands = parse_expands(inner.expand.as_deref())?;

        let items = blobs::find_transaction_blobs(&self.db, inner.hash.trim(), &expands)
            .await
            .map_err(map_service_error)?;
        Ok(Response::new(conversion::transaction_blobs_from_logic(items)))
    }
}

fn parse_expands(raw: Option<&str>) -> Result<Expands, Status> {
    raw.unwrap_or_default()
        .parse::<Expands>()
        .map_err(|err| map_service_error(ServiceError::from(err)))
}
