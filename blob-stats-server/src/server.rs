use crate::{
    proto::{
        blob_stats_service_actix::route_blob_stats_service,
        blob_stats_service_server::BlobStatsServiceServer, health_actix::route_health,
        health_server::HealthServer,
    },
    services::{BlobStatsService, HealthService},
    settings::Settings,
};
use blockscout_service_launcher::{database, launcher, launcher::LaunchSettings, tracing};
use migration::Migrator;
use std::sync::Arc;

const SERVICE_NAME: &str = "blob_stats";

#[derive(Clone)]
struct Router {
    health: Arc<HealthService>,
    blob_stats: Arc<BlobStatsService>,
}

impl Router {
    pub fn grpc_router(&self) -> tonic::transport::server::Router {
        tonic::transport::Server::builder()
            .add_service(HealthServer::from_arc(self.health.clone()))
            .add_service(BlobStatsServiceServer::from_arc(self.blob_stats.clone()))
    }
}

impl launcher::HttpRouter for Router {
    fn register_routes(&self, service_config: &mut actix_web::web::ServiceConfig) {
        service_config.configure(|config| route_health(config, self.health.clone()));
        service_config
            .configure(|config| route_blob_stats_service(config, self.blob_stats.clone()));
    }
}

pub async fn run(settings: Settings) -> Result<(), anyhow::Error> {
    tracing::init_logs(SERVICE_NAME, &settings.tracing, &settings.jaeger)?;

    let db_connection = database::initialize_postgres::<Migrator>(&settings.database).await?;

    let health = Arc::new(HealthService::default());
    let blob_stats = Arc::new(BlobStatsService::new(db_connection, settings.api));

    let router = Router { health, blob_stats };

    let grpc_router = router.grpc_router();
    let http_router = router;

    let launch_settings = LaunchSettings {
        service_name: SERVICE_NAME.to_string(),
        server: settings.server,
        metrics: settings.metrics,
        graceful_shutdown: Default::default(),
    };

    launcher::launch(launch_settings, http_router, grpc_router).await
}
