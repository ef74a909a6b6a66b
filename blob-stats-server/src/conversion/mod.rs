use blob_stats_logic::ServiceError;

mod blobs;
mod stats;

pub use blobs::*;
pub use stats::*;

/// Upstream failures are logged here, the caller only gets the status.
pub fn map_service_error(err: ServiceError) -> tonic::Status {
    match &err {
        ServiceError::Convert(_) | ServiceError::NotFound(_) => {
            tracing::debug!(error = %err, "request rejected");
        }
        ServiceError::Db(_) | ServiceError::Internal(_) => {
            tracing::error!(error = ?err, "failed to handle request");
        }
    }
    err.into()
}
