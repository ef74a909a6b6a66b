use sea_orm::DbErr;
use thiserror::Error;
use tonic::Code;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Convert(#[from] ParseError),
    #[error("db error: {0}")]
    Db(#[from] DbErr),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse error: invalid time frame '{0}'")]
    TimeFrame(String),
    #[error("parse error: unknown expand '{0}'")]
    Expand(String),
    #[error("parse error: {0}")]
    Custom(String),
}

impl From<ServiceError> for tonic::Status {
    fn from(err: ServiceError) -> Self {
        let code = match &err {
            ServiceError::Convert(_) => Code::InvalidArgument,
            ServiceError::NotFound(_) => Code::NotFound,
            ServiceError::Db(_) => Code::Internal,
            ServiceError::Internal(_) => Code::Internal,
        };
        tonic::Status::new(code, err.to_string())
    }
}
