mod decimal;
mod error;
mod expands;
pub mod metrics;
pub mod projection;
pub mod repository;
pub mod reshape;
pub mod stats;
mod time_frame;
pub mod types;

pub use decimal::{plain_decimal, PlainDecimal};
pub use error::{ParseError, ServiceError};
pub use expands::{Expand, Expands};
pub use time_frame::{parse_time_frame, TimeFrame, TimeInterval};
