mod conversion;
mod proto;
mod server;
mod services;
mod settings;

pub use server::run;
pub use settings::{ApiSettings, Settings};
