pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use client::{ApiError, GateClient};
pub use config::{AppConfig, load_config};
pub use transport::{ErrorReporter, GateStore, ReportingStore, RequestOptions};
pub use types::{ErrorBody, GateList, QualityGate, ValidationMessage};
