pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use crate::core::{
    emails::{count_valid_emails, is_valid_email, summarize_emails, validate_email, EmailRejection},
    etl::AuditEngine,
    measurements::{average_valid_measurements, summarize_measurements, MeasurementRejection},
    numeric::{parse_number, ConversionError},
    orders::{calculate_average_order_value, summarize_orders, OrderRejection},
    pipeline::AuditPipeline,
};
pub use utils::error::{AuditError, Result};
