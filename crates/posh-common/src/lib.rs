#![deny(clippy::all)]

//! Shared utilities used by every posh crate: error categories, environment
//! configuration, tracing setup and terminal colors.

mod color;
pub mod config;
pub mod error_codes;
pub mod telemetry;

pub use color::Colors;
pub use color::init as color_init;
pub use color::is_disabled as color_is_disabled;
pub use config::PoshConfig;
pub use error_codes::ErrorCategory;
pub use telemetry::TelemetryGuard;
pub use telemetry::init_tracing;
