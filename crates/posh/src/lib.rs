#![deny(clippy::all)]

pub mod commands;
pub mod error;
pub mod handlers;
pub mod presenter;

pub use commands::Cli;
pub use commands::Commands;
pub use commands::OutputFormat;
pub use error::CliError;
pub use handlers::HandlerContext;
pub use handlers::HandlerResult;
