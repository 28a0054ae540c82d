//! Small, stateless helpers for user-facing text and values.
//!
//! Every function here is pure and synchronous. Errors are reported through
//! [`CoreError`], whose [`category`](CoreError::category) tells callers how to
//! react without matching on variants.

#![deny(clippy::all)]

pub mod color;
pub mod date;
mod error;
pub mod queue;
pub mod reuse;
pub mod text;

pub use color::Color;
pub use color::Rgba;
pub use color::darken;
pub use date::medium_timestamp;
pub use date::start_of_day;
pub use date::start_of_next_day;
pub use error::CoreError;
pub use queue::BoundedQueue;
pub use queue::append_bounded;
pub use reuse::ReuseIdentifier;
pub use reuse::reuse_identifier_of;
pub use text::JoinOptions;
pub use text::SingleGroupPattern;
pub use text::extract_match;
pub use text::join;
pub use text::join_list;
pub use text::none_if_blank;
pub use text::ordinal;
pub use text::ordinal_suffix;
