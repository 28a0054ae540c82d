//! Text helpers: list joining, ordinals, single-group extraction and blank
//! normalisation.

mod blank;
mod list;
mod ordinal;
mod pattern;

pub use blank::none_if_blank;
pub use list::JoinOptions;
pub use list::join;
pub use list::join_list;
pub use ordinal::ordinal;
pub use ordinal::ordinal_suffix;
pub use pattern::SingleGroupPattern;
pub use pattern::extract_match;
