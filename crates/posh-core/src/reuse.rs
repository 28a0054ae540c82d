//! Statically declared reuse identifiers for list and grid cell types.
//!
//! A cell type states the identifier it registers under as an associated
//! constant, instead of deriving it from its type name at runtime.
//!
//! ```ignore
//! struct ProfileCell;
//! posh_core::reuse_identifier!(ProfileCell);
//! assert_eq!(ProfileCell::REUSE_IDENTIFIER, "ProfileCell");
//! ```

pub trait ReuseIdentifier {
    const REUSE_IDENTIFIER: &'static str;
}

/// Identifier for `T`, usable where only the type is at hand.
pub fn reuse_identifier_of<T: ReuseIdentifier>() -> &'static str {
    T::REUSE_IDENTIFIER
}

/// Implements [`ReuseIdentifier`] for a type, using its name or an explicit
/// identifier.
#[macro_export]
macro_rules! reuse_identifier {
    ($ty:ident) => {
        impl $crate::reuse::ReuseIdentifier for $ty {
            const REUSE_IDENTIFIER: &'static str = stringify!($ty);
        }
    };
    ($ty:ty => $id:expr) => {
        impl $crate::reuse::ReuseIdentifier for $ty {
            const REUSE_IDENTIFIER: &'static str = $id;
        }
    };
}
