//! Video catalog
//!
//! The engine consumes the catalog through the [`Catalog`] trait.
//! [`VideoLibrary`] is the in-memory implementation used by the shell.

mod library;
mod traits;

pub use library::VideoLibrary;
pub use traits::Catalog;
