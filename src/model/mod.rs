//! Catalog data model
//!
//! Plain data types shared by the catalog, the playlist directory
//! and the engine. Videos are immutable once loaded.

mod playlist;
mod video;

pub use playlist::Playlist;
pub use video::Video;
