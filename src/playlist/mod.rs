//! Playlist storage
//!
//! Playlists are identified by name, compared case-insensitively.

mod directory;

pub use directory::PlaylistDirectory;
