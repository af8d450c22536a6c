//! Success details returned by engine operations

use crate::model::Video;

/// Result of starting playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Video that was implicitly stopped first, if any
    pub stopped: Option<Video>,

    /// Video now playing
    pub playing: Video,
}

/// Result of flagging a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    /// Set when the flagged video was current and got stopped
    pub stopped: Option<Video>,

    pub video: Video,

    pub reason: String,
}

/// A video together with its flag reason, for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub video: Video,
    pub flag: Option<String>,
}

/// The current video and whether it is paused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// A video added to or removed from a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistChange {
    /// Display name of the playlist
    pub playlist: String,
    pub video: Video,
}

/// One line of the playlist overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub name: String,
    pub len: usize,
}

/// Contents of a single playlist, resolved through the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}
