//! Engine failure taxonomy

use thiserror::Error;

/// Why an engine operation was refused.
///
/// Every variant is an expected, user-facing condition. The message is the
/// reason only; the shell prefixes it with the command that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Video does not exist")]
    VideoNotFound { id: String },

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { id: String, reason: String },

    #[error("Playlist does not exist")]
    PlaylistNotFound { name: String },

    #[error("A playlist with the same name already exists")]
    DuplicateName { name: String },

    #[error("Video already added")]
    AlreadyInPlaylist { playlist: String, id: String },

    #[error("Video is not in playlist")]
    NotInPlaylist { playlist: String, id: String },

    #[error("No video is currently playing")]
    NoVideoPlaying,

    #[error("Video already paused")]
    AlreadyPaused { id: String },

    #[error("Video is not paused")]
    NotPaused { id: String },

    #[error("No videos available")]
    CatalogEmpty,

    #[error("Video is already flagged")]
    AlreadyFlagged { id: String },

    #[error("Video is not flagged")]
    NotFlagged { id: String },

    #[error("No search results for {term}")]
    NoResults { term: String },

    #[error("Invalid tag {tag}: tags must start with '#'")]
    InvalidTag { tag: String },

    #[error("Video id must not be empty")]
    EmptyId,
}

/// Bare failure kind, without context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    VideoNotFound,
    VideoFlagged,
    PlaylistNotFound,
    DuplicateName,
    AlreadyInPlaylist,
    NotInPlaylist,
    NoVideoPlaying,
    AlreadyPaused,
    NotPaused,
    CatalogEmpty,
    AlreadyFlagged,
    NotFlagged,
    NoResults,
    InvalidTag,
    EmptyId,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::VideoNotFound { .. } => ErrorKind::VideoNotFound,
            EngineError::VideoFlagged { .. } => ErrorKind::VideoFlagged,
            EngineError::PlaylistNotFound { .. } => ErrorKind::PlaylistNotFound,
            EngineError::DuplicateName { .. } => ErrorKind::DuplicateName,
            EngineError::AlreadyInPlaylist { .. } => ErrorKind::AlreadyInPlaylist,
            EngineError::NotInPlaylist { .. } => ErrorKind::NotInPlaylist,
            EngineError::NoVideoPlaying => ErrorKind::NoVideoPlaying,
            EngineError::AlreadyPaused { .. } => ErrorKind::AlreadyPaused,
            EngineError::NotPaused { .. } => ErrorKind::NotPaused,
            EngineError::CatalogEmpty => ErrorKind::CatalogEmpty,
            EngineError::AlreadyFlagged { .. } => ErrorKind::AlreadyFlagged,
            EngineError::NotFlagged { .. } => ErrorKind::NotFlagged,
            EngineError::NoResults { .. } => ErrorKind::NoResults,
            EngineError::InvalidTag { .. } => ErrorKind::InvalidTag,
            EngineError::EmptyId => ErrorKind::EmptyId,
        }
    }
}
