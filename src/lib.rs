//! Video Catalog - in-memory video library browser
//!
//! A fixed catalog of videos can be listed, searched, played one at a time
//! and organized into playlists. Videos can be flagged to block playback.
//! All rules live in [`Engine`]; the [`shell`] renders outcomes as text.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod loader;
pub mod model;
pub mod playback;
pub mod playlist;
pub mod shell;

pub use config::SessionConfig;
pub use engine::{Engine, EngineError, ErrorKind};
pub use shell::Session;
