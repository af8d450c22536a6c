//! Playback state: which video is loaded and whether it is paused.
//!
//! This type only tracks transitions. Catalog checks (existence, flags)
//! happen in the engine before any transition is attempted.

use crate::engine::EngineError;

/// Current playback state. At most one video is current at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::Stopped
    }

    /// ID of the current video, playing or paused
    pub fn current(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    /// Make `id` the playing video, returning the one that was current before
    pub fn play(&mut self, id: &str) -> Option<String> {
        let previous = self.stop().ok();
        *self = PlaybackState::Playing(id.to_string());
        log::debug!("Playback started: {}", id);
        previous
    }

    /// Stop playback, returning the stopped video's ID
    pub fn stop(&mut self) -> Result<String, EngineError> {
        match std::mem::take(self) {
            PlaybackState::Stopped => Err(EngineError::NoVideoPlaying),
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => {
                log::debug!("Playback stopped: {}", id);
                Ok(id)
            }
        }
    }

    /// Pause the playing video, returning its ID
    pub fn pause(&mut self) -> Result<String, EngineError> {
        match self {
            PlaybackState::Stopped => Err(EngineError::NoVideoPlaying),
            PlaybackState::Paused(id) => Err(EngineError::AlreadyPaused { id: id.clone() }),
            PlaybackState::Playing(id) => {
                let id = id.clone();
                log::debug!("Playback paused: {}", id);
                *self = PlaybackState::Paused(id.clone());
                Ok(id)
            }
        }
    }

    /// Resume a paused video, returning its ID
    pub fn resume(&mut self) -> Result<String, EngineError> {
        match self {
            PlaybackState::Stopped => Err(EngineError::NoVideoPlaying),
            PlaybackState::Playing(id) => Err(EngineError::NotPaused { id: id.clone() }),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                log::debug!("Playback resumed: {}", id);
                *self = PlaybackState::Playing(id.clone());
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PlaybackState::new();
        assert_eq!(state, PlaybackState::Stopped);
        assert!(state.current().is_none());
        assert!(!state.is_playing());
    }

    #[test]
    fn test_play_replaces_current() {
        let mut state = PlaybackState::new();
        assert_eq!(state.play("v1"), None);
        assert_eq!(state.play("v2"), Some("v1".to_string()));
        assert_eq!(state, PlaybackState::Playing("v2".to_string()));
    }

    #[test]
    fn test_play_from_paused() {
        let mut state = PlaybackState::Paused("v1".to_string());
        assert_eq!(state.play("v1"), Some("v1".to_string()));
        assert!(state.is_playing());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut state = PlaybackState::new();
        assert_eq!(state.pause(), Err(EngineError::NoVideoPlaying));
        assert_eq!(state.resume(), Err(EngineError::NoVideoPlaying));

        state.play("v1");
        assert_eq!(
            state.resume(),
            Err(EngineError::NotPaused { id: "v1".to_string() })
        );
        assert_eq!(state.pause(), Ok("v1".to_string()));
        assert!(state.is_paused());
        assert_eq!(
            state.pause(),
            Err(EngineError::AlreadyPaused { id: "v1".to_string() })
        );
        assert_eq!(state.resume(), Ok("v1".to_string()));
        assert_eq!(state, PlaybackState::Playing("v1".to_string()));
    }

    #[test]
    fn test_stop() {
        let mut state = PlaybackState::new();
        assert_eq!(state.stop(), Err(EngineError::NoVideoPlaying));

        state.play("v1");
        state.pause().unwrap();
        assert_eq!(state.stop(), Ok("v1".to_string()));
        assert_eq!(state, PlaybackState::Stopped);
    }
}
