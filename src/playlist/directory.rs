use crate::engine::EngineError;
use crate::model::Playlist;
use std::collections::HashMap;

/// Owns every playlist, keyed by lowercased name
#[derive(Debug, Clone, Default)]
pub struct PlaylistDirectory {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist, keeping the given case for display
    pub fn create(&mut self, name: &str) -> Result<&Playlist, EngineError> {
        let key = Playlist::normalize(name);
        if self.playlists.contains_key(&key) {
            return Err(EngineError::DuplicateName {
                name: name.to_string(),
            });
        }

        log::debug!("Creating playlist {:?}", name);
        Ok(self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string())))
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Result<&Playlist, EngineError> {
        self.playlists
            .get(&Playlist::normalize(name))
            .ok_or_else(|| EngineError::PlaylistNotFound {
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, EngineError> {
        self.playlists
            .get_mut(&Playlist::normalize(name))
            .ok_or_else(|| EngineError::PlaylistNotFound {
                name: name.to_string(),
            })
    }

    /// Empty a playlist, keeping the playlist itself
    pub fn clear(&mut self, name: &str) -> Result<&Playlist, EngineError> {
        let playlist = self.get_mut(name)?;
        log::debug!("Clearing playlist {:?} ({} videos)", playlist.name, playlist.len());
        playlist.clear();
        Ok(&*playlist)
    }

    /// Remove a playlist entirely, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist, EngineError> {
        let playlist = self
            .playlists
            .remove(&Playlist::normalize(name))
            .ok_or_else(|| EngineError::PlaylistNotFound {
                name: name.to_string(),
            })?;
        log::debug!("Deleted playlist {:?}", playlist.name);
        Ok(playlist)
    }

    /// All playlists, sorted case-insensitively by name
    pub fn list_all(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by(|a, b| a.key().cmp(b.key()).then_with(|| a.name.cmp(&b.name)));
        playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
