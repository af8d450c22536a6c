//! Playback and playlist rules engine
//!
//! [`Engine`] owns the catalog, the playlist directory and the playback
//! state, and is the only place that mutates them. Every operation checks
//! its preconditions in a fixed order (existence before state) and returns
//! either a typed success detail or an [`EngineError`]. Rendering is left
//! to the caller.

mod error;
mod outcome;
mod random;

pub use error::{EngineError, ErrorKind};
pub use outcome::{
    CatalogEntry, FlagOutcome, NowPlaying, PlayOutcome, PlaylistChange, PlaylistSummary,
    PlaylistView,
};
pub use random::{FastRandSource, FixedSource, RandomSource};

use crate::catalog::Catalog;
use crate::model::Video;
use crate::playback::PlaybackState;
use crate::playlist::PlaylistDirectory;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Command surface over a catalog
pub struct Engine<C: Catalog, R: RandomSource> {
    catalog: C,
    playlists: PlaylistDirectory,
    playback: PlaybackState,
    random: R,
}

impl<C: Catalog, R: RandomSource> Engine<C, R> {
    /// Create an engine with no playlists and nothing playing
    pub fn new(catalog: C, random: R) -> Self {
        Self {
            catalog,
            playlists: PlaylistDirectory::new(),
            playback: PlaybackState::new(),
            random,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Look up a video by ID
    pub fn video(&self, id: &str) -> Option<&Video> {
        self.catalog.get_video(id)
    }

    /// Total number of videos, flagged ones included
    pub fn number_of_videos(&self) -> usize {
        self.catalog.all_videos().len()
    }

    /// Every video sorted by title, with its flag reason
    pub fn all_videos(&self) -> Vec<CatalogEntry> {
        let mut videos = self.catalog.all_videos();
        sort_by_title(&mut videos);
        videos.into_iter().map(|v| self.entry(v)).collect()
    }

    // ---- playback ----

    /// Play a video, stopping whatever is current first
    pub fn play(&mut self, id: &str) -> Result<PlayOutcome, EngineError> {
        let video = self.playable(id)?.clone();

        let stopped = self
            .playback
            .play(&video.id)
            .and_then(|prev| self.catalog.get_video(&prev).cloned());

        log::debug!("Playing {} ({})", video.title, video.id);
        Ok(PlayOutcome {
            stopped,
            playing: video,
        })
    }

    /// Stop the current video
    pub fn stop(&mut self) -> Result<Video, EngineError> {
        let id = self.playback.stop()?;
        self.resolve(&id)
    }

    pub fn pause(&mut self) -> Result<Video, EngineError> {
        let id = self.playback.pause()?;
        self.resolve(&id)
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> Result<Video, EngineError> {
        let id = self.playback.resume()?;
        self.resolve(&id)
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random(&mut self) -> Result<PlayOutcome, EngineError> {
        let mut candidates = self.catalog.unflagged_videos();
        if candidates.is_empty() {
            return Err(EngineError::CatalogEmpty);
        }

        // Stable candidate order so a seeded source picks reproducibly
        sort_by_title(&mut candidates);
        let last = candidates.len() - 1;
        let picked = self.random.pick(candidates.len());
        if picked > last {
            log::warn!("Random source returned {} for {} candidates", picked, candidates.len());
        }
        let index = picked.min(last);
        let id = candidates[index].id.clone();

        log::debug!("Random pick {}/{}: {}", index + 1, candidates.len(), id);
        self.play(&id)
    }

    /// The current video and whether it is paused
    pub fn now_playing(&self) -> Result<NowPlaying, EngineError> {
        let id = self.playback.current().ok_or(EngineError::NoVideoPlaying)?;
        Ok(NowPlaying {
            video: self.resolve(id)?,
            paused: self.playback.is_paused(),
        })
    }

    // ---- flags ----

    /// Flag a video, stopping it first if it is current
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> Result<FlagOutcome, EngineError> {
        let video = self.resolve(id)?;
        if self.catalog.is_flagged(id) {
            return Err(EngineError::AlreadyFlagged { id: id.to_string() });
        }

        let stopped = if self.playback.current() == Some(id) {
            self.playback.stop()?;
            Some(video.clone())
        } else {
            None
        };

        let reason = match reason.map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => DEFAULT_FLAG_REASON.to_string(),
        };

        self.catalog.add_flag(id, reason.clone());
        log::debug!("Flagged {} (reason: {})", id, reason);

        Ok(FlagOutcome {
            stopped,
            video,
            reason,
        })
    }

    /// Clear a video's flag
    pub fn allow(&mut self, id: &str) -> Result<Video, EngineError> {
        let video = self.resolve(id)?;
        if !self.catalog.is_flagged(id) {
            return Err(EngineError::NotFlagged { id: id.to_string() });
        }

        self.catalog.remove_flag(id);
        log::debug!("Removed flag from {}", id);
        Ok(video)
    }

    // ---- playlists ----

    /// Create a playlist; returns its display name
    pub fn create_playlist(&mut self, name: &str) -> Result<String, EngineError> {
        Ok(self.playlists.create(name)?.name.clone())
    }

    /// Append a video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Result<PlaylistChange, EngineError> {
        let playlist = self.playlists.get_mut(name)?;
        let video = self
            .catalog
            .get_video(id)
            .ok_or_else(|| EngineError::VideoNotFound { id: id.to_string() })?;
        if let Some(reason) = self.catalog.flag_reason(id) {
            return Err(EngineError::VideoFlagged {
                id: id.to_string(),
                reason: reason.to_string(),
            });
        }
        if !playlist.add_video(id) {
            return Err(EngineError::AlreadyInPlaylist {
                playlist: playlist.name.clone(),
                id: id.to_string(),
            });
        }

        log::debug!("Added {} to playlist {:?}", id, playlist.name);
        Ok(PlaylistChange {
            playlist: playlist.name.clone(),
            video: video.clone(),
        })
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        id: &str,
    ) -> Result<PlaylistChange, EngineError> {
        let playlist = self.playlists.get_mut(name)?;
        let video = self
            .catalog
            .get_video(id)
            .ok_or_else(|| EngineError::VideoNotFound { id: id.to_string() })?;
        if !playlist.remove_video(id) {
            return Err(EngineError::NotInPlaylist {
                playlist: playlist.name.clone(),
                id: id.to_string(),
            });
        }

        log::debug!("Removed {} from playlist {:?}", id, playlist.name);
        Ok(PlaylistChange {
            playlist: playlist.name.clone(),
            video: video.clone(),
        })
    }

    /// Remove all videos from a playlist; returns its display name
    pub fn clear_playlist(&mut self, name: &str) -> Result<String, EngineError> {
        Ok(self.playlists.clear(name)?.name.clone())
    }

    /// Delete a playlist; returns its display name
    pub fn delete_playlist(&mut self, name: &str) -> Result<String, EngineError> {
        Ok(self.playlists.delete(name)?.name)
    }

    /// All playlists, ordered by name case-insensitively
    pub fn list_playlists(&self) -> Vec<PlaylistSummary> {
        self.playlists
            .list_all()
            .into_iter()
            .map(|p| PlaylistSummary {
                name: p.name.clone(),
                len: p.len(),
            })
            .collect()
    }

    /// A playlist's videos in insertion order
    pub fn show_playlist(&self, name: &str) -> Result<PlaylistView, EngineError> {
        let playlist = self.playlists.get(name)?;
        let entries = playlist
            .video_ids
            .iter()
            .filter_map(|id| match self.catalog.get_video(id) {
                Some(video) => Some(self.entry(video)),
                None => {
                    log::warn!("Playlist {:?} references unknown video {}", playlist.name, id);
                    None
                }
            })
            .collect();

        Ok(PlaylistView {
            name: playlist.name.clone(),
            entries,
        })
    }

    // ---- search ----

    /// Unflagged videos whose title contains `term`, case-insensitively
    pub fn search_by_title(&self, term: &str) -> Result<Vec<Video>, EngineError> {
        self.search(term, |v| v.title_contains(term))
    }

    /// Unflagged videos carrying `tag` (which must start with `#`)
    pub fn search_by_tag(&self, tag: &str) -> Result<Vec<Video>, EngineError> {
        if !tag.starts_with('#') {
            return Err(EngineError::NoResults {
                term: tag.to_string(),
            });
        }
        self.search(tag, |v| v.has_tag(tag))
    }

    fn search<F>(&self, term: &str, matches: F) -> Result<Vec<Video>, EngineError>
    where
        F: Fn(&Video) -> bool,
    {
        let mut found: Vec<&Video> = self
            .catalog
            .unflagged_videos()
            .into_iter()
            .filter(|v| matches(*v))
            .collect();

        if found.is_empty() {
            return Err(EngineError::NoResults {
                term: term.to_string(),
            });
        }

        sort_by_title(&mut found);
        log::debug!("Search {:?}: {} results", term, found.len());
        Ok(found.into_iter().cloned().collect())
    }

    // ---- helpers ----

    fn resolve(&self, id: &str) -> Result<Video, EngineError> {
        self.catalog
            .get_video(id)
            .cloned()
            .ok_or_else(|| EngineError::VideoNotFound { id: id.to_string() })
    }

    fn playable(&self, id: &str) -> Result<&Video, EngineError> {
        let video = self
            .catalog
            .get_video(id)
            .ok_or_else(|| EngineError::VideoNotFound { id: id.to_string() })?;
        if let Some(reason) = self.catalog.flag_reason(id) {
            return Err(EngineError::VideoFlagged {
                id: id.to_string(),
                reason: reason.to_string(),
            });
        }
        Ok(video)
    }

    fn entry(&self, video: &Video) -> CatalogEntry {
        CatalogEntry {
            video: video.clone(),
            flag: self.catalog.flag_reason(&video.id).map(str::to_string),
        }
    }
}

fn sort_by_title(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}
