use super::Catalog;
use crate::model::Video;
use indexmap::IndexMap;
use std::collections::HashMap;

/// In-memory video catalog with a flag side-table
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    /// All videos indexed by their ID, in load order
    videos: IndexMap<String, Video>,

    /// Flag reasons indexed by video ID
    flags: HashMap<String, String>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from loaded videos. Later duplicates replace earlier ones.
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut library = Self::new();
        for video in videos {
            library.add_video(video);
        }
        library
    }

    /// Add a video to the library
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}

impl Catalog for VideoLibrary {
    fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    fn all_videos(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    fn flag_reason(&self, id: &str) -> Option<&str> {
        self.flags.get(id).map(String::as_str)
    }

    fn add_flag(&mut self, id: &str, reason: String) {
        self.flags.insert(id.to_string(), reason);
    }

    fn remove_flag(&mut self, id: &str) {
        self.flags.remove(id);
    }
}
