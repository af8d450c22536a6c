/// A named, ordered, duplicate-free list of video IDs
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Name as the user typed it (used for display)
    pub name: String,

    /// Lowercased name used for lookups
    key: String,

    /// Video IDs in insertion order
    pub video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        let key = Self::normalize(&name);
        Self {
            name,
            key,
            video_ids: Vec::new(),
        }
    }

    /// Lowercased lookup key, kept in step with `name`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Lookup key for a playlist name
    pub fn normalize(name: &str) -> String {
        name.to_lowercase()
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video; returns false if it is already present
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove a video; returns false if it was not present
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}
