//! Catalog trait definition

use crate::model::Video;

/// Read-only video lookup plus a mutable flag side-table.
///
/// The engine only talks to the catalog through this trait, so storage
/// and loading stay swappable. Flag mutations are not validated here;
/// the engine checks preconditions before calling `add_flag`/`remove_flag`.
pub trait Catalog {
    /// Get a video by ID
    fn get_video(&self, id: &str) -> Option<&Video>;

    /// All videos, in no particular order
    fn all_videos(&self) -> Vec<&Video>;

    /// Reason recorded for a flagged video
    fn flag_reason(&self, id: &str) -> Option<&str>;

    fn add_flag(&mut self, id: &str, reason: String);

    fn remove_flag(&mut self, id: &str);

    fn is_flagged(&self, id: &str) -> bool {
        self.flag_reason(id).is_some()
    }

    /// Videos with no flag entry
    fn unflagged_videos(&self) -> Vec<&Video> {
        self.all_videos()
            .into_iter()
            .filter(|v| !self.is_flagged(&v.id))
            .collect()
    }
}
