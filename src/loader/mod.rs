//! Catalog loading
//!
//! Reads the static video catalog from disk. Two formats are supported:
//! the pipe-delimited text format and a JSON array of videos
//! (selected by the `.json` extension).

mod text;

pub use text::parse_text_catalog;

use crate::catalog::VideoLibrary;
use crate::model::Video;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a JSON catalog (`[{"id": .., "title": .., "tags": [..]}, ..]`)
pub fn parse_json_catalog(content: &str) -> Result<Vec<Video>> {
    let raw: Vec<Video> = serde_json::from_str(content).context("Failed to parse JSON catalog")?;

    // Re-run construction so id and tag validation apply to JSON input too
    raw.into_iter()
        .map(|v| {
            let id = v.id.clone();
            Video::new(v.id, v.title, v.tags).with_context(|| format!("Invalid catalog entry {:?}", id))
        })
        .collect()
}

/// Load a complete catalog from a file
///
/// # Arguments
/// * `path` - Path to a `.json` or pipe-delimited text catalog
///
/// # Returns
/// A library containing every video, none flagged
pub fn load_catalog(path: &Path) -> Result<VideoLibrary> {
    log::info!("Loading video catalog from {:?}", path);

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let videos = if is_json {
        parse_json_catalog(&content)
    } else {
        parse_text_catalog(&content)
    }
    .with_context(|| format!("Failed to load video catalog: {:?}", path))?;

    let library = build_library(videos)?;
    log::info!("Loaded catalog: {} videos", library.video_count());
    Ok(library)
}

/// Build a library, rejecting duplicate IDs
pub fn build_library(videos: Vec<Video>) -> Result<VideoLibrary> {
    let mut seen = HashSet::new();
    for video in &videos {
        if !seen.insert(video.id.as_str()) {
            log::warn!("Duplicate video id in catalog: {}", video.id);
            bail!("Duplicate video id in catalog: {}", video.id);
        }
    }

    Ok(VideoLibrary::from_videos(videos))
}
