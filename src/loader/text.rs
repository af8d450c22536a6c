//! Pipe-delimited catalog parser
//!
//! One video per line: `Title | video_id | #tag1,#tag2`

use crate::model::Video;
use anyhow::{bail, Context, Result};

/// Parse a text catalog into videos, in file order
pub fn parse_text_catalog(content: &str) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let video = parse_line(line)
            .with_context(|| format!("Invalid catalog entry on line {}", index + 1))?;
        videos.push(video);
    }

    log::debug!("Parsed {} text catalog entries", videos.len());
    Ok(videos)
}

fn parse_line(line: &str) -> Result<Video> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();

    if fields.len() < 2 || fields.len() > 3 {
        bail!("expected `title | id | tags`, got {:?}", line);
    }

    let title = fields[0];
    let id = fields[1];

    let tags: Vec<String> = fields
        .get(2)
        .map(|field| {
            field
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(id, title, tags)?)
}
