//! Interactive command shell
//!
//! Parses command lines, runs them against the [`Engine`] and renders each
//! outcome into user-facing lines. The shell also owns the interactive
//! "play one of these search results" step, since it needs to read input.

pub mod command;
pub mod render;

pub use command::{Command, CommandError};

use crate::catalog::Catalog;
use crate::engine::{Engine, EngineError, PlayOutcome, RandomSource};
use crate::model::Video;
use anyhow::Result;
use std::io::{self, BufRead, Write};

const BANNER: &str = "Welcome to the video catalog, what would you like to do?
Enter HELP for list of available commands or EXIT to terminate.";

const GOODBYE: &str = "The video catalog has now terminated its execution. Thank you and goodbye!";

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A shell session wrapping one engine
pub struct Session<C: Catalog, R: RandomSource> {
    engine: Engine<C, R>,
    prompt: Option<String>,
    banner: bool,
}

impl<C: Catalog, R: RandomSource> Session<C, R> {
    /// Create a session with no prompt and no banner
    pub fn new(engine: Engine<C, R>) -> Self {
        Self {
            engine,
            prompt: None,
            banner: false,
        }
    }

    /// Print `prompt` before reading each command
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Print the welcome banner when the session starts
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn engine(&self) -> &Engine<C, R> {
        &self.engine
    }

    /// Read and execute commands until EXIT or end of input
    pub fn run<I: BufRead, W: Write>(&mut self, input: &mut I, out: &mut W) -> Result<()> {
        if self.banner {
            writeln!(out, "{}", BANNER)?;
        }

        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{}", prompt)?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("End of input, leaving session");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            if self.execute_line(&line, input, out)? == Flow::Exit {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Parse and execute a single command line
    pub fn execute_line<I: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut I,
        out: &mut W,
    ) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command, input, out),
            Err(e) => {
                log::debug!("Rejected command {:?}: {}", line.trim(), e);
                writeln!(out, "{}", render::INVALID_COMMAND)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command. `input` is only read for search selection.
    pub fn execute<I: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut I,
        out: &mut W,
    ) -> io::Result<Flow> {
        match command {
            Command::NumberOfVideos => {
                writeln!(out, "{} videos in the library", self.engine.number_of_videos())?;
            }
            Command::ShowAllVideos => {
                writeln!(out, "Here's a list of all available videos:")?;
                for entry in self.engine.all_videos() {
                    writeln!(out, "{}", render::entry(&entry))?;
                }
            }
            Command::Play(id) => {
                let result = self.engine.play(&id);
                self.write_play(result, out)?;
            }
            Command::PlayRandom => {
                let result = self.engine.play_random();
                self.write_play(result, out)?;
            }
            Command::Stop => match self.engine.stop() {
                Ok(video) => writeln!(out, "Stopping video: {}", video.title)?,
                Err(e) => writeln!(out, "Cannot stop video: {}", e)?,
            },
            Command::Pause => match self.engine.pause() {
                Ok(video) => writeln!(out, "Pausing video: {}", video.title)?,
                Err(EngineError::AlreadyPaused { id }) => {
                    writeln!(out, "Video already paused: {}", self.title(&id))?
                }
                Err(e) => writeln!(out, "Cannot pause video: {}", e)?,
            },
            Command::Continue => match self.engine.resume() {
                Ok(video) => writeln!(out, "Continuing video: {}", video.title)?,
                Err(e) => writeln!(out, "Cannot continue video: {}", e)?,
            },
            Command::ShowPlaying => match self.engine.now_playing() {
                Ok(now) => writeln!(out, "{}", render::now_playing(&now))?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::CreatePlaylist(name) => match self.engine.create_playlist(&name) {
                Ok(_) => writeln!(out, "Successfully created new playlist: {}", name)?,
                Err(e) => writeln!(out, "Cannot create playlist: {}", e)?,
            },
            Command::AddToPlaylist { playlist, video } => {
                match self.engine.add_to_playlist(&playlist, &video) {
                    Ok(change) => {
                        writeln!(out, "Added video to {}: {}", playlist, change.video.title)?
                    }
                    Err(e) => writeln!(out, "Cannot add video to {}: {}", playlist, e)?,
                }
            }
            Command::RemoveFromPlaylist { playlist, video } => {
                match self.engine.remove_from_playlist(&playlist, &video) {
                    Ok(change) => {
                        writeln!(out, "Removed video from {}: {}", playlist, change.video.title)?
                    }
                    Err(e) => writeln!(out, "Cannot remove video from {}: {}", playlist, e)?,
                }
            }
            Command::ClearPlaylist(name) => match self.engine.clear_playlist(&name) {
                Ok(_) => writeln!(out, "Successfully removed all videos from {}", name)?,
                Err(e) => writeln!(out, "Cannot clear playlist {}: {}", name, e)?,
            },
            Command::DeletePlaylist(name) => match self.engine.delete_playlist(&name) {
                Ok(_) => writeln!(out, "Deleted playlist: {}", name)?,
                Err(e) => writeln!(out, "Cannot delete playlist {}: {}", name, e)?,
            },
            Command::ShowPlaylist(name) => match self.engine.show_playlist(&name) {
                Ok(view) => {
                    writeln!(out, "Showing playlist: {}", name)?;
                    if view.entries.is_empty() {
                        writeln!(out, "No videos here yet")?;
                    }
                    for entry in &view.entries {
                        writeln!(out, "{}", render::entry(entry))?;
                    }
                }
                Err(e) => writeln!(out, "Cannot show playlist {}: {}", name, e)?,
            },
            Command::ShowAllPlaylists => {
                let playlists = self.engine.list_playlists();
                if playlists.is_empty() {
                    writeln!(out, "No playlists exist yet")?;
                } else {
                    writeln!(out, "Showing all playlists:")?;
                    for summary in &playlists {
                        writeln!(out, "{}", render::playlist_summary(summary))?;
                    }
                }
            }
            Command::SearchVideos(term) => {
                let result = self.engine.search_by_title(&term);
                self.write_search(&term, result, input, out)?;
            }
            Command::SearchVideosWithTag(tag) => {
                let result = self.engine.search_by_tag(&tag);
                self.write_search(&tag, result, input, out)?;
            }
            Command::FlagVideo { video, reason } => {
                match self.engine.flag(&video, reason.as_deref()) {
                    Ok(outcome) => {
                        if let Some(stopped) = &outcome.stopped {
                            writeln!(out, "Stopping video: {}", stopped.title)?;
                        }
                        writeln!(
                            out,
                            "Successfully flagged video: {} (reason: {})",
                            outcome.video.title, outcome.reason
                        )?;
                    }
                    Err(e) => writeln!(out, "Cannot flag video: {}", e)?,
                }
            }
            Command::AllowVideo(id) => match self.engine.allow(&id) {
                Ok(video) => writeln!(out, "Successfully removed flag from video: {}", video.title)?,
                Err(e) => writeln!(out, "Cannot remove flag from video: {}", e)?,
            },
            Command::Help => writeln!(out, "{}", render::HELP)?,
            Command::Exit => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn write_play<W: Write>(
        &self,
        result: Result<PlayOutcome, EngineError>,
        out: &mut W,
    ) -> io::Result<()> {
        match result {
            Ok(outcome) => {
                if let Some(stopped) = &outcome.stopped {
                    writeln!(out, "Stopping video: {}", stopped.title)?;
                }
                writeln!(out, "Playing video: {}", outcome.playing.title)
            }
            Err(EngineError::CatalogEmpty) => writeln!(out, "{}", EngineError::CatalogEmpty),
            Err(e) => writeln!(out, "Cannot play video: {}", e),
        }
    }

    /// List results, then play the one the user picks by number
    fn write_search<I: BufRead, W: Write>(
        &mut self,
        term: &str,
        result: Result<Vec<Video>, EngineError>,
        input: &mut I,
        out: &mut W,
    ) -> io::Result<()> {
        let candidates = match result {
            Ok(candidates) => candidates,
            Err(e) => return writeln!(out, "{}", e),
        };

        writeln!(out, "Here are the results for {}:", term)?;
        for (i, video) in candidates.iter().enumerate() {
            writeln!(out, "{}) {}", i + 1, render::video(video))?;
        }
        for line in render::SEARCH_PROMPT {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        if let Some(video) = pick(&candidates, answer.trim()) {
            let result = self.engine.play(&video.id);
            self.write_play(result, out)?;
        }
        Ok(())
    }

    fn title(&self, id: &str) -> String {
        self.engine
            .video(id)
            .map(|v| v.title.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

/// 1-based selection; anything else is a silent no
fn pick<'a>(candidates: &'a [Video], answer: &str) -> Option<&'a Video> {
    let choice: usize = answer.parse().ok()?;
    choice.checked_sub(1).and_then(|i| candidates.get(i))
}
