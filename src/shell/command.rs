//! Command line parsing

use std::str::FromStr;
use thiserror::Error;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video: String },
    RemoveFromPlaylist { playlist: String, video: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("{command} takes {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let command = match name.as_str() {
            "NUMBER_OF_VIDEOS" => no_args("NUMBER_OF_VIDEOS", &args, Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => no_args("SHOW_ALL_VIDEOS", &args, Command::ShowAllVideos)?,
            "PLAY" => Command::Play(one_arg("PLAY", &args)?),
            "PLAY_RANDOM" => no_args("PLAY_RANDOM", &args, Command::PlayRandom)?,
            "STOP" => no_args("STOP", &args, Command::Stop)?,
            "PAUSE" => no_args("PAUSE", &args, Command::Pause)?,
            "CONTINUE" => no_args("CONTINUE", &args, Command::Continue)?,
            "SHOW_PLAYING" => no_args("SHOW_PLAYING", &args, Command::ShowPlaying)?,
            "CREATE_PLAYLIST" => Command::CreatePlaylist(one_arg("CREATE_PLAYLIST", &args)?),
            "ADD_TO_PLAYLIST" => {
                let (playlist, video) = two_args("ADD_TO_PLAYLIST", &args)?;
                Command::AddToPlaylist { playlist, video }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let (playlist, video) = two_args("REMOVE_FROM_PLAYLIST", &args)?;
                Command::RemoveFromPlaylist { playlist, video }
            }
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(one_arg("CLEAR_PLAYLIST", &args)?),
            "DELETE_PLAYLIST" => Command::DeletePlaylist(one_arg("DELETE_PLAYLIST", &args)?),
            "SHOW_PLAYLIST" => Command::ShowPlaylist(one_arg("SHOW_PLAYLIST", &args)?),
            "SHOW_ALL_PLAYLISTS" => no_args("SHOW_ALL_PLAYLISTS", &args, Command::ShowAllPlaylists)?,
            "SEARCH_VIDEOS" => Command::SearchVideos(one_arg("SEARCH_VIDEOS", &args)?),
            "SEARCH_VIDEOS_WITH_TAG" => {
                Command::SearchVideosWithTag(one_arg("SEARCH_VIDEOS_WITH_TAG", &args)?)
            }
            "FLAG_VIDEO" => match args.split_first() {
                Some((video, rest)) => Command::FlagVideo {
                    video: video.to_string(),
                    reason: (!rest.is_empty()).then(|| rest.join(" ")),
                },
                None => {
                    return Err(CommandError::WrongArity {
                        command: "FLAG_VIDEO",
                        expected: "1 or more",
                        got: 0,
                    })
                }
            },
            "ALLOW_VIDEO" => Command::AllowVideo(one_arg("ALLOW_VIDEO", &args)?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(name)),
        };

        Ok(command)
    }
}

fn no_args(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::WrongArity {
            command,
            expected: "0",
            got: args.len(),
        })
    }
}

fn one_arg(command: &'static str, args: &[&str]) -> Result<String, CommandError> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(CommandError::WrongArity {
            command,
            expected: "1",
            got: args.len(),
        }),
    }
}

fn two_args(command: &'static str, args: &[&str]) -> Result<(String, String), CommandError> {
    match args {
        [first, second] => Ok((first.to_string(), second.to_string())),
        _ => Err(CommandError::WrongArity {
            command,
            expected: "2",
            got: args.len(),
        }),
    }
}
