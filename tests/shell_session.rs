use std::io::Cursor;
use video_catalog::catalog::VideoLibrary;
use video_catalog::engine::FixedSource;
use video_catalog::model::Video;
use video_catalog::{Engine, Session};

fn create_session() -> Session<VideoLibrary, FixedSource> {
    let library = VideoLibrary::from_videos([
        Video::new(
            "amazing_cats_video_id",
            "Amazing Cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
        .unwrap(),
        Video::new(
            "another_cat_video_id",
            "Another Cat Video",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
        .unwrap(),
        Video::new("funny_dogs_video_id", "Funny Dogs", vec!["#dog".to_string()]).unwrap(),
        Video::new("nothing_video_id", "Video about nothing", Vec::new()).unwrap(),
    ]);
    Session::new(Engine::new(library, FixedSource(0)))
}

/// Run a script through a fresh session and return its output lines
fn run_script(script: &str) -> Vec<String> {
    let mut session = create_session();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    session.run(&mut input, &mut output).expect("session failed");
    String::from_utf8(output)
        .expect("output is utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_number_and_listing() {
    let lines = run_script("NUMBER_OF_VIDEOS\nFLAG_VIDEO funny_dogs_video_id\nSHOW_ALL_VIDEOS\n");
    assert_eq!(
        lines,
        vec![
            "4 videos in the library",
            "Successfully flagged video: Funny Dogs (reason: Not supplied)",
            "Here's a list of all available videos:",
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Funny Dogs (funny_dogs_video_id) [#dog] - FLAGGED (reason: Not supplied)",
            "Video about nothing (nothing_video_id) []",
        ]
    );
}

#[test]
fn test_playback_messages() {
    let lines = run_script(
        "PLAY amazing_cats_video_id\n\
         PLAY funny_dogs_video_id\n\
         PAUSE\n\
         PAUSE\n\
         SHOW_PLAYING\n\
         CONTINUE\n\
         CONTINUE\n\
         STOP\n\
         STOP\n\
         SHOW_PLAYING\n\
         PLAY does_not_exist\n",
    );
    assert_eq!(
        lines,
        vec![
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Playing video: Funny Dogs",
            "Pausing video: Funny Dogs",
            "Video already paused: Funny Dogs",
            "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog] - PAUSED",
            "Continuing video: Funny Dogs",
            "Cannot continue video: Video is not paused",
            "Stopping video: Funny Dogs",
            "Cannot stop video: No video is currently playing",
            "No video is currently playing",
            "Cannot play video: Video does not exist",
        ]
    );
}

#[test]
fn test_flag_playing_video() {
    let lines = run_script(
        "PLAY amazing_cats_video_id\n\
         FLAG_VIDEO amazing_cats_video_id dont like cats\n\
         PLAY amazing_cats_video_id\n\
         FLAG_VIDEO amazing_cats_video_id\n\
         ALLOW_VIDEO amazing_cats_video_id\n\
         ALLOW_VIDEO amazing_cats_video_id\n",
    );
    assert_eq!(
        lines,
        vec![
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Successfully flagged video: Amazing Cats (reason: dont like cats)",
            "Cannot play video: Video is currently flagged (reason: dont like cats)",
            "Cannot flag video: Video is already flagged",
            "Successfully removed flag from video: Amazing Cats",
            "Cannot remove flag from video: Video is not flagged",
        ]
    );
}

#[test]
fn test_playlist_messages() {
    let lines = run_script(
        "SHOW_ALL_PLAYLISTS\n\
         CREATE_PLAYLIST my_PLAYlist\n\
         CREATE_PLAYLIST MY_playlist\n\
         ADD_TO_PLAYLIST my_playlist amazing_cats_video_id\n\
         ADD_TO_PLAYLIST my_playlist amazing_cats_video_id\n\
         ADD_TO_PLAYLIST another_playlist amazing_cats_video_id\n\
         SHOW_ALL_PLAYLISTS\n\
         SHOW_PLAYLIST MY_PLAYLIST\n\
         REMOVE_FROM_PLAYLIST my_playlist funny_dogs_video_id\n\
         REMOVE_FROM_PLAYLIST my_playlist amazing_cats_video_id\n\
         SHOW_PLAYLIST my_playlist\n\
         CLEAR_PLAYLIST my_playlist\n\
         DELETE_PLAYLIST my_playlist\n\
         DELETE_PLAYLIST my_playlist\n",
    );
    assert_eq!(
        lines,
        vec![
            "No playlists exist yet",
            "Successfully created new playlist: my_PLAYlist",
            "Cannot create playlist: A playlist with the same name already exists",
            "Added video to my_playlist: Amazing Cats",
            "Cannot add video to my_playlist: Video already added",
            "Cannot add video to another_playlist: Playlist does not exist",
            "Showing all playlists:",
            "my_PLAYlist (1 video)",
            "Showing playlist: MY_PLAYLIST",
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "Cannot remove video from my_playlist: Video is not in playlist",
            "Removed video from my_playlist: Amazing Cats",
            "Showing playlist: my_playlist",
            "No videos here yet",
            "Successfully removed all videos from my_playlist",
            "Deleted playlist: my_playlist",
            "Cannot delete playlist my_playlist: Playlist does not exist",
        ]
    );
}

#[test]
fn test_search_and_play_selection() {
    let lines = run_script("SEARCH_VIDEOS cat\n2\nSHOW_PLAYING\n");
    assert_eq!(
        lines,
        vec![
            "Here are the results for cat:",
            "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Another Cat Video",
            "Currently playing: Another Cat Video (another_cat_video_id) [#cat #animal]",
        ]
    );
}

#[test]
fn test_search_selection_ignores_bad_answers() {
    let lines = run_script("SEARCH_VIDEOS_WITH_TAG #DOG\nnope\nSEARCH_VIDEOS_WITH_TAG #dog\n5\nSHOW_PLAYING\n");
    assert_eq!(lines.iter().filter(|l| l.starts_with("Playing video")).count(), 0);
    assert_eq!(lines.last().map(String::as_str), Some("No video is currently playing"));
}

#[test]
fn test_search_without_results() {
    let lines = run_script("SEARCH_VIDEOS blah\nSEARCH_VIDEOS_WITH_TAG dog\nSEARCH_VIDEOS_WITH_TAG #blah\n");
    assert_eq!(
        lines,
        vec![
            "No search results for blah",
            "No search results for dog",
            "No search results for #blah",
        ]
    );
}

#[test]
fn test_play_random_and_invalid_commands() {
    let lines = run_script("PLAY_RANDOM\nDANCE\nPLAY\n\nEXIT\nNUMBER_OF_VIDEOS\n");
    assert_eq!(
        lines,
        vec![
            "Playing video: Amazing Cats",
            "Please enter a valid command, type HELP for a list of available commands.",
            "Please enter a valid command, type HELP for a list of available commands.",
            "The video catalog has now terminated its execution. Thank you and goodbye!",
        ]
    );
}

#[test]
fn test_prompt_and_banner() {
    let mut session = create_session().with_prompt("> ").with_banner(true);
    let mut input = Cursor::new(b"HELP\n".to_vec());
    let mut output = Vec::new();
    session.run(&mut input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Welcome to the video catalog"));
    assert!(text.contains("> Available commands:"));
    assert!(text.contains("SEARCH_VIDEOS_WITH_TAG <tag_name>"));
}
