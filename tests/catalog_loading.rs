use std::fs;
use tempfile::TempDir;
use video_catalog::catalog::Catalog;
use video_catalog::engine::FixedSource;
use video_catalog::loader::load_catalog;
use video_catalog::Engine;

#[test]
fn test_load_text_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("videos.txt");
    fs::write(
        &path,
        "Amazing Cats | amazing_cats_video_id | #cat , #animal\n\
         Funny Dogs | funny_dogs_video_id | #dog , #animal\n\
         Video about nothing | nothing_video_id |\n",
    )
    .unwrap();

    let library = load_catalog(&path).unwrap();
    assert_eq!(library.video_count(), 3);

    let dogs = library.get_video("funny_dogs_video_id").unwrap();
    assert_eq!(dogs.title, "Funny Dogs");
    assert_eq!(dogs.tags, vec!["#dog", "#animal"]);
    assert!(library.unflagged_videos().len() == 3);
}

#[test]
fn test_load_json_catalog_into_engine() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("videos.json");
    fs::write(
        &path,
        r##"[
            {"id": "v1", "title": "Amy", "tags": ["#drama"]},
            {"id": "v2", "title": "Zed", "tags": ["#comedy"]}
        ]"##,
    )
    .unwrap();

    let library = load_catalog(&path).unwrap();
    let mut engine = Engine::new(library, FixedSource(1));
    assert_eq!(engine.number_of_videos(), 2);
    assert_eq!(engine.play_random().unwrap().playing.title, "Zed");
}

#[test]
fn test_missing_file_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nope.txt");

    let err = load_catalog(&path).unwrap_err();
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_invalid_tag_rejects_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("videos.txt");
    fs::write(&path, "Amy | v1 | drama\n").unwrap();

    let err = load_catalog(&path).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("line 1"));
    assert!(chain.contains("Invalid tag drama"));
}

#[test]
fn test_duplicate_ids_reject_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("videos.txt");
    fs::write(&path, "Amy | v1 |\nAmy again | v1 |\n").unwrap();

    assert!(load_catalog(&path).is_err());
}
