//! End-to-end rehoming against a real filesystem layout, the way a moved
//! bundle folder looks on disk.

use camino::Utf8PathBuf;
use fs_err as fs;
use pretty_assertions::assert_eq;
use scenefix_rehome::{FsAssetView, rehome_for_file, rehome_in_place};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

fn doc(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 tempdir")
}

/// What the rehomer writes back for an on-disk path: absolute, forward
/// slashes.
fn resolved(path: &Utf8PathBuf) -> String {
    path.canonicalize_utf8()
        .expect("canonicalize")
        .as_str()
        .replace('\\', "/")
}

#[test]
fn stale_absolute_path_is_rehomed_to_moved_asset() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);

    let media_dir = root.join("media");
    fs::create_dir_all(&media_dir).unwrap();
    let clip = media_dir.join("clip.mp4");
    fs::write(&clip, b"x").unwrap();

    let mut d = doc(json!({
        "settings": { "local_file": "/old/install/media/clip.mp4" }
    }));

    rehome_in_place(&mut d, &format!("{root}/"), &FsAssetView);

    assert_eq!(d["settings"]["local_file"], json!(resolved(&clip)));
}

#[test]
fn bundle_stem_folder_is_preferred_over_containing_folder() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);

    // MyScene.json next to MyScene/clip.mp4, plus a decoy clip.mp4 next to
    // the bundle itself.
    let stem_dir = root.join("MyScene");
    fs::create_dir_all(&stem_dir).unwrap();
    let bundled = stem_dir.join("clip.mp4");
    fs::write(&bundled, b"bundled").unwrap();
    let decoy = root.join("clip.mp4");
    fs::write(&decoy, b"decoy").unwrap();

    let bundle_path = root.join("MyScene.json");
    let mut d = doc(json!({
        "settings": { "local_file": "/old/clip.mp4" }
    }));

    rehome_for_file(&mut d, bundle_path.as_str(), &FsAssetView);

    assert_eq!(d["settings"]["local_file"], json!(resolved(&bundled)));
}

#[test]
fn containing_folder_is_used_when_no_stem_folder_exists() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);

    let asset = root.join("intro.png");
    fs::write(&asset, b"png").unwrap();

    let bundle_path = root.join("export.json");
    let mut d = doc(json!({ "file": "/old/assets/intro.png" }));

    rehome_for_file(&mut d, bundle_path.as_str(), &FsAssetView);

    assert_eq!(d["file"], json!(resolved(&asset)));
}

#[test]
fn file_url_is_rehomed_with_prefix_restored() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);

    let media_dir = root.join("media");
    fs::create_dir_all(&media_dir).unwrap();
    let clip = media_dir.join("clip.mp4");
    fs::write(&clip, b"x").unwrap();

    let mut d = doc(json!({ "url": "file:///old/media/clip.mp4" }));

    rehome_in_place(&mut d, &format!("{root}/"), &FsAssetView);

    assert_eq!(d["url"], json!(format!("file://{}", resolved(&clip))));
}

#[test]
fn missing_assets_leave_the_document_unchanged() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);

    let mut d = doc(json!({
        "settings": { "local_file": "/old/media/clip.mp4" },
        "name": "Clip"
    }));
    let before = serde_json::to_string(&d).unwrap();

    rehome_in_place(&mut d, &format!("{root}/"), &FsAssetView);

    assert_eq!(serde_json::to_string(&d).unwrap(), before);
}

#[test]
fn existing_target_path_is_never_rewritten() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);

    // The referenced file still exists where the document says it is.
    let live_dir = root.join("live");
    fs::create_dir_all(&live_dir).unwrap();
    let live = live_dir.join("clip.mp4");
    fs::write(&live, b"x").unwrap();

    // A relocated copy also exists, but must not win.
    let moved = root.join("clip.mp4");
    fs::write(&moved, b"x").unwrap();

    let mut d = doc(json!({ "file": live.as_str() }));
    rehome_in_place(&mut d, &format!("{root}/"), &FsAssetView);

    assert_eq!(d["file"], json!(live.as_str()));
}
