//! Tests for editing sessions

use std::fs;

use pretty_assertions::assert_eq;
use rpb_core::prelude::*;
use tempfile::TempDir;

#[test]
fn test_open_edit_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.rpc");
    fs::write(
        &path,
        "PROJECT_NAME = \"game\"\nPROJECT_DEBUG_FLAG = 0\nBUILD_OPTIMIZATION_LEVEL = 1\n",
    )
    .unwrap();

    let mut session = Session::new();
    session.open(&path).unwrap();
    assert_eq!(session.path(), Some(path.as_path()));
    assert_eq!(session.file_name(), "game.rpc");
    assert!(!session.is_dirty());

    session.set_checked("PROJECT_DEBUG_FLAG", true).unwrap();
    session.set_value("BUILD_OPTIMIZATION_LEVEL", 3).unwrap();
    assert!(session.is_dirty());
    assert!(session.last_saved().is_none());

    let written = session.save().unwrap();
    assert_eq!(written, path);
    assert!(!session.is_dirty());
    assert!(session.last_saved().is_some());

    let reloaded = ConfigDocument::load(&path).unwrap();
    assert!(reloaded.get("PROJECT_DEBUG_FLAG").unwrap().is_checked());
    assert_eq!(reloaded.get("BUILD_OPTIMIZATION_LEVEL").unwrap().value(), 3);
}

#[test]
fn test_open_missing_keeps_document() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::from_template();
    let before = session.document().len();

    let result = session.open(dir.path().join("missing.rpc"));
    assert!(matches!(result, Err(ProjectError::SourceNotFound(_))));
    assert_eq!(session.document().len(), before);
    assert!(session.path().is_none());
}

#[test]
fn test_open_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "PROJECT_NAME = \"x\"\n").unwrap();

    let mut session = Session::new();
    assert!(matches!(
        session.open(&path),
        Err(ProjectError::UnsupportedExtension(_))
    ));
    assert!(session.document().is_empty());
}

#[test]
fn test_save_as_binds_path() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::from_template();
    session.set_text("PROJECT_NAME", "renamed").unwrap();

    let written = session.save_as(dir.path().join("renamed")).unwrap();
    assert_eq!(written, dir.path().join("renamed.rpc"));
    assert_eq!(session.file_name(), "renamed.rpc");
    assert!(!session.is_dirty());

    session.set_text("PROJECT_NAME", "again").unwrap();
    assert_eq!(session.save().unwrap(), written);
}

#[test]
fn test_visible_entries_follow_selection() {
    let mut session = Session::from_template();
    session.select_category(Category::Platform);
    session.select_platform(Platform::Android);

    let keys: Vec<&str> = session.visible_entries().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "PLATFORM_ANDROID_SDK_PATH",
            "PLATFORM_ANDROID_NDK_PATH",
            "PLATFORM_ANDROID_API_VERSION",
        ]
    );

    session.select_category(Category::Deploy);
    assert!(session
        .visible_entries()
        .all(|e| e.category == Category::Deploy && e.platform == Platform::Any));
}

#[test]
fn test_set_paths_on_file_list() {
    let mut session = Session::from_template();
    session
        .set_paths("BUILD_SOURCE_FILES", ["src/main.c", "src/screens.c"])
        .unwrap();

    let entry = session.document().get("BUILD_SOURCE_FILES").unwrap();
    assert_eq!(entry.entry_type, EntryType::TextFile);
    assert_eq!(entry.text(), "src/main.c;src/screens.c");
    assert!(session.is_dirty());
}
