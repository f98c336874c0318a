//! Round-trip tests: document -> project file -> document

use pretty_assertions::assert_eq;
use rpb_core::project::{Category, ConfigDocument, Entry, EntryType, Platform};

/// Deliberately unordered, as if hand edited
const MIXED: &str = r#"
# hand edited project
PLATFORM_LINUX_ICON_FILE      = "icon.png"      # Linux icon
BUILD_SOURCE_FILES            = "a.c;b.c;c.c"   # Sources
PROJECT_NAME                  = "space game"    # Name
CUSTOM_NOTE                   = "keep me"
PLATFORM_WINDOWS_CONSOLE_FLAG = 1
IMAGERY_LOGO_FILE             = "logo.png"
PROJECT_DEBUG_FLAG            = 0               # Debug
RAYLIB_GRAPHICS_API           = "GRAPHICS_API_OPENGL_33"
BUILD_OPTIMIZATION_LEVEL      = 3
PLATFORM_WINDOWS_ICON_FILE    = "icon.ico"
DEPLOY_OUTPUT_PATH            = "deploy"
PLATFORM_ANDROID_API_VERSION  = 29
"#;

/// Semantic content of an entry, independent of its position
fn signature(entry: &Entry) -> (String, Category, Platform, EntryType, i32, String, String) {
    (
        entry.key.clone(),
        entry.category,
        entry.platform,
        entry.entry_type,
        entry.value(),
        entry.text().to_string(),
        entry.description.clone(),
    )
}

fn sorted_signatures(doc: &ConfigDocument) -> Vec<(String, Category, Platform, EntryType, i32, String, String)> {
    let mut sigs: Vec<_> = doc.iter().map(signature).collect();
    sigs.sort();
    sigs
}

fn keys_of(doc: &ConfigDocument, category: Category) -> Vec<String> {
    doc.by_category(category).map(|e| e.key.clone()).collect()
}

#[test]
fn test_roundtrip_preserves_entries() {
    let original = ConfigDocument::parse(MIXED);
    let text = original.to_text().unwrap();
    let reloaded = ConfigDocument::parse(&text);

    assert_eq!(reloaded.len(), original.len());
    assert_eq!(sorted_signatures(&reloaded), sorted_signatures(&original));
}

#[test]
fn test_roundtrip_keeps_order_within_category() {
    let original = ConfigDocument::parse(MIXED);
    let reloaded = ConfigDocument::parse(&original.to_text().unwrap());

    for category in [
        Category::Project,
        Category::Build,
        Category::Deploy,
        Category::Imagery,
        Category::Raylib,
        Category::Unknown,
    ] {
        assert_eq!(keys_of(&reloaded, category), keys_of(&original, category));
    }
}

#[test]
fn test_platform_entries_grouped_by_platform() {
    let original = ConfigDocument::parse(MIXED);
    let reloaded = ConfigDocument::parse(&original.to_text().unwrap());

    assert_eq!(
        keys_of(&reloaded, Category::Platform),
        vec![
            "PLATFORM_WINDOWS_CONSOLE_FLAG",
            "PLATFORM_WINDOWS_ICON_FILE",
            "PLATFORM_LINUX_ICON_FILE",
            "PLATFORM_ANDROID_API_VERSION",
        ]
    );
}

#[test]
fn test_categories_written_in_fixed_order() {
    let original = ConfigDocument::parse(MIXED);
    let reloaded = ConfigDocument::parse(&original.to_text().unwrap());

    let categories: Vec<Category> = reloaded.iter().map(|e| e.category).collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
}

#[test]
fn test_edits_survive_roundtrip() {
    let mut doc = ConfigDocument::parse(MIXED);
    doc.get_mut("PROJECT_DEBUG_FLAG").unwrap().set_checked(true).unwrap();
    doc.get_mut("BUILD_SOURCE_FILES")
        .unwrap()
        .set_paths(["main.c", "src/player.c"])
        .unwrap();
    doc.get_mut("BUILD_OPTIMIZATION_LEVEL").unwrap().set_value(-1).unwrap();

    let reloaded = ConfigDocument::parse(&doc.to_text().unwrap());
    assert!(reloaded.get("PROJECT_DEBUG_FLAG").unwrap().is_checked());
    assert_eq!(
        reloaded.get("BUILD_SOURCE_FILES").unwrap().paths(),
        vec!["main.c", "src/player.c"]
    );
    assert_eq!(reloaded.get("BUILD_OPTIMIZATION_LEVEL").unwrap().value(), -1);
}

#[test]
fn test_second_roundtrip_is_stable() {
    let first = ConfigDocument::parse(MIXED).to_text().unwrap();
    let second = ConfigDocument::parse(&first).to_text().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_descriptions_written_as_comments() {
    let text = ConfigDocument::parse(MIXED).to_text().unwrap();
    let line = text
        .lines()
        .find(|l| l.starts_with("PROJECT_NAME"))
        .unwrap();
    assert!(line.contains("\"space game\""));
    assert!(line.ends_with("# Name"));
}

#[test]
fn test_loaded_document_with_odd_lines_saves() {
    let doc = ConfigDocument::parse(
        "PROJECT_NAME = \"game\"\nPROJECT MY NAME = 1\nA#B = 2\nPROJECT_TITLE = say \"hi\"\n",
    );
    let keys: Vec<&str> = doc.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["PROJECT_NAME"]);

    let text = doc.to_text().unwrap();
    assert_eq!(sorted_signatures(&ConfigDocument::parse(&text)), sorted_signatures(&doc));
}
