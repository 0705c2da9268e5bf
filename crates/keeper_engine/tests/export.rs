use std::fs;

use chrono::TimeZone;
use keeper_core::partition;
use keeper_engine::{export_json, export_txt, parse_import, EXPORT_TYPE, EXPORT_VERSION};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn fixed_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 12).unwrap()
}

fn items() -> Vec<String> {
    vec!["Apple".to_string(), "two words".to_string()]
}

#[test]
fn json_export_carries_the_documented_schema() {
    let temp = TempDir::new().unwrap();
    let summary = export_json(temp.path(), &items(), fixed_now()).unwrap();

    assert_eq!(summary.item_count, 2);
    assert_eq!(
        summary.path.file_name().unwrap(),
        "keeper-list-2026-08-06T09-30-12.json"
    );

    let document: Value = serde_json::from_str(&fs::read_to_string(&summary.path).unwrap()).unwrap();
    assert_eq!(document["type"], EXPORT_TYPE);
    assert_eq!(document["version"], EXPORT_VERSION);
    assert_eq!(document["items"], serde_json::json!(["Apple", "two words"]));
    assert_eq!(document["exported"], "2026-08-06T09:30:12.000Z");
}

#[test]
fn txt_export_is_newline_joined_display_forms() {
    let temp = TempDir::new().unwrap();
    let summary = export_txt(temp.path(), &items(), fixed_now()).unwrap();

    assert_eq!(
        summary.path.file_name().unwrap(),
        "keeper-list-2026-08-06T09-30-12.txt"
    );
    assert_eq!(
        fs::read_to_string(&summary.path).unwrap(),
        "Apple\ntwo words"
    );
}

#[test]
fn export_dir_is_created_on_demand() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("exports");
    assert!(!nested.exists());

    export_txt(&nested, &items(), fixed_now()).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn json_round_trip_yields_only_duplicates() {
    let temp = TempDir::new().unwrap();
    let exported = items();
    let summary = export_json(temp.path(), &exported, fixed_now()).unwrap();

    let content = fs::read_to_string(&summary.path).unwrap();
    let file_name = summary.path.file_name().unwrap().to_string_lossy();
    let reimported = parse_import(&file_name, &content).unwrap();
    assert_eq!(reimported, exported);

    // Importing an export back into the same list adds nothing.
    let part = partition(&exported, &reimported);
    assert!(part.uniques.is_empty());
    assert_eq!(part.duplicates.len(), exported.len());
}

#[test]
fn empty_list_exports_cleanly() {
    let temp = TempDir::new().unwrap();
    let summary = export_txt(temp.path(), &[], fixed_now()).unwrap();
    assert_eq!(summary.item_count, 0);
    assert_eq!(fs::read_to_string(&summary.path).unwrap(), "");
}
