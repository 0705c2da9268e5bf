use std::fs;
use std::sync::Once;

use keeper_engine::ItemSlot;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(keeper_logging::initialize_for_tests);
}

fn slot_in(temp: &TempDir) -> ItemSlot {
    ItemSlot::new(temp.path().join(".keeper_items.json"))
}

#[test]
fn missing_slot_loads_as_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    assert_eq!(slot_in(&temp).load(), Vec::<String>::new());
}

#[test]
fn save_then_load_round_trips() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let slot = slot_in(&temp);

    let items = vec!["Apple".to_string(), "two words".to_string()];
    slot.save(&items);
    assert_eq!(slot.load(), items);

    // The slot holds a plain JSON string array.
    let raw = fs::read_to_string(slot.path()).unwrap();
    assert_eq!(raw, r#"["Apple","two words"]"#);
}

#[test]
fn corrupt_slot_loads_as_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let slot = slot_in(&temp);

    fs::write(slot.path(), "{not json").unwrap();
    assert_eq!(slot.load(), Vec::<String>::new());

    fs::write(slot.path(), r#"{"items":["a"]}"#).unwrap();
    assert_eq!(slot.load(), Vec::<String>::new());
}

#[test]
fn tampered_slot_with_duplicate_keys_is_collapsed_on_load() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let slot = slot_in(&temp);

    fs::write(slot.path(), r#"["Apple"," apple ","Banana"]"#).unwrap();
    assert_eq!(slot.load(), vec!["Apple", "Banana"]);
}

#[test]
fn save_overwrites_previous_contents() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let slot = slot_in(&temp);

    slot.save(&["a".to_string(), "b".to_string()]);
    slot.save(&["b".to_string()]);
    assert_eq!(slot.load(), vec!["b"]);
}
