//! Dictionary Tests
//!
//! Tests verify:
//! - Set / get / has round trips
//! - Overwrite keeps position and count
//! - Insertion order under pure insertion
//! - Order-preserving deletion
//! - Lookup misses are plain `None` / `false`
//! - Ordinal access and iterators

use kvdict::dict::Slot;
use kvdict::{Blob, Dictionary};

// =============================================================================
// Helper Functions
// =============================================================================

fn text(s: &str) -> Blob {
    Blob::from_text(s).unwrap()
}

fn keys_of(dict: &Dictionary) -> Vec<String> {
    dict.keys().map(|k| k.to_text_lossy().into_owned()).collect()
}

fn dict_with(keys: &[&str]) -> Dictionary {
    let mut dict = Dictionary::new();
    for key in keys {
        dict.set(text(key), text(&format!("value-{}", key))).unwrap();
    }
    dict
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_dictionary_is_empty() {
    let dict = Dictionary::new();

    assert_eq!(dict.len(), 0);
    assert_eq!(dict.capacity(), 0);
    assert!(dict.is_empty());
    assert!(dict.key_at(0).is_none());
}

#[test]
fn test_slot_view_of_unallocated_dictionary() {
    let dict = Dictionary::new();

    assert_eq!(dict.slots().capacity(), 0);
    assert_eq!(dict.slots().iter().count(), 0);
}

#[test]
fn test_slot_view_tracks_live_pairs() {
    let mut dict = dict_with(&["a", "b", "c"]);
    dict.delete(text("b"));

    let occupied = dict
        .slots()
        .iter()
        .filter(|slot| matches!(slot, Slot::Occupied(_)))
        .count();
    let deleted = dict.slots().iter().filter(|slot| **slot == Slot::Deleted).count();

    assert_eq!(dict.slots().capacity(), 8);
    assert_eq!(occupied, 2);
    assert_eq!(deleted, 1);
}

#[test]
fn test_set_and_get() {
    let mut dict = Dictionary::new();
    dict.set(text("hello"), text("world!")).unwrap();

    let value = dict.get(text("hello")).unwrap();
    assert_eq!(value.as_bytes(), b"world!\0");
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.capacity(), 8);
}

#[test]
fn test_round_trip_binary_data() {
    let mut dict = Dictionary::new();
    let key = vec![0u8, 255, 7, 0, 42];
    let value: Vec<u8> = (0..=255).collect();

    dict.set(Blob::new(&key).unwrap(), Blob::new(&value).unwrap())
        .unwrap();

    assert_eq!(dict.get(Blob::new(&key).unwrap()).unwrap().as_bytes(), &value[..]);
}

#[test]
fn test_empty_key_and_value() {
    let mut dict = Dictionary::new();
    dict.set(Blob::new(&[]).unwrap(), Blob::new(&[]).unwrap())
        .unwrap();

    assert!(dict.has(Blob::new(&[]).unwrap()));
    assert!(dict.get(Blob::new(&[]).unwrap()).unwrap().is_empty());
}

#[test]
fn test_has() {
    let dict = dict_with(&["a", "b"]);

    assert!(dict.has(text("a")));
    assert!(dict.has(text("b")));
    assert!(!dict.has(text("c")));
}

#[test]
fn test_overwrite_preserves_count_and_position() {
    let mut dict = dict_with(&["first", "second", "third"]);

    dict.set(text("second"), text("replaced")).unwrap();

    assert_eq!(dict.len(), 3);
    assert_eq!(dict.get(text("second")).unwrap().to_text_lossy(), "replaced");
    assert_eq!(keys_of(&dict), vec!["first", "second", "third"]);
    assert_eq!(dict.value_at(1).unwrap().to_text_lossy(), "replaced");
}

#[test]
fn test_overwrite_many_times() {
    let mut dict = Dictionary::new();
    for i in 0..100 {
        dict.set(text("counter"), text(&i.to_string())).unwrap();
    }

    assert_eq!(dict.len(), 1);
    assert_eq!(dict.capacity(), 8);
    assert_eq!(dict.get(text("counter")).unwrap().to_text_lossy(), "99");
}

#[test]
fn test_text_and_raw_keys_are_distinct() {
    let mut dict = Dictionary::new();
    dict.set(text("k"), text("terminated")).unwrap();
    dict.set(Blob::new(b"k").unwrap(), text("raw")).unwrap();

    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get(text("k")).unwrap().to_text_lossy(), "terminated");
    assert_eq!(dict.get_bytes(b"k").unwrap().to_text_lossy(), "raw");
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_insertion_order_preserved() {
    let names: Vec<String> = (0..50).map(|i| format!("k{:02}", 49 - i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let dict = dict_with(&refs);

    assert_eq!(keys_of(&dict), names);
    for (i, name) in names.iter().enumerate() {
        assert_eq!(dict.key_at(i).unwrap().to_text_lossy(), name.as_str());
    }
}

#[test]
fn test_ordinal_access_out_of_range() {
    let dict = dict_with(&["only"]);

    assert!(dict.key_at(1).is_none());
    assert!(dict.value_at(1).is_none());
    assert!(dict.entry_at(usize::MAX).is_none());
}

#[test]
fn test_entry_at_matches_key_at_and_value_at() {
    let dict = dict_with(&["x", "y"]);
    let (key, value) = dict.entry_at(1).unwrap();

    assert_eq!(key, dict.key_at(1).unwrap());
    assert_eq!(value, dict.value_at(1).unwrap());
    assert_eq!(value.to_text_lossy(), "value-y");
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_compacts_in_order() {
    let mut dict = dict_with(&["A", "B", "C", "D"]);

    assert!(dict.delete(text("B")));

    assert_eq!(keys_of(&dict), vec!["A", "C", "D"]);
    assert_eq!(dict.len(), 3);
    assert!(!dict.has(text("B")));
    assert!(dict.has(text("A")));
    assert!(dict.has(text("C")));
    assert!(dict.has(text("D")));
    assert_eq!(dict.get(text("D")).unwrap().to_text_lossy(), "value-D");
}

#[test]
fn test_delete_first_and_last() {
    let mut dict = dict_with(&["A", "B", "C", "D"]);

    assert!(dict.delete(text("A")));
    assert!(dict.delete(text("D")));

    assert_eq!(keys_of(&dict), vec!["B", "C"]);
    assert_eq!(dict.get(text("B")).unwrap().to_text_lossy(), "value-B");
    assert_eq!(dict.get(text("C")).unwrap().to_text_lossy(), "value-C");
}

#[test]
fn test_delete_everything() {
    let mut dict = dict_with(&["a", "b", "c"]);

    for key in ["b", "a", "c"] {
        assert!(dict.delete(text(key)));
    }

    assert!(dict.is_empty());
    assert_eq!(dict.capacity(), 8); // no shrink on delete
    assert!(dict.key_at(0).is_none());
}

#[test]
fn test_delete_twice() {
    let mut dict = dict_with(&["a"]);

    assert!(dict.delete(text("a")));
    assert!(!dict.delete(text("a")));
}

#[test]
fn test_reinsert_after_delete_goes_last() {
    let mut dict = dict_with(&["a", "b", "c"]);

    dict.delete(text("a"));
    dict.set(text("a"), text("again")).unwrap();

    assert_eq!(keys_of(&dict), vec!["b", "c", "a"]);
    assert_eq!(dict.get(text("a")).unwrap().to_text_lossy(), "again");
}

#[test]
fn test_remove_returns_pair() {
    let mut dict = dict_with(&["a", "b"]);

    let (key, value) = dict.remove(text("a")).unwrap();

    assert_eq!(key.to_text_lossy(), "a");
    assert_eq!(value.to_text_lossy(), "value-a");
    assert!(dict.remove(text("a")).is_none());
}

#[test]
fn test_lookups_after_many_deletes() {
    let names: Vec<String> = (0..64).map(|i| format!("item{}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut dict = dict_with(&refs);

    for name in names.iter().filter(|n| n.ends_with('3') || n.ends_with('7')) {
        assert!(dict.delete(text(name)));
    }

    let expected: Vec<String> = names
        .iter()
        .filter(|n| !(n.ends_with('3') || n.ends_with('7')))
        .cloned()
        .collect();

    assert_eq!(keys_of(&dict), expected);
    for name in &expected {
        let value = dict.get(text(name)).unwrap();
        assert_eq!(value.to_text_lossy(), format!("value-{}", name));
    }
}

// =============================================================================
// Not-Found Tests
// =============================================================================

#[test]
fn test_miss_on_unallocated_dictionary() {
    let mut dict = Dictionary::new();

    assert!(dict.get(text("nothing")).is_none());
    assert!(!dict.has(text("nothing")));
    assert!(!dict.delete(text("nothing")));
    assert_eq!(dict.capacity(), 0);
}

#[test]
fn test_miss_on_populated_dictionary() {
    let mut dict = dict_with(&["a", "b", "c"]);

    assert!(dict.get(text("zzz")).is_none());
    assert!(!dict.has(text("zzz")));
    assert!(!dict.delete(text("zzz")));
    assert_eq!(dict.len(), 3);
}

// =============================================================================
// Iterator Tests
// =============================================================================

#[test]
fn test_iter_yields_pairs_in_order() {
    let dict = dict_with(&["one", "two", "three"]);

    let pairs: Vec<(String, String)> = dict
        .iter()
        .map(|(k, v)| (k.to_text_lossy().into_owned(), v.to_text_lossy().into_owned()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("one".to_string(), "value-one".to_string()),
            ("two".to_string(), "value-two".to_string()),
            ("three".to_string(), "value-three".to_string()),
        ]
    );
    assert_eq!(dict.iter().len(), 3);
}

#[test]
fn test_iter_reverse() {
    let dict = dict_with(&["a", "b", "c"]);
    let reversed: Vec<String> = dict
        .iter()
        .rev()
        .map(|(k, _)| k.to_text_lossy().into_owned())
        .collect();

    assert_eq!(reversed, vec!["c", "b", "a"]);
}

#[test]
fn test_values_iterator() {
    let dict = dict_with(&["a", "b"]);
    let values: Vec<String> = dict
        .values()
        .map(|v| v.to_text_lossy().into_owned())
        .collect();

    assert_eq!(values, vec!["value-a", "value-b"]);
}

#[test]
fn test_into_iter_owns_pairs() {
    let dict = dict_with(&["a", "b"]);
    let owned: Vec<(Blob, Blob)> = dict.into_iter().collect();

    assert_eq!(owned.len(), 2);
    assert_eq!(owned[0].0.to_text_lossy(), "a");
    assert_eq!(owned[1].1.to_text_lossy(), "value-b");
}

#[test]
fn test_debug_renders_in_order() {
    let dict = dict_with(&["b", "a"]);
    assert_eq!(
        format!("{:?}", dict),
        r#"{"b": "value-b", "a": "value-a"}"#
    );
}
