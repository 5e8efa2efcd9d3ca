use serde_json::{Map, Value};

use std::collections::BTreeSet;

/// Set of dot-joined key paths, iterated in sorted order.
pub type KeySet = BTreeSet<String>;

/// Keys that differ between an original and a translated document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// In the original, absent from the translation.
    pub missing: KeySet,
    /// In the translation, absent from the original.
    pub extra: KeySet,
}

impl KeyDiff {
    /// True if neither side has a key the other lacks.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Collect the path of every leaf of a JSON object.
///
/// Nested objects are descended into and their keys joined with `.`; an
/// empty object, an array, or a scalar ends the path. Array elements are
/// never inspected. Keys are not escaped, so a key containing `.` can
/// collide with a nested path and the two collapse into a single entry.
pub fn flatten(tree: &Map<String, Value>) -> KeySet {
    let mut keys = KeySet::new();
    for (key, value) in tree {
        let nested = match value {
            Value::Object(map) => flatten(map),
            _ => KeySet::new(),
        };
        if nested.is_empty() {
            keys.insert(key.clone());
        } else {
            keys.extend(nested.into_iter().map(|path| format!("{}.{}", key, path)));
        }
    }
    keys
}

/// Compare the key sets of the original and the translated document.
pub fn diff(original: &KeySet, translated: &KeySet) -> KeyDiff {
    KeyDiff {
        missing: original.difference(translated).cloned().collect(),
        extra: translated.difference(original).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(val: Value) -> Map<String, Value> {
        match val {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    fn set(keys: &[&str]) -> KeySet {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn flatten_empty_root() {
        assert!(flatten(&Map::new()).is_empty());
    }

    #[test]
    fn flatten_empty_nested_object_is_leaf() {
        let tree = object(json!({ "a": {} }));
        assert_eq!(flatten(&tree), set(&["a"]));
    }

    #[test]
    fn flatten_nested_objects() {
        let tree = object(json!({ "a": { "b": 1, "c": 2 } }));
        assert_eq!(flatten(&tree), set(&["a.b", "a.c"]));

        let tree = object(json!({ "x": { "y": { "z": "deep" } }, "w": "top" }));
        assert_eq!(flatten(&tree), set(&["w", "x.y.z"]));
    }

    #[test]
    fn flatten_does_not_descend_into_arrays() {
        let tree = object(json!({ "a": [1, 2, { "x": 1 }] }));
        assert_eq!(flatten(&tree), set(&["a"]));

        let tree = object(json!({ "a": [] }));
        assert_eq!(flatten(&tree), set(&["a"]));
    }

    #[test]
    fn flatten_scalar_and_null_leaves() {
        let tree = object(json!({
            "s": "text",
            "n": 1.5,
            "b": false,
            "z": null
        }));
        assert_eq!(flatten(&tree), set(&["b", "n", "s", "z"]));
    }

    #[test]
    fn flatten_one_path_per_leaf() {
        let tree = object(json!({
            "menu": {
                "file": { "open": "Open", "recent": [], "extra": {} },
                "edit": { "undo": "Undo", "redo": null }
            },
            "title": "App",
            "count": 3
        }));
        let keys = flatten(&tree);
        assert_eq!(keys.len(), 7);
        assert_eq!(
            keys,
            set(&[
                "count",
                "menu.edit.redo",
                "menu.edit.undo",
                "menu.file.extra",
                "menu.file.open",
                "menu.file.recent",
                "title",
            ])
        );
    }

    #[test]
    fn flatten_keeps_dot_ambiguity() {
        let tree = object(json!({ "a.b": "flat", "a": { "b": "nested" } }));
        assert_eq!(flatten(&tree), set(&["a.b"]));
    }

    #[test]
    fn diff_reports_both_directions() {
        let original = set(&["a.b", "a.c", "d"]);
        let translated = set(&["a.b", "a.z", "d"]);
        let delta = diff(&original, &translated);
        assert_eq!(delta.missing, set(&["a.c"]));
        assert_eq!(delta.extra, set(&["a.z"]));
        assert!(!delta.is_empty());
    }

    #[test]
    fn diff_of_equal_sets_is_empty() {
        let keys = set(&["a", "b.c"]);
        let delta = diff(&keys, &keys);
        assert!(delta.is_empty());
        assert_eq!(delta, KeyDiff::default());
    }

    #[test]
    fn diff_is_symmetric() {
        let original = flatten(&object(json!({ "a": { "b": "hi", "c": "bye" }, "x": 1 })));
        let translated = flatten(&object(json!({ "a": { "b": "salut", "z": {} }, "y": [] })));
        let forward = diff(&original, &translated);
        let backward = diff(&translated, &original);
        assert_eq!(forward.missing, backward.extra);
        assert_eq!(forward.extra, backward.missing);
        assert_eq!(forward.missing, set(&["a.c", "x"]));
        assert_eq!(forward.extra, set(&["a.z", "y"]));
    }

    #[test]
    fn diff_against_empty_set() {
        let original = set(&["a", "b"]);
        let delta = diff(&original, &KeySet::new());
        assert_eq!(delta.missing, original);
        assert!(delta.extra.is_empty());
    }
}
