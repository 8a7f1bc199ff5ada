//! Propagating a new translation key from the source locale to every locale.
//!
//! Translations are not generated automatically, so the source locale's
//! text is copied as a placeholder. The key is placed right after an anchor
//! key so that every locale file keeps the same ordering as the source file.

use serde_json::{Map, Value};

pub const DEFAULT_SECTION: &str = "experimental";
pub const DEFAULT_KEY: &str = "MULTIPLE_CONCURRENT_TASKS";
pub const DEFAULT_ANCHOR: &str = "MULTIPLE_NATIVE_TOOL_CALLS";

/// Where a key is inserted: `section.key`, positioned after `section.anchor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub section: String,
    pub key: String,
    pub anchor: String,
}

impl Default for Insertion {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            key: DEFAULT_KEY.to_string(),
            anchor: DEFAULT_ANCHOR.to_string(),
        }
    }
}

/// What [`Insertion::apply`] did to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was already there; the document was not touched.
    AlreadyPresent,
    /// The key was inserted after the anchor.
    AfterAnchor,
    /// The anchor was missing; the key was appended to the section.
    Appended,
}

impl Insertion {
    /// Dotted path of the inserted key, e.g. `experimental.MULTIPLE_CONCURRENT_TASKS`.
    pub fn key_path(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }

    /// The value to propagate, read from the source locale's document.
    pub fn source_value<'a>(&self, source: &'a Map<String, Value>) -> Option<&'a Value> {
        match source.get(&self.section) {
            Some(Value::Object(section)) => section.get(&self.key),
            _ => None,
        }
    }

    /// Ensure `section.key` exists in `doc`, inserting `value` if it does not.
    ///
    /// A missing or non-object section is replaced by a fresh object holding
    /// only the new key. An existing section keeps its place in the document.
    pub fn apply(&self, doc: &mut Map<String, Value>, value: &Value) -> InsertOutcome {
        let present = matches!(
            doc.get(&self.section),
            Some(Value::Object(section)) if section.contains_key(&self.key)
        );
        if present {
            return InsertOutcome::AlreadyPresent;
        }

        let section = match doc.get_mut(&self.section).map(Value::take) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let outcome = if section.contains_key(&self.anchor) {
            InsertOutcome::AfterAnchor
        } else {
            InsertOutcome::Appended
        };

        let section = insert_after(section, &self.key, value.clone(), &self.anchor);
        doc.insert(self.section.clone(), Value::Object(section));
        outcome
    }
}

/// Rebuild `map` with `key` placed immediately after `anchor`.
///
/// If `anchor` is not in the map, `key` goes last. A map that already holds
/// `key` is returned unchanged.
///
/// # Examples
///
/// ```
/// use locale_patch::core::insert_after;
/// use serde_json::{json, Map, Value};
///
/// let map: Map<String, Value> = serde_json::from_str(r#"{"A": 1, "ANCHOR": 2, "B": 3}"#).unwrap();
/// let map = insert_after(map, "NEW", json!(true), "ANCHOR");
/// let keys: Vec<&str> = map.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["A", "ANCHOR", "NEW", "B"]);
/// ```
pub fn insert_after(
    map: Map<String, Value>,
    key: &str,
    value: Value,
    anchor: &str,
) -> Map<String, Value> {
    if map.contains_key(key) {
        return map;
    }

    let mut result = Map::with_capacity(map.len() + 1);
    let mut pending = Some(value);
    for (k, v) in map {
        let is_anchor = k == anchor;
        result.insert(k, v);
        if is_anchor && let Some(value) = pending.take() {
            result.insert(key.to_string(), value);
        }
    }
    if let Some(value) = pending {
        result.insert(key.to_string(), value);
    }

    result
}
