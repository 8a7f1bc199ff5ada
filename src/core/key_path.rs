//! Dotted key path navigation over JSON objects.
//!
//! A key path like `"taskTimeline.tooltip.messageTypes"` descends one object
//! level per segment. A missing segment, or a segment whose value is not an
//! object, ends the walk quietly: locale files drift between languages and a
//! section that is absent or has the wrong shape simply has nothing to edit.

use serde_json::{Map, Value};

/// Return the object at a key path, if every step along the way is an object.
pub fn object_mut<'a>(
    root: &'a mut Map<String, Value>,
    key_path: &str,
) -> Option<&'a mut Map<String, Value>> {
    let mut current = root;
    for part in key_path.split('.') {
        match current.get_mut(part) {
            Some(Value::Object(map)) => current = map,
            _ => return None,
        }
    }
    Some(current)
}

/// Remove the value at a key path, keeping the order of the remaining keys.
///
/// Returns the removed value, or `None` if nothing was there. Parents left
/// empty by the removal are kept.
pub fn remove(root: &mut Map<String, Value>, key_path: &str) -> Option<Value> {
    let (parent, last) = match key_path.rsplit_once('.') {
        Some((parent, last)) => (object_mut(root, parent)?, last),
        None => (root, key_path),
    };
    parent.shift_remove(last)
}
