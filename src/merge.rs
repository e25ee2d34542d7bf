//! Merging values into a caller-owned map with a binary operator.
//!
//! The map is explicit state owned by the caller; nothing here keeps a
//! global table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::function::Transform2;

/// Merges `value` into `map` under `key`.
///
/// If `key` is absent, `value` is inserted as-is. Otherwise the stored
/// value `old` is replaced by `remap.combine(old, value)`. Returns the value
/// now stored under `key`.
///
/// `remap` receives a clone of the stored value, so the map is left
/// unchanged if `remap` panics.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
///
/// use funcops::merge::merge;
///
/// let mut counts: HashMap<String, i32> = HashMap::new();
/// let add = |left: i32, right: i32| left + right;
///
/// assert_eq!(*merge(&mut counts, "Mike".to_string(), 1, &add), 1);
/// assert_eq!(*merge(&mut counts, "Mike".to_string(), 1, &add), 2);
/// ```
pub fn merge<'map, K, V, F>(map: &'map mut HashMap<K, V>, key: K, value: V, remap: &F) -> &'map V
where
    K: Eq + Hash,
    V: Clone,
    F: Transform2<V> + ?Sized,
{
    match map.entry(key) {
        Entry::Occupied(entry) => {
            let stored = entry.into_mut();
            *stored = remap.combine(stored.clone(), value);
            stored
        }
        Entry::Vacant(entry) => entry.insert(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_inserts_absent_key_without_calling_remap() {
        let mut map: HashMap<&str, i32> = HashMap::new();
        let panic_on_call = |_: i32, _: i32| -> i32 { unreachable!("remap must not run") };

        assert_eq!(*merge(&mut map, "Lisa", 5, &panic_on_call), 5);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_merge_passes_old_value_first() {
        let mut map = HashMap::from([("Bob", 10)]);
        let subtract = |old: i32, new: i32| old - new;

        assert_eq!(*merge(&mut map, "Bob", 3, &subtract), 7);
    }

    #[test]
    fn test_merge_keeps_entry_when_remap_panics() {
        use std::panic::{self, AssertUnwindSafe};

        let mut map = HashMap::from([("Mike", 1)]);
        let failing = |_: i32, _: i32| -> i32 { panic!("remap failed") };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            merge(&mut map, "Mike", 1, &failing);
        }));

        assert!(outcome.is_err());
        assert_eq!(map, HashMap::from([("Mike", 1)]));
    }
}
