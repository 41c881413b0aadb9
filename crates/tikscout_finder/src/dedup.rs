use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Keeps one item per key. A repeated key overwrites the earlier item in place,
/// so the survivor is the last occurrence, positioned where the key first appeared.
pub fn dedup_last_wins<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut unique: Vec<T> = Vec::new();

    for item in items {
        match index.entry(key(&item)) {
            Entry::Occupied(slot) => unique[*slot.get()] = item,
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(item);
            }
        }
    }

    unique
}
