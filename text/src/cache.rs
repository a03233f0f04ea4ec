// Bounded memo table for the casing helpers.
//
// Casing is cheap to recompute, so the table stays simple: when it is full it
// is emptied before the next insert instead of tracking recency.
use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

pub(crate) const CAPACITY: usize = 1024;

pub(crate) struct Memo<K> {
    entries: Mutex<HashMap<K, String>>,
    capacity: usize,
}

impl<K: Eq + Hash> Memo<K> {
    pub(crate) fn new(capacity: usize) -> Self {
        Memo {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// The lock is not held while `compute` runs, so it may use other memos.
    pub(crate) fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> String) -> String {
        if let Some(hit) = self.entries.lock().get(&key) {
            return hit.clone();
        }

        let value = compute();
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.clear();
        }
        entries.insert(key, value.clone());
        value
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
