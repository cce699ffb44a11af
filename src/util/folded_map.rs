use std::collections::HashMap;

/// A hash map whose string keys compare case-insensitively.
///
/// Keys are stored folded to lower case; lookups fold the requested key the same way.
/// Iteration yields the folded keys.
///
/// # Example
/// ```
/// use decalc::util::folded_map::FoldedMap;
///
/// let mut map = FoldedMap::new();
/// map.insert("Rate", 3);
///
/// assert_eq!(map.get("RATE"), Some(&3));
/// assert!(map.contains("rate"));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["rate"]);
/// ```
#[derive(Debug, Clone)]
pub struct FoldedMap<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for FoldedMap<V> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<V> FoldedMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under the folded `key`, returning the value it
    /// replaced.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.entries.insert(fold(key), value)
    }

    /// Returns the value stored under `key`, ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&fold(key))
    }

    /// Returns `true` if a value is stored under `key`, ignoring case.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&fold(key))
    }

    /// Iterates over the folded keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over folded keys and their values in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

fn fold(key: &str) -> String {
    key.to_lowercase()
}
