/// Ordered multi-map from a key to a list of distinct values.
///
/// Keys keep the order in which they were first added, and so do the values
/// under each key. Adding a value that is already present under the same key
/// is a no-op. There is no removal: a bag lives for one request and is then
/// dropped as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBag<K, V> {
    items: Vec<(K, Vec<V>)>,
}

impl<K, V> Default for MessageBag<K, V> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K: PartialEq, V: PartialEq> MessageBag<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `key` unless an equal value is already there
    pub fn add(&mut self, key: K, value: V) {
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            None => self.items.push((key, vec![value])),
        }
    }

    pub fn has(&self, key: &K) -> bool {
        self.items.iter().any(|(k, _)| k == key)
    }

    /// First value added under `key`
    pub fn first(&self, key: &K) -> Option<&V> {
        self.get(key).first()
    }

    /// All values under `key`, empty when the key was never added
    pub fn get(&self, key: &K) -> &[V] {
        self.items
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct keys
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.items.iter().map(|(k, values)| (k, values.as_slice()))
    }
}
