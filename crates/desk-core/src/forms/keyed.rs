//! Growable list whose items carry stable keys.
//!
//! Editing one FAQ while another is removed must not move the cursor to a
//! different entry, so every item is addressed by the [`ItemKey`] handed out
//! on insertion rather than by position.

/// Stable handle for an item in a [`KeyedList`]. Keys are never reused within
/// one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

impl ItemKey {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedList<T> {
    items: Vec<(ItemKey, T)>,
    next: u64,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next: 0,
        }
    }
}

impl<T> KeyedList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return its key.
    pub fn push(&mut self, item: T) -> ItemKey {
        let key = ItemKey(self.next);
        self.next += 1;
        self.items.push((key, item));
        key
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: ItemKey) -> Option<&T> {
        self.items.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut T> {
        self.items
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn position(&self, key: ItemKey) -> Option<usize> {
        self.items.iter().position(|(k, _)| *k == key)
    }

    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<ItemKey> {
        self.items.get(index).map(|(k, _)| *k)
    }

    pub fn remove(&mut self, key: ItemKey) -> Option<T> {
        let index = self.position(key)?;
        Some(self.items.remove(index).1)
    }

    /// Remove by position. Later items shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index).1)
    }

    /// Move the keyed item to `index` (clamped to the end of the list).
    /// Returns `false` when the key is unknown.
    pub fn move_to(&mut self, key: ItemKey, index: usize) -> bool {
        let Some(from) = self.position(key) else {
            return false;
        };
        let entry = self.items.remove(from);
        let to = index.min(self.items.len());
        self.items.insert(to, entry);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &T)> {
        self.items.iter().map(|(k, v)| (*k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|(_, v)| v)
    }
}

impl<T: Clone> KeyedList<T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

impl<T> FromIterator<T> for KeyedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}
