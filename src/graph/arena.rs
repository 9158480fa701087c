//! Generation-checked arena.
//!
//! Removing a value bumps the slot's generation, so an [`Idx`] handed out
//! before the removal no longer resolves even after the slot is reused.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Typed index into an [`Arena`].
pub struct Idx<T> {
    slot: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    fn new(slot: u32, generation: u32) -> Self {
        Self {
            slot,
            generation,
            _marker: PhantomData,
        }
    }

    pub fn slot(self) -> u32 {
        self.slot
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> {}

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.generation == other.generation
    }
}

impl<T> Eq for Idx<T> {}

impl<T> Hash for Idx<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = std::any::type_name::<T>();
        let short = name.rsplit("::").next().unwrap_or(name);
        write!(f, "{short}#{}v{}", self.slot, self.generation)
    }
}

enum Entry<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32 },
}

/// Slot storage with free-list reuse.
pub struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) -> Idx<T> {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.entries[slot as usize];
            let generation = match entry {
                Entry::Vacant { generation } => *generation,
                Entry::Occupied { generation, .. } => generation.wrapping_add(1),
            };
            *entry = Entry::Occupied { generation, value };
            return Idx::new(slot, generation);
        }
        let slot = self.entries.len() as u32;
        self.entries.push(Entry::Occupied {
            generation: 0,
            value,
        });
        Idx::new(slot, 0)
    }

    pub fn contains(&self, idx: Idx<T>) -> bool {
        self.get(idx).is_some()
    }

    pub fn get(&self, idx: Idx<T>) -> Option<&T> {
        match self.entries.get(idx.slot as usize)? {
            Entry::Occupied { generation, value } if *generation == idx.generation => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, idx: Idx<T>) -> Option<&mut T> {
        match self.entries.get_mut(idx.slot as usize)? {
            Entry::Occupied { generation, value } if *generation == idx.generation => Some(value),
            _ => None,
        }
    }

    /// Remove the value at `idx`. Returns `None` if the index is stale.
    pub fn remove(&mut self, idx: Idx<T>) -> Option<T> {
        let entry = self.entries.get_mut(idx.slot as usize)?;
        match entry {
            Entry::Occupied { generation, .. } if *generation == idx.generation => {}
            _ => return None,
        }
        let vacant = Entry::Vacant {
            generation: idx.generation.wrapping_add(1),
        };
        let Entry::Occupied { value, .. } = std::mem::replace(entry, vacant) else {
            return None;
        };
        self.free.push(idx.slot);
        self.len -= 1;
        Some(value)
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Idx<T>, &T)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| match entry {
                Entry::Occupied { generation, value } => {
                    Some((Idx::new(slot as u32, *generation), value))
                }
                Entry::Vacant { .. } => None,
            })
    }

    pub fn ids(&self) -> Vec<Idx<T>> {
        self.iter().map(|(id, _)| id).collect()
    }
}
