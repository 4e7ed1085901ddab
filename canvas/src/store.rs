//! In-memory store of canvas objects: the client-side cache.
//!
//! The store is the single source of truth for the set of objects
//! materialized on this client. It holds exactly the union of the last
//! viewport query response and every create/update/delete applied since,
//! deduplicated by id. The guarded insert/replace operations make applying
//! the same notification twice a no-op, which is what keeps a local HTTP
//! response and the push frame describing the same mutation from
//! duplicating or resurrecting objects — the two arrive in no particular
//! order.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::object::CanvasObject;

/// Keyed cache of all objects currently materialized client-side.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: HashMap<i64, CanvasObject>,
}

impl ObjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an object unconditionally.
    pub fn insert(&mut self, obj: CanvasObject) {
        self.objects.insert(obj.id, obj);
    }

    /// Insert only if no object with this id exists yet.
    ///
    /// Returns `true` if the object was inserted. This is the CREATE
    /// guard: a creator's own HTTP response and the push CREATE frame for
    /// the same id collapse into one cache entry.
    pub fn insert_new(&mut self, obj: CanvasObject) -> bool {
        if self.objects.contains_key(&obj.id) {
            return false;
        }
        self.objects.insert(obj.id, obj);
        true
    }

    /// Replace an existing object wholesale; no-op when the id is absent.
    ///
    /// Returns `true` if a replacement happened. This is the UPDATE
    /// semantic: the incoming object is the new truth, never merged with
    /// cached fields.
    pub fn replace(&mut self, obj: CanvasObject) -> bool {
        if !self.objects.contains_key(&obj.id) {
            return false;
        }
        self.objects.insert(obj.id, obj);
        true
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: i64) -> Option<CanvasObject> {
        self.objects.remove(&id)
    }

    /// Replace the entire cached set with a query response.
    pub fn load_all(&mut self, objects: Vec<CanvasObject>) {
        self.objects.clear();
        for obj in objects {
            self.objects.insert(obj.id, obj);
        }
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&CanvasObject> {
        self.objects.get(&id)
    }

    /// Whether an object with this id is cached.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.objects.contains_key(&id)
    }

    /// All objects sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&CanvasObject> {
        let mut objs: Vec<&CanvasObject> = self.objects.values().collect();
        objs.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        objs
    }

    /// The next free z-index (one above the current maximum).
    #[must_use]
    pub fn next_z_index(&self) -> i32 {
        self.objects
            .values()
            .map(|o| o.z_index)
            .max()
            .map_or(0, |z| z.saturating_add(1))
    }

    /// Number of cached objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
