//! Per-type storage: one primary index plus the secondary indexes.

use std::collections::HashMap;

use zonebook_core::{Entity, IdAllocator, SequentialId};

/// Entities that can be filed in a [`Table`].
pub(crate) trait Indexed: Entity<Id: SequentialId> {
    /// Number of secondary indexes kept for this entity type.
    const SECONDARY: usize;

    /// `(secondary index slot, key)` pairs under which this entity is filed.
    fn index_keys(&self) -> Vec<(usize, &str)>;

    fn set_id(&mut self, id: Option<Self::Id>);
}

/// Attribute value -> entities sharing that value, in insertion order.
#[derive(Debug)]
pub(crate) struct SecondaryIndex<Id> {
    buckets: HashMap<String, Vec<Id>>,
}

impl<Id> Default for SecondaryIndex<Id> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }
}

impl<Id: Copy + Eq> SecondaryIndex<Id> {
    /// Members filed under `key`; an absent bucket reads as empty.
    pub(crate) fn bucket(&self, key: &str) -> &[Id] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn file(&mut self, key: &str, id: Id) {
        let bucket = self.buckets.entry(key.to_string()).or_default();
        if !bucket.contains(&id) {
            bucket.push(id);
        }
    }

    fn unfile(&mut self, key: &str, id: Id) {
        let remaining = without(self.bucket(key), id);
        if remaining.is_empty() {
            self.buckets.remove(key);
        } else {
            self.buckets.insert(key.to_string(), remaining);
        }
    }
}

/// Copy of `bucket` with `id` filtered out.
///
/// Membership is by identifier: two distinct entities may carry equal
/// attributes. Filtering an empty bucket yields an empty list.
pub(crate) fn without<Id: Copy + Eq>(bucket: &[Id], id: Id) -> Vec<Id> {
    bucket.iter().copied().filter(|member| *member != id).collect()
}

#[derive(Debug)]
pub(crate) struct Table<E: Indexed> {
    ids: IdAllocator<E::Id>,
    primary: HashMap<E::Id, E>,
    secondary: Vec<SecondaryIndex<E::Id>>,
}

impl<E: Indexed> Default for Table<E> {
    fn default() -> Self {
        Self {
            ids: IdAllocator::new(),
            primary: HashMap::new(),
            secondary: (0..E::SECONDARY).map(|_| SecondaryIndex::default()).collect(),
        }
    }
}

impl<E: Indexed> Table<E> {
    pub(crate) fn get(&self, id: E::Id) -> Option<&E> {
        self.primary.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: E::Id) -> Option<&mut E> {
        self.primary.get_mut(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.primary.len()
    }

    /// Identifier of `entity` if it is indexed here under that identifier.
    ///
    /// The stored entity must carry the same identifying attributes; a value
    /// holding an identifier issued by another table is not resident.
    pub(crate) fn resident(&self, entity: &E) -> Option<E::Id> {
        let id = entity.id()?;
        let stored = self.primary.get(&id)?;
        (stored.index_keys() == entity.index_keys()).then_some(id)
    }

    pub(crate) fn bucket(&self, slot: usize, key: &str) -> &[E::Id] {
        self.secondary[slot].bucket(key)
    }

    /// Entities filed under `key` in secondary index `slot`, in insertion order.
    pub(crate) fn candidates<'a>(
        &'a self,
        slot: usize,
        key: &str,
    ) -> impl Iterator<Item = &'a E> + 'a {
        self.bucket(slot, key)
            .iter()
            .filter_map(move |id| self.primary.get(id))
    }

    /// Allocate an identifier and file `entity` under every index.
    ///
    /// No duplicate check happens here.
    pub(crate) fn insert(&mut self, mut entity: E) -> E::Id {
        let id = self.ids.next();
        entity.set_id(Some(id));
        for (slot, key) in entity.index_keys() {
            self.secondary[slot].file(key, id);
        }
        self.primary.insert(id, entity);
        id
    }

    /// Drop `id` from every index and hand back the unindexed value.
    pub(crate) fn remove(&mut self, id: E::Id) -> Option<E> {
        let mut entity = self.primary.remove(&id)?;
        for (slot, key) in entity.index_keys() {
            self.secondary[slot].unfile(key, id);
        }
        entity.set_id(None);
        Some(entity)
    }
}
