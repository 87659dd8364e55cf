//! Directory groups and ancestor merging.
//!
//! Assets are bucketed by [`GroupKey`] while they are discovered. Once
//! discovery is done, [`GroupMap::merge`] propagates every bucket into each
//! of its ancestor keys so a group list such as `ocean_sprites` contains
//! every sprite under `ocean/`, not only the ones directly inside it.
//!
//! Ancestors are found by splitting the flattened key on `_`. A directory
//! named `deep-sea` therefore also feeds a `deep` group; this keeps the
//! generated names stable for existing consumers.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::asset::{GroupKey, Identifier};

/// Identifiers bucketed by the directory they live in.
///
/// Keys keep the order in which they were first seen and each bucket keeps
/// insertion order without duplicates. Merging relies on both orders to
/// produce reproducible group lists.
#[derive(Debug, Clone, Default)]
pub struct GroupMap {
    order: Vec<GroupKey>,
    buckets: HashMap<GroupKey, Vec<Identifier>>,
}

impl GroupMap {
    /// Create an empty group map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an identifier to a group, ignoring repeats.
    pub fn insert(&mut self, key: GroupKey, identifier: Identifier) {
        if !self.buckets.contains_key(&key) {
            self.order.push(key.clone());
        }
        let bucket = self.buckets.entry(key).or_default();
        if !bucket.contains(&identifier) {
            bucket.push(identifier);
        }
    }

    /// Identifiers directly in a group.
    pub fn get(&self, key: &GroupKey) -> Option<&[Identifier]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no identifier has been inserted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Identifier])> {
        self.order
            .iter()
            .map(move |key| (key, self.buckets[key].as_slice()))
    }

    /// Merge every group into all of its ancestors.
    ///
    /// For each key, its identifiers are appended to every strict prefix
    /// of the key and to the key itself. Each merged list is then
    /// deduplicated keeping the first occurrence.
    pub fn merge(&self) -> MergedGroupMap {
        let mut merged: BTreeMap<GroupKey, Vec<Identifier>> = BTreeMap::new();

        for (key, identifiers) in self.iter() {
            for ancestor in key.ancestors() {
                merged
                    .entry(ancestor)
                    .or_default()
                    .extend_from_slice(identifiers);
            }
            merged
                .entry(key.clone())
                .or_default()
                .extend_from_slice(identifiers);
        }

        for identifiers in merged.values_mut() {
            dedup_stable(identifiers);
        }

        MergedGroupMap { groups: merged }
    }
}

/// Remove repeats from a list, keeping the first occurrence of each.
fn dedup_stable(identifiers: &mut Vec<Identifier>) {
    let mut seen = HashSet::with_capacity(identifiers.len());
    identifiers.retain(|identifier| seen.insert(identifier.clone()));
}

/// Groups with every descendant's identifiers folded in, sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedGroupMap {
    groups: BTreeMap<GroupKey, Vec<Identifier>>,
}

impl MergedGroupMap {
    /// Identifiers in a merged group.
    pub fn get(&self, key: &GroupKey) -> Option<&[Identifier]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of merged groups, including the root group if present.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All groups sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Identifier])> {
        self.groups
            .iter()
            .map(|(key, identifiers)| (key, identifiers.as_slice()))
    }

    /// Groups that are written to the output: non-root and non-empty.
    pub fn emitted(&self) -> impl Iterator<Item = (&GroupKey, &[Identifier])> {
        self.iter()
            .filter(|(key, identifiers)| !key.is_root() && !identifiers.is_empty())
    }
}
