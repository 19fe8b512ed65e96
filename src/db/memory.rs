// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process activity store.
//!
//! Backs `memory://` deployments and the test suite. Listing returns records
//! in insertion order.

use crate::models::{Activity, ActivityPatch};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemoryStore {
    docs: Arc<DashMap<String, (u64, Activity)>>,
    seq: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new document. Returns `false` if the ID is already taken.
    pub fn insert(&self, activity: &Activity) -> bool {
        match self.docs.entry(activity.id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                let seq = self.seq.fetch_add(1, Ordering::Relaxed);
                slot.insert((seq, activity.clone()));
                true
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<Activity> {
        self.docs.get(id).map(|entry| entry.1.clone())
    }

    pub fn list(&self) -> Vec<Activity> {
        let mut docs: Vec<(u64, Activity)> = self
            .docs
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        docs.sort_by_key(|(seq, _)| *seq);
        docs.into_iter().map(|(_, activity)| activity).collect()
    }

    /// Merge `patch` into the document, holding the entry lock for the
    /// read-modify-write.
    pub fn update(&self, id: &str, patch: ActivityPatch) -> Option<Activity> {
        let mut entry = self.docs.get_mut(id)?;
        entry.1.apply(patch);
        Some(entry.1.clone())
    }

    pub fn delete(&self, id: &str) {
        self.docs.remove(id);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.docs.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
