//! In-memory annotation store
//!
//! DashMap-backed implementation of [`AnnotationStore`]. Used directly in
//! tests (injected, never swapped through global state) and usable as an
//! embedded store where durability is not required.

use crate::item::{Annotation, TagCount};
use crate::store::{AnnotationStore, MassDeleteFilter, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Concurrent in-memory annotation store.
#[derive(Debug, Default)]
pub struct MemoryAnnotationStore {
    items: DashMap<i64, Annotation>,
    next_id: AtomicI64,
}

impl MemoryAnnotationStore {
    /// Create an empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored annotations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no annotations.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn matches(filter: MassDeleteFilter, item: &Annotation) -> bool {
        if filter.annotation_id != 0 {
            return item.id == filter.annotation_id;
        }
        if filter.dashboard_id != 0 {
            return item.dashboard_id == filter.dashboard_id && item.panel_id == filter.panel_id;
        }
        // Org-wide: every annotation in the organization.
        true
    }
}

#[async_trait]
impl AnnotationStore for MemoryAnnotationStore {
    async fn save(&self, item: &mut Annotation) -> Result<(), StoreError> {
        if item.id == 0 {
            item.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        } else {
            // Keep generated ids ahead of explicitly chosen ones.
            self.next_id.fetch_max(item.id + 1, Ordering::Relaxed);
        }
        if item.epoch_end == 0 {
            item.epoch_end = item.epoch;
        }
        self.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn get_by_id(&self, org_id: i64, id: i64) -> Result<Annotation, StoreError> {
        self.items
            .get(&id)
            .filter(|item| item.org_id == org_id)
            .map(|item| item.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, item: &Annotation) -> Result<(), StoreError> {
        match self.items.get_mut(&item.id) {
            Some(mut entry) => {
                *entry = item.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(item.id)),
        }
    }

    async fn delete_by_id(&self, org_id: i64, id: i64) -> Result<(), StoreError> {
        let removed = self
            .items
            .remove_if(&id, |_, item| item.org_id == org_id)
            .is_some();
        if removed {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }

    async fn mass_delete(
        &self,
        org_id: i64,
        filter: MassDeleteFilter,
    ) -> Result<u64, StoreError> {
        // Counted inside the closure: a length diff would race with
        // concurrent saves.
        let deleted = AtomicU64::new(0);
        self.items.retain(|_, item| {
            let keep = item.org_id != org_id || !Self::matches(filter, item);
            if !keep {
                deleted.fetch_add(1, Ordering::Relaxed);
            }
            keep
        });
        Ok(deleted.load(Ordering::Relaxed))
    }

    async fn tags(&self, org_id: i64) -> Result<Vec<TagCount>, StoreError> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for item in self.items.iter().filter(|item| item.org_id == org_id) {
            for tag in &item.tags {
                *counts.entry(tag.clone()).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect())
    }
}
