use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::entities::{
    application::JobApplication,
    employer_profile::EmployerProfile,
    job_listing::JobListing,
    seeker_profile::SeekerProfile,
    user::User,
};

/// One integer-keyed collection plus its id allocator.
///
/// Ids start at 1, grow monotonically and are never handed out twice,
/// independent of how many rows the table currently holds.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Allocates the next id, builds the row from it and stores it.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.allocate_id();
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Clone-merge-replace: the closure edits a copy which then replaces the stored row.
    pub fn update_with(&mut self, id: i64, merge: impl FnOnce(&mut T)) -> Option<T> {
        let slot = self.rows.get_mut(&id)?;
        let mut next = slot.clone();
        merge(&mut next);
        *slot = next.clone();
        Some(next)
    }

    /// Rows in ascending id order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.rows.values().find(|row| predicate(row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Collections {
    pub users: Table<User>,
    pub seeker_profiles: Table<SeekerProfile>,
    pub employer_profiles: Table<EmployerProfile>,
    pub jobs: Table<JobListing>,
    pub applications: Table<JobApplication>,
}

/// Shared handle to the process-wide collections.
///
/// Every repository call takes the lock exactly once and never awaits while
/// holding it, so a uniqueness check and the insert it guards are atomic.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemStore {
    pub fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write()
    }
}

pub fn create_store() -> MemStore {
    info!("In-memory store initialised.");
    MemStore::default()
}
