//! Experience Store
//!
//! Owns the canonical collection of experience records and all identifier
//! assignment. Writers are serialized behind a `RwLock`; readers share it and
//! always receive an owned snapshot.

use crate::error::{StoreError, StoreResult};
use crate::taxonomy::OrganizationType;
use crate::types::{CreateExperienceRequest, ExperienceRecord};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Maximum number of identifiers tried for a single create
pub const MAX_ID_ATTEMPTS: usize = 8;

// ============================================================
// IDENTIFIER GENERATION
// ============================================================

/// Source of candidate record identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// ============================================================
// STORE
// ============================================================

#[derive(Default)]
struct Inner {
    records: Vec<ExperienceRecord>,
    /// id -> position in `records`. Nothing is ever removed, so this is also
    /// the set of every id ever issued.
    index: HashMap<String, usize>,
}

impl Inner {
    fn push(&mut self, record: ExperienceRecord) {
        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
    }
}

/// In-memory experience store
pub struct ExperienceStore {
    inner: RwLock<Inner>,
    id_generator: Box<dyn IdGenerator>,
}

impl Default for ExperienceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceStore {
    /// Create an empty store using UUID identifiers
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            id_generator: Box::new(UuidGenerator),
        }
    }

    /// Create a store pre-populated with `records`, kept in the given order
    pub fn with_seed(records: Vec<ExperienceRecord>) -> StoreResult<Self> {
        let mut inner = Inner::default();
        for record in records {
            if inner.index.contains_key(&record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            inner.push(record);
        }
        log::debug!("Seeded experience store with {} records", inner.records.len());

        Ok(Self {
            inner: RwLock::new(inner),
            id_generator: Box::new(UuidGenerator),
        })
    }

    /// Replace the identifier source
    pub fn with_id_generator(mut self, generator: Box<dyn IdGenerator>) -> Self {
        self.id_generator = generator;
        self
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        // Only complete records are ever pushed, so a poisoned lock still
        // guards consistent data.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a record from `request`, assigning it a fresh identifier
    pub fn create(&self, request: CreateExperienceRequest) -> StoreResult<ExperienceRecord> {
        let kind = match &request.kind {
            None => OrganizationType::default(),
            Some(candidate) => candidate
                .resolve()
                .ok_or_else(|| StoreError::InvalidType(candidate.to_string()))?,
        };

        let mut inner = self.write();

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();
            if inner.index.contains_key(&id) {
                log::warn!("Identifier {} already issued (attempt {}/{})", id, attempt, MAX_ID_ATTEMPTS);
                continue;
            }

            let record = ExperienceRecord::from_request(id, request, kind);
            inner.push(record.clone());
            log::info!("Created experience {} ({})", record.id, record.kind);
            return Ok(record);
        }

        log::error!("Giving up on identifier generation after {} attempts", MAX_ID_ATTEMPTS);
        Err(StoreError::IdCollision {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Fetch a record by exact identifier
    pub fn get(&self, id: &str) -> StoreResult<ExperienceRecord> {
        let inner = self.read();
        inner
            .index
            .get(id)
            .and_then(|&pos| inner.records.get(pos))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Snapshot of every record in insertion order
    pub fn list(&self) -> Vec<ExperienceRecord> {
        self.read().records.clone()
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
