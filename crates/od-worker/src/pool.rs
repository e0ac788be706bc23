//! `WorkerPool`: dense worker storage with a name index.
//!
//! Workers are stored in a `Vec` indexed by `WorkerId`, assigned in
//! registration order.  Lookups by name go through a `HashMap<String,
//! WorkerId>`.  Workers are never removed, so ids stay valid for the whole
//! run.

use std::collections::HashMap;

use od_core::{SimConfig, SimTime, WorkerId};

use crate::{Worker, WorkerError, WorkerResult};

#[derive(Debug, Default)]
pub struct WorkerPool {
    workers: Vec<Worker>,
    by_name: HashMap<String, WorkerId>,
}

impl WorkerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new worker and return its id.
    ///
    /// # Errors
    /// - [`WorkerError::Duplicate`] if `name` is already registered.
    /// - [`WorkerError::TooMany`] once the `u32` id space is used up.
    pub fn add(&mut self, name: &str, config: &SimConfig) -> WorkerResult<WorkerId> {
        if self.by_name.contains_key(name) {
            return Err(WorkerError::Duplicate(name.to_owned()));
        }
        let id = next_id(self.workers.len())?;
        self.workers.push(Worker::new(id, name, config));
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Resolve a name to its id.
    pub fn id_of(&self, name: &str) -> WorkerResult<WorkerId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| WorkerError::NotFound(name.to_owned()))
    }

    pub fn get(&self, id: WorkerId) -> WorkerResult<&Worker> {
        self.workers.get(id.index()).ok_or(WorkerError::UnknownId(id))
    }

    pub fn get_mut(&mut self, id: WorkerId) -> WorkerResult<&mut Worker> {
        self.workers.get_mut(id.index()).ok_or(WorkerError::UnknownId(id))
    }

    pub fn by_name(&self, name: &str) -> WorkerResult<&Worker> {
        self.get(self.id_of(name)?)
    }

    /// Refresh every worker at `now`.  Each refresh only reads its own
    /// worker's state, so iteration order does not matter.
    pub fn refresh_all(&mut self, now: SimTime) {
        for w in &mut self.workers {
            w.refresh(now);
        }
    }

    /// Workers in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

/// Id for the worker stored at index `len`.  `WorkerId::INVALID` is never
/// handed out.
pub(crate) fn next_id(len: usize) -> WorkerResult<WorkerId> {
    match WorkerId::try_from(len) {
        Ok(id) if id != WorkerId::INVALID => Ok(id),
        _ => Err(WorkerError::TooMany(len)),
    }
}
