use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{error::GenerateError, types::CompositeField};

/// Outcome of [`TypeRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    Unchanged,
    Replaced,
}

/// Nested grouped and enum types shared between message trees, keyed by
/// type name, in first-registration order. Lives for one generation run.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: Vec<CompositeField>,
    index:   HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `candidate` under its name, or reconcile it with the type
    /// already registered there. A candidate with more fields replaces the
    /// existing one; one with fewer fields is dropped; one with as many
    /// fields but a different layout is a conflict.
    pub fn register(&mut self, candidate: CompositeField) -> Result<Registration, GenerateError> {
        let Some(&slot) = self.index.get(&candidate.name) else {
            debug!("Registered type {}", candidate.name);
            self.index.insert(candidate.name.clone(), self.entries.len());
            self.entries.push(candidate);
            return Ok(Registration::Added);
        };

        let existing = &mut self.entries[slot];
        debug!("Type {} already processed", existing.name);
        if existing.same_structure(&candidate) {
            return Ok(Registration::Unchanged);
        }

        warn!("Type {} has mismatching fields", existing.name);
        if candidate.fields.len() > existing.fields.len() {
            *existing = candidate;
            Ok(Registration::Replaced)
        } else if candidate.fields.len() == existing.fields.len() {
            Err(GenerateError::TypeConflict(candidate.name))
        } else {
            Ok(Registration::Unchanged)
        }
    }

    pub fn get(&self, name: &str) -> Option<&CompositeField> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_definitions(self) -> Vec<CompositeField> {
        self.entries
    }
}
