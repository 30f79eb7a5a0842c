use super::{Schema, SchemaRef};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Schemas by name, used to resolve [`SchemaRef::Named`] references.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    schemas: IndexMap<String, Arc<Schema>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its name. A later registration with the same
    /// name replaces the earlier one.
    pub fn register(&mut self, schema: impl Into<Arc<Schema>>) -> Arc<Schema> {
        let schema = schema.into();
        self.schemas.insert(schema.name.clone(), schema.clone());
        schema
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Schema>> {
        self.schemas.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Resolve a reference to a concrete schema.
    ///
    /// Fails with an invalid schema error when a named reference was never
    /// registered.
    pub fn instantiate(&self, schema: &SchemaRef) -> Result<Arc<Schema>> {
        match schema {
            SchemaRef::Instance(schema) => Ok(schema.clone()),
            SchemaRef::Named(name) => self.get(name).cloned().ok_or_else(|| {
                Error::invalid_schema(format!(
                    "schema `{name}` is not registered; register it before referencing it by name"
                ))
            }),
        }
    }
}
