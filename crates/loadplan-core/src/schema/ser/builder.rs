use super::{Field, Schema, SchemaRef};

use indexmap::IndexMap;

/// Declares the fields of a serialization schema.
#[derive(Debug, Clone)]
pub struct Builder {
    name: String,
    fields: IndexMap<String, Field>,
    only: Option<Vec<String>>,
    exclude: Vec<String>,
}

impl Builder {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: IndexMap::new(),
            only: None,
            exclude: vec![],
        }
    }

    pub(super) fn from_schema(name: &str, schema: &Schema) -> Self {
        Self {
            fields: schema.fields.clone(),
            ..Self::new(name)
        }
    }

    /// Declare a field, replacing any field with the same name.
    pub fn field(&mut self, field: Field) -> &mut Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn scalar(&mut self, name: &str) -> &mut Self {
        self.field(Field::scalar(name))
    }

    pub fn scalar_list(&mut self, name: &str) -> &mut Self {
        self.field(Field::scalar_list(name))
    }

    pub fn nested(&mut self, name: &str, target: impl Into<SchemaRef>) -> &mut Self {
        self.field(Field::nested(name, target))
    }

    pub fn nested_list(&mut self, name: &str, target: impl Into<SchemaRef>) -> &mut Self {
        self.field(Field::nested_list(name, target))
    }

    /// Keep only the named fields. Names that are not declared are ignored.
    pub fn only(&mut self, names: &[&str]) -> &mut Self {
        self.only = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }

    /// Drop the named fields. Names that are not declared are ignored.
    pub fn exclude(&mut self, names: &[&str]) -> &mut Self {
        self.exclude
            .extend(names.iter().map(|name| name.to_string()));
        self
    }

    pub fn build(&self) -> Schema {
        let fields = self
            .fields
            .iter()
            .filter(|(name, _)| match &self.only {
                Some(only) => only.contains(name),
                None => true,
            })
            .filter(|(name, _)| !self.exclude.contains(name))
            .map(|(name, field)| (name.clone(), field.clone()))
            .collect();

        Schema {
            name: self.name.clone(),
            fields,
        }
    }
}
