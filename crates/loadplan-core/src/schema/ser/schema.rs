use super::{app, Builder, Field, FieldTy};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Name the schema is registered under
    pub name: String,

    /// Fields in declaration order, keyed by field name
    pub fields: IndexMap<String, Field>,
}

/// A reference to a nested schema.
#[derive(Clone, PartialEq)]
pub enum SchemaRef {
    /// A concrete schema.
    Instance(Arc<Schema>),

    /// A schema referenced by its registered name. Must be instantiated
    /// through a [`Registry`](super::Registry) before use.
    Named(String),
}

impl Schema {
    pub fn builder(name: &str) -> Builder {
        Builder::new(name)
    }

    /// Start a new schema from this schema's fields.
    ///
    /// Fields declared on the returned builder replace inherited fields of the
    /// same name.
    pub fn extend(&self, name: &str) -> Builder {
        Builder::from_schema(name, self)
    }

    /// The shallow schema of a model: every column as a scalar, every
    /// to-many relation as a list of keys, every to-one relation as a key.
    pub fn for_model(name: &str, model: &app::Model) -> Schema {
        let mut builder = Builder::new(name);

        for field in &model.fields {
            let ty = match &field.ty {
                app::FieldTy::HasMany(_) => FieldTy::ScalarList,
                _ => FieldTy::Scalar,
            };

            builder.field(Field {
                name: field.name.clone(),
                ty,
                attribute: None,
            });
        }

        builder.build()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }
}

impl SchemaRef {
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    /// The name of the referenced schema.
    pub fn name(&self) -> &str {
        match self {
            Self::Instance(schema) => &schema.name,
            Self::Named(name) => name,
        }
    }
}

impl From<Schema> for SchemaRef {
    fn from(value: Schema) -> Self {
        Self::Instance(Arc::new(value))
    }
}

impl From<Arc<Schema>> for SchemaRef {
    fn from(value: Arc<Schema>) -> Self {
        Self::Instance(value)
    }
}

impl From<&Arc<Schema>> for SchemaRef {
    fn from(value: &Arc<Schema>) -> Self {
        Self::Instance(value.clone())
    }
}

impl From<&str> for SchemaRef {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Instances can be self-referential through `Named`; only print the name.
            Self::Instance(schema) => write!(fmt, "Instance({})", schema.name),
            Self::Named(name) => write!(fmt, "Named({name})"),
        }
    }
}
