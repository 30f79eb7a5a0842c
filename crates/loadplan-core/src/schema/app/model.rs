use super::{Field, FieldId, Name};
use crate::{Error, Result};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Position of the model in the app schema
    pub id: ModelId,

    /// Model name, re-cased for messages
    pub name: Name,

    /// Columns and relations, in declaration order
    pub fields: Vec<Field>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    /// Returns the field `id` names, or `None` when it belongs to another
    /// model or is out of range.
    pub fn field(&self, id: impl Into<FieldId>) -> Option<&Field> {
        let id = id.into();
        if id.model != self.id {
            return None;
        }
        self.fields.get(id.index)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Names of the relation-valued fields, in declaration order.
    pub fn relation_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.is_relation())
            .map(|field| field.name())
    }

    /// Names of the column-valued fields, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.ty.is_primitive())
            .map(|field| field.name())
    }

    pub fn is_relation(&self, name: &str) -> bool {
        self.field_by_name(name)
            .map(|field| field.is_relation())
            .unwrap_or(false)
    }

    pub fn is_column(&self, name: &str) -> bool {
        self.field_by_name(name)
            .map(|field| field.ty.is_primitive())
            .unwrap_or(false)
    }

    /// Returns the relation field named `name`.
    ///
    /// Fails with an unknown relation error when the model has no field with
    /// that name or the field is a column.
    pub fn relation(&self, name: &str) -> Result<&Field> {
        match self.field_by_name(name) {
            Some(field) if field.is_relation() => Ok(field),
            _ => Err(Error::unknown_relation(self.name.upper_camel_case(), name)),
        }
    }

    /// Returns the model the relation named `name` points to.
    pub fn relation_target(&self, name: &str) -> Result<ModelId> {
        let field = self.relation(name)?;
        field
            .relation_target_id()
            .ok_or_else(|| Error::unknown_relation(self.name.upper_camel_case(), name))
    }

    /// Key columns. These survive every `load_only` restriction.
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &'_ Field> {
        self.fields.iter().filter(|field| field.primary_key)
    }
}

impl ModelId {
    /// Id of the field at `index` within this model.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
