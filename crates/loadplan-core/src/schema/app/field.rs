use super::{BelongsTo, HasMany, HasOne, ModelId, Schema};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Position of the field within its model
    pub id: FieldId,

    /// Attribute name, as schemas refer to it
    pub name: String,

    /// Column or relation
    pub ty: FieldTy,

    /// Whether a record may omit a value for the field
    pub nullable: bool,

    /// Whether the column is loaded even under `load_only`
    pub primary_key: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Clone)]
pub enum FieldTy {
    Primitive,
    BelongsTo(BelongsTo),
    HasMany(HasMany),
    HasOne(HasOne),
}

impl Field {
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }

    /// `Model::field`, for messages.
    pub fn full_name(&self, schema: &Schema) -> String {
        match schema.models.get(&self.id.model) {
            Some(model) => format!("{}::{}", model.name.upper_camel_case(), self.name),
            None => format!("{:?}::{}", self.id.model, self.name),
        }
    }

    /// The model a relation points to; `None` for columns.
    pub fn relation_target_id(&self) -> Option<ModelId> {
        match &self.ty {
            FieldTy::Primitive => None,
            FieldTy::BelongsTo(belongs_to) => Some(belongs_to.target),
            FieldTy::HasMany(has_many) => Some(has_many.target),
            FieldTy::HasOne(has_one) => Some(has_one.target),
        }
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive)
    }

    pub fn is_relation(&self) -> bool {
        !self.is_primitive()
    }

    /// True for relations that resolve to a collection of records.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::HasMany(..))
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => fmt.write_str("Primitive"),
            Self::BelongsTo(ty) => fmt::Debug::fmt(ty, fmt),
            Self::HasMany(ty) => fmt::Debug::fmt(ty, fmt),
            Self::HasOne(ty) => fmt::Debug::fmt(ty, fmt),
        }
    }
}
