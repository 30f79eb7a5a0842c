use super::SchemaRef;

/// A serialized field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Name of the field in the serialized output.
    pub name: String,

    /// Scalar or nested
    pub ty: FieldTy,

    /// Name of the model attribute the field reads from, when it differs from
    /// `name`.
    pub attribute: Option<String>,
}

/// The kind of a serialized field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    /// A single plain value.
    Scalar,

    /// A list of plain values. Never nested, even when the attribute it reads
    /// from is a relation.
    ScalarList,

    /// A single nested record.
    Nested(SchemaRef),

    /// A list of nested records.
    NestedList(SchemaRef),
}

impl Field {
    pub fn scalar(name: &str) -> Self {
        Self::new(name, FieldTy::Scalar)
    }

    pub fn scalar_list(name: &str) -> Self {
        Self::new(name, FieldTy::ScalarList)
    }

    pub fn nested(name: &str, target: impl Into<SchemaRef>) -> Self {
        Self::new(name, FieldTy::Nested(target.into()))
    }

    pub fn nested_list(name: &str, target: impl Into<SchemaRef>) -> Self {
        Self::new(name, FieldTy::NestedList(target.into()))
    }

    fn new(name: &str, ty: FieldTy) -> Self {
        Self {
            name: name.to_string(),
            ty,
            attribute: None,
        }
    }

    /// Read the field from the model attribute `attribute` instead of the
    /// attribute sharing the field's name.
    pub fn attribute(mut self, attribute: &str) -> Self {
        self.attribute = Some(attribute.to_string());
        self
    }

    /// The model attribute the field reads from.
    pub fn source(&self) -> &str {
        self.attribute.as_deref().unwrap_or(&self.name)
    }

    /// The nested schema reachable through this field, if any.
    pub fn nested_schema(&self) -> Option<&SchemaRef> {
        self.ty.nested()
    }
}

impl FieldTy {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar | Self::ScalarList)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::ScalarList | Self::NestedList(..))
    }

    pub fn nested(&self) -> Option<&SchemaRef> {
        match self {
            Self::Nested(target) | Self::NestedList(target) => Some(target),
            Self::Scalar | Self::ScalarList => None,
        }
    }
}
