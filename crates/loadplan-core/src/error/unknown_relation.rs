use super::Error;

/// Error when a relation name is queried against a model that does not define it.
#[derive(Debug)]
pub(super) struct UnknownRelationError {
    model: Box<str>,
    name: Box<str>,
}

impl std::error::Error for UnknownRelationError {}

impl core::fmt::Display for UnknownRelationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown relation: `{}::{}`", self.model, self.name)
    }
}

impl Error {
    /// Creates an unknown relation error for `model::name`.
    pub fn unknown_relation(model: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownRelation(UnknownRelationError {
            model: model.into().into(),
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown relation error.
    pub fn is_unknown_relation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownRelation(_))
    }
}
