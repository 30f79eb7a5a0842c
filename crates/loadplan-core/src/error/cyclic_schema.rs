use super::Error;

/// Error when serialization schemas reference each other in a cycle along
/// relation-valued fields and the planner is configured to reject cycles.
#[derive(Debug)]
pub(super) struct CyclicSchemaError {
    path: Box<str>,
}

impl std::error::Error for CyclicSchemaError {}

impl core::fmt::Display for CyclicSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cyclic schema: {}", self.path)
    }
}

impl Error {
    /// Creates a cyclic schema error describing the recurring path.
    pub fn cyclic_schema(path: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CyclicSchema(CyclicSchemaError {
            path: path.into().into(),
        }))
    }

    /// Returns `true` if this error is a cyclic schema error.
    pub fn is_cyclic_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CyclicSchema(_))
    }
}
