use super::Error;

/// Error when a model is looked up by an id or name the app schema does not define.
#[derive(Debug)]
pub(super) struct UnknownModelError {
    model: Box<str>,
}

impl std::error::Error for UnknownModelError {}

impl core::fmt::Display for UnknownModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown model: {}", self.model)
    }
}

impl Error {
    /// Creates an unknown model error.
    pub fn unknown_model(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownModel(UnknownModelError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown model error.
    pub fn is_unknown_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownModel(_))
    }
}
