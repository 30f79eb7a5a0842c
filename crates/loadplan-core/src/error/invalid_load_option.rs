use super::Error;

/// Error when a query rejects a loader directive.
///
/// The directive names a relation or column that the live app schema does not
/// define at the point of the path it is scoped to. This indicates drift between
/// the metadata a plan was computed from and the metadata it is applied against.
#[derive(Debug)]
pub(super) struct InvalidLoadOptionError {
    option: Box<str>,
}

impl std::error::Error for InvalidLoadOptionError {}

impl core::fmt::Display for InvalidLoadOptionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid load option: {}", self.option)
    }
}

impl Error {
    /// Creates an invalid load option error.
    pub fn invalid_load_option(option: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidLoadOption(InvalidLoadOptionError {
            option: option.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid load option error.
    pub fn is_invalid_load_option(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidLoadOption(_))
    }
}
