mod adhoc;
mod cyclic_schema;
mod invalid_load_option;
mod invalid_schema;
mod unknown_model;
mod unknown_relation;

use adhoc::AdhocError;
use cyclic_schema::CyclicSchemaError;
use invalid_load_option::InvalidLoadOptionError;
use invalid_schema::InvalidSchemaError;
use std::{fmt, sync::Arc};
use unknown_model::UnknownModelError;
use unknown_relation::UnknownRelationError;

/// Returns early with an ad-hoc error built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Builds an ad-hoc error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while planning or applying a projection.
///
/// Errors are cheap to clone and one pointer wide. An error may carry the
/// error that caused it; the chain is rendered outermost first, separated by
/// `": "`.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchemaError),
    UnknownModel(UnknownModelError),
    UnknownRelation(UnknownRelationError),
    InvalidLoadOption(InvalidLoadOptionError),
    CyclicSchema(CyclicSchemaError),
}

impl Error {
    /// Wrap this error in `outer`, which becomes the error's kind. If `outer`
    /// already has a cause, this error is attached at the end of its chain.
    pub fn context(self, outer: Error) -> Error {
        match Arc::try_unwrap(outer.inner) {
            Ok(ErrorInner { kind, cause }) => {
                let cause = match cause {
                    Some(cause) => self.context(cause),
                    None => self,
                };
                Error {
                    inner: Arc::new(ErrorInner {
                        kind,
                        cause: Some(cause),
                    }),
                }
            }
            // Shared errors cannot be taken apart; keep their message.
            Err(shared) => self.context(err!("{}", Error { inner: shared })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| err.inner.cause.as_ref())
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .inner
                .cause
                .as_ref()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(err.kind(), f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.chain().map(Error::kind))
                .finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Anyhow(err) => fmt::Display::fmt(err, f),
            Self::Adhoc(err) => fmt::Display::fmt(err, f),
            Self::InvalidSchema(err) => fmt::Display::fmt(err, f),
            Self::UnknownModel(err) => fmt::Display::fmt(err, f),
            Self::UnknownRelation(err) => fmt::Display::fmt(err, f),
            Self::InvalidLoadOption(err) => fmt::Display::fmt(err, f),
            Self::CyclicSchema(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}
