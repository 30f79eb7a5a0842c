mod error;
pub use error::Error;

pub mod schema;

pub mod stmt;

/// A Result type alias that uses loadplan's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
