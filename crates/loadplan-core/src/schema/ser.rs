//! Serialization schemas: the declared field graph a query is projected for.
//!
//! A [`Schema`] is an ordered mapping from field name to [`Field`]. Fields
//! are scalars, lists of scalars, or references to nested schemas. Nested
//! references are either concrete instances or names resolved through a
//! [`Registry`], which is how schemas refer to each other (or to themselves).

mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldTy};

mod registry;
pub use registry::Registry;

mod schema;
pub use schema::{Schema, SchemaRef};

use super::app;
