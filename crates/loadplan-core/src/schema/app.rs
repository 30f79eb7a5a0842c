//! Application-level schema: the mapped models a query is issued against.

mod builder;
pub use builder::{Builder, ModelBuilder};

mod field;
pub use field::{Field, FieldId, FieldTy};

mod model;
pub use model::{Model, ModelId};

mod relation;
pub use relation::{BelongsTo, HasMany, HasOne};

mod schema;
pub use schema::Schema;

use super::Name;
