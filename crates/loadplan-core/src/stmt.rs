//! Queries and the loader directives attached to them.

mod load_option;
pub use load_option::{Directive, LoadOption, Selector};

mod load_path;
pub use load_path::{Hop, LoadPath};

mod loader_strategy;
pub use loader_strategy::LoaderStrategy;

mod query;
pub use query::Query;

use crate::{schema::app, Error, Result};
