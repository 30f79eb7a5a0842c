pub mod collection;
pub mod option;
pub mod result;

pub mod prelude {
    pub use crate::{assert_empty, assert_err, assert_none, assert_ok, assert_some, assert_subset};
}
