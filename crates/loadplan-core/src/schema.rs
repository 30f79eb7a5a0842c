pub mod app;

mod name;
pub use name::Name;

pub mod ser;
