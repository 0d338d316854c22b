//! Mutual fund records as returned by the search endpoint.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
