pub mod models;
pub mod relationship;

pub use relationship::{Relationship, ValidationError};
