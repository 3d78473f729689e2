// Shared domain building blocks
// Value objects used by more than one aggregate

pub mod value_objects;

pub use value_objects::{Address, PersonalInfo, ValueObjectError};
