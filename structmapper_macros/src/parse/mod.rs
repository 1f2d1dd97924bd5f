pub mod attributes;
pub mod input;

pub use input::{MappableInput, Shape, StructField};
