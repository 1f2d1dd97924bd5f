pub mod attributes;
pub mod naming;
pub mod tokens;
