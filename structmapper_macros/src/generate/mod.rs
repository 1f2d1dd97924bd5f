pub mod mappable;
