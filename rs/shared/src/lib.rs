pub mod env;
pub mod resource;
pub mod sink;
pub mod tracing;
