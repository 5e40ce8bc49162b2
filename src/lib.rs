pub mod catalog;
pub mod config;
pub mod eventos;
pub mod placement;
pub mod tracing;
