pub mod api;
pub mod coordinates;
pub mod dates;
pub mod dto;
pub mod model;
pub mod normalizer;
pub mod resources;
pub mod source;
