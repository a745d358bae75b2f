pub mod models;
pub mod package;
pub mod platform;
