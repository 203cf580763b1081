pub mod config;
pub mod errors;
pub mod lookup;
pub mod models;
