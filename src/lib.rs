pub mod config;
pub mod constants;
pub mod database;
pub mod enums;
pub mod errors;
pub mod models;
pub mod utils;

pub use database::DatabaseContext;
pub use errors::Error;
