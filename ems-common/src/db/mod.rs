//! Database bootstrap, models and queries

pub mod employees;
pub mod init;
pub mod models;

pub use employees::*;
pub use init::*;
pub use models::*;
