//! # EMS Common Library
//!
//! Shared code for the employee management service:
//! - Error type
//! - Configuration loading
//! - Schema bootstrap and employee storage access

pub mod config;
pub mod db;
pub mod error;

pub use config::ServiceConfig;
pub use error::{Error, Result};
