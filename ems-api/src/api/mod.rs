//! HTTP API handlers for ems-api

pub mod employees;
pub mod fallback;
pub mod health;
pub mod stats;

pub use employees::{create_employee, delete_employee, list_employees};
pub use fallback::{method_not_allowed, route_not_found};
pub use health::{health_routes, service_banner};
pub use stats::{median_age, median_salary};
