//! Request payload validation
//!
//! | Field      | Rule                     |
//! |------------|--------------------------|
//! | name       | 1..=255 characters       |
//! | age        | 1..=150                  |
//! | salary     | finite, > 0              |
//! | department | 1..=100 characters       |
//!
//! Lengths are counted in characters, not bytes. Values are not trimmed.
//! Text fields must not contain control characters (NUL included; the
//! table's `length()` CHECK stops counting at the first NUL).

use ems_common::db::NewEmployee;
use serde::{Deserialize, Serialize};

pub const NAME_MAX_CHARS: usize = 255;
pub const DEPARTMENT_MAX_CHARS: usize = 100;
pub const AGE_MAX: i64 = 150;

/// Body of `POST /employee`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub age: i64,
    pub salary: f64,
    pub department: String,
}

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl CreateEmployeeRequest {
    /// Check every field, reporting all failures rather than the first
    pub fn validate(self) -> Result<NewEmployee, Vec<FieldError>> {
        let mut errors = Vec::new();

        check_text(&mut errors, "name", &self.name, NAME_MAX_CHARS);

        if self.age <= 0 {
            errors.push(FieldError::new("age", "must be greater than 0"));
        } else if self.age > AGE_MAX {
            errors.push(FieldError::new(
                "age",
                format!("must be less than or equal to {}", AGE_MAX),
            ));
        }

        if !self.salary.is_finite() {
            errors.push(FieldError::new("salary", "must be a finite number"));
        } else if self.salary <= 0.0 {
            errors.push(FieldError::new("salary", "must be greater than 0"));
        }

        check_text(&mut errors, "department", &self.department, DEPARTMENT_MAX_CHARS);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEmployee {
            name: self.name,
            age: self.age,
            salary: self.salary,
            department: self.department,
        })
    }
}

fn check_text(errors: &mut Vec<FieldError>, field: &'static str, value: &str, max_chars: usize) {
    if value.is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    } else if value.chars().any(char::is_control) {
        errors.push(FieldError::new(field, "must not contain control characters"));
    } else if value.chars().count() > max_chars {
        errors.push(FieldError::new(
            field,
            format!("must be at most {} characters", max_chars),
        ));
    }
}
