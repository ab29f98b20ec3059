//! Employee record types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted employee row
///
/// `id` and `created_at` are assigned by the database on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub salary: f64,
    pub department: String,
    pub created_at: NaiveDateTime,
}

/// Field values for a row about to be inserted
///
/// Callers are expected to have validated these already; the table's CHECK
/// constraints are the last line and surface as a database error.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub age: i64,
    pub salary: f64,
    pub department: String,
}

/// Numeric columns a median can be computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianColumn {
    Age,
    Salary,
}

impl MedianColumn {
    /// Column identifier as it appears in the schema
    pub fn column_name(self) -> &'static str {
        match self {
            MedianColumn::Age => "age",
            MedianColumn::Salary => "salary",
        }
    }
}
