//! Median statistics endpoints
//!
//! An empty table yields `median_value: null` with an explanatory message,
//! never a fabricated 0.

use axum::{extract::State, Json};
use ems_common::db::{self, MedianColumn};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub median_value: Option<f64>,
    pub message: String,
}

/// GET /stats/median-age
pub async fn median_age(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let median = db::median_of(&state.db, MedianColumn::Age)
        .await
        .map_err(ApiError::storage("calculating median age"))?;

    let message = match median {
        Some(value) => format!("Median age: {:.2}", value),
        None => "No employees found to calculate median age".to_string(),
    };

    Ok(Json(StatsResponse {
        median_value: median,
        message,
    }))
}

/// GET /stats/median-salary
pub async fn median_salary(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let median = db::median_of(&state.db, MedianColumn::Salary)
        .await
        .map_err(ApiError::storage("calculating median salary"))?;

    let message = match median {
        Some(value) => format!("Median salary: {}", format_currency(value)),
        None => "No employees found to calculate median salary".to_string(),
    };

    Ok(Json(StatsResponse {
        median_value: median,
        message,
    }))
}

/// `$1,234,567.89` style: two decimals, comma thousands separators
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(50000.0), "$50,000.00");
        assert_eq!(format_currency(55000.126), "$55,000.13");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-2500.0), "-$2,500.00");
    }
}
