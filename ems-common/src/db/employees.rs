//! Employee storage operations
//!
//! Every caller-supplied value is bound as a parameter. Each write runs in
//! its own transaction: committed on success, rolled back when the
//! transaction guard drops on any error path. The pooled connection is
//! returned on every exit.

use sqlx::SqlitePool;
use tracing::{debug, error};

use super::models::{Employee, MedianColumn, NewEmployee};
use crate::Result;

/// Insert a row and return it as stored (with `id` and `created_at`)
pub async fn insert_employee(pool: &SqlitePool, new: &NewEmployee) -> Result<Employee> {
    match insert_in_tx(pool, new).await {
        Ok(employee) => {
            debug!("Inserted employee {}", employee.id);
            Ok(employee)
        }
        Err(e) => {
            error!("Error adding employee: {}", e);
            Err(e)
        }
    }
}

async fn insert_in_tx(pool: &SqlitePool, new: &NewEmployee) -> Result<Employee> {
    let mut tx = pool.begin().await?;

    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (name, age, salary, department)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, age, salary, department, created_at
        "#,
    )
    .bind(&new.name)
    .bind(new.age)
    .bind(new.salary)
    .bind(&new.department)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(employee)
}

/// All rows, ascending by `id`. Empty table yields an empty vector.
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, age, salary, department, created_at
        FROM employees
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        error!("Error retrieving employees: {}", e);
        e
    })?;

    debug!("Retrieved {} employees", employees.len());
    Ok(employees)
}

/// Delete the row with `id`
///
/// Returns `false` when no such row existed; that is not an error.
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> Result<bool> {
    match delete_in_tx(pool, id).await {
        Ok(deleted) => {
            debug!("Delete employee {}: removed={}", id, deleted);
            Ok(deleted)
        }
        Err(e) => {
            error!("Error deleting employee {}: {}", id, e);
            Err(e)
        }
    }
}

async fn delete_in_tx(pool: &SqlitePool, id: i64) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let rows_deleted = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;
    Ok(rows_deleted > 0)
}

/// Interpolated median of `column`, or `None` when the table is empty
///
/// Computed in the engine: the one (odd count) or two (even count) middle
/// rows are selected with LIMIT/OFFSET over the sorted column, and their
/// midpoint taken as `lo + (hi - lo) / 2` so two values near `f64::MAX`
/// cannot overflow to infinity (both columns are CHECKed > 0). With zero
/// rows nothing is selected and MIN/MAX yield NULL.
pub async fn median_of(pool: &SqlitePool, column: MedianColumn) -> Result<Option<f64>> {
    // Identifier comes from a closed enum, never from caller input
    let col = column.column_name();
    let sql = format!(
        r#"
        SELECT MIN(value) + (MAX(value) - MIN(value)) / 2.0 FROM (
            SELECT {col} AS value
            FROM employees
            ORDER BY {col}
            LIMIT 2 - (SELECT COUNT(*) FROM employees) % 2
            OFFSET ((SELECT COUNT(*) FROM employees) - 1) / 2
        )
        "#
    );

    let median: Option<f64> = sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            error!("Error calculating median {}: {}", col, e);
            e
        })?;

    debug!("Median {}: {:?}", col, median);
    Ok(median)
}

/// Number of rows in the table
pub async fn count_employees(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
