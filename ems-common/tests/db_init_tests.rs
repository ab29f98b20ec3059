//! Tests for database bootstrap
//!
//! - Database file and parent directory are created on first run
//! - Re-running against an initialized database is a no-op

use ems_common::config::DatabaseConfig;
use ems_common::db::{count_employees, init_database, insert_employee, NewEmployee};
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("employees.db");
    assert!(!db_path.exists());

    let result = init_database(&DatabaseConfig::at(&db_path)).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());

    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_employees_table_created() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&DatabaseConfig::at(dir.path().join("employees.db")))
        .await
        .unwrap();

    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('employees')")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(
        columns,
        vec!["id", "name", "age", "salary", "department", "created_at"]
    );
}

#[tokio::test]
async fn test_bootstrap_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig::at(dir.path().join("employees.db"));

    let pool1 = init_database(&config).await.unwrap();
    insert_employee(
        &pool1,
        &NewEmployee {
            name: "Ann".to_string(),
            age: 30,
            salary: 50000.0,
            department: "Eng".to_string(),
        },
    )
    .await
    .unwrap();
    pool1.close().await;

    // Second run must neither fail nor drop existing rows
    let pool2 = init_database(&config).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
    let pool2 = pool2.unwrap();

    assert_eq!(count_employees(&pool2).await.unwrap(), 1);
}

#[tokio::test]
async fn test_init_fails_when_path_is_a_directory() {
    let dir = TempDir::new().unwrap();

    // The directory itself cannot be opened as a database file
    let result = init_database(&DatabaseConfig::at(dir.path())).await;
    assert!(result.is_err());
}
