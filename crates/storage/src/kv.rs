//! Key-value operations
//!
//! Every stored document is a single text value under a single key. Writes
//! are whole-value overwrites; there is no partial update.

use crate::DbPool;
use bookrack_core::{AppError, Timestamp};

/// Fetches the value stored under `key`, if any
pub async fn get(pool: &DbPool, key: &str) -> Result<Option<String>, AppError> {
    let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::database("Failed to read value", e))?;

    Ok(value)
}

/// Stores `value` under `key`, overwriting any previous value
pub async fn put(pool: &DbPool, key: &str, value: &str) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(Timestamp::now().as_millis())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to write value", e))?;

    Ok(())
}

/// Removes the value stored under `key`; missing keys are a no-op
pub async fn remove(pool: &DbPool, key: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM kv WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await
        .map_err(|e| AppError::database("Failed to delete value", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::create_test_db;
    use crate::migrations::run_migrations;

    async fn setup() -> DbPool {
        let pool = create_test_db().await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let pool = setup().await;
        let value = get(&pool, "books").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let pool = setup().await;
        put(&pool, "books", "[]").await.unwrap();

        let value = get(&pool, "books").await.unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let pool = setup().await;
        put(&pool, "books", "first").await.unwrap();
        put(&pool, "books", "second").await.unwrap();

        let value = get(&pool, "books").await.unwrap();
        assert_eq!(value.as_deref(), Some("second"));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let pool = setup().await;
        put(&pool, "books", "[]").await.unwrap();
        remove(&pool, "books").await.unwrap();

        let value = get(&pool, "books").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_noop() {
        let pool = setup().await;
        remove(&pool, "never-written").await.unwrap();
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let pool = setup().await;
        put(&pool, "books", "[1]").await.unwrap();
        put(&pool, "settings", "{}").await.unwrap();

        assert_eq!(get(&pool, "books").await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(get(&pool, "settings").await.unwrap().as_deref(), Some("{}"));
    }
}
