//! User and streak operations

use crate::DbPool;
use athena_core::{AppError, Streak, Timestamp, User};
use chrono::NaiveDate;
use sqlx::Row;

/// Creates the user row if missing; an existing row keeps its name and streak
pub async fn ensure_user(pool: &DbPool, email: &str, name: &str) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO users (email, name, created_at)
        VALUES (?, ?, ?)
        ON CONFLICT(email) DO NOTHING
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(Timestamp::now().as_millis())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to create user", e))?;

    Ok(())
}

pub async fn get_user(pool: &DbPool, email: &str) -> Result<Option<User>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT email, name, current_streak, longest_streak, last_active_date
        FROM users WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database("Failed to fetch user", e))?;

    row.map(row_to_user).transpose()
}

/// Persists a user's streak
pub async fn update_streak(pool: &DbPool, email: &str, streak: &Streak) -> Result<(), AppError> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET current_streak = ?, longest_streak = ?, last_active_date = ?
        WHERE email = ?
        "#,
    )
    .bind(i64::from(streak.current))
    .bind(i64::from(streak.longest))
    .bind(streak.last_active.map(|d| d.format("%Y-%m-%d").to_string()))
    .bind(email)
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to update streak", e))?;

    if result.rows_affected() == 0 {
        return Err(AppError::RecordNotFound {
            entity: "User".to_string(),
            identifier: email.to_string(),
        });
    }

    Ok(())
}

fn row_to_user(row: sqlx::sqlite::SqliteRow) -> Result<User, AppError> {
    let current: i64 = row
        .try_get("current_streak")
        .map_err(|e| AppError::database("Missing current_streak", e))?;
    let longest: i64 = row
        .try_get("longest_streak")
        .map_err(|e| AppError::database("Missing longest_streak", e))?;
    let last_active: Option<String> = row
        .try_get("last_active_date")
        .map_err(|e| AppError::database("Missing last_active_date", e))?;
    let last_active = last_active
        .map(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d"))
        .transpose()
        .map_err(|e| AppError::database("Invalid last_active_date", e))?;

    Ok(User {
        email: row
            .try_get("email")
            .map_err(|e| AppError::database("Missing email", e))?,
        name: row
            .try_get("name")
            .map_err(|e| AppError::database("Missing name", e))?,
        streak: Streak {
            current: u32::try_from(current).unwrap_or(0),
            longest: u32::try_from(longest).unwrap_or(0),
            last_active,
        },
    })
}
