//! Per-user reading state and streaks

use crate::error::{LibraryError, LibraryResult};
use athena_core::{
    canonicalize, BookMetadata, Bookmark, Highlight, Progress, Timestamp, User, Validator,
};
use athena_database::{queries, DbPool};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

/// Maximum rows returned by list operations
pub const LIST_LIMIT: u32 = 100;

/// A book the user has progress in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    pub book: BookMetadata,
    /// Saved reading position
    pub progress: f64,
    pub last_read: Timestamp,
}

#[derive(Clone)]
pub struct ReadingService {
    pool: DbPool,
}

fn check<T: Validator>(value: &T) -> LibraryResult<()> {
    value
        .validate()
        .map_err(|errors| LibraryError::InvalidInput(errors.join("; ")))
}

impl ReadingService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The stored user with current streak values, created on first sight
    pub async fn current_user(&self, user: &User) -> LibraryResult<User> {
        queries::ensure_user(&self.pool, &user.email, &user.name).await?;
        queries::get_user(&self.pool, &user.email)
            .await?
            .ok_or_else(|| LibraryError::NotFound(user.email.clone()))
    }

    pub async fn save_progress(
        &self,
        user: &User,
        identifier: &str,
        position: f64,
    ) -> LibraryResult<Progress> {
        let progress = Progress::new(&user.email, canonicalize(identifier), position);
        check(&progress)?;

        queries::upsert_progress(&self.pool, &progress).await?;
        self.record_activity(user).await?;
        Ok(progress)
    }

    pub async fn get_progress(&self, user: &User, identifier: &str) -> LibraryResult<Option<Progress>> {
        Ok(queries::get_progress(&self.pool, &user.email, &canonicalize(identifier)).await?)
    }

    pub async fn add_bookmark(
        &self,
        user: &User,
        identifier: &str,
        position: f64,
        text: &str,
    ) -> LibraryResult<Bookmark> {
        let bookmark = Bookmark::new(&user.email, canonicalize(identifier), position, text);
        check(&bookmark)?;

        queries::create_bookmark(&self.pool, &bookmark).await?;
        self.record_activity(user).await?;
        Ok(bookmark)
    }

    /// Bookmarks in one book ordered by position
    pub async fn list_bookmarks(&self, user: &User, identifier: &str) -> LibraryResult<Vec<Bookmark>> {
        Ok(queries::list_bookmarks(&self.pool, &user.email, &canonicalize(identifier), LIST_LIMIT).await?)
    }

    /// Removes the bookmarks at `position`; not found when there were none
    pub async fn delete_bookmark(&self, user: &User, identifier: &str, position: f64) -> LibraryResult<()> {
        let identifier = canonicalize(identifier);
        let removed =
            queries::delete_bookmarks_at(&self.pool, &user.email, &identifier, position).await?;
        if removed == 0 {
            return Err(LibraryError::NotFound(format!(
                "bookmark at {} in {}",
                position, identifier
            )));
        }
        Ok(())
    }

    pub async fn add_highlight(
        &self,
        user: &User,
        identifier: &str,
        text: &str,
        color: Option<String>,
    ) -> LibraryResult<Highlight> {
        let highlight = Highlight::new(&user.email, canonicalize(identifier), text, color);
        check(&highlight)?;

        queries::create_highlight(&self.pool, &highlight).await?;
        self.record_activity(user).await?;
        Ok(highlight)
    }

    pub async fn list_highlights(&self, user: &User, identifier: &str) -> LibraryResult<Vec<Highlight>> {
        Ok(queries::list_highlights(&self.pool, &user.email, &canonicalize(identifier), LIST_LIMIT).await?)
    }

    /// Books with progress whose metadata is stored, most recently read first
    pub async fn library(&self, user: &User) -> LibraryResult<Vec<LibraryEntry>> {
        let rows = queries::list_library(&self.pool, &user.email, LIST_LIMIT).await?;
        Ok(rows
            .into_iter()
            .map(|(progress, book)| LibraryEntry {
                book,
                progress: progress.position,
                last_read: progress.last_updated,
            })
            .collect())
    }

    async fn record_activity(&self, user: &User) -> LibraryResult<()> {
        self.record_activity_on(user, Utc::now().date_naive()).await
    }

    /// Applies the streak rule for activity on `today`
    pub async fn record_activity_on(&self, user: &User, today: NaiveDate) -> LibraryResult<()> {
        let mut stored = self.current_user(user).await?;
        let before = stored.streak;
        stored.streak.record_activity(today);

        if stored.streak != before {
            queries::update_streak(&self.pool, &user.email, &stored.streak).await?;
            log::debug!(
                "Streak for {} is now {} (longest {})",
                user.email,
                stored.streak.current,
                stored.streak.longest
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athena_database::{connect_in_memory, run_migrations};

    async fn service() -> ReadingService {
        let pool = connect_in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();
        ReadingService::new(pool)
    }

    fn reader() -> User {
        User::new("reader@example.com", "Reader")
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[tokio::test]
    async fn test_progress_records_streak() {
        let service = service().await;
        let progress = service
            .save_progress(&reader(), "978-0-14-143951-8", 10.0)
            .await
            .unwrap();
        assert_eq!(progress.identifier, "9780141439518");

        let user = service.current_user(&reader()).await.unwrap();
        assert_eq!(user.streak.current, 1);
        assert_eq!(user.streak.last_active, Some(Utc::now().date_naive()));
    }

    #[tokio::test]
    async fn test_streak_rule_across_days() {
        let service = service().await;
        for d in [1, 2, 3, 3] {
            service.record_activity_on(&reader(), day(d)).await.unwrap();
        }
        let streak = service.current_user(&reader()).await.unwrap().streak;
        assert_eq!((streak.current, streak.longest), (3, 3));

        service.record_activity_on(&reader(), day(9)).await.unwrap();
        let streak = service.current_user(&reader()).await.unwrap().streak;
        assert_eq!((streak.current, streak.longest), (1, 3));
    }

    #[tokio::test]
    async fn test_invalid_position_rejected() {
        let service = service().await;
        let err = service
            .save_progress(&reader(), "9780141439518", -5.0)
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_delete_missing_bookmark_is_not_found() {
        let service = service().await;
        service
            .add_bookmark(&reader(), "9780141439518", 12.0, "Chapter 3")
            .await
            .unwrap();

        service.delete_bookmark(&reader(), "9780141439518", 12.0).await.unwrap();
        let err = service
            .delete_bookmark(&reader(), "9780141439518", 12.0)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_highlight_default_color() {
        let service = service().await;
        service
            .add_highlight(&reader(), "9780141439518", "a single man", None)
            .await
            .unwrap();
        let highlights = service.list_highlights(&reader(), "9780141439518").await.unwrap();
        assert_eq!(highlights[0].color, "yellow");
    }

    #[test]
    fn test_library_entry_serialization() {
        let entry = LibraryEntry {
            book: BookMetadata::new("9780141439518", "Pride and Prejudice"),
            progress: 0.5,
            last_read: Timestamp::from_millis(1_700_000_000_000),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["progress"], 0.5);
        assert_eq!(json["lastRead"], 1_700_000_000_000i64);
        assert_eq!(json["book"]["title"], "Pride and Prejudice");
    }
}
