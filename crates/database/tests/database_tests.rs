use athena_core::{
    AppError, BookMetadata, Bookmark, CacheRecord, Highlight, Progress, Provenance, Streak,
};
use athena_database::{connect_in_memory, queries, run_migrations, verify_integrity, DbPool};
use chrono::NaiveDate;

async fn setup() -> DbPool {
    let pool = connect_in_memory().await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn test_concurrent_cache_writes_leave_one_row() {
    let pool = setup().await;

    let writes = (0..8).map(|i| {
        let pool = pool.clone();
        tokio::spawn(async move {
            let record = CacheRecord::new("9780141439518", format!("body {}", i), Provenance::CuratedCatalog);
            queries::upsert_content(&pool, &record).await
        })
    });
    for handle in writes.collect::<Vec<_>>() {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(queries::count_contents(&pool).await.unwrap(), 1);
    let stored = queries::get_content(&pool, "9780141439518").await.unwrap().unwrap();
    assert!(stored.content.starts_with("body "));
}

#[tokio::test]
async fn test_reading_state_workflow() -> Result<(), AppError> {
    let pool = setup().await;
    let email = "reader@example.com";

    queries::ensure_user(&pool, email, "Reader").await?;
    queries::upsert_book(&pool, &BookMetadata::new("9780141439518", "Pride and Prejudice")).await?;
    queries::upsert_progress(&pool, &Progress::new(email, "9780141439518", 12.0)).await?;
    queries::create_bookmark(&pool, &Bookmark::new(email, "9780141439518", 12.0, "Chapter 3")).await?;
    queries::create_highlight(
        &pool,
        &Highlight::new(email, "9780141439518", "a truth universally acknowledged", Some("green".into())),
    )
    .await?;

    let mut streak = Streak::default();
    streak.record_activity(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    queries::update_streak(&pool, email, &streak).await?;

    let library = queries::list_library(&pool, email, 100).await?;
    assert_eq!(library.len(), 1);
    assert_eq!(library[0].1.title, "Pride and Prejudice");

    let bookmarks = queries::list_bookmarks(&pool, email, "9780141439518", 100).await?;
    assert_eq!(bookmarks[0].text, "Chapter 3");

    let highlights = queries::list_highlights(&pool, email, "9780141439518", 100).await?;
    assert_eq!(highlights[0].color, "green");

    let user = queries::get_user(&pool, email).await?.unwrap();
    assert_eq!(user.streak.current, 1);

    verify_integrity(&pool).await?;
    Ok(())
}

#[tokio::test]
async fn test_bookmark_list_is_capped() {
    let pool = setup().await;
    for i in 0..5 {
        queries::create_bookmark(&pool, &Bookmark::new("a@b.c", "book", i as f64, "m"))
            .await
            .unwrap();
    }
    let marks = queries::list_bookmarks(&pool, "a@b.c", "book", 3).await.unwrap();
    assert_eq!(marks.len(), 3);
    assert_eq!(marks[0].position, 0.0);
}
