// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The record store: SQLite rows plus PNG blobs behind one facade.
//!
//! Every generation is persisted as a row in the `records` table and a
//! PNG file in the blob directory. The row references the blob by
//! filename; filenames are UUID-based and never reused. Listings are
//! cached briefly so gallery-style reads do not hit SQLite on every
//! call; any local write drops the cache.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use uuid::Uuid;

use pictor_core::{GeneratedImage, MAX_IMAGE_DIM, PictorError};
use pictor_config::StorageConfig;

use crate::blobs::BlobStore;
use crate::database::Database;
use crate::models::{GenerationRecord, Style};
use crate::queries;

/// How long a cached listing stays valid.
const LISTING_TTL: Duration = Duration::from_secs(60);

struct CachedListing {
    fetched_at: Instant,
    records: Vec<GenerationRecord>,
}

/// Persistent store for generation records and their image blobs.
pub struct RecordStore {
    db: Database,
    blobs: BlobStore,
    listing: Mutex<Option<CachedListing>>,
    listing_ttl: Duration,
}

impl RecordStore {
    /// Open (and migrate) the database and blob directory named by the
    /// storage configuration.
    pub async fn open(config: &StorageConfig) -> Result<Self, PictorError> {
        let db = Database::open_with_options(&config.database_path, config.wal_mode).await?;
        let blobs = BlobStore::open(&config.image_dir).await?;
        Ok(Self {
            db,
            blobs,
            listing: Mutex::new(None),
            listing_ttl: LISTING_TTL,
        })
    }

    /// Persist a generated image: blob first, then the row.
    ///
    /// Images wider or taller than [`MAX_IMAGE_DIM`] are rejected before
    /// anything is written. If the row insert fails after the blob was
    /// written, the blob is removed again so no orphan is left behind.
    pub async fn create(
        &self,
        prompt: &str,
        style: Style,
        image: &GeneratedImage,
    ) -> Result<GenerationRecord, PictorError> {
        let (width, height) = image.dimensions();
        if width > MAX_IMAGE_DIM || height > MAX_IMAGE_DIM {
            return Err(PictorError::ImageTooLarge { width, height });
        }

        let filename = format!("image_{}.png", Uuid::new_v4());
        let bytes = image.to_png_bytes().map_err(|e| PictorError::Storage {
            source: Box::new(e),
        })?;
        self.blobs.write(&filename, &bytes).await?;

        let created_at = now_timestamp();
        let id =
            match queries::records::insert_record(&self.db, prompt, style, &filename, &created_at)
                .await
            {
                Ok(id) => id,
                Err(e) => {
                    warn!(%filename, "record insert failed, removing orphaned blob");
                    if let Err(cleanup) = self.blobs.remove(&filename).await {
                        warn!(error = %cleanup, %filename, "orphaned blob cleanup failed");
                    }
                    return Err(e);
                }
            };
        self.invalidate_listing();
        info!(id, style = %style, %filename, "generation record created");

        Ok(GenerationRecord {
            id,
            prompt: prompt.to_string(),
            style,
            filename,
            created_at,
            score: None,
            feedback: None,
        })
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: i64) -> Result<Option<GenerationRecord>, PictorError> {
        queries::records::get_record(&self.db, id).await
    }

    /// All records, newest first. Served from the listing cache when it
    /// is younger than the TTL.
    pub async fn list_all(&self) -> Result<Vec<GenerationRecord>, PictorError> {
        if let Some(records) = self.cached_listing() {
            return Ok(records);
        }
        let records = queries::records::list_records(&self.db).await?;
        *self.lock_listing() = Some(CachedListing {
            fetched_at: Instant::now(),
            records: records.clone(),
        });
        Ok(records)
    }

    /// Record an evaluation for `id`, overwriting any previous one.
    pub async fn update_evaluation(
        &self,
        id: i64,
        score: i64,
        feedback: Option<&str>,
    ) -> Result<(), PictorError> {
        if !(1..=10).contains(&score) {
            return Err(PictorError::InvalidScore { score });
        }
        let affected = queries::records::update_evaluation(&self.db, id, score, feedback).await?;
        if affected == 0 {
            return Err(PictorError::RecordNotFound { id });
        }
        self.invalidate_listing();
        debug!(id, score, "evaluation recorded");
        Ok(())
    }

    /// Delete a record and its blob.
    pub async fn delete(&self, id: i64) -> Result<(), PictorError> {
        let record = self
            .get(id)
            .await?
            .ok_or(PictorError::RecordNotFound { id })?;
        self.blobs.remove(&record.filename).await?;
        let affected = queries::records::delete_record(&self.db, id).await?;
        if affected == 0 {
            // The row vanished between the lookup and the delete.
            return Err(PictorError::RecordNotFound { id });
        }
        self.invalidate_listing();
        info!(id, filename = %record.filename, "generation record deleted");
        Ok(())
    }

    /// Read the PNG bytes backing a record.
    pub async fn read_blob(&self, record: &GenerationRecord) -> Result<Vec<u8>, PictorError> {
        self.blobs.read(&record.filename).await
    }

    /// Total number of records.
    pub async fn count(&self) -> Result<i64, PictorError> {
        queries::records::count_records(&self.db).await
    }

    pub fn blobs(&self) -> &BlobStore {
        &self.blobs
    }

    /// Checkpoint the WAL and release the connection.
    pub async fn close(&self) -> Result<(), PictorError> {
        self.db.close().await
    }

    fn cached_listing(&self) -> Option<Vec<GenerationRecord>> {
        let guard = self.lock_listing();
        if let Some(cached) = guard.as_ref()
            && cached.fetched_at.elapsed() < self.listing_ttl
        {
            return Some(cached.records.clone());
        }
        None
    }

    fn invalidate_listing(&self) {
        *self.lock_listing() = None;
    }

    fn lock_listing(&self) -> MutexGuard<'_, Option<CachedListing>> {
        self.listing.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn set_listing_ttl(&mut self, ttl: Duration) {
        self.listing_ttl = ttl;
    }
}

fn now_timestamp() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_store() -> (RecordStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("test.db").to_str().unwrap().to_string(),
            image_dir: dir.path().join("images").to_str().unwrap().to_string(),
            wal_mode: true,
        };
        let store = RecordStore::open(&config).await.unwrap();
        (store, dir)
    }

    fn small_image() -> GeneratedImage {
        GeneratedImage::solid(8, 8, [73, 109, 137])
    }

    async fn insert_behind_the_store(store: &RecordStore) {
        queries::records::insert_record(
            &store.db,
            "direct",
            Style::Cartoon,
            "image_direct.png",
            "2026-01-01T10:00:00.000Z",
        )
        .await
        .unwrap();
    }

    // --- Lifecycle ---

    #[tokio::test]
    async fn create_rate_delete_lifecycle() {
        let (store, _dir) = setup_store().await;

        let record = store
            .create("a fantasy castle", Style::Realistic, &small_image())
            .await
            .unwrap();
        assert!(record.id > 0);
        assert!(record.filename.starts_with("image_"));
        assert!(record.filename.ends_with(".png"));
        assert!(record.score.is_none());

        let fetched = store.get(record.id).await.unwrap().unwrap();
        assert_eq!(fetched, record);

        store
            .update_evaluation(record.id, 7, Some("good composition"))
            .await
            .unwrap();
        let rated = store.get(record.id).await.unwrap().unwrap();
        assert_eq!(rated.score, Some(7));
        assert_eq!(rated.feedback.as_deref(), Some("good composition"));

        store.delete(record.id).await.unwrap();
        assert!(store.get(record.id).await.unwrap().is_none());
        assert!(store.read_blob(&record).await.is_err());

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn create_writes_a_decodable_png_blob() {
        let (store, _dir) = setup_store().await;
        let record = store
            .create("a panda", Style::Cartoon, &small_image())
            .await
            .unwrap();

        let bytes = store.read_blob(&record).await.unwrap();
        let decoded = GeneratedImage::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn filenames_are_unique_per_record() {
        let (store, _dir) = setup_store().await;
        let a = store
            .create("same prompt", Style::Realistic, &small_image())
            .await
            .unwrap();
        let b = store
            .create("same prompt", Style::Realistic, &small_image())
            .await
            .unwrap();
        assert_ne!(a.filename, b.filename);
        store.close().await.unwrap();
    }

    // --- Guards ---

    #[tokio::test]
    async fn oversized_image_is_rejected_before_any_write() {
        let (store, _dir) = setup_store().await;
        let image = GeneratedImage::solid(MAX_IMAGE_DIM + 1, 1, [0, 0, 0]);

        let err = store
            .create("too big", Style::Realistic, &image)
            .await
            .unwrap_err();
        assert!(matches!(err, PictorError::ImageTooLarge { width, .. } if width == MAX_IMAGE_DIM + 1));

        assert_eq!(store.count().await.unwrap(), 0);
        let mut entries = tokio::fs::read_dir(store.blobs().root()).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn out_of_range_scores_are_rejected() {
        let (store, _dir) = setup_store().await;
        let record = store
            .create("rated", Style::Cartoon, &small_image())
            .await
            .unwrap();

        for score in [0, 11, -3] {
            let err = store
                .update_evaluation(record.id, score, None)
                .await
                .unwrap_err();
            assert!(matches!(err, PictorError::InvalidScore { .. }));
        }
        assert!(store.get(record.id).await.unwrap().unwrap().score.is_none());

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn evaluating_a_missing_record_fails() {
        let (store, _dir) = setup_store().await;
        let err = store.update_evaluation(999, 5, None).await.unwrap_err();
        assert!(matches!(err, PictorError::RecordNotFound { id: 999 }));
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn deleting_a_missing_record_fails() {
        let (store, _dir) = setup_store().await;
        let err = store.delete(999).await.unwrap_err();
        assert!(matches!(err, PictorError::RecordNotFound { id: 999 }));
        store.close().await.unwrap();
    }

    // --- Listing and cache ---

    #[tokio::test]
    async fn list_all_returns_newest_first() {
        let (store, _dir) = setup_store().await;
        let a = store
            .create("first", Style::Realistic, &small_image())
            .await
            .unwrap();
        let b = store
            .create("second", Style::Cyberpunk, &small_image())
            .await
            .unwrap();
        let c = store
            .create("third", Style::Cartoon, &small_image())
            .await
            .unwrap();

        let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, [c.id, b.id, a.id]);
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn fresh_listing_is_served_from_cache() {
        let (store, _dir) = setup_store().await;
        store
            .create("cached", Style::Realistic, &small_image())
            .await
            .unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);

        // A write behind the store's back is invisible while the cache
        // is fresh.
        insert_behind_the_store(&store).await;
        assert_eq!(store.list_all().await.unwrap().len(), 1);

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn stale_listing_is_refetched() {
        let (mut store, _dir) = setup_store().await;
        store.set_listing_ttl(Duration::from_millis(20));

        store
            .create("cached", Style::Realistic, &small_image())
            .await
            .unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);

        insert_behind_the_store(&store).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(store.list_all().await.unwrap().len(), 2);

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn local_writes_invalidate_the_listing() {
        let (store, _dir) = setup_store().await;
        let record = store
            .create("one", Style::Realistic, &small_image())
            .await
            .unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);

        store
            .create("two", Style::Cartoon, &small_image())
            .await
            .unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 2);

        store.update_evaluation(record.id, 8, None).await.unwrap();
        let listed = store.list_all().await.unwrap();
        let updated = listed.iter().find(|r| r.id == record.id).unwrap();
        assert_eq!(updated.score, Some(8));

        store.delete(record.id).await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);

        store.close().await.unwrap();
    }
}
