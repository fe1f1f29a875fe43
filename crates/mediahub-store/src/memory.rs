//! # In-Memory Storage
//!
//! [`Storage`] backed by ordered maps that live for the lifetime of the
//! process.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MemStorage                                      │
//! │                                                                         │
//! │  RwLock<Tables>                                                        │
//! │  ├── users          BTreeMap<i32, User>          next_user_id          │
//! │  ├── media          BTreeMap<i32, Media>         next_media_id         │
//! │  └── top_downloads  BTreeMap<i32, TopDownload>   next_top_download_id  │
//! │                                                                         │
//! │  Reads  ──► read lock  (run concurrently)                              │
//! │  Writes ──► write lock (create_*, increment_downloads, seed)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids only grow, so iterating a map in key order is insertion order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::error::{StoreError, StoreResult};
use crate::seed::SeedData;
use crate::storage::{Storage, StoreStats};
use mediahub_core::{Media, NewMedia, NewTopDownload, NewUser, TopDownload, TopDownloadWithMedia, User};

// =============================================================================
// Id Sequence
// =============================================================================

/// Monotonic id generator starting at 1.
///
/// Ids stop at `i32::MAX`; past that the sequence is exhausted.
#[derive(Debug, Clone, Copy)]
struct IdSequence(Option<i32>);

impl IdSequence {
    fn next(&mut self) -> Option<i32> {
        let id = self.0?;
        self.0 = id.checked_add(1);
        Some(id)
    }

    /// Whether `n` more ids can be handed out.
    fn has_room(&self, n: usize) -> bool {
        match self.0 {
            Some(next) => (i32::MAX - next) as i64 + 1 >= n as i64,
            None => n == 0,
        }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        IdSequence(Some(1))
    }
}

// =============================================================================
// Tables
// =============================================================================

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    media: BTreeMap<i32, Media>,
    top_downloads: BTreeMap<i32, TopDownload>,
    user_ids: IdSequence,
    media_ids: IdSequence,
    top_download_ids: IdSequence,
}

impl Tables {
    fn insert_user(&mut self, new: NewUser) -> StoreResult<User> {
        let id = self
            .user_ids
            .next()
            .ok_or(StoreError::IdsExhausted("User"))?;
        let user = new.into_user(id);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn insert_media(&mut self, new: NewMedia) -> StoreResult<Media> {
        let id = self
            .media_ids
            .next()
            .ok_or(StoreError::IdsExhausted("Media"))?;
        let media = new.into_media(id);
        self.media.insert(media.id, media.clone());
        Ok(media)
    }

    fn insert_top_download(&mut self, new: NewTopDownload) -> StoreResult<TopDownload> {
        let id = self
            .top_download_ids
            .next()
            .ok_or(StoreError::IdsExhausted("TopDownload"))?;
        let entry = new.into_top_download(id);
        self.top_downloads.insert(entry.id, entry.clone());
        Ok(entry)
    }

    /// Inserts a seed batch. Nothing is written if the batch is inconsistent
    /// or would not fit in the remaining id space.
    fn apply_seed(&mut self, data: SeedData) -> StoreResult<()> {
        if let Some(bad) = data.first_out_of_range() {
            return Err(StoreError::InvalidSeed(format!(
                "ranking {} references media #{} but the batch has {} media",
                bad.rank,
                bad.media_index,
                data.media.len()
            )));
        }

        if !self.media_ids.has_room(data.media.len()) {
            return Err(StoreError::IdsExhausted("Media"));
        }
        if !self.top_download_ids.has_room(data.rankings.len()) {
            return Err(StoreError::IdsExhausted("TopDownload"));
        }

        let mut ids = Vec::with_capacity(data.media.len());
        for new in data.media {
            ids.push(self.insert_media(new)?.id);
        }

        for ranking in data.rankings {
            self.insert_top_download(NewTopDownload {
                media_id: ids[ranking.media_index],
                rank: ranking.rank,
                downloads: ranking.downloads,
            })?;
        }

        Ok(())
    }

    fn media_where(&self, predicate: impl Fn(&Media) -> bool) -> Vec<Media> {
        self.media.values().filter(|&m| predicate(m)).cloned().collect()
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            media: self.media.len(),
            top_downloads: self.top_downloads.len(),
        }
    }
}

// =============================================================================
// MemStorage
// =============================================================================

/// In-memory repository.
///
/// ## Usage
/// ```rust,ignore
/// use mediahub_store::{MemStorage, Storage};
///
/// let store = MemStorage::with_sample_data()?;
/// let featured = store.get_featured_media().await?;
/// assert_eq!(featured.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    /// Creates a store with no records. All id sequences start at 1.
    pub fn empty() -> Self {
        MemStorage::default()
    }

    /// Creates a store pre-loaded with `data`.
    pub fn with_seed(data: SeedData) -> StoreResult<Self> {
        let mut tables = Tables::default();
        tables.apply_seed(data)?;

        let stats = tables.stats();
        info!(
            media = stats.media,
            top_downloads = stats.top_downloads,
            "Store seeded"
        );

        Ok(MemStorage {
            tables: RwLock::new(tables),
        })
    }

    /// Creates a store pre-loaded with [`SeedData::sample`].
    pub fn with_sample_data() -> StoreResult<Self> {
        MemStorage::with_seed(SeedData::sample())
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StoreError::duplicate("username", user.username));
        }

        let user = tables.insert_user(user)?;
        debug!(id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_all_media(&self) -> StoreResult<Vec<Media>> {
        Ok(self.tables.read().await.media_where(|_| true))
    }

    async fn get_featured_media(&self) -> StoreResult<Vec<Media>> {
        Ok(self.tables.read().await.media_where(|m| m.featured))
    }

    async fn get_media_by_type(&self, media_type: &str) -> StoreResult<Vec<Media>> {
        Ok(self
            .tables
            .read()
            .await
            .media_where(|m| m.media_type == media_type))
    }

    async fn get_media_by_id(&self, id: i32) -> StoreResult<Option<Media>> {
        Ok(self.tables.read().await.media.get(&id).cloned())
    }

    async fn create_media(&self, media: NewMedia) -> StoreResult<Media> {
        let media = self.tables.write().await.insert_media(media)?;
        debug!(id = media.id, title = %media.title, "Created media");
        Ok(media)
    }

    async fn search_media(&self, query: &str) -> StoreResult<Vec<Media>> {
        let needle = query.to_lowercase();
        let results = self
            .tables
            .read()
            .await
            .media_where(|m| m.matches_lowercase(&needle));

        debug!(query = %query, count = results.len(), "Searched media");
        Ok(results)
    }

    async fn increment_downloads(&self, media_id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;

        match tables.media.get_mut(&media_id) {
            Some(media) => {
                media.downloads = media.downloads.saturating_add(1);
                debug!(id = media_id, downloads = media.downloads, "Incremented downloads");
            }
            None => debug!(id = media_id, "Increment skipped, media not found"),
        }

        Ok(())
    }

    async fn create_top_download(&self, entry: NewTopDownload) -> StoreResult<TopDownload> {
        let entry = self.tables.write().await.insert_top_download(entry)?;
        debug!(id = entry.id, media_id = entry.media_id, rank = entry.rank, "Created top download");
        Ok(entry)
    }

    async fn get_top_downloads(&self) -> StoreResult<Vec<TopDownloadWithMedia>> {
        let tables = self.tables.read().await;

        let mut entries: Vec<&TopDownload> = tables.top_downloads.values().collect();
        // Stable: equal ranks keep insertion order.
        entries.sort_by_key(|e| e.rank);

        entries
            .into_iter()
            .map(|entry| match tables.media.get(&entry.media_id) {
                Some(media) => Ok(TopDownloadWithMedia {
                    entry: entry.clone(),
                    media: media.clone(),
                }),
                None => {
                    error!(
                        top_download_id = entry.id,
                        media_id = entry.media_id,
                        "Top download references missing media"
                    );
                    Err(StoreError::DanglingReference {
                        top_download_id: entry.id,
                        media_id: entry.media_id,
                    })
                }
            })
            .collect()
    }

    async fn seed(&self, data: SeedData) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.apply_seed(data)?;

        let stats = tables.stats();
        info!(
            media = stats.media,
            top_downloads = stats.top_downloads,
            "Store seeded"
        );
        Ok(())
    }

    async fn stats(&self) -> StoreResult<StoreStats> {
        Ok(self.tables.read().await.stats())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
