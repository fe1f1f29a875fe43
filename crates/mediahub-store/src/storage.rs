//! # Storage Trait
//!
//! The repository contract the HTTP layer is written against.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  axum handler                                                          │
//! │       │                                                                 │
//! │       │  state.store.search_media("beats")                             │
//! │       ▼                                                                 │
//! │  Arc<dyn Storage>                                                      │
//! │  ├── users:  get_user, get_user_by_username, create_user               │
//! │  ├── media:  get_all_media, get_featured_media, get_media_by_type,     │
//! │  │           get_media_by_id, create_media, search_media,              │
//! │  │           increment_downloads                                       │
//! │  └── top:    create_top_download, get_top_downloads (joined)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemStorage (in-memory tables behind one RwLock)                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method returns [`StoreResult`] so a persistent backend can slot in
//! behind the same trait. The in-memory implementation only fails where noted.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::StoreResult;
use crate::seed::SeedData;
use mediahub_core::{Media, NewMedia, NewTopDownload, NewUser, TopDownload, TopDownloadWithMedia, User};

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub users: usize,
    pub media: usize,
    pub top_downloads: usize,
}

/// Storage for users, media and top download rankings.
#[async_trait]
pub trait Storage: Send + Sync {
    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Looks up a user by id.
    async fn get_user(&self, id: i32) -> StoreResult<Option<User>>;

    /// Looks up a user by exact username.
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Registers a user under the next user id.
    ///
    /// ## Errors
    /// * `StoreError::UniqueViolation` - username already taken
    /// * `StoreError::IdsExhausted` - user ids used up
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    // -------------------------------------------------------------------------
    // Media
    // -------------------------------------------------------------------------

    /// All media in insertion order.
    async fn get_all_media(&self) -> StoreResult<Vec<Media>>;

    /// Media flagged as featured, in insertion order.
    async fn get_featured_media(&self) -> StoreResult<Vec<Media>>;

    /// Media whose type equals `media_type` exactly (case-sensitive).
    async fn get_media_by_type(&self, media_type: &str) -> StoreResult<Vec<Media>>;

    async fn get_media_by_id(&self, id: i32) -> StoreResult<Option<Media>>;

    /// Stores a media record under the next media id.
    ///
    /// Fails with `StoreError::IdsExhausted` once media ids are used up.
    async fn create_media(&self, media: NewMedia) -> StoreResult<Media>;

    /// Case-insensitive substring search over title, artist and category.
    async fn search_media(&self, query: &str) -> StoreResult<Vec<Media>>;

    /// Adds one to the media's download counter. Unknown ids are ignored.
    async fn increment_downloads(&self, media_id: i32) -> StoreResult<()>;

    // -------------------------------------------------------------------------
    // Top downloads
    // -------------------------------------------------------------------------

    /// Stores a ranking entry. The media reference is checked on read.
    ///
    /// Fails with `StoreError::IdsExhausted` once ranking ids are used up.
    async fn create_top_download(&self, entry: NewTopDownload) -> StoreResult<TopDownload>;

    /// Ranking entries by ascending rank, each joined with its media.
    ///
    /// ## Errors
    /// * `StoreError::DanglingReference` - an entry points at missing media
    async fn get_top_downloads(&self) -> StoreResult<Vec<TopDownloadWithMedia>>;

    // -------------------------------------------------------------------------
    // Maintenance
    // -------------------------------------------------------------------------

    /// Loads a batch of media and rankings in one step.
    ///
    /// ## Errors
    /// * `StoreError::InvalidSeed` - a ranking points outside the batch
    /// * `StoreError::IdsExhausted` - the batch does not fit the id space
    async fn seed(&self, data: SeedData) -> StoreResult<()>;

    async fn stats(&self) -> StoreResult<StoreStats>;
}
