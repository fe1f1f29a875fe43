//! # mediahub-store: Repository Layer for MediaHub
//!
//! Owns every User, Media and TopDownload record together with the id
//! sequences that number them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MediaHub Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (GET /api/downloads/top)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  mediahub-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Storage     │    │  MemStorage   │    │   SeedData   │  │   │
//! │  │   │  (trait)      │◄───│  RwLock<..>   │◄───│  sample()    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The `Storage` trait and `StoreStats`
//! - [`memory`] - `MemStorage`, the in-memory implementation
//! - [`seed`] - Sample catalog and seed batches
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mediahub_store::{MemStorage, Storage};
//!
//! let store: Arc<dyn Storage> = Arc::new(MemStorage::with_sample_data()?);
//! let top = store.get_top_downloads().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod seed;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::MemStorage;
pub use seed::{SeedData, SeedRanking};
pub use storage::{Storage, StoreStats};
