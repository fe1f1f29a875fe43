//! # mediahub-core: Pure Domain Types for MediaHub
//!
//! This crate holds the entities shared by the repository and the HTTP layer,
//! along with the validation rules applied at the request boundary.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MediaHub Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web client                                   │   │
//! │  │    Browse ──► Search ──► Download ──► Convert                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mediahub-api (axum)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mediahub-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌──────────────┐            │   │
//! │  │   │   types   │  │  validation │  │    error     │            │   │
//! │  │   │  Media    │  │  search q   │  │  CoreError   │            │   │
//! │  │   │  User     │  │  media id   │  │  Validation  │            │   │
//! │  │   │  TopDl    │  │  convert    │  │              │            │   │
//! │  │   └───────────┘  └─────────────┘  └──────────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 mediahub-store (Repository)                     │   │
//! │  │          In-memory tables, id counters, seed data               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Media, User, TopDownload) and their insert shapes
//! - [`error`] - Domain error types
//! - [`validation`] - Request boundary validation
//!
//! ## Example Usage
//!
//! ```rust
//! use mediahub_core::validation::parse_media_id;
//!
//! assert_eq!(parse_media_id("42").unwrap(), 42);
//! assert!(parse_media_id("abc").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Media type value for audio tracks.
pub const MEDIA_TYPE_MUSIC: &str = "music";

/// Media type value for video clips.
pub const MEDIA_TYPE_VIDEO: &str = "video";
