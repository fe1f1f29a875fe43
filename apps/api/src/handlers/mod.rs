//! # Handlers
//!
//! One module per resource. Each handler follows the same shape:
//!
//! ```text
//! extract ──► validate (mediahub_core::validation) ──► store call ──► Json
//!                 │                                        │
//!                 └── 400                                  └── 404 / 500
//! ```

pub mod convert;
pub mod downloads;
pub mod health;
pub mod media;
