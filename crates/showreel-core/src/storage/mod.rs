//! Storage layer - pluggable key-value slots
//!
//! Persisted state lives in named slots on an injected backend, one JSON
//! document per slot.
//!
//! # Architecture
//!
//! - `backend`: the [`StorageBackend`] capability plus the in-memory and
//!   file-per-slot implementations
//! - `slot`: typed load/save with fallback seeding and recovery
//! - `paths`: data directory resolution for the file backend
//!
//! # Usage
//!
//! ```ignore
//! use showreel_core::storage::{FileBackend, MemoryBackend, SlotStore};
//!
//! // In-memory backend for tests
//! let store = SlotStore::new(MemoryBackend::new());
//!
//! // Or the file backend for a native embedding
//! let store = SlotStore::new(FileBackend::open_default()?);
//! ```

pub mod backend;
pub mod paths;
pub mod slot;

// Re-export commonly used types
pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use slot::{ADMIN_SESSION_SLOT, PROJECTS_SLOT, SITE_CONTENT_SLOT, SlotStore};
