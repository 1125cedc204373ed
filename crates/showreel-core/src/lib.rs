//! Showreel Core Library
//!
//! This crate provides the data core of the INV-FILM portfolio site,
//! including:
//! - Project catalog (add, update, remove, reorder, filter)
//! - Editable site copy (directors / about pages)
//! - Slot storage over pluggable key-value backends
//! - Video and image link canonicalization
//! - Admin session gate
//!
//! Rendering, routing, and the concrete browser storage live in the
//! embedding application; everything here is synchronous and storage is
//! injected through [`storage::StorageBackend`].

pub mod admin;
pub mod links;
pub mod portfolio;
pub mod site;
pub mod storage;
pub mod error;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::admin::AdminSession;
    pub use crate::error::{Error, Result};
    pub use crate::portfolio::{
        AspectRatio, Category, CategoryFilter, MoveDirection, Project, ProjectPatch,
        ProjectRepository,
    };
    pub use crate::site::{SiteContent, SiteRepository};
    pub use crate::storage::{FileBackend, MemoryBackend, SlotStore, StorageBackend};
}
