//! Project catalog - the portfolio behind the public grid
//!
//! This module owns what the site shows and the admin screen edits.
//!
//! # Architecture
//!
//! - **Project / ProjectPatch**: the entry model and the sparse
//!   admin-submission shape applied over it
//! - **ProjectRepository**: session-owned catalog with slot-backed
//!   persistence per mutation
//! - **CategoryFilter / filter_by_category**: read-only narrowing for the
//!   grid tabs
//! - **seed_projects**: the launch catalog, doubling as the load fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use showreel_core::portfolio::{CategoryFilter, ProjectPatch, ProjectRepository};
//! use showreel_core::storage::{MemoryBackend, SlotStore};
//!
//! let mut repo = ProjectRepository::open(SlotStore::new(MemoryBackend::new()));
//! repo.add(ProjectPatch::new().with_title("NEW CAMPAIGN"));
//!
//! let visible = showreel_core::portfolio::filter_by_category(
//!     repo.list(),
//!     CategoryFilter::All,
//! );
//! ```

mod repository;
mod seed;
mod types;
mod view;

pub use repository::{MoveDirection, ProjectRepository};
pub use seed::seed_projects;
pub use types::{
    AspectRatio, Category, FALLBACK_THUMBNAIL, FALLBACK_VIDEO_URL, Project, ProjectPatch,
    STUDIO_NAME,
};
pub use view::{CategoryFilter, filter_by_category};
