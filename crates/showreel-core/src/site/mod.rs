//! Site copy - editable directors and about pages
//!
//! The public pages outside the grid render from one [`SiteContent`]
//! singleton, persisted in its own slot and edited whole sections at a
//! time from the admin screen.

mod content;
mod repository;

pub use content::{AboutContent, DirectorsContent, SiteContent, Stat};
pub use repository::SiteRepository;
