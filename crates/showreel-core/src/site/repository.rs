//! Site copy repository
//!
//! Same session model as the project catalog: load once at open, keep the
//! singleton in memory, mirror every edit into its slot as one write.

use tracing::{info, warn};

use super::content::{AboutContent, DirectorsContent, SiteContent};
use crate::storage::{SITE_CONTENT_SLOT, SlotStore, StorageBackend};

/// Repository for the editable site copy
pub struct SiteRepository<B> {
    store: SlotStore<B>,
    content: SiteContent,
}

impl<B: StorageBackend> SiteRepository<B> {
    /// Open the site copy: load the content slot, falling back to the
    /// launch copy, and re-canonicalize still links written by older
    /// builds.
    pub fn open(mut store: SlotStore<B>) -> Self {
        let content = store.load_with(SITE_CONTENT_SLOT, SiteContent::default, |content| {
            content.normalize_links();
        });
        Self { store, content }
    }

    /// Consume the repository, returning its slot store.
    pub fn into_store(self) -> SlotStore<B> {
        self.store
    }

    /// The current site copy.
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Replace the about page copy and persist. Still links are
    /// canonicalized first.
    pub fn set_about(&mut self, about: AboutContent) {
        self.content.about = about;
        self.content.about.normalize_links();
        info!("About copy updated");
        self.persist();
    }

    /// Replace the directors page copy and persist.
    pub fn set_directors(&mut self, directors: DirectorsContent) {
        self.content.directors = directors;
        info!(director = %self.content.directors.name, "Directors copy updated");
        self.persist();
    }

    /// Replace the whole site copy and persist.
    pub fn replace(&mut self, mut content: SiteContent) {
        content.normalize_links();
        self.content = content;
        info!("Site copy replaced");
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(SITE_CONTENT_SLOT, &self.content) {
            warn!(error = %e, "Failed to persist site copy, keeping in-memory state");
        }
    }
}
