//! Project catalog repository
//!
//! Owns the in-memory catalog for the session and mirrors every mutation
//! into the projects slot as one whole-collection write. Load happens once
//! at open; the browser storage model has no change notifications, so the
//! in-memory state is authoritative until the page goes away.

use tracing::{debug, info, warn};

use super::seed::seed_projects;
use super::types::{Project, ProjectPatch};
use crate::error::{Error, Result};
use crate::storage::{PROJECTS_SLOT, SlotStore, StorageBackend};

/// Direction an entry moves within the catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the front of the grid
    Up,
    /// Towards the back of the grid
    Down,
}

impl std::fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDirection::Up => write!(f, "up"),
            MoveDirection::Down => write!(f, "down"),
        }
    }
}

/// Repository for the project catalog
pub struct ProjectRepository<B> {
    store: SlotStore<B>,
    projects: Vec<Project>,
}

impl<B: StorageBackend> ProjectRepository<B> {
    /// Open the catalog: load the projects slot, falling back to the launch
    /// catalog, and re-canonicalize links in entries written by older
    /// builds.
    pub fn open(mut store: SlotStore<B>) -> Self {
        let projects = store.load_with(PROJECTS_SLOT, seed_projects, |projects| {
            for project in projects {
                project.normalize_links();
            }
        });
        Self { store, projects }
    }

    /// Consume the repository, returning its slot store.
    pub fn into_store(self) -> SlotStore<B> {
        self.store
    }

    /// All entries, in grid order.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Create an entry from an admin submission and place it at the front
    /// of the grid. Unset fields take the house defaults; link fields are
    /// canonicalized. Returns the stored entry.
    pub fn add(&mut self, patch: ProjectPatch) -> Project {
        let project = Project::from_patch(patch);
        info!(project_id = %project.id, title = %project.title, "Project added");

        self.projects.insert(0, project.clone());
        self.persist();
        project
    }

    /// Merge the set fields of `patch` over the entry with `id` and
    /// re-canonicalize its links. Returns the updated entry, or
    /// [`Error::ProjectNotFound`] when no entry has that id.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> Result<Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))?;

        project.apply_patch(patch);
        let updated = project.clone();
        info!(project_id = %id, title = %updated.title, "Project updated");

        self.persist();
        Ok(updated)
    }

    /// Delete the entry with `id`. Deleting an absent id is a no-op, so a
    /// stale admin row cannot poison the session. Returns whether an entry
    /// was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.projects.iter().position(|p| p.id == id) else {
            debug!(project_id = %id, "Remove skipped, no such project");
            return false;
        };

        self.projects.remove(pos);
        info!(project_id = %id, "Project removed");
        self.persist();
        true
    }

    /// Swap the entry with `id` with its neighbor in `direction`. Moves
    /// past either end, and moves of unknown ids, are no-ops. Returns
    /// whether the order changed.
    pub fn reorder(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(pos) = self.projects.iter().position(|p| p.id == id) else {
            debug!(project_id = %id, "Reorder skipped, no such project");
            return false;
        };

        let target = match direction {
            MoveDirection::Up if pos > 0 => pos - 1,
            MoveDirection::Down if pos + 1 < self.projects.len() => pos + 1,
            _ => {
                debug!(project_id = %id, direction = %direction, "Reorder skipped at boundary");
                return false;
            }
        };

        self.projects.swap(pos, target);
        info!(project_id = %id, direction = %direction, "Project reordered");
        self.persist();
        true
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(PROJECTS_SLOT, &self.projects) {
            warn!(error = %e, "Failed to persist project catalog, keeping in-memory state");
        }
    }
}
