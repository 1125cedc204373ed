//! Admin session gate
//!
//! The site has no accounts: one hardcoded passcode opens the admin screen
//! for the session, and the flag lives in its own slot. The browser build
//! backs that slot with session storage, which scopes the flag to the tab;
//! this module only cares that the flag round-trips.

use tracing::{debug, info, warn};

use crate::storage::{ADMIN_SESSION_SLOT, SlotStore, StorageBackend};

/// Passcode opening the admin screen
pub const ADMIN_PASSCODE: &str = "INV2024";

/// Check a submitted passcode.
pub fn verify_passcode(input: &str) -> bool {
    input == ADMIN_PASSCODE
}

/// Session gate over the admin flag slot
pub struct AdminSession<B> {
    store: SlotStore<B>,
}

impl<B: StorageBackend> AdminSession<B> {
    pub fn new(store: SlotStore<B>) -> Self {
        Self { store }
    }

    /// Consume the session, returning the slot store.
    pub fn into_store(self) -> SlotStore<B> {
        self.store
    }

    /// Try to open the session with `passcode`. On success the flag is
    /// persisted, so reloads within the same session stay authenticated.
    pub fn login(&mut self, passcode: &str) -> bool {
        if !verify_passcode(passcode) {
            debug!("Admin login rejected");
            return false;
        }
        if let Err(e) = self.store.save(ADMIN_SESSION_SLOT, &true) {
            warn!(error = %e, "Failed to persist admin session flag");
        }
        info!("Admin session opened");
        true
    }

    /// Whether the session flag is set.
    pub fn is_authenticated(&self) -> bool {
        self.store.get::<bool>(ADMIN_SESSION_SLOT).unwrap_or(false)
    }

    /// Close the session and clear the flag.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.remove(ADMIN_SESSION_SLOT) {
            warn!(error = %e, "Failed to clear admin session flag");
        }
        info!("Admin session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryBackend, StorageBackend};

    #[test]
    fn test_wrong_passcode_is_rejected() {
        let mut session = AdminSession::new(SlotStore::new(MemoryBackend::new()));

        assert!(!session.login("letmein"));
        assert!(!session.login("inv2024"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_right_passcode_opens_and_persists_the_session() {
        let mut session = AdminSession::new(SlotStore::new(MemoryBackend::new()));

        assert!(session.login(ADMIN_PASSCODE));
        assert!(session.is_authenticated());

        // The flag's wire form is the bare JSON literal.
        let backend = session.into_store().into_backend();
        assert_eq!(backend.get(ADMIN_SESSION_SLOT).as_deref(), Some("true"));
    }

    #[test]
    fn test_session_survives_reload() {
        let mut session = AdminSession::new(SlotStore::new(MemoryBackend::new()));
        assert!(session.login(ADMIN_PASSCODE));

        // A new gate over the same backend sees the open session.
        let session = AdminSession::new(session.into_store());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_the_flag() {
        let mut session = AdminSession::new(SlotStore::new(MemoryBackend::new()));
        session.login(ADMIN_PASSCODE);
        session.logout();

        assert!(!session.is_authenticated());

        // Logging out twice is harmless.
        session.logout();
        assert!(!session.is_authenticated());
    }
}
