//! Session state and lifecycle

use eduguard_access::SessionUser;
use tracing::{debug, info};

use crate::error::SessionResult;
use crate::store::SessionRepository;

/// The two states of a dashboard session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No user record held
    Anonymous,
    /// A user record is held; how it was reached does not matter
    Authenticated,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Anonymous => write!(f, "anonymous"),
            SessionState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Owns the current session user record
///
/// The record is mutated only by whole replacement: login substitutes a
/// new record and discards the old one, logout and forced expiry drop it.
/// Consumers receive the record by reference; there is no ambient global
/// lookup.
pub struct SessionManager<R: SessionRepository> {
    repository: R,
    current: Option<SessionUser>,
}

impl<R: SessionRepository> SessionManager<R> {
    /// Create a manager with no active session
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            current: None,
        }
    }

    /// Replace the session with a freshly authenticated user and persist it
    pub fn login(&mut self, user: SessionUser) -> SessionResult<()> {
        self.repository.save(&user)?;
        info!(user_id = %user.id, role = %user.role, "session authenticated");
        self.current = Some(user);
        Ok(())
    }

    /// Drop the session user and delete the persisted record
    pub fn logout(&mut self) -> SessionResult<()> {
        self.repository.clear()?;
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "session ended");
        }
        Ok(())
    }

    /// Forced expiry: same transition as logout, logged distinctly
    pub fn expire(&mut self) -> SessionResult<()> {
        self.repository.clear()?;
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "session expired");
        }
        Ok(())
    }

    /// Rehydrate the session from storage at startup
    pub fn restore(&mut self) -> SessionResult<SessionState> {
        self.current = self.repository.load()?;
        match &self.current {
            Some(user) => {
                debug!(user_id = %user.id, role = %user.role, "session restored");
            }
            None => {
                debug!("no persisted session to restore");
            }
        }
        Ok(self.state())
    }

    /// The current session user, if authenticated
    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemorySessionRepository;
    use eduguard_access::BuiltinRole;

    fn manager() -> SessionManager<InMemorySessionRepository> {
        SessionManager::new(InMemorySessionRepository::new())
    }

    #[test]
    fn test_starts_anonymous() {
        let mgr = manager();
        assert_eq!(mgr.state(), SessionState::Anonymous);
        assert!(mgr.current().is_none());
    }

    #[test]
    fn test_login_transitions_to_authenticated() {
        let mut mgr = manager();
        let user = SessionUser::with_role("u1", "Amina", BuiltinRole::SchoolAdmin);
        mgr.login(user.clone()).unwrap();

        assert_eq!(mgr.state(), SessionState::Authenticated);
        assert_eq!(mgr.current(), Some(&user));
    }

    #[test]
    fn test_logout_transitions_to_anonymous() {
        let mut mgr = manager();
        mgr.login(SessionUser::with_role("u1", "Amina", BuiltinRole::Agent))
            .unwrap();
        mgr.logout().unwrap();

        assert_eq!(mgr.state(), SessionState::Anonymous);
        assert!(mgr.current().is_none());
    }

    #[test]
    fn test_expire_behaves_like_logout() {
        let mut mgr = manager();
        mgr.login(SessionUser::with_role("u1", "Amina", BuiltinRole::Agent))
            .unwrap();
        mgr.expire().unwrap();

        assert_eq!(mgr.state(), SessionState::Anonymous);
        assert!(mgr.current().is_none());
    }

    #[test]
    fn test_login_replaces_record_whole() {
        let mut mgr = manager();
        mgr.login(SessionUser::with_role("u1", "Amina", BuiltinRole::Agent))
            .unwrap();

        let replacement = SessionUser::with_permissions(
            "u2",
            "Juma",
            "inspector",
            vec!["view_incidents".to_string()],
        );
        mgr.login(replacement.clone()).unwrap();

        assert_eq!(mgr.current(), Some(&replacement));
    }

    #[test]
    fn test_restore_with_empty_storage_stays_anonymous() {
        let mut mgr = manager();
        assert_eq!(mgr.restore().unwrap(), SessionState::Anonymous);
    }

    #[test]
    fn test_logout_without_session_is_harmless() {
        let mut mgr = manager();
        mgr.logout().unwrap();
        assert_eq!(mgr.state(), SessionState::Anonymous);
    }
}
