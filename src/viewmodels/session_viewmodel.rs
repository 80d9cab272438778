// ============================================================================
// SESSION VIEWMODEL - Restore, guard and logout
// ============================================================================
// Returns routes; the app shell performs the navigation.
// ============================================================================

use std::rc::Rc;

use crate::models::{AuthResult, Route};
use crate::services::redirect_policy::decide;
use crate::stores::SessionStore;

/// Persist a fresh session. A storage failure is logged and otherwise ignored:
/// the user stays logged in for this page load.
pub(crate) fn persist_session(store: &dyn SessionStore, session: &AuthResult) {
    if let Err(e) = store.save(session) {
        log::error!("❌ [SESSION] Could not persist session: {}", e);
    }
}

pub struct SessionViewModel {
    sessions: Rc<dyn SessionStore>,
}

impl SessionViewModel {
    pub fn new(sessions: Rc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub fn current(&self) -> Option<AuthResult> {
        self.sessions.load()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    /// Screen to show on app load
    pub fn restore(&self) -> Route {
        match self.current() {
            Some(session) => {
                let destination = decide(&session.user);
                log::info!("💾 [SESSION] Session restored, routing to {:?}", destination);
                destination.into()
            }
            None => {
                log::info!("ℹ️ [SESSION] No session, showing login");
                Route::Login
            }
        }
    }

    /// Route actually shown for a requested one: private screens need a
    /// session, login/register are skipped when one exists.
    pub fn guard(&self, requested: Route) -> Route {
        match (requested.requires_session(), self.current()) {
            (true, Some(_)) => requested,
            (true, None) => Route::Login,
            (false, Some(session)) => decide(&session.user).into(),
            (false, None) => requested,
        }
    }

    pub fn logout(&self) -> Route {
        self.sessions.clear();
        log::info!("👋 [SESSION] Logged out");
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::stores::MemorySessionStore;

    fn session(flags: [bool; 4]) -> AuthResult {
        AuthResult {
            access: "tok".into(),
            user: User {
                profile_set: flags[0],
                organization_set: flags[1],
                provider_rate_set: flags[2],
                availability_set: flags[3],
                ..User::default()
            },
            extra: Default::default(),
        }
    }

    #[test]
    fn restore_without_session_goes_to_login() {
        let vm = SessionViewModel::new(Rc::new(MemorySessionStore::new()));
        assert_eq!(vm.restore(), Route::Login);
    }

    #[test]
    fn restore_with_corrupt_session_goes_to_login() {
        let vm = SessionViewModel::new(Rc::new(MemorySessionStore::with_raw("not json")));
        assert_eq!(vm.restore(), Route::Login);
        assert!(!vm.is_logged_in());
    }

    #[test]
    fn restore_follows_redirection_policy() {
        let store = Rc::new(MemorySessionStore::new());
        store.save(&session([true, false, false, false])).unwrap();
        let vm = SessionViewModel::new(store);
        assert_eq!(vm.restore(), Route::OrganizationOnboarding);
    }

    #[test]
    fn guard_protects_private_routes() {
        let store = Rc::new(MemorySessionStore::new());
        let vm = SessionViewModel::new(store.clone());
        assert_eq!(vm.guard(Route::Dashboard), Route::Login);
        assert_eq!(vm.guard(Route::Register), Route::Register);

        store.save(&session([true; 4])).unwrap();
        assert_eq!(vm.guard(Route::Payment), Route::Payment);
        assert_eq!(vm.guard(Route::Login), Route::Dashboard);
    }

    #[test]
    fn logout_clears_the_store() {
        let store = Rc::new(MemorySessionStore::new());
        store.save(&session([true; 4])).unwrap();
        let vm = SessionViewModel::new(store.clone());
        assert_eq!(vm.logout(), Route::Login);
        assert_eq!(store.load(), None);
    }
}
