// ============================================================================
// LOGIN VIEWMODEL
// ============================================================================
// credentials -> auth client -> session store -> redirection policy
// ============================================================================

use std::rc::Rc;

use crate::models::{Credentials, Route};
use crate::services::auth_service;
use crate::services::redirect_policy::decide;
use crate::services::transport::{GlooTransport, HttpTransport};
use crate::services::ApiClient;
use crate::state::FormState;
use crate::stores::SessionStore;
use crate::viewmodels::session_viewmodel::persist_session;

pub struct LoginViewModel<T = GlooTransport> {
    api: Rc<ApiClient<T>>,
    sessions: Rc<dyn SessionStore>,
    form: FormState,
}

impl<T: HttpTransport> LoginViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>, sessions: Rc<dyn SessionStore>) -> Self {
        Self {
            api,
            sessions,
            form: FormState::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the next route on success. On failure the message is left in
    /// `form()` and `None` is returned; a submit while one is running is ignored.
    pub async fn submit(&self, credentials: Credentials) -> Option<Route> {
        if !self.form.begin() {
            log::debug!("⏳ [LOGIN] Submit ignored, request already in flight");
            return None;
        }

        match auth_service::login(&*self.api, &credentials).await {
            Ok(result) => {
                persist_session(self.sessions.as_ref(), &result);
                let destination = decide(&result.user);
                self.form.succeed();
                log::info!("➡️ [LOGIN] Routing to {:?}", destination);
                Some(destination.into())
            }
            Err(err) => {
                self.form.fail(err.user_message());
                None
            }
        }
    }
}
