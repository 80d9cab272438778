use std::rc::Rc;

use crate::models::{RegisterRequest, Route};
use crate::services::auth_service;
use crate::services::transport::{GlooTransport, HttpTransport};
use crate::services::ApiClient;
use crate::state::FormState;
use crate::stores::SessionStore;
use crate::viewmodels::session_viewmodel::persist_session;

/// Raw registration form, as typed
#[derive(Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct RegisterViewModel<T = GlooTransport> {
    api: Rc<ApiClient<T>>,
    sessions: Rc<dyn SessionStore>,
    form: FormState,
}

impl<T: HttpTransport> RegisterViewModel<T> {
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

    /// New accounts always start onboarding at the provider profile
    pub async fn submit(&self, input: RegisterForm) -> Option<Route> {
        if !self.form.begin() {
            return None;
        }
        if input.password != input.confirm_password {
            self.form.fail("Passwords do not match");
            return None;
        }

        let request = RegisterRequest {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            password: input.password,
        };

        match auth_service::register(&*self.api, &request).await {
            Ok(result) => {
                persist_session(self.sessions.as_ref(), &result);
                self.form.succeed();
                Some(Route::ProviderOnboarding)
            }
            Err(err) => {
                self.form.fail(err.user_message());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::transport::mock::MockTransport;
    use crate::stores::MemorySessionStore;
    use futures::executor::block_on;
    use serde_json::json;

    fn form() -> RegisterForm {
        RegisterForm {
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            email: "ada@example.org".into(),
            phone_number: "08031234567".into(),
            password: "correct-horse".into(),
            confirm_password: "correct-horse".into(),
        }
    }

    fn view_model(transport: MockTransport) -> (RegisterViewModel<MockTransport>, Rc<MemorySessionStore>) {
        let store = Rc::new(MemorySessionStore::new());
        let api = Rc::new(ApiClient::with_transport(transport, AppConfig::default()));
        (RegisterViewModel::new(api, store.clone()), store)
    }

    #[test]
    fn created_account_goes_to_provider_onboarding() {
        // flags are ignored for registration
        let (vm, store) = view_model(MockTransport::new().respond(
            201,
            json!({"access": "new", "user": {"profile_set": true, "organization_set": true}}),
        ));
        assert_eq!(block_on(vm.submit(form())), Some(Route::ProviderOnboarding));
        assert_eq!(store.load().map(|s| s.access).as_deref(), Some("new"));
    }

    #[test]
    fn mismatched_passwords_never_reach_the_server() {
        let (vm, _) = view_model(MockTransport::new());
        let mut input = form();
        input.confirm_password = "different".into();
        assert_eq!(block_on(vm.submit(input)), None);
        assert_eq!(vm.form().status().error.as_deref(), Some("Passwords do not match"));
        assert!(!vm.form().is_submitting());
        assert_eq!(vm.api.transport().request_count(), 0);
    }

    #[test]
    fn server_error_is_shown_inline() {
        let (vm, store) = view_model(MockTransport::new().respond(400, json!({"phone_number": ["Phone number already in use"]})));
        assert_eq!(block_on(vm.submit(form())), None);
        assert_eq!(vm.form().status().error.as_deref(), Some("Phone number already in use"));
        assert_eq!(store.load(), None);
    }
}
