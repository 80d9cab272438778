use std::rc::Rc;

use crate::services::payment_service;
use crate::services::transport::{GlooTransport, HttpTransport};
use crate::services::ApiClient;
use crate::state::FormState;
use crate::stores::SessionStore;
use crate::utils::constants::MSG_SESSION_EXPIRED;

#[derive(Clone, Default, PartialEq, Debug)]
pub struct PaymentForm {
    pub email: String,
    pub phone_number: String,
    /// As typed; thousands separators are allowed
    pub amount: String,
}

/// "5,000" -> 5000. Decimals and negatives are rejected.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

pub struct PaymentViewModel<T = GlooTransport> {
    api: Rc<ApiClient<T>>,
    sessions: Rc<dyn SessionStore>,
    form: FormState,
}

impl<T: HttpTransport> PaymentViewModel<T> {
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

    /// Contact details of the logged-in user, to prefill the form
    pub fn defaults(&self) -> PaymentForm {
        let user = self.sessions.load().map(|session| session.user);
        PaymentForm {
            email: user.as_ref().and_then(|u| u.email()).unwrap_or_default().to_string(),
            phone_number: user.as_ref().and_then(|u| u.phone_number()).unwrap_or_default().to_string(),
            amount: String::new(),
        }
    }

    /// Checkout URL to redirect the browser to, or `None` with the error in `form()`
    pub async fn submit(&self, input: PaymentForm) -> Option<String> {
        if !self.form.begin() {
            return None;
        }
        let Some(session) = self.sessions.load() else {
            self.form.fail(MSG_SESSION_EXPIRED);
            return None;
        };
        let Some(amount) = parse_amount(&input.amount) else {
            self.form.fail("Enter the amount as a whole number");
            return None;
        };

        match payment_service::initiate_payment(&*self.api, &session, &input.email, &input.phone_number, amount).await {
            Ok(url) => {
                // Keep the form disabled: the page is about to unload
                log::info!("↗️ [PAYMENT] Redirecting to payment provider");
                Some(url)
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
    use crate::models::AuthResult;
    use crate::services::transport::mock::MockTransport;
    use crate::stores::MemorySessionStore;
    use futures::executor::block_on;
    use serde_json::json;

    fn logged_in_store() -> Rc<MemorySessionStore> {
        let store = Rc::new(MemorySessionStore::new());
        let session: AuthResult = serde_json::from_value(json!({
            "access": "tok",
            "user": {"email": "ada@example.org", "phone_number": "+2348031234567"}
        }))
        .unwrap();
        store.save(&session).unwrap();
        store
    }

    fn view_model(transport: MockTransport, store: Rc<MemorySessionStore>) -> PaymentViewModel<MockTransport> {
        PaymentViewModel::new(Rc::new(ApiClient::with_transport(transport, AppConfig::default())), store)
    }

    #[test]
    fn amounts() {
        assert_eq!(parse_amount("5,000"), Some(5000));
        assert_eq!(parse_amount(" 250 "), Some(250));
        assert_eq!(parse_amount("12.50"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn defaults_come_from_the_session() {
        let vm = view_model(MockTransport::new(), logged_in_store());
        let defaults = vm.defaults();
        assert_eq!(defaults.email, "ada@example.org");
        assert_eq!(defaults.phone_number, "+2348031234567");
    }

    #[test]
    fn success_returns_checkout_url() {
        let vm = view_model(
            MockTransport::new().respond(200, json!({"data": {"authorization_url": "https://pay.test/x"}})),
            logged_in_store(),
        );
        let mut input = vm.defaults();
        input.amount = "1,500".into();
        assert_eq!(block_on(vm.submit(input)).as_deref(), Some("https://pay.test/x"));
        assert_eq!(vm.api.transport().requests()[0].body["amount"], json!(1500));
    }

    #[test]
    fn missing_session_asks_for_login() {
        let vm = view_model(MockTransport::new(), Rc::new(MemorySessionStore::new()));
        let input = PaymentForm {
            email: "ada@example.org".into(),
            phone_number: "08031234567".into(),
            amount: "100".into(),
        };
        assert_eq!(block_on(vm.submit(input)), None);
        assert_eq!(vm.form().status().error.as_deref(), Some(MSG_SESSION_EXPIRED));
        assert_eq!(vm.api.transport().request_count(), 0);
    }
}
