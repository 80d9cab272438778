use std::rc::Rc;

use crate::models::{ChatMessage, ChatRole};
use crate::services::ask_service;
use crate::services::transport::{GlooTransport, HttpTransport};
use crate::services::ApiClient;
use crate::state::{FormState, ReactiveState};
use crate::stores::SessionStore;
use crate::utils::constants::MSG_SESSION_EXPIRED;

/// AI-chat panel: question in, answer appended to the transcript
pub struct AskViewModel<T = GlooTransport> {
    api: Rc<ApiClient<T>>,
    sessions: Rc<dyn SessionStore>,
    form: FormState,
    transcript: ReactiveState<Vec<ChatMessage>>,
}

impl<T: HttpTransport> AskViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>, sessions: Rc<dyn SessionStore>) -> Self {
        Self {
            api,
            sessions,
            form: FormState::new(),
            transcript: ReactiveState::new(Vec::new()),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn transcript(&self) -> &ReactiveState<Vec<ChatMessage>> {
        &self.transcript
    }

    /// True when an answer was appended
    pub async fn submit(&self, question: String) -> bool {
        if question.trim().is_empty() || !self.form.begin() {
            return false;
        }
        let Some(session) = self.sessions.load() else {
            self.form.fail(MSG_SESSION_EXPIRED);
            return false;
        };

        self.transcript
            .update(|messages| messages.push(ChatMessage::new(ChatRole::User, question.trim())));

        match ask_service::ask(&*self.api, &session, &question).await {
            Ok(answer) => {
                self.transcript
                    .update(|messages| messages.push(ChatMessage::new(ChatRole::Assistant, answer)));
                self.form.succeed();
                true
            }
            Err(err) => {
                self.form.fail(err.user_message());
                false
            }
        }
    }
}
