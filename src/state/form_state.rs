// ============================================================================
// FORM STATE - Submit lifecycle shared by every form screen
// ============================================================================

use crate::state::reactivity::ReactiveState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub submitting: bool,
    pub error: Option<String>,
}

/// At most one submit in flight; the last failure message stays visible
/// until the next attempt.
#[derive(Clone)]
pub struct FormState {
    status: ReactiveState<FormStatus>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            status: ReactiveState::new(FormStatus::default()),
        }
    }

    pub fn reactive(&self) -> &ReactiveState<FormStatus> {
        &self.status
    }

    pub fn status(&self) -> FormStatus {
        self.status.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.with(|status| status.submitting)
    }

    /// Returns false when a submit is already running
    pub fn begin(&self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status.set(FormStatus {
            submitting: true,
            error: None,
        });
        true
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.status.set(FormStatus {
            submitting: false,
            error: Some(message.into()),
        });
    }

    pub fn succeed(&self) {
        self.status.set(FormStatus::default());
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_refused_while_submitting() {
        let form = FormState::new();
        assert!(form.begin());
        assert!(!form.begin());
        form.fail("bad creds");
        assert_eq!(
            form.status(),
            FormStatus {
                submitting: false,
                error: Some("bad creds".to_string())
            }
        );
        assert!(form.begin());
        assert_eq!(form.status().error, None);
    }
}
