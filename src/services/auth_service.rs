use crate::error::ApiError;
use crate::models::{AuthResult, Credentials, RegisterRequest};
use crate::services::api_client::{ApiClient, Expect};
use crate::services::transport::HttpTransport;
use crate::utils::constants::{
    LOGIN_PATH, MIN_PASSWORD_LEN, MSG_INVALID_CREDENTIALS, MSG_REGISTRATION_FAILED, REGISTER_PATH,
};
use crate::utils::phone::normalize_phone;

pub(crate) fn require(value: &str, label: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Invalid(format!("{} is required", label)));
    }
    Ok(())
}

/// `local@domain` with something on both sides of the `@`
pub(crate) fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Log in with phone number and password.
///
/// Succeeds only on HTTP 200. The phone number is canonicalized before it is
/// sent; empty fields never reach the network.
pub async fn login<T: HttpTransport>(
    api: &ApiClient<T>,
    credentials: &Credentials,
) -> Result<AuthResult, ApiError> {
    require(&credentials.phone_number, "Phone number")?;
    require(&credentials.password, "Password")?;

    let request = Credentials {
        phone_number: normalize_phone(&credentials.phone_number, &api.config().country_calling_code)?,
        password: credentials.password.clone(),
    };

    log::info!("🔐 [AUTH] Logging in");
    let result: AuthResult = api
        .post(LOGIN_PATH, &request, None, Expect::Exactly(200), MSG_INVALID_CREDENTIALS)
        .await?;
    log::info!("✅ [AUTH] Login accepted");
    Ok(result)
}

/// Create an account. Succeeds only on HTTP 201 and returns the new session.
pub async fn register<T: HttpTransport>(
    api: &ApiClient<T>,
    form: &RegisterRequest,
) -> Result<AuthResult, ApiError> {
    require(&form.first_name, "First name")?;
    require(&form.last_name, "Last name")?;
    require(&form.email, "Email")?;
    require(&form.phone_number, "Phone number")?;
    require(&form.password, "Password")?;

    if !looks_like_email(&form.email) {
        return Err(ApiError::Invalid("Enter a valid email address".to_string()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Invalid(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let request = RegisterRequest {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone_number: normalize_phone(&form.phone_number, &api.config().country_calling_code)?,
        password: form.password.clone(),
    };

    log::info!("📝 [AUTH] Registering {}", request.email);
    let result: AuthResult = api
        .post(REGISTER_PATH, &request, None, Expect::Exactly(201), MSG_REGISTRATION_FAILED)
        .await?;
    log::info!("✅ [AUTH] Account created");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::ErrorKind;
    use crate::services::transport::mock::MockTransport;
    use crate::utils::constants::MSG_TRANSPORT_FAILURE;
    use futures::executor::block_on;
    use serde_json::json;

    fn api(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::with_transport(transport, AppConfig::default())
    }

    fn creds(phone: &str, password: &str) -> Credentials {
        Credentials {
            phone_number: phone.to_string(),
            password: password.to_string(),
        }
    }

    fn registration() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            email: "ada@example.org".into(),
            phone_number: "08031234567".into(),
            password: "correct-horse".into(),
        }
    }

    #[test]
    fn login_sends_canonical_phone() {
        let api = api(MockTransport::new().respond(200, json!({"access": "tok", "user": {}})));
        let result = block_on(login(&api, &creds("08031234567", "pw"))).unwrap();
        assert_eq!(result.access, "tok");

        let sent = api.transport().requests();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].url.ends_with(LOGIN_PATH));
        assert_eq!(sent[0].body, json!({"phone_number": "+2348031234567", "password": "pw"}));
    }

    #[test]
    fn login_surfaces_first_non_field_error() {
        let api = api(MockTransport::new().respond(401, json!({"non_field_errors": ["bad creds"]})));
        let err = block_on(login(&api, &creds("08031234567", "pw"))).unwrap_err();
        assert_eq!(err.user_message(), "bad creds");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn login_falls_back_to_generic_message() {
        let api = api(MockTransport::new().respond(401, json!({})));
        let err = block_on(login(&api, &creds("08031234567", "pw"))).unwrap_err();
        assert_eq!(err.user_message(), MSG_INVALID_CREDENTIALS);
    }

    #[test]
    fn login_reads_field_errors_past_envelope_scalars() {
        let body = json!({"status": "error", "code": 401, "phone_number": ["No account with this number"]});
        let api = api(MockTransport::new().respond(401, body));
        let err = block_on(login(&api, &creds("08031234567", "pw"))).unwrap_err();
        assert_eq!(err.user_message(), "No account with this number");
    }

    #[test]
    fn login_reads_envelope_message() {
        let api = api(
            MockTransport::new()
                .respond(403, json!({"success": false, "message": "Account locked"}))
                .respond(401, json!({"status": "error", "code": "invalid"})),
        );
        let err = block_on(login(&api, &creds("08031234567", "pw"))).unwrap_err();
        assert_eq!(err.user_message(), "Account locked");
        let err = block_on(login(&api, &creds("08031234567", "pw"))).unwrap_err();
        assert_eq!(err.user_message(), MSG_INVALID_CREDENTIALS);
    }

    #[test]
    fn network_failure_is_generic() {
        let api = api(MockTransport::new().fail("TypeError: Failed to fetch"));
        let err = block_on(login(&api, &creds("08031234567", "pw"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.user_message(), MSG_TRANSPORT_FAILURE);
        assert!(!err.user_message().contains("TypeError"));
    }

    #[test]
    fn empty_fields_never_hit_the_network() {
        let api = api(MockTransport::new());
        let err = block_on(login(&api, &creds("  ", "pw"))).unwrap_err();
        assert_eq!(err, ApiError::Invalid("Phone number is required".to_string()));
        let err = block_on(login(&api, &creds("08031234567", ""))).unwrap_err();
        assert_eq!(err, ApiError::Invalid("Password is required".to_string()));
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn register_requires_201() {
        let body = json!({"access": "tok", "refresh": "ref", "user": {"profile_set": false}});
        let api = api(MockTransport::new().respond(201, body.clone()).respond(200, body));
        assert!(block_on(register(&api, &registration())).is_ok());
        let err = block_on(register(&api, &registration())).unwrap_err();
        assert_eq!(err.user_message(), MSG_REGISTRATION_FAILED);
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn register_surfaces_field_error() {
        let api = api(MockTransport::new().respond(400, json!({"email": ["A user with this email already exists."]})));
        let err = block_on(register(&api, &registration())).unwrap_err();
        assert_eq!(err.user_message(), "A user with this email already exists.");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn register_validates_locally() {
        let api = api(MockTransport::new());
        let mut form = registration();
        form.email = "ada.example.org".into();
        assert!(matches!(block_on(register(&api, &form)), Err(ApiError::Invalid(_))));

        let mut form = registration();
        form.password = "short".into();
        assert!(matches!(block_on(register(&api, &form)), Err(ApiError::Invalid(_))));
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("@b"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a@b@c"));
    }
}
