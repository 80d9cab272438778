use crate::error::ApiError;
use crate::models::{AuthResult, PaymentRequest, PaymentResponse};
use crate::services::api_client::{ApiClient, Expect};
use crate::services::auth_service::{looks_like_email, require};
use crate::services::transport::HttpTransport;
use crate::utils::constants::{MSG_PAYMENT_FAILED, PAYMENT_PATH};
use crate::utils::phone::normalize_phone;

/// Start a payment and return the provider's checkout URL.
///
/// The caller performs the browser redirect; the provider sends the user back
/// to `payment_callback_url` afterwards.
pub async fn initiate_payment<T: HttpTransport>(
    api: &ApiClient<T>,
    session: &AuthResult,
    email: &str,
    phone_number: &str,
    amount: u64,
) -> Result<String, ApiError> {
    require(email, "Email")?;
    require(phone_number, "Phone number")?;
    if !looks_like_email(email) {
        return Err(ApiError::Invalid("Enter a valid email address".to_string()));
    }
    if amount == 0 {
        return Err(ApiError::Invalid("Amount must be greater than zero".to_string()));
    }

    let request = PaymentRequest {
        email: email.trim().to_string(),
        phone_number: normalize_phone(phone_number, &api.config().country_calling_code)?,
        amount,
        callback_url: api.config().payment_callback_url.clone(),
    };

    log::info!("💳 [PAYMENT] Initiating payment of {}", amount);
    let response: PaymentResponse = api
        .post(PAYMENT_PATH, &request, Some(session), Expect::AnySuccess, MSG_PAYMENT_FAILED)
        .await?;

    let url = response.data.authorization_url.trim().to_string();
    if url.is_empty() {
        return Err(ApiError::Transport("empty authorization_url".to_string()));
    }
    log::info!("✅ [PAYMENT] Checkout ready{}", response.data.reference.map(|r| format!(" ({})", r)).unwrap_or_default());
    Ok(url)
}
