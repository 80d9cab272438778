use crate::error::ApiError;
use crate::models::{AskRequest, AskResponse, AuthResult};
use crate::services::api_client::{ApiClient, Expect};
use crate::services::auth_service::require;
use crate::services::transport::HttpTransport;
use crate::utils::constants::{ASK_PATH, MSG_ASK_FAILED};

/// Send one question to the assistant and return its answer
pub async fn ask<T: HttpTransport>(
    api: &ApiClient<T>,
    session: &AuthResult,
    question: &str,
) -> Result<String, ApiError> {
    require(question, "Question")?;

    let request = AskRequest {
        question: question.trim().to_string(),
    };
    log::debug!("💬 [ASK] Sending question ({} chars)", request.question.len());
    let response: AskResponse = api
        .post(ASK_PATH, &request, Some(session), Expect::AnySuccess, MSG_ASK_FAILED)
        .await?;
    Ok(response.answer)
}
