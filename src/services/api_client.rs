// ============================================================================
// API CLIENT - HTTP only, stateless
// ============================================================================
// Builds requests (headers, tenant, bearer) and decodes every response once
// into `Result<T, ApiError>`. No business logic lives here.
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{AppConfig, CONFIG};
use crate::error::ApiError;
use crate::models::AuthResult;
use crate::services::transport::{GlooTransport, HttpTransport, JsonRequest, RawResponse};
use crate::utils::constants::TENANT_HEADER;

/// Which statuses count as success for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Exactly(u16),
    AnySuccess,
}

impl Expect {
    fn accepts(self, response: &RawResponse) -> bool {
        match self {
            Expect::Exactly(code) => response.status == code,
            Expect::AnySuccess => response.is_success(),
        }
    }
}

pub struct ApiClient<T = GlooTransport> {
    transport: T,
    config: AppConfig,
}

impl ApiClient<GlooTransport> {
    pub fn new() -> Self {
        Self::with_transport(GlooTransport::from_config(&CONFIG), CONFIG.clone())
    }
}

impl Default for ApiClient<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(transport: T, config: AppConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn headers(&self, session: Option<&AuthResult>) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if let Some(domain) = &self.config.tenant_domain {
            headers.push((TENANT_HEADER.to_string(), domain.clone()));
        }
        if let Some(session) = session {
            headers.push(("Authorization".to_string(), session.bearer()));
        }
        headers
    }

    /// POST `body` to `path` and decode the reply.
    ///
    /// A status outside `expect` becomes `ApiError::Rejected` carrying the first
    /// server message, or `fallback` when the body holds none.
    pub async fn post<B, R>(
        &self,
        path: &str,
        body: &B,
        session: Option<&AuthResult>,
        expect: Expect,
        fallback: &str,
    ) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Transport(format!("Serialization error: {}", e)))?;

        log::debug!("📡 [API] POST {}", url);

        let response = self
            .transport
            .post_json(JsonRequest {
                url: url.clone(),
                headers: self.headers(session),
                body,
            })
            .await
            .map_err(|detail| {
                log::error!("❌ [API] {} failed: {}", url, detail);
                ApiError::Transport(detail)
            })?;

        decode(&url, response, expect, fallback)
    }
}

fn decode<R: DeserializeOwned>(
    url: &str,
    response: RawResponse,
    expect: Expect,
    fallback: &str,
) -> Result<R, ApiError> {
    if expect.accepts(&response) {
        return serde_json::from_str(&response.body).map_err(|e| {
            log::error!("❌ [API] {} returned an unreadable body: {}", url, e);
            ApiError::Transport(format!("Parse error: {}", e))
        });
    }

    // A success body is never an error description
    let message = if response.is_success() {
        fallback.to_string()
    } else {
        first_error_message(&response.body).unwrap_or_else(|| fallback.to_string())
    };
    log::warn!("⚠️ [API] {} answered HTTP {}: {}", url, response.status, message);
    Err(ApiError::Rejected {
        status: response.status,
        message,
    })
}

/// Keys whose plain string value is a message meant for the user
const MESSAGE_KEYS: [&str; 3] = ["detail", "message", "error"];

/// First human-readable message of an error body.
///
/// `non_field_errors` wins, then `detail`/`message`/`error`, then the first
/// field error list in server order (nested serializers included). Other
/// scalar values (`status`, `code`, tokens) are never shown.
pub fn first_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let fields = value.as_object()?;

    if let Some(message) = fields.get("non_field_errors").and_then(first_listed) {
        return Some(message);
    }
    if let Some(message) = MESSAGE_KEYS
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str).and_then(non_empty))
    {
        return Some(message);
    }
    field_errors(&value)
}

fn non_empty(text: &str) -> Option<String> {
    Some(text.trim().to_string()).filter(|s| !s.is_empty())
}

/// `["msg", ...]` or a bare `"msg"`
fn first_listed(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Array(items) => items.iter().find_map(|item| item.as_str().and_then(non_empty)),
        _ => None,
    }
}

fn field_errors(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(|item| item.as_str().and_then(non_empty)),
        Value::Object(fields) => fields.values().find_map(|field| match field {
            Value::Array(_) | Value::Object(_) => field_errors(field),
            _ => None,
        }),
        _ => None,
    }
}
