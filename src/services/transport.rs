// ============================================================================
// TRANSPORT - Raw HTTP seam (browser fetch in production, scripted in tests)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde_json::Value;

use crate::config::AppConfig;

/// A JSON `POST` ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl JsonRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and undecoded body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request, no retries. `Err` carries a diagnostic for the logs.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_json(&self, request: JsonRequest) -> Result<RawResponse, String>;
}

/// `fetch` through gloo-net, aborted after `timeout_ms`
#[derive(Debug, Clone)]
pub struct GlooTransport {
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.timeout_millis())
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn post_json(&self, request: JsonRequest) -> Result<RawResponse, String> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| format!("AbortController unavailable: {:?}", e))?;
        let signal = controller.signal();

        // Dropping the timeout at the end of this call cancels it
        let _timeout = {
            let controller = controller.clone();
            let url = request.url.clone();
            Timeout::new(self.timeout_ms, move || {
                log::warn!("⏱️ [HTTP] Request timed out: {}", url);
                controller.abort();
            })
        };

        let mut builder = Request::post(&request.url).abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .json(&request.body)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Read error: {}", e))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays scripted responses in order and records every request
    #[derive(Default)]
    pub struct MockTransport {
        responses: RefCell<VecDeque<Result<RawResponse, String>>>,
        requests: RefCell<Vec<JsonRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: Value) -> Self {
            self.respond_raw(status, &body.to_string())
        }

        pub fn respond_raw(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, detail: &str) -> Self {
            self.responses.borrow_mut().push_back(Err(detail.to_string()));
            self
        }

        pub fn requests(&self) -> Vec<JsonRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn post_json(&self, request: JsonRequest) -> Result<RawResponse, String> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted response".to_string()))
        }
    }
}
