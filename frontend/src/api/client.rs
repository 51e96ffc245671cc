use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    api::types::*,
    config,
    utils::{location, storage},
};

pub const TOKEN_KEY: &str = "token";

/// Whether a call carries the stored session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Public,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        access: Access,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let body = self
            .send(Method::GET, path, None::<&()>, access, fallback)
            .await?;
        decode_payload(body, fallback)
    }

    /// Lists tolerate a `null` payload and treat it as empty, as is an
    /// object body with no `data` key.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        access: Access,
        fallback: &str,
    ) -> Result<Vec<T>, ApiError> {
        let body = self
            .send(Method::GET, path, None::<&()>, access, fallback)
            .await?;
        if is_dataless_envelope(&body) {
            return Ok(Vec::new());
        }
        decode_payload::<Option<OneOrMany<T>>>(body, fallback)
            .map(|list| list.map(OneOrMany::into_vec).unwrap_or_default())
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        access: Access,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        self.send(method, path, body, access, fallback).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        access: Access,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        let mut builder = self.client.request(method.clone(), &url);
        if access == Access::Authenticated {
            if let Some(token) = stored_token() {
                // The backend expects the raw token, without a `Bearer` prefix.
                builder = builder.header(reqwest::header::AUTHORIZATION, token);
            }
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let (status, text) = self.execute(builder).await.map_err(|err| {
            log::error!("{} {} failed: {}", method, path, err);
            ApiError::request_failed(fallback)
        })?;
        let parsed = parse_body(&text);

        if status.is_success() {
            return Ok(parsed);
        }

        let message = extract_error_message(&parsed).unwrap_or_else(|| fallback.to_string());
        log::warn!("{} {} returned {}: {}", method, path, status, message);
        if status == StatusCode::UNAUTHORIZED {
            if access == Access::Authenticated {
                handle_unauthorized();
            }
            return Err(ApiError::unauthorized(message));
        }
        Err(ApiError::http(status.as_u16(), message))
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        if let Some(mocked) = mock_response(&request) {
            return mocked;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok((status, text))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(list) => list,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Tries `body.data.data`, then `body.data`, then `body` itself.
pub fn decode_payload<T: DeserializeOwned>(body: Value, fallback: &str) -> Result<T, ApiError> {
    let nested = body.get("data").and_then(|data| data.get("data"));
    let outer = body.get("data");
    let mut last_error = None;
    for candidate in [nested, outer, Some(&body)].into_iter().flatten() {
        match T::deserialize(candidate) {
            Ok(value) => return Ok(value),
            Err(err) => last_error = Some(err),
        }
    }
    if let Some(err) = last_error {
        log::error!("unexpected response shape ({}): {}", fallback, err);
    }
    Err(ApiError::unknown(fallback))
}

fn is_dataless_envelope(body: &Value) -> bool {
    body.as_object().is_some_and(|object| !object.contains_key("data"))
}

/// Best-effort message from an error body: `message`, `error`,
/// `data.message`, then the first entry of `errors`.
pub fn extract_error_message(body: &Value) -> Option<String> {
    fn text(value: Option<&Value>) -> Option<String> {
        value
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    if let Value::String(raw) = body {
        let trimmed = raw.trim();
        return (!trimmed.is_empty() && trimmed.len() < 200).then(|| trimmed.to_string());
    }

    text(body.get("message"))
        .or_else(|| text(body.get("error")))
        .or_else(|| text(body.get("data").and_then(|data| data.get("message"))))
        .or_else(|| {
            let first = body.get("errors")?.as_array()?.first()?;
            text(Some(first))
                .or_else(|| text(first.get("msg")))
                .or_else(|| text(first.get("message")))
        })
}

pub fn stored_token() -> Option<String> {
    storage::get_item(TOKEN_KEY).filter(|token| !token.trim().is_empty())
}

pub fn persist_token(token: &str) -> Result<(), ApiError> {
    storage::set_item(TOKEN_KEY, token).map_err(ApiError::unknown)
}

pub fn clear_session() {
    storage::remove_item(TOKEN_KEY);
}

fn handle_unauthorized() {
    clear_session();
    if location::current_pathname().as_deref() == Some("/login") {
        return;
    }
    location::navigate("/login");
}

/// `exp` claim of a JWT, if the token is one.
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&decoded).ok()?;
    claims.get("exp")?.as_i64()
}

/// Tokens without a readable `exp` are never treated as expired here.
pub fn is_token_expired(token: &str, now_secs: i64) -> bool {
    token_expiry(token)
        .map(|exp| exp <= now_secs)
        .unwrap_or(false)
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mock_response(_request: &reqwest::Request) -> Option<Result<(StatusCode, String), ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_response(request: &reqwest::Request) -> Option<Result<(StatusCode, String), ApiError>> {
    let responder = mock_registry::find_mock(request.url().as_str())?;
    Some(responder.respond(request).map(|response| {
        (
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            response.body.to_string(),
        )
    }))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use super::ApiError;
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Debug, Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self { status, body }
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        if let Ok(mut mocks) = registry().lock() {
            mocks.retain(|(base, _)| *base != base_url);
            mocks.push((base_url, responder));
        }
    }

    pub(super) fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().ok()?;
        mocks
            .iter()
            .filter(|(base, _)| {
                url.strip_prefix(base.as_str())
                    .map(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
                    .unwrap_or(false)
            })
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    }
}
