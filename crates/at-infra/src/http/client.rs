use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use at_core::ports::storage::keys;
use at_core::ports::{ApiError, KeyValueStorePort};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Static client settings taken from `AppConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

pub struct ApiClient {
    http: reqwest::Client,
    default_base_url: String,
    store: Arc<dyn KeyValueStorePort>,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, store: Arc<dyn KeyValueStorePort>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            default_base_url: config.base_url,
            store,
        })
    }

    /// Issue a request and return the parsed body.
    ///
    /// - `Authorization: Bearer <token>` is attached when a token is stored.
    /// - `body` is sent as JSON for every method except GET.
    /// - 304 resolves to `{}`.
    /// - Bodies that are not JSON come back as `Value::String`.
    /// - Non-2xx responses become `ApiError::Server` with the server's
    ///   `error` message or the status text.
    pub async fn request(
        &self,
        path: &str,
        body: Option<&Value>,
        method: Method,
    ) -> Result<Value, ApiError> {
        let url = self.url_for(path).await?;
        debug!(method = %method, path, "api request");

        let mut builder = self.http.request(method.clone(), url);
        if let Some(token) = self.bearer_token().await {
            builder = builder.bearer_auth(token);
        }
        if method != Method::GET {
            if let Some(body) = body {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method = %method, path, error = %e, "api request failed to send");
            ApiError::Network(e.to_string())
        })?;

        read_response(response, path).await
    }

    /// `request` followed by decoding into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
        method: Method,
    ) -> Result<T, ApiError> {
        let value = self.request(path, body, method).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }

    /// Multipart upload of one local file plus text fields.
    ///
    /// Returns the `url` field of the response.
    pub async fn upload(
        &self,
        path: &str,
        field: &str,
        file: &Path,
        text_fields: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| ApiError::Io(format!("{}: {e}", file.display())))?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mut part = Part::bytes(bytes).file_name(file_name);
        if let Some(mime) = mime_for(file) {
            part = part
                .mime_str(mime)
                .map_err(|e| ApiError::Io(e.to_string()))?;
        }

        let mut form = Form::new().part(field.to_string(), part);
        for (name, value) in text_fields {
            form = form.text(name.to_string(), value.to_string());
        }

        let url = self.url_for(path).await?;
        debug!(path, file = %file.display(), "api upload");

        let mut builder = self.http.post(url).multipart(form);
        if let Some(token) = self.bearer_token().await {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await.map_err(|e| {
            warn!(path, error = %e, "api upload failed to send");
            ApiError::Network(e.to_string())
        })?;

        let value = read_response(response, path).await?;
        value
            .get("url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ApiError::Decode(format!("{path}: upload response has no url")))
    }

    /// Stored override first, configured default second.
    async fn base_url(&self) -> String {
        match self.store.get(keys::API_BASE_URL).await {
            Ok(Some(url)) if !url.trim().is_empty() => url,
            Ok(_) => self.default_base_url.clone(),
            Err(err) => {
                warn!(error = %err, "failed to read base url override");
                self.default_base_url.clone()
            }
        }
    }

    async fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url().await;
        let joined = format!(
            "{}/{}",
            base.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ApiError::InvalidBaseUrl(format!("{base}: {e}")))
    }

    async fn bearer_token(&self) -> Option<String> {
        match self.store.get(keys::TOKEN).await {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                warn!(error = %err, "failed to read auth token");
                None
            }
        }
    }
}

async fn read_response(response: reqwest::Response, path: &str) -> Result<Value, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_MODIFIED {
        return Ok(json!({}));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let value = parse_body(&text);

    if !status.is_success() {
        let message = error_message(&value, status);
        warn!(path, status = status.as_u16(), message = %message, "api request rejected");
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(value)
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return json!({});
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn error_message(body: &Value, status: StatusCode) -> String {
    ["error", "message"]
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Request failed".to_string())
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "pdf" => Some("application/pdf"),
        "mp4" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        _ => None,
    }
}
