//! HTTP client for the tenant REST backend.
//!
//! A thin wrapper over [`reqwest::Client`]: one base URL, optional bearer
//! credential, JSON and multipart helpers. Response decoding is the single
//! place where the content-type guard lives — a success response that is
//! not JSON is reported as [`ApiError::Gateway`] instead of being fed to
//! the deserializer, so an intermediary's HTML error page can never be
//! mistaken for data.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use store::SessionStore;

use crate::error::ApiError;

/// Default backend host; override at build time via `CHALLAN_API_URL`.
const DEFAULT_BASE_URL: &str = "http://api.automan.solutions";

/// The configured backend base URL.
pub fn base_url() -> &'static str {
    option_env!("CHALLAN_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Resolve a server asset path (`pdf_url`, `qr_code_url`, `logo_url`)
/// against the backend host. Absolute URLs pass through untouched.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", base_url(), path)
    }
}

/// REST client: base URL plus optional bearer credential.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url().to_string(),
            token,
        }
    }

    /// Client carrying whatever bearer token is currently persisted.
    pub fn from_store(store: &impl SessionStore) -> Self {
        Self::new(store.get(store::session::TOKEN_KEY))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        req
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode_json(self.request(Method::GET, path).send().await?).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        decode_json(self.request(Method::POST, path).json(body).send().await?).await
    }

    /// POST with no body, decoding the JSON response.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode_json(self.request(Method::POST, path).send().await?).await
    }

    /// POST with a JSON body, caring only about the status.
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        expect_success(self.request(Method::POST, path).json(body).send().await?).await
    }

    /// PUT with a JSON body, caring only about the status.
    pub async fn put_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        expect_success(self.request(Method::PUT, path).json(body).send().await?).await
    }

    /// Bodiless PUT, caring only about the status.
    pub async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        expect_success(self.request(Method::PUT, path).send().await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        expect_success(self.request(Method::DELETE, path).send().await?).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        decode_json(
            self.request(Method::POST, path)
                .multipart(form)
                .send()
                .await?,
        )
        .await
    }

    /// Multipart POST, caring only about the status.
    pub async fn post_multipart_unit(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), ApiError> {
        expect_success(
            self.request(Method::POST, path)
                .multipart(form)
                .send()
                .await?,
        )
        .await
    }

    /// Multipart PUT, caring only about the status.
    pub async fn put_multipart_unit(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), ApiError> {
        expect_success(
            self.request(Method::PUT, path)
                .multipart(form)
                .send()
                .await?,
        )
        .await
    }
}

/// Decode a JSON response, guarding status and content-type.
async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = checked(resp).await?;
    let is_json = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Err(ApiError::Gateway);
    }
    resp.json().await.map_err(|err| ApiError::Decode(err.to_string()))
}

/// Check the status and drop the body.
async fn expect_success(resp: reqwest::Response) -> Result<(), ApiError> {
    checked(resp).await.map(|_| ())
}

async fn checked(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        code: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull the backend's `{"error": "..."}` message out of an error body,
/// falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_resolves_relative_paths() {
        assert_eq!(
            asset_url("/files/ch-1.pdf"),
            format!("{}/files/ch-1.pdf", base_url())
        );
        assert_eq!(
            asset_url("https://cdn.example.com/x.pdf"),
            "https://cdn.example.com/x.pdf"
        );
    }

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(error_message(r#"{"error":"bad credentials"}"#), "bad credentials");
        assert_eq!(error_message("plain text"), "plain text");
        assert_eq!(error_message(r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
    }
}
