//! Image hosting client.
//!
//! Implements the `ImageStore` port from `soilcare-core` against an
//! HTTP upload endpoint: multipart POST with the file bytes plus a fixed
//! folder field, JSON response carrying the public URL.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use soilcare_core::storage::ImageStore;
use soilcare_types::error::StorageError;

/// Every upload lands under this logical folder on the host.
pub const UPLOAD_FOLDER: &str = "soilcare";

/// Image host client over a multipart upload endpoint.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the authorization header. No Debug derive, same pattern
/// as `OpenAiProvider`.
pub struct HttpImageStore {
    client: reqwest::Client,
    api_key: SecretString,
    upload_url: String,
}

impl HttpImageStore {
    /// Create a new store pointed at `upload_url`.
    pub fn new(api_key: SecretString, upload_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            upload_url,
        }
    }
}

/// Upload response from the image host.
///
/// Hosts differ on the field name: some return `secure_url`, some plain
/// `url`. Accept either, preferring the https one.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

impl UploadResponse {
    fn into_url(self) -> Result<String, StorageError> {
        self.secure_url
            .or(self.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| StorageError::InvalidResponse("no url in upload response".to_string()))
    }
}

impl ImageStore for HttpImageStore {
    async fn upload(&self, path: &Path, file_name: &str) -> Result<String, StorageError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| StorageError::Upload(format!("failed to read spooled file: {e}")))?;

        let form = multipart::Form::new()
            .text("folder", UPLOAD_FOLDER)
            .part(
                "file",
                multipart::Part::bytes(bytes).file_name(file_name.to_string()),
            );

        let response = self
            .client
            .post(&self.upload_url)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::Upload(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_body, "image host error response");
            return Err(match status.as_u16() {
                401 | 403 => StorageError::AuthenticationFailed,
                _ => StorageError::Upload(format!("HTTP {status}: {error_body}")),
            });
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(format!("failed to parse response: {e}")))?;

        upload.into_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_url_preferred() {
        let resp: UploadResponse = serde_json::from_str(
            r#"{"secure_url": "https://img.example.com/a.jpg", "url": "http://img.example.com/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(resp.into_url().unwrap(), "https://img.example.com/a.jpg");
    }

    #[test]
    fn test_plain_url_fallback() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"url": "https://cdn.example.com/b.png"}"#).unwrap();
        assert_eq!(resp.into_url().unwrap(), "https://cdn.example.com/b.png");
    }

    #[test]
    fn test_missing_url_is_invalid_response() {
        let resp: UploadResponse = serde_json::from_str(r#"{"public_id": "abc"}"#).unwrap();
        assert!(matches!(
            resp.into_url(),
            Err(StorageError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_url_is_invalid_response() {
        let resp: UploadResponse = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(matches!(
            resp.into_url(),
            Err(StorageError::InvalidResponse(_))
        ));
    }
}
