//! HTTP client wrapper for the PetFriends service.
//!
//! Translates high-level catalog operations into HTTP calls and returns a
//! uniform `(status, body)` result per call. All validation and authorization
//! decisions stay on the service side; the client performs no retries and
//! interprets nothing beyond decoding the documented payload shapes.

use crate::config::PetFriendsConfig;
use crate::error::{ApiError, ApiResult};
use crate::logging::log_debug;
use crate::types::{ApiKey, ApiResponse, Pet, PetFilter, PetList, ResponseBody};
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Async client for the PetFriends pet-catalog API.
///
/// Construct one explicitly per session and pass it by reference; there is
/// no global instance. Service-side rejections (400/403/404) come back as
/// [`ApiResponse`] values, not errors; only transport, configuration, and
/// decoding failures surface as [`ApiError`].
#[derive(Debug)]
pub struct PetFriends {
    http: reqwest::Client,
    config: PetFriendsConfig,
}

impl PetFriends {
    /// Create a new client instance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationError`] if the configuration is
    /// incomplete or the HTTP client cannot be initialized.
    pub fn new(config: PetFriendsConfig) -> ApiResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                ApiError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        log_debug!(
            base_url = %config.base_url,
            timeout_secs = config.request_timeout.as_secs(),
            "PetFriends client created"
        );

        Ok(Self { http, config })
    }

    /// Create a client using environment variables for configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationError`] if required environment
    /// variables are missing or invalid.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(PetFriendsConfig::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PetFriendsConfig {
        &self.config
    }

    /// Authenticate with the credentials from the configuration.
    ///
    /// Convenience over [`get_api_key`](Self::get_api_key) for session setup.
    pub async fn authenticate(&self) -> ApiResult<ApiResponse<ApiKey>> {
        self.get_api_key(
            &self.config.credentials.email,
            &self.config.credentials.password,
        )
        .await
    }

    /// Request an auth key for the given credentials.
    ///
    /// 200 with a `key` field on success; 403 and no key field on invalid
    /// credentials.
    pub async fn get_api_key(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<ApiResponse<ApiKey>> {
        let url = self.endpoint("/api/key");
        log_debug!(email = %email, "Requesting API key");

        let response = self
            .http
            .get(&url)
            .header("email", email)
            .header("password", password)
            .send()
            .await
            .map_err(|e| transport_error("GET /api/key", e))?;

        self.decode("GET /api/key", response).await
    }

    /// List pets, either the whole catalog or only the caller's own.
    ///
    /// An invalid auth key yields 403.
    pub async fn get_list_of_pets(
        &self,
        auth_key: &str,
        filter: PetFilter,
    ) -> ApiResult<ApiResponse<PetList>> {
        let url = self.endpoint("/api/pets");
        log_debug!(filter = filter.as_query_value(), "Listing pets");

        let response = self
            .http
            .get(&url)
            .header("auth_key", auth_key)
            .query(&[("filter", filter.as_query_value())])
            .send()
            .await
            .map_err(|e| transport_error("GET /api/pets", e))?;

        self.decode("GET /api/pets", response).await
    }

    /// Create a pet record without a photo.
    ///
    /// `age` is submitted verbatim as a form field so callers can exercise
    /// the service's validation with values outside any integer range; the
    /// service answers 400 for out-of-range or empty inputs.
    pub async fn add_new_pet_without_photo(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> ApiResult<ApiResponse<Pet>> {
        let url = self.endpoint("/api/create_pet_simple");
        log_debug!(name = %name, animal_type = %animal_type, age = %age, "Creating pet without photo");

        let response = self
            .http
            .post(&url)
            .header("auth_key", auth_key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)])
            .send()
            .await
            .map_err(|e| transport_error("POST /api/create_pet_simple", e))?;

        self.decode("POST /api/create_pet_simple", response).await
    }

    /// Create a pet record with a photo attachment (multipart upload).
    ///
    /// The success body carries a `pet_photo` reference.
    pub async fn add_new_pet(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: impl AsRef<Path>,
    ) -> ApiResult<ApiResponse<Pet>> {
        let url = self.endpoint("/api/pets");
        let form = Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", photo_part(photo_path.as_ref()).await?);

        log_debug!(name = %name, photo = %photo_path.as_ref().display(), "Creating pet with photo");

        let response = self
            .http
            .post(&url)
            .header("auth_key", auth_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error("POST /api/pets", e))?;

        self.decode("POST /api/pets", response).await
    }

    /// Attach or replace the photo on an existing pet record.
    pub async fn add_pet_photo(
        &self,
        auth_key: &str,
        pet_id: &str,
        photo_path: impl AsRef<Path>,
    ) -> ApiResult<ApiResponse<Pet>> {
        let url = self.endpoint(&format!("/api/pets/set_photo/{pet_id}"));
        let form = Form::new().part("pet_photo", photo_part(photo_path.as_ref()).await?);

        log_debug!(pet_id = %pet_id, photo = %photo_path.as_ref().display(), "Attaching pet photo");

        let response = self
            .http
            .post(&url)
            .header("auth_key", auth_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error("POST /api/pets/set_photo", e))?;

        self.decode("POST /api/pets/set_photo", response).await
    }

    /// Update the fields of an existing pet record. Last write wins on the
    /// submitted fields.
    ///
    /// An invalid auth key yields 403; a nonexistent id yields 404 or 400.
    pub async fn update_pet_info(
        &self,
        auth_key: &str,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> ApiResult<ApiResponse<Pet>> {
        let url = self.endpoint(&format!("/api/pets/{pet_id}"));
        log_debug!(pet_id = %pet_id, name = %name, "Updating pet info");

        let response = self
            .http
            .put(&url)
            .header("auth_key", auth_key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)])
            .send()
            .await
            .map_err(|e| transport_error("PUT /api/pets", e))?;

        self.decode("PUT /api/pets", response).await
    }

    /// Delete a pet record.
    ///
    /// The service sends an empty body on success, decoded here as JSON null.
    /// An invalid auth key yields 403; a nonexistent id yields 404 or 400.
    pub async fn delete_pet(
        &self,
        auth_key: &str,
        pet_id: &str,
    ) -> ApiResult<ApiResponse<serde_json::Value>> {
        let url = self.endpoint(&format!("/api/pets/{pet_id}"));
        log_debug!(pet_id = %pet_id, "Deleting pet");

        let response = self
            .http
            .delete(&url)
            .header("auth_key", auth_key)
            .send()
            .await
            .map_err(|e| transport_error("DELETE /api/pets", e))?;

        self.decode("DELETE /api/pets", response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Decode one reply into the uniform tagged result.
    ///
    /// Success statuses must carry the endpoint's documented JSON shape;
    /// failure statuses keep whatever text the service sent.
    async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> ApiResult<ApiResponse<T>> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        log_debug!(
            endpoint = endpoint,
            status = status.as_u16(),
            body_len = text.len(),
            "PetFriends response received"
        );

        let body = if status.is_success() {
            // Delete replies arrive with an empty body; decode that as null.
            let raw = if text.trim().is_empty() { "null" } else { &text };
            let value = serde_json::from_str(raw).map_err(|e| {
                ApiError::response_parsing_error(format!(
                    "{endpoint} returned {status} with undecodable body: {e}"
                ))
            })?;
            ResponseBody::Success(value)
        } else {
            ResponseBody::Failure {
                message: extract_message(&text),
            }
        };

        Ok(ApiResponse { status, body })
    }
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> ApiError {
    ApiError::request_failed(format!("{endpoint} failed: {err}"), Some(Box::new(err)))
}

/// Build the multipart file part for a photo upload.
async fn photo_part(path: &Path) -> ApiResult<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::attachment_error(path, e))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pet_photo".to_string());

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime(path))
        .map_err(|e| {
            ApiError::request_failed(
                format!("Invalid attachment MIME type: {e}"),
                Some(Box::new(e)),
            )
        })
}

/// MIME type for the upload, guessed from the file extension.
fn photo_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Pull readable error text out of a failure body.
///
/// The service answers rejections with either a JSON object carrying a
/// `message` field or a free-form text/HTML page.
fn extract_message(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return Some(message.to_string());
        }
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_guessed_from_extension() {
        assert_eq!(photo_mime(Path::new("cat.jpg")), "image/jpeg");
        assert_eq!(photo_mime(Path::new("cat.JPEG")), "image/jpeg");
        assert_eq!(photo_mime(Path::new("cat.png")), "image/png");
        assert_eq!(photo_mime(Path::new("cat")), "application/octet-stream");
    }

    #[test]
    fn message_extracted_from_json_body() {
        let text = r#"{"message": "Invalid auth_key"}"#;
        assert_eq!(extract_message(text), Some("Invalid auth_key".to_string()));
    }

    #[test]
    fn plain_text_body_passes_through() {
        assert_eq!(
            extract_message("  403 Forbidden  "),
            Some("403 Forbidden".to_string())
        );
        assert_eq!(extract_message("   "), None);
    }
}
