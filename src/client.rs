//! PetFriends API client.
//!
//! One concrete client wrapping the six REST operations of the service.
//! Every operation is a single awaited HTTP call that normalizes whatever
//! comes back into an [`ApiResponse`]; the client never interprets remote
//! verdicts, enforces business rules, or retries. The test layer owns all
//! judgment about which statuses and body shapes are acceptable.

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::logging::log_debug;
use crate::response::ApiResponse;
use crate::types::{NewPet, PetFilter};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart;
use std::path::Path;

/// Client for the PetFriends pet-management service.
#[derive(Debug)]
pub struct PetFriends {
    client: reqwest::Client,
    config: ApiConfig,
}

impl PetFriends {
    /// Create a client for the configured service instance.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the base URL is empty or
    /// the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder().build().map_err(|e| {
            ClientError::configuration(format!("failed to build HTTP client: {e}"))
        })?;

        log_debug!(
            base_url = %config.base_url,
            "PetFriends client initialized"
        );

        Ok(Self { client, config })
    }

    /// The base URL this client points at.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Request an API key for the given account.
    ///
    /// On success the body carries a `key` field; bad credentials come back
    /// as a plain 403 envelope, not an error.
    pub async fn get_api_key(&self, email: &str, password: &str) -> ClientResult<ApiResponse> {
        log_debug!(
            operation = "get_api_key",
            email = %email,
            "Requesting API key"
        );

        let request = self
            .client
            .get(self.endpoint("api/key"))
            .headers(credential_headers(email, password)?);

        self.dispatch("get_api_key", request).await
    }

    /// List pets visible to the key, narrowed by `filter`.
    ///
    /// The 200 body carries a `pets` sequence, possibly empty.
    pub async fn get_list_of_pets(
        &self,
        auth_key: &str,
        filter: PetFilter,
    ) -> ClientResult<ApiResponse> {
        log_debug!(
            operation = "get_list_of_pets",
            filter = %filter,
            "Listing pets"
        );

        let request = self
            .client
            .get(self.endpoint("api/pets"))
            .headers(auth_headers(auth_key)?)
            .query(&[("filter", filter.as_str())]);

        self.dispatch("get_list_of_pets", request).await
    }

    /// Create a pet from the given fields, optionally attaching a photo.
    ///
    /// Absent [`NewPet`] fields are omitted from the form entirely; the
    /// defect scenarios depend on being able to send incomplete submissions.
    /// The photo file is read inside this call; no handle outlives it.
    pub async fn add_new_pet(
        &self,
        auth_key: &str,
        pet: &NewPet,
        photo: Option<&Path>,
    ) -> ClientResult<ApiResponse> {
        log_debug!(
            operation = "add_new_pet",
            name = pet.name.as_deref().unwrap_or(""),
            has_photo = photo.is_some(),
            "Creating pet"
        );

        let mut form = multipart::Form::new();
        for (field, value) in pet.form_fields() {
            form = form.text(field, value);
        }
        if let Some(path) = photo {
            form = form.part("pet_photo", photo_part(path).await?);
        }

        let request = self
            .client
            .post(self.endpoint("api/pets"))
            .headers(auth_headers(auth_key)?)
            .multipart(form);

        self.dispatch("add_new_pet", request).await
    }

    /// Attach a photo to an existing pet.
    ///
    /// The service only accepts photos for the caller's own pets, and
    /// answers 500 when handed a non-image document (a documented quirk the
    /// suite covers).
    pub async fn add_photo_of_pet(
        &self,
        auth_key: &str,
        pet_id: &str,
        photo: &Path,
    ) -> ClientResult<ApiResponse> {
        log_debug!(
            operation = "add_photo_of_pet",
            pet_id = %pet_id,
            photo = %photo.display(),
            "Attaching photo"
        );

        let form = multipart::Form::new().part("pet_photo", photo_part(photo).await?);

        let request = self
            .client
            .post(self.endpoint(&format!("api/pets/set_photo/{pet_id}")))
            .headers(auth_headers(auth_key)?)
            .multipart(form);

        self.dispatch("add_photo_of_pet", request).await
    }

    /// Replace a pet's name, type, and age.
    pub async fn update_pet_info(
        &self,
        auth_key: &str,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> ClientResult<ApiResponse> {
        log_debug!(
            operation = "update_pet_info",
            pet_id = %pet_id,
            name = %name,
            "Updating pet"
        );

        let request = self
            .client
            .put(self.endpoint(&format!("api/pets/{pet_id}")))
            .headers(auth_headers(auth_key)?)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.dispatch("update_pet_info", request).await
    }

    /// Delete a pet by id.
    pub async fn delete_pet(&self, auth_key: &str, pet_id: &str) -> ClientResult<ApiResponse> {
        log_debug!(
            operation = "delete_pet",
            pet_id = %pet_id,
            "Deleting pet"
        );

        let request = self
            .client
            .delete(self.endpoint(&format!("api/pets/{pet_id}")))
            .headers(auth_headers(auth_key)?);

        self.dispatch("delete_pet", request).await
    }

    /// Join an endpoint path onto the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a built request and normalize the outcome.
    ///
    /// Transport failures (no status received) are the only `Err` here;
    /// every HTTP status becomes an `Ok` envelope.
    async fn dispatch(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<ApiResponse> {
        let response = request.send().await.map_err(|e| {
            ClientError::transport(format!("{operation} request failed: {e}"), Some(Box::new(e)))
        })?;

        let envelope = ApiResponse::from_http(response).await?;

        log_debug!(
            operation = operation,
            status = %envelope.status,
            "PetFriends response received"
        );

        Ok(envelope)
    }
}

/// Headers for the authentication endpoint.
fn credential_headers(email: &str, password: &str) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("email", header_value("email", email)?);
    headers.insert("password", header_value("password", password)?);
    Ok(headers)
}

/// The `auth_key` header carried by every post-authentication call.
fn auth_headers(auth_key: &str) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("auth_key", header_value("auth_key", auth_key)?);
    Ok(headers)
}

fn header_value(name: &str, value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::configuration(format!("invalid {name} header value: {e}")))
}

/// Read a photo file and build its multipart part. The file is opened,
/// consumed, and closed within this call.
async fn photo_part(path: &Path) -> ClientResult<multipart::Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ClientError::photo_read(path, e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pet_photo".to_string());

    multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for_path(path))
        .map_err(|e| ClientError::configuration(format!("invalid photo MIME type: {e}")))
}

/// MIME guess from the file extension, case-insensitive (`dog.JPG` counts
/// as a JPEG). Unknown extensions fall back to an opaque byte stream and let
/// the service decide what it thinks of them.
pub(crate) fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
