//! The normalized envelope every client operation returns.
//!
//! The PetFriends service answers some requests with JSON and others (most
//! error pages, the 403 on bad credentials) with plain text. The envelope
//! captures both without deciding which one is "right": the status code and
//! body come back exactly as received, and the test layer does the judging.

use crate::error::{ClientError, ClientResult};
use crate::logging::log_debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

static NULL: Value = Value::Null;

/// Status code plus normalized body, as one value.
///
/// Any HTTP status is a valid envelope; a 403 or 500 from the service is
/// data to assert on, not an error.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Drain an HTTP response into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BodyRead`] if the connection dies while the
    /// body is being read. A well-formed response of any status succeeds.
    pub(crate) async fn from_http(response: reqwest::Response) -> ClientResult<Self> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::body_read(e.to_string()))?;

        Ok(Self {
            status,
            body: ResponseBody::from_text(text),
        })
    }

    /// Decode the JSON body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnexpectedBody`] when the body is plain text
    /// or when the JSON does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> ClientResult<T> {
        match &self.body {
            ResponseBody::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| ClientError::unexpected_body(format!("{} (status {})", e, self.status))),
            ResponseBody::Text(text) => Err(ClientError::unexpected_body(format!(
                "expected JSON, got text \"{}\" (status {})",
                preview(text),
                self.status
            ))),
        }
    }
}

/// Response body: a JSON tree when the service sent JSON, otherwise the raw
/// text.
#[derive(Debug, Clone)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Classify a raw body: anything `serde_json` accepts becomes [`Json`],
    /// the rest stays [`Text`].
    ///
    /// [`Json`]: ResponseBody::Json
    /// [`Text`]: ResponseBody::Text
    pub(crate) fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => {
                log_debug!(
                    body_preview = %preview(&text),
                    "Response body is not JSON, keeping raw text"
                );
                Self::Text(text)
            }
        }
    }

    /// The JSON tree, when there is one.
    pub fn json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, when the body was not JSON.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }

    /// Membership test: key membership for a JSON object body, substring
    /// match for a text body.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Json(value) => value
                .as_object()
                .is_some_and(|map| map.contains_key(needle)),
            Self::Text(text) => text.contains(needle),
        }
    }
}

/// Index into the JSON body by field name; yields `Null` for text bodies and
/// absent fields, so assertions read the way the scenarios are written:
/// `assert_eq!(created.body["name"], "Вася")`.
impl std::ops::Index<&str> for ResponseBody {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self {
            Self::Json(value) => &value[key],
            Self::Text(_) => &NULL,
        }
    }
}

/// First chunk of a body for log lines and error messages. Splits on chars,
/// not bytes; the service responds in Cyrillic-heavy text at times.
fn preview(text: &str) -> String {
    const LIMIT: usize = 120;
    if text.chars().count() <= LIMIT {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(LIMIT).collect();
        cut.push('…');
        cut
    }
}
