//! Normalized result of every API call.
//!
//! Each request yields an [`ApiResponse`]: the status code exactly as the
//! server sent it, and a body that is either parsed JSON or, when the payload
//! is not JSON (HTML error pages, empty bodies), the raw text. A 4xx or 5xx
//! status is a normal result here, never an error.

use crate::error::ClientError;
use crate::model::{AuthKey, Pet, PetList};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

/// Response payload: structured when it parses, raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parse `raw` as JSON, falling back to the text itself.
    pub fn from_text(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Self::Json(value),
            Err(e) => {
                trace!(error = %e, len = raw.len(), "response body is not JSON, keeping raw text");
                Self::Text(raw)
            }
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// Top-level field of a JSON object body.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_json().and_then(|v| v.get(field))
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Top-level string field of a JSON object body.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Substring search over the raw text, or over the serialized JSON.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Self::Text(s) => s.contains(needle),
            Self::Json(v) => match v {
                Value::String(s) => s.contains(needle),
                other => other.to_string().contains(needle),
            },
        }
    }

    /// Deserialize a JSON body into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        match self {
            Self::Json(v) => serde_json::from_value(v.clone())
                .map_err(|e| ClientError::unexpected_body(e.to_string())),
            Self::Text(s) => Err(ClientError::unexpected_body(format!(
                "expected JSON, got text: {}",
                truncate(s, 200)
            ))),
        }
    }
}

/// `(status, body)` pair returned by every client method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, content_type: Option<String>, body: ResponseBody) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True for text bodies the server labelled, or shaped, as HTML.
    ///
    /// The PetFriends server answers most errors with an HTML page, so a
    /// `Text` body alone does not mean anything went wrong.
    pub fn looks_like_html(&self) -> bool {
        let Some(text) = self.body.as_text() else {
            return false;
        };
        if let Some(ct) = &self.content_type {
            if ct.to_ascii_lowercase().starts_with("text/html") {
                return true;
            }
        }
        let head = text.trim_start().get(..15).unwrap_or(text.trim_start());
        let head = head.to_ascii_lowercase();
        head.starts_with("<!doctype html") || head.starts_with("<html")
    }

    /// Key from a successful `obtain_key` response.
    pub fn auth_key(&self) -> Result<AuthKey, ClientError> {
        self.body.parse()
    }

    /// Pet collection from a `list_pets` response.
    pub fn pets(&self) -> Result<PetList, ClientError> {
        self.body.parse()
    }

    /// Single pet from a create, update or photo response.
    pub fn pet(&self) -> Result<Pet, ClientError> {
        self.body.parse()
    }

    pub fn into_parts(self) -> (u16, ResponseBody) {
        (self.status, self.body)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}…", head)
    }
}
