//! Wire DTOs specific to the network layer.
//!
//! The object and patch shapes live in the `canvas` crate; this module
//! adds the creation request and the push-channel frame.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::object::{CanvasObject, ObjectType};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/objects`: every object field except the
/// server-assigned identity and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjectRequest {
    pub object_type: ObjectType,
    pub content_url: String,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i32,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// One push-channel notification of a remote mutation.
///
/// JSON text frames tagged by `type`:
/// `{"type":"CREATE","object":{...}}`, `{"type":"UPDATE","object":{...}}`,
/// `{"type":"DELETE","objectId":42}`. Delivery is at-least-once with no
/// ordering guarantee relative to REST responses, so every application of
/// a frame must be idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChangeFrame {
    #[serde(rename = "CREATE")]
    Create { object: CanvasObject },
    #[serde(rename = "UPDATE")]
    Update { object: CanvasObject },
    #[serde(rename = "DELETE")]
    Delete {
        #[serde(rename = "objectId")]
        object_id: i64,
    },
}

impl ChangeFrame {
    /// Parse a raw text frame.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error for malformed or unknown-typed
    /// frames; callers log and drop these.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
