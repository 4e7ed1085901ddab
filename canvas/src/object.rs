//! Object model: typed canvas objects and their sparse update patch.
//!
//! These are the wire types as well as the domain types: the REST API and
//! the push channel both speak camelCase JSON, so the serde renames here
//! define the contract. Data flows in from the network (deserialization)
//! and from the gesture layer (mutation intents as [`ObjectPatch`]).

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EMBED_MAX_HEIGHT, EMBED_MAX_WIDTH, MIN_OBJECT_SIZE};

/// The kind of a canvas object. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    /// Uploaded raster image, `content_url` points at the stored file.
    Image,
    /// Text block, `content_url` holds the literal text body.
    Text,
    /// Embedded YouTube video, `content_url` holds the video URL.
    Youtube,
    /// Uploaded video file, `content_url` points at the stored file.
    Video,
}

impl ObjectType {
    /// Whether this type is rendered through an embedded player overlay.
    #[must_use]
    pub fn is_embedded(self) -> bool {
        matches!(self, Self::Youtube | Self::Video)
    }

    /// Whether the text-styling attributes are meaningful for this type.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

/// A canvas object as stored in the cache and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasObject {
    /// Server-assigned identity, immutable once created.
    pub id: i64,
    /// Shape of the content. Immutable after creation.
    pub object_type: ObjectType,
    /// Image/video URL or literal text body, depending on type.
    pub content_url: String,
    /// Left edge, canvas space.
    pub position_x: f64,
    /// Top edge, canvas space.
    pub position_y: f64,
    /// Width in canvas units, >= 5 at all times.
    pub width: f64,
    /// Height in canvas units, >= 5 at all times.
    pub height: f64,
    /// Stacking order; higher draws above lower.
    pub z_index: i32,
    /// Owning user.
    pub user_id: i64,
    /// Server creation timestamp, immutable.
    pub created_at: Option<String>,
    /// Font size in px. Only meaningful when `object_type` is TEXT.
    pub font_size: Option<i32>,
    /// Font weight keyword. Only meaningful when `object_type` is TEXT.
    pub font_weight: Option<String>,
    /// Text color hex string. Only meaningful when `object_type` is TEXT.
    pub text_color: Option<String>,
}

/// Sparse update for a canvas object. Only present fields are sent.
///
/// Covers exactly the mutable fields: position, size, stacking, content,
/// and text styling. Identity, type, owner, and creation time never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl ObjectPatch {
    /// Patch carrying a new position.
    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self { position_x: Some(x), position_y: Some(y), ..Self::default() }
    }

    /// Patch carrying a new size.
    #[must_use]
    pub fn resized(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height), ..Self::default() }
    }

    /// Whether any size carried by this patch respects the minimum object
    /// size. Patches without size fields trivially pass.
    #[must_use]
    pub fn respects_size_floor(&self) -> bool {
        self.width.is_none_or(|w| w >= MIN_OBJECT_SIZE)
            && self.height.is_none_or(|h| h >= MIN_OBJECT_SIZE)
    }
}

/// Shape a candidate resize into an allowed size.
///
/// Candidates are floor-clamped at [`MIN_OBJECT_SIZE`] on both axes.
/// Embedded-video objects additionally may not grow past
/// [`EMBED_MAX_WIDTH`] x [`EMBED_MAX_HEIGHT`]; a candidate past that bound
/// is rejected wholesale and the previous size is retained.
#[must_use]
pub fn apply_resize(
    object_type: ObjectType,
    prev_width: f64,
    prev_height: f64,
    cand_width: f64,
    cand_height: f64,
) -> (f64, f64) {
    let width = cand_width.max(MIN_OBJECT_SIZE);
    let height = cand_height.max(MIN_OBJECT_SIZE);
    if object_type.is_embedded() && (width > EMBED_MAX_WIDTH || height > EMBED_MAX_HEIGHT) {
        return (prev_width, prev_height);
    }
    (width, height)
}
