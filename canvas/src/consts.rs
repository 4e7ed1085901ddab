//! Shared numeric constants for the canvas crate.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 5.0;

/// Multiplicative step applied per wheel tick when zooming.
pub const ZOOM_STEP: f64 = 1.05;

// ── Object sizing ───────────────────────────────────────────────

/// Minimum width/height of any object, in canvas units.
pub const MIN_OBJECT_SIZE: f64 = 5.0;

/// Maximum width an embedded-video object may be resized to.
pub const EMBED_MAX_WIDTH: f64 = 1920.0;

/// Maximum height an embedded-video object may be resized to.
pub const EMBED_MAX_HEIGHT: f64 = 1080.0;
