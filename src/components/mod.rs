//! UI components.
//!
//! ARCHITECTURE
//! ============
//! `CanvasHost` owns the interactive surface (pan/zoom/drag/resize);
//! `ObjectContent` renders one object's content by type; the overlay
//! components position themselves over the surface with per-frame
//! re-projection loops.

pub mod canvas_host;
pub mod drop_zone;
pub mod object_view;
pub mod text_editor;
pub mod toolbar;
pub mod video_overlay;
pub mod youtube_overlay;
