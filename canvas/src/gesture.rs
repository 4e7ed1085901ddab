//! Pointer gesture state machine: pan, object drag, object resize.
//!
//! The active gesture is tracked between pointer-down and pointer-up and
//! carries all context needed to compute incremental deltas and emit a
//! final mutation intent on release. The host maps DOM pointer events into
//! [`Gesture::begin_pan`] / [`Gesture::begin_drag`] /
//! [`Gesture::begin_resize`], feeds movement through
//! [`Gesture::pointer_moved`], and turns the [`GestureCommit`] returned by
//! [`Gesture::finish`] into a repository update intent.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::camera::{Camera, Point};
use crate::object::{ObjectType, apply_resize};

/// The active pointer gesture, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging the background to pan the camera.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// Moving an existing object across the canvas.
    Dragging {
        /// Id of the object being dragged.
        id: i64,
        /// World-space offset from the pointer to the object's top-left,
        /// captured at pointer-down so the object doesn't jump under the
        /// cursor.
        grab_offset: Point,
        /// Top-left at pointer-down; a gesture that never moves commits
        /// nothing.
        orig_x: f64,
        /// Top-left at pointer-down.
        orig_y: f64,
        /// Current top-left, world space.
        x: f64,
        /// Current top-left, world space.
        y: f64,
        /// Object width, constant during a move.
        width: f64,
        /// Object height, constant during a move.
        height: f64,
    },
    /// Resizing an object from its bottom-right handle.
    Resizing {
        /// Id of the object being resized.
        id: i64,
        /// Object type; embedded-video types carry a growth cap.
        object_type: ObjectType,
        /// World-space top-left of the object; fixed during the resize.
        origin: Point,
        /// Size at pointer-down; an unchanged size commits nothing.
        orig_width: f64,
        /// Size at pointer-down.
        orig_height: f64,
        /// Current width, already shaped to the allowed range.
        width: f64,
        /// Current height, already shaped to the allowed range.
        height: f64,
    },
}

/// Per-move outcome of the active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureMotion {
    /// Nothing to do (idle, or movement produced no change).
    None,
    /// The camera pan changed; viewport-dependent state should refresh.
    CameraPanned,
    /// An object's live rectangle changed; overlays and the renderer
    /// should show this rect instead of the committed cache value.
    ObjectPreview { id: i64, x: f64, y: f64, width: f64, height: f64 },
}

/// Final intent emitted when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureCommit {
    /// Nothing to commit.
    None,
    /// Background pan ended; no object mutation.
    PanEnded,
    /// Commit the object's new position.
    Move { id: i64, x: f64, y: f64 },
    /// Commit the object's new size.
    Resize { id: i64, width: f64, height: f64 },
}

impl Gesture {
    /// Start panning the background from `screen`.
    pub fn begin_pan(&mut self, screen: Point) {
        *self = Self::Panning { last_screen: screen };
    }

    /// Start dragging object `id` whose top-left is `(x, y)` with the
    /// pointer at `pointer_world`.
    pub fn begin_drag(&mut self, id: i64, pointer_world: Point, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::Dragging {
            id,
            grab_offset: Point::new(pointer_world.x - x, pointer_world.y - y),
            orig_x: x,
            orig_y: y,
            x,
            y,
            width,
            height,
        };
    }

    /// Start resizing object `id` from its bottom-right handle.
    pub fn begin_resize(
        &mut self,
        id: i64,
        object_type: ObjectType,
        origin: Point,
        width: f64,
        height: f64,
    ) {
        *self = Self::Resizing {
            id,
            object_type,
            origin,
            orig_width: width,
            orig_height: height,
            width,
            height,
        };
    }

    /// Advance the gesture for a pointer move at `screen`.
    ///
    /// Panning mutates the camera directly; drag and resize convert the
    /// pointer through the camera and update the live rectangle.
    pub fn pointer_moved(&mut self, camera: &mut Camera, screen: Point) -> GestureMotion {
        match self {
            Self::Idle => GestureMotion::None,
            Self::Panning { last_screen } => {
                let dx = screen.x - last_screen.x;
                let dy = screen.y - last_screen.y;
                *last_screen = screen;
                if dx == 0.0 && dy == 0.0 {
                    return GestureMotion::None;
                }
                camera.pan_by(dx, dy);
                GestureMotion::CameraPanned
            }
            Self::Dragging { id, grab_offset, x, y, width, height, .. } => {
                let world = camera.screen_to_world(screen);
                *x = world.x - grab_offset.x;
                *y = world.y - grab_offset.y;
                GestureMotion::ObjectPreview { id: *id, x: *x, y: *y, width: *width, height: *height }
            }
            Self::Resizing { id, object_type, origin, width, height, .. } => {
                let world = camera.screen_to_world(screen);
                let (w, h) = apply_resize(
                    *object_type,
                    *width,
                    *height,
                    world.x - origin.x,
                    world.y - origin.y,
                );
                *width = w;
                *height = h;
                GestureMotion::ObjectPreview {
                    id: *id,
                    x: origin.x,
                    y: origin.y,
                    width: w,
                    height: h,
                }
            }
        }
    }

    /// End the gesture and return the mutation intent, if any.
    ///
    /// A drag or resize that never changed anything commits nothing, so a
    /// plain click-to-select does not emit a spurious update intent.
    pub fn finish(&mut self) -> GestureCommit {
        let commit = match *self {
            Self::Idle => GestureCommit::None,
            Self::Panning { .. } => GestureCommit::PanEnded,
            Self::Dragging { id, orig_x, orig_y, x, y, .. } => {
                if x == orig_x && y == orig_y {
                    GestureCommit::None
                } else {
                    GestureCommit::Move { id, x, y }
                }
            }
            Self::Resizing { id, orig_width, orig_height, width, height, .. } => {
                if width == orig_width && height == orig_height {
                    GestureCommit::None
                } else {
                    GestureCommit::Resize { id, width, height }
                }
            }
        };
        *self = Self::Idle;
        commit
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Id of the object an active drag/resize targets, if any.
    #[must_use]
    pub fn target_id(&self) -> Option<i64> {
        match self {
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
            _ => None,
        }
    }
}
