//! Overlay re-projection: placement math and the per-frame loop.
//!
//! Embedded iframes and form controls cannot be drawn by the canvas
//! layer, so each open overlay re-projects its canvas-space rectangle to
//! screen coordinates once per animation frame, independent of the
//! reactive re-render cycle. The loop stops scheduling as soon as the
//! owning overlay unmounts, and the in-flight frame handle is cancelled
//! directly so no final invocation dangles.

#[cfg(test)]
#[path = "overlay_frame_test.rs"]
mod overlay_frame_test;

use canvas::camera::{Camera, Point};

use crate::state::scene::LiveRect;

/// A screen-space rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Project a world-space rectangle to the screen.
#[must_use]
pub fn project_rect(camera: &Camera, rect: &LiveRect) -> ScreenRect {
    let top_left = camera.world_to_screen(Point::new(rect.x, rect.y));
    ScreenRect {
        left: top_left.x,
        top: top_left.y,
        width: rect.width * camera.zoom,
        height: rect.height * camera.zoom,
    }
}

/// Clamp a rectangle into the surface so it never sits fully off-screen.
///
/// A rectangle larger than the surface pins to the top/left edge.
#[must_use]
pub fn clamp_to_surface(rect: ScreenRect, surface_width: f64, surface_height: f64) -> ScreenRect {
    ScreenRect {
        left: rect.left.clamp(0.0, (surface_width - rect.width).max(0.0)),
        top: rect.top.clamp(0.0, (surface_height - rect.height).max(0.0)),
        ..rect
    }
}

/// Place a side panel of `panel_width` x `panel_height` next to an
/// object's screen rectangle.
///
/// Prefers the right side with `margin` px of spacing; flips to the left
/// when the right placement would leave the surface, and clamps
/// vertically so the panel stays visible.
#[must_use]
pub fn place_side_panel(
    object: ScreenRect,
    panel_width: f64,
    panel_height: f64,
    surface_width: f64,
    surface_height: f64,
    margin: f64,
) -> (f64, f64) {
    let right = object.left + object.width + margin;
    let x = if right + panel_width <= surface_width {
        right
    } else {
        (object.left - margin - panel_width).max(0.0)
    };
    let y = object.top.clamp(0.0, (surface_height - panel_height).max(0.0));
    (x, y)
}

/// A running per-frame callback, cancelled on unmount.
#[cfg(feature = "hydrate")]
pub struct FrameLoop {
    alive: std::rc::Rc<std::cell::Cell<bool>>,
    handle: std::rc::Rc<std::cell::Cell<Option<i32>>>,
}

#[cfg(feature = "hydrate")]
impl FrameLoop {
    /// Stop scheduling and cancel the in-flight animation frame.
    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(handle) = self.handle.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Run `tick` once per animation frame until the loop is cancelled.
///
/// The callback keeps rescheduling itself through a self-referential
/// closure holder; the mounted flag is checked before every reschedule.
#[cfg(feature = "hydrate")]
pub fn start_frame_loop(mut tick: impl FnMut() + 'static) -> FrameLoop {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let alive = Rc::new(Cell::new(true));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    let alive_cb = Rc::clone(&alive);
    let handle_cb = Rc::clone(&handle);
    let holder_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !alive_cb.get() {
            holder_cb.borrow_mut().take();
            return;
        }
        tick();
        let rescheduled = web_sys::window().and_then(|window| {
            let holder_ref = holder_cb.borrow();
            let cb = holder_ref.as_ref()?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .ok()
        });
        match rescheduled {
            Some(next) => handle_cb.set(Some(next)),
            None => {
                alive_cb.set(false);
                holder_cb.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut(f64)>);

    let first = web_sys::window().and_then(|window| {
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    });
    match first {
        Some(id) => {
            handle.set(Some(id));
            *holder.borrow_mut() = Some(cb);
        }
        None => alive.set(false),
    }

    FrameLoop { alive, handle }
}
