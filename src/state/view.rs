//! View state: camera transform and rendering surface dimensions.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use canvas::camera::Camera;
use canvas::viewport::{ViewportBounds, visible_bounds};

/// Camera plus surface size, owned by the interaction layer.
///
/// `refresh_epoch` backs the debounced viewport refetch: every camera
/// change bumps it, and a scheduled refetch only fires if its epoch is
/// still current when the debounce timer elapses (last-scheduled-wins).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
    pub camera: Camera,
    pub surface_width: f64,
    pub surface_height: f64,
    pub refresh_epoch: u64,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rendering surface size (CSS pixels).
    pub fn set_surface(&mut self, width: f64, height: f64) {
        self.surface_width = width.max(1.0);
        self.surface_height = height.max(1.0);
    }

    /// Invalidate any scheduled refetch and return the new epoch.
    pub fn bump_refresh_epoch(&mut self) -> u64 {
        self.refresh_epoch = self.refresh_epoch.wrapping_add(1);
        self.refresh_epoch
    }

    /// The world rectangle currently visible.
    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        visible_bounds(&self.camera, self.surface_width, self.surface_height)
    }
}
