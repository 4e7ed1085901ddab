use super::*;

#[test]
fn default_view_has_identity_camera() {
    let view = ViewState::new();
    assert_eq!(view.camera, Camera::default());
    assert_eq!(view.refresh_epoch, 0);
}

#[test]
fn set_surface_floors_at_one_pixel() {
    let mut view = ViewState::new();
    view.set_surface(0.0, -5.0);
    assert_eq!(view.surface_width, 1.0);
    assert_eq!(view.surface_height, 1.0);
}

#[test]
fn bump_refresh_epoch_increments_and_returns() {
    let mut view = ViewState::new();
    assert_eq!(view.bump_refresh_epoch(), 1);
    assert_eq!(view.bump_refresh_epoch(), 2);
    assert_eq!(view.refresh_epoch, 2);
}

#[test]
fn bounds_follow_camera_and_surface() {
    let mut view = ViewState::new();
    view.set_surface(800.0, 600.0);
    let bounds = view.bounds();
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.max_x, 800.0);
    assert_eq!(bounds.max_y, 600.0);
}
