use super::*;
use crate::camera::Point;

const EPSILON: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPSILON, "{a} != {b}");
}

// =============================================================
// visible_bounds
// =============================================================

#[test]
fn identity_camera_bounds_match_surface() {
    let bounds = visible_bounds(&Camera::default(), 800.0, 600.0);
    assert_close(bounds.min_x, 0.0);
    assert_close(bounds.min_y, 0.0);
    assert_close(bounds.max_x, 800.0);
    assert_close(bounds.max_y, 600.0);
}

#[test]
fn identity_camera_bounds_cover_object_in_view() {
    // Object at (100, 100), 50x50, camera at origin with zoom 1 on an
    // 800x600 surface: the query rectangle must cover it.
    let bounds = visible_bounds(&Camera::default(), 800.0, 600.0);
    assert!(bounds.intersects_rect(100.0, 100.0, 50.0, 50.0));
    assert!(bounds.contains(100.0, 100.0));
}

#[test]
fn panned_camera_shifts_bounds() {
    let camera = Camera { pan_x: -200.0, pan_y: 100.0, zoom: 1.0 };
    let bounds = visible_bounds(&camera, 800.0, 600.0);
    assert_close(bounds.min_x, 200.0);
    assert_close(bounds.min_y, -100.0);
    assert_close(bounds.max_x, 1000.0);
    assert_close(bounds.max_y, 500.0);
}

#[test]
fn zoomed_camera_widens_bounds() {
    let camera = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 0.5 };
    let bounds = visible_bounds(&camera, 800.0, 600.0);
    assert_close(bounds.max_x, 1600.0);
    assert_close(bounds.max_y, 1200.0);
}

#[test]
fn bounds_are_inverse_consistent_with_transform() {
    // Projecting the bounds corners back through the camera must land on
    // the surface corners.
    let camera = Camera { pan_x: 137.0, pan_y: -52.0, zoom: 1.7 };
    let (w, h) = (1024.0, 768.0);
    let bounds = visible_bounds(&camera, w, h);

    let top_left = camera.world_to_screen(Point::new(bounds.min_x, bounds.min_y));
    let bottom_right = camera.world_to_screen(Point::new(bounds.max_x, bounds.max_y));
    assert_close(top_left.x, 0.0);
    assert_close(top_left.y, 0.0);
    assert_close(bottom_right.x, w);
    assert_close(bottom_right.y, h);
}

// =============================================================
// Containment helpers
// =============================================================

#[test]
fn contains_rejects_outside_points() {
    let bounds = visible_bounds(&Camera::default(), 800.0, 600.0);
    assert!(!bounds.contains(-1.0, 10.0));
    assert!(!bounds.contains(10.0, 601.0));
}

#[test]
fn intersects_rect_detects_partial_overlap() {
    let bounds = visible_bounds(&Camera::default(), 800.0, 600.0);
    // Straddles the left edge.
    assert!(bounds.intersects_rect(-25.0, 10.0, 50.0, 50.0));
    // Entirely off to the right.
    assert!(!bounds.intersects_rect(900.0, 10.0, 50.0, 50.0));
}
