use super::*;

// =============================================================
// Projection
// =============================================================

#[test]
fn projects_rect_through_camera() {
    let camera = Camera { pan_x: 100.0, pan_y: 50.0, zoom: 2.0 };
    let rect = LiveRect { id: 1, x: 10.0, y: 20.0, width: 30.0, height: 40.0 };
    let screen = project_rect(&camera, &rect);
    assert_eq!(screen, ScreenRect { left: 120.0, top: 90.0, width: 60.0, height: 80.0 });
}

#[test]
fn identity_camera_projection_is_identity() {
    let rect = LiveRect { id: 1, x: 5.0, y: 6.0, width: 7.0, height: 8.0 };
    let screen = project_rect(&Camera::default(), &rect);
    assert_eq!(screen, ScreenRect { left: 5.0, top: 6.0, width: 7.0, height: 8.0 });
}

// =============================================================
// Surface clamping
// =============================================================

#[test]
fn clamp_keeps_in_view_rect_unchanged() {
    let rect = ScreenRect { left: 100.0, top: 100.0, width: 200.0, height: 100.0 };
    assert_eq!(clamp_to_surface(rect, 800.0, 600.0), rect);
}

#[test]
fn clamp_pulls_offscreen_rect_back_in() {
    let rect = ScreenRect { left: -500.0, top: 700.0, width: 200.0, height: 100.0 };
    let clamped = clamp_to_surface(rect, 800.0, 600.0);
    assert_eq!(clamped.left, 0.0);
    assert_eq!(clamped.top, 500.0);
}

#[test]
fn clamp_pins_oversized_rect_to_origin() {
    let rect = ScreenRect { left: 300.0, top: 300.0, width: 2000.0, height: 1500.0 };
    let clamped = clamp_to_surface(rect, 800.0, 600.0);
    assert_eq!((clamped.left, clamped.top), (0.0, 0.0));
}

// =============================================================
// Side panel placement
// =============================================================

#[test]
fn panel_prefers_right_side() {
    let object = ScreenRect { left: 100.0, top: 100.0, width: 200.0, height: 50.0 };
    let (x, y) = place_side_panel(object, 320.0, 200.0, 1280.0, 720.0, 20.0);
    assert_eq!(x, 320.0);
    assert_eq!(y, 100.0);
}

#[test]
fn panel_flips_left_when_right_overflows() {
    let object = ScreenRect { left: 900.0, top: 100.0, width: 200.0, height: 50.0 };
    let (x, _) = place_side_panel(object, 320.0, 200.0, 1280.0, 720.0, 20.0);
    assert_eq!(x, 900.0 - 20.0 - 320.0);
}

#[test]
fn panel_clamps_to_left_edge_when_neither_side_fits() {
    let object = ScreenRect { left: 10.0, top: 100.0, width: 700.0, height: 50.0 };
    let (x, _) = place_side_panel(object, 320.0, 200.0, 800.0, 600.0, 20.0);
    assert_eq!(x, 0.0);
}

#[test]
fn panel_clamps_top_and_bottom() {
    let object = ScreenRect { left: 100.0, top: -50.0, width: 200.0, height: 50.0 };
    let (_, y) = place_side_panel(object, 320.0, 200.0, 1280.0, 720.0, 20.0);
    assert_eq!(y, 0.0);

    let object = ScreenRect { left: 100.0, top: 690.0, width: 200.0, height: 50.0 };
    let (_, y) = place_side_panel(object, 320.0, 200.0, 1280.0, 720.0, 20.0);
    assert_eq!(y, 720.0 - 200.0);
}
