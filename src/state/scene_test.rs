use super::*;
use canvas::object::ObjectType;

fn obj(id: i64) -> CanvasObject {
    CanvasObject {
        id,
        object_type: ObjectType::Image,
        content_url: format!("/files/{id}.png"),
        position_x: 10.0,
        position_y: 20.0,
        width: 100.0,
        height: 80.0,
        z_index: 0,
        user_id: 1,
        created_at: None,
        font_size: None,
        font_weight: None,
        text_color: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_scene_is_empty_and_shows_grid() {
    let scene = SceneState::new();
    assert!(scene.objects.is_empty());
    assert!(scene.selection.is_none());
    assert!(scene.live_gesture.is_none());
    assert!(!scene.loading);
    assert!(scene.last_error.is_none());
    assert!(scene.show_grid);
    assert_eq!(scene.connection, ConnectionStatus::Disconnected);
}

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}

// =============================================================
// Cache writes
// =============================================================

#[test]
fn apply_created_guards_duplicates() {
    let mut scene = SceneState::new();
    assert!(scene.apply_created(obj(1)));
    assert!(!scene.apply_created(obj(1)));
    assert_eq!(scene.objects.len(), 1);
}

#[test]
fn apply_updated_replaces_wholesale() {
    let mut scene = SceneState::new();
    scene.apply_created(obj(1));
    let mut next = obj(1);
    next.position_x = 500.0;
    next.content_url = "/files/other.png".to_owned();
    scene.apply_updated(next.clone());
    assert_eq!(scene.objects.get(1), Some(&next));
}

#[test]
fn apply_deleted_clears_matching_selection_and_live() {
    let mut scene = SceneState::new();
    scene.apply_created(obj(1));
    scene.select(1);
    scene.set_live(LiveRect { id: 1, x: 0.0, y: 0.0, width: 10.0, height: 10.0 });
    scene.apply_deleted(1);
    assert!(!scene.objects.contains(1));
    assert!(scene.selection.is_none());
    assert!(scene.live_gesture.is_none());
}

#[test]
fn apply_deleted_keeps_unrelated_selection() {
    let mut scene = SceneState::new();
    scene.apply_created(obj(1));
    scene.apply_created(obj(2));
    scene.select(2);
    scene.apply_deleted(1);
    assert_eq!(scene.selection, Some(2));
}

#[test]
fn replace_viewport_keeps_selection_id() {
    let mut scene = SceneState::new();
    scene.apply_created(obj(1));
    scene.select(1);
    scene.replace_viewport(vec![obj(2), obj(3)]);
    assert_eq!(scene.objects.len(), 2);
    assert!(!scene.objects.contains(1));
    // Selection survives; dependents degrade gracefully.
    assert_eq!(scene.selection, Some(1));
}

// =============================================================
// Display rect
// =============================================================

#[test]
fn display_rect_prefers_live_gesture() {
    let mut scene = SceneState::new();
    scene.apply_created(obj(1));
    scene.set_live(LiveRect { id: 1, x: 99.0, y: 98.0, width: 55.0, height: 44.0 });
    let rect = scene.display_rect(1).unwrap();
    assert_eq!((rect.x, rect.y), (99.0, 98.0));
    assert_eq!((rect.width, rect.height), (55.0, 44.0));
}

#[test]
fn display_rect_falls_back_to_cache() {
    let mut scene = SceneState::new();
    scene.apply_created(obj(1));
    scene.set_live(LiveRect { id: 2, x: 0.0, y: 0.0, width: 1.0, height: 1.0 });
    let rect = scene.display_rect(1).unwrap();
    assert_eq!((rect.x, rect.y), (10.0, 20.0));
}

#[test]
fn display_rect_is_none_for_unknown_object() {
    let scene = SceneState::new();
    assert!(scene.display_rect(42).is_none());
}

// =============================================================
// Status
// =============================================================

#[test]
fn error_banner_set_and_clear() {
    let mut scene = SceneState::new();
    scene.report_error("upload failed");
    assert_eq!(scene.last_error.as_deref(), Some("upload failed"));
    scene.clear_error();
    assert!(scene.last_error.is_none());
}

#[test]
fn grid_toggles() {
    let mut scene = SceneState::new();
    scene.toggle_grid();
    assert!(!scene.show_grid);
    scene.toggle_grid();
    assert!(scene.show_grid);
}
