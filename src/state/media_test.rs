use super::*;
use canvas::object::ObjectType;

fn text_obj(id: i64) -> CanvasObject {
    CanvasObject {
        id,
        object_type: ObjectType::Text,
        content_url: "hello".to_owned(),
        position_x: 0.0,
        position_y: 0.0,
        width: 200.0,
        height: 50.0,
        z_index: 0,
        user_id: 1,
        created_at: None,
        font_size: Some(24),
        font_weight: Some("bold".to_owned()),
        text_color: Some("#112233".to_owned()),
    }
}

// =============================================================
// Playing media
// =============================================================

#[test]
fn play_actions_get_distinct_instance_ids() {
    let mut media = MediaState::new();
    let a = media.play_youtube(1, "dQw4w9WgXcQ".to_owned());
    let b = media.play_youtube(1, "dQw4w9WgXcQ".to_owned());
    assert_ne!(a, b);
    assert_eq!(media.playing.len(), 2);
}

#[test]
fn same_object_may_play_multiple_times() {
    let mut media = MediaState::new();
    media.play_video(3, "/files/3.mp4".to_owned());
    media.play_video(3, "/files/3.mp4".to_owned());
    assert_eq!(media.playing.iter().filter(|p| p.object_id == 3).count(), 2);
}

#[test]
fn stop_removes_only_that_instance() {
    let mut media = MediaState::new();
    let a = media.play_youtube(1, "aaaaaaaaaaa".to_owned());
    let b = media.play_video(2, "/files/2.mp4".to_owned());
    media.stop(a);
    assert_eq!(media.playing.len(), 1);
    assert_eq!(media.playing[0].instance_id, b);
}

// =============================================================
// Text edit session
// =============================================================

#[test]
fn session_seeds_from_object_fields() {
    let session = TextEditSession::for_object(&text_obj(5));
    assert_eq!(session.object_id, 5);
    assert_eq!(session.text, "hello");
    assert_eq!(session.font_size, 24);
    assert_eq!(session.font_weight, "bold");
    assert_eq!(session.text_color, "#112233");
}

#[test]
fn session_fills_styling_defaults() {
    let mut obj = text_obj(5);
    obj.font_size = None;
    obj.font_weight = None;
    obj.text_color = None;
    let session = TextEditSession::for_object(&obj);
    assert_eq!(session.font_size, 16);
    assert_eq!(session.font_weight, "normal");
    assert_eq!(session.text_color, "#333333");
}

#[test]
fn open_editor_replaces_previous_session() {
    let mut media = MediaState::new();
    media.open_editor(&text_obj(1));
    media.open_editor(&text_obj(2));
    assert_eq!(media.editing.as_ref().unwrap().object_id, 2);
    assert!(media.editor_open());
}

#[test]
fn close_editor_for_only_matches_its_object() {
    let mut media = MediaState::new();
    media.open_editor(&text_obj(5));
    media.close_editor_for(7);
    assert!(media.editor_open());
    media.close_editor_for(5);
    assert!(!media.editor_open());
}
