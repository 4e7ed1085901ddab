use super::*;

// =============================================================
// CreateObjectRequest
// =============================================================

#[test]
fn create_request_serializes_camel_case() {
    let request = CreateObjectRequest {
        object_type: ObjectType::Text,
        content_url: "Click to edit text".to_owned(),
        position_x: -100.0,
        position_y: -25.0,
        width: 200.0,
        height: 50.0,
        z_index: 0,
        user_id: 1,
        font_size: Some(16),
        font_weight: Some("normal".to_owned()),
        text_color: Some("#333333".to_owned()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["objectType"], "TEXT");
    assert_eq!(value["contentUrl"], "Click to edit text");
    assert_eq!(value["positionX"], -100.0);
    assert_eq!(value["fontSize"], 16);
    assert!(value.get("id").is_none());
}

#[test]
fn create_request_omits_absent_text_styling() {
    let request = CreateObjectRequest {
        object_type: ObjectType::Youtube,
        content_url: "https://youtu.be/dQw4w9WgXcQ".to_owned(),
        position_x: 0.0,
        position_y: 0.0,
        width: 560.0,
        height: 315.0,
        z_index: 1,
        user_id: 1,
        font_size: None,
        font_weight: None,
        text_color: None,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("fontSize").is_none());
    assert!(value.get("fontWeight").is_none());
    assert!(value.get("textColor").is_none());
}

// =============================================================
// ChangeFrame parsing
// =============================================================

#[test]
fn parses_create_frame() {
    let text = r#"{
        "type": "CREATE",
        "object": {
            "id": 9, "objectType": "IMAGE", "contentUrl": "/files/9.png",
            "positionX": 1.0, "positionY": 2.0, "width": 300.0, "height": 300.0,
            "zIndex": 0, "userId": 1
        }
    }"#;
    let frame = ChangeFrame::parse(text).unwrap();
    let ChangeFrame::Create { object } = frame else {
        panic!("expected CREATE, got {frame:?}");
    };
    assert_eq!(object.id, 9);
    assert_eq!(object.object_type, ObjectType::Image);
}

#[test]
fn parses_update_frame() {
    let text = r#"{
        "type": "UPDATE",
        "object": {
            "id": 4, "objectType": "TEXT", "contentUrl": "edited",
            "positionX": 0.0, "positionY": 0.0, "width": 200.0, "height": 50.0,
            "zIndex": 0, "userId": 1, "fontSize": 20
        }
    }"#;
    let ChangeFrame::Update { object } = ChangeFrame::parse(text).unwrap() else {
        panic!("expected UPDATE");
    };
    assert_eq!(object.content_url, "edited");
    assert_eq!(object.font_size, Some(20));
}

#[test]
fn parses_delete_frame() {
    let frame = ChangeFrame::parse(r#"{"type":"DELETE","objectId":5}"#).unwrap();
    assert_eq!(frame, ChangeFrame::Delete { object_id: 5 });
}

#[test]
fn rejects_unknown_frame_type() {
    assert!(ChangeFrame::parse(r#"{"type":"MOVE","objectId":5}"#).is_err());
}

#[test]
fn rejects_malformed_frames() {
    assert!(ChangeFrame::parse("not json").is_err());
    assert!(ChangeFrame::parse(r#"{"type":"DELETE"}"#).is_err());
    assert!(ChangeFrame::parse(r#"{"type":"CREATE","object":{"id":1}}"#).is_err());
}

#[test]
fn frame_roundtrips_through_json() {
    let frame = ChangeFrame::Delete { object_id: 77 };
    let json = serde_json::to_string(&frame).unwrap();
    assert_eq!(ChangeFrame::parse(&json).unwrap(), frame);
}
