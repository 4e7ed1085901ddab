use super::*;

#[test]
fn parses_watch_urls() {
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn parses_watch_urls_with_extra_params() {
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn parses_share_links() {
    assert_eq!(
        extract_youtube_id("https://youtu.be/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(
        extract_youtube_id("https://youtu.be/dQw4w9WgXcQ?si=abc"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn parses_embed_and_shorts_urls() {
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn rejects_wrong_length_ids() {
    assert_eq!(extract_youtube_id("https://youtu.be/short"), None);
    assert_eq!(extract_youtube_id("https://youtu.be/waytoolongvideoid"), None);
}

#[test]
fn rejects_non_youtube_urls() {
    assert_eq!(extract_youtube_id("https://example.com/watch"), None);
    assert_eq!(extract_youtube_id("not a url"), None);
    assert_eq!(extract_youtube_id(""), None);
}

#[test]
fn rejects_ids_with_invalid_characters() {
    assert_eq!(extract_youtube_id("https://youtu.be/bad id here!"), None);
}
