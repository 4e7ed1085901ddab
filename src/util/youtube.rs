//! YouTube URL parsing.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

/// Markers after which the 11-character video id appears. `watch?v=` must
/// precede the bare `v/` so watch URLs aren't matched at the wrong offset.
const ID_MARKERS: [&str; 5] = ["youtu.be/", "embed/", "shorts/", "watch?v=", "v/"];

/// Extract the 11-character video id from a YouTube URL.
///
/// Supports watch URLs, share links (`youtu.be/`), embeds, and Shorts.
/// Returns `None` for anything that doesn't carry a well-formed id.
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<String> {
    for marker in ID_MARKERS {
        let Some(idx) = url.find(marker) else {
            continue;
        };
        let tail = &url[idx + marker.len()..];
        let id: String = tail.chars().take_while(|c| !"#&?/".contains(*c)).collect();
        if id.len() == 11
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Some(id);
        }
    }
    None
}
