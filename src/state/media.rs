//! Overlay state: playing media instances and the text-edit session.
//!
//! DESIGN
//! ======
//! Play/edit requests are typed mutators on this container rather than
//! broadcast events, so payload shapes are checked at compile time and
//! every overlay the page renders is derived from this state.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use canvas::object::CanvasObject;
use uuid::Uuid;

/// What a playing overlay embeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaSource {
    /// YouTube iframe embed by 11-character video id.
    Youtube { video_id: String },
    /// HTML `<video>` element by file URL.
    Video { url: String },
}

/// One open media overlay instance.
///
/// Ephemeral and keyed by a locally generated instance id: each play
/// action is independent, so several instances may reference the same
/// object at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayingMedia {
    pub instance_id: Uuid,
    pub object_id: i64,
    pub source: MediaSource,
}

/// Draft state of the open text editor, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEditSession {
    pub object_id: i64,
    pub text: String,
    pub font_size: i32,
    pub font_weight: String,
    pub text_color: String,
}

impl TextEditSession {
    /// Seed a session from a cached TEXT object, filling styling defaults.
    #[must_use]
    pub fn for_object(obj: &CanvasObject) -> Self {
        Self {
            object_id: obj.id,
            text: obj.content_url.clone(),
            font_size: obj.font_size.unwrap_or(16),
            font_weight: obj.font_weight.clone().unwrap_or_else(|| "normal".to_owned()),
            text_color: obj.text_color.clone().unwrap_or_else(|| "#333333".to_owned()),
        }
    }
}

/// All open overlays.
#[derive(Clone, Debug, Default)]
pub struct MediaState {
    pub playing: Vec<PlayingMedia>,
    pub editing: Option<TextEditSession>,
}

impl MediaState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a YouTube overlay for `object_id`. Returns the instance id.
    pub fn play_youtube(&mut self, object_id: i64, video_id: String) -> Uuid {
        self.play(object_id, MediaSource::Youtube { video_id })
    }

    /// Open a video overlay for `object_id`. Returns the instance id.
    pub fn play_video(&mut self, object_id: i64, url: String) -> Uuid {
        self.play(object_id, MediaSource::Video { url })
    }

    fn play(&mut self, object_id: i64, source: MediaSource) -> Uuid {
        let instance_id = Uuid::new_v4();
        self.playing.push(PlayingMedia { instance_id, object_id, source });
        instance_id
    }

    /// Close one overlay instance.
    pub fn stop(&mut self, instance_id: Uuid) {
        self.playing.retain(|entry| entry.instance_id != instance_id);
    }

    /// Open the text editor for a TEXT object, replacing any open session.
    pub fn open_editor(&mut self, obj: &CanvasObject) {
        self.editing = Some(TextEditSession::for_object(obj));
    }

    /// Close the text editor unconditionally.
    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    /// Close the text editor if it targets `object_id`.
    ///
    /// Called when that object is deleted, locally or by a remote push.
    pub fn close_editor_for(&mut self, object_id: i64) {
        if self.editing.as_ref().map(|s| s.object_id) == Some(object_id) {
            self.editing = None;
        }
    }

    /// Whether the text editor overlay is open.
    #[must_use]
    pub fn editor_open(&self) -> bool {
        self.editing.is_some()
    }
}
