//! The canvas page: surface, toolbar, overlays, and their wiring.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::drop_zone::DropZone;
use crate::components::text_editor::TextEditor;
use crate::components::toolbar::Toolbar;
use crate::components::video_overlay::VideoOverlay;
use crate::components::youtube_overlay::YoutubeOverlay;
use crate::state::media::{MediaSource, MediaState};
use crate::state::scene::SceneState;

/// Route-level canvas screen.
#[component]
pub fn CanvasPage() -> impl IntoView {
    let scene = expect_context::<RwSignal<SceneState>>();
    let media = expect_context::<RwSignal<MediaState>>();

    // Selecting a TEXT object opens its editor; deselecting (or selecting
    // anything else) closes it. Reselection of the object already being
    // edited keeps the current draft.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let selected_text = scene.with(|s| {
                s.selection
                    .and_then(|id| s.objects.get(id).cloned())
                    .filter(|obj| obj.object_type.is_text())
            });
            match selected_text {
                Some(obj) => {
                    let already_open =
                        media.with_untracked(|m| m.editing.as_ref().map(|e| e.object_id) == Some(obj.id));
                    if !already_open {
                        media.update(|m| m.open_editor(&obj));
                    }
                }
                None => {
                    if media.with_untracked(MediaState::editor_open) {
                        media.update(MediaState::close_editor);
                    }
                }
            }
        });
    }

    let error_banner = move || {
        scene.with(|s| s.last_error.clone()).map(|message| {
            view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button
                        class="error-banner__dismiss"
                        on:click=move |_| scene.update(SceneState::clear_error)
                    >
                        "\u{00D7}"
                    </button>
                </div>
            }
        })
    };

    let overlays = move || {
        media
            .with(|m| m.playing.clone())
            .into_iter()
            .map(|entry| match entry.source {
                MediaSource::Youtube { video_id } => view! {
                    <YoutubeOverlay
                        instance_id=entry.instance_id
                        object_id=entry.object_id
                        video_id=video_id
                    />
                }
                .into_any(),
                MediaSource::Video { url } => view! {
                    <VideoOverlay
                        instance_id=entry.instance_id
                        object_id=entry.object_id
                        url=url
                    />
                }
                .into_any(),
            })
            .collect_view()
    };

    let editor = move || {
        media
            .with(|m| m.editing.clone())
            .map(|session| view! { <TextEditor session=session/> })
    };

    view! {
        <DropZone>
            <div class="canvas-page">
                <Toolbar/>
                <CanvasHost/>
                {error_banner}
                {overlays}
                {editor}
            </div>
        </DropZone>
    }
}
