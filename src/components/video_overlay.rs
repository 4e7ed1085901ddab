//! Uploaded-video player overlay.
//!
//! Same positioning scheme as the YouTube overlay: a floating element
//! re-projected over the object's live rectangle every frame.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::media::MediaState;
use crate::state::scene::SceneState;
use crate::state::view::ViewState;

#[cfg(feature = "hydrate")]
use super::youtube_overlay::track_object_rect;
#[cfg(feature = "hydrate")]
use crate::util::overlay_frame::start_frame_loop;

/// One playing uploaded video.
#[component]
pub fn VideoOverlay(instance_id: Uuid, object_id: i64, url: String) -> impl IntoView {
    let scene = expect_context::<RwSignal<SceneState>>();
    let view = expect_context::<RwSignal<ViewState>>();
    let media = expect_context::<RwSignal<MediaState>>();
    let overlay_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scene, view, object_id);
    }

    #[cfg(feature = "hydrate")]
    {
        let frame_loop = start_frame_loop(move || {
            if let Some(overlay) = overlay_ref.get_untracked() {
                track_object_rect(&overlay, scene, view, object_id);
            }
        });
        on_cleanup(move || frame_loop.cancel());
    }

    let on_close = move |_ev: leptos::ev::MouseEvent| {
        media.update(|m| m.stop(instance_id));
    };

    view! {
        <div class="media-overlay media-overlay--video" node_ref=overlay_ref>
            <video class="media-overlay__frame" src=url controls=true autoplay=true></video>
            <button class="media-overlay__close" title="Close" on:click=on_close>
                "\u{00D7}"
            </button>
        </div>
    }
}
