//! YouTube player overlay.
//!
//! An iframe cannot be drawn by the canvas layer, so the player floats
//! above the surface and re-projects itself over its object every
//! animation frame. It reads the object's live rectangle, so it tracks a
//! drag or resize in progress with no perceptible lag; if the object has
//! been removed it simply stops moving until the overlay is closed.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::media::MediaState;
use crate::state::scene::SceneState;
use crate::state::view::ViewState;

#[cfg(feature = "hydrate")]
use crate::util::overlay_frame::{clamp_to_surface, project_rect, start_frame_loop};

/// Position a floating overlay element over its object's live rectangle.
///
/// Shared by the YouTube and video overlays.
#[cfg(feature = "hydrate")]
pub(super) fn track_object_rect(
    overlay: &web_sys::HtmlDivElement,
    scene: RwSignal<SceneState>,
    view: RwSignal<ViewState>,
    object_id: i64,
) {
    let Some(rect) = scene.with_untracked(|s| s.display_rect(object_id)) else {
        return;
    };
    let (camera, surface_w, surface_h) =
        view.with_untracked(|v| (v.camera, v.surface_width, v.surface_height));
    let screen = clamp_to_surface(project_rect(&camera, &rect), surface_w, surface_h);
    let style = overlay.style();
    let _ = style.set_property("left", &format!("{}px", screen.left));
    let _ = style.set_property("top", &format!("{}px", screen.top));
    let _ = style.set_property("width", &format!("{}px", screen.width));
    let _ = style.set_property("height", &format!("{}px", screen.height));
}

/// One playing YouTube embed.
#[component]
pub fn YoutubeOverlay(instance_id: Uuid, object_id: i64, video_id: String) -> impl IntoView {
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

    let embed_url = format!("https://www.youtube.com/embed/{video_id}?autoplay=1");
    let on_close = move |_ev: leptos::ev::MouseEvent| {
        media.update(|m| m.stop(instance_id));
    };

    view! {
        <div class="media-overlay media-overlay--youtube" node_ref=overlay_ref>
            <iframe
                class="media-overlay__frame"
                src=embed_url
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen="true"
            ></iframe>
            <button class="media-overlay__close" title="Close" on:click=on_close>
                "\u{00D7}"
            </button>
        </div>
    }
}
