//! Toolbar: object creation, deletion, grid toggle, and sync status.

use leptos::prelude::*;

use crate::state::media::MediaState;
use crate::state::scene::{ConnectionStatus, SceneState};
use crate::state::view::ViewState;

#[cfg(feature = "hydrate")]
use canvas::object::ObjectType;

#[cfg(feature = "hydrate")]
use crate::net::repository::{self, DEFAULT_USER_ID};
#[cfg(feature = "hydrate")]
use crate::net::types::CreateObjectRequest;
#[cfg(feature = "hydrate")]
use crate::util::youtube::extract_youtube_id;

/// Short label for the connection badge.
fn status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "offline",
        ConnectionStatus::Connecting => "connecting",
        ConnectionStatus::Connected => "live",
        ConnectionStatus::ReconnectWait => "reconnecting",
        ConnectionStatus::GivenUp => "sync lost - reload",
    }
}

/// Badge modifier class for the connection status.
fn status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "toolbar__status toolbar__status--live",
        ConnectionStatus::GivenUp => "toolbar__status toolbar__status--dead",
        _ => "toolbar__status toolbar__status--waiting",
    }
}

/// World coordinate at the center of the current viewport.
#[cfg(feature = "hydrate")]
fn viewport_center(view: RwSignal<ViewState>) -> (f64, f64) {
    let bounds = view.with_untracked(crate::state::view::ViewState::bounds);
    ((bounds.min_x + bounds.max_x) / 2.0, (bounds.min_y + bounds.max_y) / 2.0)
}

/// Pull the chosen file out of a file-input change event and clear the
/// input so the same file can be picked again.
#[cfg(feature = "hydrate")]
fn take_selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())?;
    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");
    file
}

/// Toolbar component.
#[component]
pub fn Toolbar() -> impl IntoView {
    let scene = expect_context::<RwSignal<SceneState>>();
    let view = expect_context::<RwSignal<ViewState>>();
    let media = expect_context::<RwSignal<MediaState>>();
    let image_input_ref = NodeRef::<leptos::html::Input>::new();
    let video_input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (view, media);
    }

    let on_add_text = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                let (center_x, center_y) = viewport_center(view);
                let request = CreateObjectRequest {
                    object_type: ObjectType::Text,
                    content_url: "Click to edit text".to_owned(),
                    position_x: center_x - 100.0,
                    position_y: center_y - 25.0,
                    width: 200.0,
                    height: 50.0,
                    z_index: scene.with_untracked(|s| s.objects.next_z_index()),
                    user_id: DEFAULT_USER_ID,
                    font_size: Some(16),
                    font_weight: Some("normal".to_owned()),
                    text_color: Some("#333333".to_owned()),
                };
                leptos::task::spawn_local(repository::create_object(scene, request));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_add_youtube = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Ok(Some(url)) = window.prompt_with_message("Enter a YouTube URL:") else {
                    return;
                };
                if extract_youtube_id(&url).is_none() {
                    scene.update(|s| s.report_error("that does not look like a YouTube URL"));
                    return;
                }
                let (center_x, center_y) = viewport_center(view);
                let request = CreateObjectRequest {
                    object_type: ObjectType::Youtube,
                    content_url: url,
                    position_x: center_x - 280.0,
                    position_y: center_y - 157.5,
                    width: 560.0,
                    height: 315.0,
                    z_index: scene.with_untracked(|s| s.objects.next_z_index()),
                    user_id: DEFAULT_USER_ID,
                    font_size: None,
                    font_weight: None,
                    text_color: None,
                };
                leptos::task::spawn_local(repository::create_object(scene, request));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_image_chosen = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                let Some(file) = take_selected_file(&ev) else {
                    return;
                };
                let (center_x, center_y) = viewport_center(view);
                leptos::task::spawn_local(repository::upload_object(
                    scene,
                    file,
                    ObjectType::Image,
                    center_x - 150.0,
                    center_y - 150.0,
                    300.0,
                    300.0,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_video_chosen = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                let Some(file) = take_selected_file(&ev) else {
                    return;
                };
                let (center_x, center_y) = viewport_center(view);
                leptos::task::spawn_local(repository::upload_object(
                    scene,
                    file,
                    ObjectType::Video,
                    center_x - 280.0,
                    center_y - 157.5,
                    560.0,
                    315.0,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_delete_selected = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                let Some(id) = scene.with_untracked(|s| s.selection) else {
                    return;
                };
                leptos::task::spawn_local(repository::delete_object(scene, media, id));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let pick_image = move |_ev: leptos::ev::MouseEvent| {
        if let Some(input) = image_input_ref.get_untracked() {
            input.click();
        }
    };
    let pick_video = move |_ev: leptos::ev::MouseEvent| {
        if let Some(input) = video_input_ref.get_untracked() {
            input.click();
        }
    };

    let has_selection = move || scene.with(|s| s.selection.is_some());
    let status = move || scene.with(|s| s.connection);

    view! {
        <div class="toolbar">
            <button class="toolbar__button" on:click=on_add_text>"Add Text"</button>
            <button class="toolbar__button" on:click=on_add_youtube>"Add YouTube"</button>
            <button class="toolbar__button" on:click=pick_image>"Add Image"</button>
            <button class="toolbar__button" on:click=pick_video>"Add Video"</button>
            <input
                type="file"
                accept="image/*"
                class="toolbar__file-input"
                node_ref=image_input_ref
                on:change=on_image_chosen
            />
            <input
                type="file"
                accept="video/*"
                class="toolbar__file-input"
                node_ref=video_input_ref
                on:change=on_video_chosen
            />
            <button
                class="toolbar__button toolbar__button--danger"
                disabled=move || !has_selection()
                on:click=on_delete_selected
            >
                "Delete"
            </button>
            <button
                class="toolbar__button"
                on:click=move |_| scene.update(SceneState::toggle_grid)
            >
                "Grid"
            </button>
            <span class=move || status_class(status())>{move || status_label(status())}</span>
            {move || {
                scene
                    .with(|s| s.loading)
                    .then(|| view! { <span class="toolbar__loading">"Loading..."</span> })
            }}
        </div>
    }
}
