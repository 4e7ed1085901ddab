//! Floating text editor overlay.
//!
//! The editor is a DOM form, so the canvas layer cannot draw it; instead
//! it re-projects itself next to its text object once per animation
//! frame, flipping sides and clamping so it stays on screen. Saving
//! commits content and styling through the repository; the editor closes
//! on save, cancel, or deletion of its object.

use leptos::prelude::*;

use crate::state::media::{MediaState, TextEditSession};
use crate::state::scene::SceneState;
use crate::state::view::ViewState;

#[cfg(feature = "hydrate")]
use canvas::object::ObjectPatch;

#[cfg(feature = "hydrate")]
use crate::net::repository;
#[cfg(feature = "hydrate")]
use crate::util::overlay_frame::{place_side_panel, project_rect, start_frame_loop};

/// Gap between the text object and the editor panel, in CSS pixels.
#[cfg(feature = "hydrate")]
const EDITOR_MARGIN_PX: f64 = 20.0;

const FONT_SIZES: [i32; 11] = [12, 14, 16, 18, 20, 24, 28, 32, 36, 48, 64];

/// Text editor overlay for one edit session.
#[component]
pub fn TextEditor(session: TextEditSession) -> impl IntoView {
    let scene = expect_context::<RwSignal<SceneState>>();
    let view = expect_context::<RwSignal<ViewState>>();
    let media = expect_context::<RwSignal<MediaState>>();
    let editor_ref = NodeRef::<leptos::html::Div>::new();
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    let object_id = session.object_id;
    let text = RwSignal::new(session.text.clone());
    let font_size = RwSignal::new(session.font_size);
    let font_weight = RwSignal::new(session.font_weight.clone());
    let text_color = RwSignal::new(session.text_color.clone());

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scene, view, media, object_id);
    }

    // Focus the textarea once it exists.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
                textarea.select();
            }
        });
    }

    // Per-frame re-projection next to the (possibly mid-drag) object.
    // A deleted object simply stops producing a rect; the editor itself
    // is closed by the repository in that case.
    #[cfg(feature = "hydrate")]
    {
        let frame_loop = start_frame_loop(move || {
            let Some(editor) = editor_ref.get_untracked() else {
                return;
            };
            let Some(rect) = scene.with_untracked(|s| s.display_rect(object_id)) else {
                return;
            };
            let (camera, surface_w, surface_h) =
                view.with_untracked(|v| (v.camera, v.surface_width, v.surface_height));
            let object_screen = project_rect(&camera, &rect);
            let (x, y) = place_side_panel(
                object_screen,
                f64::from(editor.offset_width()),
                f64::from(editor.offset_height()),
                surface_w,
                surface_h,
                EDITOR_MARGIN_PX,
            );
            let style = editor.style();
            let _ = style.set_property("left", &format!("{x}px"));
            let _ = style.set_property("top", &format!("{y}px"));
        });
        on_cleanup(move || frame_loop.cancel());
    }

    let save = {
        #[cfg(feature = "hydrate")]
        {
            move || {
                let value = text.get_untracked();
                if value.trim().is_empty() {
                    return;
                }
                let patch = ObjectPatch {
                    content_url: Some(value),
                    font_size: Some(font_size.get_untracked()),
                    font_weight: Some(font_weight.get_untracked()),
                    text_color: Some(text_color.get_untracked()),
                    ..ObjectPatch::default()
                };
                leptos::task::spawn_local(async move {
                    repository::update_object(scene, object_id, patch).await;
                    scene.update(SceneState::clear_selection);
                    media.update(MediaState::close_editor);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move || {}
        }
    };

    let cancel = {
        #[cfg(feature = "hydrate")]
        {
            move || {
                scene.update(SceneState::clear_selection);
                media.update(MediaState::close_editor);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move || {}
        }
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            cancel();
        } else if ev.key() == "Enter" && ev.ctrl_key() {
            ev.prevent_default();
            save();
        }
    };

    let textarea_style = move || {
        format!(
            "font-size: {}px; font-weight: {}; color: {};",
            font_size.get(),
            font_weight.get(),
            text_color.get()
        )
    };

    view! {
        <div class="text-editor" node_ref=editor_ref on:pointerdown=|ev| ev.stop_propagation()>
            <textarea
                class="text-editor__input"
                node_ref=textarea_ref
                style=textarea_style
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:keydown=on_key_down
                placeholder="Enter text..."
            ></textarea>
            <div class="text-editor__controls">
                <label class="text-editor__field">
                    "Font Size"
                    <select
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<i32>() {
                                font_size.set(size);
                            }
                        }
                    >
                        {FONT_SIZES
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || font_size.get() == size
                                    >
                                        {format!("{size}px")}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="text-editor__field">
                    "Font Weight"
                    <select on:change=move |ev| font_weight.set(event_target_value(&ev))>
                        <option value="normal" selected=move || font_weight.get() == "normal">
                            "Normal"
                        </option>
                        <option value="bold" selected=move || font_weight.get() == "bold">
                            "Bold"
                        </option>
                    </select>
                </label>
                <label class="text-editor__field">
                    "Text Color"
                    <input
                        type="color"
                        prop:value=move || text_color.get()
                        on:input=move |ev| text_color.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="text-editor__actions">
                <button class="text-editor__button" on:click=move |_| cancel()>
                    "Cancel (Esc)"
                </button>
                <button
                    class="text-editor__button text-editor__button--primary"
                    on:click=move |_| save()
                >
                    "Save (Ctrl+Enter)"
                </button>
            </div>
        </div>
    }
}
