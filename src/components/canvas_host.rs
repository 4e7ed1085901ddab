//! The interactive canvas surface.
//!
//! ARCHITECTURE
//! ============
//! This component maps raw pointer/wheel/keyboard input into the
//! `canvas::gesture` state machine and camera, publishes live gesture
//! rectangles into the scene, and turns finished gestures into repository
//! update intents. Objects render inside a single transformed "world"
//! element, so their positions are written in canvas coordinates and the
//! browser applies the pan/zoom transform.
//!
//! A pointer-down only starts a background pan when the event target is
//! the surface element itself; object wrappers stop propagation, so a
//! drag on an object is never mistaken for a pan.

use leptos::prelude::*;

use crate::components::object_view::ObjectContent;
use crate::state::media::MediaState;
use crate::state::scene::{LiveRect, SceneState};
use crate::state::view::ViewState;
use crate::util::viewport_refresh::cancel_pending_refresh;

#[cfg(feature = "hydrate")]
use canvas::camera::{Point, ZoomDirection};
#[cfg(feature = "hydrate")]
use canvas::gesture::{Gesture, GestureCommit, GestureMotion};
#[cfg(feature = "hydrate")]
use canvas::object::{CanvasObject, ObjectPatch, ObjectType};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::net::repository;
#[cfg(feature = "hydrate")]
use crate::util::viewport_refresh::{refresh_viewport_now, schedule_viewport_refresh};
#[cfg(feature = "hydrate")]
use crate::util::youtube::extract_youtube_id;

/// Pointer position relative to the surface element, in CSS pixels.
#[cfg(feature = "hydrate")]
fn surface_point(client_x: i32, client_y: i32, surface: &web_sys::HtmlDivElement) -> Point {
    let rect = surface.get_bounding_client_rect();
    Point::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
}

/// Whether the event's target is the surface element itself (and not an
/// object rendered on top of it).
#[cfg(feature = "hydrate")]
fn event_targets_surface(target: Option<web_sys::EventTarget>, surface: &web_sys::HtmlDivElement) -> bool {
    let surface_target: &web_sys::EventTarget = surface.as_ref();
    target.as_ref() == Some(surface_target)
}

/// Commit a finished drag/resize: send the update intent, then drop the
/// live rect so the canonical response takes over.
#[cfg(feature = "hydrate")]
fn commit_object_patch(scene: RwSignal<SceneState>, id: i64, patch: ObjectPatch) {
    leptos::task::spawn_local(async move {
        repository::update_object(scene, id, patch).await;
        scene.update(|s| {
            if s.live_gesture.map(|live| live.id) == Some(id) {
                s.clear_live();
            }
        });
    });
}

#[cfg(feature = "hydrate")]
fn begin_object_drag(
    ev: &leptos::ev::PointerEvent,
    surface: &web_sys::HtmlDivElement,
    gesture: &Rc<RefCell<Gesture>>,
    scene: RwSignal<SceneState>,
    view: RwSignal<ViewState>,
    obj: &CanvasObject,
) {
    ev.stop_propagation();
    ev.prevent_default();
    let _ = surface.set_pointer_capture(ev.pointer_id());
    scene.update(|s| s.select(obj.id));
    let camera = view.with_untracked(|v| v.camera);
    let pointer_world = camera.screen_to_world(surface_point(ev.client_x(), ev.client_y(), surface));
    gesture.borrow_mut().begin_drag(
        obj.id,
        pointer_world,
        obj.position_x,
        obj.position_y,
        obj.width,
        obj.height,
    );
}

#[cfg(feature = "hydrate")]
fn begin_object_resize(
    ev: &leptos::ev::PointerEvent,
    surface: &web_sys::HtmlDivElement,
    gesture: &Rc<RefCell<Gesture>>,
    obj: &CanvasObject,
) {
    ev.stop_propagation();
    ev.prevent_default();
    let _ = surface.set_pointer_capture(ev.pointer_id());
    gesture.borrow_mut().begin_resize(
        obj.id,
        obj.object_type,
        Point::new(obj.position_x, obj.position_y),
        obj.width,
        obj.height,
    );
}

/// Canvas host component.
///
/// Renders the surface, the transformed world layer, and every cached
/// object; owns the gesture lifecycle and the keyboard shortcuts.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let scene = expect_context::<RwSignal<SceneState>>();
    let view = expect_context::<RwSignal<ViewState>>();
    let media = expect_context::<RwSignal<MediaState>>();
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let gesture = Rc::new(RefCell::new(Gesture::default()));
    #[cfg(feature = "hydrate")]
    let pan_moved = RwSignal::new(false);
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = media;
    }

    // Surface size tracking and the initial viewport fetch.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(surface) = surface_ref.get() else {
                return;
            };
            view.update(|v| {
                v.set_surface(f64::from(surface.client_width()), f64::from(surface.client_height()));
            });
            refresh_viewport_now(view, scene);
        });

        let resize_listener = window_event_listener(leptos::ev::resize, move |_| {
            let Some(surface) = surface_ref.get_untracked() else {
                return;
            };
            view.update(|v| {
                v.set_surface(f64::from(surface.client_width()), f64::from(surface.client_height()));
            });
            schedule_viewport_refresh(view, scene);
        });

        // Keyboard shortcuts: Delete/Backspace removes the selection,
        // Escape clears it. Disabled while the text editor is open so
        // editing keystrokes behave normally.
        let key_listener = window_event_listener(leptos::ev::keydown, move |ev| {
            if media.with_untracked(MediaState::editor_open) {
                return;
            }
            match ev.key().as_str() {
                "Delete" | "Backspace" => {
                    if let Some(id) = scene.with_untracked(|s| s.selection) {
                        ev.prevent_default();
                        leptos::task::spawn_local(repository::delete_object(scene, media, id));
                    }
                }
                "Escape" => scene.update(SceneState::clear_selection),
                _ => {}
            }
        });

        on_cleanup(move || {
            resize_listener.remove();
            key_listener.remove();
        });
    }

    on_cleanup(move || cancel_pending_refresh(view));

    let on_surface_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let gesture = Rc::clone(&gesture);
            move |ev: leptos::ev::PointerEvent| {
                let Some(surface) = surface_ref.get_untracked() else {
                    return;
                };
                if !event_targets_surface(ev.target(), &surface) {
                    return;
                }
                ev.prevent_default();
                let _ = surface.set_pointer_capture(ev.pointer_id());
                pan_moved.set(false);
                gesture
                    .borrow_mut()
                    .begin_pan(surface_point(ev.client_x(), ev.client_y(), &surface));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_surface_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let gesture = Rc::clone(&gesture);
            move |ev: leptos::ev::PointerEvent| {
                if !gesture.borrow().is_active() {
                    return;
                }
                let Some(surface) = surface_ref.get_untracked() else {
                    return;
                };
                let point = surface_point(ev.client_x(), ev.client_y(), &surface);
                let motion = {
                    let mut active = gesture.borrow_mut();
                    if matches!(&*active, Gesture::Panning { .. }) {
                        let mut motion = GestureMotion::None;
                        view.update(|v| motion = active.pointer_moved(&mut v.camera, point));
                        motion
                    } else {
                        let mut camera = view.with_untracked(|v| v.camera);
                        active.pointer_moved(&mut camera, point)
                    }
                };
                match motion {
                    GestureMotion::CameraPanned => {
                        pan_moved.set(true);
                        schedule_viewport_refresh(view, scene);
                    }
                    GestureMotion::ObjectPreview { id, x, y, width, height } => {
                        scene.update(|s| s.set_live(LiveRect { id, x, y, width, height }));
                    }
                    GestureMotion::None => {}
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_surface_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let gesture = Rc::clone(&gesture);
            move |ev: leptos::ev::PointerEvent| {
                let Some(surface) = surface_ref.get_untracked() else {
                    return;
                };
                let _ = surface.release_pointer_capture(ev.pointer_id());
                match gesture.borrow_mut().finish() {
                    GestureCommit::None => {}
                    GestureCommit::PanEnded => {
                        if !pan_moved.get_untracked() && event_targets_surface(ev.target(), &surface) {
                            // Plain background click: deselect.
                            scene.update(SceneState::clear_selection);
                            media.update(MediaState::close_editor);
                        }
                    }
                    GestureCommit::Move { id, x, y } => {
                        commit_object_patch(scene, id, ObjectPatch::moved(x, y));
                    }
                    GestureCommit::Resize { id, width, height } => {
                        commit_object_patch(scene, id, ObjectPatch::resized(width, height));
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_surface_pointer_cancel = {
        #[cfg(feature = "hydrate")]
        {
            let gesture = Rc::clone(&gesture);
            move |_ev: leptos::ev::PointerEvent| {
                // Abort without committing; the cache value wins again.
                *gesture.borrow_mut() = Gesture::Idle;
                scene.update(SceneState::clear_live);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let Some(surface) = surface_ref.get_untracked() else {
                    return;
                };
                let pointer = surface_point(ev.client_x(), ev.client_y(), &surface);
                let direction = if ev.delta_y() > 0.0 {
                    ZoomDirection::Out
                } else {
                    ZoomDirection::In
                };
                view.update(|v| v.camera.zoom_at(pointer, direction));
                schedule_viewport_refresh(view, scene);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let world_style = move || {
        view.with(|v| {
            format!(
                "transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
                v.camera.pan_x, v.camera.pan_y, v.camera.zoom
            )
        })
    };

    let surface_class = move || {
        scene.with(|s| {
            if s.show_grid {
                "canvas-surface canvas-surface--grid"
            } else {
                "canvas-surface"
            }
        })
    };

    let objects_view = {
        #[cfg(feature = "hydrate")]
        let gesture = Rc::clone(&gesture);
        move || {
            scene.with(|s| {
                s.objects
                    .sorted()
                    .into_iter()
                    .map(|obj| {
                        let obj = obj.clone();
                        let selected = s.selection == Some(obj.id);
                        let rect = s.display_rect(obj.id).unwrap_or(LiveRect {
                            id: obj.id,
                            x: obj.position_x,
                            y: obj.position_y,
                            width: obj.width,
                            height: obj.height,
                        });
                        let style = format!(
                            "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
                            rect.x, rect.y, rect.width, rect.height, obj.z_index
                        );
                        let class = if selected {
                            "canvas-object canvas-object--selected"
                        } else {
                            "canvas-object"
                        };

                        let on_object_pointer_down = {
                            #[cfg(feature = "hydrate")]
                            {
                                let gesture = Rc::clone(&gesture);
                                let obj = obj.clone();
                                move |ev: leptos::ev::PointerEvent| {
                                    let Some(surface) = surface_ref.get_untracked() else {
                                        return;
                                    };
                                    begin_object_drag(&ev, &surface, &gesture, scene, view, &obj);
                                }
                            }
                            #[cfg(not(feature = "hydrate"))]
                            {
                                move |_ev: leptos::ev::PointerEvent| {}
                            }
                        };

                        let on_object_dblclick = {
                            #[cfg(feature = "hydrate")]
                            {
                                let obj = obj.clone();
                                move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    match obj.object_type {
                                        ObjectType::Youtube => {
                                            if let Some(video_id) = extract_youtube_id(&obj.content_url) {
                                                media.update(|m| {
                                                    m.play_youtube(obj.id, video_id);
                                                });
                                            }
                                        }
                                        ObjectType::Video => {
                                            media.update(|m| {
                                                m.play_video(obj.id, obj.content_url.clone());
                                            });
                                        }
                                        ObjectType::Image | ObjectType::Text => {}
                                    }
                                }
                            }
                            #[cfg(not(feature = "hydrate"))]
                            {
                                move |_ev: leptos::ev::MouseEvent| {}
                            }
                        };

                        let resize_handle = selected.then(|| {
                            let on_handle_pointer_down = {
                                #[cfg(feature = "hydrate")]
                                {
                                    let gesture = Rc::clone(&gesture);
                                    let obj = obj.clone();
                                    move |ev: leptos::ev::PointerEvent| {
                                        let Some(surface) = surface_ref.get_untracked() else {
                                            return;
                                        };
                                        begin_object_resize(&ev, &surface, &gesture, &obj);
                                    }
                                }
                                #[cfg(not(feature = "hydrate"))]
                                {
                                    move |_ev: leptos::ev::PointerEvent| {}
                                }
                            };
                            view! {
                                <div
                                    class="canvas-object__resize-handle"
                                    on:pointerdown=on_handle_pointer_down
                                ></div>
                            }
                        });

                        view! {
                            <div
                                class=class
                                style=style
                                on:pointerdown=on_object_pointer_down
                                on:dblclick=on_object_dblclick
                            >
                                <ObjectContent object=obj/>
                                {resize_handle}
                            </div>
                        }
                    })
                    .collect_view()
            })
        }
    };

    view! {
        <div
            class=surface_class
            node_ref=surface_ref
            on:pointerdown=on_surface_pointer_down
            on:pointermove=on_surface_pointer_move
            on:pointerup=on_surface_pointer_up
            on:pointercancel=on_surface_pointer_cancel
            on:wheel=on_wheel
        >
            <div class="canvas-world" style=world_style>
                {objects_view}
            </div>
        </div>
    }
}
