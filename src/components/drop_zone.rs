//! Drag-and-drop upload target wrapping the canvas area.

use leptos::prelude::*;

use crate::state::scene::SceneState;
use crate::state::view::ViewState;

#[cfg(feature = "hydrate")]
use canvas::camera::Point;
#[cfg(feature = "hydrate")]
use canvas::object::ObjectType;

#[cfg(feature = "hydrate")]
use crate::net::repository;

/// Wraps its children and accepts dropped image/video files, uploading
/// them centered on the drop point in canvas coordinates.
#[component]
pub fn DropZone(children: Children) -> impl IntoView {
    let scene = expect_context::<RwSignal<SceneState>>();
    let view = expect_context::<RwSignal<ViewState>>();
    let zone_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scene, view, zone_ref);
    }

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };

    let on_drop = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                let Some(file) = ev
                    .data_transfer()
                    .and_then(|transfer| transfer.files())
                    .and_then(|files| files.get(0))
                else {
                    return;
                };
                let Some(zone) = zone_ref.get_untracked() else {
                    return;
                };
                let rect = zone.get_bounding_client_rect();
                let screen = Point::new(
                    f64::from(ev.client_x()) - rect.left(),
                    f64::from(ev.client_y()) - rect.top(),
                );
                let world = view.with_untracked(|v| v.camera.screen_to_world(screen));

                let mime = file.type_();
                if mime.starts_with("image/") {
                    leptos::task::spawn_local(repository::upload_object(
                        scene,
                        file,
                        ObjectType::Image,
                        world.x - 150.0,
                        world.y - 150.0,
                        300.0,
                        300.0,
                    ));
                } else if mime.starts_with("video/") {
                    leptos::task::spawn_local(repository::upload_object(
                        scene,
                        file,
                        ObjectType::Video,
                        world.x - 280.0,
                        world.y - 157.5,
                        560.0,
                        315.0,
                    ));
                } else {
                    scene.update(|s| s.report_error("only image and video files can be dropped here"));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
            }
        }
    };

    view! {
        <div class="drop-zone" node_ref=zone_ref on:dragover=on_drag_over on:drop=on_drop>
            {children()}
        </div>
    }
}
