//! Object repository: the one writer of the scene cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three mutation sources meet here: viewport queries, locally initiated
//! create/update/delete calls, and remote changes pushed over the
//! websocket. Local mutations are optimistic-free — the cache changes
//! only after the server's canonical response arrives; a failure leaves
//! the cache exactly as it was and records a user-visible error. Remote
//! changes go through [`apply_remote_change`], whose guards make replayed
//! or racing notifications idempotent.

#[cfg(test)]
#[path = "repository_test.rs"]
mod repository_test;

use canvas::object::ObjectPatch;
use canvas::viewport::ViewportBounds;
use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{ChangeFrame, CreateObjectRequest};
use crate::state::media::MediaState;
use crate::state::scene::SceneState;

/// Owner recorded on objects created from this client.
// TODO: wire the authenticated user id once the auth layer lands.
pub const DEFAULT_USER_ID: i64 = 1;

/// Merge a push-received change into the cache.
///
/// CREATE is a no-op if the id already exists; UPDATE replaces by id and
/// is a no-op if the id is absent; DELETE removes by id, clearing a
/// matching selection and closing a matching text-edit session. Applying
/// the same CREATE or UPDATE twice leaves the cache unchanged the second
/// time.
pub fn apply_remote_change(scene: &mut SceneState, media: &mut MediaState, change: &ChangeFrame) {
    match change {
        ChangeFrame::Create { object } => {
            scene.apply_created(object.clone());
        }
        ChangeFrame::Update { object } => {
            scene.objects.replace(object.clone());
        }
        ChangeFrame::Delete { object_id } => {
            scene.apply_deleted(*object_id);
            media.close_editor_for(*object_id);
        }
    }
}

/// Query the server for the objects in `bounds` and replace the cached
/// set with the response.
pub async fn refresh_viewport(scene: RwSignal<SceneState>, bounds: ViewportBounds) {
    scene.update(|s| s.loading = true);
    match api::fetch_objects(&bounds).await {
        Ok(objects) => scene.update(|s| {
            s.replace_viewport(objects);
            s.loading = false;
        }),
        Err(e) => {
            leptos::logging::warn!("viewport query failed: {e}");
            scene.update(|s| {
                s.loading = false;
                s.report_error(format!("could not load objects: {e}"));
            });
        }
    }
}

/// Send a creation intent and insert the canonical response.
pub async fn create_object(scene: RwSignal<SceneState>, request: CreateObjectRequest) {
    match api::create_object(&request).await {
        Ok(created) => scene.update(|s| {
            s.apply_created(created);
        }),
        Err(e) => {
            leptos::logging::warn!("object create failed: {e}");
            scene.update(|s| s.report_error(format!("could not create object: {e}")));
        }
    }
}

/// Send a partial-update intent and write the canonical response.
///
/// Patches that violate the minimum object size are refused locally; the
/// cache (and therefore the visual) retains the prior dimensions.
pub async fn update_object(scene: RwSignal<SceneState>, id: i64, patch: ObjectPatch) {
    if !patch.respects_size_floor() {
        leptos::logging::warn!("refusing below-minimum resize for object {id}");
        return;
    }
    match api::update_object(id, &patch).await {
        Ok(updated) => scene.update(|s| s.apply_updated(updated)),
        Err(e) => {
            leptos::logging::warn!("object update failed: {e}");
            scene.update(|s| s.report_error(format!("could not update object: {e}")));
        }
    }
}

/// Send a delete intent; on success remove the object and close any UI
/// attached to it.
pub async fn delete_object(scene: RwSignal<SceneState>, media: RwSignal<MediaState>, id: i64) {
    match api::delete_object(id).await {
        Ok(()) => {
            scene.update(|s| s.apply_deleted(id));
            media.update(|m| m.close_editor_for(id));
        }
        Err(e) => {
            leptos::logging::warn!("object delete failed: {e}");
            scene.update(|s| s.report_error(format!("could not delete object: {e}")));
        }
    }
}

/// Validate a file locally, upload it, and insert the created object.
///
/// The validation gate runs before any network call; a rejected file
/// surfaces its specific reason and nothing is sent.
#[cfg(feature = "hydrate")]
#[allow(clippy::too_many_arguments)]
pub async fn upload_object(
    scene: RwSignal<SceneState>,
    file: web_sys::File,
    object_type: canvas::object::ObjectType,
    position_x: f64,
    position_y: f64,
    width: f64,
    height: f64,
) {
    use leptos::prelude::GetUntracked;

    if let Err(reason) = crate::util::upload_check::validate_file(&file, object_type).await {
        leptos::logging::warn!("upload rejected: {reason}");
        scene.update(|s| s.report_error(reason.to_string()));
        return;
    }

    let z_index = scene.get_untracked().objects.next_z_index();
    match api::upload_object(
        &file,
        object_type,
        position_x,
        position_y,
        width,
        height,
        z_index,
        DEFAULT_USER_ID,
    )
    .await
    {
        Ok(created) => scene.update(|s| {
            s.apply_created(created);
        }),
        Err(e) => {
            leptos::logging::warn!("upload failed: {e}");
            scene.update(|s| s.report_error(format!("could not upload file: {e}")));
        }
    }
}
