//! REST API helpers for the canvas object endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a formatted status message on
//! failure; the repository records it in the scene state and leaves the
//! cache untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use canvas::object::{CanvasObject, ObjectPatch};
use canvas::viewport::ViewportBounds;

use super::types::CreateObjectRequest;

#[cfg(any(test, feature = "hydrate"))]
fn objects_query_url(bounds: &ViewportBounds) -> String {
    format!(
        "/api/objects?minX={}&minY={}&maxX={}&maxY={}",
        bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn object_url(id: i64) -> String {
    format!("/api/objects/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch all objects intersecting `bounds` via `GET /api/objects`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_objects(bounds: &ViewportBounds) -> Result<Vec<CanvasObject>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = objects_query_url(bounds);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("object query", resp.status()));
        }
        resp.json::<Vec<CanvasObject>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bounds;
        Err("not available on server".to_owned())
    }
}

/// Create an object via `POST /api/objects`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn create_object(request: &CreateObjectRequest) -> Result<CanvasObject, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/objects")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("object create", resp.status()));
        }
        resp.json::<CanvasObject>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Apply a partial update via `PUT /api/objects/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn update_object(id: i64, patch: &ObjectPatch) -> Result<CanvasObject, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = object_url(id);
        let resp = gloo_net::http::Request::put(&url)
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("object update", resp.status()));
        }
        resp.json::<CanvasObject>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        Err("not available on server".to_owned())
    }
}

/// Delete an object via `DELETE /api/objects/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn delete_object(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = object_url(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("object delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Upload a file and create its object via `POST /api/objects/upload`.
///
/// The server stores the file and assigns `content_url`; the multipart
/// fields mirror [`CreateObjectRequest`] minus the content URL.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request
/// fails, or the server responds with a non-OK status.
#[cfg(feature = "hydrate")]
#[allow(clippy::too_many_arguments)]
pub async fn upload_object(
    file: &web_sys::File,
    object_type: canvas::object::ObjectType,
    position_x: f64,
    position_y: f64,
    width: f64,
    height: f64,
    z_index: i32,
    user_id: i64,
) -> Result<CanvasObject, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_owned())?;
    let type_name = serde_json::to_value(object_type)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();
    form.append_with_blob("file", file)
        .map_err(|_| "failed to attach file".to_owned())?;
    for (key, value) in [
        ("objectType", type_name),
        ("positionX", position_x.to_string()),
        ("positionY", position_y.to_string()),
        ("width", width.to_string()),
        ("height", height.to_string()),
        ("zIndex", z_index.to_string()),
        ("userId", user_id.to_string()),
    ] {
        form.append_with_str(key, &value)
            .map_err(|_| "failed to build form data".to_owned())?;
    }

    let resp = gloo_net::http::Request::post("/api/objects/upload")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("upload", resp.status()));
    }
    resp.json::<CanvasObject>().await.map_err(|e| e.to_string())
}
