//! Client-side upload validation gate.
//!
//! Mirrors the server's acceptance policy so a bad file is rejected
//! locally, synchronously, with a specific reason — nothing is sent over
//! the network for a file that would bounce anyway. Images are checked by
//! extension, MIME type, size, and leading file-signature bytes; videos
//! by extension, MIME type, and size.

#[cfg(test)]
#[path = "upload_check_test.rs"]
mod upload_check_test;

use thiserror::Error;

/// Maximum accepted image file size.
pub const IMAGE_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Maximum accepted video file size.
pub const VIDEO_MAX_BYTES: u64 = 50 * 1024 * 1024;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const IMAGE_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "webm"];
const VIDEO_MIME_TYPES: [&str; 2] = ["video/mp4", "video/webm"];

/// Leading-byte signatures per declared image MIME type.
const IMAGE_SIGNATURES: [(&str, &[u8]); 4] = [
    ("image/jpeg", &[0xFF, 0xD8, 0xFF]),
    ("image/png", &[0x89, 0x50, 0x4E, 0x47]),
    ("image/gif", &[0x47, 0x49, 0x46, 0x38]),
    ("image/webp", &[0x52, 0x49, 0x46, 0x46]),
];

/// Why an upload was refused locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("file is empty")]
    Empty,
    #[error("unsupported file extension \".{extension}\" (allowed: {allowed})")]
    Extension { extension: String, allowed: &'static str },
    #[error("unsupported file type \"{mime}\" (allowed: {allowed})")]
    Mime { mime: String, allowed: &'static str },
    #[error("file is too large ({size} bytes); the limit is {limit_mib} MiB")]
    TooLarge { size: u64, limit_mib: u64 },
    #[error("file content does not match its declared type")]
    Signature,
    #[error("only image and video files can be placed on the canvas")]
    UnsupportedKind,
    #[error("file could not be read")]
    Unreadable,
}

fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate an image upload: extension, MIME type, size, then the leading
/// bytes against the declared type's signature.
///
/// # Errors
///
/// Returns the first failed check as an [`UploadError`].
pub fn validate_image(name: &str, mime: &str, size: u64, head: &[u8]) -> Result<(), UploadError> {
    if size == 0 {
        return Err(UploadError::Empty);
    }
    let extension = extension_of(name).unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::Extension { extension, allowed: "jpg, jpeg, png, gif, webp" });
    }
    if !IMAGE_MIME_TYPES.contains(&mime) {
        return Err(UploadError::Mime {
            mime: mime.to_owned(),
            allowed: "image/jpeg, image/png, image/gif, image/webp",
        });
    }
    if size > IMAGE_MAX_BYTES {
        return Err(UploadError::TooLarge { size, limit_mib: IMAGE_MAX_BYTES / 1024 / 1024 });
    }
    let Some((_, signature)) = IMAGE_SIGNATURES.iter().find(|(m, _)| *m == mime) else {
        return Err(UploadError::Signature);
    };
    if head.len() < signature.len() || &head[..signature.len()] != *signature {
        return Err(UploadError::Signature);
    }
    Ok(())
}

/// Validate a video upload: extension, MIME type, size.
///
/// Video container signatures are offset-dependent, so no byte sniff is
/// attempted; the server re-validates on its side.
///
/// # Errors
///
/// Returns the first failed check as an [`UploadError`].
pub fn validate_video(name: &str, mime: &str, size: u64) -> Result<(), UploadError> {
    if size == 0 {
        return Err(UploadError::Empty);
    }
    let extension = extension_of(name).unwrap_or_default();
    if !VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::Extension { extension, allowed: "mp4, webm" });
    }
    if !VIDEO_MIME_TYPES.contains(&mime) {
        return Err(UploadError::Mime { mime: mime.to_owned(), allowed: "video/mp4, video/webm" });
    }
    if size > VIDEO_MAX_BYTES {
        return Err(UploadError::TooLarge { size, limit_mib: VIDEO_MAX_BYTES / 1024 / 1024 });
    }
    Ok(())
}

/// Validate a browser [`web_sys::File`] for the given target object type.
///
/// Reads the leading bytes for the image signature check.
///
/// # Errors
///
/// Returns the first failed check as an [`UploadError`].
#[cfg(feature = "hydrate")]
pub async fn validate_file(
    file: &web_sys::File,
    object_type: canvas::object::ObjectType,
) -> Result<(), UploadError> {
    use canvas::object::ObjectType;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size().max(0.0) as u64;
    match object_type {
        ObjectType::Image => {
            let head = read_leading_bytes(file, 16).await?;
            validate_image(&file.name(), &file.type_(), size, &head)
        }
        ObjectType::Video => validate_video(&file.name(), &file.type_(), size),
        ObjectType::Text | ObjectType::Youtube => Err(UploadError::UnsupportedKind),
    }
}

/// Read the first `count` bytes of a file.
#[cfg(feature = "hydrate")]
async fn read_leading_bytes(file: &web_sys::File, count: i32) -> Result<Vec<u8>, UploadError> {
    let blob = file
        .slice_with_i32_and_i32(0, count)
        .map_err(|_| UploadError::Unreadable)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(blob.array_buffer())
        .await
        .map_err(|_| UploadError::Unreadable)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
