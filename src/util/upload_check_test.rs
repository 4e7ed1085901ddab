use super::*;

const PNG_HEAD: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_HEAD: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];
const GIF_HEAD: [u8; 6] = [0x47, 0x49, 0x46, 0x38, 0x39, 0x61];
const WEBP_HEAD: [u8; 4] = [0x52, 0x49, 0x46, 0x46];

// =============================================================
// Image validation
// =============================================================

#[test]
fn accepts_well_formed_images() {
    assert_eq!(validate_image("photo.png", "image/png", 1024, &PNG_HEAD), Ok(()));
    assert_eq!(validate_image("photo.JPG", "image/jpeg", 1024, &JPEG_HEAD), Ok(()));
    assert_eq!(validate_image("anim.gif", "image/gif", 1024, &GIF_HEAD), Ok(()));
    assert_eq!(validate_image("pic.webp", "image/webp", 1024, &WEBP_HEAD), Ok(()));
}

#[test]
fn rejects_empty_file() {
    assert_eq!(validate_image("photo.png", "image/png", 0, &PNG_HEAD), Err(UploadError::Empty));
}

#[test]
fn rejects_disallowed_extension() {
    let err = validate_image("drawing.svg", "image/png", 1024, &PNG_HEAD).unwrap_err();
    assert!(matches!(err, UploadError::Extension { ref extension, .. } if extension == "svg"));
}

#[test]
fn rejects_missing_extension() {
    assert!(matches!(
        validate_image("noext", "image/png", 1024, &PNG_HEAD),
        Err(UploadError::Extension { .. })
    ));
}

#[test]
fn rejects_disallowed_mime_type() {
    let err = validate_image("photo.png", "image/tiff", 1024, &PNG_HEAD).unwrap_err();
    assert!(matches!(err, UploadError::Mime { ref mime, .. } if mime == "image/tiff"));
}

#[test]
fn rejects_six_mebibyte_png_with_size_reason() {
    let size = 6 * 1024 * 1024;
    let err = validate_image("big.png", "image/png", size, &PNG_HEAD).unwrap_err();
    assert_eq!(err, UploadError::TooLarge { size, limit_mib: 5 });
    assert!(err.to_string().contains("5 MiB"));
}

#[test]
fn accepts_exactly_five_mebibytes() {
    assert_eq!(validate_image("ok.png", "image/png", IMAGE_MAX_BYTES, &PNG_HEAD), Ok(()));
}

#[test]
fn rejects_signature_mismatch() {
    // PNG extension and MIME, JPEG bytes.
    assert_eq!(
        validate_image("photo.png", "image/png", 1024, &JPEG_HEAD),
        Err(UploadError::Signature)
    );
}

#[test]
fn rejects_truncated_head() {
    assert_eq!(
        validate_image("photo.png", "image/png", 1024, &PNG_HEAD[..2]),
        Err(UploadError::Signature)
    );
}

// =============================================================
// Video validation
// =============================================================

#[test]
fn accepts_well_formed_videos() {
    assert_eq!(validate_video("clip.mp4", "video/mp4", 1024), Ok(()));
    assert_eq!(validate_video("clip.webm", "video/webm", 1024), Ok(()));
}

#[test]
fn rejects_video_extension_and_mime_mismatches() {
    assert!(matches!(
        validate_video("clip.avi", "video/mp4", 1024),
        Err(UploadError::Extension { .. })
    ));
    assert!(matches!(
        validate_video("clip.mp4", "video/quicktime", 1024),
        Err(UploadError::Mime { .. })
    ));
}

#[test]
fn rejects_oversized_video() {
    let size = VIDEO_MAX_BYTES + 1;
    assert_eq!(
        validate_video("clip.mp4", "video/mp4", size),
        Err(UploadError::TooLarge { size, limit_mib: 50 })
    );
}

// =============================================================
// Messages
// =============================================================

#[test]
fn reasons_are_descriptive() {
    let err = validate_image("drawing.svg", "image/png", 1024, &PNG_HEAD).unwrap_err();
    assert!(err.to_string().contains(".svg"));
    assert!(err.to_string().contains("jpg, jpeg, png, gif, webp"));
}
