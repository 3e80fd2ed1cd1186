// SPDX-License-Identifier: MPL-2.0
//! Image format lookups by extension, MIME type, and content sniffing.

use crate::config::{DOWNLOAD_FILE_STEM, FALLBACK_DOWNLOAD_EXTENSION};
use image_rs::ImageFormat;
use std::path::Path;

/// Extensions offered by the open dialog and accepted on drop.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// MIME type sent for uploads whose extension is not an image format.
const OCTET_STREAM: &str = "application/octet-stream";

/// Whether the path has one of [`IMAGE_EXTENSIONS`] (case-insensitive).
#[must_use]
pub fn is_supported_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// MIME type to declare for an uploaded file, from its extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(OCTET_STREAM)
}

/// Preferred extension for a `Content-Type` header value, if it names an image format.
#[must_use]
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    ImageFormat::from_mime_type(essence).and_then(preferred_extension)
}

/// Preferred extension for the format sniffed from the bytes' magic number.
#[must_use]
pub fn extension_for_bytes(bytes: &[u8]) -> Option<&'static str> {
    image_rs::guess_format(bytes)
        .ok()
        .and_then(preferred_extension)
}

fn preferred_extension(format: ImageFormat) -> Option<&'static str> {
    format.extensions_str().first().copied()
}

/// File name suggested when saving a resized image.
///
/// The extension is taken from the declared content type, then from the
/// bytes themselves, then from the source file, and finally defaults to `jpg`.
#[must_use]
pub fn download_file_name(content_type: Option<&str>, bytes: &[u8], source: Option<&Path>) -> String {
    let from_source = source
        .filter(|path| is_supported_image_path(path))
        .and_then(|path| path.extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let extension = content_type
        .and_then(extension_for_content_type)
        .or_else(|| extension_for_bytes(bytes))
        .map(str::to_string)
        .or(from_source)
        .unwrap_or_else(|| FALLBACK_DOWNLOAD_EXTENSION.to_string());

    format!("{DOWNLOAD_FILE_STEM}.{extension}")
}
