// SPDX-License-Identifier: MPL-2.0
//! Local image handling: header probing, decoding for display, and the
//! format helpers used to label uploads and saved results.
//!
//! Nothing here resamples pixels; resizing is the remote service's job.

pub mod format;

use crate::config::MAX_TARGET_DIMENSION;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{ImageReader, Limits};
use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub dimensions: Dimensions,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            dimensions: Dimensions::new(width, height),
        }
    }
}

/// Decoder allocation budget: a full-size RGBA result with 16-bit channels.
const MAX_DECODE_ALLOC: u64 = MAX_TARGET_DIMENSION as u64 * MAX_TARGET_DIMENSION as u64 * 8;

/// Reads a file fully into shared memory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<Arc<Vec<u8>>> {
    Ok(Arc::new(tokio::fs::read(path).await?))
}

/// Reads only the image header to find its intrinsic dimensions.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a recognized image format
/// or the header is corrupt.
pub fn probe_dimensions(bytes: &[u8]) -> Result<Dimensions> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    if reader.format().is_none() {
        return Err(Error::Decode("unrecognized image format".to_string()));
    }
    let (width, height) = reader.into_dimensions()?;
    Ok(Dimensions::new(width, height))
}

/// Fully decodes encoded image bytes into displayable RGBA pixels.
///
/// Any image up to `MAX_TARGET_DIMENSION` on each side is accepted; the
/// `image` crate's default allocation cap would reject the larger ones.
/// Blocking: call from `spawn_blocking` on async paths.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes cannot be decoded or exceed the
/// limits above.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let mut reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    reader.limits(decode_limits());
    let decoded = reader.decode()?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

fn decode_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_TARGET_DIMENSION);
    limits.max_image_height = Some(MAX_TARGET_DIMENSION);
    limits.max_alloc = Some(MAX_DECODE_ALLOC);
    limits
}

#[cfg(test)]
pub(crate) mod test_images {
    use image_rs::{ImageFormat, RgbImage, RgbaImage};
    use std::io::Cursor;

    pub fn png(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbaImage::new(width, height)
            .write_to(&mut out, ImageFormat::Png)
            .expect("failed to encode png");
        out.into_inner()
    }

    pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbImage::new(width, height)
            .write_to(&mut out, ImageFormat::Jpeg)
            .expect("failed to encode jpeg");
        out.into_inner()
    }

    /// A 24-bit BMP header declaring `width` x `height` with no pixel data.
    pub fn bmp_header(width: u32, height: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(54);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&54u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&54u32.to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&(width as i32).to_le_bytes());
        out.extend_from_slice(&(height as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&[0u8; 24]);
        out
    }
}
