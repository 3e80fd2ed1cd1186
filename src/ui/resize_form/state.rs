// SPDX-License-Identifier: MPL-2.0
//! Form data types and the pure transitions between view states.

use crate::config::{MAX_TARGET_DIMENSION, MIN_TARGET_DIMENSION};
use crate::error::{DimensionField, ResizeError};
use crate::media::{format, Dimensions};
use crate::service::{ResizeRequest, ResizedImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Target width or height, guaranteed to be within `1..=16384`.
///
/// Parsing happens once, at submit time; the text fields keep whatever the
/// user typed until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimension(u32);

impl TargetDimension {
    /// Parses field text, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidDimension`] for empty, non-numeric,
    /// zero, or oversized input.
    pub fn parse(field: DimensionField, input: &str) -> Result<Self, ResizeError> {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|value| (MIN_TARGET_DIMENSION..=MAX_TARGET_DIMENSION).contains(value))
            .map(Self)
            .ok_or_else(|| ResizeError::InvalidDimension {
                field,
                input: input.to_string(),
            })
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// The image picked by the user.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// Identifies this pick; probe results for older picks are ignored.
    pub pick_id: u64,
    pub path: PathBuf,
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Arc<Vec<u8>>,
    /// Intrinsic size, once the header probe has returned.
    pub dimensions: Option<Dimensions>,
    /// The header probe returned an error.
    pub probe_failed: bool,
}

impl SelectedFile {
    pub fn new(pick_id: u64, path: PathBuf, bytes: Arc<Vec<u8>>) -> Self {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();
        let mime = format::mime_for_path(&path);
        Self {
            pick_id,
            path,
            file_name,
            mime,
            bytes,
            dimensions: None,
            probe_failed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Which part of the round trip the form is in.
///
/// `Ready` owns the result, so it is released as soon as the state moves on.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        seq: u64,
    },
    Ready(ResizedImage),
    Failed(ResizeError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    pub fn result(&self) -> Option<&ResizedImage> {
        match self {
            ViewState::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ResizeError> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Applies a completed request if it is the one currently awaited.
    ///
    /// Returns `false` (and leaves the state untouched) for stale responses.
    pub fn complete(&mut self, seq: u64, result: Result<ResizedImage, ResizeError>) -> bool {
        match self {
            ViewState::Loading { seq: current } if *current == seq => {
                *self = match result {
                    Ok(image) => ViewState::Ready(image),
                    Err(err) => ViewState::Failed(err),
                };
                true
            }
            _ => false,
        }
    }
}

/// Builds the request for the current inputs, or explains why it cannot be sent.
///
/// # Errors
///
/// [`ResizeError::NoFileSelected`] without a file, and
/// [`ResizeError::InvalidDimension`] for the first field that does not parse.
pub fn build_request(
    file: Option<&SelectedFile>,
    width_input: &str,
    height_input: &str,
) -> Result<ResizeRequest, ResizeError> {
    let file = file.ok_or(ResizeError::NoFileSelected)?;
    let width = TargetDimension::parse(DimensionField::Width, width_input)?;
    let height = TargetDimension::parse(DimensionField::Height, height_input)?;

    Ok(ResizeRequest {
        file_name: file.file_name.clone(),
        mime: file.mime,
        bytes: Arc::clone(&file.bytes),
        width: width.value(),
        height: height.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;

    fn resized(width: u32, height: u32) -> ResizedImage {
        ResizedImage {
            image: ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize]),
            bytes: Arc::new(vec![width as u8, height as u8]),
            content_type: Some("image/jpeg".into()),
        }
    }

    #[test]
    fn target_dimension_trims_and_bounds() {
        assert_eq!(
            TargetDimension::parse(DimensionField::Width, " 1920 ").map(TargetDimension::value),
            Ok(1920)
        );
        assert_eq!(
            TargetDimension::parse(DimensionField::Height, "16384").map(TargetDimension::value),
            Ok(16384)
        );
        for bad in ["", "0", "-5", "12.5", "abc", "16385", "99999999999"] {
            assert!(
                TargetDimension::parse(DimensionField::Width, bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_dimension_keeps_raw_input() {
        let err = TargetDimension::parse(DimensionField::Height, "1O80").unwrap_err();
        assert_eq!(
            err,
            ResizeError::InvalidDimension {
                field: DimensionField::Height,
                input: "1O80".into(),
            }
        );
    }

    #[test]
    fn selected_file_derives_name_and_mime() {
        let file = SelectedFile::new(1, PathBuf::from("/tmp/photo.png"), Arc::new(vec![]));
        assert_eq!(file.file_name, "photo.png");
        assert_eq!(file.mime, "image/png");
        assert!(file.dimensions.is_none());
    }

    #[test]
    fn build_request_requires_file() {
        assert_eq!(
            build_request(None, "1920", "1080").unwrap_err(),
            ResizeError::NoFileSelected
        );
    }

    #[test]
    fn build_request_checks_width_before_height() {
        let file = SelectedFile::new(1, PathBuf::from("a.jpg"), Arc::new(vec![1]));
        let err = build_request(Some(&file), "x", "y").unwrap_err();
        assert_eq!(err.i18n_key(), "error-invalid-width");
    }

    #[test]
    fn build_request_shares_file_bytes() {
        let file = SelectedFile::new(1, PathBuf::from("a.jpg"), Arc::new(vec![9, 8, 7]));
        let request = build_request(Some(&file), "640", "480").unwrap();
        assert!(Arc::ptr_eq(&request.bytes, &file.bytes));
        assert_eq!((request.width, request.height), (640, 480));
        assert_eq!(request.mime, "image/jpeg");
        assert_eq!(request.file_name, "a.jpg");
    }

    #[test]
    fn complete_ignores_other_sequence_numbers() {
        let mut view = ViewState::Loading { seq: 2 };
        assert!(!view.complete(1, Ok(resized(4, 4))));
        assert!(view.is_loading());

        assert!(view.complete(2, Err(ResizeError::Timeout)));
        assert_eq!(view.error(), Some(&ResizeError::Timeout));

        assert!(!view.complete(2, Ok(resized(4, 4))));
        assert!(view.result().is_none());
    }

    #[test]
    fn complete_outside_loading_is_ignored() {
        let mut view = ViewState::Idle;
        assert!(!view.complete(1, Ok(resized(2, 2))));
        assert!(matches!(view, ViewState::Idle));
    }
}
