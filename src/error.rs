// SPDX-License-Identifier: MPL-2.0
//! Error types.
//!
//! [`Error`] covers local plumbing (files, settings, image decoding) and is
//! only logged or turned into a toast. [`ResizeError`] is what the form shows
//! in its error banner, so each variant carries a Fluent key. Both derive
//! `thiserror`; sources are flattened to strings so messages stay `Clone`.

use std::fmt;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Decode Error: {0}")]
    Decode(String),
}

/// Which of the two target dimension fields a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Width,
    Height,
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionField::Width => write!(f, "width"),
            DimensionField::Height => write!(f, "height"),
        }
    }
}

/// Reasons a resize round trip can fail, from local validation to the
/// service response.
///
/// Every variant maps to a localized message through [`ResizeError::i18n_key`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResizeError {
    /// Submit was requested before any file was picked.
    #[error("no file selected")]
    NoFileSelected,

    /// A target dimension field does not hold a usable integer.
    #[error("invalid {field} value {input:?}")]
    InvalidDimension {
        field: DimensionField,
        input: String,
    },

    /// The request could not be built or the transport failed.
    #[error("request failed: {0}")]
    Network(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("service responded with HTTP {0}")]
    HttpStatus(u16),

    /// The response body is not a decodable image.
    #[error("response is not a decodable image: {0}")]
    MalformedBody(String),
}

impl ResizeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ResizeError::NoFileSelected => "error-no-file-selected",
            ResizeError::InvalidDimension {
                field: DimensionField::Width,
                ..
            } => "error-invalid-width",
            ResizeError::InvalidDimension {
                field: DimensionField::Height,
                ..
            } => "error-invalid-height",
            ResizeError::Network(_) => "error-network",
            ResizeError::Timeout => "error-timeout",
            ResizeError::HttpStatus(_) => "error-http-status",
            ResizeError::MalformedBody(_) => "error-malformed-body",
        }
    }

    /// Arguments interpolated into the localized message.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            ResizeError::InvalidDimension { input, .. } => vec![
                ("value", input.clone()),
                (
                    "max",
                    crate::config::MAX_TARGET_DIMENSION.to_string(),
                ),
            ],
            ResizeError::HttpStatus(status) => vec![("status", status.to_string())],
            _ => Vec::new(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
