// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Service**: Resize Service endpoint and request timeout
//! - **Form**: Target dimension defaults and bounds
//! - **Loading**: Minimum visible loading duration
//! - **Download**: Suggested file name for saved results

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Endpoint of the Resize Service used when none is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://rescaling-image-springboot-rescaling-image-springboot.up.railway.app/resize-no-aspect-ratio";

/// Default request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Initial value of the width field.
pub const DEFAULT_TARGET_WIDTH: u32 = 1920;

/// Initial value of the height field.
pub const DEFAULT_TARGET_HEIGHT: u32 = 1080;

/// Smallest accepted target dimension.
pub const MIN_TARGET_DIMENSION: u32 = 1;

/// Largest accepted target dimension.
pub const MAX_TARGET_DIMENSION: u32 = 16_384;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Minimum time the loading indicator stays visible after a fast success.
pub const DEFAULT_MIN_LOADING_MS: u64 = 500;

/// Upper bound for the configurable minimum loading time.
pub const MAX_MIN_LOADING_MS: u64 = 5_000;

// ==========================================================================
// Download Defaults
// ==========================================================================

/// File stem suggested when saving a resized image.
pub const DOWNLOAD_FILE_STEM: &str = "resized_image";

/// Extension used when neither the response nor the source tells the format.
pub const FALLBACK_DOWNLOAD_EXTENSION: &str = "jpg";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(MIN_TARGET_DIMENSION > 0);
    assert!(MAX_TARGET_DIMENSION > MIN_TARGET_DIMENSION);
    assert!(DEFAULT_TARGET_WIDTH >= MIN_TARGET_DIMENSION);
    assert!(DEFAULT_TARGET_WIDTH <= MAX_TARGET_DIMENSION);
    assert!(DEFAULT_TARGET_HEIGHT >= MIN_TARGET_DIMENSION);
    assert!(DEFAULT_TARGET_HEIGHT <= MAX_TARGET_DIMENSION);

    assert!(DEFAULT_MIN_LOADING_MS <= MAX_MIN_LOADING_MS);
};
