// SPDX-License-Identifier: MPL-2.0
//! Client for the remote Resize Service.
//!
//! The service contract is small: a `multipart/form-data` POST carrying the
//! fields `file`, `width` and `height`, answered with the raw bytes of the
//! resized image. Any non-2xx status, transport error or undecodable body is a
//! failure; there is no retry.
//!
//! [`resize`] performs the HTTP exchange only. [`resize_and_decode`] is the
//! full submit pipeline used by the form: exchange, minimum visible loading
//! time, then local decode to learn the result's dimensions.

use crate::error::ResizeError;
use crate::media::{self, ImageData};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Multipart field carrying the image bytes.
pub const FIELD_FILE: &str = "file";
/// Multipart field carrying the target width.
pub const FIELD_WIDTH: &str = "width";
/// Multipart field carrying the target height.
pub const FIELD_HEIGHT: &str = "height";

/// Where and how to reach the Resize Service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub endpoint: Url,
    pub timeout: Duration,
    /// Minimum time between submit and a successful result being shown.
    pub min_loading: Duration,
}

impl ServiceSettings {
    /// Builds settings from the raw endpoint string.
    ///
    /// # Errors
    ///
    /// Returns the URL parse error message if `endpoint` is not an absolute
    /// `http`/`https` URL.
    pub fn new(endpoint: &str, timeout: Duration, min_loading: Duration) -> Result<Self, String> {
        let endpoint = Url::parse(endpoint).map_err(|e| e.to_string())?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(format!("unsupported scheme: {}", endpoint.scheme()));
        }
        Ok(Self {
            endpoint,
            timeout,
            min_loading,
        })
    }
}

/// One upload, built at submit time and not stored.
#[derive(Debug, Clone)]
pub struct ResizeRequest {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

/// Raw service answer before decoding.
#[derive(Debug, Clone)]
pub struct ResizeResponse {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// A successful, decoded resize result.
///
/// `bytes` are exactly what the service returned; `image` is the decoded copy
/// used for display. Dropping the value releases both.
#[derive(Debug, Clone)]
pub struct ResizedImage {
    pub image: ImageData,
    pub bytes: Arc<Vec<u8>>,
    pub content_type: Option<String>,
}

fn build_form(request: &ResizeRequest) -> Result<Form, ResizeError> {
    let file_part = Part::bytes(request.bytes.as_ref().clone())
        .file_name(request.file_name.clone())
        .mime_str(request.mime)
        .map_err(|e| ResizeError::Network(e.to_string()))?;

    Ok(Form::new()
        .part(FIELD_FILE, file_part)
        .text(FIELD_WIDTH, request.width.to_string())
        .text(FIELD_HEIGHT, request.height.to_string()))
}

fn classify(err: &reqwest::Error) -> ResizeError {
    if err.is_timeout() {
        ResizeError::Timeout
    } else {
        ResizeError::Network(err.to_string())
    }
}

/// Posts one resize request and returns the raw response body.
///
/// # Errors
///
/// - [`ResizeError::Network`] for connection or body transfer failures
/// - [`ResizeError::Timeout`] when the configured timeout elapses
/// - [`ResizeError::HttpStatus`] for any non-2xx status
pub async fn resize(
    settings: &ServiceSettings,
    request: &ResizeRequest,
) -> Result<ResizeResponse, ResizeError> {
    let client = reqwest::Client::builder()
        .timeout(settings.timeout)
        .user_agent(concat!("IcedResize/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ResizeError::Network(e.to_string()))?;

    let form = build_form(request)?;

    tracing::info!(
        endpoint = %settings.endpoint,
        file = %request.file_name,
        width = request.width,
        height = request.height,
        "sending resize request"
    );

    let response = client
        .post(settings.endpoint.clone())
        .multipart(form)
        .send()
        .await
        .map_err(|e| classify(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResizeError::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = response.bytes().await.map_err(|e| classify(&e))?;

    tracing::info!(
        status = status.as_u16(),
        len = bytes.len(),
        content_type = content_type.as_deref().unwrap_or("-"),
        "resize response received"
    );

    Ok(ResizeResponse {
        bytes: bytes.to_vec(),
        content_type,
    })
}

/// Runs the whole submit pipeline: request, minimum loading time, decode.
///
/// The minimum loading time is measured from the call and only applies to
/// successful exchanges, so a fast answer does not flash the loading state.
///
/// # Errors
///
/// Everything [`resize`] returns, plus [`ResizeError::MalformedBody`] when
/// the body does not decode as an image.
pub async fn resize_and_decode(
    settings: ServiceSettings,
    request: ResizeRequest,
) -> Result<ResizedImage, ResizeError> {
    let started = Instant::now();
    let result = pipeline(&settings, &request, started).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, file = %request.file_name, "resize failed");
    }
    result
}

async fn pipeline(
    settings: &ServiceSettings,
    request: &ResizeRequest,
    started: Instant,
) -> Result<ResizedImage, ResizeError> {
    let response = resize(settings, request).await?;

    let remaining = settings.min_loading.saturating_sub(started.elapsed());
    if !remaining.is_zero() {
        tokio::time::sleep(remaining).await;
    }

    let bytes = Arc::new(response.bytes);
    let image = tokio::task::spawn_blocking({
        let bytes = Arc::clone(&bytes);
        move || media::decode(&bytes)
    })
    .await
    .map_err(|e| ResizeError::MalformedBody(e.to_string()))?
    .map_err(|e| ResizeError::MalformedBody(e.to_string()))?;

    Ok(ResizedImage {
        image,
        bytes,
        content_type: response.content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_reject_relative_url() {
        let result = ServiceSettings::new("/resize", Duration::from_secs(1), Duration::ZERO);
        assert!(result.is_err());
    }

    #[test]
    fn settings_reject_non_http_scheme() {
        let result = ServiceSettings::new(
            "ftp://example.test/resize",
            Duration::from_secs(1),
            Duration::ZERO,
        );
        assert!(result.unwrap_err().contains("ftp"));
    }

    #[test]
    fn settings_accept_default_endpoint() {
        let settings = ServiceSettings::new(
            crate::config::DEFAULT_ENDPOINT,
            Duration::from_secs(60),
            Duration::from_millis(500),
        )
        .unwrap();
        assert_eq!(settings.endpoint.scheme(), "https");
    }

    #[test]
    fn form_builds_with_declared_mime() {
        let request = ResizeRequest {
            file_name: "a.png".into(),
            mime: "image/png",
            bytes: Arc::new(vec![1, 2, 3]),
            width: 10,
            height: 20,
        };
        let form = build_form(&request).unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn form_rejects_invalid_mime() {
        let request = ResizeRequest {
            file_name: "a.png".into(),
            mime: "not a mime",
            bytes: Arc::new(Vec::new()),
            width: 1,
            height: 1,
        };
        assert!(matches!(build_form(&request), Err(ResizeError::Network(_))));
    }
}
