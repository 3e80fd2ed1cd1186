// SPDX-License-Identifier: MPL-2.0
//! Resize Service client tests against an in-process HTTP server.

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use iced_resize::error::ResizeError;
use iced_resize::media::Dimensions;
use iced_resize::service::{self, ResizeRequest, ServiceSettings};
use iced_resize::ui::resize_form::{self, Event, Message, ViewState};
use image_rs::{ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

/// One multipart field as the server saw it.
#[derive(Debug, Clone)]
struct Field {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

#[derive(Default)]
struct Recorder {
    requests: Mutex<Vec<Vec<Field>>>,
}

impl Recorder {
    fn requests(&self) -> Vec<Vec<Field>> {
        self.requests.lock().expect("recorder lock").clone()
    }
}

fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbaImage::new(width, height)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut out, ImageFormat::Jpeg)
        .expect("encode jpeg");
    out.into_inner()
}

async fn record(recorder: &Recorder, mut multipart: Multipart) {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.expect("field bytes").to_vec();
        fields.push(Field {
            name,
            file_name,
            content_type,
            data,
        });
    }
    recorder.requests.lock().expect("recorder lock").push(fields);
}

/// Starts a server answering every POST on `/resize` with `status`, `content_type` and `body`.
async fn spawn_service(
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
) -> (SocketAddr, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let body = Arc::new(body);

    let router = Router::new()
        .route(
            "/resize",
            post(
                move |State(recorder): State<Arc<Recorder>>, multipart: Multipart| {
                    let body = Arc::clone(&body);
                    async move {
                        record(&recorder, multipart).await;
                        (
                            status,
                            [(header::CONTENT_TYPE, content_type)],
                            body.as_ref().clone(),
                        )
                            .into_response()
                    }
                },
            ),
        )
        .with_state(Arc::clone(&recorder));

    (serve(router).await, recorder)
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

fn settings(addr: SocketAddr, min_loading: Duration) -> ServiceSettings {
    ServiceSettings::new(
        &format!("http://{addr}/resize"),
        Duration::from_secs(10),
        min_loading,
    )
    .expect("valid endpoint")
}

fn png_request(width: u32, height: u32) -> ResizeRequest {
    ResizeRequest {
        file_name: "photo.png".into(),
        mime: "image/png",
        bytes: Arc::new(encode_png(800, 600)),
        width,
        height,
    }
}

#[tokio::test]
async fn sends_exactly_file_width_and_height() {
    let (addr, recorder) =
        spawn_service(StatusCode::OK, "image/jpeg", encode_jpeg(64, 36)).await;
    let request = png_request(1920, 1080);

    service::resize(&settings(addr, Duration::ZERO), &request)
        .await
        .expect("resize succeeds");

    let requests = recorder.requests();
    assert_eq!(requests.len(), 1);
    let fields = &requests[0];
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["file", "width", "height"]);

    assert_eq!(fields[0].data, *request.bytes);
    assert_eq!(fields[0].file_name.as_deref(), Some("photo.png"));
    assert_eq!(fields[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(fields[1].data, b"1920");
    assert_eq!(fields[2].data, b"1080");
}

#[tokio::test]
async fn success_returns_exact_bytes_and_decoded_dimensions() {
    let jpeg = encode_jpeg(1920, 1080);
    let (addr, _recorder) = spawn_service(StatusCode::OK, "image/jpeg", jpeg.clone()).await;

    let result = service::resize_and_decode(settings(addr, Duration::ZERO), png_request(1920, 1080))
        .await
        .expect("resize succeeds");

    assert_eq!(result.image.dimensions, Dimensions::new(1920, 1080));
    assert_eq!(*result.bytes, jpeg);
    assert_eq!(result.content_type.as_deref(), Some("image/jpeg"));
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let (addr, _recorder) =
        spawn_service(StatusCode::INTERNAL_SERVER_ERROR, "text/plain", b"boom".to_vec()).await;

    let result =
        service::resize_and_decode(settings(addr, Duration::ZERO), png_request(10, 10)).await;

    assert_eq!(result.unwrap_err(), ResizeError::HttpStatus(500));
}

#[tokio::test]
async fn non_image_body_is_malformed() {
    let (addr, _recorder) =
        spawn_service(StatusCode::OK, "text/html", b"<html>oops</html>".to_vec()).await;

    let result =
        service::resize_and_decode(settings(addr, Duration::ZERO), png_request(10, 10)).await;

    assert!(matches!(result, Err(ResizeError::MalformedBody(_))));
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let result =
        service::resize_and_decode(settings(addr, Duration::ZERO), png_request(10, 10)).await;

    assert!(matches!(result, Err(ResizeError::Network(_))));
}

#[tokio::test]
async fn hung_service_times_out() {
    let router = Router::new().route(
        "/resize",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK
        }),
    );
    let addr = serve(router).await;
    let settings = ServiceSettings::new(
        &format!("http://{addr}/resize"),
        Duration::from_millis(200),
        Duration::ZERO,
    )
    .expect("valid endpoint");

    let result = service::resize_and_decode(settings, png_request(10, 10)).await;

    assert_eq!(result.unwrap_err(), ResizeError::Timeout);
}

#[tokio::test]
async fn fast_success_is_held_for_minimum_loading_time() {
    let (addr, _recorder) = spawn_service(StatusCode::OK, "image/png", encode_png(4, 4)).await;
    let min_loading = Duration::from_millis(300);

    let started = Instant::now();
    service::resize_and_decode(settings(addr, min_loading), png_request(4, 4))
        .await
        .expect("resize succeeds");

    assert!(started.elapsed() >= min_loading);
}

#[tokio::test]
async fn failure_is_not_delayed_by_minimum_loading_time() {
    let (addr, _recorder) =
        spawn_service(StatusCode::BAD_GATEWAY, "text/plain", Vec::new()).await;

    let started = Instant::now();
    let result =
        service::resize_and_decode(settings(addr, Duration::from_secs(3)), png_request(4, 4))
            .await;

    assert_eq!(result.unwrap_err(), ResizeError::HttpStatus(502));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn form_round_trip_from_800x600_png() {
    let jpeg = encode_jpeg(1920, 1080);
    let (addr, recorder) = spawn_service(StatusCode::OK, "image/jpeg", jpeg.clone()).await;
    let png = Arc::new(encode_png(800, 600));

    let mut form = resize_form::State::default();
    let Event::ReadFile { pick_id, path } =
        form.update(Message::FileChosen(Some(PathBuf::from("photo.png"))))
    else {
        panic!("expected a read request");
    };
    let Event::ProbeFile { bytes, .. } = form.update(Message::FileRead {
        pick_id,
        path,
        result: Ok(Arc::clone(&png)),
    }) else {
        panic!("expected a probe request");
    };
    form.update(Message::FileProbed {
        pick_id,
        result: iced_resize::media::probe_dimensions(&bytes),
    });
    assert_eq!(
        form.file().and_then(|f| f.dimensions),
        Some(Dimensions::new(800, 600))
    );

    let Event::SendRequest { seq, request } = form.update(Message::Submit) else {
        panic!("expected a request");
    };
    assert!(form.is_loading());

    let result = service::resize_and_decode(settings(addr, Duration::ZERO), request).await;
    form.update(Message::ResizeCompleted { seq, result });

    let ViewState::Ready(result) = form.view_state() else {
        panic!("expected a ready result, got {:?}", form.view_state());
    };
    assert_eq!(result.image.dimensions, Dimensions::new(1920, 1080));
    assert_eq!(*result.bytes, jpeg);

    let sent = recorder.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][0].data, *png);
}
