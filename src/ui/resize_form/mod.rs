// SPDX-License-Identifier: MPL-2.0
//! The resize form: pick an image, choose target dimensions, send it to the
//! Resize Service and show or save what comes back.
//!
//! This module follows a "state down, messages up" pattern. [`State::update`]
//! only mutates form state; anything involving dialogs, the filesystem or
//! the network is returned as an [`Event`] for the application to run, and
//! its outcome comes back as another [`Message`].

mod state;
mod view;

pub use state::{build_request, SelectedFile, TargetDimension, ViewState};
pub use view::ViewContext;

use crate::error::{Error, ResizeError};
use crate::media::{format, Dimensions};
use crate::service::{ResizeRequest, ResizedImage};
use crate::ui::notifications::Notification;
use crate::ui::widgets::animated_spinner;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Spinner frame interval while a request is in flight.
const SPINNER_FRAME: Duration = Duration::from_millis(16);

/// Messages handled by the form.
#[derive(Debug, Clone)]
pub enum Message {
    PickFile,
    FileChosen(Option<PathBuf>),
    FileRead {
        pick_id: u64,
        path: PathBuf,
        result: Result<Arc<Vec<u8>>, Error>,
    },
    FileProbed {
        pick_id: u64,
        result: Result<Dimensions, Error>,
    },
    WidthChanged(String),
    HeightChanged(String),
    Submit,
    ResizeCompleted {
        seq: u64,
        result: Result<ResizedImage, ResizeError>,
    },
    Download,
    SaveLocationChosen(Option<PathBuf>),
    SaveCompleted(Result<PathBuf, Error>),
    DismissError,
    SpinnerTick,
}

/// Side effects requested from the application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFileDialog,
    ReadFile {
        pick_id: u64,
        path: PathBuf,
    },
    ProbeFile {
        pick_id: u64,
        bytes: Arc<Vec<u8>>,
    },
    SendRequest {
        seq: u64,
        request: ResizeRequest,
    },
    OpenSaveDialog {
        file_name: String,
    },
    WriteFile {
        path: PathBuf,
        bytes: Arc<Vec<u8>>,
    },
    Notify(Notification),
}

/// Form state. Nothing here outlives the window.
#[derive(Debug, Clone)]
pub struct State {
    file: Option<SelectedFile>,
    width_input: String,
    height_input: String,
    view: ViewState,
    /// Local validation failure from the last submit attempt.
    input_error: Option<ResizeError>,
    /// Latest pick handed out; reads for older picks are dropped.
    pending_pick: Option<u64>,
    next_pick_id: u64,
    next_seq: u64,
    /// Result bytes captured when the save dialog opened. They survive a new
    /// submit or pick, so the dialog always saves what the user chose.
    pending_save: Option<Arc<Vec<u8>>>,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_TARGET_WIDTH,
            crate::config::DEFAULT_TARGET_HEIGHT,
        )
    }
}

impl State {
    /// Creates an empty form with the given initial target dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            file: None,
            width_input: width.to_string(),
            height_input: height.to_string(),
            view: ViewState::Idle,
            input_error: None,
            pending_pick: None,
            next_pick_id: 0,
            next_seq: 0,
            pending_save: None,
            spinner_rotation: 0.0,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PickFile => Event::OpenFileDialog,
            Message::FileChosen(None) => Event::None,
            Message::FileChosen(Some(path)) => self.choose_file(path),
            Message::FileRead {
                pick_id,
                path,
                result,
            } => self.handle_file_read(pick_id, path, result),
            Message::FileProbed { pick_id, result } => {
                self.apply_probe(pick_id, result);
                Event::None
            }
            Message::WidthChanged(value) => {
                self.width_input = value;
                self.input_error = None;
                Event::None
            }
            Message::HeightChanged(value) => {
                self.height_input = value;
                self.input_error = None;
                Event::None
            }
            Message::Submit => self.submit(),
            Message::ResizeCompleted { seq, result } => {
                if !self.view.complete(seq, result) {
                    tracing::debug!(seq, "discarding stale resize response");
                }
                Event::None
            }
            Message::Download => self.download(),
            Message::SaveLocationChosen(path) => {
                let bytes = self.pending_save.take();
                match (path, bytes) {
                    (Some(path), Some(bytes)) => Event::WriteFile { path, bytes },
                    _ => Event::None,
                }
            }
            Message::SaveCompleted(Ok(path)) => Event::Notify(
                Notification::success("notification-save-success")
                    .with_arg("path", path.display().to_string()),
            ),
            Message::SaveCompleted(Err(err)) => {
                tracing::error!(error = %err, "failed to save resized image");
                Event::Notify(Notification::error("notification-save-error"))
            }
            Message::DismissError => {
                self.dismiss_error();
                Event::None
            }
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                Event::None
            }
        }
    }

    /// Animates the spinner while a request is in flight.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.view.is_loading() {
            iced::time::every(SPINNER_FRAME).map(|_| Message::SpinnerTick)
        } else {
            iced::Subscription::none()
        }
    }

    fn choose_file(&mut self, path: PathBuf) -> Event {
        self.next_pick_id += 1;
        let pick_id = self.next_pick_id;
        self.pending_pick = Some(pick_id);
        Event::ReadFile { pick_id, path }
    }

    fn handle_file_read(
        &mut self,
        pick_id: u64,
        path: PathBuf,
        result: Result<Arc<Vec<u8>>, Error>,
    ) -> Event {
        if self.pending_pick != Some(pick_id) {
            return Event::None;
        }
        self.pending_pick = None;

        match result {
            Ok(bytes) => {
                self.select_file(SelectedFile::new(pick_id, path, Arc::clone(&bytes)));
                Event::ProbeFile { pick_id, bytes }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read selected file");
                Event::Notify(Notification::error("notification-file-read-error"))
            }
        }
    }

    /// Replaces the selected file and drops any result or pending request.
    pub fn select_file(&mut self, file: SelectedFile) {
        tracing::info!(path = %file.path.display(), len = file.bytes.len(), "file selected");
        self.file = Some(file);
        self.view = ViewState::Idle;
        self.input_error = None;
    }

    /// Records the probed dimensions if they belong to the current file.
    pub fn apply_probe(&mut self, pick_id: u64, result: Result<Dimensions, Error>) {
        let Some(file) = self.file.as_mut().filter(|file| file.pick_id == pick_id) else {
            return;
        };
        match result {
            Ok(dimensions) => {
                file.dimensions = Some(dimensions);
                file.probe_failed = false;
            }
            Err(err) => {
                tracing::warn!(file = %file.file_name, error = %err, "could not read image header");
                file.dimensions = None;
                file.probe_failed = true;
            }
        }
    }

    fn submit(&mut self) -> Event {
        if self.view.is_loading() {
            return Event::None;
        }

        match build_request(self.file.as_ref(), &self.width_input, &self.height_input) {
            Ok(request) => {
                self.next_seq += 1;
                let seq = self.next_seq;
                self.view = ViewState::Loading { seq };
                self.input_error = None;
                Event::SendRequest { seq, request }
            }
            Err(err) => {
                self.input_error = Some(err);
                Event::None
            }
        }
    }

    fn download(&mut self) -> Event {
        let Some(result) = self.view.result() else {
            return Event::None;
        };
        let file_name = format::download_file_name(
            result.content_type.as_deref(),
            &result.bytes,
            self.file.as_ref().map(SelectedFile::path),
        );
        self.pending_save = Some(Arc::clone(&result.bytes));
        Event::OpenSaveDialog { file_name }
    }

    /// Clears a visible failure so the form returns to idle.
    pub fn dismiss_error(&mut self) {
        self.input_error = None;
        if matches!(self.view, ViewState::Failed(_)) {
            self.view = ViewState::Idle;
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn width_input(&self) -> &str {
        &self.width_input
    }

    pub fn height_input(&self) -> &str {
        &self.height_input
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    pub fn can_download(&self) -> bool {
        self.view.result().is_some()
    }

    /// The message to show in the error banner, local or remote.
    pub fn visible_error(&self) -> Option<&ResizeError> {
        self.input_error.as_ref().or_else(|| self.view.error())
    }

    pub(crate) fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
