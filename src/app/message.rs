// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::resize_form;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(resize_form::Message),
    Notification(notifications::NotificationMessage),
    LanguageSelected(LanguageIdentifier),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional Resize Service URL, taking precedence over `settings.toml`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_RESIZE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional image path to preselect on startup.
    pub file_path: Option<String>,
}
