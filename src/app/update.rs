// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The form decides *what* should happen; the handlers here turn its events
//! into tasks (dialogs, file I/O, the resize request) whose results are fed
//! back to the form as messages.

use super::Message;
use crate::config::{self, Config};
use crate::error::{Error, ResizeError};
use crate::i18n::fluent::I18n;
use crate::media::{self, format};
use crate::service::{self, ServiceSettings};
use crate::ui::notifications::{self, Notification};
use crate::ui::resize_form::{self, Event as FormEvent, Message as FormMessage};
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Prefix shared by notifications about the selected file.
const FILE_NOTIFICATION_PREFIX: &str = "notification-file-";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub form: &'a mut resize_form::State,
    pub service: Option<&'a ServiceSettings>,
    pub notifications: &'a mut notifications::Manager,
}

/// Forwards a message to the form and runs the event it emits.
pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: FormMessage) -> Task<Message> {
    if matches!(message, FormMessage::FileChosen(Some(_))) {
        ctx.notifications.clear_with_prefix(FILE_NOTIFICATION_PREFIX);
    }
    let event = ctx.form.update(message);
    run_form_event(ctx, event)
}

/// Handles a file dropped on the window.
///
/// Only files with a known image extension are accepted.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !format::is_supported_image_path(&path) {
        tracing::info!(path = %path.display(), "ignoring dropped file with unsupported extension");
        ctx.notifications
            .push(Notification::warning("notification-file-unsupported"));
        return Task::none();
    }
    handle_form_message(ctx, FormMessage::FileChosen(Some(path)))
}

/// Switches the UI language and persists the choice.
pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    if !ctx.i18n.set_locale(locale.clone()) {
        tracing::warn!(%locale, "requested locale is not available");
        return Task::none();
    }

    ctx.config.general.language = Some(locale.to_string());
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.cloned()) {
        tracing::warn!(error = %err, "failed to save language preference");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
    Task::none()
}

fn run_form_event(ctx: &mut UpdateContext<'_>, event: FormEvent) -> Task<Message> {
    match event {
        FormEvent::None => Task::none(),
        FormEvent::OpenFileDialog => open_file_dialog(),
        FormEvent::ReadFile { pick_id, path } => Task::perform(
            async move {
                let result = media::read_file(&path).await;
                FormMessage::FileRead {
                    pick_id,
                    path,
                    result,
                }
            },
            Message::Form,
        ),
        FormEvent::ProbeFile { pick_id, bytes } => Task::perform(
            async move { media::probe_dimensions(&bytes) },
            move |result| Message::Form(FormMessage::FileProbed { pick_id, result }),
        ),
        FormEvent::SendRequest { seq, request } => {
            let on_done =
                move |result| Message::Form(FormMessage::ResizeCompleted { seq, result });
            match ctx.service {
                Some(settings) => {
                    Task::perform(service::resize_and_decode(settings.clone(), request), on_done)
                }
                None => Task::done(on_done(Err(ResizeError::Network(
                    "no usable service endpoint".to_string(),
                )))),
            }
        }
        FormEvent::OpenSaveDialog { file_name } => {
            open_save_dialog(ctx.i18n.tr("form-save-dialog-title"), file_name)
        }
        FormEvent::WriteFile { path, bytes } => write_file(path, bytes),
        FormEvent::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Image", format::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| Message::Form(FormMessage::FileChosen(path)),
    )
}

fn open_save_dialog(title: String, file_name: String) -> Task<Message> {
    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string);

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(&file_name);
            if let Some(ext) = &extension {
                dialog = dialog.add_filter(ext.to_uppercase(), &[ext.as_str()]);
            }
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| Message::Form(FormMessage::SaveLocationChosen(path)),
    )
}

fn write_file(path: PathBuf, bytes: Arc<Vec<u8>>) -> Task<Message> {
    Task::perform(
        async move {
            tokio::fs::write(&path, bytes.as_slice())
                .await
                .map_err(Error::from)?;
            tracing::info!(path = %path.display(), len = bytes.len(), "resized image saved");
            Ok::<_, Error>(path)
        },
        |result| Message::Form(FormMessage::SaveCompleted(result)),
    )
}
