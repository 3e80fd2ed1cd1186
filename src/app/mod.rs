// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the resize form.
//!
//! The `App` struct wires together the form, localization, notifications and
//! persisted preferences, and turns the form's events into side effects:
//! native dialogs, file I/O and requests to the Resize Service.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::service::ServiceSettings;
use crate::ui::notifications;
use crate::ui::resize_form;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory `settings.toml` was loaded from, reused when saving.
    config_dir: Option<PathBuf>,
    form: resize_form::State,
    /// `None` when neither the configured nor the default endpoint is usable.
    service: Option<ServiceSettings>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("endpoint", &self.service.as_ref().map(|s| s.endpoint.as_str()))
            .field("has_file", &self.form.file().is_some())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 500;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the service settings for this run.
///
/// The command line endpoint wins over the configured one. An unusable
/// endpoint falls back to the built-in default and yields a warning key.
fn resolve_service(
    config: &Config,
    endpoint_override: Option<&str>,
) -> (Option<ServiceSettings>, Option<&'static str>) {
    let timeout = config.request_timeout();
    let min_loading = config.min_loading();
    let endpoint = endpoint_override.unwrap_or_else(|| config.endpoint());

    match ServiceSettings::new(endpoint, timeout, min_loading) {
        Ok(settings) => (Some(settings), None),
        Err(err) => {
            tracing::warn!(endpoint, error = %err, "invalid service endpoint, using default");
            (
                ServiceSettings::new(config::DEFAULT_ENDPOINT, timeout, min_loading).ok(),
                Some("notification-endpoint-invalid"),
            )
        }
    }
}

impl App {
    /// Initializes application state and optionally starts loading the file
    /// given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_deref().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (service, endpoint_warning) = resolve_service(&config, flags.endpoint.as_deref());
        let (width, height) = config.initial_dimensions();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            form: resize_form::State::new(width, height),
            service,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = endpoint_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            endpoint = app.service.as_ref().map_or("-", |s| s.endpoint.as_str()),
            "application started"
        );

        let task = match flags.file_path {
            Some(path) => app.update(Message::FileDropped(PathBuf::from(path))),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.form.file() {
            Some(file) => format!("{} - {app_name}", file.file_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            self.form.subscription().map(Message::Form),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            form: &mut self.form,
            service: self.service.as_ref(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::LanguageSelected(locale) => update::handle_language_selected(&mut ctx, locale),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::test_images;
    use crate::ui::resize_form::ViewState;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn flags_with_config(dir: &std::path::Path, content: Option<&str>) -> Flags {
        if let Some(content) = content {
            fs::write(dir.join("settings.toml"), content).expect("write settings");
        }
        Flags {
            lang: Some("es".into()),
            config_dir: Some(dir.to_string_lossy().into_owned()),
            ..Flags::default()
        }
    }

    #[test]
    fn new_starts_with_default_dimensions_and_no_file() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(flags_with_config(dir.path(), None));

        assert_eq!(app.form.width_input(), "1920");
        assert_eq!(app.form.height_input(), "1080");
        assert!(app.form.file().is_none());
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.title(), "Cambiar tamaño de imagen");
    }

    #[test]
    fn new_applies_form_config() {
        let dir = tempdir().expect("temp dir");
        let flags = flags_with_config(
            dir.path(),
            Some("[form]\ndefault_width = 800\ndefault_height = 600\n"),
        );
        let (app, _task) = App::new(flags);

        assert_eq!(app.form.width_input(), "800");
        assert_eq!(app.form.height_input(), "600");
    }

    #[test]
    fn broken_config_shows_warning() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(flags_with_config(dir.path(), Some("[form\n")));

        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert_eq!(keys, vec!["notification-config-load-error"]);
    }

    #[test]
    fn endpoint_flag_overrides_config() {
        let config = Config::default();
        let (settings, warning) = resolve_service(&config, Some("http://127.0.0.1:9/resize"));
        assert_eq!(
            settings.map(|s| s.endpoint.to_string()),
            Some("http://127.0.0.1:9/resize".to_string())
        );
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_endpoint_falls_back_to_default() {
        let mut config = Config::default();
        config.service.endpoint = Some("not a url".into());
        config.service.timeout_secs = Some(5);

        let (settings, warning) = resolve_service(&config, None);
        let settings = settings.expect("default endpoint is valid");
        assert_eq!(settings.endpoint.as_str(), config::DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(warning, Some("notification-endpoint-invalid"));
    }

    #[test]
    fn dropping_unsupported_file_warns_without_selecting() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::new(flags_with_config(dir.path(), None));

        let _ = app.update(Message::FileDropped(PathBuf::from("notes.txt")));

        assert!(app.form.file().is_none());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-file-unsupported"));
    }

    #[test]
    fn file_read_result_selects_file_and_updates_title() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::new(flags_with_config(dir.path(), None));

        let _ = app.update(Message::Form(resize_form::Message::FileChosen(Some(
            PathBuf::from("photo.png"),
        ))));
        let _ = app.update(Message::Form(resize_form::Message::FileRead {
            pick_id: 1,
            path: PathBuf::from("photo.png"),
            result: Ok(std::sync::Arc::new(test_images::png(800, 600))),
        }));

        assert_eq!(
            app.form.file().map(|f| f.file_name.as_str()),
            Some("photo.png")
        );
        assert_eq!(app.title(), "photo.png - Cambiar tamaño de imagen");
        assert!(matches!(app.form.view_state(), ViewState::Idle));
    }

    #[test]
    fn language_selection_is_saved() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::new(flags_with_config(dir.path(), None));
        let english: unic_langid::LanguageIdentifier = "en-US".parse().expect("valid locale");

        let _ = app.update(Message::LanguageSelected(english.clone()));

        assert_eq!(app.i18n.current_locale(), &english);
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        let saved =
            config::load_from_path(&dir.path().join("settings.toml")).expect("config saved");
        assert_eq!(saved.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn tick_keeps_error_notifications() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::new(flags_with_config(dir.path(), None));
        app.notifications
            .push(notifications::Notification::error("notification-save-error"));

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.notifications.visible_count(), 1);
    }
}
