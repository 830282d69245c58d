// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the page viewer to localization, configuration,
//! theming and toast notifications, and translates launcher flags into the
//! viewer's configuration.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::viewer::component::{self, ViewerConfig};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 960.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Resolved once at startup; system theme detection is not free.
    theme: Theme,
    colors: ColorScheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_page", &self.viewer.current_page())
            .field("busy", &self.viewer.is_busy())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed once.
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

/// Applies launcher overrides on top of the file configuration.
fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(root) = &flags.asset_root {
        config.document.asset_root = Some(root.clone());
    }
    if let Some(pages) = flags.total_pages {
        config.document.total_pages = Some(pages);
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        Self::with_config(flags, config, warning)
    }

    /// Builds the application from an already loaded configuration and
    /// kicks off the first page load.
    fn with_config(
        flags: Flags,
        mut config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        apply_flags(&mut config, &flags);

        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.general.theme_mode;
        let viewer_config = ViewerConfig::from_config(&config);
        log::info!(
            "opening {} pages from {:?} ({})",
            viewer_config.total_pages.value(),
            viewer_config.asset_source,
            i18n.current_locale()
        );

        let mut app = App {
            i18n,
            viewer: component::State::new(viewer_config),
            notifications: notifications::Manager::new(),
            theme_mode,
            theme: theme_mode.iced_theme(),
            colors: ColorScheme::for_mode(theme_mode),
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.viewer.start().map(Message::Viewer);
        (app, task)
    }

    fn title(&self) -> String {
        format!(
            "{} \u{2014} {} / {}",
            self.i18n.tr("window-title"),
            self.viewer.current_page(),
            self.viewer.total_pages().value()
        )
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_spinner_subscription(self.viewer.loading().is_loading()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => update::handle_viewer_message(
                &mut self.viewer,
                &mut self.notifications,
                viewer_message,
            ),
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut self.notifications, &notification_message)
            }
            Message::Tick(now) => update::handle_tick(&mut self.notifications, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            notifications: &self.notifications,
            colors: &self.colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageAsset;
    use crate::error::{Error, HttpError};
    use crate::ui::viewer::page_entry;

    const SVG: &[u8] =
        br#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="6"><rect width="4" height="6"/></svg>"#;

    fn app_with(flags: Flags) -> App {
        let mut config = Config::default();
        config.general.language = Some("en-US".into());
        config.general.theme_mode = ThemeMode::Light;
        App::with_config(flags, config, None).0
    }

    fn app() -> App {
        app_with(Flags::default())
    }

    fn settle(app: &mut App, n: i64, ok: bool) {
        let page = app.viewer.total_pages().page(n).unwrap();
        let result = if ok {
            Ok(PageAsset::from_svg_bytes(page, SVG.to_vec()).unwrap())
        } else {
            Err(Error::Http(HttpError::Status(500)))
        };
        let _ = app.update(Message::Viewer(component::Message::PageLoaded { page, result }));
    }

    #[test]
    fn startup_loads_first_page() {
        let app = app();
        assert_eq!(app.viewer.pending_page().map(|p| p.value()), Some(1));
    }

    #[test]
    fn flags_override_config() {
        let app = app_with(Flags {
            total_pages: Some(20),
            asset_root: Some("https://pages.example.org".into()),
            ..Flags::default()
        });
        assert_eq!(app.viewer.total_pages().value(), 20);
        assert!(matches!(
            app.viewer.config().asset_source,
            crate::document::AssetSource::Remote(_)
        ));
    }

    #[test]
    fn title_shows_position() {
        let mut app = app();
        settle(&mut app, 1, true);
        assert_eq!(app.title(), "PageLens \u{2014} 1 / 604");
    }

    #[test]
    fn config_warning_becomes_toast() {
        let mut config = Config::default();
        config.general.language = Some("en-US".into());
        let (app, _) = App::with_config(
            Flags::default(),
            config,
            Some("notification-config-load-error".into()),
        );
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn failed_load_shows_toast_and_later_success_clears_it() {
        let mut app = app();
        settle(&mut app, 1, true);

        let _ = app.update(Message::Viewer(component::Message::NextPressed));
        settle(&mut app, 2, false);
        assert_eq!(app.notifications.visible_count(), 1);
        assert_eq!(app.viewer.current_page().value(), 1);

        let _ = app.update(Message::Viewer(component::Message::NextPressed));
        settle(&mut app, 2, true);
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.viewer.current_page().value(), 2);
    }

    #[test]
    fn rejected_entry_shows_range_warning() {
        let mut app = app();
        settle(&mut app, 1, true);

        let _ = app.update(Message::Viewer(component::Message::IndicatorPressed));
        let _ = app.update(Message::Viewer(component::Message::PageEntry(
            page_entry::Message::InputChanged("700".into()),
        )));
        let _ = app.update(Message::Viewer(component::Message::PageEntry(
            page_entry::Message::Confirm,
        )));

        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.key(), "notification-page-out-of-range");
        assert_eq!(app.viewer.current_page().value(), 1);
        assert_eq!(app.viewer.page_entry().text(), "1");
    }

    #[test]
    fn view_renders() {
        let app = app();
        let _ = app.view();
    }
}
