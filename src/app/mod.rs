// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the slideshow and detail screens.
//!
//! The `App` struct owns both screens, the localization bundle and the theme,
//! and turns component events into screen transitions. The only value that
//! crosses from the slideshow to the detail screen is the selected image
//! identifier, handed over when the detail state is constructed.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::Catalog;
use crate::ui::detail::State as DetailState;
use crate::ui::slideshow::State as SlideshowState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    slideshow: SlideshowState,
    detail: Option<DetailState>,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("current_image", &self.slideshow.current_image())
            .field("auto_advance", &self.slideshow.auto_advance())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 520;

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

    // iced requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(flags), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, &Config::default())
    }
}

impl App {
    /// Initializes application state from CLI flags and the persisted config.
    pub fn new(flags: Flags) -> Self {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let app = Self::with_config(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::debug!(key = %key, "config loaded with a warning");
        }
        tracing::info!(
            locale = %app.i18n.current_locale(),
            slides = app.slideshow.catalog().len(),
            "slideshow ready"
        );
        app
    }

    /// Builds the application from an already loaded config.
    pub fn with_config(lang: Option<String>, config: &Config) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            screen: Screen::Slideshow,
            slideshow: SlideshowState::new(Catalog::bundled()),
            detail: None,
            // System detection queries the desktop, so it runs once here
            theme: config.general.theme_mode.to_theme(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn slideshow(&self) -> &SlideshowState {
        &self.slideshow
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let image = match (&self.screen, &self.detail) {
            (Screen::Detail, Some(detail)) => detail.image(),
            _ => Some(self.slideshow.current_image()),
        };

        match image {
            Some(image) => format!("{image} - {app_name}"),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_slideshow_subscription(self.screen, &self.slideshow),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            slideshow: &mut self.slideshow,
            detail: &mut self.detail,
        };

        match message {
            Message::Slideshow(slideshow_message) => {
                update::handle_slideshow_message(&mut ctx, slideshow_message)
            }
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            slideshow: &self.slideshow,
            detail: self.detail.as_ref(),
        })
    }
}
