// SPDX-License-Identifier: MPL-2.0
//! Slideshow screen: shows the current slide, steps through the catalog and
//! drives the auto-advance timer.
//!
//! Clicking the slide stops auto-advance and asks the parent to open the
//! detail screen with the current identifier.

pub mod playback;

pub use playback::{AutoAdvance, Playback, TimerHandle};

use crate::config::SLIDESHOW_INTERVAL;
use crate::i18n::fluent::I18n;
use crate::media::{self, Catalog, Position};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    time,
    widget::{button, container, mouse_area, tooltip, Column, Container, Row, Text},
    ContentFit, Element, Length, Subscription,
};

/// Contextual data needed to render the slideshow.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the slideshow screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    TogglePlayback,
    /// Timer firing scheduled under the given generation.
    Tick(u64),
    SelectCurrent,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Transition to the detail screen with the selected identifier.
    ShowDetail { image: String },
}

/// Slideshow screen state.
#[derive(Debug, Clone)]
pub struct State {
    catalog: Catalog,
    slides: Vec<Option<Handle>>,
    position: Position,
    playback: Playback,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Catalog::bundled())
    }
}

impl State {
    /// Creates the screen positioned on the first slide, stopped.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let slides = catalog.iter().map(media::resolve).collect();
        Self {
            catalog,
            slides,
            position: Position::START,
            playback: Playback::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Identifier of the slide on screen.
    #[must_use]
    pub fn current_image(&self) -> &str {
        self.catalog.get(self.position)
    }

    #[must_use]
    pub fn auto_advance(&self) -> AutoAdvance {
        self.playback.state()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    /// Next/Previous are usable only while auto-advance is stopped.
    #[must_use]
    pub fn navigation_enabled(&self) -> bool {
        !self.playback.is_running()
    }

    /// i18n key of the play/pause caption for the current state.
    #[must_use]
    pub fn toggle_caption_key(&self) -> &'static str {
        if self.playback.is_running() {
            "slideshow-stop-button"
        } else {
            "slideshow-play-button"
        }
    }

    pub fn advance(&mut self) {
        self.position = self.position.advance(self.catalog.len());
    }

    pub fn retreat(&mut self) {
        self.position = self.position.retreat(self.catalog.len());
    }

    pub fn toggle_playback(&mut self) {
        if self.playback.is_running() {
            self.stop_auto_advance();
        } else {
            let handle = self.playback.start();
            tracing::debug!(generation = handle.generation(), "auto-advance started");
        }
    }

    /// Stops auto-advance. Safe to call when already stopped.
    pub fn stop_auto_advance(&mut self) {
        if let Some(handle) = self.playback.stop() {
            tracing::debug!(generation = handle.generation(), "auto-advance stopped");
        }
    }

    /// Stops auto-advance, then returns the identifier to hand off.
    pub fn select_for_detail(&mut self) -> String {
        self.stop_auto_advance();
        self.current_image().to_string()
    }

    /// Handles a slideshow message, returning an event for the parent.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Next => {
                if self.navigation_enabled() {
                    self.advance();
                }
                Event::None
            }
            Message::Previous => {
                if self.navigation_enabled() {
                    self.retreat();
                }
                Event::None
            }
            Message::TogglePlayback => {
                self.toggle_playback();
                Event::None
            }
            Message::Tick(generation) => {
                if self.playback.state().accepts(generation) {
                    self.advance();
                } else {
                    tracing::trace!(generation, "ignoring stale tick");
                }
                Event::None
            }
            Message::SelectCurrent => {
                let image = self.select_for_detail();
                Event::ShowDetail { image }
            }
        }
    }

    /// Generation of the live auto-advance run, if any.
    #[must_use]
    pub fn timer_generation(&self) -> Option<u64> {
        self.playback.state().handle().map(TimerHandle::generation)
    }

    /// Render the slideshow screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let slide = build_slide(self.slides.get(self.position.value()).cloned().flatten());
        let slide = tooltip(
            mouse_area(slide).on_press(Message::SelectCurrent),
            Text::new(ctx.i18n.tr("slideshow-open-detail-tooltip")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        );

        let caption = Text::new(ctx.i18n.tr_with_args(
            "slideshow-position",
            &[
                ("current", (self.position.value() + 1).to_string()),
                ("total", self.catalog.len().to_string()),
            ],
        ))
        .size(typography::BODY);

        let navigation = self.navigation_enabled();
        let previous_button = button(Text::new(ctx.i18n.tr("slideshow-previous-button")))
            .on_press_maybe(navigation.then_some(Message::Previous))
            .padding([spacing::XS, spacing::MD]);
        let toggle_button = button(Text::new(ctx.i18n.tr(self.toggle_caption_key())))
            .on_press(Message::TogglePlayback)
            .padding([spacing::XS, spacing::MD]);
        let next_button = button(Text::new(ctx.i18n.tr("slideshow-next-button")))
            .on_press_maybe(navigation.then_some(Message::Next))
            .padding([spacing::XS, spacing::MD]);

        let controls = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(previous_button)
            .push(toggle_button)
            .push(next_button);

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                Container::new(slide)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center(Length::Fill),
            )
            .push(caption)
            .push(controls)
            .into()
    }
}

/// Repeating auto-advance timer whose ticks carry `generation`.
pub fn auto_advance_subscription(generation: u64) -> Subscription<Message> {
    time::every(SLIDESHOW_INTERVAL)
        .with(generation)
        .map(|(generation, _instant)| Message::Tick(generation))
}

/// The current slide, or an empty box of the same footprint when it
/// could not be resolved.
fn build_slide<'a>(handle: Option<Handle>) -> Element<'a, Message> {
    match handle {
        Some(handle) => Image::new(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(sizing::SLIDE_WIDTH))
            .height(Length::Fixed(sizing::SLIDE_HEIGHT))
            .into(),
        None => container(Text::new(""))
            .width(Length::Fixed(sizing::SLIDE_WIDTH))
            .height(Length::Fixed(sizing::SLIDE_HEIGHT))
            .into(),
    }
}
