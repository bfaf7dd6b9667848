// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module renders the current screen based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::detail::{self, State as DetailState};
use crate::ui::slideshow::{self, State as SlideshowState};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub slideshow: &'a SlideshowState,
    pub detail: Option<&'a DetailState>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.detail) {
        (Screen::Detail, Some(detail)) => detail
            .view(detail::ViewContext { i18n: ctx.i18n })
            .map(Message::Detail),
        // A detail screen without a handoff falls back to the slideshow
        (Screen::Slideshow, _) | (Screen::Detail, None) => ctx
            .slideshow
            .view(slideshow::ViewContext { i18n: ctx.i18n })
            .map(Message::Slideshow),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
