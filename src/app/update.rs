// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component updates return events; the handlers here turn those events into
//! screen transitions.

use super::{Message, Screen};
use crate::ui::detail::{self, Event as DetailEvent, State as DetailState};
use crate::ui::slideshow::{self, Event as SlideshowEvent, State as SlideshowState};
use iced::Task;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub slideshow: &'a mut SlideshowState,
    pub detail: &'a mut Option<DetailState>,
}

pub fn handle_slideshow_message(
    ctx: &mut UpdateContext<'_>,
    message: slideshow::Message,
) -> Task<Message> {
    // Keyboard shortcuts and stray ticks must not act behind the detail screen
    if *ctx.screen != Screen::Slideshow {
        return Task::none();
    }

    match ctx.slideshow.update(message) {
        SlideshowEvent::None => {}
        SlideshowEvent::ShowDetail { image } => show_detail(ctx, image),
    }
    Task::none()
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail::Message,
) -> Task<Message> {
    let Some(state) = ctx.detail.as_mut() else {
        return Task::none();
    };

    match state.update(message) {
        DetailEvent::None => {}
        DetailEvent::Back => back_to_slideshow(ctx),
    }
    Task::none()
}

/// "to detail" transition: auto-advance is already stopped by the slideshow
/// when this runs, and the identifier is the only payload.
fn show_detail(ctx: &mut UpdateContext<'_>, image: String) {
    tracing::debug!(%image, "opening detail screen");
    *ctx.detail = Some(DetailState::new(Some(image)));
    *ctx.screen = Screen::Detail;
}

fn back_to_slideshow(ctx: &mut UpdateContext<'_>) {
    tracing::debug!("closing detail screen");
    *ctx.detail = None;
    *ctx.screen = Screen::Slideshow;
}
