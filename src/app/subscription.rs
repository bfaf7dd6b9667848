// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed to the active screen, and the auto-advance
//! timer is only subscribed to while the slideshow is visible and running.

use super::{Message, Screen};
use crate::ui::{detail, slideshow};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Creates the keyboard subscription for the current screen.
///
/// Events already captured by a widget are ignored.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Slideshow => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
                return None;
            };
            slideshow_shortcut(&key).map(Message::Slideshow)
        }),
        Screen::Detail => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
                return None;
            };
            detail_shortcut(&key).map(Message::Detail)
        }),
    }
}

/// Generation the auto-advance timer should run under, or `None` when no
/// timer may exist: auto-advance is stopped or the slideshow is not visible.
pub fn timer_generation(screen: Screen, slideshow: &slideshow::State) -> Option<u64> {
    if screen != Screen::Slideshow {
        return None;
    }
    slideshow.timer_generation()
}

/// Creates the auto-advance timer subscription.
pub fn create_slideshow_subscription(
    screen: Screen,
    slideshow: &slideshow::State,
) -> Subscription<Message> {
    match timer_generation(screen, slideshow) {
        Some(generation) => {
            slideshow::auto_advance_subscription(generation).map(Message::Slideshow)
        }
        None => Subscription::none(),
    }
}

fn slideshow_shortcut(key: &Key) -> Option<slideshow::Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(slideshow::Message::Next),
        Key::Named(Named::ArrowLeft) => Some(slideshow::Message::Previous),
        Key::Named(Named::Space) => Some(slideshow::Message::TogglePlayback),
        Key::Named(Named::Enter) => Some(slideshow::Message::SelectCurrent),
        _ => None,
    }
}

fn detail_shortcut(key: &Key) -> Option<detail::Message> {
    match key {
        Key::Named(Named::Escape | Named::Backspace) => Some(detail::Message::Back),
        _ => None,
    }
}
