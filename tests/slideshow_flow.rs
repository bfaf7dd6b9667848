// SPDX-License-Identifier: MPL-2.0
//! End-to-end slideshow behavior driven through the application messages.

use iced_slideshow::app::{App, Message, Screen};
use iced_slideshow::config::Config;
use iced_slideshow::media::{Catalog, Position};
use iced_slideshow::ui::detail;
use iced_slideshow::ui::slideshow::{self, AutoAdvance, State};

fn app() -> App {
    App::with_config(Some("en-US".to_string()), &Config::default())
}

fn send(app: &mut App, message: slideshow::Message) {
    let _ = app.update(Message::Slideshow(message));
}

fn live_generation(state: &State) -> u64 {
    match state.auto_advance() {
        AutoAdvance::Running(handle) => handle.generation(),
        AutoAdvance::Stopped => panic!("auto-advance should be running"),
    }
}

#[test]
fn manual_navigation_wraps_in_both_directions() {
    let mut app = app();
    let mut shown = Vec::new();
    for _ in 0..3 {
        send(&mut app, slideshow::Message::Next);
        shown.push(app.slideshow().current_image().to_string());
    }
    assert_eq!(shown, ["grapefruit.png", "lemon.png", "grape.png"]);

    send(&mut app, slideshow::Message::Previous);
    assert_eq!(app.slideshow().position().value(), 2);
    assert_eq!(app.slideshow().current_image(), "lemon.png");
}

#[test]
fn play_disables_navigation_and_advances_on_each_period() {
    let mut app = app();
    send(&mut app, slideshow::Message::Next);
    let before = app.slideshow().position().value();

    send(&mut app, slideshow::Message::TogglePlayback);
    assert!(!app.slideshow().navigation_enabled());
    assert_eq!(app.slideshow().toggle_caption_key(), "slideshow-stop-button");
    assert_eq!(app.i18n.tr(app.slideshow().toggle_caption_key()), "Stop");

    let generation = live_generation(app.slideshow());
    for _ in 0..3 {
        send(&mut app, slideshow::Message::Tick(generation));
    }
    let len = app.slideshow().catalog().len();
    assert_eq!(app.slideshow().position().value(), (before + 3) % len);
}

#[test]
fn tap_on_second_slide_while_running_then_back() {
    let mut app = app();
    send(&mut app, slideshow::Message::Next);
    send(&mut app, slideshow::Message::TogglePlayback);
    let generation = live_generation(app.slideshow());

    send(&mut app, slideshow::Message::SelectCurrent);
    assert_eq!(app.screen(), Screen::Detail);
    assert_eq!(app.slideshow().auto_advance(), AutoAdvance::Stopped);
    assert_eq!(
        app.detail().and_then(detail::State::image),
        Some("grapefruit.png")
    );

    // A firing already in flight when the tap happened
    send(&mut app, slideshow::Message::Tick(generation));

    let _ = app.update(Message::Detail(detail::Message::Back));
    assert_eq!(app.screen(), Screen::Slideshow);
    assert_eq!(app.slideshow().position().value(), 1);
    assert_eq!(app.slideshow().auto_advance(), AutoAdvance::Stopped);
    assert!(app.slideshow().navigation_enabled());
}

#[test]
fn toggle_state_invariant_holds_after_every_toggle() {
    let mut state = State::default();
    for _ in 0..6 {
        state.update(slideshow::Message::TogglePlayback);
        assert_eq!(state.navigation_enabled(), !state.is_running());
    }
    assert!(!state.is_running());
    assert_eq!(state.toggle_caption_key(), "slideshow-play-button");
}

#[test]
fn position_invariant_holds_for_longer_catalogs() {
    let ids: Vec<String> = (0..7).map(|i| format!("slide-{i}.png")).collect();
    let mut state = State::new(Catalog::new(ids).expect("non-empty"));
    let mut expected = 0usize;
    for step in 0..50 {
        if step % 4 == 3 {
            state.update(slideshow::Message::Previous);
            expected = (expected + 7 - 1) % 7;
        } else {
            state.update(slideshow::Message::Next);
            expected = (expected + 1) % 7;
        }
        assert_eq!(state.position(), Position::new(expected, 7));
        assert!(state.position().value() < 7);
    }
}
