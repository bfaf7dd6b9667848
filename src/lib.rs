// SPDX-License-Identifier: MPL-2.0
//! `iced_slideshow` is a minimal image slideshow built with the Iced GUI framework.
//!
//! A slideshow screen cycles through a fixed catalog of bundled slides, either
//! manually or on a two-second auto-advance timer. Clicking the current slide
//! stops auto-advance and opens it enlarged on a detail screen.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
