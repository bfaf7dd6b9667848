// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen handles its own messages and returns an event for the parent.
//!
//! # Screens
//!
//! - [`slideshow`] - Current slide, next/previous, play/stop auto-advance
//! - [`detail`] - Single slide enlarged with a back button
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Spacing, sizing and typography scales
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod detail;
pub mod slideshow;
pub mod theming;
