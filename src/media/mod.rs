// SPDX-License-Identifier: MPL-2.0
//! Slide catalog and resolution of slide identifiers to image data.
//!
//! Slides are embedded into the binary from `assets/slides/`, so an
//! identifier is simply a file name inside that folder.

pub mod catalog;

pub use catalog::{Catalog, Position};

use iced::widget::image::Handle;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/slides/"]
struct SlideAssets;

/// Returns true if `id` names an embedded slide.
#[must_use]
pub fn has_asset(id: &str) -> bool {
    SlideAssets::get(id).is_some()
}

/// Resolves a slide identifier to an image handle.
///
/// Unknown identifiers yield `None`; the caller renders nothing in that case.
#[must_use]
pub fn resolve(id: &str) -> Option<Handle> {
    match SlideAssets::get(id) {
        Some(file) => Some(Handle::from_bytes(file.data.into_owned())),
        None => {
            tracing::warn!(id, "slide asset not found");
            None
        }
    }
}
