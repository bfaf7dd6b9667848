// SPDX-License-Identifier: MPL-2.0
//! Design tokens: spacing, sizing and typography scales shared by the screens.
//!
//! ```
//! use iced_slideshow::ui::design_tokens::spacing;
//!
//! let padding = spacing::MD; // 16px
//! ```

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Slide footprint on the slideshow screen.
    pub const SLIDE_WIDTH: f32 = 480.0;
    pub const SLIDE_HEIGHT: f32 = 360.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

const _: () = {
    assert!(spacing::XS < spacing::MD);
    assert!(typography::CAPTION < typography::BODY);
};
