// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and timing constants.

use std::time::Duration;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Period between two automatic advances while the slideshow is running.
pub const SLIDESHOW_INTERVAL_SECS: u64 = 2;

/// [`SLIDESHOW_INTERVAL_SECS`] as a `Duration`.
pub const SLIDESHOW_INTERVAL: Duration = Duration::from_secs(SLIDESHOW_INTERVAL_SECS);

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";
