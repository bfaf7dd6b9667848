// SPDX-License-Identifier: MPL-2.0
//! Image catalog and position types.
//!
//! A [`Catalog`] is a fixed, ordered, non-empty list of slide identifiers.
//! A [`Position`] indexes into it and wraps on every step, so it always
//! satisfies `0 <= position < len`.

/// Slides shipped with the application, in display order.
pub const BUNDLED_SLIDES: [&str; 3] = ["grape.png", "grapefruit.png", "lemon.png"];

/// Ordered, immutable, non-empty sequence of image identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from identifiers, refusing an empty list.
    #[must_use]
    pub fn new<I, S>(images: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            None
        } else {
            Some(Self { images })
        }
    }

    /// The catalog of slides bundled with the application.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            images: BUNDLED_SLIDES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Number of entries. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Identifier at `position`.
    ///
    /// A position obtained from this catalog is always in range; a foreign
    /// position is reduced modulo the length.
    #[must_use]
    pub fn get(&self, position: Position) -> &str {
        &self.images[position.value() % self.images.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Index of the displayed catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// First entry.
    pub const START: Self = Self(0);

    /// Creates a position reduced into `0..len`. `len` must be non-zero.
    #[must_use]
    pub fn new(value: usize, len: usize) -> Self {
        Self(value % len.max(1))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Next entry, wrapping from the last back to the first.
    #[must_use]
    pub fn advance(self, len: usize) -> Self {
        let len = len.max(1);
        Self((self.0 + 1) % len)
    }

    /// Previous entry, wrapping from the first to the last.
    #[must_use]
    pub fn retreat(self, len: usize) -> Self {
        let len = len.max(1);
        Self((self.0 % len + len - 1) % len)
    }
}
