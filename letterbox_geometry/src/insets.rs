// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Rect, Size};

/// Margins reserved by the host, such as a display notch or a home indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    /// Columns reserved on the left edge.
    pub left: i32,
    /// Rows reserved on the top edge.
    pub top: i32,
    /// Columns reserved on the right edge.
    pub right: i32,
    /// Rows reserved on the bottom edge.
    pub bottom: i32,
}

impl Insets {
    /// No reserved margins.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new set of insets.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the part of a `window`-sized area left after removing the insets.
    ///
    /// Insets that overlap collapse the result to an empty rectangle rather
    /// than an inverted one.
    #[must_use]
    pub fn safe_area(&self, window: Size) -> Rect {
        let left = self.left.max(0);
        let top = self.top.max(0);
        Rect::new(
            left,
            top,
            left.max(window.width - self.right.max(0)),
            top.max(window.height - self.bottom.max(0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Insets;
    use crate::{Rect, Size};

    #[test]
    fn zero_insets_cover_window() {
        assert_eq!(
            Insets::ZERO.safe_area(Size::new(800, 600)),
            Rect::new(0, 0, 800, 600)
        );
    }

    #[test]
    fn insets_shrink_each_edge() {
        let insets = Insets::new(44, 10, 20, 34);
        assert_eq!(
            insets.safe_area(Size::new(800, 600)),
            Rect::new(44, 10, 780, 566)
        );
    }

    #[test]
    fn oversized_insets_collapse() {
        let insets = Insets::new(300, 0, 600, 0);
        let safe = insets.safe_area(Size::new(800, 600));
        assert!(safe.is_empty());
        assert_eq!(safe.width(), 0);
    }
}
