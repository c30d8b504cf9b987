// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered cursor state.
//!
//! The rendered cursor is the one drawn by the application on top of the
//! virtual surfaces. It is tracked in window space and is independent of the
//! host's system pointer: warps move both, host motion only reports where the
//! system pointer went.
//!
//! ## Minimal example
//!
//! ```
//! use letterbox_geometry::Point;
//! use letterbox_layout::CursorState;
//!
//! let mut cursor = CursorState::default();
//! assert!(!cursor.set_visible(true));
//! assert!(cursor.take_needs_redraw());
//!
//! cursor.set_rendered_position(Point::new(10, 20));
//! assert!(cursor.take_needs_redraw());
//!
//! // Same position again: nothing to redraw.
//! cursor.set_rendered_position(Point::new(10, 20));
//! assert!(!cursor.needs_redraw());
//! ```

use letterbox_geometry::Point;

/// Window-space position and visibility of the rendered cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    position: Point,
    visible: bool,
    needs_redraw: bool,
}

impl CursorState {
    /// Last known window-space position of the rendered cursor.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns `true` if the cursor is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` if the cursor changed since the last redraw.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns whether the cursor needs a redraw and clears the flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Requests a redraw without changing position or visibility.
    pub fn mark_needs_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Moves the rendered cursor, flagging a redraw only on an actual change.
    pub fn set_rendered_position(&mut self, position: Point) {
        if self.position != position {
            self.needs_redraw = true;
            self.position = position;
        }
    }

    /// Shows or hides the cursor, returning the previous visibility.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let previous = self.visible;
        if previous != visible {
            self.visible = visible;
            self.needs_redraw = true;
        }
        previous
    }
}
