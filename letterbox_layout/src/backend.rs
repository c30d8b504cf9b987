// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use letterbox_geometry::{Insets, Point, Size};

use crate::area::DisplayArea;

/// Host and renderer capabilities a [`WindowedDisplay`](crate::WindowedDisplay)
/// depends on.
///
/// A backend is injected when the display is created and is owned by it. The
/// display queries it on every layout pass and calls back into it for resizes
/// and pointer warps; it never inspects pixel data.
pub trait DisplayBackend {
    /// Native size of the game surface.
    fn game_size(&self) -> Size;

    /// Native size of the overlay surface, or [`Size::ZERO`] if there is none.
    fn overlay_size(&self) -> Size;

    /// Returns `true` if the game surface must be shown at 4:3 regardless of
    /// its native size.
    fn game_needs_aspect_ratio_correction(&self) -> bool;

    /// Multiplier applied to the game size before layout, for surfaces
    /// rendered at a higher internal resolution.
    fn game_render_scale(&self) -> i32 {
        1
    }

    /// Margins to keep clear of host UI such as a notch.
    ///
    /// Queried on every layout pass, as the value can change with device
    /// orientation.
    fn safe_area_insets(&self) -> Insets {
        Insets::ZERO
    }

    /// Called after the window size changed, so surfaces can be reallocated.
    fn handle_resize(&mut self, width: i32, height: i32);

    /// Moves the host's system pointer to a window-space position.
    fn set_system_pointer_position(&mut self, position: Point);

    /// Called whenever the active display area changes.
    fn active_area_changed(&mut self, area: &DisplayArea) {
        let _ = area;
    }
}
