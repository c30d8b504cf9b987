// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use letterbox_geometry::{Insets, Rect, Size, floor_scale};

use crate::area::DisplayArea;
use crate::config::RotationMode;

/// The part of the overlay that is not covered by host UI, in overlay pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SafeOverlayArea {
    /// Safe rectangle in the overlay's native coordinate space.
    pub rect: Rect,
    /// Native size of the overlay surface.
    pub native: Size,
}

/// Computes the safe part of the overlay in overlay-native coordinates.
///
/// The overlay draw rectangle is intersected with the window minus `insets`,
/// then its corners are scaled (rounding down) and rotated into the overlay's
/// own space. An overlay that was never laid out yields an empty rectangle.
#[must_use]
pub fn safe_overlay_area(
    overlay: &DisplayArea,
    rotation: RotationMode,
    window: Size,
    insets: Insets,
) -> SafeOverlayArea {
    let native = overlay.native;
    if !overlay.is_valid() {
        return SafeOverlayArea {
            rect: Rect::ZERO,
            native,
        };
    }

    let draw = overlay.draw_rect;
    let safe = draw.intersect(&insets.safe_area(window));

    // Native size as seen from the window, before undoing the rotation.
    let seen = if rotation.is_quarter_turn() {
        native.transpose()
    } else {
        native
    };
    let scaled = Rect::new(
        floor_scale(safe.left - draw.left, seen.width, draw.width()),
        floor_scale(safe.top - draw.top, seen.height, draw.height()),
        floor_scale(safe.right - draw.left, seen.width, draw.width()),
        floor_scale(safe.bottom - draw.top, seen.height, draw.height()),
    );

    let (w, h) = (native.width, native.height);
    let rect = match rotation {
        RotationMode::Normal => scaled,
        RotationMode::Rotate90 => Rect::new(
            scaled.top,
            h - scaled.right,
            scaled.bottom,
            h - scaled.left,
        ),
        RotationMode::Rotate180 => Rect::new(
            w - scaled.right,
            h - scaled.bottom,
            w - scaled.left,
            h - scaled.top,
        ),
        RotationMode::Rotate270 => Rect::new(
            w - scaled.bottom,
            scaled.left,
            w - scaled.top,
            scaled.right,
        ),
    };
    SafeOverlayArea { rect, native }
}

#[cfg(test)]
mod tests {
    use letterbox_geometry::{Insets, Rect, Size};

    use super::safe_overlay_area;
    use crate::area::DisplayArea;
    use crate::config::RotationMode;

    #[test]
    fn zero_insets_cover_whole_overlay() {
        let overlay = DisplayArea::new(Rect::new(0, 0, 800, 600), Size::new(1024, 768));
        let window = Size::new(800, 600);
        let safe = safe_overlay_area(&overlay, RotationMode::Normal, window, Insets::ZERO);
        assert_eq!(safe.rect, Rect::new(0, 0, 1024, 768));
        assert_eq!(safe.native, Size::new(1024, 768));
    }

    #[test]
    fn notch_is_cut_and_scaled() {
        let overlay = DisplayArea::new(Rect::new(0, 0, 800, 600), Size::new(400, 300));
        let insets = Insets::new(40, 0, 0, 20);
        let safe = safe_overlay_area(&overlay, RotationMode::Normal, Size::new(800, 600), insets);
        assert_eq!(safe.rect, Rect::new(20, 0, 400, 290));
    }

    #[test]
    fn rotations_move_the_cut_edge() {
        // Overlay 400x300 rotated a quarter turn into a 600x800 window at 2x.
        let overlay = DisplayArea::new(Rect::new(0, 0, 600, 800), Size::new(400, 300));
        let window = Size::new(600, 800);
        // Notch on the window's left edge.
        let insets = Insets::new(60, 0, 0, 0);

        let r90 = safe_overlay_area(&overlay, RotationMode::Rotate90, window, insets);
        // Window x runs along the overlay's reversed y axis: bottom rows are cut.
        assert_eq!(r90.rect, Rect::new(0, 0, 400, 270));

        let r270 = safe_overlay_area(&overlay, RotationMode::Rotate270, window, insets);
        // Window x runs along the overlay's y axis: top rows are cut.
        assert_eq!(r270.rect, Rect::new(0, 30, 400, 300));

        let flat = DisplayArea::new(Rect::new(0, 0, 800, 600), Size::new(400, 300));
        let r180 = safe_overlay_area(&flat, RotationMode::Rotate180, Size::new(800, 600), insets);
        // The window's left edge is the overlay's right edge.
        assert_eq!(r180.rect, Rect::new(0, 0, 370, 300));
    }

    #[test]
    fn unused_overlay_is_empty() {
        let safe = safe_overlay_area(
            &DisplayArea::default(),
            RotationMode::Normal,
            Size::new(800, 600),
            Insets::new(10, 10, 10, 10),
        );
        assert!(safe.rect.is_empty());
        assert_eq!(safe.native, Size::ZERO);
    }
}
