// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer conversion between window space and a virtual surface's space.
//!
//! Both directions scale with round-half-up integer arithmetic
//! ([`round_scale`]) and clamp their output: window points to the draw
//! rectangle, virtual points to `[0, native - 1]` on each axis.
//!
//! For every window point `p` inside the draw rectangle,
//! `virtual_to_window(window_to_virtual(p))` lands within one scale step of
//! `p`, and a second round trip through virtual space is stable.

use core::fmt;

use letterbox_geometry::{Point, Rect, Size, round_scale};

use crate::area::DisplayArea;
use crate::config::RotationMode;

/// Error returned when converting against a display area that was never laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingError {
    /// The area has a zero native size or an empty draw rectangle.
    UninitializedArea {
        /// Native size of the area.
        native: Size,
        /// Draw rectangle of the area.
        draw_rect: Rect,
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UninitializedArea { native, draw_rect } => write!(
                f,
                "pointer conversion requested without a valid display area \
                 (native {}x{}, draw rect {}x{})",
                native.width,
                native.height,
                draw_rect.width(),
                draw_rect.height()
            ),
        }
    }
}

impl core::error::Error for MappingError {}

fn check(area: &DisplayArea) -> Result<(), MappingError> {
    if area.is_valid() {
        Ok(())
    } else {
        Err(MappingError::UninitializedArea {
            native: area.native,
            draw_rect: area.draw_rect,
        })
    }
}

/// Converts a point in `area`'s virtual space to window space.
///
/// The input is first clamped to the native bounds, and the result to the
/// draw rectangle. Scaling is monotonic, so clamping the input first only
/// keeps the arithmetic in range and never changes the result.
///
/// # Errors
///
/// Returns [`MappingError::UninitializedArea`] if `area` is not valid.
pub fn virtual_to_window(
    area: &DisplayArea,
    rotation: RotationMode,
    pt: Point,
) -> Result<Point, MappingError> {
    check(area)?;
    let rect = area.draw_rect;
    let pt = pt.clamp_to(Rect::from_size(area.native));
    let (w, h) = (area.native.width, area.native.height);
    let (dw, dh) = (rect.width(), rect.height());
    let (dx, dy) = match rotation {
        RotationMode::Normal => (round_scale(pt.x, dw, w), round_scale(pt.y, dh, h)),
        RotationMode::Rotate90 => (round_scale(h - 1 - pt.y, dw, h), round_scale(pt.x, dh, w)),
        RotationMode::Rotate180 => (
            round_scale(w - 1 - pt.x, dw, w),
            round_scale(h - 1 - pt.y, dh, h),
        ),
        RotationMode::Rotate270 => (round_scale(pt.y, dw, h), round_scale(w - 1 - pt.x, dh, w)),
    };
    Ok(Point::new(rect.left.saturating_add(dx), rect.top.saturating_add(dy)).clamp_to(rect))
}

/// Converts a window-space point to `area`'s virtual space.
///
/// The input is first clamped to the draw rectangle, and the result to the
/// native bounds.
///
/// # Errors
///
/// Returns [`MappingError::UninitializedArea`] if `area` is not valid.
pub fn window_to_virtual(
    area: &DisplayArea,
    rotation: RotationMode,
    pt: Point,
) -> Result<Point, MappingError> {
    check(area)?;
    let rect = area.draw_rect;
    let pt = pt.clamp_to(rect);
    let (dx, dy) = (pt.x - rect.left, pt.y - rect.top);
    let (w, h) = (area.native.width, area.native.height);
    let (dw, dh) = (rect.width(), rect.height());
    let (vx, vy) = match rotation {
        RotationMode::Normal => (round_scale(dx, w, dw), round_scale(dy, h, dh)),
        RotationMode::Rotate90 => (round_scale(dy, w, dh), h - 1 - round_scale(dx, h, dw)),
        RotationMode::Rotate180 => (
            w - 1 - round_scale(dx, w, dw),
            h - 1 - round_scale(dy, h, dh),
        ),
        RotationMode::Rotate270 => (w - 1 - round_scale(dy, w, dh), round_scale(dx, h, dw)),
    };
    Ok(Point::new(vx, vy).clamp_to(Rect::from_size(area.native)))
}
