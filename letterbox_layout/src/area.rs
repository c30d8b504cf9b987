// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw rectangle computation for a single virtual surface.
//!
//! [`compute_draw_rect`] sizes a surface with one of the [`StretchPolicy`]
//! rules, places it inside the safe area according to an [`Alignment`], and
//! maps the result into window space for the active [`RotationMode`].
//!
//! Quarter turns are handled by transposing the safe area, laying the surface
//! out as if it were not rotated, and transposing the result back. The native
//! size is never transposed: surfaces are always authored axis-aligned.

use letterbox_geometry::{Frac, Point, Rect, Size};

use crate::config::{Alignment, HorizontalAlign, RotationMode, StretchPolicy, VerticalAlign};

/// Where a virtual surface is drawn and the size of its own coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DisplayArea {
    /// Window-space rectangle the surface is scaled into.
    pub draw_rect: Rect,
    /// Size of the surface's own (unscaled) coordinate space.
    pub native: Size,
}

impl DisplayArea {
    /// Creates a display area.
    #[must_use]
    pub const fn new(draw_rect: Rect, native: Size) -> Self {
        Self { draw_rect, native }
    }

    /// Returns `true` if both the draw rectangle and the native size are non-empty.
    ///
    /// Pointer conversion is only defined for valid areas.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.draw_rect.is_empty() && !self.native.is_empty()
    }
}

/// A screen-shake displacement, applied to the game surface only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shake {
    /// Offset in the surface's native pixels.
    pub offset: Point,
    /// Native size the offset is expressed against; it is scaled by
    /// `drawn size / reference` before being applied.
    pub reference: Size,
}

/// Aspect ratio the game surface should be presented with.
///
/// Surfaces that report a zero dimension, or that ask for aspect ratio
/// correction, are shown at 4:3; all others keep their native ratio.
#[must_use]
pub fn desired_game_aspect(native: Size, needs_aspect_correction: bool) -> Frac {
    if native.is_empty() || needs_aspect_correction {
        Frac::FOUR_THIRDS
    } else {
        Frac::ratio(native.width, native.height)
    }
}

/// Computes the window-space rectangle for a surface of size `native`.
///
/// - `desired_aspect` is the presentation aspect ratio (width over height).
/// - `safe_area` is the window region the result must stay within. An empty
///   safe area yields an empty rectangle.
/// - `shake`, when present, is added after alignment and before the final
///   clamp, so the result always stays inside `safe_area`.
///
/// The result never has a zero or negative size unless `safe_area` does.
#[must_use]
pub fn compute_draw_rect(
    native: Size,
    desired_aspect: Frac,
    policy: StretchPolicy,
    safe_area: Rect,
    rotation: RotationMode,
    alignment: Alignment,
    shake: Option<Shake>,
) -> Rect {
    if safe_area.is_empty() {
        return Rect::from_origin_size(safe_area.origin(), Size::ZERO);
    }
    let native = Size::new(native.width.max(1), native.height.max(1));
    let desired_aspect = if desired_aspect <= Frac::ZERO {
        Frac::FOUR_THIRDS
    } else {
        desired_aspect
    };

    let rotated_safe = if rotation.is_quarter_turn() {
        safe_area.transpose()
    } else {
        safe_area
    };
    let avail = rotated_safe.size();

    let size = policy_size(policy, native, desired_aspect, avail);
    let mut width = size.width.clamp(1, avail.width);
    let mut height = size.height.clamp(1, avail.height);

    let mut x = match alignment.horizontal {
        HorizontalAlign::Center => rotated_safe.left + (avail.width - width) / 2,
        HorizontalAlign::Left => rotated_safe.left,
        HorizontalAlign::Right => rotated_safe.right - width,
    };
    let mut y = match alignment.vertical {
        VerticalAlign::Middle => rotated_safe.top + (avail.height - height) / 2,
        VerticalAlign::Top => rotated_safe.top,
        VerticalAlign::Bottom => rotated_safe.bottom - height,
    };
    rotated_safe.constrain_parts(&mut x, &mut y, &mut width, &mut height);

    if let Some(shake) = shake {
        x = x.saturating_add(scale_shake(shake.offset.x, width, shake.reference.width));
        y = y.saturating_add(scale_shake(shake.offset.y, height, shake.reference.height));
        // Pin before the far edges are computed from the origin.
        rotated_safe.constrain_parts(&mut x, &mut y, &mut width, &mut height);
    }

    let mut rect = Rect::from_origin_size(Point::new(x, y), Size::new(width, height));
    if rotation.is_quarter_turn() {
        rect = rect.transpose();
    }
    rect.constrain(&safe_area);
    rect
}

/// Scales a shake offset by `drawn / native`, truncating toward zero and
/// saturating at the `i32` range.
fn scale_shake(offset: i32, drawn: i32, native: i32) -> i32 {
    if native <= 0 {
        return 0;
    }
    let scaled = i64::from(offset) * i64::from(drawn) / i64::from(native);
    i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX })
}

/// Unclamped draw size for `policy` inside an `avail`-sized (rotated) safe area.
fn policy_size(policy: StretchPolicy, native: Size, aspect: Frac, avail: Size) -> Size {
    match policy {
        StretchPolicy::Center => center_size(native, aspect, avail),
        StretchPolicy::Integral => integral_size(native, aspect, avail),
        StretchPolicy::IntegralAspectRatio => integral_aspect_size(native, aspect, avail),
        StretchPolicy::Fit => fit_size(aspect, avail),
        StretchPolicy::Stretch => avail,
        StretchPolicy::FitForcedAspect => fit_size(Frac::FOUR_THIRDS, avail),
    }
}

/// Native width with the aspect-derived height.
fn target_size(native: Size, aspect: Frac) -> Size {
    Size::new(native.width, aspect.div_into(native.width).max(1))
}

/// Divides `target` by the smallest integer that makes it fit `avail`.
///
/// Returns `None` if it already fits.
fn shrink_to_fit(target: Size, avail: Size) -> Option<Size> {
    if target.width <= avail.width && target.height <= avail.height {
        return None;
    }
    let k = 1 + ((target.width - 1) / avail.width).max((target.height - 1) / avail.height);
    Some(Size::new(target.width / k, target.height / k))
}

fn center_size(native: Size, aspect: Frac, avail: Size) -> Size {
    let target = target_size(native, aspect);
    shrink_to_fit(target, avail).unwrap_or(target)
}

fn integral_size(native: Size, aspect: Frac, avail: Size) -> Size {
    let target = target_size(native, aspect);
    if let Some(shrunk) = shrink_to_fit(target, avail) {
        return shrunk;
    }
    let k = (avail.width / target.width).min(avail.height / target.height);
    target.scale(k)
}

fn integral_aspect_size(native: Size, aspect: Frac, avail: Size) -> Size {
    let target = target_size(native, aspect);
    if let Some(shrunk) = shrink_to_fit(target, avail) {
        return shrunk;
    }
    // Largest horizontal factor first; the vertical factor follows the
    // aspect-corrected target height as closely as integers allow.
    for horizontal in (1..=avail.width / target.width).rev() {
        let vertical = (target.height * horizontal + native.height / 2) / native.height;
        let height = native.height * vertical;
        if height <= avail.height {
            return Size::new(native.width * horizontal, height);
        }
    }
    target
}

fn fit_size(aspect: Frac, avail: Size) -> Size {
    let avail_aspect = Frac::ratio(avail.width, avail.height);
    if avail_aspect < aspect {
        Size::new(avail.width, aspect.div_into(avail.width))
    } else if avail_aspect > aspect {
        Size::new(aspect.mul_int(avail.height), avail.height)
    } else {
        avail
    }
}

#[cfg(test)]
mod tests {
    use letterbox_geometry::{Frac, Point, Rect, Size};

    use super::{DisplayArea, Shake, compute_draw_rect, desired_game_aspect};
    use crate::config::{Alignment, HorizontalAlign, RotationMode, StretchPolicy, VerticalAlign};

    fn layout(native: Size, policy: StretchPolicy, window: Size) -> Rect {
        compute_draw_rect(
            native,
            desired_game_aspect(native, false),
            policy,
            Rect::from_size(window),
            RotationMode::Normal,
            Alignment::CENTERED,
            None,
        )
    }

    #[test]
    fn fit_fills_matching_aspect() {
        let r = layout(Size::new(320, 240), StretchPolicy::Fit, Size::new(800, 600));
        assert_eq!(r, Rect::new(0, 0, 800, 600));
    }

    #[test]
    fn fit_pillarboxes_wide_windows() {
        let r = layout(Size::new(320, 240), StretchPolicy::Fit, Size::new(1000, 600));
        // 600 * 4/3 floors to 799 in 16.16 fixed point.
        assert_eq!(r.size(), Size::new(799, 600));
        assert_eq!(r.left, (1000 - 799) / 2);
    }

    #[test]
    fn fit_letterboxes_tall_windows() {
        let r = layout(Size::new(320, 240), StretchPolicy::Fit, Size::new(640, 900));
        assert_eq!(r, Rect::new(0, 210, 640, 690));
    }

    #[test]
    fn stretch_fills_window() {
        let r = layout(Size::new(320, 200), StretchPolicy::Stretch, Size::new(800, 600));
        assert_eq!(r, Rect::new(0, 0, 800, 600));
    }

    #[test]
    fn center_shrinks_by_integer_divisor() {
        let r = layout(Size::new(320, 240), StretchPolicy::Center, Size::new(100, 100));
        assert_eq!(r, Rect::new(10, 20, 90, 80));
    }

    #[test]
    fn center_keeps_native_size_when_it_fits() {
        let r = layout(Size::new(320, 240), StretchPolicy::Center, Size::new(800, 600));
        assert_eq!(r, Rect::new(240, 180, 560, 420));
    }

    #[test]
    fn integral_grows_by_largest_multiple() {
        let r = layout(Size::new(320, 240), StretchPolicy::Integral, Size::new(800, 600));
        assert_eq!(r, Rect::new(80, 60, 720, 540));
        let r = layout(Size::new(320, 200), StretchPolicy::Integral, Size::new(1280, 1000));
        assert_eq!(r.size(), Size::new(1280, 800));
    }

    #[test]
    fn integral_aspect_prefers_widest_fitting_factor() {
        // 320x200 shown at 4:3 has a target height of 240.
        let native = Size::new(320, 200);
        let r = compute_draw_rect(
            native,
            Frac::FOUR_THIRDS,
            StretchPolicy::IntegralAspectRatio,
            Rect::new(0, 0, 1000, 700),
            RotationMode::Normal,
            Alignment::CENTERED,
            None,
        );
        // h=3: vertical = (240*3 + 100) / 200 = 4 -> 800 > 700, rejected.
        // h=2: vertical = (480 + 100) / 200 = 2 -> 400 fits.
        assert_eq!(r.size(), Size::new(640, 400));
    }

    #[test]
    fn integral_aspect_falls_back_to_target() {
        // A 2:3 target is 100x150; the only horizontal factor rounds the
        // vertical factor up to 2 (200 rows), which does not fit.
        let r = compute_draw_rect(
            Size::new(100, 100),
            Frac::ratio(2, 3),
            StretchPolicy::IntegralAspectRatio,
            Rect::new(0, 0, 150, 180),
            RotationMode::Normal,
            Alignment::CENTERED,
            None,
        );
        assert_eq!(r.size(), Size::new(100, 150));
    }

    #[test]
    fn forced_aspect_ignores_native_ratio() {
        let r = layout(
            Size::new(1920, 1080),
            StretchPolicy::FitForcedAspect,
            Size::new(1200, 600),
        );
        assert_eq!(r.size(), Size::new(799, 600));
    }

    #[test]
    fn alignment_pins_edges() {
        let native = Size::new(320, 240);
        let place = |alignment| {
            compute_draw_rect(
                native,
                Frac::FOUR_THIRDS,
                StretchPolicy::Center,
                Rect::new(10, 20, 810, 620),
                RotationMode::Normal,
                alignment,
                None,
            )
        };
        let top_left = place(Alignment::new(HorizontalAlign::Left, VerticalAlign::Top));
        assert_eq!(top_left.origin(), Point::new(10, 20));
        let bottom_right = place(Alignment::new(HorizontalAlign::Right, VerticalAlign::Bottom));
        assert_eq!(bottom_right, Rect::new(490, 380, 810, 620));
    }

    #[test]
    fn odd_leftover_goes_to_far_edge() {
        let r = layout(Size::new(10, 10), StretchPolicy::Center, Size::new(15, 15));
        assert_eq!(r, Rect::new(2, 2, 12, 12));
    }

    #[test]
    fn quarter_turn_transposes_result() {
        let native = Size::new(320, 240);
        let r = compute_draw_rect(
            native,
            Frac::FOUR_THIRDS,
            StretchPolicy::Fit,
            Rect::new(0, 0, 600, 800),
            RotationMode::Rotate90,
            Alignment::CENTERED,
            None,
        );
        assert_eq!(r, Rect::new(0, 0, 600, 800));

        let r = compute_draw_rect(
            native,
            Frac::FOUR_THIRDS,
            StretchPolicy::Center,
            Rect::new(0, 0, 1000, 1000),
            RotationMode::Rotate270,
            Alignment::new(HorizontalAlign::Left, VerticalAlign::Top),
            None,
        );
        assert_eq!(r.size(), Size::new(240, 320));
        assert_eq!(r.origin(), Point::ZERO);
    }

    #[test]
    fn shake_scales_and_stays_inside() {
        let native = Size::new(320, 240);
        let shake = Shake {
            offset: Point::new(3, -5),
            reference: native,
        };
        let r = compute_draw_rect(
            native,
            Frac::FOUR_THIRDS,
            StretchPolicy::Integral,
            Rect::new(0, 0, 800, 600),
            RotationMode::Normal,
            Alignment::CENTERED,
            Some(shake),
        );
        // Drawn at 2x: offsets double.
        assert_eq!(r, Rect::new(86, 50, 726, 530));

        // A rect that fills the safe area cannot move.
        let r = compute_draw_rect(
            native,
            Frac::FOUR_THIRDS,
            StretchPolicy::Fit,
            Rect::new(0, 0, 800, 600),
            RotationMode::Normal,
            Alignment::CENTERED,
            Some(shake),
        );
        assert_eq!(r, Rect::new(0, 0, 800, 600));
    }

    #[test]
    fn huge_shake_pins_to_the_matching_edge() {
        let native = Size::new(320, 240);
        let shaken = |offset| {
            compute_draw_rect(
                native,
                Frac::FOUR_THIRDS,
                StretchPolicy::Integral,
                Rect::new(0, 0, 800, 600),
                RotationMode::Normal,
                Alignment::CENTERED,
                Some(Shake {
                    offset,
                    reference: native,
                }),
            )
        };
        assert_eq!(shaken(Point::new(i32::MAX / 2, i32::MIN / 2)), Rect::new(160, 0, 800, 480));
        // Scaled past the i32 range: saturates instead of vanishing.
        assert_eq!(shaken(Point::new(i32::MAX, i32::MAX)), Rect::new(160, 120, 800, 600));
        assert_eq!(shaken(Point::new(i32::MIN, i32::MIN)), Rect::new(0, 0, 640, 480));
    }

    #[test]
    fn degenerate_inputs_stay_inert() {
        let r = layout(Size::ZERO, StretchPolicy::Integral, Size::new(100, 100));
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 100, 100).contains_rect(&r));

        let r = layout(Size::new(320, 240), StretchPolicy::Fit, Size::ZERO);
        assert!(r.is_empty());
        assert!(!DisplayArea::new(r, Size::new(320, 240)).is_valid());
    }

    #[test]
    fn desired_aspect_rules() {
        assert_eq!(desired_game_aspect(Size::new(320, 0), false), Frac::FOUR_THIRDS);
        assert_eq!(desired_game_aspect(Size::new(320, 200), true), Frac::FOUR_THIRDS);
        assert_eq!(
            desired_game_aspect(Size::new(320, 200), false),
            Frac::ratio(320, 200)
        );
    }
}
