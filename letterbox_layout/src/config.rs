// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User-tunable layout settings: stretch policy, alignment and rotation.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a virtual surface's native size maps to window pixels.
///
/// The discriminants are the stable raw values used by configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum StretchPolicy {
    /// Draw at native size, dividing by the smallest integer that makes the
    /// surface fit when the window is too small.
    Center = 0,
    /// Like [`StretchPolicy::Center`], then grow by the largest integer
    /// multiple that still fits.
    Integral = 1,
    /// Integer horizontal scale with the vertical scale chosen to stay close to
    /// the desired aspect ratio.
    IntegralAspectRatio = 2,
    /// Largest rectangle that fits while keeping the desired aspect ratio.
    #[default]
    Fit = 3,
    /// Fill the safe area exactly, ignoring aspect ratio.
    Stretch = 4,
    /// Like [`StretchPolicy::Fit`] with the aspect ratio forced to 4:3.
    FitForcedAspect = 5,
}

impl StretchPolicy {
    /// All policies, in raw value order.
    pub const ALL: [Self; 6] = [
        Self::Center,
        Self::Integral,
        Self::IntegralAspectRatio,
        Self::Fit,
        Self::Stretch,
        Self::FitForcedAspect,
    ];

    /// Decodes a raw configuration value.
    ///
    /// Unknown values fall back to [`StretchPolicy::Center`].
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Center,
            1 => Self::Integral,
            2 => Self::IntegralAspectRatio,
            3 => Self::Fit,
            4 => Self::Stretch,
            5 => Self::FitForcedAspect,
            _ => {
                log::warn!("unknown stretch policy {raw}, falling back to center");
                Self::Center
            }
        }
    }

    /// Decodes a configuration name such as `"fit"` or `"pixel-perfect"`.
    ///
    /// Matching is ASCII case-insensitive. Unknown names fall back to
    /// [`StretchPolicy::Center`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                log::warn!("unknown stretch policy {name:?}, falling back to center");
                Self::Center
            })
    }

    /// The raw configuration value.
    #[must_use]
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    /// The configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Integral => "pixel-perfect",
            Self::IntegralAspectRatio => "even-pixels",
            Self::Fit => "fit",
            Self::Stretch => "stretch",
            Self::FitForcedAspect => "fit_force_aspect",
        }
    }
}

impl fmt::Display for StretchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal placement of a draw rectangle inside the safe area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalAlign {
    /// Centered; an odd leftover pixel goes to the right margin.
    #[default]
    Center,
    /// Pinned to the left edge.
    Left,
    /// Pinned to the right edge.
    Right,
}

/// Vertical placement of a draw rectangle inside the safe area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalAlign {
    /// Centered; an odd leftover pixel goes to the bottom margin.
    #[default]
    Middle,
    /// Pinned to the top edge.
    Top,
    /// Pinned to the bottom edge.
    Bottom,
}

/// Two-axis alignment of a draw rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alignment {
    /// Horizontal placement.
    pub horizontal: HorizontalAlign,
    /// Vertical placement.
    pub vertical: VerticalAlign,
}

impl Alignment {
    /// Centered on both axes.
    pub const CENTERED: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Middle);

    const X_MASK: u8 = 0b0011;
    const Y_MASK: u8 = 0b1100;

    /// Creates a new alignment.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Decodes the packed layout: bits 0-1 hold `1 = left, 2 = right`,
    /// bits 2-3 hold `4 = top, 8 = bottom`; zero or unknown values center.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        let horizontal = match bits & Self::X_MASK {
            1 => HorizontalAlign::Left,
            2 => HorizontalAlign::Right,
            _ => HorizontalAlign::Center,
        };
        let vertical = match bits & Self::Y_MASK {
            4 => VerticalAlign::Top,
            8 => VerticalAlign::Bottom,
            _ => VerticalAlign::Middle,
        };
        Self::new(horizontal, vertical)
    }

    /// Encodes the alignment in the packed layout read by [`Alignment::from_bits`].
    #[must_use]
    pub const fn to_bits(self) -> u8 {
        let x = match self.horizontal {
            HorizontalAlign::Center => 0,
            HorizontalAlign::Left => 1,
            HorizontalAlign::Right => 2,
        };
        let y = match self.vertical {
            VerticalAlign::Middle => 0,
            VerticalAlign::Top => 4,
            VerticalAlign::Bottom => 8,
        };
        x | y
    }
}

/// Rotation applied to a virtual surface before it is presented in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RotationMode {
    /// No rotation.
    #[default]
    Normal,
    /// Rotated a quarter turn clockwise.
    Rotate90,
    /// Rotated a half turn.
    Rotate180,
    /// Rotated three quarter turns clockwise.
    Rotate270,
}

impl RotationMode {
    /// Decodes a rotation in degrees.
    ///
    /// Any multiple of 90 is accepted (including negative angles); other
    /// values fall back to [`RotationMode::Normal`].
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            0 => Self::Normal,
            90 => Self::Rotate90,
            180 => Self::Rotate180,
            270 => Self::Rotate270,
            _ => {
                log::warn!("unsupported rotation {degrees} degrees, using no rotation");
                Self::Normal
            }
        }
    }

    /// The rotation in degrees, in `0..360`.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Returns `true` for the rotations that swap the window's axes.
    #[must_use]
    pub const fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Layout settings usually read from user configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Stretch policy for both the game and the overlay surface.
    pub stretch: StretchPolicy,
    /// Placement inside the safe area.
    pub alignment: Alignment,
    /// Rotation between virtual surfaces and the window.
    pub rotation: RotationMode,
}

#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::StretchPolicy;

    impl Serialize for StretchPolicy {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    struct PolicyVisitor;

    impl Visitor<'_> for PolicyVisitor {
        type Value = StretchPolicy;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a stretch policy name or raw value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<StretchPolicy, E> {
            Ok(StretchPolicy::from_name(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<StretchPolicy, E> {
            Ok(StretchPolicy::from_raw(i32::try_from(v).unwrap_or(-1)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<StretchPolicy, E> {
            Ok(StretchPolicy::from_raw(i32::try_from(v).unwrap_or(-1)))
        }
    }

    impl<'de> Deserialize<'de> for StretchPolicy {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(PolicyVisitor)
        }
    }
}
