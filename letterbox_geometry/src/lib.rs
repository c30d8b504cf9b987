// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=letterbox_geometry --heading-base-level=0

//! Letterbox Geometry: integer pixel geometry for window layout.
//!
//! This crate provides the small value types the Letterbox layout engine is
//! built from:
//! - [`Point`], [`Size`] and [`Rect`] in whole pixels, with intersection,
//!   containment and clamping helpers that never produce inverted rectangles.
//! - [`Insets`] describing host-reserved margins and the safe area they leave.
//! - [`Frac`], a 16.16 fixed-point ratio, and the [`round_scale`] /
//!   [`floor_scale`] helpers used for axis scaling.
//!
//! Everything is integer arithmetic so that layouts are bit-identical across
//! platforms. Conversions to and from [`kurbo`] types are provided for hosts
//! that report pointer positions in floating point and for renderers.
//!
//! ## Minimal example
//!
//! ```rust
//! use letterbox_geometry::{Frac, Insets, Point, Rect, Size};
//!
//! let safe = Insets::new(0, 20, 0, 0).safe_area(Size::new(800, 600));
//! assert_eq!(safe, Rect::new(0, 20, 800, 600));
//!
//! // Keep a rectangle inside the safe area.
//! let mut r = Rect::new(700, 0, 900, 100);
//! r.constrain(&safe);
//! assert_eq!(r, Rect::new(600, 20, 800, 120));
//!
//! assert_eq!(Point::new(900, 5).clamp_to(safe), Point::new(799, 20));
//! assert_eq!(Frac::FOUR_THIRDS.div_into(640), 480);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod frac;
mod insets;
mod rect;

pub use frac::{FRAC_BITS, Frac, floor_scale, round_scale};
pub use insets::Insets;
pub use rect::{Point, Rect, Size};
