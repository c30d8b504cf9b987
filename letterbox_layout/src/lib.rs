// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=letterbox_layout --heading-base-level=0

//! Letterbox Layout: present fixed-size virtual surfaces in a resizable window.
//!
//! A game renders into a framebuffer of fixed native size; a launcher or menu
//! overlay has a native size of its own. This crate decides where each of
//! those surfaces is drawn inside a host window of arbitrary size, and
//! converts pointer positions between the window and the active surface.
//!
//! It covers:
//! - Six [`StretchPolicy`] rules, from pixel-exact integer scaling to
//!   aspect-correct fitting and plain stretching.
//! - Two-axis [`Alignment`] within the host's safe area (window minus
//!   [`Insets`](letterbox_geometry::Insets) such as a display notch).
//! - Quarter-turn [`RotationMode`]s for hosts whose orientation differs from
//!   the surface's.
//! - Screen shake on the game surface.
//! - Pointer conversion ([`mapping`]) with exact integer rounding, and
//!   cursor warps that do not fight the host's own pointer.
//!
//! It does **not** draw anything or talk to a window system. Host and
//! renderer capabilities are supplied through the [`DisplayBackend`] trait,
//! and all geometry is integer arithmetic so results are identical on every
//! platform.
//!
//! ## Minimal example
//!
//! ```rust
//! use letterbox_geometry::{Point, Rect, Size};
//! use letterbox_layout::{DisplayBackend, StretchPolicy, WindowedDisplay};
//!
//! struct Host;
//!
//! impl DisplayBackend for Host {
//!     fn game_size(&self) -> Size {
//!         Size::new(320, 240)
//!     }
//!     fn overlay_size(&self) -> Size {
//!         Size::ZERO
//!     }
//!     fn game_needs_aspect_ratio_correction(&self) -> bool {
//!         false
//!     }
//!     fn handle_resize(&mut self, _width: i32, _height: i32) {}
//!     fn set_system_pointer_position(&mut self, _position: Point) {}
//! }
//!
//! let mut display = WindowedDisplay::new(Host);
//! display.handle_resize(800, 600);
//! display.set_stretch_policy(StretchPolicy::Integral);
//! assert_eq!(display.game_area().draw_rect, Rect::new(80, 60, 720, 540));
//!
//! // A click in the middle of the window lands in the middle of the game.
//! assert_eq!(display.window_to_virtual(Point::new(400, 300)), Point::new(160, 120));
//! ```
//!
//! ## Logging
//!
//! Layout passes, resizes and overlay transitions are reported through the
//! [`log`] facade at `debug` level, warps and pointer motion at `trace`, and
//! configuration fallbacks at `warn`. No logger is installed by this crate.
//!
//! This crate is `no_std`.

#![no_std]

mod area;
mod backend;
mod config;
mod cursor;
mod display;
pub mod mapping;
mod safe_area;

pub use area::{DisplayArea, Shake, compute_draw_rect, desired_game_aspect};
pub use backend::DisplayBackend;
pub use config::{
    Alignment, DisplayConfig, HorizontalAlign, RotationMode, StretchPolicy, VerticalAlign,
};
pub use cursor::CursorState;
pub use display::{ActiveSurface, WindowedDisplay};
pub use mapping::MappingError;
pub use safe_area::{SafeOverlayArea, safe_overlay_area};
