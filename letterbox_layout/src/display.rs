// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use letterbox_geometry::{Frac, Point, Rect, Size};

use crate::area::{DisplayArea, Shake, compute_draw_rect, desired_game_aspect};
use crate::backend::DisplayBackend;
use crate::config::{Alignment, DisplayConfig, RotationMode, StretchPolicy};
use crate::cursor::CursorState;
use crate::mapping::{self, MappingError};
use crate::safe_area::{SafeOverlayArea, safe_overlay_area};

/// Which virtual surface pointer coordinates currently refer to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveSurface {
    /// The game surface.
    #[default]
    Game,
    /// The overlay surface.
    Overlay,
}

/// Layout state for one window presenting a game surface and an overlay.
///
/// `WindowedDisplay` owns the window size, the layout configuration and the
/// two computed [`DisplayArea`]s, and converts pointer coordinates against
/// whichever one is active. Display areas are always recomputed in full;
/// every setter that affects layout recomputes before returning, except
/// [`WindowedDisplay::handle_resize`], which leaves that to an explicit
/// [`WindowedDisplay::recalculate_display_areas`] call.
#[derive(Debug)]
pub struct WindowedDisplay<B: DisplayBackend> {
    backend: B,
    window: Size,
    config: DisplayConfig,
    shake: Point,
    game: DisplayArea,
    overlay: DisplayArea,
    active: ActiveSurface,
    overlay_visible: bool,
    overlay_in_gui: bool,
    force_redraw: bool,
    cursor: CursorState,
    cursor_last_in_active_area: bool,
}

impl<B: DisplayBackend> WindowedDisplay<B> {
    /// Creates a display with the default configuration and an empty window.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, DisplayConfig::default())
    }

    /// Creates a display with the given configuration and an empty window.
    #[must_use]
    pub fn with_config(backend: B, config: DisplayConfig) -> Self {
        Self {
            backend,
            window: Size::ZERO,
            config,
            shake: Point::ZERO,
            game: DisplayArea::default(),
            overlay: DisplayArea::default(),
            active: ActiveSurface::Game,
            overlay_visible: false,
            overlay_in_gui: false,
            force_redraw: false,
            cursor: CursorState::default(),
            cursor_last_in_active_area: true,
        }
    }

    /// The injected backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the injected backend.
    ///
    /// Changes that affect layout (surface sizes, insets) take effect on the
    /// next [`WindowedDisplay::recalculate_display_areas`].
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Window size, excluding decorations.
    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Window width, excluding decorations.
    #[must_use]
    pub fn window_width(&self) -> i32 {
        self.window.width
    }

    /// Window height, excluding decorations.
    #[must_use]
    pub fn window_height(&self) -> i32 {
        self.window.height
    }

    /// Current layout configuration.
    #[must_use]
    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    /// Current stretch policy.
    #[must_use]
    pub fn stretch_policy(&self) -> StretchPolicy {
        self.config.stretch
    }

    /// Current alignment.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.config.alignment
    }

    /// Current rotation.
    #[must_use]
    pub fn rotation(&self) -> RotationMode {
        self.config.rotation
    }

    /// Current shake offset, in game pixels.
    #[must_use]
    pub fn shake_offset(&self) -> Point {
        self.shake
    }

    /// Display area of the game surface.
    #[must_use]
    pub fn game_area(&self) -> DisplayArea {
        self.game
    }

    /// Display area of the overlay surface.
    #[must_use]
    pub fn overlay_area(&self) -> DisplayArea {
        self.overlay
    }

    /// Which surface pointer coordinates refer to.
    #[must_use]
    pub fn active_surface(&self) -> ActiveSurface {
        self.active
    }

    /// Display area of the active surface.
    #[must_use]
    pub fn active_area(&self) -> DisplayArea {
        match self.active {
            ActiveSurface::Game => self.game,
            ActiveSurface::Overlay => self.overlay,
        }
    }

    /// Records a new window size and forwards it to the backend.
    ///
    /// Display areas are not recomputed.
    pub fn handle_resize(&mut self, width: i32, height: i32) {
        log::debug!("window resized to {width}x{height}");
        self.window = Size::new(width, height);
        self.backend.handle_resize(width, height);
    }

    /// Replaces the whole configuration and recomputes once.
    pub fn apply_config(&mut self, config: DisplayConfig) {
        if self.config != config {
            self.config = config;
            self.recalculate_display_areas();
        }
    }

    /// Sets the stretch policy and recomputes.
    pub fn set_stretch_policy(&mut self, stretch: StretchPolicy) {
        self.apply_config(DisplayConfig {
            stretch,
            ..self.config
        });
    }

    /// Sets the alignment and recomputes.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.apply_config(DisplayConfig {
            alignment,
            ..self.config
        });
    }

    /// Sets the rotation and recomputes.
    pub fn set_rotation(&mut self, rotation: RotationMode) {
        self.apply_config(DisplayConfig {
            rotation,
            ..self.config
        });
    }

    /// Sets the game shake offset, recomputing only if it changed.
    pub fn set_shake_offset(&mut self, x: i32, y: i32) {
        let shake = Point::new(x, y);
        if self.shake != shake {
            self.shake = shake;
            self.recalculate_display_areas();
            self.cursor.mark_needs_redraw();
        }
    }

    /// Recomputes the game and overlay display areas from scratch.
    ///
    /// Does nothing while the window has no area.
    pub fn recalculate_display_areas(&mut self) {
        if self.window.is_empty() {
            log::warn!(
                "skipping layout for empty window {}x{}",
                self.window.width,
                self.window.height
            );
            return;
        }
        let DisplayConfig {
            stretch,
            alignment,
            rotation,
        } = self.config;
        let window_rect = Rect::from_size(self.window);

        let mut safe = self.backend.safe_area_insets().safe_area(self.window);
        if safe.is_empty() {
            log::warn!("safe area insets cover the whole window, ignoring them");
            safe = window_rect;
        }

        let game_size = self.backend.game_size();
        let aspect =
            desired_game_aspect(game_size, self.backend.game_needs_aspect_ratio_correction());
        let shake = (self.shake != Point::ZERO).then_some(Shake {
            offset: self.shake,
            reference: game_size,
        });
        let render_size = game_size.scale(self.backend.game_render_scale().max(1));
        let game_rect = compute_draw_rect(
            render_size,
            aspect,
            stretch,
            safe,
            rotation,
            alignment,
            shake,
        );
        self.game = DisplayArea::new(game_rect, game_size);

        let overlay_size = self.backend.overlay_size();
        let overlay_rect = if overlay_size.is_empty() {
            Rect::ZERO
        } else {
            compute_draw_rect(
                overlay_size,
                Frac::ratio(overlay_size.width, overlay_size.height),
                stretch,
                window_rect,
                rotation,
                alignment,
                None,
            )
        };
        self.overlay = DisplayArea::new(overlay_rect, overlay_size);

        log::debug!(
            "layout {stretch} {rotation:?}: game {:?} overlay {:?}",
            self.game.draw_rect,
            self.overlay.draw_rect
        );
        self.select_active_area();
    }

    /// Shows the overlay.
    ///
    /// With `in_gui`, pointer coordinates refer to the overlay; otherwise
    /// they keep referring to the game surface.
    pub fn show_overlay(&mut self, in_gui: bool) {
        self.overlay_in_gui = in_gui;
        if self.overlay_visible {
            self.active = self.wanted_surface();
            return;
        }
        log::debug!("showing overlay (in gui: {in_gui})");
        self.overlay_visible = true;
        self.force_redraw = true;
        self.select_active_area();
    }

    /// Hides the overlay and makes the game surface active.
    pub fn hide_overlay(&mut self) {
        if !self.overlay_visible {
            return;
        }
        log::debug!("hiding overlay");
        self.overlay_in_gui = false;
        self.overlay_visible = false;
        self.force_redraw = true;
        self.select_active_area();
    }

    /// Returns `true` while the overlay is shown.
    #[must_use]
    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Returns `true` if pointer coordinates refer to the overlay.
    #[must_use]
    pub fn is_overlay_in_gui(&self) -> bool {
        self.overlay_in_gui
    }

    /// Returns whether a full redraw was requested and clears the request.
    pub fn take_force_redraw(&mut self) -> bool {
        core::mem::take(&mut self.force_redraw)
    }

    /// The safe part of the overlay, in overlay coordinates.
    #[must_use]
    pub fn safe_overlay_area(&self) -> SafeOverlayArea {
        safe_overlay_area(
            &self.overlay,
            self.config.rotation,
            self.window,
            self.backend.safe_area_insets(),
        )
    }

    /// Converts a point in the active surface's space to window space.
    ///
    /// # Panics
    ///
    /// Panics if the active area was never laid out. Converting before the
    /// first layout pass is a caller bug.
    #[must_use]
    pub fn virtual_to_window(&self, pt: Point) -> Point {
        self.try_virtual_to_window(pt)
            .unwrap_or_else(|err| panic!("virtual_to_window: {err}"))
    }

    /// Converts a window-space point to the active surface's space.
    ///
    /// # Panics
    ///
    /// Panics if the active area was never laid out. Converting before the
    /// first layout pass is a caller bug.
    #[must_use]
    pub fn window_to_virtual(&self, pt: Point) -> Point {
        self.try_window_to_virtual(pt)
            .unwrap_or_else(|err| panic!("window_to_virtual: {err}"))
    }

    /// Fallible form of [`WindowedDisplay::virtual_to_window`].
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UninitializedArea`] if the active area was
    /// never laid out.
    pub fn try_virtual_to_window(&self, pt: Point) -> Result<Point, MappingError> {
        mapping::virtual_to_window(&self.active_area(), self.config.rotation, pt)
    }

    /// Fallible form of [`WindowedDisplay::window_to_virtual`].
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UninitializedArea`] if the active area was
    /// never laid out.
    pub fn try_window_to_virtual(&self, pt: Point) -> Result<Point, MappingError> {
        mapping::window_to_virtual(&self.active_area(), self.config.rotation, pt)
    }

    /// The rendered cursor.
    #[must_use]
    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Mutable access to the rendered cursor, for clearing its redraw flag.
    pub fn cursor_mut(&mut self) -> &mut CursorState {
        &mut self.cursor
    }

    /// Shows or hides the rendered cursor, returning the previous visibility.
    pub fn show_cursor(&mut self, visible: bool) -> bool {
        self.cursor.set_visible(visible)
    }

    /// Moves the rendered cursor without touching the system pointer.
    pub fn set_rendered_cursor_position(&mut self, position: Point) {
        self.cursor.set_rendered_position(position);
    }

    /// Returns `true` if the last host pointer position was inside the
    /// active draw rectangle.
    #[must_use]
    pub fn cursor_last_in_active_area(&self) -> bool {
        self.cursor_last_in_active_area
    }

    /// Warps the cursor to a position in the active surface's space.
    ///
    /// Nothing happens if the rendered cursor already maps to that virtual
    /// pixel. Otherwise the rendered cursor moves immediately and the backend
    /// is asked to move the system pointer to the same window position.
    /// Returns `true` if a warp was issued.
    ///
    /// # Panics
    ///
    /// Panics if the active area was never laid out.
    pub fn warp_cursor(&mut self, x: i32, y: i32) -> bool {
        let target = Point::new(x, y);
        let current = self.window_to_virtual(self.cursor.position());
        if current == target {
            log::trace!("warp to {x},{y} skipped, cursor already there");
            return false;
        }
        let window = self.virtual_to_window(target);
        log::trace!("warp to {x},{y} -> window {},{}", window.x, window.y);
        self.cursor.set_rendered_position(window);
        self.backend.set_system_pointer_position(window);
        true
    }

    /// Handles a host pointer motion in window pixels.
    ///
    /// Moves the rendered cursor and returns the position in the active
    /// surface's space.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UninitializedArea`] if the active area was
    /// never laid out; the rendered cursor is still moved.
    pub fn notify_pointer_position(&mut self, position: Point) -> Result<Point, MappingError> {
        self.cursor_last_in_active_area = self.active_area().draw_rect.contains(position);
        self.cursor.set_rendered_position(position);
        let mapped = self.try_window_to_virtual(position);
        log::trace!(
            "pointer at {},{} (in active area: {}) -> {mapped:?}",
            position.x,
            position.y,
            self.cursor_last_in_active_area
        );
        mapped
    }

    /// [`WindowedDisplay::notify_pointer_position`] for hosts reporting
    /// floating point positions.
    ///
    /// # Errors
    ///
    /// See [`WindowedDisplay::notify_pointer_position`].
    pub fn notify_pointer_motion(
        &mut self,
        position: kurbo::Point,
    ) -> Result<Point, MappingError> {
        self.notify_pointer_position(Point::from_kurbo_floor(position))
    }

    fn wanted_surface(&self) -> ActiveSurface {
        if self.overlay_in_gui {
            ActiveSurface::Overlay
        } else {
            ActiveSurface::Game
        }
    }

    fn select_active_area(&mut self) {
        self.active = self.wanted_surface();
        let area = self.active_area();
        self.backend.active_area_changed(&area);
    }
}
