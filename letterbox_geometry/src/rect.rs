// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A pixel position with integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamps the point to the last pixel inside `rect`.
    ///
    /// For an empty `rect` the result collapses onto its origin.
    #[must_use]
    pub fn clamp_to(self, rect: Rect) -> Self {
        Self {
            x: self.x.clamp(rect.left, (rect.right - 1).max(rect.left)),
            y: self.y.clamp(rect.top, (rect.bottom - 1).max(rect.top)),
        }
    }

    /// Converts a host (floating point) position to the pixel containing it.
    #[must_use]
    pub fn from_kurbo_floor(pt: kurbo::Point) -> Self {
        Self {
            x: floor_to_i32(pt.x),
            y: floor_to_i32(pt.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(pt: Point) -> Self {
        Self::new(f64::from(pt.x), f64::from(pt.y))
    }
}

/// A width and height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either extent is zero or negative.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Swaps width and height.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Multiplies both extents by `factor`.
    #[must_use]
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned pixel rectangle.
///
/// The right and bottom edges are exclusive, so a rectangle spanning
/// `left..right` covers `right - left` columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost column (inclusive).
    pub left: i32,
    /// Topmost row (inclusive).
    pub top: i32,
    /// Rightmost column (exclusive).
    pub right: i32,
    /// Bottom row (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    /// Creates a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Width and height of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Returns `true` if `pt` lies on a pixel covered by the rectangle.
    #[must_use]
    pub const fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x < self.right && pt.y >= self.top && pt.y < self.bottom
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Intersection of two rectangles.
    ///
    /// Disjoint inputs yield an empty rectangle anchored inside `self`, never
    /// an inverted one.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        Self::new(
            left,
            top,
            left.max(self.right.min(other.right)),
            top.max(self.bottom.min(other.bottom)),
        )
    }

    /// Moves the rectangle by `(dx, dy)`.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Swaps the horizontal and vertical axes.
    #[must_use]
    pub const fn transpose(&self) -> Self {
        Self::new(self.top, self.left, self.bottom, self.right)
    }

    /// Shrinks the rectangle so it is no larger than `bounds`, then shifts it
    /// so that it lies within `bounds`.
    ///
    /// Returns `true` if the rectangle changed.
    pub fn constrain(&mut self, bounds: &Self) -> bool {
        let (mut x, mut y) = (self.left, self.top);
        let (mut w, mut h) = (self.width(), self.height());
        bounds.constrain_parts(&mut x, &mut y, &mut w, &mut h);
        let constrained = Self::from_origin_size(Point::new(x, y), Size::new(w, h));
        let changed = *self != constrained;
        *self = constrained;
        changed
    }

    /// Component form of [`Rect::constrain`], using `self` as the bounds.
    pub fn constrain_parts(&self, x: &mut i32, y: &mut i32, w: &mut i32, h: &mut i32) {
        *w = (*w).min(self.width());
        *h = (*h).min(self.height());
        *x = (*x).min(self.right - *w).max(self.left);
        *y = (*y).min(self.bottom - *h).max(self.top);
    }

    /// Converts the rectangle to a Kurbo rectangle for rendering backends.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(rect: Rect) -> Self {
        rect.to_kurbo()
    }
}

// `f64::floor` needs std; float-to-int casts saturate and map NaN to zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating cast, fractional part handled below"
)]
fn floor_to_i32(v: f64) -> i32 {
    let t = v as i32;
    if f64::from(t) > v {
        t.saturating_sub(1)
    } else {
        t
    }
}
