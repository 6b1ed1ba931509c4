//! Pixel rectangles shared by the layout, mapping, and damage code.

/// An axis-aligned rectangle in pixel space.
///
/// The rectangle covers the half-open spans `[x, x + width)` and
/// `[y, y + height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    /// Check if this rectangle is empty (zero or negative area).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a horizontal coordinate falls inside `[x, right)`.
    #[must_use]
    pub const fn contains_x(&self, px: i64) -> bool {
        px >= self.x && px < self.right()
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub const fn contains(&self, px: i64, py: i64) -> bool {
        self.contains_x(px) && py >= self.y && py < self.bottom()
    }

    /// Return this rectangle moved by `(dx, dy)`.
    #[must_use]
    pub const fn translate(&self, dx: i64, dy: i64) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Compute intersection with another rectangle.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Smallest rectangle covering both. Empty rectangles are the identity.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Clamp a point into this rectangle, keeping it on the last pixel
    /// row/column when it lies past the far edges.
    #[must_use]
    pub fn clamp_point(&self, px: i64, py: i64) -> (i64, i64) {
        if self.is_empty() {
            return (self.x, self.y);
        }
        (
            px.clamp(self.x, self.right() - 1),
            py.clamp(self.y, self.bottom() - 1),
        )
    }
}
