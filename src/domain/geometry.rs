//! Geometry primitives shared by the positioner and the dismissal monitor.
//!
//! Coordinates are in host units: pixels for a graphical host, character
//! cells for the terminal host. The y axis grows downwards.

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoselect::domain::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 2.0);
    /// assert!(rect.contains(Point::new(0.0, 1.5)));
    /// assert!(!rect.contains(Point::new(10.0, 1.0)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Placement of the floating panel, derived from the anchor rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelPosition {
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

impl PanelPosition {
    /// Expands the placement into a rectangle of the given height.
    #[must_use]
    pub const fn to_rect(self, height: f32) -> Rect {
        Rect::new(self.left, self.top, self.width, height)
    }
}
