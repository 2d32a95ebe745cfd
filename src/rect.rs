//! Rectangles on the 2D pixel grid.
use crate::Vec2;

/// A possibly-empty rectangle on the 2D grid.
///
/// Unlike a rectangle of cells, a scroll region may have a zero width or
/// height, so the size is stored and the bottom-right corner is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    top_left: Vec2,
    size: Vec2,
}

impl Rect {
    /// Creates a new `Rect` with the given position and size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::{Rect, Vec2};
    /// let region = Rect::from_size((0, 0), (500, 150));
    /// assert_eq!(region.bottom_right(), Vec2::new(500, 150));
    /// assert_eq!(region.size(), Vec2::new(500, 150));
    /// ```
    pub fn from_size<U, V>(top_left: U, size: V) -> Self
    where
        U: Into<Vec2>,
        V: Into<Vec2>,
    {
        Rect {
            top_left: top_left.into(),
            size: size.into(),
        }
    }

    /// Returns the first point past the bottom-right corner.
    pub fn bottom_right(&self) -> Vec2 {
        self.top_left + self.size
    }

    /// Returns the size of the rectangle.
    pub fn size(&self) -> Vec2 {
        self.size
    }
}
