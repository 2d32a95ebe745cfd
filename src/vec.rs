//! Points and sizes on the 2D pixel grid.

use std::cmp::{max, min};
use std::ops::Add;

use crate::XY;

/// Simple 2D size, in pixels.
///
/// Note: due to a bug in rustdoc ([#32077]), the documentation for `Vec2` is
/// currently shown on the [`XY`] page.
///
/// [#32077]: https://github.com/rust-lang/rust/issues/32077
/// [`XY`]: crate::XY
pub type Vec2 = XY<usize>;

impl XY<usize> {
    /// Returns a vector with `(0, 0)`.
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Saturating subtraction. Computes `self - other`, saturating at 0.
    ///
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::Vec2;
    /// let u = Vec2::new(1, 2);
    /// let v = Vec2::new(2, 1);
    /// assert_eq!(u.saturating_sub(v), Vec2::new(0, 1));
    /// ```
    pub fn saturating_sub<O: Into<Self>>(&self, other: O) -> Self {
        let other = other.into();
        self.zip_map(other, usize::saturating_sub)
    }

    /// Returns a new Vec2 that is a maximum per coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::Vec2;
    /// let content = Vec2::new(500, 150);
    /// let viewport = Vec2::new(300, 200);
    /// assert_eq!(content.or_max(viewport), Vec2::new(500, 200));
    /// ```
    pub fn or_max<T: Into<Vec2>>(self, other: T) -> Self {
        self.zip_map(other.into(), max)
    }

    /// Returns a new Vec2 that is no larger than any input in both dimensions.
    pub fn or_min<T: Into<Vec2>>(self, other: T) -> Self {
        self.zip_map(other.into(), min)
    }
}

impl From<(i32, i32)> for XY<usize> {
    fn from((x, y): (i32, i32)) -> Self {
        (x as usize, y as usize).into()
    }
}

impl<O: Into<Vec2>> Add<O> for Vec2 {
    type Output = Vec2;

    fn add(self, other: O) -> Vec2 {
        self.zip_map(other.into(), Add::add)
    }
}
