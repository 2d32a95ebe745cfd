use crate::direction::Orientation;
use std::iter;

/// A generic structure with a value for each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XY<T> {
    /// X-axis value
    pub x: T,
    /// Y-axis value
    pub y: T,
}

impl<T> IntoIterator for XY<T> {
    type Item = T;
    type IntoIter = iter::Chain<iter::Once<T>, iter::Once<T>>;

    /// Iterate over x, then y.
    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.x).chain(iter::once(self.y))
    }
}

impl<T> XY<T> {
    /// Creates a new `XY` from the given values.
    pub fn new(x: T, y: T) -> Self {
        XY { x, y }
    }

    /// Creates a new `XY` by applying `f` to `x` and `y`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::XY;
    /// let xy = XY::new(1, 2);
    ///
    /// assert_eq!(xy.map(|v| v * 2), XY::new(2, 4));
    /// assert_eq!(xy.map(|v| v > 1), XY::new(false, true));
    /// ```
    pub fn map<U, F>(self, f: F) -> XY<U>
    where
        F: Fn(T) -> U,
    {
        XY::new(f(self.x), f(self.y))
    }

    /// Destructure self into a pair.
    pub fn pair(self) -> (T, T) {
        (self.x, self.y)
    }

    /// Returns a reference to the value on the given axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::XY;
    /// # use autoscroll::direction::Orientation;
    /// let xy = XY::new(300, 200);
    /// assert_eq!(xy.get(Orientation::Horizontal), &300);
    /// assert_eq!(xy.get(Orientation::Vertical), &200);
    /// ```
    pub fn get(&self, o: Orientation) -> &T {
        match o {
            Orientation::Horizontal => &self.x,
            Orientation::Vertical => &self.y,
        }
    }

    /// Returns a mutable reference to the value on the given axis.
    pub fn get_mut(&mut self, o: Orientation) -> &mut T {
        match o {
            Orientation::Horizontal => &mut self.x,
            Orientation::Vertical => &mut self.y,
        }
    }

    /// Returns a new `XY` by calling `f` on `self` and `other` for each axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::XY;
    /// let viewport = XY::new(300, 200);
    /// let content = XY::new(500, 150);
    /// let overflow = viewport.zip_map(content, |v, c| v < c);
    /// assert_eq!(overflow, XY::new(true, false));
    /// ```
    pub fn zip_map<U, V, F>(self, other: XY<U>, f: F) -> XY<V>
    where
        F: Fn(T, U) -> V,
    {
        XY::new(f(self.x, other.x), f(self.y, other.y))
    }
}

impl<T: Clone> XY<T> {
    /// Creates a `XY` with both `x` and `y` set to `value`.
    pub fn both_from(value: T) -> Self {
        let x = value.clone();
        let y = value;
        XY::new(x, y)
    }
}

impl XY<bool> {
    /// Returns `true` if any of `x` or `y` is `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::XY;
    /// assert_eq!(XY::new(true, false).any(), true);
    /// assert_eq!(XY::new(false, false).any(), false);
    /// ```
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl<T> From<(T, T)> for XY<T> {
    /// A pair is assumed to be (x, y)
    fn from((x, y): (T, T)) -> Self {
        XY::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::XY;
    use crate::direction::Orientation;

    #[test]
    fn axis_access() {
        let mut xy = XY::new(1, 2);
        *xy.get_mut(Orientation::Vertical) = 20;
        assert_eq!(xy, XY::new(1, 20));
        assert_eq!(*xy.get(Orientation::Horizontal), 1);
        assert_eq!(Orientation::pair().map(|o| *xy.get(o)), xy);
    }
}
