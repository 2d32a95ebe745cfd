/// Space between the container border and the viewport, for each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Top padding
    pub top: usize,
    /// Right padding
    pub right: usize,
    /// Bottom padding
    pub bottom: usize,
    /// Left padding
    pub left: usize,
}

impl Default for Padding {
    /// Three pixels on the top and left sides.
    fn default() -> Self {
        Self::trbl(3, 0, 0, 3)
    }
}

impl Padding {
    /// Creates a new `Padding` object with zero padding.
    pub fn zeroes() -> Self {
        Self::all(0)
    }

    /// Creates a new `Padding` object from the Top, Right, Bottom, Left fields.
    pub fn trbl(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uses the same padding on every side.
    pub fn all(n: usize) -> Self {
        Self::trbl(n, n, n, n)
    }

    /// Uses `vertical` for top and bottom, and `horizontal` for left and right.
    pub fn vh(vertical: usize, horizontal: usize) -> Self {
        Self::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Returns the (left, right) pair, as used for horizontal cell padding.
    pub fn lr(&self) -> (usize, usize) {
        (self.left, self.right)
    }

    /// Returns the (top, bottom) pair, as used for vertical cell padding.
    pub fn tb(&self) -> (usize, usize) {
        (self.top, self.bottom)
    }
}
