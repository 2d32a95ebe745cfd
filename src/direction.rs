//! Direction-related structures.
//!
//! This module defines two concepts: [`Orientation`] and [`Edge`].
//!
//! ### Orientation
//!
//! `Orientation` is a simple enum that can take two values:
//! `Horizontal` or `Vertical`. It names a scroll axis, and the orientation
//! of the scrollbar controlling it.
//!
//! ### Edge
//!
//! `Edge` is one of the four sides of a widget. Scrollbars are attached to
//! edges (a horizontal scrollbar lives on the north or south edge), and grid
//! cells stick their content to a set of edges.

use enum_map::Enum;
use enumset::{EnumSet, EnumSetType};

use crate::XY;

/// Describes a vertical or horizontal orientation for a scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
pub enum Orientation {
    /// Horizontal orientation
    Horizontal,
    /// Vertical orientation
    Vertical,
}

impl Orientation {
    /// Returns a `XY(Horizontal, Vertical)`.
    pub fn pair() -> XY<Orientation> {
        XY::new(Orientation::Horizontal, Orientation::Vertical)
    }

    /// Returns the two edges a scrollbar of this orientation can sit on.
    pub fn edges(self) -> EnumSet<Edge> {
        match self {
            Orientation::Horizontal => Edge::North | Edge::South,
            Orientation::Vertical => Edge::East | Edge::West,
        }
    }
}

/// One side of a rectangular widget.
#[derive(EnumSetType, Debug, Hash)]
pub enum Edge {
    /// Top side
    North,
    /// Bottom side
    South,
    /// Right side
    East,
    /// Left side
    West,
}

impl Edge {
    /// Parses a single edge code.
    ///
    /// Accepts `N`, `S`, `E`, `W` and the aliases `T` (top), `B` (bottom),
    /// `R` (right) and `L` (left), in any case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::direction::Edge;
    /// assert_eq!(Edge::from_code('t'), Some(Edge::North));
    /// assert_eq!(Edge::from_code('E'), Some(Edge::East));
    /// assert_eq!(Edge::from_code('x'), None);
    /// ```
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code.to_ascii_uppercase() {
            'N' | 'T' => Edge::North,
            'S' | 'B' => Edge::South,
            'E' | 'R' => Edge::East,
            'W' | 'L' => Edge::West,
            _ => return None,
        })
    }

    /// Returns the canonical one-letter code for this edge.
    pub fn code(self) -> char {
        match self {
            Edge::North => 'N',
            Edge::South => 'S',
            Edge::East => 'E',
            Edge::West => 'W',
        }
    }

    /// Returns the opposite edge.
    pub fn opposite(self) -> Self {
        match self {
            Edge::North => Edge::South,
            Edge::South => Edge::North,
            Edge::East => Edge::West,
            Edge::West => Edge::East,
        }
    }
}

/// Returns the edge code string for a set of edges, e.g. `"SE"`.
pub fn edges_to_string(edges: EnumSet<Edge>) -> String {
    edges.iter().map(Edge::code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_edges() {
        for o in Orientation::pair() {
            for edge in o.edges() {
                assert!(o.edges().contains(edge.opposite()));
            }
        }
        assert_eq!(Orientation::Vertical.edges(), Edge::East | Edge::West);
    }

    #[test]
    fn edge_string() {
        assert_eq!(edges_to_string(Edge::South | Edge::East), "SE");
        assert_eq!(edges_to_string(EnumSet::empty()), "");
    }
}
