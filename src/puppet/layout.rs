//! Geometry computations of the puppet host.
//!
//! Sizes are computed in two passes:
//!
//! * `requested` walks the tree bottom-up and returns the size a widget
//!   asks for, from its options and its managed children.
//! * `layout_node` walks the tree top-down and gives every mapped widget
//!   its final size.
//!
//! Only the grid takes extra space into account (through weights). The
//! packer fills the cavity in packing order and the placer uses explicit
//! or requested sizes.
use super::{HashMap, Host, Node, SCROLLBAR_THICKNESS};
use crate::direction::{Edge, Orientation};
use crate::host::{Grid, Pack, Placement, WidgetId, WidgetKind};
use crate::{Vec2, XY};

impl Host {
    /// Returns the requested size of a widget.
    ///
    /// Missing widgets request nothing.
    pub(super) fn requested(&self, id: WidgetId) -> Vec2 {
        let node = match self.nodes.get(&id) {
            Some(node) => node,
            None => return Vec2::zero(),
        };

        match node.kind {
            WidgetKind::Scrollbar(Orientation::Vertical) => {
                Vec2::new(SCROLLBAR_THICKNESS, 0)
            }
            WidgetKind::Scrollbar(Orientation::Horizontal) => {
                Vec2::new(0, SCROLLBAR_THICKNESS)
            }
            WidgetKind::Canvas => {
                let highlight = node.option_size("highlightthickness");
                options_size(node) + Vec2::both_from(2 * highlight)
            }
            WidgetKind::Frame => {
                let grid = self.grid_requested(node);
                let pack = self.pack_requested(node);
                match (node.propagate, grid.or(pack)) {
                    (true, Some(_)) => {
                        let border = node.option_size("borderwidth");
                        grid.unwrap_or_else(Vec2::zero)
                            .or_max(pack.unwrap_or_else(Vec2::zero))
                            + Vec2::both_from(2 * border)
                    }
                    _ => options_size(node),
                }
            }
        }
    }

    /// Gives `size` to the widget, then lays out its children.
    pub(super) fn layout_node(
        &self,
        id: WidgetId,
        size: Vec2,
        sizes: &mut HashMap<WidgetId, Vec2>,
    ) {
        sizes.insert(id, size);

        let node = match self.nodes.get(&id) {
            Some(node) => node,
            None => return,
        };

        match node.kind {
            WidgetKind::Scrollbar(_) => (),
            WidgetKind::Canvas => {
                if let Some(ref canvas) = node.canvas {
                    for item in &canvas.items {
                        if !self.nodes.contains_key(&item.window) {
                            continue;
                        }
                        let size = item
                            .size
                            .unwrap_or_else(|| self.requested(item.window));
                        self.layout_node(item.window, size, sizes);
                    }
                }
            }
            WidgetKind::Frame => {
                let border = node.option_size("borderwidth");
                let inner = size.saturating_sub(Vec2::both_from(2 * border));
                self.layout_grid(node, inner, sizes);
                self.layout_pack(node, inner, sizes);
                self.layout_place(node, sizes);
            }
        }
    }

    fn gridded<'a>(
        &'a self,
        node: &'a Node,
    ) -> impl Iterator<Item = (WidgetId, Grid)> + 'a {
        node.children.iter().filter_map(move |&child| {
            match self.nodes.get(&child).and_then(|n| n.placement) {
                Some(Placement::Grid(grid)) => Some((child, grid)),
                _ => None,
            }
        })
    }

    fn packed<'a>(
        &'a self,
        node: &'a Node,
    ) -> impl Iterator<Item = (WidgetId, Pack)> + 'a {
        node.children.iter().filter_map(move |&child| {
            match self.nodes.get(&child).and_then(|n| n.placement) {
                Some(Placement::Pack(pack)) => Some((child, pack)),
                _ => None,
            }
        })
    }

    /// Returns the natural size of each column and row.
    fn grid_tracks(&self, node: &Node) -> XY<Vec<usize>> {
        let mut tracks: XY<Vec<usize>> = XY::new(Vec::new(), Vec::new());

        for (child, grid) in self.gridded(node) {
            let wanted = self.requested(child) + grid.padding();
            let cell = XY::new(grid.column, grid.row);
            for o in Orientation::pair() {
                let index = *cell.get(o);
                let track = tracks.get_mut(o);
                if track.len() <= index {
                    track.resize(index + 1, 0);
                }
                track[index] = track[index].max(*wanted.get(o));
            }
        }

        tracks
    }

    fn grid_requested(&self, node: &Node) -> Option<Vec2> {
        self.gridded(node).next()?;
        Some(self.grid_tracks(node).map(|track| track.iter().sum()))
    }

    fn pack_requested(&self, node: &Node) -> Option<Vec2> {
        let packed: Vec<_> = self.packed(node).collect();
        if packed.is_empty() {
            return None;
        }

        let mut total = Vec2::zero();
        for &(child, pack) in packed.iter().rev() {
            let wanted = self.requested(child);
            match pack.side {
                Edge::North | Edge::South => {
                    total.x = total.x.max(wanted.x);
                    total.y += wanted.y;
                }
                Edge::East | Edge::West => {
                    total.x += wanted.x;
                    total.y = total.y.max(wanted.y);
                }
            }
        }
        Some(total)
    }

    fn layout_grid(
        &self,
        node: &Node,
        inner: Vec2,
        sizes: &mut HashMap<WidgetId, Vec2>,
    ) {
        let natural = self.grid_tracks(node);
        let tracks = Orientation::pair().map(|o| {
            let natural = natural.get(o);
            let weights: Vec<usize> = (0..natural.len())
                .map(|i| node.weights[o].get(&i).copied().unwrap_or(0))
                .collect();
            distribute(natural, &weights, *inner.get(o))
        });

        for (child, grid) in self.gridded(node) {
            let wanted = self.requested(child);
            let pad = grid.padding();
            let cell = XY::new(
                tracks.x[grid.column].saturating_sub(pad.x),
                tracks.y[grid.row].saturating_sub(pad.y),
            );
            let size = XY::new(
                fit(wanted.x, cell.x, grid.stretches(Orientation::Horizontal)),
                fit(wanted.y, cell.y, grid.stretches(Orientation::Vertical)),
            );
            self.layout_node(child, size, sizes);
        }
    }

    fn layout_pack(
        &self,
        node: &Node,
        inner: Vec2,
        sizes: &mut HashMap<WidgetId, Vec2>,
    ) {
        let mut cavity = inner;

        for (child, pack) in self.packed(node) {
            let wanted = self.requested(child);
            let along = match pack.side {
                Edge::North | Edge::South => Orientation::Vertical,
                Edge::East | Edge::West => Orientation::Horizontal,
            };

            let mut parcel = cavity;
            if !pack.expand {
                *parcel.get_mut(along) =
                    (*wanted.get(along)).min(*cavity.get(along));
            }
            *cavity.get_mut(along) -= *parcel.get(along);

            let size = XY::new(
                fit(wanted.x, parcel.x, pack.fill.x),
                fit(wanted.y, parcel.y, pack.fill.y),
            );
            self.layout_node(child, size, sizes);
        }
    }

    fn layout_place(&self, node: &Node, sizes: &mut HashMap<WidgetId, Vec2>) {
        for &child in &node.children {
            let place = match self.nodes.get(&child).and_then(|n| n.placement)
            {
                Some(Placement::Place(place)) => place,
                _ => continue,
            };
            let wanted = self.requested(child);
            let size = XY::new(
                place.width.unwrap_or(wanted.x),
                place.height.unwrap_or(wanted.y),
            );
            self.layout_node(child, size, sizes);
        }
    }
}

fn options_size(node: &Node) -> Vec2 {
    Vec2::new(node.option_size("width"), node.option_size("height"))
}

/// Size of a widget in a parcel: stretched, or as requested but clipped.
fn fit(wanted: usize, available: usize, stretch: bool) -> usize {
    if stretch {
        available
    } else {
        wanted.min(available)
    }
}

/// Grows or shrinks weighted tracks so they add up to `available`.
///
/// Tracks without weight keep their natural size. Shrinking stops at zero.
fn distribute(natural: &[usize], weights: &[usize], available: usize) -> Vec<usize> {
    let mut sizes = natural.to_vec();
    let total_weight: usize = weights.iter().sum();
    let last = match weights.iter().rposition(|&w| w > 0) {
        Some(last) => last,
        None => return sizes,
    };

    let total: usize = natural.iter().sum();
    let grow = available >= total;
    let extra = if grow { available - total } else { total - available };

    let mut given = 0;
    for (i, &weight) in weights.iter().enumerate() {
        if weight == 0 {
            continue;
        }
        let share = if i == last {
            extra - given
        } else {
            extra * weight / total_weight
        };
        given += share;

        sizes[i] = if grow {
            sizes[i] + share
        } else {
            sizes[i].saturating_sub(share)
        };
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::distribute;

    #[test]
    fn distribute_extra() {
        assert_eq!(distribute(&[0, 16], &[1, 0], 300), vec![284, 16]);
        assert_eq!(distribute(&[10, 10], &[1, 1], 41), vec![20, 21]);
        assert_eq!(distribute(&[10, 10], &[0, 0], 100), vec![10, 10]);
    }

    #[test]
    fn distribute_missing() {
        assert_eq!(distribute(&[500, 16], &[1, 0], 300), vec![284, 16]);
        assert_eq!(distribute(&[5, 16], &[1, 0], 10), vec![0, 16]);
    }
}
