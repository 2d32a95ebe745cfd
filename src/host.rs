//! Define the toolkit interface.
//!
//! A scrolled frame does not draw anything by itself: it composes widgets
//! of the host UI toolkit (frames, a canvas and scrollbars) and drives them
//! through the [`Host`] trait. Any toolkit able to implement this trait can
//! host a [`ScrolledFrame`](crate::ScrolledFrame).
//!
//! [`puppet::Host`](crate::puppet::Host) is an in-memory implementation.

use std::fmt;

use enumset::EnumSet;

use crate::config::{Config, Object};
use crate::direction::{Edge, Orientation};
use crate::error::NoSuchWidget;
use crate::event::{
    Callback, DragCallback, OffsetCallback, ScrollUnit, Span, Trigger,
};
use crate::{Rect, Vec2, XY};

/// Result of a host call on a widget that may not exist.
pub type HostResult<T> = Result<T, NoSuchWidget>;

/// Identifies a widget on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies an item embedded in a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

/// Name of an event-routing group.
///
/// Bindings made on a group apply to every widget added to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    /// Creates a group with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        GroupId(name.into())
    }

    /// Returns the private group used for the descendants of `container`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::host::{GroupId, WidgetId};
    /// let group = GroupId::children_of(WidgetId(12));
    /// assert_eq!(group.to_string(), "12_children");
    /// ```
    pub fn children_of(container: WidgetId) -> Self {
        GroupId(format!("{}_children", container.0))
    }

    /// Returns the name of this group.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of widget the host can create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A plain container.
    Frame,
    /// A clipping surface that can embed a widget and scroll over it.
    Canvas,
    /// A scrollbar with the given orientation.
    Scrollbar(Orientation),
}

/// Options for the grid geometry manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Column of the cell.
    pub column: usize,
    /// Row of the cell.
    pub row: usize,
    /// Edges of the cell the widget sticks to.
    ///
    /// Sticking to two opposite edges stretches the widget.
    pub sticky: EnumSet<Edge>,
    /// External padding on the left and right sides.
    pub padx: (usize, usize),
    /// External padding on the top and bottom sides.
    pub pady: (usize, usize),
}

impl Grid {
    /// Places a widget in the given cell, without padding or stickiness.
    pub fn cell(column: usize, row: usize) -> Self {
        Grid {
            column,
            row,
            sticky: EnumSet::empty(),
            padx: (0, 0),
            pady: (0, 0),
        }
    }

    /// Sets the edges the widget sticks to.
    #[must_use]
    pub fn sticky(mut self, sticky: EnumSet<Edge>) -> Self {
        self.sticky = sticky;
        self
    }

    /// Sets the horizontal padding.
    #[must_use]
    pub fn padx(mut self, padx: (usize, usize)) -> Self {
        self.padx = padx;
        self
    }

    /// Sets the vertical padding.
    #[must_use]
    pub fn pady(mut self, pady: (usize, usize)) -> Self {
        self.pady = pady;
        self
    }

    /// Returns `true` if the widget stretches along this axis.
    pub fn stretches(&self, o: Orientation) -> bool {
        let both = match o {
            Orientation::Horizontal => Edge::East | Edge::West,
            Orientation::Vertical => Edge::North | Edge::South,
        };
        self.sticky.is_superset(both)
    }

    /// Returns the total padding as `(padx, pady)` sums.
    pub fn padding(&self) -> Vec2 {
        Vec2::new(self.padx.0 + self.padx.1, self.pady.0 + self.pady.1)
    }
}

/// Options for the packer geometry manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pack {
    /// Side of the remaining cavity the widget is packed against.
    pub side: Edge,
    /// Whether the widget fills its parcel along each axis.
    pub fill: XY<bool>,
    /// Whether the parcel takes a share of the extra space.
    pub expand: bool,
}

impl Default for Pack {
    fn default() -> Self {
        Pack {
            side: Edge::North,
            fill: XY::both_from(false),
            expand: false,
        }
    }
}

impl Pack {
    /// Packs against the given side.
    pub fn side(side: Edge) -> Self {
        Pack {
            side,
            ..Pack::default()
        }
    }

    /// Fills the parcel in both directions and takes extra space.
    #[must_use]
    pub fn fill_both(mut self) -> Self {
        self.fill = XY::both_from(true);
        self.expand = true;
        self
    }
}

/// Options for the placer geometry manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Place {
    /// Horizontal position in the parent.
    pub x: usize,
    /// Vertical position in the parent.
    pub y: usize,
    /// Explicit width, or the requested width if `None`.
    pub width: Option<usize>,
    /// Explicit height, or the requested height if `None`.
    pub height: Option<usize>,
}

/// How a widget is managed by its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Managed by the packer.
    Pack(Pack),
    /// Managed by the grid.
    Grid(Grid),
    /// Managed by the placer.
    Place(Place),
}

/// Toolkit interface used by scrolled frames.
///
/// Every call naming a widget fails with [`NoSuchWidget`] if the widget
/// does not exist.
///
/// Hosts must not run bound [`Callback`]s from within these methods: events
/// are dispatched by the host's own event loop, between calls. Offset
/// callbacks are the exception, and run at the end of
/// [`Host::update_idletasks`].
pub trait Host {
    /// Returns the top-level widget.
    fn root(&self) -> WidgetId;

    /// Creates a new widget as a child of `parent`.
    fn create(
        &mut self,
        parent: WidgetId,
        kind: WidgetKind,
        options: &Object,
    ) -> HostResult<WidgetId>;

    /// Returns `true` if the widget exists.
    fn exists(&self, id: WidgetId) -> bool;

    /// Returns the direct children of a widget, in creation order.
    fn children(&self, id: WidgetId) -> HostResult<Vec<WidgetId>>;

    /// Destroys a widget and all its descendants.
    fn destroy(&mut self, id: WidgetId) -> HostResult<()>;

    /// Sets the given options on a widget.
    fn configure(&mut self, id: WidgetId, options: &Object) -> HostResult<()>;

    /// Reads an option of a widget.
    fn cget(&self, id: WidgetId, key: &str) -> HostResult<Option<Config>>;

    /// Hands a widget to a geometry manager of its parent.
    fn manage(&mut self, id: WidgetId, placement: Placement)
        -> HostResult<()>;

    /// Unmaps a widget and forgets how it was managed.
    fn forget(&mut self, id: WidgetId) -> HostResult<()>;

    /// Unmaps a gridded widget, remembering its grid options.
    fn grid_remove(&mut self, id: WidgetId) -> HostResult<()>;

    /// Maps a widget again with the grid options it had before
    /// [`Host::grid_remove`].
    ///
    /// Does nothing if the widget is already mapped.
    fn grid_restore(&mut self, id: WidgetId) -> HostResult<()>;

    /// Returns the current placement of a mapped widget.
    fn placement(&self, id: WidgetId) -> HostResult<Option<Placement>>;

    /// Sets whether a container sizes itself after its children.
    fn set_propagate(&mut self, id: WidgetId, propagate: bool)
        -> HostResult<()>;

    /// Sets the weight of a grid column (`Horizontal`) or row (`Vertical`).
    fn set_weight(
        &mut self,
        id: WidgetId,
        o: Orientation,
        index: usize,
        weight: usize,
    ) -> HostResult<()>;

    /// Runs pending layout computations.
    fn update_idletasks(&mut self);

    /// Returns the size a widget asks for.
    fn requested_size(&self, id: WidgetId) -> HostResult<Vec2>;

    /// Returns the size a widget was given by the last layout.
    fn size(&self, id: WidgetId) -> HostResult<Vec2>;

    /// Embeds `window` at the top-left corner of `canvas`.
    fn embed(&mut self, canvas: WidgetId, window: WidgetId)
        -> HostResult<ItemId>;

    /// Sets the size of an embedded window.
    fn set_item_size(
        &mut self,
        canvas: WidgetId,
        item: ItemId,
        size: Vec2,
    ) -> HostResult<()>;

    /// Sets the scrollable region of a canvas.
    fn set_scroll_region(
        &mut self,
        canvas: WidgetId,
        region: Rect,
    ) -> HostResult<()>;

    /// Moves the view so `fraction` of the region is before it.
    fn move_to(
        &mut self,
        canvas: WidgetId,
        o: Orientation,
        fraction: f64,
    ) -> HostResult<()>;

    /// Scrolls the view by a signed amount.
    fn scroll_by(
        &mut self,
        canvas: WidgetId,
        o: Orientation,
        amount: i32,
        unit: ScrollUnit,
    ) -> HostResult<()>;

    /// Returns the visible span of the region along an axis.
    fn view(&self, canvas: WidgetId, o: Orientation) -> HostResult<Span>;

    /// Registers a callback run when the visible span changes.
    fn on_offset_changed(
        &mut self,
        canvas: WidgetId,
        o: Orientation,
        cb: OffsetCallback,
    ) -> HostResult<()>;

    /// Registers a callback run when the user drags a scrollbar.
    fn on_dragged(
        &mut self,
        scrollbar: WidgetId,
        cb: DragCallback,
    ) -> HostResult<()>;

    /// Moves the thumb of a scrollbar.
    fn set_thumb(&mut self, scrollbar: WidgetId, span: Span)
        -> HostResult<()>;

    /// Binds a callback to events reaching a widget.
    fn bind(
        &mut self,
        id: WidgetId,
        trigger: Trigger,
        cb: Callback,
    ) -> HostResult<()>;

    /// Prepends a routing group to the groups of a widget.
    ///
    /// Adding a widget twice to the same group does nothing.
    fn add_to_group(&mut self, id: WidgetId, group: &GroupId)
        -> HostResult<()>;

    /// Binds a callback to events reaching any member of a group.
    ///
    /// Replaces any previous binding for this trigger.
    fn bind_group(&mut self, group: &GroupId, trigger: Trigger, cb: Callback);

    /// Removes the binding of a group for this trigger.
    fn unbind_group(&mut self, group: &GroupId, trigger: Trigger);
}

/// Geometry-manager methods for anything that stands for a widget.
///
/// Implemented by [`WidgetId`] and [`ScrolledFrame`], which forwards every
/// call to its outer container.
///
/// [`ScrolledFrame`]: crate::ScrolledFrame
pub trait Geometry {
    /// Returns the widget geometry calls apply to.
    fn geometry_target(&self) -> WidgetId;

    /// Packs the widget in its parent.
    fn pack(&self, host: &mut dyn Host, pack: Pack) -> HostResult<()> {
        host.manage(self.geometry_target(), Placement::Pack(pack))
    }

    /// Grids the widget in its parent.
    fn grid(&self, host: &mut dyn Host, grid: Grid) -> HostResult<()> {
        host.manage(self.geometry_target(), Placement::Grid(grid))
    }

    /// Places the widget in its parent.
    fn place(&self, host: &mut dyn Host, place: Place) -> HostResult<()> {
        host.manage(self.geometry_target(), Placement::Place(place))
    }

    /// Unpacks the widget. Does nothing if it is not packed.
    fn pack_forget(&self, host: &mut dyn Host) -> HostResult<()> {
        forget_if(host, self.geometry_target(), |p| {
            matches!(p, Placement::Pack(_))
        })
    }

    /// Ungrids the widget. Does nothing if it is not gridded.
    fn grid_forget(&self, host: &mut dyn Host) -> HostResult<()> {
        forget_if(host, self.geometry_target(), |p| {
            matches!(p, Placement::Grid(_))
        })
    }

    /// Unplaces the widget. Does nothing if it is not placed.
    fn place_forget(&self, host: &mut dyn Host) -> HostResult<()> {
        forget_if(host, self.geometry_target(), |p| {
            matches!(p, Placement::Place(_))
        })
    }

    /// Ungrids the widget, keeping its options for a later restore.
    fn grid_remove(&self, host: &mut dyn Host) -> HostResult<()> {
        host.grid_remove(self.geometry_target())
    }

    /// Returns how the widget is currently managed.
    fn info(&self, host: &dyn Host) -> HostResult<Option<Placement>> {
        host.placement(self.geometry_target())
    }
}

fn forget_if<F>(host: &mut dyn Host, id: WidgetId, f: F) -> HostResult<()>
where
    F: Fn(&Placement) -> bool,
{
    match host.placement(id)? {
        Some(ref placement) if f(placement) => host.forget(id),
        _ => Ok(()),
    }
}

impl Geometry for WidgetId {
    fn geometry_target(&self) -> WidgetId {
        *self
    }
}
