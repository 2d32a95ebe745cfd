//! Core mechanisms of adaptive scrolling.
//!
//! This modules defines:
//!
//! * [`scroll::Core`](crate::scroll::Core): the scrollbar state machine.
//!   It decides which scrollbars are shown and where the wheel is routed,
//!   and returns the host operations this requires as [`Action`]s.
//! * [`ChildTracker`]: finds the widgets added to a frame since the last
//!   redraw, so wheel routing reaches them too.
//! * Some free functions that run a redraw pass against a [`Host`], using
//!   the [`Parts`] a scrolled frame is made of.
//!
//! [`ScrolledFrame`](crate::ScrolledFrame) wires all of these together.
//!
//! [`Host`]: crate::host::Host

mod core;
mod raw;
mod tracker;

pub use self::core::{Action, AxisState, Core};
pub use self::raw::{connect_scrollbar, perform, redraw, wheel_callback};
pub use self::tracker::ChildTracker;

use enum_map::EnumMap;

use crate::direction::Orientation;
use crate::host::{GroupId, ItemId, WidgetId};
use crate::{Vec2, XY};

/// Widgets making up a scrolled frame.
#[derive(Clone, Debug)]
pub struct Parts {
    /// Outer frame, managed by the user's geometry calls.
    pub container: WidgetId,
    /// Canvas clipping the content.
    pub viewport: WidgetId,
    /// Frame holding the user's widgets.
    pub content: WidgetId,
    /// Canvas item embedding the content in the viewport.
    pub item: ItemId,
    /// Scrollbar of each axis, if any.
    pub scrollbars: EnumMap<Orientation, Option<WidgetId>>,
    /// Routing group shared by every descendant of the container.
    pub group: GroupId,
}

/// What a redraw pass observed and changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redraw {
    /// Requested size of the content.
    pub requested: Vec2,
    /// Measured size of the viewport, before any scrollbar was toggled.
    pub viewport: Vec2,
    /// Axes whose scrollbar was shown or hidden.
    pub toggled: XY<bool>,
}

impl Redraw {
    /// Returns `true` if no scrollbar was toggled.
    pub fn is_noop(&self) -> bool {
        !self.toggled.any()
    }

    /// Returns which axes overflowed the viewport.
    pub fn overflow(&self) -> XY<bool> {
        self.viewport.zip_map(self.requested, |v, r| v < r)
    }
}
