//! Events consumed by the scrolled frame, and their handlers.
//!
//! * The host toolkit delivers an [`Event`] to a target widget.
//! * The host looks up the routing groups the widget belongs to, then the
//!   widget itself, and runs the [`Callback`] bound for that [`Trigger`].
//! * A callback returns an [`EventResult`]; the first one to consume the
//!   event stops the dispatch.
//!
//! Scrollbars and viewports talk to each other through two more callback
//! types: [`DragCallback`] when a scrollbar is dragged, and
//! [`OffsetCallback`] when the visible part of a viewport changes.

use crate::host::Host;
use crate::Vec2;
use std::ops::Deref;
use std::rc::Rc;

/// Callback is a function that can be triggered by an event.
///
/// It has a mutable access to the host, and is meant to be stored in the
/// host's binding tables.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&mut dyn Host, &Event) -> EventResult>);

impl Callback {
    /// Wraps the given function into a `Callback` object.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: 'static + Fn(&mut dyn Host, &Event) -> EventResult,
    {
        Callback(Rc::new(f))
    }
}

impl Deref for Callback {
    type Target = dyn Fn(&mut dyn Host, &Event) -> EventResult + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback")
    }
}

/// Answer to an event notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// The event was ignored. The host may give it to the next binding.
    Ignored,
    /// The event was consumed.
    Consumed,
}

impl EventResult {
    /// Returns `true` if `self` is `EventResult::Consumed`.
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Represents an event as seen by the widget it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The widget was laid out with a new size.
    Configure {
        /// New measured size of the widget.
        size: Vec2,
    },

    /// The mouse wheel was turned (or a trackpad swiped) over the widget.
    Wheel {
        /// Raw wheel delta. Positive values mean the wheel was turned
        /// away from the user, which scrolls content up.
        delta: i32,
    },
}

impl Event {
    /// Returns the trigger this event fires.
    pub fn trigger(&self) -> Trigger {
        match *self {
            Event::Configure { .. } => Trigger::Configure,
            Event::Wheel { .. } => Trigger::Wheel,
        }
    }
}

/// Kind of event a callback can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Matches every [`Event::Configure`].
    Configure,
    /// Matches every [`Event::Wheel`].
    Wheel,
}

/// Unit used by relative scroll commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollUnit {
    /// A small step, a tenth of the viewport length.
    Units,
    /// Almost a full viewport length.
    Pages,
}

/// Request emitted by a scrollbar when the user interacts with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollCommand {
    /// Move the view so this fraction of the content is at the start.
    MoveTo(f64),
    /// Scroll by a signed amount of the given unit.
    Scroll(i32, ScrollUnit),
}

/// Visible part of a scroll axis, as fractions of the content length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Fraction of the content before the visible part.
    pub first: f64,
    /// Fraction of the content up to the end of the visible part.
    pub last: f64,
}

impl Span {
    /// The whole content is visible.
    pub fn full() -> Self {
        Span {
            first: 0.0,
            last: 1.0,
        }
    }

    /// Computes the span of a window of `length` at `offset` over `total`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::event::Span;
    /// let span = Span::of(100, 200, 400);
    /// assert_eq!(span.first, 0.25);
    /// assert_eq!(span.last, 0.75);
    /// assert_eq!(Span::of(0, 300, 0), Span::full());
    /// ```
    pub fn of(offset: usize, length: usize, total: usize) -> Self {
        if total == 0 {
            return Span::full();
        }
        let total = total as f64;
        Span {
            first: (offset as f64 / total).min(1.0),
            last: ((offset + length) as f64 / total).min(1.0),
        }
    }
}

/// Called by a viewport when the visible span along one axis changes.
pub type OffsetCallback = Rc<dyn Fn(&mut dyn Host, Span)>;

/// Called by a scrollbar when the user drags or clicks it.
pub type DragCallback = Rc<dyn Fn(&mut dyn Host, ScrollCommand)>;
