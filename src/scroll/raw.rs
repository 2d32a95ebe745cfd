//! Low-level redraw pass over a scrolled frame.
//!
//! These functions drive the host from a [`scroll::Core`] and the
//! [`Parts`] of a frame. They take every piece of state explicitly, so the
//! caller decides how that state is shared.
use std::rc::Rc;

use crate::direction::Orientation;
use crate::event::{
    Callback, Event, EventResult, ScrollCommand, ScrollUnit, Span, Trigger,
};
use crate::host::{Host, HostResult, WidgetId};
use crate::scroll::{self, Action, ChildTracker, Parts, Redraw};
use crate::Rect;

/// Re-measures the content and updates scrollbars and scroll region.
///
/// Running it twice in a row without any change in between toggles
/// nothing the second time.
pub fn redraw(
    host: &mut dyn Host,
    parts: &Parts,
    core: &mut scroll::Core,
    tracker: &mut ChildTracker,
) -> HostResult<Redraw> {
    for widget in tracker.discover_new(host, parts.container)? {
        host.add_to_group(widget, &parts.group)?;
    }

    host.update_idletasks();

    let requested = host.requested_size(parts.content)?;
    let viewport = host.size(parts.viewport)?;
    log::trace!(
        "{}: content requests {:?}, viewport is {:?}",
        parts.container,
        requested.pair(),
        viewport.pair()
    );

    let overflow = viewport.zip_map(requested, |v, r| v < r);
    let toggled = core.diff(overflow);
    if toggled.any() {
        for o in Orientation::pair() {
            if *toggled.get(o) {
                log::debug!(
                    "{}: {} {:?} scrollbar",
                    parts.container,
                    if core.axis(o).is_shown { "showing" } else { "hiding" },
                    o
                );
            }
        }

        for action in core.apply(toggled) {
            perform(host, parts, action, core.scroll_speed())?;
        }
    }

    host.set_scroll_region(parts.viewport, Rect::from_size((0, 0), requested))?;
    host.set_item_size(parts.viewport, parts.item, requested.or_max(viewport))?;

    host.update_idletasks();

    Ok(Redraw {
        requested,
        viewport,
        toggled,
    })
}

/// Runs one action of the state machine on the host.
pub fn perform(
    host: &mut dyn Host,
    parts: &Parts,
    action: Action,
    scroll_speed: u32,
) -> HostResult<()> {
    match action {
        Action::Mount(o) => match parts.scrollbars[o] {
            Some(scrollbar) => host.grid_restore(scrollbar),
            None => Ok(()),
        },
        Action::Unmount(o) => match parts.scrollbars[o] {
            Some(scrollbar) => host.grid_remove(scrollbar),
            None => Ok(()),
        },
        Action::ResetOffset(o) => host.move_to(parts.viewport, o, 0.0),
        Action::BindWheel(o) => {
            log::trace!("{}: wheel routed to {:?}", parts.container, o);
            host.bind_group(
                &parts.group,
                Trigger::Wheel,
                wheel_callback(parts.viewport, o, scroll_speed),
            );
            Ok(())
        }
        Action::UnbindWheel => {
            log::trace!("{}: wheel unrouted", parts.container);
            host.unbind_group(&parts.group, Trigger::Wheel);
            Ok(())
        }
    }
}

/// Returns a callback scrolling `viewport` along `o` on wheel events.
///
/// Each notch scrolls `scroll_speed` units. A positive delta scrolls the
/// content up (or left), and a zero delta is ignored.
pub fn wheel_callback(
    viewport: WidgetId,
    o: Orientation,
    scroll_speed: u32,
) -> Callback {
    let speed = i32::try_from(scroll_speed).unwrap_or(i32::MAX);

    Callback::from_fn(move |host, event| {
        let delta = match *event {
            Event::Wheel { delta } if delta != 0 => delta,
            _ => return EventResult::Ignored,
        };

        let units = if delta > 0 { -speed } else { speed };
        match host.scroll_by(viewport, o, units, ScrollUnit::Units) {
            Ok(()) => EventResult::Consumed,
            Err(err) => {
                log::error!("cannot scroll on wheel: {err}");
                EventResult::Ignored
            }
        }
    })
}

/// Couples a scrollbar with one axis of the viewport, both ways.
pub fn connect_scrollbar(
    host: &mut dyn Host,
    viewport: WidgetId,
    scrollbar: WidgetId,
    o: Orientation,
) -> HostResult<()> {
    host.on_dragged(
        scrollbar,
        Rc::new(move |host: &mut dyn Host, command: ScrollCommand| {
            let result = match command {
                ScrollCommand::MoveTo(fraction) => {
                    host.move_to(viewport, o, fraction)
                }
                ScrollCommand::Scroll(amount, unit) => {
                    host.scroll_by(viewport, o, amount, unit)
                }
            };
            if let Err(err) = result {
                log::error!("cannot follow scrollbar {scrollbar}: {err}");
            }
        }),
    )?;

    host.on_offset_changed(
        viewport,
        o,
        Rc::new(move |host: &mut dyn Host, span: Span| {
            if let Err(err) = host.set_thumb(scrollbar, span) {
                log::error!("cannot move scrollbar {scrollbar}: {err}");
            }
        }),
    )
}
