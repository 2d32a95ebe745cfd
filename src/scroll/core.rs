use enum_map::EnumMap;

use crate::config::Settings;
use crate::direction::Orientation;
use crate::XY;

/// Scrollbar state for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AxisState {
    /// This axis was given a scrollbar at construction.
    pub has_scrollbar: bool,
    /// The scrollbar is currently needed.
    ///
    /// Only ever `true` when `has_scrollbar` is.
    pub is_shown: bool,
}

/// Host operation requested by the scroll state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Map the scrollbar of this axis again.
    Mount(Orientation),
    /// Unmap the scrollbar of this axis, keeping its grid cell.
    Unmount(Orientation),
    /// Scroll this axis back to the start of the content.
    ResetOffset(Orientation),
    /// Route wheel input to this axis.
    BindWheel(Orientation),
    /// Stop routing wheel input anywhere.
    UnbindWheel,
}

/// Core system for adaptive scrollbars.
///
/// Tracks which scrollbars are needed and where the wheel is routed. It
/// never talks to the host: every change is returned as a list of
/// [`Action`]s.
#[derive(Clone, Debug)]
pub struct Core {
    axes: EnumMap<Orientation, AxisState>,
    auto_hide: bool,
    scroll_speed: u32,
    wheel: Option<Orientation>,
}

impl Core {
    /// Creates a new `Core` for the given scrollbars.
    ///
    /// Every existing scrollbar starts shown. The wheel is not routed
    /// until [`Core::sync_wheel`] is called.
    pub fn new(scrollbars: XY<bool>, auto_hide: bool, scroll_speed: u32) -> Self {
        let mut axes = EnumMap::default();
        for o in Orientation::pair() {
            let has_scrollbar = *scrollbars.get(o);
            axes[o] = AxisState {
                has_scrollbar,
                is_shown: has_scrollbar,
            };
        }

        Core {
            axes,
            auto_hide,
            scroll_speed,
            wheel: None,
        }
    }

    /// Creates a new `Core` from validated settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Core::new(
            Orientation::pair().map(|o| settings.has_scrollbar(o)),
            settings.auto_hide,
            settings.scroll_speed,
        )
    }

    /// Returns the state of an axis.
    pub fn axis(&self, o: Orientation) -> AxisState {
        self.axes[o]
    }

    /// Returns which scrollbars are currently shown.
    pub fn shown(&self) -> XY<bool> {
        Orientation::pair().map(|o| self.axes[o].is_shown)
    }

    /// Returns the number of units scrolled per wheel notch.
    pub fn scroll_speed(&self) -> u32 {
        self.scroll_speed
    }

    /// Returns the axis currently receiving wheel input.
    pub fn wheel(&self) -> Option<Orientation> {
        self.wheel
    }

    /// Returns the axis that should receive wheel input.
    ///
    /// The vertical axis wins when both scrollbars are shown.
    pub fn wheel_target(&self) -> Option<Orientation> {
        if self.scroll_speed == 0 {
            None
        } else if self.axes[Orientation::Vertical].is_shown {
            Some(Orientation::Vertical)
        } else if self.axes[Orientation::Horizontal].is_shown {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    /// Routes the wheel to the current target, if it has one.
    pub fn sync_wheel(&mut self) -> Option<Action> {
        let target = self.wheel_target()?;
        self.wheel = Some(target);
        Some(Action::BindWheel(target))
    }

    /// Updates the shown state from the current overflow.
    ///
    /// Returns the axes that changed.
    pub fn diff(&mut self, overflow: XY<bool>) -> XY<bool> {
        let mut dirty = XY::both_from(false);
        for o in Orientation::pair() {
            let axis = &mut self.axes[o];
            if axis.has_scrollbar && axis.is_shown != *overflow.get(o) {
                axis.is_shown = !axis.is_shown;
                *dirty.get_mut(o) = true;
            }
        }
        dirty
    }

    /// Returns the host operations needed after `diff` flipped `dirty`.
    ///
    /// The vertical axis is handled first.
    pub fn apply(&mut self, dirty: XY<bool>) -> Vec<Action> {
        use Orientation::{Horizontal, Vertical};

        let wheel = self.scroll_speed > 0;
        let mut actions = Vec::new();

        if dirty.y && self.axes[Vertical].has_scrollbar {
            if self.axes[Vertical].is_shown {
                actions.push(Action::Mount(Vertical));
                if wheel {
                    actions.push(Action::BindWheel(Vertical));
                }
            } else {
                actions.push(Action::ResetOffset(Vertical));
                if self.auto_hide {
                    actions.push(Action::Unmount(Vertical));
                }
                // The horizontal pass below would not rebind it.
                if wheel && self.axes[Horizontal].is_shown && !dirty.x {
                    actions.push(Action::BindWheel(Horizontal));
                }
            }
        }

        if dirty.x && self.axes[Horizontal].has_scrollbar {
            if self.axes[Horizontal].is_shown {
                actions.push(Action::Mount(Horizontal));
                if wheel && !self.axes[Vertical].is_shown {
                    actions.push(Action::BindWheel(Horizontal));
                }
            } else {
                actions.push(Action::ResetOffset(Horizontal));
                if self.auto_hide {
                    actions.push(Action::Unmount(Horizontal));
                }
            }
        }

        if wheel
            && !self.axes[Vertical].is_shown
            && !self.axes[Horizontal].is_shown
        {
            actions.push(Action::UnbindWheel);
        }

        for action in &actions {
            match *action {
                Action::BindWheel(o) => self.wheel = Some(o),
                Action::UnbindWheel => self.wheel = None,
                _ => (),
            }
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Orientation::{Horizontal, Vertical};

    fn both() -> Core {
        let mut core = Core::new(XY::new(true, true), true, 2);
        core.sync_wheel();
        core
    }

    #[test]
    fn initial_state() {
        let core = both();
        assert_eq!(core.shown(), XY::new(true, true));
        assert_eq!(core.wheel(), Some(Vertical));

        let mut core = Core::new(XY::new(true, false), true, 2);
        assert_eq!(core.sync_wheel(), Some(Action::BindWheel(Horizontal)));

        let mut core = Core::new(XY::new(true, true), true, 0);
        assert_eq!(core.sync_wheel(), None);
        assert_eq!(core.wheel(), None);
    }

    #[test]
    fn wide_content() {
        let mut core = both();
        let dirty = core.diff(XY::new(true, false));
        assert_eq!(dirty, XY::new(false, true));
        assert_eq!(
            core.apply(dirty),
            vec![
                Action::ResetOffset(Vertical),
                Action::Unmount(Vertical),
                Action::BindWheel(Horizontal),
            ]
        );
        assert_eq!(core.wheel(), Some(Horizontal));
    }

    #[test]
    fn both_hidden_at_once() {
        let mut core = both();
        let dirty = core.diff(XY::new(false, false));
        assert_eq!(
            core.apply(dirty),
            vec![
                Action::ResetOffset(Vertical),
                Action::Unmount(Vertical),
                Action::ResetOffset(Horizontal),
                Action::Unmount(Horizontal),
                Action::UnbindWheel,
            ]
        );
        assert_eq!(core.wheel(), None);
    }

    #[test]
    fn showing_both() {
        let mut core = both();
        let dirty = core.diff(XY::new(false, false));
        core.apply(dirty);

        let dirty = core.diff(XY::new(true, true));
        assert_eq!(
            core.apply(dirty),
            vec![
                Action::Mount(Vertical),
                Action::BindWheel(Vertical),
                Action::Mount(Horizontal),
            ]
        );
        assert_eq!(core.wheel(), Some(Vertical));
    }

    #[test]
    fn kept_scrollbars() {
        let mut core = Core::new(XY::new(true, true), false, 2);
        core.sync_wheel();
        let dirty = core.diff(XY::new(true, false));
        assert_eq!(
            core.apply(dirty),
            vec![
                Action::ResetOffset(Vertical),
                Action::BindWheel(Horizontal)
            ]
        );
    }

    #[test]
    fn missing_scrollbar_never_shown() {
        let mut core = Core::new(XY::new(false, true), true, 2);
        core.sync_wheel();
        let dirty = core.diff(XY::new(true, true));
        assert!(!dirty.any());
        assert!(!core.axis(Horizontal).is_shown);
        assert!(!core.axis(Horizontal).has_scrollbar);
    }

    #[test]
    fn diff_is_idempotent() {
        let mut core = both();
        for overflow in [
            XY::new(true, false),
            XY::new(false, true),
            XY::new(true, true),
            XY::new(false, false),
        ] {
            let dirty = core.diff(overflow);
            core.apply(dirty);
            assert!(!core.diff(overflow).any());
            assert!(core.apply(XY::both_from(false)).iter().all(|a| {
                matches!(a, Action::UnbindWheel)
            }));
        }
    }

    #[test]
    fn wheel_follows_shown_scrollbars() {
        let overflows = [
            XY::new(false, false),
            XY::new(true, false),
            XY::new(false, true),
            XY::new(true, true),
        ];
        let layouts = [
            XY::new(true, true),
            XY::new(true, false),
            XY::new(false, true),
            XY::new(false, false),
        ];

        for scrollbars in layouts {
            for first in overflows {
                for second in overflows {
                    let mut core = Core::new(scrollbars, true, 2);
                    core.sync_wheel();
                    for overflow in [first, second] {
                        let dirty = core.diff(overflow);
                        core.apply(dirty);
                        assert_eq!(core.wheel(), core.wheel_target());
                        for o in Orientation::pair() {
                            let axis = core.axis(o);
                            assert!(!axis.is_shown || axis.has_scrollbar);
                        }
                    }
                }
            }
        }
    }
}
