/// Some default values for the puppet host.
use lazy_static::lazy_static;

use crate::config::Object;
use crate::Vec2;
use crate::XY;

/// Thickness of a scrollbar, in pixels.
pub const SCROLLBAR_THICKNESS: usize = 16;

/// Upper bound on the events dispatched by a single `run_pending` call.
pub const MAX_PENDING_EVENTS: usize = 1_000;

lazy_static! {
    /// Default size for the puppet root window.
    pub static ref DEFAULT_SIZE: Vec2 = XY::<usize> { x: 800, y: 600 };

    /// Options every new canvas starts with.
    pub static ref DEFAULT_CANVAS_OPTIONS: Object = {
        let mut options = Object::new();
        options.insert("highlightthickness".into(), 1.into());
        options
    };
}
