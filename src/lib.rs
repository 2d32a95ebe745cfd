//! # autoscroll
//!
//! autoscroll provides a scrollable container for widget toolkits,
//! whose scrollbars are only shown while the content overflows.
//!
//! The container, [`ScrolledFrame`], talks to the toolkit through the
//! [`host::Host`] trait. An in-memory implementation, [`puppet::Host`],
//! lays widgets out without any display and is used in tests.
//!
//! ## Examples
//!
//! ```rust
//! use autoscroll::config::Options;
//! use autoscroll::host::{Geometry, Host, Pack};
//! use autoscroll::{puppet, ScrolledFrame};
//!
//! let mut host = puppet::Host::init(None);
//! let root = host.root();
//!
//! let options = Options::new().scrollbars("SE").scroll_speed(3);
//! let frame = ScrolledFrame::new(&mut host, root, &options).unwrap();
//! frame.pack(&mut host, Pack::default()).unwrap();
//!
//! // Widgets go in `frame.id()`. Then:
//! frame.redraw(&mut host).unwrap();
//! host.run_pending();
//! ```
//!
//! ## Debugging
//!
//! Scrollbar changes are logged through the [`log`] crate. The [`logger`]
//! module keeps recent records in memory, which helps when no terminal is
//! available.
#![deny(missing_docs)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod config;
pub mod direction;
pub mod error;
pub mod event;
pub mod host;
pub mod logger;
pub mod puppet;
pub mod scroll;

mod frame;
mod padding;
mod rect;
mod vec;
mod xy;

pub use self::error::Error;
pub use self::frame::ScrolledFrame;
pub use self::padding::Padding;
pub use self::rect::Rect;
pub use self::scroll::Redraw;
pub use self::vec::Vec2;
pub use self::xy::XY;
