use std::cell::{Ref, RefCell};
use std::rc::Rc;

use enum_map::EnumMap;
use enumset::EnumSet;

use crate::config::{self, Config, Object, Options, Settings};
use crate::direction::{edges_to_string, Edge, Orientation};
use crate::event::{Callback, EventResult, Span, Trigger};
use crate::host::{
    Geometry, Grid, GroupId, Host, HostResult, Placement, WidgetId, WidgetKind,
};
use crate::scroll::{self, AxisState, ChildTracker, Parts, Redraw};
use crate::Error;

/// A frame with scrollbars that show up only when needed.
///
/// It is made of four widgets:
///
/// * an outer container, which is what geometry calls (pack, grid, place)
///   apply to;
/// * a canvas, the viewport, clipping the content;
/// * a content frame, embedded in the viewport, which holds your widgets;
/// * up to two scrollbars, on the edges given by the `scrollbars` option.
///
/// Whenever the viewport is resized (or when [`ScrolledFrame::redraw`] is
/// called), the content is measured again and each scrollbar is shown if
/// the content overflows along its axis, and hidden otherwise.
///
/// The mouse wheel scrolls the vertical axis while its scrollbar is shown,
/// and the horizontal axis otherwise. It works over any descendant of the
/// container, including widgets added after construction.
///
/// # Examples
///
/// ```rust
/// # use autoscroll::ScrolledFrame;
/// # use autoscroll::config::{Object, Options};
/// # use autoscroll::host::{Geometry, Host, Pack, Placement, WidgetKind};
/// # use autoscroll::puppet;
/// let mut host = puppet::Host::init(None);
/// let root = host.root();
///
/// let options = Options::new().scrollbars("SE").padding(0);
/// let frame = ScrolledFrame::new(&mut host, root, &options).unwrap();
/// frame.pack(&mut host, Pack::default()).unwrap();
///
/// let mut size = Object::new();
/// size.insert("width".into(), 500.into());
/// size.insert("height".into(), 150.into());
/// let child = host.create(frame.id(), WidgetKind::Frame, &size).unwrap();
/// host.manage(child, Placement::Pack(Pack::default())).unwrap();
///
/// frame.redraw(&mut host).unwrap();
/// host.run_pending();
/// assert!(frame.axis(autoscroll::direction::Orientation::Horizontal).is_shown);
/// ```
pub struct ScrolledFrame {
    parts: Parts,
    state: Rc<RefCell<State>>,
}

struct State {
    settings: Settings,
    core: scroll::Core,
    tracker: ChildTracker,
}

impl State {
    fn redraw(&mut self, host: &mut dyn Host, parts: &Parts) -> HostResult<Redraw> {
        scroll::redraw(host, parts, &mut self.core, &mut self.tracker)
    }
}

impl ScrolledFrame {
    /// Builds a new scrolled frame as a child of `parent`.
    ///
    /// Options are validated before anything is created: invalid options
    /// return an error and leave the host untouched.
    pub fn new(
        host: &mut dyn Host,
        parent: WidgetId,
        options: &Options,
    ) -> Result<Self, Error> {
        let settings = Settings::from_options(options)?;
        Ok(ScrolledFrame::from_settings(host, parent, settings)?)
    }

    /// Builds a new scrolled frame from already validated settings.
    pub fn from_settings(
        host: &mut dyn Host,
        parent: WidgetId,
        settings: Settings,
    ) -> HostResult<Self> {
        let container = host.create(parent, WidgetKind::Frame, &settings.style)?;
        match ScrolledFrame::build(host, container, settings) {
            Ok(frame) => Ok(frame),
            Err(err) => {
                log::error!("{container}: cannot build scrolled frame: {err}");
                // Everything else lives under the container.
                host.unbind_group(&GroupId::children_of(container), Trigger::Wheel);
                if let Err(cleanup) = host.destroy(container) {
                    log::warn!("{container}: cannot clean up: {cleanup}");
                }
                Err(err)
            }
        }
    }

    fn build(
        host: &mut dyn Host,
        container: WidgetId,
        settings: Settings,
    ) -> HostResult<Self> {
        let parts = assemble(host, container, &settings)?;

        log::debug!(
            "{}: scrolled frame with scrollbars {:?}",
            container,
            edges_to_string(settings.edges)
        );

        let auto_update = settings.auto_update;
        let mut core = scroll::Core::from_settings(&settings);
        if let Some(action) = core.sync_wheel() {
            scroll::perform(host, &parts, action, core.scroll_speed())?;
        }

        let frame = ScrolledFrame {
            parts,
            state: Rc::new(RefCell::new(State {
                settings,
                core,
                tracker: ChildTracker::new(),
            })),
        };

        frame.redraw(host)?;

        if auto_update {
            frame.bind_resize(host)?;
        }

        Ok(frame)
    }

    /// Redraws the frame when the viewport is resized.
    fn bind_resize(&self, host: &mut dyn Host) -> HostResult<()> {
        let state = Rc::downgrade(&self.state);
        let parts = self.parts.clone();

        host.bind(
            self.parts.viewport,
            Trigger::Configure,
            Callback::from_fn(move |host, _| {
                let state = match state.upgrade() {
                    Some(state) => state,
                    None => return EventResult::Ignored,
                };
                let mut state = match state.try_borrow_mut() {
                    Ok(state) => state,
                    Err(_) => {
                        log::error!(
                            "{}: resized during a redraw",
                            parts.container
                        );
                        return EventResult::Ignored;
                    }
                };
                if let Err(err) = state.redraw(host, &parts) {
                    log::error!("{}: redraw failed: {err}", parts.container);
                }
                EventResult::Consumed
            }),
        )
    }

    /// Measures the content again and updates the scrollbars.
    ///
    /// This runs automatically whenever the viewport is resized, unless
    /// the frame was built with `auto_update` disabled. Call it after
    /// adding, removing or resizing widgets in the content.
    pub fn redraw(&self, host: &mut dyn Host) -> HostResult<Redraw> {
        self.state.borrow_mut().redraw(host, &self.parts)
    }

    /// Sets options on the content frame.
    ///
    /// A non-empty `background` (or `bg`) or `cursor` also applies to the
    /// container and the viewport.
    pub fn configure(
        &self,
        host: &mut dyn Host,
        options: &Object,
    ) -> HostResult<()> {
        let mut options = options.clone();
        let bg = options.remove("bg");
        let background = config::non_empty(options.get("background"))
            .or_else(|| config::non_empty(bg.as_ref()));
        let cursor = config::non_empty(options.get("cursor"));

        options.remove("background");
        options.remove("cursor");

        let mut shared = Object::new();
        {
            let mut state = self.state.borrow_mut();
            if let Some(background) = background {
                shared.insert("background".into(), background.as_str().into());
                state.settings.background = Some(background);
            }
            if let Some(cursor) = cursor {
                shared.insert("cursor".into(), cursor.as_str().into());
                state.settings.cursor = Some(cursor);
            }
        }

        if !shared.is_empty() {
            host.configure(self.parts.container, &shared)?;
            host.configure(self.parts.viewport, &shared)?;
        }

        options.extend(shared);
        host.configure(self.parts.content, &options)
    }

    /// Reads an option of the content frame.
    pub fn cget(&self, host: &dyn Host, key: &str) -> HostResult<Option<Config>> {
        host.cget(self.parts.content, key)
    }

    /// Destroys the frame and everything in it.
    pub fn destroy(self, host: &mut dyn Host) -> HostResult<()> {
        host.unbind_group(&self.parts.group, Trigger::Wheel);
        // The content may have been destroyed by the user already.
        if host.exists(self.parts.content) {
            host.destroy(self.parts.content)?;
        }
        host.destroy(self.parts.container)
    }

    /// Returns the content frame.
    ///
    /// This is the parent to give to the widgets to scroll.
    pub fn id(&self) -> WidgetId {
        self.parts.content
    }

    /// Returns the outer container.
    pub fn container(&self) -> WidgetId {
        self.parts.container
    }

    /// Returns the viewport canvas.
    pub fn viewport(&self) -> WidgetId {
        self.parts.viewport
    }

    /// Returns the scrollbar of an axis, if it has one.
    pub fn scrollbar(&self, o: Orientation) -> Option<WidgetId> {
        self.parts.scrollbars[o]
    }

    /// Returns the routing group holding every descendant of the container.
    pub fn group(&self) -> &GroupId {
        &self.parts.group
    }

    /// Returns the scrollbar state of an axis.
    pub fn axis(&self, o: Orientation) -> AxisState {
        self.state.borrow().core.axis(o)
    }

    /// Returns the axis currently receiving wheel input.
    pub fn wheel_binding(&self) -> Option<Orientation> {
        self.state.borrow().core.wheel()
    }

    /// Returns the settings this frame was built with.
    pub fn settings(&self) -> Ref<'_, Settings> {
        Ref::map(self.state.borrow(), |state| &state.settings)
    }

    /// Returns the visible part of the content along an axis.
    pub fn view(&self, host: &dyn Host, o: Orientation) -> HostResult<Span> {
        host.view(self.parts.viewport, o)
    }
}

impl Geometry for ScrolledFrame {
    fn geometry_target(&self) -> WidgetId {
        self.parts.container
    }
}

/// Creates everything inside the container.
fn assemble(
    host: &mut dyn Host,
    container: WidgetId,
    settings: &Settings,
) -> HostResult<Parts> {
    let north = settings.edges.contains(Edge::North);
    let west = settings.edges.contains(Edge::West);
    let (view_column, view_row) = (usize::from(west), usize::from(north));

    host.set_propagate(container, false)?;
    host.set_weight(container, Orientation::Vertical, view_row, 1)?;
    host.set_weight(container, Orientation::Horizontal, view_column, 1)?;

    let shared = settings.shared_style();
    let mut viewport_style = shared.clone();
    viewport_style.insert("highlightthickness".into(), 0.into());

    let viewport = host.create(container, WidgetKind::Canvas, &viewport_style)?;
    host.manage(
        viewport,
        Placement::Grid(
            Grid::cell(view_column, view_row)
                .sticky(EnumSet::all())
                .padx(settings.padding.lr())
                .pady(settings.padding.tb()),
        ),
    )?;

    let content = host.create(viewport, WidgetKind::Frame, &shared)?;

    let mut scrollbars = EnumMap::default();
    for o in Orientation::pair() {
        if !settings.has_scrollbar(o) {
            continue;
        }

        // Vertical scrollbars take the other column, horizontal ones the
        // other row.
        let grid = match o {
            Orientation::Vertical => {
                Grid::cell(1 - view_column, view_row)
                    .sticky(Edge::North | Edge::South)
            }
            Orientation::Horizontal => {
                Grid::cell(view_column, 1 - view_row)
                    .sticky(Edge::East | Edge::West)
            }
        };

        let scrollbar =
            host.create(container, WidgetKind::Scrollbar(o), &Object::new())?;
        host.manage(scrollbar, Placement::Grid(grid))?;
        scroll::connect_scrollbar(host, viewport, scrollbar, o)?;
        scrollbars[o] = Some(scrollbar);
    }

    let item = host.embed(viewport, content)?;

    Ok(Parts {
        container,
        viewport,
        content,
        item,
        scrollbars,
        group: GroupId::children_of(container),
    })
}
