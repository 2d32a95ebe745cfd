//! Puppet host
//!
//! An in-memory toolkit, used to run scrolled frames without a display.
//!
//! It keeps a widget tree, computes a simple layout (a weighted grid, a
//! packer and a placer), scrolls canvases over their embedded windows, and
//! dispatches events through bindings and routing groups.
//!
//! Events are never dispatched from within a [`host::Host`] call. Layout
//! changes queue `Configure` events, and artificial wheel input is queued by
//! [`Host::wheel`]. Both are dispatched one at a time by [`Host::step`].
use crossbeam_channel::{self, Receiver, Sender, TryRecvError};
use enum_map::EnumMap;

use crate::config::{Config, Object};
use crate::direction::Orientation;
use crate::error::NoSuchWidget;
use crate::event::{
    Callback, DragCallback, Event, EventResult, OffsetCallback,
    ScrollCommand, ScrollUnit, Span, Trigger,
};
use crate::host::{
    self, GroupId, HostResult, ItemId, Placement, WidgetId, WidgetKind,
};
use crate::{Rect, Vec2};

mod layout;
mod static_values;

use static_values::*;

type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

/// Puppet host for testing.
pub struct Host {
    nodes: HashMap<WidgetId, Node>,
    root: WidgetId,
    root_size: Vec2,
    next_id: u64,
    next_item: u64,
    group_bindings: HashMap<(GroupId, Trigger), Callback>,
    inner_sender: Sender<(WidgetId, Event)>,
    inner_receiver: Receiver<(WidgetId, Event)>,
}

struct Node {
    kind: WidgetKind,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    options: Object,
    placement: Option<Placement>,
    removed_grid: Option<host::Grid>,
    propagate: bool,
    weights: EnumMap<Orientation, HashMap<usize, usize>>,
    groups: Vec<GroupId>,
    bindings: HashMap<Trigger, Callback>,
    size: Vec2,
    canvas: Option<Canvas>,
    scrollbar: Option<Scrollbar>,
}

impl Node {
    fn new(kind: WidgetKind, parent: Option<WidgetId>, options: Object) -> Self {
        let canvas = match kind {
            WidgetKind::Canvas => Some(Canvas::default()),
            _ => None,
        };
        let scrollbar = match kind {
            WidgetKind::Scrollbar(_) => Some(Scrollbar::default()),
            _ => None,
        };

        Node {
            kind,
            parent,
            children: Vec::new(),
            options,
            placement: None,
            removed_grid: None,
            propagate: true,
            weights: EnumMap::default(),
            groups: Vec::new(),
            bindings: HashMap::default(),
            size: Vec2::zero(),
            canvas,
            scrollbar,
        }
    }

    fn option_size(&self, key: &str) -> usize {
        self.options
            .get(key)
            .and_then(Config::as_u64)
            .map_or(0, |n| n as usize)
    }
}

#[derive(Default)]
struct Canvas {
    items: Vec<Item>,
    region: Rect,
    offset: Vec2,
    spans: EnumMap<Orientation, Option<Span>>,
    offset_callbacks: EnumMap<Orientation, Option<OffsetCallback>>,
}

struct Item {
    id: ItemId,
    window: WidgetId,
    size: Option<Vec2>,
}

struct Scrollbar {
    thumb: Span,
    on_dragged: Option<DragCallback>,
}

impl Default for Scrollbar {
    fn default() -> Self {
        Scrollbar {
            thumb: Span::full(),
            on_dragged: None,
        }
    }
}

impl Host {
    /// Creates a new puppet host with a root window of the given or
    /// default size.
    pub fn init(size_op: Option<Vec2>) -> Self {
        let (inner_sender, inner_receiver) = crossbeam_channel::unbounded();
        let root_size = size_op.unwrap_or(*DEFAULT_SIZE);
        let root = WidgetId(0);

        let mut options = Object::new();
        options.insert("width".into(), root_size.x.into());
        options.insert("height".into(), root_size.y.into());

        let mut root_node = Node::new(WidgetKind::Frame, None, options);
        root_node.size = root_size;

        let mut nodes = HashMap::default();
        nodes.insert(root, root_node);

        Host {
            nodes,
            root,
            root_size,
            next_id: 1,
            next_item: 1,
            group_bindings: HashMap::default(),
            inner_sender,
            inner_receiver,
        }
    }

    /// Queues a wheel event on the given widget.
    pub fn wheel(&self, target: WidgetId, delta: i32) {
        self.queue(target, Event::Wheel { delta });
    }

    /// Dispatches the next pending event, then runs the layout.
    ///
    /// Returns `false` if no event was pending.
    pub fn step(&mut self) -> bool {
        match self.inner_receiver.try_recv() {
            Ok((target, event)) => {
                self.dispatch(target, &event);
                host::Host::update_idletasks(self);
                true
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                false
            }
        }
    }

    /// Dispatches events until none is pending.
    ///
    /// Returns the number of events dispatched.
    pub fn run_pending(&mut self) -> usize {
        let mut count = 0;
        while self.step() {
            count += 1;
            if count >= MAX_PENDING_EVENTS {
                log::warn!("event queue did not settle after {count} events");
                break;
            }
        }
        count
    }

    /// Resizes the root window, then runs the layout.
    pub fn resize_root(&mut self, size: Vec2) {
        self.root_size = size;
        host::Host::update_idletasks(self);
    }

    /// Simulates the user dragging a scrollbar.
    pub fn drag(
        &mut self,
        scrollbar: WidgetId,
        command: ScrollCommand,
    ) -> HostResult<()> {
        let cb = self
            .node(scrollbar)?
            .scrollbar
            .as_ref()
            .and_then(|scrollbar| scrollbar.on_dragged.clone())
            .ok_or(NoSuchWidget(scrollbar))?;
        cb(self, command);
        host::Host::update_idletasks(self);
        Ok(())
    }

    /// Returns the number of live widgets, the root included.
    pub fn widget_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the widget exists and is managed by its parent.
    pub fn is_mapped(&self, id: WidgetId) -> bool {
        self.nodes
            .get(&id)
            .map_or(false, |node| node.placement.is_some())
    }

    /// Returns the routing groups of a widget, first group first.
    pub fn groups(&self, id: WidgetId) -> HostResult<Vec<GroupId>> {
        Ok(self.node(id)?.groups.clone())
    }

    /// Returns `true` if the group has a binding for this trigger.
    pub fn has_group_binding(&self, group: &GroupId, trigger: Trigger) -> bool {
        self.group_bindings.contains_key(&(group.clone(), trigger))
    }

    /// Returns the scroll region of a canvas.
    pub fn scroll_region(&self, canvas: WidgetId) -> HostResult<Rect> {
        Ok(self.canvas(canvas)?.region)
    }

    /// Returns the current scroll offset of a canvas, in pixels.
    pub fn offset(&self, canvas: WidgetId) -> HostResult<Vec2> {
        Ok(self.canvas(canvas)?.offset)
    }

    /// Returns the explicit size set on an embedded window, if any.
    pub fn item_size(
        &self,
        canvas: WidgetId,
        item: ItemId,
    ) -> HostResult<Option<Vec2>> {
        Ok(self
            .canvas(canvas)?
            .items
            .iter()
            .find(|i| i.id == item)
            .and_then(|i| i.size))
    }

    /// Returns the thumb position of a scrollbar.
    pub fn thumb(&self, scrollbar: WidgetId) -> HostResult<Span> {
        self.node(scrollbar)?
            .scrollbar
            .as_ref()
            .map(|scrollbar| scrollbar.thumb)
            .ok_or(NoSuchWidget(scrollbar))
    }

    fn queue(&self, target: WidgetId, event: Event) {
        // The receiver lives in `self`, so the channel is never disconnected.
        let _ = self.inner_sender.send((target, event));
    }

    fn dispatch(&mut self, target: WidgetId, event: &Event) -> EventResult {
        let trigger = event.trigger();
        let mut callbacks: Vec<Callback> = match self.nodes.get(&target) {
            Some(node) => node
                .groups
                .iter()
                .filter_map(|group| {
                    self.group_bindings.get(&(group.clone(), trigger))
                })
                .cloned()
                .chain(node.bindings.get(&trigger).cloned())
                .collect(),
            None => return EventResult::Ignored,
        };

        for cb in callbacks.drain(..) {
            if (*cb)(self, event).is_consumed() {
                return EventResult::Consumed;
            }
        }

        EventResult::Ignored
    }

    fn node(&self, id: WidgetId) -> HostResult<&Node> {
        self.nodes.get(&id).ok_or(NoSuchWidget(id))
    }

    fn node_mut(&mut self, id: WidgetId) -> HostResult<&mut Node> {
        self.nodes.get_mut(&id).ok_or(NoSuchWidget(id))
    }

    fn canvas(&self, id: WidgetId) -> HostResult<&Canvas> {
        self.node(id)?.canvas.as_ref().ok_or(NoSuchWidget(id))
    }

    fn canvas_mut(&mut self, id: WidgetId) -> HostResult<&mut Canvas> {
        self.node_mut(id)?.canvas.as_mut().ok_or(NoSuchWidget(id))
    }

    /// Clamps canvas offsets, then collects offset callbacks to run.
    fn settle_canvases(&mut self) -> Vec<(OffsetCallback, Span)> {
        let mut fired = Vec::new();
        for node in self.nodes.values_mut() {
            let size = node.size;
            let canvas = match node.canvas.as_mut() {
                Some(canvas) => canvas,
                None => continue,
            };

            let max = canvas.region.size().saturating_sub(size);
            canvas.offset = canvas.offset.or_min(max);

            for o in Orientation::pair() {
                let span = Span::of(
                    *canvas.offset.get(o),
                    *size.get(o),
                    *canvas.region.size().get(o),
                );
                if canvas.spans[o] != Some(span) {
                    canvas.spans[o] = Some(span);
                    if let Some(ref cb) = canvas.offset_callbacks[o] {
                        fired.push((cb.clone(), span));
                    }
                }
            }
        }
        fired
    }

    fn scroll_step(size: usize, unit: ScrollUnit) -> usize {
        match unit {
            ScrollUnit::Units => (size / 10).max(1),
            ScrollUnit::Pages => (size * 9 / 10).max(1),
        }
    }
}

impl host::Host for Host {
    fn root(&self) -> WidgetId {
        self.root
    }

    fn create(
        &mut self,
        parent: WidgetId,
        kind: WidgetKind,
        options: &Object,
    ) -> HostResult<WidgetId> {
        self.node(parent)?;

        let id = WidgetId(self.next_id);
        self.next_id += 1;

        let mut all_options = match kind {
            WidgetKind::Canvas => DEFAULT_CANVAS_OPTIONS.clone(),
            _ => Object::new(),
        };
        all_options.extend(options.clone());

        self.nodes
            .insert(id, Node::new(kind, Some(parent), all_options));
        self.node_mut(parent)?.children.push(id);

        Ok(id)
    }

    fn exists(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn children(&self, id: WidgetId) -> HostResult<Vec<WidgetId>> {
        Ok(self.node(id)?.children.clone())
    }

    fn destroy(&mut self, id: WidgetId) -> HostResult<()> {
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|&child| child != id);
        }

        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(&id) {
                stack.extend(node.children);
            }
        }

        Ok(())
    }

    fn configure(&mut self, id: WidgetId, options: &Object) -> HostResult<()> {
        self.node_mut(id)?.options.extend(options.clone());
        Ok(())
    }

    fn cget(&self, id: WidgetId, key: &str) -> HostResult<Option<Config>> {
        Ok(self.node(id)?.options.get(key).cloned())
    }

    fn manage(
        &mut self,
        id: WidgetId,
        placement: Placement,
    ) -> HostResult<()> {
        let node = self.node_mut(id)?;
        node.placement = Some(placement);
        node.removed_grid = None;
        Ok(())
    }

    fn forget(&mut self, id: WidgetId) -> HostResult<()> {
        let node = self.node_mut(id)?;
        node.placement = None;
        node.removed_grid = None;
        Ok(())
    }

    fn grid_remove(&mut self, id: WidgetId) -> HostResult<()> {
        let node = self.node_mut(id)?;
        if let Some(Placement::Grid(grid)) = node.placement {
            node.placement = None;
            node.removed_grid = Some(grid);
        }
        Ok(())
    }

    fn grid_restore(&mut self, id: WidgetId) -> HostResult<()> {
        let node = self.node_mut(id)?;
        if node.placement.is_none() {
            if let Some(grid) = node.removed_grid.take() {
                node.placement = Some(Placement::Grid(grid));
            }
        }
        Ok(())
    }

    fn placement(&self, id: WidgetId) -> HostResult<Option<Placement>> {
        Ok(self.node(id)?.placement)
    }

    fn set_propagate(
        &mut self,
        id: WidgetId,
        propagate: bool,
    ) -> HostResult<()> {
        self.node_mut(id)?.propagate = propagate;
        Ok(())
    }

    fn set_weight(
        &mut self,
        id: WidgetId,
        o: Orientation,
        index: usize,
        weight: usize,
    ) -> HostResult<()> {
        self.node_mut(id)?.weights[o].insert(index, weight);
        Ok(())
    }

    fn update_idletasks(&mut self) {
        let mut sizes = HashMap::default();
        self.layout_node(self.root, self.root_size, &mut sizes);

        let mut configured = Vec::new();
        for (&id, node) in self.nodes.iter_mut() {
            let size = sizes.get(&id).copied().unwrap_or_else(Vec2::zero);
            if node.size != size {
                node.size = size;
                configured.push((id, size));
            }
        }
        configured.sort_by_key(|&(id, _)| id);
        for (id, size) in configured {
            self.queue(id, Event::Configure { size });
        }

        for (cb, span) in self.settle_canvases() {
            cb(self, span);
        }
    }

    fn requested_size(&self, id: WidgetId) -> HostResult<Vec2> {
        self.node(id)?;
        Ok(self.requested(id))
    }

    fn size(&self, id: WidgetId) -> HostResult<Vec2> {
        Ok(self.node(id)?.size)
    }

    fn embed(
        &mut self,
        canvas: WidgetId,
        window: WidgetId,
    ) -> HostResult<ItemId> {
        self.node(window)?;
        let id = ItemId(self.next_item);
        self.canvas_mut(canvas)?.items.push(Item {
            id,
            window,
            size: None,
        });
        self.next_item += 1;
        Ok(id)
    }

    fn set_item_size(
        &mut self,
        canvas: WidgetId,
        item: ItemId,
        size: Vec2,
    ) -> HostResult<()> {
        let canvas = self.canvas_mut(canvas)?;
        if let Some(item) = canvas.items.iter_mut().find(|i| i.id == item) {
            item.size = Some(size);
        }
        Ok(())
    }

    fn set_scroll_region(
        &mut self,
        canvas: WidgetId,
        region: Rect,
    ) -> HostResult<()> {
        self.canvas_mut(canvas)?.region = region;
        Ok(())
    }

    fn move_to(
        &mut self,
        canvas: WidgetId,
        o: Orientation,
        fraction: f64,
    ) -> HostResult<()> {
        let size = *self.node(canvas)?.size.get(o);
        let canvas = self.canvas_mut(canvas)?;
        let total = *canvas.region.size().get(o);
        let max = total.saturating_sub(size);

        let target = (fraction.max(0.0) * total as f64).round() as usize;
        *canvas.offset.get_mut(o) = target.min(max);
        Ok(())
    }

    fn scroll_by(
        &mut self,
        canvas: WidgetId,
        o: Orientation,
        amount: i32,
        unit: ScrollUnit,
    ) -> HostResult<()> {
        let size = *self.node(canvas)?.size.get(o);
        let canvas = self.canvas_mut(canvas)?;
        let max = canvas.region.size().get(o).saturating_sub(size);

        let step = Host::scroll_step(size, unit);
        let distance = amount.unsigned_abs() as usize * step;
        let offset = canvas.offset.get_mut(o);
        *offset = if amount < 0 {
            offset.saturating_sub(distance)
        } else {
            (*offset + distance).min(max)
        };
        Ok(())
    }

    fn view(&self, canvas: WidgetId, o: Orientation) -> HostResult<Span> {
        let size = *self.node(canvas)?.size.get(o);
        let canvas = self.canvas(canvas)?;
        Ok(Span::of(
            *canvas.offset.get(o),
            size,
            *canvas.region.size().get(o),
        ))
    }

    fn on_offset_changed(
        &mut self,
        canvas: WidgetId,
        o: Orientation,
        cb: OffsetCallback,
    ) -> HostResult<()> {
        let canvas = self.canvas_mut(canvas)?;
        canvas.offset_callbacks[o] = Some(cb);
        canvas.spans[o] = None;
        Ok(())
    }

    fn on_dragged(
        &mut self,
        scrollbar: WidgetId,
        cb: DragCallback,
    ) -> HostResult<()> {
        self.node_mut(scrollbar)?
            .scrollbar
            .as_mut()
            .map(|scrollbar| scrollbar.on_dragged = Some(cb))
            .ok_or(NoSuchWidget(scrollbar))
    }

    fn set_thumb(
        &mut self,
        scrollbar: WidgetId,
        span: Span,
    ) -> HostResult<()> {
        self.node_mut(scrollbar)?
            .scrollbar
            .as_mut()
            .map(|scrollbar| scrollbar.thumb = span)
            .ok_or(NoSuchWidget(scrollbar))
    }

    fn bind(
        &mut self,
        id: WidgetId,
        trigger: Trigger,
        cb: Callback,
    ) -> HostResult<()> {
        self.node_mut(id)?.bindings.insert(trigger, cb);
        Ok(())
    }

    fn add_to_group(
        &mut self,
        id: WidgetId,
        group: &GroupId,
    ) -> HostResult<()> {
        let node = self.node_mut(id)?;
        if !node.groups.contains(group) {
            node.groups.insert(0, group.clone());
        }
        Ok(())
    }

    fn bind_group(&mut self, group: &GroupId, trigger: Trigger, cb: Callback) {
        self.group_bindings.insert((group.clone(), trigger), cb);
    }

    fn unbind_group(&mut self, group: &GroupId, trigger: Trigger) {
        self.group_bindings.remove(&(group.clone(), trigger));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Edge;
    use crate::host::{Grid, Host as _, Pack, Place};
    use enumset::EnumSet;
    use std::cell::Cell;
    use std::rc::Rc;

    fn frame(host: &mut Host, parent: WidgetId, w: usize, h: usize) -> WidgetId {
        let mut options = Object::new();
        options.insert("width".into(), w.into());
        options.insert("height".into(), h.into());
        host.create(parent, WidgetKind::Frame, &options).unwrap()
    }

    #[test]
    fn packed_sizes() {
        let mut host = Host::init(None);
        let root = host.root();
        let outer = host.create(root, WidgetKind::Frame, &Object::new()).unwrap();
        let a = frame(&mut host, outer, 500, 150);
        let b = frame(&mut host, outer, 100, 40);
        host.manage(outer, Placement::Pack(Pack::default())).unwrap();
        host.manage(a, Placement::Pack(Pack::default())).unwrap();
        host.manage(b, Placement::Pack(Pack::side(Edge::West))).unwrap();

        assert_eq!(host.requested_size(outer).unwrap(), Vec2::new(500, 190));

        host.update_idletasks();
        assert_eq!(host.size(outer).unwrap(), Vec2::new(500, 190));
        assert_eq!(host.size(a).unwrap(), Vec2::new(500, 150));
        assert_eq!(host.size(b).unwrap(), Vec2::new(100, 40));
    }

    #[test]
    fn weighted_grid() {
        let mut host = Host::init(None);
        let root = host.root();
        let outer = frame(&mut host, root, 300, 200);
        host.set_propagate(outer, false).unwrap();
        host.set_weight(outer, Orientation::Horizontal, 0, 1).unwrap();
        host.set_weight(outer, Orientation::Vertical, 0, 1).unwrap();
        host.manage(outer, Placement::Place(Place::default())).unwrap();

        let canvas = host.create(outer, WidgetKind::Canvas, &Object::new()).unwrap();
        let bar = host
            .create(outer, WidgetKind::Scrollbar(Orientation::Vertical), &Object::new())
            .unwrap();
        host.manage(
            canvas,
            Placement::Grid(Grid::cell(0, 0).sticky(EnumSet::all()).padx((3, 0))),
        )
        .unwrap();
        host.manage(
            bar,
            Placement::Grid(Grid::cell(1, 0).sticky(Edge::North | Edge::South)),
        )
        .unwrap();

        host.update_idletasks();
        assert_eq!(host.size(outer).unwrap(), Vec2::new(300, 200));
        assert_eq!(host.size(canvas).unwrap(), Vec2::new(281, 200));
        assert_eq!(host.size(bar).unwrap(), Vec2::new(16, 200));

        host.grid_remove(bar).unwrap();
        host.update_idletasks();
        assert!(!host.is_mapped(bar));
        assert_eq!(host.size(canvas).unwrap(), Vec2::new(297, 200));

        host.grid_restore(bar).unwrap();
        host.update_idletasks();
        assert_eq!(host.size(canvas).unwrap(), Vec2::new(281, 200));
    }

    #[test]
    fn canvas_scrolling() {
        let mut host = Host::init(None);
        let root = host.root();
        let canvas = host.create(root, WidgetKind::Canvas, &Object::new()).unwrap();
        host.manage(
            canvas,
            Placement::Place(Place {
                width: Some(100),
                height: Some(100),
                ..Place::default()
            }),
        )
        .unwrap();
        let content = frame(&mut host, canvas, 400, 100);
        let item = host.embed(canvas, content).unwrap();

        let last = Rc::new(Cell::new(None));
        let seen = Rc::clone(&last);
        host.on_offset_changed(
            canvas,
            Orientation::Horizontal,
            Rc::new(move |_: &mut dyn host::Host, span: Span| {
                seen.set(Some(span))
            }),
        )
        .unwrap();

        host.set_scroll_region(canvas, Rect::from_size((0, 0), (400, 100))).unwrap();
        host.update_idletasks();
        assert_eq!(host.size(content).unwrap(), Vec2::new(400, 100));
        assert_eq!(last.get(), Some(Span::of(0, 100, 400)));

        host.scroll_by(canvas, Orientation::Horizontal, 3, ScrollUnit::Units).unwrap();
        assert_eq!(host.offset(canvas).unwrap(), Vec2::new(30, 0));
        host.scroll_by(canvas, Orientation::Horizontal, 2, ScrollUnit::Pages).unwrap();
        assert_eq!(host.offset(canvas).unwrap(), Vec2::new(210, 0));
        host.move_to(canvas, Orientation::Horizontal, 1.0).unwrap();
        assert_eq!(host.offset(canvas).unwrap(), Vec2::new(300, 0));
        host.scroll_by(canvas, Orientation::Vertical, 5, ScrollUnit::Units).unwrap();
        assert_eq!(host.offset(canvas).unwrap(), Vec2::new(300, 0));

        host.update_idletasks();
        assert_eq!(last.get(), Some(Span::of(300, 100, 400)));

        host.set_item_size(canvas, item, Vec2::new(400, 120)).unwrap();
        host.update_idletasks();
        assert_eq!(host.size(content).unwrap(), Vec2::new(400, 120));
    }

    #[test]
    fn group_dispatch() {
        let mut host = Host::init(None);
        let root = host.root();
        let a = frame(&mut host, root, 10, 10);
        let group = GroupId::new("group");
        host.add_to_group(a, &group).unwrap();
        host.add_to_group(a, &group).unwrap();
        assert_eq!(host.groups(a).unwrap(), vec![group.clone()]);

        let hits = Rc::new(Cell::new(0));
        let own = Rc::clone(&hits);
        host.bind(
            a,
            Trigger::Wheel,
            Callback::from_fn(move |_, _| {
                own.set(own.get() + 1);
                EventResult::Consumed
            }),
        )
        .unwrap();

        host.wheel(a, 120);
        assert_eq!(host.run_pending(), 1);
        assert_eq!(hits.get(), 1);

        host.bind_group(
            &group,
            Trigger::Wheel,
            Callback::from_fn(|_, _| EventResult::Consumed),
        );
        host.wheel(a, 120);
        host.run_pending();
        assert_eq!(hits.get(), 1);

        host.unbind_group(&group, Trigger::Wheel);
        host.wheel(a, 120);
        host.run_pending();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn destroy_subtree() {
        let mut host = Host::init(None);
        let root = host.root();
        let a = frame(&mut host, root, 10, 10);
        let b = frame(&mut host, a, 10, 10);
        assert_eq!(host.widget_count(), 3);

        host.destroy(a).unwrap();
        assert!(!host.exists(b));
        assert_eq!(host.widget_count(), 1);
        assert!(host.children(root).unwrap().is_empty());
        assert_eq!(host.destroy(a), Err(NoSuchWidget(a)));
    }
}
