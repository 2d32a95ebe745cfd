use std::collections::VecDeque;

use crate::error::NoSuchWidget;
use crate::host::{Host, WidgetId};

type HashSet<T> = std::collections::HashSet<T, ahash::RandomState>;

/// Finds the widgets added under a container since the last visit.
#[derive(Debug, Default)]
pub struct ChildTracker {
    known: HashSet<WidgetId>,
}

impl ChildTracker {
    /// Creates a tracker that knows no widget yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the whole tree under `container`, the container included.
    ///
    /// Returns the widgets that were not seen by the previous call, in
    /// breadth-first order. Widgets destroyed since then are forgotten.
    ///
    /// Fails only if `container` itself does not exist.
    pub fn discover_new(
        &mut self,
        host: &dyn Host,
        container: WidgetId,
    ) -> Result<Vec<WidgetId>, NoSuchWidget> {
        let mut current = HashSet::default();
        let mut new = Vec::new();

        let mut queue = VecDeque::new();
        queue.extend(host.children(container)?);
        current.insert(container);
        if !self.known.contains(&container) {
            new.push(container);
        }

        while let Some(widget) = queue.pop_front() {
            // Destroyed under our feet: it will not be in `current`.
            let children = match host.children(widget) {
                Ok(children) => children,
                Err(_) => continue,
            };
            if current.insert(widget) && !self.known.contains(&widget) {
                new.push(widget);
            }
            queue.extend(children);
        }

        self.known = current;
        Ok(new)
    }

    /// Returns `true` if the widget was seen by the last call.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.known.contains(&id)
    }

    /// Returns the number of widgets seen by the last call.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Returns `true` if no widget was seen yet.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Object;
    use crate::host::WidgetKind;
    use crate::puppet;

    #[test]
    fn incremental_discovery() {
        let mut host = puppet::Host::init(None);
        let root = host.root();
        let container = host.create(root, WidgetKind::Frame, &Object::new()).unwrap();
        let a = host.create(container, WidgetKind::Frame, &Object::new()).unwrap();

        let mut tracker = ChildTracker::new();
        assert_eq!(tracker.discover_new(&host, container).unwrap(), vec![container, a]);
        assert!(tracker.discover_new(&host, container).unwrap().is_empty());

        let b = host.create(a, WidgetKind::Frame, &Object::new()).unwrap();
        let c = host.create(b, WidgetKind::Canvas, &Object::new()).unwrap();
        assert_eq!(tracker.discover_new(&host, container).unwrap(), vec![b, c]);
        assert_eq!(tracker.len(), 4);

        host.destroy(b).unwrap();
        assert!(tracker.discover_new(&host, container).unwrap().is_empty());
        assert!(!tracker.contains(c));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn missing_container() {
        let mut host = puppet::Host::init(None);
        let root = host.root();
        let container = host.create(root, WidgetKind::Frame, &Object::new()).unwrap();
        host.destroy(container).unwrap();

        let mut tracker = ChildTracker::new();
        assert_eq!(
            tracker.discover_new(&host, container),
            Err(NoSuchWidget(container))
        );
    }
}
