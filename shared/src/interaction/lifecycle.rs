//! Scoped attachment of the global viewport listeners.
//!
//! [`ViewportListeners::mount`] attaches one scroll listener and one
//! pointer-move listener through a [`ViewportHost`], runs the scroll handler
//! once so the first paint reflects the current position, and returns a guard.
//! Dropping the guard detaches both listeners.

use std::fmt;
use std::rc::Rc;

use super::pointer::PointerPosition;
use super::scroll::ScrollMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    PointerMove,
}

impl ListenerKind {
    /// DOM event type the listener is registered for.
    pub fn event_name(self) -> &'static str {
        match self {
            ListenerKind::Scroll => "scroll",
            ListenerKind::PointerMove => "mousemove",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListenerError {
    #[error("failed to attach {kind} listener: {reason}")]
    Attach { kind: ListenerKind, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Scrolled(ScrollMetrics),
    PointerMoved(PointerPosition),
}

pub type ViewportHandler = Rc<dyn Fn(ViewportEvent)>;

/// The global viewport: a browser window, or a fake in tests.
pub trait ViewportHost {
    type ListenerId;

    /// Register `handler` for `kind`. The host translates raw events into [`ViewportEvent`]s.
    fn attach(&mut self, kind: ListenerKind, handler: ViewportHandler) -> Result<Self::ListenerId, ListenerError>;

    fn detach(&mut self, id: Self::ListenerId);

    fn scroll_metrics(&self) -> ScrollMetrics;
}

#[must_use = "listeners are detached as soon as the guard is dropped"]
pub struct ViewportListeners<H: ViewportHost> {
    host: H,
    attached: Vec<H::ListenerId>,
}

impl<H: ViewportHost> ViewportListeners<H> {
    pub fn mount(host: H, handler: ViewportHandler) -> Result<Self, ListenerError> {
        let mut listeners = Self {
            host,
            attached: Vec::with_capacity(2),
        };
        // On error the partially filled guard drops here and detaches what it has.
        for kind in [ListenerKind::Scroll, ListenerKind::PointerMove] {
            let id = listeners.host.attach(kind, Rc::clone(&handler))?;
            listeners.attached.push(id);
        }
        handler(ViewportEvent::Scrolled(listeners.host.scroll_metrics()));
        Ok(listeners)
    }

    pub fn listener_count(&self) -> usize {
        self.attached.len()
    }

    pub fn unmount(self) {}
}

impl<H: ViewportHost> Drop for ViewportListeners<H> {
    fn drop(&mut self) {
        for id in self.attached.drain(..) {
            self.host.detach(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Registry {
        next_id: usize,
        handlers: Vec<(usize, ListenerKind, ViewportHandler)>,
        fail_on: Option<ListenerKind>,
        metrics: ScrollMetrics,
    }

    #[derive(Clone, Default)]
    struct FakeHost(Rc<RefCell<Registry>>);

    impl FakeHost {
        fn fire(&self, kind: ListenerKind, event: ViewportEvent) {
            let handlers: Vec<ViewportHandler> = self
                .0
                .borrow()
                .handlers
                .iter()
                .filter(|(_, registered, _)| *registered == kind)
                .map(|(_, _, handler)| Rc::clone(handler))
                .collect();
            for handler in handlers {
                handler(event);
            }
        }

        fn attached(&self) -> usize {
            self.0.borrow().handlers.len()
        }
    }

    impl ViewportHost for FakeHost {
        type ListenerId = usize;

        fn attach(&mut self, kind: ListenerKind, handler: ViewportHandler) -> Result<usize, ListenerError> {
            let mut registry = self.0.borrow_mut();
            if registry.fail_on == Some(kind) {
                return Err(ListenerError::Attach {
                    kind,
                    reason: "host refused".to_owned(),
                });
            }
            registry.next_id += 1;
            let id = registry.next_id;
            registry.handlers.push((id, kind, handler));
            Ok(id)
        }

        fn detach(&mut self, id: usize) {
            self.0.borrow_mut().handlers.retain(|(registered, _, _)| *registered != id);
        }

        fn scroll_metrics(&self) -> ScrollMetrics {
            self.0.borrow().metrics
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<ViewportEvent>>>, ViewportHandler) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler: ViewportHandler = {
            let seen = Rc::clone(&seen);
            Rc::new(move |event| seen.borrow_mut().push(event))
        };
        (seen, handler)
    }

    #[test]
    fn mount_attaches_both_and_runs_scroll_once() {
        let host = FakeHost::default();
        host.0.borrow_mut().metrics = ScrollMetrics::new(120.0, 2000.0, 1000.0);
        let (seen, handler) = recorder();

        let listeners = ViewportListeners::mount(host.clone(), handler).unwrap();
        assert_eq!(listeners.listener_count(), 2);
        assert_eq!(host.attached(), 2);
        assert_eq!(
            *seen.borrow(),
            vec![ViewportEvent::Scrolled(ScrollMetrics::new(120.0, 2000.0, 1000.0))]
        );

        host.fire(ListenerKind::PointerMove, ViewportEvent::PointerMoved(PointerPosition::new(3.0, 4.0)));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn no_updates_after_unmount() {
        let host = FakeHost::default();
        let (seen, handler) = recorder();

        let listeners = ViewportListeners::mount(host.clone(), handler).unwrap();
        listeners.unmount();
        assert_eq!(host.attached(), 0);

        let before = seen.borrow().len();
        host.fire(ListenerKind::Scroll, ViewportEvent::Scrolled(ScrollMetrics::new(500.0, 2000.0, 1000.0)));
        host.fire(ListenerKind::PointerMove, ViewportEvent::PointerMoved(PointerPosition::new(1.0, 1.0)));
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn failed_attach_rolls_back() {
        let host = FakeHost::default();
        host.0.borrow_mut().fail_on = Some(ListenerKind::PointerMove);
        let (seen, handler) = recorder();

        let error = ViewportListeners::mount(host.clone(), handler).err().unwrap();
        assert_eq!(
            error.to_string(),
            "failed to attach mousemove listener: host refused"
        );
        assert_eq!(host.attached(), 0);
        assert!(seen.borrow().is_empty());
    }
}
