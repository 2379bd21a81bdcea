//! Single-value Actor
//!
//! An Actor owns a `Mutable<T>` and the task that mutates it. Views only read
//! it through signals; writes happen inside the processor loop, one event at a
//! time. Dropping the last clone of an Actor cancels its task.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state container for Actor+Relay dataflow.
///
/// # Examples
///
/// ```rust
/// let (hover_changed_relay, mut hover_changed_stream) = relay();
///
/// let lift = Actor::new(0.0, async move |state| {
///     while let Some(hovered) = hover_changed_stream.next().await {
///         state.set_neq(if hovered { -4.0 } else { 0.0 });
///     }
/// });
///
/// El::new().update_raw_el(|raw_el| {
///     raw_el.style_signal("transform", lift.signal().map(|y| format!("translateY({y}px)")))
/// })
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start `processor` with a handle to the state it owns.
    #[track_caller]
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            task_handle,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Derived signal without cloning the whole state on every change.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        F: Fn(&T) -> U + Send + Sync + 'static,
        U: PartialEq + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }

    /// Latest value, for event handlers that must read synchronously.
    pub fn get_cloned(&self) -> T {
        self.state.get_cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::{StreamExt, select};
    use zoon::SignalExt;

    #[tokio::test]
    async fn processes_events_sequentially() {
        let (scroll_offset_relay, mut scroll_offset_stream) = relay::<f64>();

        let furthest = Actor::new(0.0, async move |state| {
            while let Some(offset) = scroll_offset_stream.next().await {
                state.update_mut(|furthest| *furthest = f64::max(*furthest, offset));
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        for offset in [120.0, 480.0, 60.0] {
            scroll_offset_relay.send(offset);
        }

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert_eq!(furthest.signal().to_stream().next().await, Some(480.0));
        assert_eq!(furthest.get_cloned(), 480.0);
    }

    #[tokio::test]
    async fn merges_independent_sources() {
        let (pointer_entered_relay, mut pointer_entered_stream) = relay::<()>();
        let (pointer_left_relay, mut pointer_left_stream) = relay::<()>();

        let hovered = Actor::new(false, async move |state| {
            loop {
                select! {
                    Some(()) = pointer_entered_stream.next() => state.set_neq(true),
                    Some(()) = pointer_left_stream.next() => state.set_neq(false),
                }
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        pointer_entered_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(hovered.get_cloned());

        pointer_left_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert_eq!(hovered.signal_ref(|hovered| !hovered).to_stream().next().await, Some(true));
    }
}
