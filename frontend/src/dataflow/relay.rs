//! Event streaming Relay
//!
//! A Relay is the sending half of an unbounded channel. Views send raw events
//! into it and exactly one Actor drains the receiving half.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, OnceLock};

/// Type-safe event source for Actor+Relay dataflow.
///
/// # Event-Source Naming Convention
///
/// Relays follow the `{source}_{event}_relay` pattern:
/// - `viewport_event_received_relay` - window scroll or pointer movement
/// - `pointer_moved_relay` - pointer moved over a magnetic element
/// - `hover_changed_relay` - card hovered or left
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::relay;
///
/// let (hover_changed_relay, mut hover_changed_stream) = relay::<bool>();
///
/// hover_changed_relay.send(true);
///
/// while let Some(hovered) = hover_changed_stream.next().await {
///     zoon::println!("hovered: {hovered}");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

/// Relay send called from multiple locations (debug builds only)
#[cfg(debug_assertions)]
#[derive(Debug, Clone)]
pub enum RelayError {
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    /// Every relay has a single source location; a second one is a wiring bug.
    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Send an event. Events sent after the Actor is gone are dropped.
    ///
    /// In debug builds, panics if this relay is sent from a second code location.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(e) = self.check_single_source() {
            panic!("{:?}", e);
        }

        // An unmounted element may still deliver a last event.
        let _ = self.sender.unbounded_send(value);
    }
}

/// Creates a new Relay with an associated receiver stream.
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use shared::interaction::{PointerPosition, ViewportEvent};

    fn emit(relay: &Relay<u8>, value: u8) {
        relay.send(value);
    }

    #[tokio::test]
    async fn delivers_events_in_send_order() {
        let (viewport_event_received_relay, mut stream) = relay();

        for x in [10.0, 20.0, 30.0] {
            viewport_event_received_relay.send(ViewportEvent::PointerMoved(PointerPosition::new(x, 0.0)));
        }

        for x in [10.0, 20.0, 30.0] {
            assert_eq!(
                stream.next().await,
                Some(ViewportEvent::PointerMoved(PointerPosition::new(x, 0.0)))
            );
        }
    }

    #[tokio::test]
    async fn send_after_receiver_dropped_is_ignored() {
        let (hover_changed_relay, stream) = relay::<bool>();
        drop(stream);
        hover_changed_relay.send(true);
    }

    #[tokio::test]
    async fn same_call_site_may_send_repeatedly() {
        let (counter_relay, mut stream) = relay::<u8>();
        for value in 0..3 {
            emit(&counter_relay, value);
        }
        let received: Vec<u8> = stream.by_ref().take(3).collect().await;
        assert_eq!(received, vec![0, 1, 2]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "MultipleEmitters")]
    fn second_call_site_panics_in_debug() {
        let (pointer_left_relay, _stream) = relay::<()>();
        pointer_left_relay.send(());
        pointer_left_relay.send(());
    }
}
