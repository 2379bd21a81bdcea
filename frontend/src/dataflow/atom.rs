//! Local UI state Atom
//!
//! Atom is a small Actor with a built-in setter relay, for state that belongs
//! to one view: the active theme, whether an element has been revealed.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    updated_relay: Relay<fn(&T) -> T>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + PartialEq + 'static,
{
    pub fn new(initial: T) -> Self {
        let (updated_relay, mut updated_stream) = relay::<fn(&T) -> T>();

        let actor = Actor::new(initial, async move |state| {
            while let Some(next) = updated_stream.next().await {
                let new_value = next(&state.lock_ref());
                state.set_neq(new_value);
            }
        });

        Self { actor, updated_relay }
    }

    /// Replace the value with `next(current)`, evaluated inside the Atom's loop.
    pub fn update(&self, next: fn(&T) -> T) {
        self.updated_relay.send(next);
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    /// Current value (for event handlers only)
    pub fn get_cloned(&self) -> T {
        self.actor.get_cloned()
    }
}
