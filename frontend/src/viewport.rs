//! Page-wide scroll and pointer tracking.
//!
//! The window listeners live in a [`ViewportListeners`] guard that exists only
//! while the page is mounted. Events flow through
//! `viewport_event_received_relay` into one Actor that runs the
//! [`ViewportTracker`] and publishes [`ViewportSnapshot`]s.

use std::cell::RefCell;
use std::rc::Rc;
use zoon::*;

use crate::dataflow::{Actor, Relay, relay};
use crate::motion::animate_actor;
use crate::platform::WindowHost;
use shared::interaction::lifecycle::ViewportHandler;
use shared::interaction::{ViewportEvent, ViewportListeners, ViewportSnapshot, ViewportTracker};
use shared::{MotionPreset, Palette};

/// Side length of the cursor glow element.
const GLOW_SIZE_PX: u32 = 400;
const PROGRESS_BAR_HEIGHT_PX: u32 = 3;

type ListenerSlot = Rc<RefCell<Option<ViewportListeners<WindowHost>>>>;

#[derive(Clone, Debug)]
pub struct ViewportTracking {
    /// Window scrolled or pointer moved
    pub viewport_event_received_relay: Relay<ViewportEvent>,
    snapshot: Actor<ViewportSnapshot>,
}

impl ViewportTracking {
    pub fn new(motion: &MotionPreset) -> Self {
        let (viewport_event_received_relay, viewport_event_received_stream) = relay();
        let snapshot = animate_actor(
            ViewportTracker::new(motion.cursor_spring, motion.glow_scale_max),
            viewport_event_received_stream,
        );
        Self {
            viewport_event_received_relay,
            snapshot,
        }
    }

    pub fn snapshot_signal(&self) -> impl Signal<Item = ViewportSnapshot> + use<> {
        self.snapshot.signal()
    }

    pub fn progress_signal(&self) -> impl Signal<Item = f64> + use<> {
        self.snapshot.signal_ref(|snapshot| snapshot.progress_percent)
    }

    /// Header condenses once this turns true.
    pub fn scrolled_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.snapshot.signal_ref(|snapshot| snapshot.scrolled)
    }

    fn attach_listeners(&self) -> Option<ViewportListeners<WindowHost>> {
        let Some(host) = WindowHost::new() else {
            zoon::eprintln!("No window available, viewport effects disabled");
            return None;
        };
        let relay = self.viewport_event_received_relay.clone();
        let handler: ViewportHandler = Rc::new(move |event| relay.send(event));
        match ViewportListeners::mount(host, handler) {
            Ok(listeners) => {
                zoon::println!("Viewport listeners attached ({})", listeners.listener_count());
                Some(listeners)
            }
            Err(error) => {
                zoon::eprintln!("Viewport effects disabled: {error}");
                None
            }
        }
    }

    /// Ties the window listeners to the lifetime of the returned element.
    pub fn scope<P: Element>(&self, page: P) -> impl Element + use<P> {
        let slot: ListenerSlot = Rc::new(RefCell::new(None));
        let tracking = self.clone();
        El::new()
            .s(Width::fill())
            .child(page)
            .after_insert({
                let slot = slot.clone();
                move |_| *slot.borrow_mut() = tracking.attach_listeners()
            })
            .after_remove(move |_| {
                if let Some(listeners) = slot.borrow_mut().take() {
                    listeners.unmount();
                    zoon::println!("Viewport listeners detached");
                }
            })
    }
}

/// Thin bar pinned to the top of the window, filled to the scroll progress.
pub fn progress_bar(tracking: &ViewportTracking, palette: &Palette) -> impl Element + use<> {
    let track = palette.progress_track;
    let gradient = palette.accent_gradient();
    let width_signal = tracking.progress_signal().map(|progress| format!("{progress:.2}%"));
    El::new()
        .s(Width::fill())
        .s(Height::exact(PROGRESS_BAR_HEIGHT_PX))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "fixed")
                .style("top", "0")
                .style("left", "0")
                .style("z-index", "60")
                .style("background", track)
                .style("pointer-events", "none")
        })
        .child(
            El::new()
                .s(Height::fill())
                .update_raw_el(move |raw_el| {
                    raw_el
                        .style("background", gradient.as_str())
                        .style_signal("width", width_signal)
                }),
        )
}

fn glow_transform(snapshot: ViewportSnapshot) -> String {
    format!(
        "translate3d({:.1}px, {:.1}px, 0) scale({:.3})",
        snapshot.glow.x, snapshot.glow.y, snapshot.glow_scale
    )
}

/// Soft radial glow that trails the pointer and grows slightly with scroll.
pub fn cursor_glow(tracking: &ViewportTracking, palette: &Palette) -> impl Element + use<> {
    let transform_signal = tracking.snapshot_signal().map(glow_transform);
    let background = palette.cursor_glow;
    El::new()
        .s(Width::exact(GLOW_SIZE_PX))
        .s(Height::exact(GLOW_SIZE_PX))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "fixed")
                .style("top", "0")
                .style("left", "0")
                .style("z-index", "0")
                .style("border-radius", "9999px")
                .style("pointer-events", "none")
                .style("will-change", "transform")
                .style("background", background)
                .style_signal("transform", transform_signal)
        })
}
