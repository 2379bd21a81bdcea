//! Motion wrappers: magnetic hover, card lift, fade-up on reveal.
//!
//! Each wrapper owns its own Actor, fed by Relays from DOM event handlers.
//! The Actor is dropped together with the element.

use futures::{FutureExt, StreamExt, select, stream::Stream};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use zoon::*;

use crate::dataflow::{Actor, relay};
use crate::platform::now_seconds;
use shared::FadeUp;
use shared::interaction::{
    Animate, BoundingRect, FrameClock, HoverLift, MagneticInput, MagneticOffset, PointerPosition, Reveal, SpringConfig,
    Vec2,
};

/// Roughly one animation frame.
const FRAME_MS: u32 = 16;

/// Drive an [`Animate`] model from `inputs`, publishing its output.
///
/// While the model is settled the loop only waits for input; otherwise it
/// ticks every frame with the real elapsed time.
pub fn animate_actor<A, S>(model: A, inputs: S) -> Actor<A::Output>
where
    A: Animate + Send + 'static,
    A::Input: Send + 'static,
    A::Output: Send + Sync + 'static,
    S: Stream<Item = A::Input> + Send + Unpin + 'static,
{
    Actor::new(model.output(), async move |state| {
        drive(model, inputs, || Timer::sleep(FRAME_MS), now_seconds, &state).await;
    })
}

/// Frame loop behind [`animate_actor`]. The pending frame survives incoming
/// inputs, so a steady input stream cannot starve `tick`.
async fn drive<A, S, F, Fut>(
    mut model: A,
    inputs: S,
    mut next_frame: F,
    mut now: impl FnMut() -> f64,
    state: &Mutable<A::Output>,
) where
    A: Animate,
    S: Stream<Item = A::Input> + Unpin,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut inputs = inputs.fuse();
    let mut clock = FrameClock::default();
    let mut frame = Box::pin(next_frame().fuse());

    loop {
        if model.is_settled() {
            let Some(input) = inputs.next().await else { break };
            model.apply(input);
            clock.reset();
            clock.delta(now());
            frame = Box::pin(next_frame().fuse());
        } else {
            select! {
                input = inputs.next() => match input {
                    Some(input) => model.apply(input),
                    None => break,
                },
                () = frame => {
                    model.tick(clock.delta(now()));
                    frame = Box::pin(next_frame().fuse());
                }
            }
        }
        state.set_neq(model.output());
    }
}

fn translate(offset: Vec2) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y)
}

fn translate_y(offset_y: f64) -> String {
    format!("translateY({offset_y:.2}px)")
}

/// Pulls `child` toward the pointer while hovered and springs back on leave.
pub fn magnetic(strength: f64, spring: SpringConfig, child: impl Element) -> impl Element {
    let (pointer_moved_relay, pointer_moved_stream) = relay::<(BoundingRect, PointerPosition)>();
    let (pointer_left_relay, pointer_left_stream) = relay::<()>();

    let inputs = futures::stream::select(
        pointer_moved_stream.map(|(rect, pointer)| MagneticInput::PointerMoved { rect, pointer }),
        pointer_left_stream.map(|()| MagneticInput::PointerLeft),
    );
    let offset = animate_actor(MagneticOffset::new(strength, spring), inputs);
    let offset_signal = offset.signal();

    El::new()
        .child(child)
        .update_raw_el(move |raw_el| {
            let dom_element = raw_el.dom_element();
            raw_el
                .style("display", "inline-block")
                .style("will-change", "transform")
                .style_signal("transform", offset_signal.map(translate))
                .event_handler(move |event: events::MouseMove| {
                    let rect = dom_element.get_bounding_client_rect();
                    pointer_moved_relay.send((
                        BoundingRect::new(rect.left(), rect.top(), rect.width(), rect.height()),
                        PointerPosition::new(event.x() as f64, event.y() as f64),
                    ));
                })
                .event_handler(move |_: events::MouseLeave| pointer_left_relay.send(()))
        })
        .after_remove(move |_| drop(offset))
}

/// Card that rises by `lift_px` while hovered.
pub fn lift_card(lift_px: f64, spring: SpringConfig, child: impl Element) -> impl Element {
    let (hover_changed_relay, hover_changed_stream) = relay::<bool>();
    let lift = animate_actor(HoverLift::new(lift_px, spring), hover_changed_stream);
    let lift_signal = lift.signal();

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .child(child)
        .on_hovered_change(move |hovered| hover_changed_relay.send(hovered))
        .update_raw_el(move |raw_el| raw_el.style_signal("transform", lift_signal.map(translate_y)))
        .after_remove(move |_| drop(lift))
}

/// Live IntersectionObserver; disconnected on drop.
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_intersections(
    element: &web_sys::Element,
    threshold: f64,
    mut on_ratio: impl FnMut(f64) + 'static,
) -> Result<RevealObserver, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                on_ratio(entry.intersection_ratio());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

fn fade_transition(duration_seconds: f64, delay_seconds: f64) -> String {
    format!(
        "opacity {duration_seconds}s ease-out {delay_seconds}s, transform {duration_seconds}s ease-out {delay_seconds}s"
    )
}

/// Fades `child` up into place the first time enough of it is visible.
pub fn fade_up(preset: FadeUp, delay_seconds: f64, child: impl Element) -> impl Element {
    let (intersection_changed_relay, mut intersection_changed_stream) = relay::<f64>();
    let threshold = preset.threshold;

    let reveal = Actor::new(Reveal::Hidden, async move |state| {
        let mut reveal = Reveal::Hidden;
        while let Some(ratio) = intersection_changed_stream.next().await {
            if reveal.observe(ratio, threshold) {
                state.set(reveal);
                break;
            }
        }
    });
    let opacity_signal = reveal.signal_ref(|reveal| reveal.opacity().to_string());
    let offset = preset.offset_y;
    let transform_signal = reveal.signal_ref(move |reveal| translate_y(reveal.translate_y(offset)));

    let transition = fade_transition(preset.duration_seconds, delay_seconds);
    let observer: Rc<RefCell<Option<RevealObserver>>> = Rc::new(RefCell::new(None));

    El::new()
        .s(Width::fill())
        .child(child)
        .update_raw_el(move |raw_el| {
            raw_el
                .style("transition", transition.as_str())
                .style_signal("opacity", opacity_signal)
                .style_signal("transform", transform_signal)
        })
        .after_insert({
            let observer = observer.clone();
            move |element| {
                match observe_intersections(&element, threshold, move |ratio| intersection_changed_relay.send(ratio)) {
                    Ok(active) => *observer.borrow_mut() = Some(active),
                    Err(error) => {
                        // Without an observer the content would stay hidden forever.
                        zoon::eprintln!("IntersectionObserver unavailable, showing content: {error:?}");
                        reveal_now(&element);
                    }
                }
            }
        })
        .after_remove(move |_| {
            observer.borrow_mut().take();
            drop(reveal);
        })
}

fn reveal_now(element: &web_sys::HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "none");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_use_css_pixels() {
        assert_eq!(translate(Vec2::new(12.0, -4.5)), "translate3d(12.00px, -4.50px, 0)");
        assert_eq!(translate_y(-4.0), "translateY(-4.00px)");
    }

    #[test]
    fn fade_transition_applies_delay_to_both_properties() {
        assert_eq!(
            fade_transition(0.6, 0.16),
            "opacity 0.6s ease-out 0.16s, transform 0.6s ease-out 0.16s"
        );
    }

    /// Never settles; counts what the loop feeds it.
    #[derive(Default)]
    struct Counter {
        applied: u32,
        ticks: u32,
    }

    impl Animate for Counter {
        type Input = ();
        type Output = (u32, u32);

        fn apply(&mut self, (): ()) {
            self.applied += 1;
        }

        fn tick(&mut self, _elapsed_seconds: f64) {
            self.ticks += 1;
        }

        fn is_settled(&self) -> bool {
            false
        }

        fn output(&self) -> (u32, u32) {
            (self.applied, self.ticks)
        }
    }

    #[tokio::test]
    async fn frames_keep_ticking_under_fast_input() {
        let (input_sender, input_stream) = futures::channel::mpsc::unbounded::<()>();
        tokio::spawn(async move {
            for _ in 0..60 {
                if input_sender.unbounded_send(()).is_err() {
                    break;
                }
                tokio::time::sleep(tokio::time::Duration::from_millis(4)).await;
            }
        });

        let started = std::time::Instant::now();
        let state = Mutable::new((0, 0));
        drive(
            Counter::default(),
            input_stream,
            || tokio::time::sleep(tokio::time::Duration::from_millis(FRAME_MS as u64)),
            || started.elapsed().as_secs_f64(),
            &state,
        )
        .await;

        let (applied, ticks) = state.get_cloned();
        assert_eq!(applied, 60);
        // ~240 ms of input at 16 ms frames
        assert!(ticks >= 5, "only {ticks} ticks while inputs kept arriving");
    }
}
