//! Web platform implementation on top of `web_sys`.

use shared::interaction::lifecycle::ViewportHandler;
use shared::interaction::{ListenerError, ListenerKind, PointerPosition, ScrollMetrics, ViewportEvent, ViewportHost};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// The browser window as the source of scroll and pointer events.
pub struct WindowHost {
    window: web_sys::Window,
}

/// A registered window listener. The closure must stay alive until removal.
pub struct WindowListener {
    kind: ListenerKind,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowHost {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ViewportHost for WindowHost {
    type ListenerId = WindowListener;

    fn attach(&mut self, kind: ListenerKind, handler: ViewportHandler) -> Result<WindowListener, ListenerError> {
        let window = self.window.clone();
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| match kind {
            ListenerKind::Scroll => handler(ViewportEvent::Scrolled(read_scroll_metrics(&window))),
            ListenerKind::PointerMove => {
                if let Some(mouse_event) = event.dyn_ref::<web_sys::MouseEvent>() {
                    handler(ViewportEvent::PointerMoved(PointerPosition::new(
                        mouse_event.client_x() as f64,
                        mouse_event.client_y() as f64,
                    )));
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        self.window
            .add_event_listener_with_callback(kind.event_name(), callback.as_ref().unchecked_ref())
            .map_err(|error| ListenerError::Attach {
                kind,
                reason: format!("{error:?}"),
            })?;

        Ok(WindowListener { kind, callback })
    }

    fn detach(&mut self, listener: WindowListener) {
        if let Err(error) = self
            .window
            .remove_event_listener_with_callback(listener.kind.event_name(), listener.callback.as_ref().unchecked_ref())
        {
            zoon::eprintln!("Failed to detach {} listener: {:?}", listener.kind, error);
        }
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        read_scroll_metrics(&self.window)
    }
}

fn read_scroll_metrics(window: &web_sys::Window) -> ScrollMetrics {
    let scroll_y = window.scroll_y().unwrap_or_default();
    let (scroll_height, client_height) = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
        .unwrap_or_default();
    ScrollMetrics::new(scroll_y, scroll_height, client_height)
}

/// Monotonic time in seconds, for frame deltas.
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or_else(|| js_sys::Date::now() / 1000.0)
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Percent-decoded value of `key` in the current page's query string.
pub fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(key)
}
