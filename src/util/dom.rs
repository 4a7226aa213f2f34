//! Browser DOM helpers shared by the page controllers and effects.
//!
//! Listeners registered here live for the rest of the page, so their
//! closures are leaked with `forget`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::controller::theme::ClickTarget;

/// All elements matching `selector`, in document order.
///
/// An invalid selector logs a warning and matches nothing.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the page lifetime.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to add {event} listener: {e:?}");
        return;
    }
    cb.forget();
}

impl ClickTarget for web_sys::Element {
    fn on_click(&self, mut handler: Box<dyn FnMut()>) {
        listen(self, "click", move |_event| handler());
    }
}
