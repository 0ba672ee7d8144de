use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Run `handler` once the document has been parsed: immediately when that has
/// already happened, otherwise on `DOMContentLoaded`.
pub fn on_dom_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        handler();
        return;
    }
    let closure = Closure::once(handler);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Size the canvas backing store to the viewport. Done once; resizing is not tracked.
pub fn size_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
