use crate::constants::TRIGGER_INTERVAL_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Posts an empty message back to the page at a fixed interval.
fn trigger_script() -> String {
    format!("setInterval(function () {{ postMessage(null); }}, {});", TRIGGER_INTERVAL_MS)
}

/// Whether the host exposes `Worker` in its global scope.
pub fn workers_supported() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Worker")).unwrap_or(false)
}

/// Start the trigger worker and call `on_trigger` for every message it posts.
/// The worker and its handler live for the rest of the page.
pub fn spawn_trigger_worker(mut on_trigger: impl FnMut() + 'static) -> anyhow::Result<web::Worker> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&trigger_script()));
    let opts = web::BlobPropertyBag::new();
    opts.set_type("application/javascript");
    let blob = web::Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|e| anyhow::anyhow!("worker blob: {:?}", e))?;
    let url = web::Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow::anyhow!("worker url: {:?}", e))?;
    let worker = web::Worker::new(&url).map_err(|e| anyhow::anyhow!("worker: {:?}", e))?;

    let onmessage = Closure::wrap(Box::new(move |_ev: web::MessageEvent| {
        on_trigger();
    }) as Box<dyn FnMut(web::MessageEvent)>);
    worker.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();
    Ok(worker)
}
