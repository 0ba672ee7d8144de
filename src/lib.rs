#![cfg(target_arch = "wasm32")]
use dotfield_core::{Field, FieldParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod worker;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("dotfield-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_dom_ready(&document, || {
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ELEMENT_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::size_canvas_to_viewport(&window, &canvas);
    let surface = canvas::CanvasSurface::new(&canvas, ctx);

    let field = Field::seed(surface, FieldParams::default(), &mut rand::thread_rng())?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(field)));
    frame::start_loop(frame_ctx);
    Ok(())
}
