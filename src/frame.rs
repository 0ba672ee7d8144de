use crate::canvas::CanvasSurface;
use crate::constants::RATE_REPORT_INTERVAL_SEC;
use crate::worker;
use dotfield_core::Field;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

pub struct FrameContext {
    pub field: Field<CanvasSurface>,
    pub ticks_since_report: u32,
    pub last_report: Instant,
}

impl FrameContext {
    pub fn new(field: Field<CanvasSurface>) -> Self {
        Self {
            field,
            ticks_since_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let report = self.field.tick();
        self.ticks_since_report += 1;

        let elapsed = self.last_report.elapsed().as_secs_f64();
        if elapsed >= RATE_REPORT_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.0} ticks/s, {} connectors in last frame",
                self.ticks_since_report as f64 / elapsed,
                report.connectors
            );
            self.ticks_since_report = 0;
            self.last_report = Instant::now();
        }
    }
}

/// Drive `frame_ctx` from the background trigger worker. Without worker
/// support the effect stays static.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    if !worker::workers_supported() {
        log::warn!("[frame] Worker unavailable; animation not started");
        return;
    }
    let frame_ctx_tick = frame_ctx.clone();
    match worker::spawn_trigger_worker(move || {
        // Messages are dispatched one at a time, so this borrow never overlaps.
        frame_ctx_tick.borrow_mut().frame();
    }) {
        Ok(w) => {
            log::info!("[frame] trigger worker started");
            // Keep the worker handle alive for the page lifetime.
            std::mem::forget(w);
        }
        Err(e) => log::error!("[frame] trigger worker failed: {:?}", e),
    }
}
