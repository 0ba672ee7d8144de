//! Background trigger source for hosts with threads.
//!
//! A [`Ticker`] owns a thread that sends `()` at a fixed rate. The consumer
//! keeps the field on its own thread and runs one tick per trigger, so the
//! field is never touched concurrently.

use crate::{Field, FieldError, Surface};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_TRIGGER_RATE_HZ: u32 = 500;

#[inline]
pub fn trigger_interval(rate_hz: u32) -> Duration {
    Duration::from_secs_f64(1.0 / rate_hz.max(1) as f64)
}

pub struct Ticker {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(rate_hz: u32) -> Result<(Self, Receiver<()>), FieldError> {
        if rate_hz == 0 {
            return Err(FieldError::ZeroRate);
        }
        let interval = trigger_interval(rate_hz);
        let (tx, rx) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let running_thread = running.clone();
        let handle = thread::Builder::new()
            .name("dotfield-ticker".into())
            .spawn(move || {
                while running_thread.load(Ordering::Relaxed) {
                    thread::sleep(interval);
                    // Receiver gone: nobody left to drive.
                    if tx.send(()).is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| FieldError::TickerSpawn(e.to_string()))?;
        log::debug!("[ticker] started at {} Hz", rate_hz);
        Ok((
            Self {
                running,
                handle: Some(handle),
            },
            rx,
        ))
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            if h.join().is_err() {
                log::error!("[ticker] trigger thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run one `tick` per received trigger until the channel closes or
/// `max_ticks` ticks have run. Returns the number of ticks run.
pub fn drive<S: Surface>(field: &mut Field<S>, triggers: &Receiver<()>, max_ticks: Option<usize>) -> usize {
    let mut ran = 0;
    while max_ticks.map_or(true, |m| ran < m) {
        if triggers.recv().is_err() {
            break;
        }
        field.tick();
        ran += 1;
    }
    ran
}
