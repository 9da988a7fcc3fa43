//! `setTimeout`-backed scheduler

use std::time::Duration;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::ui::{Scheduler, TaskHandle};

pub struct WebScheduler {
    window: Window,
}

impl WebScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        // Browser timeout ids start at 1; 0 marks a timer that never started
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis,
            )
            .unwrap_or_else(|e| {
                warn!(error = ?e, "[nui] setTimeout failed");
                0
            });

        TaskHandle {
            id: id as u64,
            delay,
        }
    }

    fn cancel(&self, handle: TaskHandle) -> bool {
        if handle.id == 0 {
            return false;
        }
        self.window.clear_timeout_with_handle(handle.id as i32);
        true
    }
}
