use crate::core::TimerHost;
use web_sys as web;

/// [`TimerHost`] backed by `window.setTimeout`.
///
/// The callback is bound after construction because it usually needs a handle
/// to the debouncer that owns this timer.
pub struct WindowTimer {
    window: web::Window,
    callback: Option<js_sys::Function>,
}

impl WindowTimer {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    pub fn bind(&mut self, callback: js_sys::Function) {
        self.callback = Some(callback);
    }
}

impl TimerHost for WindowTimer {
    type Handle = i32;

    fn schedule(&mut self, delay_ms: u32) -> Option<i32> {
        let callback = self.callback.as_ref()?;
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay)
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("[timer] setTimeout failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
