/// Something that can schedule and cancel one-shot timers.
///
/// The browser implementation wraps `setTimeout`/`clearTimeout`; tests drive a
/// simulated clock.
pub trait TimerHost {
    type Handle: Copy;

    /// Schedule the host's callback after `delay_ms`. `None` if scheduling failed.
    fn schedule(&mut self, delay_ms: u32) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Single-slot debounce timer.
///
/// Owns at most one pending timer. Triggering cancels the held timer before
/// scheduling the next, so a burst of triggers closer than the delay fires
/// once after the burst goes quiet.
pub struct Debouncer<H: TimerHost> {
    host: H,
    delay_ms: u32,
    pending: Option<H::Handle>,
}

impl<H: TimerHost> Debouncer<H> {
    pub fn new(host: H, delay_ms: u32) -> Self {
        Self {
            host,
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace any pending timer with a fresh one. Returns whether a timer is now pending.
    pub fn trigger(&mut self) -> bool {
        self.cancel();
        self.pending = self.host.schedule(self.delay_ms);
        self.pending.is_some()
    }

    /// Release the slot once the timer has fired. Returns whether a timer was held.
    pub fn settle(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel(handle);
        }
    }
}
