// Viewport-width policy for the pointer spotlight. No browser types here.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotlightMode {
    /// Pointer listener attached, element shown.
    Enabled,
    /// Pointer listener detached, element hidden.
    Disabled,
}

impl SpotlightMode {
    #[inline]
    pub fn for_width(viewport_width: f64, min_width: f64) -> Self {
        // NaN compares false and lands on Disabled
        if viewport_width > min_width {
            SpotlightMode::Enabled
        } else {
            SpotlightMode::Disabled
        }
    }

    #[inline]
    pub fn listens(self) -> bool {
        matches!(self, SpotlightMode::Enabled)
    }
}

/// Tracks the last applied mode so repeated evaluations at the same width
/// do not touch the DOM. Before the first commit every width yields a mode.
#[derive(Clone, Debug)]
pub struct SpotlightGate {
    min_width: f64,
    mode: Option<SpotlightMode>,
}

impl SpotlightGate {
    pub fn new(min_width: f64) -> Self {
        Self {
            min_width,
            mode: None,
        }
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn mode(&self) -> Option<SpotlightMode> {
        self.mode
    }

    /// Mode to apply at `viewport_width`, or `None` when it matches the
    /// committed one. Nothing is recorded until [`SpotlightGate::commit`].
    pub fn next_mode(&self, viewport_width: f64) -> Option<SpotlightMode> {
        let next = SpotlightMode::for_width(viewport_width, self.min_width);
        (self.mode != Some(next)).then_some(next)
    }

    /// Record `mode` as applied.
    pub fn commit(&mut self, mode: SpotlightMode) {
        self.mode = Some(mode);
    }
}

/// Format a client coordinate as a CSS pixel length.
#[inline]
pub fn px(value: i32) -> String {
    format!("{}px", value)
}
