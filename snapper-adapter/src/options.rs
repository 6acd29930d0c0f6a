use snapper::SnapOptions;

/// Quiet period after the last scroll event before the active indicator is resampled.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 180;

/// Configuration for [`crate::Controller`] and [`crate::Carousel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    pub snap: SnapOptions,
    /// Debounce delay for "scroll settled", so momentum and native snapping can finish first.
    pub settle_delay_ms: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            snap: SnapOptions::default(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snap(mut self, snap: SnapOptions) -> Self {
        self.snap = snap;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }
}
