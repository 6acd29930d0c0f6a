use crate::{Measurement, SnapMode};

/// Viewport-to-card width ratio below which the calculator snaps per card.
pub const DEFAULT_PER_CARD_RATIO: f64 = 1.35;
/// Dedupe tolerance in per-card mode, in pixels.
pub const DEFAULT_CARD_TOLERANCE: f64 = 8.0;
/// Dedupe tolerance in per-page mode, in pixels.
pub const DEFAULT_PAGE_TOLERANCE: f64 = 10.0;

/// Configuration for [`crate::SnapStops::compute`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapOptions {
    /// When `visible_width / card_width` is below this ratio, stops follow cards.
    pub per_card_ratio: f64,
    /// Two per-card stops closer than (or exactly at) this distance collapse into one.
    pub card_tolerance: f64,
    /// Two per-page stops closer than (or exactly at) this distance collapse into one.
    pub page_tolerance: f64,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            per_card_ratio: DEFAULT_PER_CARD_RATIO,
            card_tolerance: DEFAULT_CARD_TOLERANCE,
            page_tolerance: DEFAULT_PAGE_TOLERANCE,
        }
    }
}

impl SnapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_per_card_ratio(mut self, ratio: f64) -> Self {
        self.per_card_ratio = ratio;
        self
    }

    pub fn with_card_tolerance(mut self, tolerance: f64) -> Self {
        self.card_tolerance = tolerance;
        self
    }

    pub fn with_page_tolerance(mut self, tolerance: f64) -> Self {
        self.page_tolerance = tolerance;
        self
    }

    /// Picks the snapping mode for a measurement.
    ///
    /// Without a measurable card the calculator always pages.
    pub fn mode_for(&self, measurement: &Measurement) -> SnapMode {
        let Some(card_width) = measurement.card_width() else {
            return SnapMode::PerPage;
        };
        let ratio = measurement.viewport.visible_width / card_width;
        if ratio < self.per_card_ratio {
            SnapMode::PerCard
        } else {
            SnapMode::PerPage
        }
    }

    pub fn tolerance_for(&self, mode: SnapMode) -> f64 {
        match mode {
            SnapMode::PerCard => self.card_tolerance,
            SnapMode::PerPage => self.page_tolerance,
        }
    }
}
