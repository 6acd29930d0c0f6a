use alloc::format;
use alloc::string::String;

use snapper::Measurement;

/// How a programmatic scroll should move the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Native smooth scrolling; fire-and-forget.
    #[default]
    Smooth,
    Instant,
}

/// The horizontally scrolling container.
///
/// Implemented by the platform layer (e.g. over a DOM element). Every call reads live layout;
/// implementations must not cache measurements.
pub trait ScrollTrack {
    /// Samples the container geometry and its cards.
    fn measure(&self) -> Measurement;

    /// Current horizontal scroll offset (DOM `scrollLeft`).
    fn scroll_offset(&self) -> f64;

    /// Requests a scroll to `offset`. The request is not awaited.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
}

/// One dot/indicator control.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub index: usize,
    /// Accessible label, e.g. `Go to slide 2`.
    pub label: String,
}

impl Indicator {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            label: format!("Go to slide {}", index + 1),
        }
    }
}

/// The container that renders one indicator per stop.
pub trait IndicatorStrip {
    /// Replaces all indicators. Activating indicator `i` should call
    /// [`crate::Carousel::on_indicator_activated`] with `i`.
    fn rebuild(&mut self, indicators: &[Indicator]);

    /// Marks `current` as the current indicator and every other one as not current.
    ///
    /// See [`aria_current`] for the attribute value of each indicator.
    fn mark_current(&mut self, current: usize);
}

/// Value of the `aria-current` attribute for indicator `index`.
pub fn aria_current(index: usize, current: usize) -> &'static str {
    if index == current { "true" } else { "false" }
}

/// Which optional navigation triggers exist in the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controls {
    pub prev: bool,
    pub next: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self::both()
    }
}

impl Controls {
    pub fn both() -> Self {
        Self {
            prev: true,
            next: true,
        }
    }

    pub fn none() -> Self {
        Self {
            prev: false,
            next: false,
        }
    }

    pub fn allows(&self, direction: snapper::ScrollDirection) -> bool {
        match direction {
            snapper::ScrollDirection::Backward => self.prev,
            snapper::ScrollDirection::Forward => self.next,
        }
    }
}
