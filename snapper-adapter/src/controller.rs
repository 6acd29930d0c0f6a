use snapper::{Measurement, ScrollDirection, SnapStops};

use crate::{CarouselOptions, Debounce};

/// A framework-neutral carousel controller.
///
/// Owns the derived stop list, the active (current) stop index and the scroll-settle debounce.
/// It does not hold any UI objects. Adapters drive it by calling:
/// - `rebuild` with a fresh measurement on load/resize
/// - `on_scroll` for every scroll event and `tick(now_ms)` from a timer/frame callback
/// - `sync_active` once `tick` reports that scrolling settled
/// - `advance` / `go_to` for prev/next buttons and indicator clicks
///
/// The returned offsets are meant to be handed to the real scroll container.
#[derive(Clone, Debug)]
pub struct Controller {
    options: CarouselOptions,
    stops: SnapStops,
    active: usize,
    settle: Debounce,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            stops: SnapStops::default(),
            active: 0,
            settle: Debounce::new(options.settle_delay_ms),
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        self.settle.set_delay_ms(options.settle_delay_ms);
        self.options = options;
    }

    pub fn stops(&self) -> &SnapStops {
        &self.stops
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Recomputes the stop list from a fresh measurement.
    ///
    /// The active index is clamped into the new list. Returns `true` when the number of stops
    /// changed (indicators must be re-rendered).
    pub fn rebuild(&mut self, measurement: &Measurement) -> bool {
        let prev_len = self.stops.len();
        self.stops = SnapStops::compute(measurement, &self.options.snap);
        self.active = self.stops.clamp_index(self.active);
        let changed = self.stops.len() != prev_len;
        atrace!(
            stops = self.stops.len(),
            changed,
            active = self.active,
            "Controller::rebuild"
        );
        changed
    }

    /// Call this for every scroll event. Restarts the settle timer.
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.settle.schedule(now_ms);
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_pending()
    }

    /// Advances the settle timer. Returns `true` exactly once per quiet period.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let fired = self.settle.poll(now_ms);
        if fired {
            atrace!(now_ms, "Controller::tick: scroll settled");
        }
        fired
    }

    /// Recomputes the active index for `offset`.
    ///
    /// Returns the new index when it changed.
    pub fn sync_active(&mut self, offset: f64) -> Option<usize> {
        let next = self.stops.nearest(offset);
        if next == self.active {
            return None;
        }
        self.active = next;
        Some(next)
    }

    /// Rebuilds the stops (layout may have changed) and returns the offset of the stop adjacent
    /// to the one nearest `offset`.
    ///
    /// Returns `None` when already at the first/last stop in that direction.
    pub fn advance(
        &mut self,
        direction: ScrollDirection,
        measurement: &Measurement,
        offset: f64,
    ) -> Option<f64> {
        self.rebuild(measurement);
        let target = self.stops.step_from(offset, direction)?;
        let to = self.stops.offset_of(target);
        adebug!(?direction, from = offset, target, to, "Controller::advance");
        Some(to)
    }

    /// Returns the offset of stop `index`, clamped into the stop list.
    pub fn go_to(&self, index: usize) -> f64 {
        self.stops.offset_of(index)
    }
}
