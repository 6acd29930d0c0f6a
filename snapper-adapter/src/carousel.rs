use alloc::vec::Vec;

use snapper::{ScrollDirection, SnapStops};

use crate::{
    CarouselOptions, Controller, Controls, Indicator, IndicatorStrip, MountError, ScrollBehavior,
    ScrollTrack,
};

/// A carousel with paging dots and optional prev/next controls.
///
/// Binds a [`Controller`] to the platform's scroll container and indicator container. The
/// platform layer forwards its events:
///
/// | page event                      | call                          |
/// |---------------------------------|-------------------------------|
/// | load                            | [`Carousel::on_load`]         |
/// | resize                          | [`Carousel::on_resize`]       |
/// | scroll                          | [`Carousel::on_scroll`]       |
/// | timer / animation frame         | [`Carousel::tick`]            |
/// | prev / next click               | [`Carousel::on_navigate`]     |
/// | indicator click                 | [`Carousel::on_indicator_activated`] |
#[derive(Debug)]
pub struct Carousel<T, I> {
    track: T,
    indicators: I,
    controls: Controls,
    controller: Controller,
    rendered: usize,
}

impl<T: ScrollTrack, I: IndicatorStrip> Carousel<T, I> {
    /// Attaches to the markup and renders the initial indicators.
    ///
    /// Fails when the scroll track or the indicator container is missing.
    pub fn mount(
        track: Option<T>,
        indicators: Option<I>,
        controls: Controls,
        options: CarouselOptions,
    ) -> Result<Self, MountError> {
        let track = track.ok_or(MountError::MissingTrack)?;
        let indicators = indicators.ok_or(MountError::MissingIndicators)?;
        let mut carousel = Self {
            track,
            indicators,
            controls,
            controller: Controller::new(options),
            rendered: 0,
        };
        carousel.render();
        Ok(carousel)
    }

    /// Same as [`Carousel::mount`], but a missing part turns the whole widget into a no-op.
    pub fn try_mount(
        track: Option<T>,
        indicators: Option<I>,
        controls: Controls,
        options: CarouselOptions,
    ) -> Option<Self> {
        match Self::mount(track, indicators, controls, options) {
            Ok(carousel) => Some(carousel),
            Err(_err) => {
                adebug!(error = %_err, "carousel not mounted");
                None
            }
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn stops(&self) -> &SnapStops {
        self.controller.stops()
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    pub fn on_load(&mut self) {
        self.render();
    }

    pub fn on_resize(&mut self) {
        self.render();
    }

    /// Call this for every scroll event of the track.
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.controller.on_scroll(now_ms);
    }

    /// Drives the settle debounce. Returns `true` when the active indicator was resampled.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.controller.tick(now_ms) {
            return false;
        }
        self.on_scroll_settled();
        true
    }

    /// Resamples the scroll offset and marks the nearest indicator as current.
    ///
    /// Returns the new active index when it changed.
    pub fn on_scroll_settled(&mut self) -> Option<usize> {
        let offset = self.track.scroll_offset();
        let changed = self.controller.sync_active(offset)?;
        self.indicators.mark_current(changed);
        Some(changed)
    }

    /// Smooth-scrolls to the stop adjacent to the current one.
    ///
    /// Returns the requested offset, or `None` when the matching control does not exist or the
    /// carousel is already at that end.
    pub fn on_navigate(&mut self, direction: ScrollDirection) -> Option<f64> {
        if !self.controls.allows(direction) {
            return None;
        }
        let measurement = self.track.measure();
        let offset = self.track.scroll_offset();
        let target = self.controller.advance(direction, &measurement, offset);
        if self.controller.stops().len() != self.rendered {
            self.render_indicators();
        }
        let to = target?;
        self.track.scroll_to(to, ScrollBehavior::Smooth);
        Some(to)
    }

    /// Smooth-scrolls to stop `index` (clamped against freshly measured stops). Returns the
    /// requested offset.
    pub fn on_indicator_activated(&mut self, index: usize) -> f64 {
        let measurement = self.track.measure();
        self.controller.rebuild(&measurement);
        if self.controller.stops().len() != self.rendered {
            self.render_indicators();
        }
        let to = self.controller.go_to(index);
        self.track.scroll_to(to, ScrollBehavior::Smooth);
        to
    }

    fn render(&mut self) {
        let measurement = self.track.measure();
        self.controller.rebuild(&measurement);
        self.render_indicators();
    }

    fn render_indicators(&mut self) {
        let indicators: Vec<Indicator> = (0..self.controller.stops().len())
            .map(Indicator::new)
            .collect();
        self.indicators.rebuild(&indicators);
        self.rendered = indicators.len();

        let offset = self.track.scroll_offset();
        self.controller.sync_active(offset);
        self.indicators.mark_current(self.controller.active_index());
    }
}
