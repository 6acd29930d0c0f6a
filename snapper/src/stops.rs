use alloc::vec::Vec;

use crate::{Measurement, ScrollDirection, SnapMode, SnapOptions, Viewport};

/// Upper bound on generated stops.
///
/// A visible width that is tiny compared to the content width would otherwise produce an
/// unbounded page list.
pub const MAX_STOPS: usize = 4096;

/// An ordered list of scroll offsets a carousel should rest at.
///
/// Guarantees:
/// - never empty; the first stop is always `0`
/// - non-decreasing, and adjacent stops differ by more than the mode's dedupe tolerance, except
///   for a per-page `[0, max]` pair where `max` is itself within tolerance of `0`
/// - in per-page mode the last stop is exactly the container's max scroll offset
///
/// Stops are pure derived state: rebuild them from a fresh [`Measurement`] whenever the layout
/// may have changed (load, resize, before programmatic navigation).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapStops {
    stops: Vec<f64>,
    mode: SnapMode,
}

impl Default for SnapStops {
    fn default() -> Self {
        Self::single(SnapMode::PerPage)
    }
}

impl SnapStops {
    /// The degenerate stop list `[0]`.
    pub fn single(mode: SnapMode) -> Self {
        Self {
            stops: alloc::vec![0.0],
            mode,
        }
    }

    /// Computes stops for a layout sample, choosing the mode from `options`.
    pub fn compute(measurement: &Measurement, options: &SnapOptions) -> Self {
        let mode = options.mode_for(measurement);
        let tolerance = options.tolerance_for(mode);
        let out = match mode {
            SnapMode::PerPage => Self::per_page(measurement.viewport, tolerance),
            SnapMode::PerCard => Self::per_card(
                measurement.viewport,
                measurement.cards.iter().map(|c| c.left),
                tolerance,
            ),
        };
        strace!(
            mode = ?out.mode,
            visible = measurement.viewport.visible_width,
            content = measurement.viewport.content_width,
            cards = measurement.cards.len(),
            stops = out.stops.len(),
            "SnapStops::compute"
        );
        out
    }

    /// One stop per visible-width increment, plus the max scroll offset as the final stop.
    ///
    /// At most [`MAX_STOPS`] stops are produced. Once the limit is reached no further
    /// visible-width steps are added and the list jumps straight to the max scroll offset, so the
    /// last gap can be wider than one page.
    pub fn per_page(viewport: Viewport, tolerance: f64) -> Self {
        let max = viewport.max_scroll();
        if max <= 0.0 || !viewport.is_laid_out() {
            return Self::single(SnapMode::PerPage);
        }

        let page = viewport.visible_width;
        let mut raw = alloc::vec![0.0];
        let mut next = page;
        while next < max {
            if raw.len() + 1 >= MAX_STOPS {
                swarn!(
                    page,
                    max,
                    limit = MAX_STOPS,
                    "SnapStops::per_page: stop limit reached"
                );
                break;
            }
            raw.push(next);
            next += page;
        }
        raw.push(max);

        Self {
            stops: dedupe(raw, tolerance, true),
            mode: SnapMode::PerPage,
        }
    }

    /// One stop per card left offset (clamped into `[0, max]` and sorted), plus `0` and the max
    /// scroll offset.
    ///
    /// Non-finite offsets are ignored.
    pub fn per_card(
        viewport: Viewport,
        offsets: impl IntoIterator<Item = f64>,
        tolerance: f64,
    ) -> Self {
        let max = viewport.max_scroll();
        if max <= 0.0 || !viewport.is_laid_out() {
            return Self::single(SnapMode::PerCard);
        }

        let mut cards: Vec<f64> = offsets
            .into_iter()
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, max))
            .collect();
        cards.sort_by(f64::total_cmp);
        cards.truncate(MAX_STOPS.saturating_sub(2));

        let mut raw = Vec::with_capacity(cards.len() + 2);
        raw.push(0.0);
        raw.extend(cards);
        raw.push(max);

        Self {
            stops: dedupe(raw, tolerance, false),
            mode: SnapMode::PerCard,
        }
    }

    pub fn mode(&self) -> SnapMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Never `true`: a stop list holds at least `[0]`.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.stops
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.stops.get(index).copied()
    }

    pub fn last_index(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn last(&self) -> f64 {
        self.stops.last().copied().unwrap_or(0.0)
    }

    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// The offset of stop `index`, clamped to the last stop.
    pub fn offset_of(&self, index: usize) -> f64 {
        self.get(self.clamp_index(index)).unwrap_or(0.0)
    }

    /// Index of the stop closest to `offset`.
    ///
    /// Ties resolve to the lowest index. A NaN offset resolves to `0`.
    pub fn nearest(&self, offset: f64) -> usize {
        let mut best_index = 0usize;
        let mut best_dist = f64::INFINITY;
        for (i, stop) in self.iter().enumerate() {
            let dist = distance(offset, stop);
            if dist < best_dist {
                best_dist = dist;
                best_index = i;
            }
        }
        best_index
    }

    /// The stop index one step away from the stop nearest to `offset`.
    ///
    /// Returns `None` when the step is clamped away (forward from the last stop, backward from
    /// the first stop).
    pub fn step_from(&self, offset: f64, direction: ScrollDirection) -> Option<usize> {
        let current = self.nearest(offset);
        let target = direction.step(current, self.last_index());
        (target != current).then_some(target)
    }
}

fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}

/// Collapses consecutive stops that are within `tolerance` of the last kept stop.
///
/// The first stop of a cluster wins. With `keep_end`, the final raw stop always survives: it
/// replaces its near-duplicate predecessor, or is appended after a leading `0` it collapsed into.
fn dedupe(raw: Vec<f64>, tolerance: f64, keep_end: bool) -> Vec<f64> {
    let tolerance = if tolerance.is_finite() {
        tolerance.max(0.0)
    } else {
        0.0
    };
    let end = raw.last().copied();

    let mut out: Vec<f64> = Vec::with_capacity(raw.len());
    for v in raw {
        match out.last() {
            Some(&prev) if v - prev <= tolerance => {}
            _ => out.push(v),
        }
    }

    if keep_end {
        if let Some(end) = end {
            if out.len() > 1 {
                if let Some(last) = out.last_mut() {
                    *last = end;
                }
            } else if out.last().is_some_and(|&first| end > first) {
                out.push(end);
            }
        }
    }
    out
}
