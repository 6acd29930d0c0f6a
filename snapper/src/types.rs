use alloc::vec::Vec;

/// Direction of a navigation step through the stop list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    /// Moves `index` one step in this direction, clamped to `[0, last]`.
    pub fn step(self, index: usize, last: usize) -> usize {
        match self {
            Self::Forward => index.saturating_add(1).min(last),
            Self::Backward => index.saturating_sub(1).min(last),
        }
    }
}

/// Snapping granularity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapMode {
    /// One stop per child card (narrow viewports that show about one card).
    PerCard,
    /// One stop per visible-width increment (wide viewports that show several cards).
    #[default]
    PerPage,
}

/// Scroll container geometry in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Width of the visible part of the container (DOM `clientWidth`).
    pub visible_width: f64,
    /// Width of the scrollable content (DOM `scrollWidth`).
    pub content_width: f64,
}

impl Viewport {
    pub fn new(visible_width: f64, content_width: f64) -> Self {
        Self {
            visible_width,
            content_width,
        }
    }

    /// The largest reachable scroll offset, `max(0, content - visible)`.
    ///
    /// Non-finite geometry yields `0`.
    pub fn max_scroll(&self) -> f64 {
        let max = self.content_width - self.visible_width;
        if max.is_finite() && max > 0.0 { max } else { 0.0 }
    }

    /// Whether the container has a usable (positive, finite) visible width.
    pub fn is_laid_out(&self) -> bool {
        self.visible_width.is_finite() && self.visible_width > 0.0
    }
}

/// Position and width of one child card, in container scroll coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardRect {
    /// Left offset of the card within the scrolled content (DOM `offsetLeft`).
    pub left: f64,
    pub width: f64,
}

impl CardRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// One layout sample of a carousel: container geometry plus its cards.
///
/// Measurements are read fresh from the UI before every recomputation; they are never cached
/// across layout changes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub viewport: Viewport,
    pub cards: Vec<CardRect>,
}

impl Measurement {
    pub fn new(visible_width: f64, content_width: f64) -> Self {
        Self {
            viewport: Viewport::new(visible_width, content_width),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardRect>) -> Self {
        self.cards = cards.into_iter().collect();
        self
    }

    pub fn max_scroll(&self) -> f64 {
        self.viewport.max_scroll()
    }

    /// Width of a single card: the first card with a positive, finite width.
    pub fn card_width(&self) -> Option<f64> {
        self.cards
            .iter()
            .map(|c| c.width)
            .find(|w| w.is_finite() && *w > 0.0)
    }
}
