//! A headless snap-stop engine for horizontally scrolling carousels.
//!
//! For adapter-level utilities (debounced settle handling, indicator state, prev/next wiring),
//! see the `snapper-adapter` crate.
//!
//! This crate turns one layout sample of a scroll container into an ordered list of scroll
//! offsets ("stops") the container should rest at, and answers "which stop is nearest to this
//! scroll offset". Narrow viewports snap per card, wide viewports snap per visible page.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the visible width and the scrollable content width of the container
//! - the left offset and width of each child card (optional)
//! - the current scroll offset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod stops;
mod types;


pub use options::{
    DEFAULT_CARD_TOLERANCE, DEFAULT_PAGE_TOLERANCE, DEFAULT_PER_CARD_RATIO, SnapOptions,
};
pub use stops::{MAX_STOPS, SnapStops};
pub use types::{CardRect, Measurement, ScrollDirection, SnapMode, Viewport};
