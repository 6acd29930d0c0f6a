//! Adapter utilities for the `snapper` crate.
//!
//! The `snapper` crate is UI-agnostic and only computes stops. This crate provides small,
//! framework-neutral pieces a page needs around it:
//!
//! - A carousel [`Controller`] owning the stop list, the active indicator and a settle debounce
//! - A [`Carousel`] widget that binds a controller to a [`ScrollTrack`] and an [`IndicatorStrip`]
//! - A headless [`Lightbox`] navigator for image galleries
//!
//! No DOM bindings live here. A platform layer implements the two traits and forwards its
//! events (`load`, `resize`, `scroll`, timer ticks, clicks, key presses) as method calls.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod controller;
mod debounce;
mod error;
mod host;
mod lightbox;
mod options;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use controller::Controller;
pub use debounce::Debounce;
pub use error::MountError;
pub use host::{Controls, Indicator, IndicatorStrip, ScrollBehavior, ScrollTrack, aria_current};
pub use lightbox::{GalleryItem, KeyOutcome, Lightbox, LightboxKey, LightboxView};
pub use options::{CarouselOptions, DEFAULT_SETTLE_DELAY_MS};

pub use snapper::{
    CardRect, Measurement, ScrollDirection, SnapMode, SnapOptions, SnapStops, Viewport,
};
