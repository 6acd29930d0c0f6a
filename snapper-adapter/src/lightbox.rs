use alloc::string::String;
use alloc::vec::Vec;

use crate::MountError;

/// One gallery thumbnail and the full-size image it opens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryItem {
    pub full_src: String,
    /// Alt text; also used as the caption.
    pub alt: String,
}

impl GalleryItem {
    pub fn new(full_src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            full_src: full_src.into(),
            alt: alt.into(),
        }
    }
}

/// Keys the lightbox reacts to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// What a key press did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome<F> {
    Ignored,
    Moved(usize),
    /// The lightbox closed; carries the element that had focus before it opened.
    Closed(Option<F>),
}

/// Render state of an open lightbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightboxView<'a> {
    pub index: usize,
    pub src: &'a str,
    pub alt: &'a str,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl LightboxView<'_> {
    pub fn caption(&self) -> &str {
        self.alt
    }
}

/// A headless, index-based image lightbox over a fixed list of gallery items.
///
/// `F` is the platform's handle for a focusable element. The lightbox remembers the handle that
/// had focus when it opened and gives it back on close. While open, the page body should not
/// scroll ([`Lightbox::body_scroll_locked`]) and focus belongs on the close control.
#[derive(Clone, Debug)]
pub struct Lightbox<F> {
    items: Vec<GalleryItem>,
    current: usize,
    open: bool,
    restore_focus: Option<F>,
}

impl<F> Lightbox<F> {
    /// Creates a lightbox, or `None` when there is nothing to show.
    pub fn new(items: impl IntoIterator<Item = GalleryItem>) -> Option<Self> {
        Self::mount(items).ok()
    }

    pub fn mount(items: impl IntoIterator<Item = GalleryItem>) -> Result<Self, MountError> {
        let items: Vec<GalleryItem> = items.into_iter().collect();
        if items.is_empty() {
            adebug!("lightbox not mounted: empty gallery");
            return Err(MountError::EmptyGallery);
        }
        Ok(Self {
            items,
            current: 0,
            open: false,
            restore_focus: None,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never `true` for a mounted lightbox.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Shows item `index`, remembering `focused` for [`Lightbox::close`].
    ///
    /// Returns `None` (and stays as it was) when `index` is out of range.
    pub fn open(&mut self, index: usize, focused: Option<F>) -> Option<LightboxView<'_>> {
        if index >= self.items.len() {
            return None;
        }
        atrace!(index, "Lightbox::open");
        self.current = index;
        self.restore_focus = focused;
        self.open = true;
        self.view()
    }

    /// Hides the lightbox and returns the element to refocus.
    ///
    /// The image source should be cleared by the platform layer. Returns `None` when the
    /// lightbox was not open.
    pub fn close(&mut self) -> Option<F> {
        if !self.open {
            return None;
        }
        atrace!(index = self.current, "Lightbox::close");
        self.open = false;
        self.restore_focus.take()
    }

    /// Moves to the previous item. Returns `false` at the first item or while closed.
    pub fn prev(&mut self) -> bool {
        if !self.open || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Moves to the next item. Returns `false` at the last item or while closed.
    pub fn next(&mut self) -> bool {
        if !self.open || self.current + 1 >= self.items.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Handles a key press. Keys are ignored while closed.
    pub fn on_key(&mut self, key: LightboxKey) -> KeyOutcome<F> {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        let moved = match key {
            LightboxKey::Escape => return KeyOutcome::Closed(self.close()),
            LightboxKey::ArrowLeft => self.prev(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Other => false,
        };
        if moved {
            KeyOutcome::Moved(self.current)
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Current render state, or `None` while closed.
    pub fn view(&self) -> Option<LightboxView<'_>> {
        if !self.open {
            return None;
        }
        let item = self.items.get(self.current)?;
        Some(LightboxView {
            index: self.current,
            src: &item.full_src,
            alt: &item.alt,
            prev_disabled: self.current == 0,
            next_disabled: self.current + 1 == self.items.len(),
        })
    }
}
