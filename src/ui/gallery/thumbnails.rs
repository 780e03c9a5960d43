// SPDX-License-Identifier: MPL-2.0
//! Decoded thumbnails keyed by URL, bounded by an LRU, and the arithmetic that
//! decides which cards are on screen.

use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{image, scrollable};
use iced::Size;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Height of the caption strip under each card image.
pub(super) const CARD_CAPTION_HEIGHT: f32 = 56.0;
/// Padding of the card button around its content.
pub(super) const CARD_PADDING: f32 = spacing::XS;
/// Gap between the card image and its caption.
pub(super) const CARD_SECTION_GAP: f32 = spacing::XS;
/// Outer height of a rendered card.
pub(super) const CARD_HEIGHT: f32 =
    2.0 * CARD_PADDING + sizing::CARD_IMAGE_HEIGHT + CARD_SECTION_GAP + CARD_CAPTION_HEIGHT;
/// Gap between cards, horizontally and vertically.
pub(super) const GRID_GAP: f32 = spacing::LG;

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Pending,
    Ready(image::Handle),
    Failed,
}

/// What the grid's scrollable currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<scrollable::Viewport> for ViewportMetrics {
    fn from(viewport: scrollable::Viewport) -> Self {
        let bounds = viewport.bounds();
        Self {
            offset_y: viewport.absolute_offset().y,
            width: bounds.width,
            height: bounds.height,
        }
    }
}

impl ViewportMetrics {
    /// Applies a new grid size, keeping the scroll position.
    #[must_use]
    pub fn resized(previous: Option<Self>, size: Size) -> Self {
        Self {
            offset_y: previous.map_or(0.0, |viewport| viewport.offset_y),
            width: size.width,
            height: size.height,
        }
    }
}

/// Indices (in display order) of the cards to keep thumbnails for: the
/// visible rows plus one row below.
///
/// Before the grid reports its viewport, the first `capacity` cards are used.
/// The range never spans more than `capacity` cards so a sync cannot evict
/// its own requests.
#[must_use]
pub fn visible_range(len: usize, viewport: Option<ViewportMetrics>, capacity: usize) -> Range<usize> {
    let Some(viewport) = viewport else {
        return 0..len.min(capacity);
    };

    let column_pitch = sizing::CARD_WIDTH + GRID_GAP;
    let row_pitch = CARD_HEIGHT + GRID_GAP;

    // Float-to-int casts saturate; negative offsets (overscroll) become zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (columns, first_row, last_row) = (
        (((viewport.width + GRID_GAP) / column_pitch).floor() as usize).max(1),
        (viewport.offset_y / row_pitch).floor() as usize,
        ((viewport.offset_y + viewport.height) / row_pitch).floor() as usize,
    );

    let start = (first_row * columns).min(len);
    let end = ((last_row + 2) * columns).min(len).min(start + capacity);
    start..end
}

pub struct ThumbnailCache {
    entries: LruCache<String, Thumbnail>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a thumbnail without touching the LRU order.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.peek(url)
    }

    /// Marks `url` as requested. Returns `false` when it is already cached or
    /// in flight, in which case it only becomes most recently used.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.entries.get(url).is_some() {
            return false;
        }
        self.entries.put(url.to_owned(), Thumbnail::Pending);
        true
    }

    /// Stores the outcome of a download. Results for URLs evicted in the
    /// meantime are dropped; they are requested again once visible.
    pub fn complete(&mut self, url: &str, handle: Option<image::Handle>) {
        match self.entries.peek_mut(url) {
            Some(entry) => {
                *entry = handle.map_or(Thumbnail::Failed, Thumbnail::Ready);
            }
            None => tracing::debug!(%url, "thumbnail evicted before it arrived"),
        }
    }
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
