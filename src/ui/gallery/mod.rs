// SPDX-License-Identifier: MPL-2.0
//! Gallery view: the image grid with refresh, click-to-copy and thumbnails.
//!
//! The collection is kept in arrival order and sorted only when rendered
//! (see [`display_order`]). Async results carry a generation number so a
//! completion that was overtaken by a newer request is dropped.

mod thumbnails;
mod view;

pub use thumbnails::{visible_range, Thumbnail, ThumbnailCache, ViewportMetrics};
pub use view::{view, ViewContext};

use crate::api::{ApiError, ImageApiClient};
use crate::app::config::{GalleryConfig, COPY_FEEDBACK_DURATION};
use crate::clipboard::ClipboardSink;
use iced::widget::image;
use iced::{Size, Task};

/// i18n key of the banner shown after a failed refresh.
pub const REFRESH_ERROR_KEY: &str = "gallery-error";

#[derive(Debug, Clone)]
pub enum Message {
    RefreshRequested,
    RefreshCompleted {
        request: u64,
        result: Result<Vec<String>, ApiError>,
    },
    CardClicked(String),
    CopyFeedbackExpired(u64),
    ThumbnailLoaded {
        url: String,
        result: Result<image::Handle, ApiError>,
    },
    Scrolled(ViewportMetrics),
    GridResized(Size),
}

/// Which URL was copied last, and by which copy action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFeedback {
    pub url: String,
    pub generation: u64,
}

#[derive(Debug)]
pub struct State {
    images: Vec<String>,
    loading: bool,
    error: Option<&'static str>,
    copied: Option<CopiedFeedback>,
    copy_generation: u64,
    refresh_generation: u64,
    keep_content_while_refreshing: bool,
    thumbnails: ThumbnailCache,
    viewport: Option<ViewportMetrics>,
}

/// URLs in the order the grid shows them: descending lexical order.
///
/// Duplicates are kept and render as separate cards.
#[must_use]
pub fn display_order(images: &[String]) -> Vec<&str> {
    let mut ordered: Vec<&str> = images.iter().map(String::as_str).collect();
    ordered.sort_unstable();
    ordered.reverse();
    ordered
}

impl State {
    #[must_use]
    pub fn new(initial_images: Vec<String>, config: &GalleryConfig) -> Self {
        Self {
            images: initial_images,
            loading: false,
            error: None,
            copied: None,
            copy_generation: 0,
            refresh_generation: 0,
            keep_content_while_refreshing: config.keep_content_while_refreshing,
            thumbnails: ThumbnailCache::new(config.thumbnail_capacity()),
            viewport: None,
        }
    }

    /// Images in arrival order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn display_order(&self) -> Vec<&str> {
        display_order(&self.images)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error
    }

    #[must_use]
    pub fn copied_url(&self) -> Option<&str> {
        self.copied.as_ref().map(|feedback| feedback.url.as_str())
    }

    #[must_use]
    pub fn thumbnail(&self, url: &str) -> Option<&Thumbnail> {
        self.thumbnails.peek(url)
    }

    /// Whether the grid stays on screen while a refresh runs.
    #[must_use]
    pub fn shows_content_while_loading(&self) -> bool {
        self.keep_content_while_refreshing
    }

    /// Adds a freshly uploaded URL without refetching the listing.
    pub fn append(&mut self, url: String) {
        self.images.push(url);
    }

    pub fn update(
        &mut self,
        message: Message,
        api: &ImageApiClient,
        clipboard: &mut dyn ClipboardSink,
    ) -> Task<Message> {
        match message {
            Message::RefreshRequested => self.refresh(api),
            Message::RefreshCompleted { request, result } => {
                self.finish_refresh(request, result);
                self.sync_thumbnails(api)
            }
            Message::CardClicked(url) => self.copy(url, clipboard),
            Message::CopyFeedbackExpired(generation) => {
                if self
                    .copied
                    .as_ref()
                    .is_some_and(|feedback| feedback.generation == generation)
                {
                    self.copied = None;
                }
                Task::none()
            }
            Message::ThumbnailLoaded { url, result } => {
                if let Err(err) = &result {
                    tracing::error!(%url, error = %err, "failed to load thumbnail");
                }
                self.thumbnails.complete(&url, result.ok());
                Task::none()
            }
            Message::Scrolled(metrics) => {
                self.viewport = Some(metrics);
                self.sync_thumbnails(api)
            }
            Message::GridResized(size) => {
                self.viewport = Some(ViewportMetrics::resized(self.viewport, size));
                self.sync_thumbnails(api)
            }
        }
    }

    /// Replaces the whole collection with a fresh listing.
    pub fn refresh(&mut self, api: &ImageApiClient) -> Task<Message> {
        self.loading = true;
        self.refresh_generation += 1;
        let request = self.refresh_generation;

        let api = api.clone();
        Task::perform(async move { api.list_images().await }, move |result| {
            Message::RefreshCompleted { request, result }
        })
    }

    fn finish_refresh(&mut self, request: u64, result: Result<Vec<String>, ApiError>) {
        if request != self.refresh_generation {
            tracing::debug!(request, latest = self.refresh_generation, "dropping stale listing");
            return;
        }

        self.loading = false;
        match result {
            Ok(urls) => {
                tracing::info!(count = urls.len(), "gallery refreshed");
                self.images = urls;
                self.error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching images");
                self.error = Some(REFRESH_ERROR_KEY);
            }
        }
    }

    fn copy(&mut self, url: String, clipboard: &mut dyn ClipboardSink) -> Task<Message> {
        if let Err(err) = clipboard.write_text(&url) {
            tracing::error!(%url, error = %err, "failed to copy URL");
            return Task::none();
        }

        self.copy_generation += 1;
        let generation = self.copy_generation;
        self.copied = Some(CopiedFeedback { url, generation });

        Task::perform(
            async { tokio::time::sleep(COPY_FEEDBACK_DURATION).await },
            move |()| Message::CopyFeedbackExpired(generation),
        )
    }

    /// Requests every thumbnail in (or just below) the viewport that is not
    /// cached yet.
    pub fn sync_thumbnails(&mut self, api: &ImageApiClient) -> Task<Message> {
        let ordered: Vec<String> = self
            .display_order()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let range = visible_range(ordered.len(), self.viewport, self.thumbnails.capacity());

        let tasks: Vec<Task<Message>> = ordered[range]
            .iter()
            .filter(|url| self.thumbnails.begin(url))
            .map(|url| fetch_thumbnail(api, url.clone()))
            .collect();

        Task::batch(tasks)
    }
}

fn fetch_thumbnail(api: &ImageApiClient, url: String) -> Task<Message> {
    let api = api.clone();
    let request_url = url.clone();
    Task::perform(
        async move {
            api.fetch_image(request_url)
                .await
                .map(image::Handle::from_bytes)
        },
        move |result| Message::ThumbnailLoaded { url, result },
    )
}
