// SPDX-License-Identifier: MPL-2.0
//! Upload widget: accepts one image through the file picker or a window drop
//! and posts it to the image service.
//!
//! The widget owns no gallery data. A successful upload is reported to the
//! owner as [`Effect::Uploaded`] and the owner decides where the URL goes.

mod view;

pub use view::{view, ViewContext};

use crate::api::{ApiError, ImageApiClient};
use crate::i18n::fluent::I18n;
use iced::Task;
use std::path::PathBuf;

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "tif", "tiff", "ico", "avif", "heic",
];

/// i18n key of the message shown after any failed upload.
pub const UPLOAD_ERROR_KEY: &str = "upload-error";

/// Upload lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
    /// Last attempt failed; holds the i18n key of the message to show.
    Failed(&'static str),
}

#[derive(Debug, Clone)]
pub enum Message {
    BrowseRequested,
    FilePicked(Option<PathBuf>),
    DragEntered,
    DragLeft,
    FileDropped(PathBuf),
    UploadCompleted(Result<String, ApiError>),
}

/// Outcome the owner has to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The service stored a new image under this URL.
    Uploaded(String),
}

#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
    drag_active: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.phase == Phase::Uploading
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// i18n key of the current error, if the last upload failed.
    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Failed(key) => Some(key),
            Phase::Idle | Phase::Uploading => None,
        }
    }

    pub fn update(
        &mut self,
        message: Message,
        api: &ImageApiClient,
        i18n: &I18n,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::BrowseRequested => {
                if self.is_uploading() {
                    tracing::debug!("browse ignored while an upload is running");
                    return (Effect::None, Task::none());
                }
                let title = i18n.tr("upload-dialog-title");
                let filter = i18n.tr("upload-dialog-filter");
                (
                    Effect::None,
                    Task::perform(pick_image(title, filter), Message::FilePicked),
                )
            }
            Message::FilePicked(Some(path)) => (Effect::None, self.start_upload(path, api)),
            Message::FilePicked(None) => (Effect::None, Task::none()),
            Message::DragEntered => {
                self.drag_active = true;
                (Effect::None, Task::none())
            }
            Message::DragLeft => {
                self.drag_active = false;
                (Effect::None, Task::none())
            }
            Message::FileDropped(path) => {
                self.drag_active = false;
                (Effect::None, self.start_upload(path, api))
            }
            Message::UploadCompleted(result) => (self.finish_upload(result), Task::none()),
        }
    }

    /// Moves to `Uploading` and posts `path`. A second file arriving while an
    /// upload runs (picker or the rest of a multi-file drop) is ignored.
    fn start_upload(&mut self, path: PathBuf, api: &ImageApiClient) -> Task<Message> {
        if self.is_uploading() {
            tracing::debug!(path = %path.display(), "ignoring file while an upload is running");
            return Task::none();
        }

        tracing::info!(path = %path.display(), "uploading image");
        self.phase = Phase::Uploading;

        let api = api.clone();
        Task::perform(
            async move { api.upload_image(path).await },
            Message::UploadCompleted,
        )
    }

    fn finish_upload(&mut self, result: Result<String, ApiError>) -> Effect {
        if !self.is_uploading() {
            tracing::debug!("discarding upload result received while idle");
            return Effect::None;
        }

        match result {
            Ok(url) => {
                tracing::info!(%url, "upload complete");
                self.phase = Phase::Idle;
                Effect::Uploaded(url)
            }
            Err(err) => {
                tracing::error!(error = %err, "upload failed");
                self.phase = Phase::Failed(UPLOAD_ERROR_KEY);
                Effect::None
            }
        }
    }
}

async fn pick_image(title: String, filter_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter_name, IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ApiConfig;

    fn api() -> ImageApiClient {
        ImageApiClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: Some(1),
        })
        .expect("client should build")
    }

    fn uploading_state() -> State {
        let mut state = State::new();
        let _ = state.update(
            Message::FileDropped(PathBuf::from("/tmp/a.png")),
            &api(),
            &I18n::default(),
        );
        state
    }

    #[test]
    fn starts_idle_without_error() {
        let state = State::new();
        assert_eq!(state.phase(), &Phase::Idle);
        assert!(!state.is_drag_active());
        assert_eq!(state.error_key(), None);
    }

    #[test]
    fn drag_enter_and_leave_toggle_affordance() {
        let mut state = State::new();
        let (api, i18n) = (api(), I18n::default());

        let _ = state.update(Message::DragEntered, &api, &i18n);
        assert!(state.is_drag_active());

        let _ = state.update(Message::DragLeft, &api, &i18n);
        assert!(!state.is_drag_active());
    }

    #[test]
    fn drop_clears_affordance_and_starts_upload() {
        let mut state = State::new();
        let (api, i18n) = (api(), I18n::default());

        let _ = state.update(Message::DragEntered, &api, &i18n);
        let (effect, _) = state.update(
            Message::FileDropped(PathBuf::from("/tmp/a.png")),
            &api,
            &i18n,
        );

        assert_eq!(effect, Effect::None);
        assert!(!state.is_drag_active());
        assert!(state.is_uploading());
    }

    #[test]
    fn picker_cancel_keeps_state() {
        let mut state = State::new();
        let _ = state.update(Message::FilePicked(None), &api(), &I18n::default());
        assert_eq!(state.phase(), &Phase::Idle);
    }

    #[test]
    fn browse_opens_picker_when_idle() {
        let mut state = State::new();
        let (effect, task) = state.update(Message::BrowseRequested, &api(), &I18n::default());

        assert_eq!(effect, Effect::None);
        assert_eq!(task.units(), 1);
        assert_eq!(state.phase(), &Phase::Idle);
    }

    #[test]
    fn browse_while_uploading_opens_no_dialog() {
        let mut state = uploading_state();
        let (effect, task) = state.update(Message::BrowseRequested, &api(), &I18n::default());

        assert_eq!(effect, Effect::None);
        assert_eq!(task.units(), 0);
        assert_eq!(state.phase(), &Phase::Uploading);
    }

    #[test]
    fn second_file_while_uploading_is_ignored() {
        let mut state = uploading_state();
        let (api, i18n) = (api(), I18n::default());

        let _ = state.update(
            Message::FileDropped(PathBuf::from("/tmp/b.png")),
            &api,
            &i18n,
        );
        let _ = state.update(
            Message::FilePicked(Some(PathBuf::from("/tmp/c.png"))),
            &api,
            &i18n,
        );

        // Exactly one completion is expected; the first one finishes the upload.
        let (effect, _) = state.update(
            Message::UploadCompleted(Ok("https://x/a.png".to_string())),
            &api,
            &i18n,
        );
        assert_eq!(effect, Effect::Uploaded("https://x/a.png".to_string()));
        assert_eq!(state.phase(), &Phase::Idle);
    }

    #[test]
    fn success_reports_uploaded_url() {
        let mut state = uploading_state();
        let (effect, _) = state.update(
            Message::UploadCompleted(Ok("https://x/d.png".to_string())),
            &api(),
            &I18n::default(),
        );

        assert_eq!(effect, Effect::Uploaded("https://x/d.png".to_string()));
        assert!(!state.is_uploading());
        assert_eq!(state.error_key(), None);
    }

    #[test]
    fn failure_sets_generic_error_until_next_attempt() {
        let mut state = uploading_state();
        let (api, i18n) = (api(), I18n::default());

        let (effect, _) = state.update(
            Message::UploadCompleted(Err(ApiError::Upload { status: 500 })),
            &api,
            &i18n,
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.error_key(), Some(UPLOAD_ERROR_KEY));

        let _ = state.update(
            Message::FilePicked(Some(PathBuf::from("/tmp/e.png"))),
            &api,
            &i18n,
        );
        assert!(state.is_uploading());
        assert_eq!(state.error_key(), None);
    }

    #[test]
    fn completion_while_idle_is_discarded() {
        let mut state = State::new();
        let (effect, _) = state.update(
            Message::UploadCompleted(Ok("https://x/late.png".to_string())),
            &api(),
            &I18n::default(),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), &Phase::Idle);
    }

    #[test]
    fn error_message_is_localized() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::app::config::Config::default());
        assert_eq!(
            i18n.tr(UPLOAD_ERROR_KEY),
            "Failed to upload image. Please try again later."
        );
    }
}
