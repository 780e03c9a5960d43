// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::upload;
use iced::{event, time, window, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes window drag-and-drop events to the upload widget.
///
/// Iced emits one `FileDropped` per file; the widget keeps the first.
pub fn create_file_drop_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let event::Event::Window(window_event) = event else {
            return None;
        };

        let message = match window_event {
            window::Event::FileHovered(_) => upload::Message::DragEntered,
            window::Event::FilesHoveredLeft => upload::Message::DragLeft,
            window::Event::FileDropped(path) => upload::Message::FileDropped(path),
            _ => return None,
        };
        Some(Message::Upload(message))
    })
}

/// Ticks while a spinner is on screen or a toast can expire.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
