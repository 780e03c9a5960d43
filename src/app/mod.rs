// SPDX-License-Identifier: MPL-2.0
//! Application root: owns the upload widget, the gallery and the shared API
//! client, and routes messages and effects between them.

pub mod config;
mod message;
pub mod paths;
pub mod shell;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::api::ImageApiClient;
use crate::clipboard::SystemClipboard;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::widgets::animated_spinner;
use crate::ui::{gallery, upload};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

pub struct App {
    i18n: I18n,
    theme: Theme,
    api: ImageApiClient,
    upload: upload::State,
    gallery: gallery::State,
    clipboard: SystemClipboard,
    notifications: notifications::Manager,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("endpoint", &self.api.endpoint())
            .field("images", &self.gallery.images().len())
            .field("uploading", &self.upload.is_uploading())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Runs the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 wants an `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &flags.config);
        let theme = flags.config.general.theme_mode.iced_theme();

        let mut notifications = notifications::Manager::new();
        if let Some(key) = flags.config_warning {
            notifications.push(Notification::warning(key));
        }

        let mut app = Self {
            i18n,
            theme,
            upload: upload::State::new(),
            gallery: gallery::State::new(flags.initial_images, &flags.config.gallery),
            api: flags.api,
            clipboard: SystemClipboard::new(),
            notifications,
            spinner_rotation: 0.0,
        };

        let task = app.gallery.sync_thumbnails(&app.api).map(Message::Gallery);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload(message) => {
                let (effect, task) = self.upload.update(message, &self.api, &self.i18n);
                let task = task.map(Message::Upload);

                match effect {
                    upload::Effect::None => task,
                    upload::Effect::Uploaded(url) => {
                        self.notifications
                            .push(Notification::success("upload-success"));
                        self.gallery.append(url);
                        let thumbnails = self.gallery.sync_thumbnails(&self.api);
                        Task::batch([task, thumbnails.map(Message::Gallery)])
                    }
                }
            }
            Message::Gallery(message) => self
                .gallery
                .update(message, &self.api, &mut self.clipboard)
                .map(Message::Gallery),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                if self.is_animating() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            upload: &self.upload,
            gallery: &self.gallery,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_file_drop_subscription(),
            subscription::create_tick_subscription(
                self.is_animating(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn is_animating(&self) -> bool {
        self.upload.is_uploading() || self.gallery.is_loading()
    }
}
