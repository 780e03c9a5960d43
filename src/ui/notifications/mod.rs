// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for transient feedback.
//!
//! - [`notification`] - `Notification` with its severity and expiry
//! - [`manager`] - `Manager` queuing and expiring notifications
//! - [`toast`] - rendering of the visible notifications
//!
//! Success toasts disappear after 3s, warnings after 6s. At most three are
//! visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
