// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for outcomes that happen outside the form itself:
//! saving a result, unreadable files, settings problems.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - queue and auto-dismiss lifecycle
//! - [`toast`] - rendering in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
