// SPDX-License-Identifier: MPL-2.0
//! `iced_resize` is a small desktop client for a remote image resizing service,
//! built with the Iced GUI framework.
//!
//! Pick an image, choose the target width and height, and the application
//! uploads it to the Resize Service, shows the returned image with its
//! dimensions, and lets you save it.

#![doc(html_root_url = "https://docs.rs/iced_resize/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod service;
pub mod ui;
