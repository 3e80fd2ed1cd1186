// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`resize_form`] - The resize form, its state machine and layout
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod resize_form;
pub mod styles;
pub mod theming;
pub mod widgets;
