// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid button in the given color family; disabled state is grayed out.
fn filled(
    status: button::Status,
    base: Color,
    hover: Color,
    edge: Color,
    is_light: bool,
) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: edge,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Primary action (Resize).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        status,
        palette::PRIMARY_500,
        palette::PRIMARY_400,
        palette::PRIMARY_600,
        matches!(theme, Theme::Light),
    )
}

/// Confirming action (Download).
pub fn success(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        status,
        palette::SUCCESS_500,
        palette::SUCCESS_400,
        palette::SUCCESS_600,
        matches!(theme, Theme::Light),
    )
}

/// Outlined drop-zone style used by the file picker.
pub fn file_picker(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_800, palette::GRAY_300)
    };
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => palette::GRAY_300,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
