// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the resize form, the toasts and the spinner.
//!
//! Styles pick from these scales instead of inlining numbers, so the card,
//! its buttons and the notification stack stay consistent.
//!
//! ```
//! use iced_resize::ui::design_tokens::{palette, spacing};
//!
//! let accent = palette::SUCCESS_500;
//! assert!(spacing::MD > spacing::XS);
//! # let _ = accent;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.18, 0.21);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// File picker and Resize button.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);

    /// Download button and the loading spinner (#4CAF50 family).
    pub const SUCCESS_400: Color = Color::from_rgb(0.36, 0.78, 0.5);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const SUCCESS_600: Color = Color::from_rgb(0.2, 0.6, 0.33);

    pub(super) const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);
}

pub mod opacity {
    /// Tint behind the error banner.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
}

/// 8px grid, with a half step at the bottom.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Spinner diameter.
    pub const SPINNER: f32 = 35.0;
    pub const FORM_WIDTH: f32 = 448.0;
    pub const RESULT_MAX_HEIGHT: f32 = 320.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Form heading.
    pub const TITLE_LG: f32 = 30.0;
    /// Button labels.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Field labels and the error banner.
    pub const BODY_SM: f32 = 13.0;
    /// Drop hint.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = lift(2.0, 4.0);
    pub const MD: Shadow = lift(4.0, 8.0);
    pub const LG: Shadow = lift(8.0, 16.0);

    const fn lift(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::SHADOW,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::TOAST_WIDTH <= sizing::FORM_WIDTH);
    assert!(sizing::SPINNER < sizing::RESULT_MAX_HEIGHT);
};
