// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: a small header with the language
//! picker, the centered form, and toasts layered on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::resize_form;
use iced::widget::{pick_list, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a resize_form::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = ctx
        .form
        .view(resize_form::ViewContext { i18n: ctx.i18n })
        .map(Message::Form);

    let body = scrollable(
        Container::new(form)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let content = Column::new()
        .push(header(ctx.i18n))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn header(i18n: &I18n) -> Element<'_, Message> {
    let locales = i18n.available_locales().to_vec();
    let selected = Some(i18n.current_locale().clone());

    Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(i18n.tr("form-language-label")).size(typography::BODY_SM))
        .push(
            pick_list(locales, selected, Message::LanguageSelected)
                .text_size(typography::BODY_SM)
                .padding(spacing::XXS),
        )
        .into()
}
