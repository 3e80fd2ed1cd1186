// SPDX-License-Identifier: MPL-2.0
//! Form layout: file picker, dimension fields, actions, and the result panel.

use super::{Message, State, ViewState};
use crate::error::ResizeError;
use crate::i18n::fluent::I18n;
use crate::media::Dimensions;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, text, text_input, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let title = Text::new(i18n.tr("form-title"))
            .size(typography::TITLE_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let mut content = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(title)
            .push(self.file_section(i18n))
            .push(self.dimension_fields(i18n));

        let resize_button = button(
            Text::new(i18n.tr("form-resize"))
                .size(typography::BODY_LG)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::primary);
        let resize_button = if self.is_loading() {
            resize_button
        } else {
            resize_button.on_press(Message::Submit)
        };
        content = content.push(resize_button);

        if let Some(error) = self.visible_error() {
            content = content.push(error_banner(error, i18n));
        }

        match self.view_state() {
            ViewState::Loading { .. } => {
                let spinner =
                    AnimatedSpinner::new(palette::SUCCESS_500, self.spinner_rotation())
                        .into_element();
                content = content.push(
                    Container::new(spinner)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                );
            }
            ViewState::Ready(result) => {
                let preview = image(result.image.handle.clone()).content_fit(ContentFit::ScaleDown);
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center)
                        .push(Text::new(i18n.tr("form-resized-image")).size(typography::BODY))
                        .push(
                            Container::new(preview)
                                .width(Length::Fill)
                                .max_height(sizing::RESULT_MAX_HEIGHT)
                                .align_x(Horizontal::Center),
                        ),
                );
            }
            ViewState::Idle | ViewState::Failed(_) => {}
        }

        if let Some(file) = self.file() {
            if let Some(dimensions) = file.dimensions {
                content = content.push(dimensions_line(i18n, "form-original-dimensions", dimensions));
            } else if file.probe_failed {
                content = content.push(
                    centered_text(i18n.tr("form-file-unreadable"), typography::BODY_SM)
                        .color(palette::WARNING_500),
                );
            }
        }

        if let Some(result) = self.view_state().result() {
            content = content.push(dimensions_line(
                i18n,
                "form-resized-dimensions",
                result.image.dimensions,
            ));
        }

        let download_button = button(Text::new(i18n.tr("form-download")).size(typography::BODY))
            .padding(spacing::XS)
            .style(styles::button::success);
        let download_button = if self.can_download() {
            download_button.on_press(Message::Download)
        } else {
            download_button
        };
        content = content.push(
            Container::new(download_button)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

        Container::new(content)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::card)
            .into()
    }

    fn file_section<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let picker_label = self
            .file()
            .map_or_else(|| i18n.tr("form-select-file"), |file| file.file_name.clone());

        let picker = button(
            Text::new(picker_label)
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::file_picker)
        .on_press(Message::PickFile);

        let status = if self.file().is_some() {
            i18n.tr("form-drop-hint")
        } else {
            format!("{} · {}", i18n.tr("form-no-file"), i18n.tr("form-drop-hint"))
        };

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("form-select-image-label")).size(typography::BODY_SM))
            .push(picker)
            .push(Text::new(status).size(typography::CAPTION))
            .into()
    }

    fn dimension_fields<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let width_placeholder = i18n.tr("form-width-placeholder");
        let width_input = text_input(width_placeholder.as_str(), self.width_input())
            .on_input(Message::WidthChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);

        let height_placeholder = i18n.tr("form-height-placeholder");
        let height_input = text_input(height_placeholder.as_str(), self.height_input())
            .on_input(Message::HeightChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);

        Row::new()
            .spacing(spacing::MD)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(Text::new(i18n.tr("form-width-label")).size(typography::BODY_SM))
                    .push(width_input),
            )
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(Text::new(i18n.tr("form-height-label")).size(typography::BODY_SM))
                    .push(height_input),
            )
            .into()
    }
}

fn error_banner<'a>(error: &ResizeError, i18n: &'a I18n) -> Element<'a, Message> {
    let args = error.i18n_args();
    let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let message = i18n.tr_with_args(error.i18n_key(), &args);

    let dismiss = button(Text::new(i18n.tr("form-dismiss")).size(typography::BODY_SM))
        .padding(spacing::XXS)
        .on_press(Message::DismissError);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(message)
                    .size(typography::BODY_SM)
                    .width(Length::Fill),
            )
            .push(Space::new().width(spacing::XXS))
            .push(dismiss),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::error_banner)
    .into()
}

fn dimensions_line<'a>(i18n: &I18n, key: &str, dimensions: Dimensions) -> Element<'a, Message> {
    let width = dimensions.width.to_string();
    let height = dimensions.height.to_string();
    centered_text(
        i18n.tr_with_args(key, &[("width", &width), ("height", &height)]),
        typography::BODY,
    )
    .into()
}

fn centered_text<'a>(content: String, size: f32) -> Text<'a> {
    text(content)
        .size(size)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
}
