// SPDX-License-Identifier: MPL-2.0
//! Turns the layout model into iced widgets.

use super::config::AlertConfig;
use super::layout::{self, ActionLayout, ActionRole, AlertLayout, Environment, Leading, TextBlock};
use super::presenter::{Message, Presenter};
use super::resolve::fade;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use crate::ui::widgets::{slide, AnimatedSpinner};
use iced::widget::text::LineHeight;
use iced::widget::{
    button, column, container, mouse_area, row, svg, text, tooltip, Column, Row, Space,
};
use iced::{mouse, Alignment, Element, Length};

/// Renders one alert for the current render pass.
///
/// Returns an empty, zero-sized element once the exit transition is over.
pub fn view<M>(
    config: &AlertConfig<M>,
    presenter: &Presenter,
    theme: &AppTheme,
    env: Environment,
) -> Element<'static, Message> {
    if !presenter.is_rendered() {
        return Space::new().into();
    }

    let layout = layout::compute(config, theme, env);
    let alpha = presenter.opacity();
    let card = card(layout, alpha, presenter.spinner_rotation());

    slide(card, 1.0 - presenter.eased_progress()).into()
}

fn card(layout: AlertLayout, alpha: f32, rotation: f32) -> Element<'static, Message> {
    let AlertLayout {
        surface,
        backdrop,
        shape,
        padding,
        leading,
        title,
        message,
        close,
        actions,
        clickable,
    } = layout;

    let mut primary = Row::new().spacing(spacing::SM).align_y(Alignment::Center);

    match leading {
        Leading::None => {}
        Leading::Progress { color } => {
            let spinner = AnimatedSpinner::new(fade(color, alpha), rotation);
            primary = primary.push(spinner.into_element());
        }
        Leading::Icon {
            handle,
            tint,
            label,
        } => {
            let tint = fade(tint, alpha);
            let icon = svg(handle)
                .width(sizing::ICON_MD)
                .height(sizing::ICON_MD)
                .style(move |_theme, _status| svg::Style { color: Some(tint) });
            primary = match label {
                Some(label) => primary.push(
                    tooltip(icon, text(label), tooltip::Position::Bottom).gap(spacing::XXS),
                ),
                None => primary.push(icon),
            };
        }
    }

    let mut texts = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(block) = title {
        texts = texts.push(text_block(block, alpha));
    }
    if let Some(block) = message {
        texts = texts.push(text_block(block, alpha));
    }
    primary = primary.push(texts);

    if let Some(tint) = close {
        let glyph_tint = fade(tint, alpha);
        let glyph = svg(icons::close())
            .width(sizing::ICON_MD)
            .height(sizing::ICON_MD)
            .style(move |_theme, _status| svg::Style {
                color: Some(glyph_tint),
            });
        primary = primary.push(
            button(glyph)
                .padding((sizing::CLOSE_TARGET - sizing::ICON_MD) / 2.0)
                .style(styles::button::alert_close(tint, alpha))
                .on_press(Message::CloseTapped),
        );
    }

    let mut body = column![primary].spacing(spacing::SM);
    if !actions.is_empty() {
        let buttons = actions
            .into_iter()
            .fold(row![Space::new().width(Length::Fill)], |row, action| {
                row.push(action_button(action, alpha))
            })
            .spacing(spacing::XS)
            .align_y(Alignment::Center);
        body = body.push(buttons);
    }

    let mut card = container(body)
        .padding(padding)
        .width(Length::Fill)
        .style(styles::container::alert_surface(surface, shape, alpha));

    if let Some(fill) = backdrop {
        card = container(card)
            .width(Length::Fill)
            .style(styles::container::backdrop(fill, shape, alpha));
    }

    if clickable {
        mouse_area(card)
            .on_press(Message::CardTapped)
            .interaction(mouse::Interaction::Pointer)
            .into()
    } else {
        card.into()
    }
}

fn text_block(block: TextBlock, alpha: f32) -> Element<'static, Message> {
    let max_height = block.max_height();
    let content = text(block.text)
        .size(block.style.size)
        .font(block.style.font())
        .line_height(LineHeight::Relative(typography::LINE_HEIGHT))
        .color(fade(block.color, alpha));

    match max_height {
        Some(height) => container(content)
            .width(Length::Fill)
            .max_height(height)
            .clip(true)
            .into(),
        None => content.into(),
    }
}

fn action_button(action: ActionLayout, alpha: f32) -> Element<'static, Message> {
    let ActionLayout {
        role,
        text: label,
        colors,
        shape,
        text_style,
    } = action;

    let vertical = ((sizing::BUTTON_HEIGHT - text_style.line_height()) / 2.0).max(0.0);
    let on_press = match role {
        ActionRole::Negative => Message::NegativeTapped,
        ActionRole::Positive => Message::PositiveTapped,
    };

    button(
        text(label)
            .size(text_style.size)
            .font(text_style.font())
            .line_height(LineHeight::Relative(typography::LINE_HEIGHT)),
    )
    .padding([vertical, spacing::MD])
    .style(styles::button::alert_action(colors, shape, alpha))
    .on_press(on_press)
    .into()
}
