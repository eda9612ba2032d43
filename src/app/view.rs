// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.
//!
//! The page (app bar plus the list of trigger buttons) is the bottom layer of
//! a stack; each demo alert is its own layer on top, anchored to the top edge.

use super::demos::{self, DEMO_COUNT};
use super::Message;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use crate::ui::top_alert::{self, Environment, Presenter};
use iced::alignment;
use iced::widget::{button, scrollable, svg, text, tooltip, Column, Container, Row, Space, Stack};
use iced::{Alignment, Element, Length};

/// Title shown in the app bar.
pub const APP_TITLE: &str = "TopAlerter – All Features";

/// Line shown above the trigger list.
pub const INTRO: &str = "Tap any button to preview a real-world TopAlerter style";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub theme: &'a AppTheme,
    pub presenters: &'a [Presenter],
    pub env: Environment,
}

/// Renders the page with every demo alert layered above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .push(app_bar(ctx.theme))
        .push(trigger_list(ctx.theme))
        .width(Length::Fill)
        .height(Length::Fill);

    let page = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.theme.colors));

    ctx.presenters
        .iter()
        .enumerate()
        .fold(Stack::new().push(page), |stack, (index, presenter)| {
            match demos::config(index, ctx.theme) {
                Some(config) => stack.push(
                    top_alert::view(&config, presenter, ctx.theme, ctx.env)
                        .map(move |message| Message::Alert(index, message)),
                ),
                None => stack,
            }
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn app_bar(theme: &AppTheme) -> Element<'static, Message> {
    let colors = theme.colors;
    let toggle_icon = if theme.dark {
        icons::light_mode()
    } else {
        icons::dark_mode()
    };

    let toggle = button(
        svg(toggle_icon)
            .width(sizing::ICON_MD)
            .height(sizing::ICON_MD)
            .style(move |_theme, _status| svg::Style {
                color: Some(colors.primary),
            }),
    )
    .padding((sizing::CLOSE_TARGET - sizing::ICON_MD) / 2.0)
    .style(styles::button::app_bar_icon(colors))
    .on_press(Message::ToggleTheme);

    let toggle = tooltip(toggle, text("Toggle Theme"), tooltip::Position::Bottom).gap(4);

    let title = Container::new(
        text(APP_TITLE)
            .size(theme.typography.title_medium.size)
            .font(theme.typography.title_medium.font()),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let bar = Row::new()
        .push(Space::new().width(sizing::CLOSE_TARGET))
        .push(title)
        .push(toggle)
        .align_y(Alignment::Center)
        .padding([0.0, spacing::XS]);

    Container::new(bar)
        .width(Length::Fill)
        .height(sizing::APP_BAR_HEIGHT)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::app_bar(colors))
        .into()
}

fn trigger_list(theme: &AppTheme) -> Element<'static, Message> {
    let intro = text(INTRO)
        .size(theme.typography.title_medium.size)
        .font(theme.typography.title_medium.font())
        .color(theme.colors.on_surface_variant);

    let list = (0..DEMO_COUNT).fold(
        Column::new()
            .push(intro)
            .push(Space::new().height(spacing::SM))
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .width(Length::Fill),
        |list, index| list.push(trigger(theme, index)),
    );

    scrollable(list).height(Length::Fill).into()
}

fn trigger(theme: &AppTheme, index: usize) -> Element<'static, Message> {
    let label = Container::new(
        text(demos::TITLES[index])
            .size(theme.typography.label_large.size)
            .font(theme.typography.label_large.font()),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let vertical = (sizing::BUTTON_HEIGHT - theme.typography.label_large.line_height()) / 2.0;

    button(label)
        .width(Length::Fill)
        .padding([vertical, spacing::LG])
        .style(styles::button::tonal(theme.colors))
        .on_press(Message::ShowDemo(index))
        .into()
}
