// SPDX-License-Identifier: MPL-2.0
//! Toast card and overlay widgets.
//!
//! Toasts render as small cards with a kind-colored accent border, an icon,
//! the title and optional description, and a dismiss button. The overlay
//! stacks one aligned layer per occupied screen corner.

use crate::lifecycle::Phase;
use crate::manager::{Entry, Manager, Message};
use crate::ui::appearance::Appearance;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Renders a single toast card.
pub fn view(entry: &Entry, now: Instant) -> Element<'_, Message> {
    let toast = entry.toast();
    let appearance = toast.kind().appearance();
    let alpha = phase_opacity(entry.phase(now));

    // Kind icon as a text glyph in the accent color
    let icon_widget = Text::new(appearance.icon.glyph())
        .size(sizing::ICON_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(fade(appearance.accent, alpha)),
        });

    let title_widget = Text::new(toast.title().to_owned())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(fade(appearance.title, alpha)),
        });

    let mut text_column = Column::new().spacing(spacing::XXS).push(title_widget);
    if let Some(description) = toast.description() {
        text_column = text_column.push(
            Text::new(description.to_owned())
                .size(typography::BODY_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(fade(appearance.description, alpha)),
                }),
        );
    }

    // Layout: [icon] [title + description] [dismiss]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XXS))
        .push(
            Container::new(text_column)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if toast.is_closable() {
        let dismiss_glyph = Text::new("\u{2715}").size(sizing::ICON_SM).style(
            move |_theme: &Theme| text::Style {
                color: Some(fade(appearance.dismiss, alpha)),
            },
        );
        content = content.push(
            button(dismiss_glyph)
                .on_press(Message::Dismiss(toast.id()))
                .padding(spacing::XXS)
                .style(move |theme, status| dismiss_button_style(theme, status, appearance)),
        );
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, appearance, alpha))
        .into()
}

/// Renders the overlay with every active toast, grouped into the four
/// screen corners; corners with no toasts contribute no layer.
///
/// Returns an empty, zero-sized element when nothing is active.
pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
    let groups = manager.group_by_position();
    if groups.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
    for (position, entries) in groups {
        let anchor = position.anchor();
        let cards: Vec<Element<'_, Message>> =
            entries.into_iter().map(|entry| view(entry, now)).collect();

        let corner_column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(anchor.horizontal);

        layers = layers.push(
            Container::new(corner_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(anchor.horizontal)
                .align_y(anchor.vertical)
                .padding(spacing::MD),
        );
    }
    layers.into()
}

/// Opacity factor for a lifecycle phase, driving the enter/exit transitions.
fn phase_opacity(phase: Phase) -> f32 {
    match phase {
        Phase::PendingEnter => opacity::TRANSPARENT,
        Phase::Visible => opacity::OPAQUE,
        Phase::Leaving => opacity::OVERLAY_MEDIUM,
    }
}

/// Scales a color's alpha by the given factor.
fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card container.
fn card_style(_theme: &Theme, appearance: Appearance, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(fade(appearance.background, alpha))),
        border: iced::Border {
            color: fade(appearance.accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(fade(appearance.title, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(
    _theme: &Theme,
    status: button::Status,
    appearance: Appearance,
) -> button::Style {
    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: appearance.dismiss,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..appearance.dismiss
            })),
            text_color: appearance.description,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
