/// Events calendar page and detail modal
///
/// Filterable event cards with date, time, and location; selecting a
/// card opens a detail modal over the page. Past events stay listed
/// with a "Past event" badge since the dataset is a fixed calendar.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

use super::{chip, image_slot, section_header, theme};
use crate::content::events::{EventCategory, EVENTS};
use crate::content::{filter_items, CategoryFilter};
use crate::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let filtered = filter_items(&*EVENTS, app.event_filter);

    let mut chips = row![chip(
        "All Events",
        app.event_filter == CategoryFilter::All,
        Message::EventFilterSelected(CategoryFilter::All),
    )]
    .spacing(8);
    for category in EventCategory::ALL {
        chips = chips.push(chip(
            category.label(),
            app.event_filter == CategoryFilter::Only(category),
            Message::EventFilterSelected(CategoryFilter::Only(category)),
        ));
    }

    let mut cards = column![].spacing(16);
    if filtered.is_empty() {
        cards = cards.push(empty_state());
    } else {
        for event in filtered {
            cards = cards.push(event_card(app, event));
        }
    }

    column![
        section_header(
            "Calendar of Events",
            "Find out what's happening at Osuele Sports Club and join us",
        ),
        chips,
        cards,
    ]
    .spacing(24)
    .padding(32)
    .into()
}

fn event_card<'a>(
    app: &'a App,
    event: &'static crate::content::events::Event,
) -> Element<'a, Message> {
    let picture = container(image_slot(app.thumb_state(event.image)))
        .width(Length::Fixed(220.0))
        .height(Length::Fixed(150.0));

    let mut badges = row![container(text(event.category.label()).size(12))
        .padding([4, 10])
        .style(|_: &iced::Theme| iced::widget::container::Style {
            background: Some(theme::accent().into()),
            text_color: Some(iced::Color::WHITE),
            border: iced::border::rounded(999.0),
            ..iced::widget::container::Style::default()
        })]
    .spacing(8);
    if !event.is_upcoming(app.today) {
        badges = badges.push(
            container(text("Past event").size(12))
                .padding([4, 10])
                .style(|_: &iced::Theme| iced::widget::container::Style {
                    background: Some(theme::muted().into()),
                    text_color: Some(iced::Color::WHITE),
                    border: iced::border::rounded(999.0),
                    ..iced::widget::container::Style::default()
                }),
        );
    }

    let details = column![
        badges,
        text(event.title).size(20).color(theme::primary()),
        text(format!("📅 {}  •  🕒 {}", event.date_label(), event.time)).size(14),
        text(format!("📍 {}", event.location)).size(14).color(theme::muted()),
        button(text("View details ❯").size(14))
            .style(theme::cta)
            .padding([8, 16])
            .on_press(Message::EventOpened(event.id)),
    ]
    .spacing(8)
    .width(Length::Fill);

    container(row![picture, details].spacing(20).padding(16))
        .style(theme::card)
        .width(Length::Fill)
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text("No events in this category right now.")
                .size(16)
                .color(theme::muted()),
            button(text("View all events").size(15))
                .style(|_, _| iced::widget::button::Style {
                    background: None,
                    text_color: theme::accent(),
                    ..iced::widget::button::Style::default()
                })
                .on_press(Message::EventFilterSelected(CategoryFilter::All)),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}

/// Detail modal content for the currently selected event.
pub fn detail(app: &App) -> Element<'_, Message> {
    let Some((event, _)) = app.event_modal.current() else {
        return Space::with_width(Length::Shrink).into();
    };

    let picture: Element<'_, Message> = container(image_slot(
        app.full_state(event.image).or(app.thumb_state(event.image)),
    ))
    .width(Length::Fill)
    .height(Length::Fixed(280.0))
    .into();

    let close = button(text("✕").size(16))
        .padding([6, 12])
        .style(theme::overlay_control)
        .on_press(Message::OverlayClosed);

    container(
        column![
            row![Space::with_width(Length::Fill), close],
            picture,
            text(event.title).size(24).color(theme::primary()),
            text(format!("📅 {}  •  🕒 {}", event.date_label(), event.time)).size(14),
            text(format!("📍 {}", event.location)).size(14).color(theme::muted()),
            text(event.description).size(15),
        ]
        .spacing(12)
        .padding(24),
    )
    .style(theme::card)
    .width(Length::Fixed(640.0))
    .into()
}
