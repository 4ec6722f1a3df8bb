/// View modules
///
/// One module per page plus the shared chrome:
/// - theme.rs - brand palette and widget styles
/// - header.rs - navigation bar
/// - gallery.rs - photo grid and lightbox
/// - events.rs - events calendar and detail modal
/// - programs.rs - training program tabs
/// - team.rs - coaching team cards
/// - contact.rs - contact form and footer

pub mod contact;
pub mod events;
pub mod gallery;
pub mod header;
pub mod programs;
pub mod team;
pub mod theme;

use iced::widget::{center, column, container, mouse_area, opaque, stack, text};
use iced::{ContentFit, Element, Length};

use crate::media::ImageState;
use crate::Message;

/// Page section heading: title with an accent underline and a subtitle.
pub fn section_header<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(32).color(theme::primary()),
        container(text(""))
            .width(64)
            .height(4)
            .style(|_| container::Style {
                background: Some(theme::accent().into()),
                ..container::Style::default()
            }),
        text(subtitle).size(16).color(theme::muted()),
    ]
    .spacing(8)
    .into()
}

/// Rounded filter chip.
pub fn chip<'a>(label: &'a str, selected: bool, on_press: Message) -> Element<'a, Message> {
    iced::widget::button(text(label).size(14))
        .padding([8, 20])
        .style(theme::chip(selected))
        .on_press(on_press)
        .into()
}

/// Overlay `content` above `base` on a dimmed backdrop.
///
/// Clicking the backdrop emits `on_blur`; clicks inside the content are
/// swallowed by the inner opaque layer and never reach the backdrop
/// handler.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(theme::backdrop)).on_press(on_blur)
        ),
    ]
    .into()
}

/// Render an asset slot: the image when ready, a placeholder while
/// loading, a deterministic fallback card when the asset is missing or
/// broken.
pub fn image_slot<'a>(state: Option<&ImageState>) -> Element<'a, Message> {
    match state {
        Some(ImageState::Ready(handle)) => iced::widget::image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => container(
            column![text("📷").size(28), text("Image unavailable").size(13)]
                .spacing(6)
                .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::fallback)
        .into(),
        _ => container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::placeholder)
            .into(),
    }
}
