/// Photo gallery page and lightbox
///
/// Featured strip, category filter chips, and the wrapped photo grid.
/// Clicking any photo opens the lightbox over the page; the lightbox
/// navigates the list the photo was opened from (filtered grid or
/// featured strip) with wraparound.

use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::{chip, image_slot, section_header, theme};
use crate::content::gallery::{featured_images, GalleryCategory};
use crate::content::{filter_items, gallery::GALLERY_IMAGES, CategoryFilter};
use crate::media::ImageState;
use crate::state::navigation::Direction;
use crate::{App, GalleryOrigin, Message};

const CELL_WIDTH: f32 = 250.0;
const CELL_IMAGE_HEIGHT: f32 = 170.0;

pub fn view(app: &App) -> Element<'_, Message> {
    let filtered = filter_items(&GALLERY_IMAGES, app.gallery_filter);

    let mut chips = row![chip(
        "All Photos",
        app.gallery_filter == CategoryFilter::All,
        Message::GalleryFilterSelected(CategoryFilter::All),
    )]
    .spacing(8);
    for category in GalleryCategory::ALL {
        chips = chips.push(chip(
            category.label(),
            app.gallery_filter == CategoryFilter::Only(category),
            Message::GalleryFilterSelected(CategoryFilter::Only(category)),
        ));
    }

    let grid: Element<'_, Message> = if filtered.is_empty() {
        empty_state()
    } else {
        let cells: Vec<Element<'_, Message>> = filtered
            .iter()
            .copied()
            .map(|image| grid_cell(app, image, GalleryOrigin::Grid))
            .collect();
        Wrap::with_elements(cells)
            .spacing(16.0)
            .line_spacing(16.0)
            .into()
    };

    column![
        section_header(
            "Photo Gallery",
            "Capturing the action, achievements, and community spirit of Osuele Sports",
        ),
        featured_strip(app),
        chips,
        grid,
    ]
    .spacing(24)
    .padding(32)
    .into()
}

fn featured_strip(app: &App) -> Element<'_, Message> {
    let mut strip = row![].spacing(16);
    for image in featured_images() {
        strip = strip.push(grid_cell(app, image, GalleryOrigin::Featured));
    }

    column![
        text("Featured Moments").size(20).color(theme::primary()),
        strip,
    ]
    .spacing(12)
    .into()
}

/// A clickable photo card. `origin` decides which sequence the lightbox
/// will navigate when this card opens it.
fn grid_cell<'a>(
    app: &'a App,
    image: &'static crate::content::gallery::GalleryImage,
    origin: GalleryOrigin,
) -> Element<'a, Message> {
    let picture = container(image_slot(app.thumb_state(image.source)))
        .width(Length::Fixed(CELL_WIDTH))
        .height(Length::Fixed(CELL_IMAGE_HEIGHT));

    let caption = container(
        column![
            text(image.caption).size(14),
            text(image.category.label())
                .size(12)
                .color(theme::accent()),
        ]
        .spacing(2),
    )
    .padding([8, 12])
    .width(Length::Fixed(CELL_WIDTH));

    let card = container(column![picture, caption])
        .style(theme::card)
        .padding(4);

    mouse_area(card)
        .interaction(iced::mouse::Interaction::Pointer)
        .on_press(Message::GalleryImageOpened {
            id: image.id,
            origin,
        })
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text("No images found in this category.").size(16).color(theme::muted()),
            button(text("View all photos").size(15).color(theme::accent()))
                .style(|_, _| iced::widget::button::Style {
                    background: None,
                    text_color: theme::accent(),
                    ..iced::widget::button::Style::default()
                })
                .on_press(Message::GalleryFilterSelected(CategoryFilter::All)),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}

/// Lightbox overlay content. Only rendered while the lightbox viewer is
/// open; the caller composes it over the page with the modal helper.
pub fn lightbox(app: &App) -> Element<'_, Message> {
    let Some((image, index)) = app.lightbox.current() else {
        return Space::with_width(Length::Shrink).into();
    };
    let total = app.lightbox.sequence_len();

    let picture: Element<'_, Message> = match app.full_state(image.source) {
        Some(ImageState::Ready(handle)) => iced::widget::image::viewer(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        other => container(image_slot(other))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let nav_button = |label: &'static str, direction: Direction| {
        button(text(label).size(20))
            .padding([10, 16])
            .style(theme::overlay_control)
            .on_press(Message::LightboxNavigated(direction))
    };

    let close = button(text("✕").size(18))
        .padding([8, 14])
        .style(theme::overlay_control)
        .on_press(Message::OverlayClosed);

    let caption = column![
        text(image.caption).size(18).color(iced::Color::WHITE),
        text(format!(
            "{} • {} of {}",
            image.category.label(),
            index + 1,
            total
        ))
        .size(13)
        .color(theme::on_dark()),
    ]
    .spacing(4);

    column![
        row![Space::with_width(Length::Fill), close],
        row![
            nav_button("❮", Direction::Prev),
            picture,
            nav_button("❯", Direction::Next),
        ]
        .spacing(16)
        .align_y(iced::Alignment::Center)
        .height(Length::Fill),
        caption,
    ]
    .spacing(12)
    .width(Length::Fixed(960.0))
    .height(Length::Fixed(680.0))
    .into()
}
