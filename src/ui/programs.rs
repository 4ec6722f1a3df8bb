/// Training programs page
///
/// A tab per program; the active tab shows the program description,
/// feature checklist, schedule, and photo.

use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use super::{chip, image_slot, section_header, theme};
use crate::content::programs::PROGRAMS;
use crate::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let active = &PROGRAMS[app.active_program.min(PROGRAMS.len() - 1)];

    let mut tabs = row![].spacing(8);
    for (index, program) in PROGRAMS.iter().enumerate() {
        tabs = tabs.push(chip(
            program.tab_label,
            index == app.active_program,
            Message::ProgramSelected(index),
        ));
    }

    let mut features = column![].spacing(6);
    for feature in active.features {
        features = features.push(
            row![
                text("✓").size(15).color(theme::accent()),
                text(feature).size(15),
            ]
            .spacing(8),
        );
    }

    let details = column![
        text(active.title).size(24).color(theme::primary()),
        text(active.description).size(15),
        features,
        text(format!("🕒 {}", active.schedule))
            .size(14)
            .color(theme::muted()),
    ]
    .spacing(12)
    .width(Length::FillPortion(3));

    let picture = container(image_slot(app.thumb_state(active.image)))
        .width(Length::FillPortion(2))
        .height(Length::Fixed(300.0));

    column![
        section_header(
            "Our Programs",
            "Comprehensive sports training programs for athletes of all levels",
        ),
        tabs,
        container(row![details, picture].spacing(24).padding(24))
            .style(theme::card)
            .width(Length::Fill),
    ]
    .spacing(24)
    .padding(32)
    .into()
}
