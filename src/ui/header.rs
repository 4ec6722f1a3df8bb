/// Sticky header with club branding and page navigation
///
/// The bar grows a drop shadow and tightens its padding once the page
/// scrolls past the top, mirroring the web site's scrolled header.

use iced::widget::{button, container, row, text, Space};
use iced::{Element, Length};

use super::theme;
use crate::{App, Message, Page};

pub fn view(app: &App) -> Element<'_, Message> {
    let scrolled = app.is_scrolled();

    let mut nav = row![].spacing(8).align_y(iced::Alignment::Center);
    for page in Page::ALL {
        nav = nav.push(
            button(text(page.label()).size(15))
                .padding([6, 12])
                .style(theme::nav_button(page == app.page))
                .on_press(Message::Navigate(page)),
        );
    }

    let brand = row![
        text("Osuele").size(22).color(theme::primary()),
        text(" Sports Club").size(22).color(theme::accent()),
    ];

    container(
        row![brand, Space::with_width(Length::Fill), nav]
            .align_y(iced::Alignment::Center)
            .padding([if scrolled { 8 } else { 16 }, 24]),
    )
    .width(Length::Fill)
    .style(theme::header(scrolled))
    .into()
}
