/// Coaching team page

use iced::widget::{column, container, row, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::{image_slot, section_header, theme};
use crate::content::team::TEAM_MEMBERS;
use crate::{App, Message};

const CARD_WIDTH: f32 = 280.0;

pub fn view(app: &App) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = TEAM_MEMBERS
        .iter()
        .map(|member| member_card(app, member))
        .collect();

    column![
        section_header(
            "Expert Coaching Team",
            "Learn from professional coaches with decades of experience in competitive sports",
        ),
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(24)
    .padding(32)
    .into()
}

fn member_card<'a>(
    app: &'a App,
    member: &'static crate::content::team::TeamMember,
) -> Element<'a, Message> {
    let picture = container(image_slot(app.thumb_state(member.image)))
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(220.0));

    let mut specialties = row![].spacing(6);
    for specialty in member.specialties {
        specialties = specialties.push(
            container(text(specialty).size(11))
                .padding([3, 8])
                .style(|_: &iced::Theme| iced::widget::container::Style {
                    background: Some(theme::light().into()),
                    border: iced::border::rounded(999.0),
                    ..iced::widget::container::Style::default()
                }),
        );
    }

    container(
        column![
            picture,
            column![
                text(member.name).size(18).color(theme::primary()),
                text(member.position).size(14).color(theme::accent()),
                specialties,
                text(member.bio).size(13).color(theme::muted()),
            ]
            .spacing(6)
            .padding([12, 16])
            .width(Length::Fixed(CARD_WIDTH)),
        ],
    )
    .style(theme::card)
    .padding(4)
    .into()
}
