/// Contact page and shared footer
///
/// The form validates on submit; errors render inline under their
/// fields and clear on the next submit attempt. The footer carries the
/// newsletter signup whose confirmation banner dismisses itself.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Element, Length};

use super::{section_header, theme};
use crate::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let form = &app.contact;

    let field = |label: &'static str,
                 placeholder: &'static str,
                 value: &str,
                 on_input: fn(String) -> Message,
                 error: Option<&'static str>| {
        let mut col = column![
            text(label).size(14),
            text_input(placeholder, value).on_input(on_input).padding(10),
        ]
        .spacing(4);
        if let Some(message) = error {
            col = col.push(text(message).size(13).color(theme::danger()));
        }
        col
    };

    let form_panel = column![
        field(
            "Name *",
            "Your full name",
            &form.name,
            Message::ContactNameChanged,
            form.errors.name,
        ),
        field(
            "Email *",
            "example@email.com",
            &form.email,
            Message::ContactEmailChanged,
            form.errors.email,
        ),
        field(
            "Phone",
            "Optional phone number",
            &form.phone,
            Message::ContactPhoneChanged,
            None,
        ),
        field(
            "Message *",
            "How can we help?",
            &form.message,
            Message::ContactMessageChanged,
            form.errors.message,
        ),
        button(text("Send Message").size(15))
            .style(theme::cta)
            .padding([10, 24])
            .on_press(Message::ContactSubmitted),
    ]
    .spacing(14)
    .width(Length::FillPortion(3));

    let mut info_lines = column![
        text("Visit Us").size(20).color(theme::primary()),
        text("Osuele Sports Complex, Accra, Ghana").size(14),
        text("📞 +233 (0) 302 000 000").size(14),
        text("✉️  club@osueleventures.com").size(14),
        text("Open Mon-Sat, 6:00 AM - 8:00 PM").size(14).color(theme::muted()),
    ]
    .spacing(8);
    if form.sent {
        info_lines = info_lines.push(
            text("✅ Thanks for reaching out! We will reply within two working days.")
                .size(14)
                .color(theme::accent()),
        );
    }

    column![
        section_header("Get in Touch", "Questions about programs, events, or membership"),
        container(
            row![
                form_panel,
                container(info_lines).width(Length::FillPortion(2)).padding(16),
            ]
            .spacing(24)
            .padding(24),
        )
        .style(theme::card)
        .width(Length::Fill),
    ]
    .spacing(24)
    .padding(32)
    .into()
}

/// Dark footer band shared by every page: newsletter signup, status
/// line, and copyright.
pub fn footer(app: &App) -> Element<'_, Message> {
    let signup = row![
        text_input("Your email address", &app.newsletter_email)
            .on_input(Message::NewsletterEmailChanged)
            .padding(10)
            .width(Length::Fixed(280.0)),
        button(text("Subscribe").size(14))
            .style(theme::cta)
            .padding([10, 18])
            .on_press(Message::NewsletterSubscribed),
    ]
    .spacing(8);

    let mut newsletter = column![
        text("Stay in the loop").size(18),
        text("Subscribe to our newsletter for the latest on tournaments, events, and training programs.")
            .size(13)
            .color(theme::on_dark()),
        signup,
    ]
    .spacing(8);
    if app.subscribed {
        newsletter = newsletter.push(
            text("✅ Subscribed! See you in your inbox.")
                .size(13)
                .color(theme::accent()),
        );
    }

    container(
        column![
            newsletter,
            Space::with_height(12),
            text(&app.status).size(12).color(theme::on_dark()),
            text("© 2024 Osuele Ventures - Sports Club Division").size(12).color(theme::on_dark()),
        ]
        .spacing(4)
        .padding([32, 24]),
    )
    .width(Length::Fill)
    .style(theme::footer)
    .into()
}
