/// Brand palette and shared widget styles
///
/// Colors follow the club's web styling: deep navy primary, amber
/// accent, warm gray text on a light background.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{border, Background, Color, Shadow, Theme, Vector};

pub fn primary() -> Color {
    Color::from_rgb8(0x00, 0x1F, 0x3F)
}

pub fn secondary() -> Color {
    Color::from_rgb8(0x37, 0x41, 0x51)
}

pub fn accent() -> Color {
    Color::from_rgb8(0xF5, 0x9E, 0x0B)
}

pub fn light() -> Color {
    Color::from_rgb8(0xF3, 0xF4, 0xF6)
}

pub fn danger() -> Color {
    Color::from_rgb8(0xEF, 0x44, 0x44)
}

/// Text color for copy on dark surfaces.
pub fn on_dark() -> Color {
    Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.9)
}

/// Muted variant of the body text color.
pub fn muted() -> Color {
    Color {
        a: 0.7,
        ..secondary()
    }
}

/// Application theme built from the brand palette.
pub fn theme() -> Theme {
    Theme::custom(
        "Osuele".to_string(),
        Palette {
            background: light(),
            text: secondary(),
            primary: primary(),
            success: Color::from_rgb8(0x16, 0xA3, 0x4A),
            danger: danger(),
        },
    )
}

/// Filter chip: amber when selected, white otherwise.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match (selected, status) {
            (true, _) => accent(),
            (false, button::Status::Hovered) => Color::from_rgb8(0xE5, 0xE7, 0xEB),
            (false, _) => Color::WHITE,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if selected { Color::WHITE } else { secondary() },
            border: border::rounded(999.0),
            shadow: Shadow::default(),
        }
    }
}

/// Header navigation entry: accent underline color when active.
pub fn nav_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: None,
        text_color: match (active, status) {
            (true, _) => accent(),
            (false, button::Status::Hovered) => accent(),
            (false, _) => primary(),
        },
        border: border::rounded(4.0),
        shadow: Shadow::default(),
    }
}

/// Primary call-to-action button.
pub fn cta(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.9,
            ..primary()
        },
        _ => primary(),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: border::rounded(6.0),
        shadow: Shadow::default(),
    }
}

/// Translucent round control used inside the lightbox (close, arrows).
pub fn overlay_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.2,
        _ => 0.1,
    };
    button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, alpha))),
        text_color: Color::WHITE,
        border: border::rounded(999.0),
        shadow: Shadow::default(),
    }
}

/// White content card with a soft shadow.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: border::rounded(12.0),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Neutral block shown while an image is still loading.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb8(0xE5, 0xE7, 0xEB))),
        border: border::rounded(8.0),
        ..container::Style::default()
    }
}

/// Deterministic fallback block for missing or broken images.
pub fn fallback(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb8(0xD1, 0xD5, 0xDB))),
        text_color: Some(muted()),
        border: border::rounded(8.0),
        ..container::Style::default()
    }
}

/// Header bar; picks up a drop shadow once the page has scrolled.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color::WHITE)),
        shadow: if scrolled {
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 10.0,
            }
        } else {
            Shadow::default()
        },
        ..container::Style::default()
    }
}

/// Dark footer band.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(primary())),
        text_color: Some(on_dark()),
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind modal overlays.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.9,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}
