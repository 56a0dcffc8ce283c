use iced::widget::{button, container, text, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors;

pub fn subtle(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors::TEXT_SECONDARY),
    }
}

pub fn faded(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors::TEXT_TERTIARY),
    }
}

pub fn tinted(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme| text::Style { color: Some(color) }
}

pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::BACKGROUND.into()),
        text_color: Some(colors::TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::SURFACE.into()),
        border: Border {
            color: colors::SURFACE,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.08,
                ..colors::TEXT_PRIMARY
            },
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Translucent pill behind the detail screen's status label.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Color { a: 0.19, ..color }.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn checkbox(checked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| {
        let (background, border) = if checked {
            (Some(Background::Color(colors::PRIMARY)), colors::PRIMARY)
        } else {
            (None, colors::BORDER)
        };

        button::Style {
            background,
            text_color: colors::TEXT_INVERSE,
            border: Border {
                color: border,
                width: 2.0,
                radius: 12.0.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Filled button, used for the add button and the "+" action.
pub fn filled(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Pressed | button::Status::Hovered => colors::PRIMARY_DARK,
        button::Status::Disabled => colors::DISABLED,
        button::Status::Active => colors::PRIMARY,
    };

    button::Style {
        background: Some(background.into()),
        text_color: colors::TEXT_INVERSE,
        border: Border {
            color: background,
            width: 0.0,
            radius: 12.0.into(),
        },
        ..button::primary(theme, status)
    }
}

/// Outlined button in `color` that fills in while pressed.
pub fn outlined(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let pressed = matches!(status, button::Status::Pressed | button::Status::Hovered);

        button::Style {
            background: pressed.then(|| Background::Color(Color { a: 0.9, ..color })),
            text_color: if pressed { colors::TEXT_INVERSE } else { color },
            border: Border {
                color,
                width: 1.5,
                radius: 12.0.into(),
            },
            ..button::Style::default()
        }
    }
}

pub fn input(focused_border: Color) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let default_style = text_input::default(theme, status);
        let border = match status {
            text_input::Status::Focused { .. } => focused_border,
            _ => colors::BORDER_LIGHT,
        };

        text_input::Style {
            background: colors::SURFACE.into(),
            border: Border {
                color: border,
                width: 1.0,
                radius: 12.0.into(),
            },
            icon: default_style.icon,
            placeholder: colors::TEXT_TERTIARY,
            value: colors::TEXT_PRIMARY,
            selection: default_style.selection,
        }
    }
}
