use iced::widget::{Text, text};
use iced::{Center, Font};

pub fn icon(glyph: &'static str, size: f32) -> Text<'static> {
    text(glyph)
        .size(size)
        .align_x(Center)
        .shaping(text::Shaping::Advanced)
}

pub fn check_mark() -> Text<'static> {
    icon("✓", 14.0).font(Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    })
}

pub fn chevron() -> Text<'static> {
    icon("›", 22.0).style(super::styles::faded)
}

pub fn clipboard() -> Text<'static> {
    icon("📋", 48.0)
}

pub fn plus_icon() -> Text<'static> {
    icon("+", 28.0)
}
