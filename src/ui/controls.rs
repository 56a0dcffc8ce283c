use iced::widget::{button, row, text};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::i18n::{Language, language_toggle_label, translate_tasks_left};
use crate::task::TaskList;

use super::styles::subtle;

pub fn view_controls<'a>(tasks: &TaskList, language: Language) -> Element<'a, Message> {
    row![
        text(translate_tasks_left(tasks.remaining()))
            .size(13)
            .style(subtle)
            .width(Fill),
        button(text(language_toggle_label(language)).size(12))
            .on_press(Message::LanguageChanged(language.other()))
            .padding(iced::Padding {
                top: 5.0,
                left: 8.0,
                bottom: 5.0,
                right: 8.0,
            })
            .style(button::text),
    ]
    .spacing(20)
    .align_y(Center)
    .into()
}
