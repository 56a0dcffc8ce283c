use iced::widget::{button, container, mouse_area, row, text};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::ui::icons::{check_mark, chevron};
use crate::ui::{colors, styles};

use super::Task;

/// One row of the home list: a round check toggle, the title and a chevron.
/// Pressing anywhere but the toggle opens the task.
pub fn task_view(task: &Task) -> Element<'_, Message> {
    let toggle_content: Element<'_, Message> = if task.completed() {
        check_mark().into()
    } else {
        text("").into()
    };

    let toggle = button(
        container(toggle_content)
            .width(Fill)
            .height(Fill)
            .align_x(Center)
            .align_y(Center),
    )
    .on_press(Message::ToggleTask(task.id().clone()))
    .padding(0)
    .width(24)
    .height(24)
    .style(styles::checkbox(task.completed()));

    let title = text(task.title())
        .size(16)
        .width(Fill)
        .wrapping(text::Wrapping::None)
        .shaping(text::Shaping::Advanced)
        .style(styles::tinted(if task.completed() {
            colors::TEXT_TERTIARY
        } else {
            colors::TEXT_PRIMARY
        }));

    let open = mouse_area(row![title, chevron()].spacing(8).align_y(Center))
        .on_press(Message::OpenTask(task.id().clone()));

    container(row![toggle, open].spacing(12).align_y(Center))
        .padding([14, 16])
        .width(Fill)
        .style(styles::card)
        .into()
}
