use iced::widget::{button, column, container, row, text, text_input};
use iced::{Color, Element, Fill, Font};

use crate::app::Message;
use crate::i18n::{translate, translate_delete_confirm};
use crate::task::{MAX_TITLE_LEN, Task, TaskId, TaskList, Title, TitleError};
use crate::ui::{colors, styles};

use super::add_task::{error_message, truncate_chars};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetail {
    task_id: TaskId,
    editing: Option<String>,
    error: Option<TitleError>,
    confirming_delete: bool,
}

impl TaskDetail {
    pub const INPUT_ID: &'static str = "edit-task";

    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            editing: None,
            error: None,
            confirming_delete: false,
        }
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn error(&self) -> Option<TitleError> {
        self.error
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub fn start_editing(&mut self, current_title: &str) {
        self.editing = Some(current_title.to_owned());
        self.error = None;
        self.confirming_delete = false;
    }

    pub fn set_edit(&mut self, value: String) {
        if self.editing.is_some() {
            self.editing = Some(truncate_chars(value, MAX_TITLE_LEN));
            self.error = None;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.error = None;
    }

    /// Validates the edited title. Edit mode ends only when it is valid.
    pub fn finish_edit(&mut self) -> Option<Title> {
        let parsed = Title::parse(self.editing.as_deref()?);

        match parsed {
            Ok(title) => {
                self.editing = None;
                self.error = None;
                Some(title)
            }
            Err(error) => {
                self.error = Some(error);
                None
            }
        }
    }

    pub fn request_delete(&mut self) {
        self.confirming_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }
}

pub fn view<'a>(detail: &'a TaskDetail, tasks: &'a TaskList) -> Element<'a, Message> {
    let Some(task) = tasks.get(detail.task_id()) else {
        return container(text(translate("task-not-found")).size(16).style(styles::subtle))
            .center(Fill)
            .into();
    };

    let (badge_label, badge_color) = if task.completed() {
        ("status-completed", colors::SUCCESS)
    } else {
        ("status-pending", colors::WARNING)
    };

    let badge = container(
        text(translate(badge_label))
            .size(13)
            .font(semibold())
            .style(styles::tinted(badge_color)),
    )
    .padding([6, 12])
    .style(styles::badge(badge_color));

    let mut content = column![badge].spacing(20);

    content = match detail.editing() {
        Some(value) => content.push(
            text_input("", value)
                .id(TaskDetail::INPUT_ID)
                .on_input(Message::EditChanged)
                .on_submit(Message::SaveEdit)
                .padding([14, 16])
                .size(18)
                .style(styles::input(colors::PRIMARY)),
        ),
        None => content.push(
            text(task.title())
                .size(24)
                .font(bold())
                .shaping(text::Shaping::Advanced)
                .style(styles::tinted(if task.completed() {
                    colors::TEXT_TERTIARY
                } else {
                    colors::TEXT_PRIMARY
                })),
        ),
    };

    if let Some(error) = detail.error() {
        content = content.push(
            text(format!(
                "{}: {}",
                translate("alert-oops"),
                error_message(error, "title-empty")
            ))
            .size(14)
            .style(styles::tinted(colors::ERROR)),
        );
    }

    content
        .push(actions(detail, task))
        .padding([24, 20])
        .into()
}

fn actions<'a>(detail: &TaskDetail, task: &'a Task) -> Element<'a, Message> {
    if detail.editing().is_some() {
        return column![
            action_button("action-save", colors::PRIMARY, Message::SaveEdit),
            action_button("action-cancel", colors::TEXT_SECONDARY, Message::CancelEdit),
        ]
        .spacing(12)
        .into();
    }

    if detail.is_confirming_delete() {
        return container(
            column![
                text(translate("delete-title")).size(16).font(semibold()),
                text(translate_delete_confirm(task.title()))
                    .shaping(text::Shaping::Advanced)
                    .style(styles::subtle),
                row![
                    action_button("action-cancel", colors::TEXT_SECONDARY, Message::CancelDelete),
                    action_button("action-delete", colors::ERROR, Message::ConfirmDelete),
                ]
                .spacing(12),
            ]
            .spacing(12),
        )
        .padding(16)
        .style(styles::card)
        .into();
    }

    let toggle_label = if task.completed() {
        "action-mark-pending"
    } else {
        "action-mark-done"
    };

    column![
        action_button(
            toggle_label,
            colors::PRIMARY,
            Message::ToggleTask(task.id().clone())
        ),
        action_button("action-edit", colors::ACCENT, Message::StartEditing),
        action_button("action-delete", colors::ERROR, Message::RequestDelete),
    ]
    .spacing(12)
    .into()
}

fn action_button<'a>(key: &str, color: Color, message: Message) -> Element<'a, Message> {
    button(
        text(translate(key))
            .size(15)
            .font(semibold())
            .width(Fill)
            .align_x(iced::Center),
    )
    .on_press(message)
    .padding([14, 0])
    .width(Fill)
    .style(styles::outlined(color))
    .into()
}

fn semibold() -> Font {
    Font {
        weight: iced::font::Weight::Semibold,
        ..Font::DEFAULT
    }
}

fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> TaskDetail {
        TaskDetail::new(TaskId::from("1"))
    }

    #[test]
    fn valid_edit_ends_edit_mode() {
        let mut detail = detail();
        detail.start_editing("old");
        detail.set_edit("  new title ".into());

        let title = detail.finish_edit();

        assert_eq!(title.map(Title::into_string), Some("new title".into()));
        assert_eq!(detail.editing(), None);
    }

    #[test]
    fn empty_edit_stays_in_edit_mode() {
        let mut detail = detail();
        detail.start_editing("old");
        detail.set_edit("   ".into());

        assert_eq!(detail.finish_edit(), None);
        assert_eq!(detail.error(), Some(TitleError::Empty));
        assert_eq!(detail.editing(), Some("   "));
    }

    #[test]
    fn finishing_without_editing_is_a_no_op() {
        let mut detail = detail();

        assert_eq!(detail.finish_edit(), None);
        assert_eq!(detail.error(), None);
    }

    #[test]
    fn cancel_discards_the_edit() {
        let mut detail = detail();
        detail.start_editing("old");
        detail.set_edit("changed".into());
        detail.cancel_edit();

        assert_eq!(detail.editing(), None);
        detail.set_edit("ignored".into());
        assert_eq!(detail.editing(), None);
    }

    #[test]
    fn editing_cancels_a_pending_delete() {
        let mut detail = detail();
        detail.request_delete();
        assert!(detail.is_confirming_delete());

        detail.start_editing("old");
        assert!(!detail.is_confirming_delete());
    }
}
