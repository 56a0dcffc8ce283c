use iced::widget::{button, column, text, text_input};
use iced::{Element, Fill};

use crate::app::Message;
use crate::i18n::{translate, translate_title_too_long};
use crate::task::{MAX_TITLE_LEN, Title, TitleError};
use crate::ui::{colors, styles};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTaskForm {
    draft: String,
    error: Option<TitleError>,
}

impl AddTaskForm {
    pub const INPUT_ID: &'static str = "new-task";

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn error(&self) -> Option<TitleError> {
        self.error
    }

    /// Replaces the draft, cutting it at the title length limit.
    pub fn set_draft(&mut self, value: String) {
        self.draft = truncate_chars(value, MAX_TITLE_LEN);
        self.error = None;
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn submit(&mut self) -> Result<Title, TitleError> {
        let parsed = Title::parse(&self.draft);
        self.error = parsed.as_ref().err().copied();
        parsed
    }
}

pub(crate) fn truncate_chars(mut value: String, max: usize) -> String {
    if let Some((index, _)) = value.char_indices().nth(max) {
        value.truncate(index);
    }
    value
}

pub(crate) fn error_message(error: TitleError, empty_key: &str) -> String {
    match error {
        TitleError::Empty => translate(empty_key),
        TitleError::TooLong => translate_title_too_long(),
    }
}

pub fn view(form: &AddTaskForm) -> Element<'_, Message> {
    let input = text_input(&translate("add-task-placeholder"), form.draft())
        .id(AddTaskForm::INPUT_ID)
        .on_input(Message::DraftChanged)
        .on_submit(Message::SubmitDraft)
        .padding([14, 16])
        .size(16)
        .style(styles::input(colors::PRIMARY));

    let submit = button(
        text(translate("add-task-button"))
            .size(16)
            .width(Fill)
            .align_x(iced::Center),
    )
    .on_press_maybe(form.can_submit().then_some(Message::SubmitDraft))
    .padding([16, 0])
    .width(Fill)
    .style(styles::filled);

    let mut content = column![
        text(translate("add-task-label")).size(16),
        input,
    ]
    .spacing(12);

    if let Some(error) = form.error() {
        content = content.push(
            text(format!(
                "{}: {}",
                translate("alert-oops"),
                error_message(error, "title-required")
            ))
            .size(14)
            .style(styles::tinted(colors::ERROR)),
        );
    }

    content.push(submit).padding([32, 20]).into()
}
