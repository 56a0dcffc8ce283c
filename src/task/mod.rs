pub mod view;

use std::fmt;

use iced::Element;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::app::Message;
use crate::state::Reducer;

/// Longest title accepted, in characters.
pub const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        TaskId(Uuid::new_v4().to_string())
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_owned())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("task title cannot be empty")]
    Empty,
    #[error("task title must be at most {MAX_TITLE_LEN} characters")]
    TooLong,
}

/// A trimmed, non-empty title of at most [`MAX_TITLE_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn parse(raw: &str) -> Result<Self, TitleError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }
        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(TitleError::TooLong);
        }

        Ok(Title(trimmed.to_owned()))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: Title) -> Self {
        Task {
            id,
            title: title.into_string(),
            completed: false,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::task_view(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add { id: TaskId, title: Title },
    Toggle { id: TaskId },
    Delete { id: TaskId },
    Update { id: TaskId, title: Title },
}

impl TaskAction {
    /// Builds an `Add` with a freshly generated id.
    pub fn add(title: Title) -> Self {
        TaskAction::Add {
            id: TaskId::generate(),
            title,
        }
    }
}

/// Tasks in insertion order. Persisted as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.iter().find(|task| &task.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.iter().filter(|task| !task.completed)
    }

    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.iter().filter(|task| task.completed)
    }

    pub fn remaining(&self) -> usize {
        self.pending().count()
    }

    fn with_task(&self, id: &TaskId, edit: impl FnOnce(&mut Task)) -> Self {
        let mut next = self.clone();
        if let Some(task) = next.tasks.iter_mut().find(|task| &task.id == id) {
            edit(task);
        }
        next
    }
}

impl Reducer for TaskList {
    type Action = TaskAction;

    fn reduce(&self, action: TaskAction) -> Self {
        match action {
            TaskAction::Add { id, title } => {
                if self.contains(&id) {
                    tracing::debug!(%id, "ignoring add with duplicate id");
                    return self.clone();
                }
                let mut next = self.clone();
                next.tasks.push(Task::new(id, title));
                next
            }
            TaskAction::Toggle { id } => self.with_task(&id, |task| {
                task.completed = !task.completed;
            }),
            TaskAction::Delete { id } => TaskList {
                tasks: self
                    .tasks
                    .iter()
                    .filter(|task| task.id != id)
                    .cloned()
                    .collect(),
            },
            TaskAction::Update { id, title } => self.with_task(&id, |task| {
                task.title = title.into_string();
            }),
        }
    }
}
