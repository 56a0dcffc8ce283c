use std::sync::Arc;

use iced::keyboard::{self, key};
use iced::widget::{button, column, container, operation, row, text};
use iced::{Center, Element, Fill, Subscription, Task as Command, window};

use crate::config::Config;
use crate::i18n::{Language, translate};
use crate::navigation::{Navigator, Route};
use crate::screen::add_task::{self, AddTaskForm};
use crate::screen::task_detail::{self, TaskDetail};
use crate::screen::home;
use crate::state::PersistedReducer;
use crate::state::persistence::{self, LoadError, SaveError};
use crate::storage::{self, MemoryStore, SharedStore, StorageError};
use crate::task::{TaskAction, TaskId, TaskList};
use crate::ui::{colors, styles};

#[derive(Debug)]
pub struct Tasks {
    config: Config,
    store: Option<SharedStore>,
    tasks: PersistedReducer<TaskList>,
    navigator: Navigator,
    language: Language,
    closing: Option<window::Id>,
}

#[derive(Debug, Clone)]
pub enum Message {
    StorageOpened(Result<SharedStore, StorageError>),
    Loaded(Result<Option<TaskList>, LoadError>),
    Saved(Result<(), SaveError>),
    CooldownElapsed,
    CloseRequested(window::Id),
    OpenAddTask,
    OpenTask(TaskId),
    Back,
    ToggleTask(TaskId),
    DraftChanged(String),
    SubmitDraft,
    StartEditing,
    EditChanged(String),
    SaveEdit,
    CancelEdit,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    TabPressed { shift: bool },
    ToggleFullscreen(window::Mode),
    LanguageChanged(Language),
}

impl Tasks {
    pub fn new(config: Config) -> (Self, Command<Message>) {
        tracing::info!(
            backend = ?config.storage.backend,
            data_dir = %config.storage.data_dir.display(),
            key = %config.storage.key,
            "opening task storage"
        );

        let language = config.language.unwrap_or_default();
        let tasks = PersistedReducer::new(TaskList::default(), config.storage.key.clone());
        let open = Command::perform(
            storage::open(config.storage.clone()),
            Message::StorageOpened,
        );

        (
            Self {
                config,
                store: None,
                tasks,
                navigator: Navigator::default(),
                language,
                closing: None,
            },
            open,
        )
    }

    pub fn title(&self) -> String {
        let unsaved = self.tasks.is_dirty() || self.tasks.is_saving();

        format!(
            "{}{}",
            translate(self.navigator.current().title_key()),
            if unsaved { "..." } else { "" }
        )
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        let command = match message {
            Message::StorageOpened(Ok(store)) => {
                self.store = Some(store.clone());
                Command::perform(
                    persistence::load(store, self.config.storage.key.clone()),
                    Message::Loaded,
                )
            }
            Message::StorageOpened(Err(error)) => {
                tracing::warn!(%error, "storage unavailable, changes will not survive a restart");
                self.store = Some(Arc::new(MemoryStore::new()));
                self.tasks.hydrate(Err(LoadError::Storage(error)));
                Command::none()
            }
            Message::Loaded(result) => {
                self.tasks.hydrate(result);
                tracing::info!(tasks = self.tasks.state().len(), "tasks ready");
                Command::none()
            }
            Message::Saved(result) => {
                self.tasks.write_finished(result);

                if self.closing.is_some() {
                    self.flush_and_close()
                } else {
                    Command::perform(
                        persistence::cooldown(self.config.storage.save_delay),
                        |()| Message::CooldownElapsed,
                    )
                }
            }
            Message::CooldownElapsed => {
                self.tasks.cooldown_elapsed();
                Command::none()
            }
            Message::CloseRequested(id) => {
                tracing::debug!("close requested, flushing tasks");
                self.closing = Some(id);
                self.flush_and_close()
            }
            Message::OpenAddTask => {
                self.navigator.push(Route::AddTask(AddTaskForm::default()));
                operation::focus(AddTaskForm::INPUT_ID)
            }
            Message::OpenTask(id) => {
                self.navigator.push(Route::TaskDetail(TaskDetail::new(id)));
                Command::none()
            }
            Message::Back => {
                self.navigator.back();
                Command::none()
            }
            Message::ToggleTask(id) => {
                self.tasks.dispatch(TaskAction::Toggle { id });
                Command::none()
            }
            Message::DraftChanged(value) => {
                if let Route::AddTask(form) = self.navigator.current_mut() {
                    form.set_draft(value);
                }
                Command::none()
            }
            Message::SubmitDraft => {
                let submitted = match self.navigator.current_mut() {
                    Route::AddTask(form) => form.submit().ok(),
                    _ => None,
                };

                if let Some(title) = submitted {
                    self.tasks.dispatch(TaskAction::add(title));
                    self.navigator.back();
                }
                Command::none()
            }
            Message::StartEditing => {
                let tasks = self.tasks.state();
                match self.navigator.current_mut() {
                    Route::TaskDetail(detail) => match tasks.get(detail.task_id()) {
                        Some(task) => {
                            detail.start_editing(task.title());
                            Command::batch(vec![
                                operation::focus(TaskDetail::INPUT_ID),
                                operation::select_all(TaskDetail::INPUT_ID),
                            ])
                        }
                        None => Command::none(),
                    },
                    _ => Command::none(),
                }
            }
            Message::EditChanged(value) => {
                if let Route::TaskDetail(detail) = self.navigator.current_mut() {
                    detail.set_edit(value);
                }
                Command::none()
            }
            Message::SaveEdit => {
                let edited = match self.navigator.current_mut() {
                    Route::TaskDetail(detail) => detail
                        .finish_edit()
                        .map(|title| (detail.task_id().clone(), title)),
                    _ => None,
                };

                if let Some((id, title)) = edited {
                    self.tasks.dispatch(TaskAction::Update { id, title });
                }
                Command::none()
            }
            Message::CancelEdit => {
                if let Route::TaskDetail(detail) = self.navigator.current_mut() {
                    detail.cancel_edit();
                }
                Command::none()
            }
            Message::RequestDelete => {
                if let Route::TaskDetail(detail) = self.navigator.current_mut() {
                    detail.request_delete();
                }
                Command::none()
            }
            Message::CancelDelete => {
                if let Route::TaskDetail(detail) = self.navigator.current_mut() {
                    detail.cancel_delete();
                }
                Command::none()
            }
            Message::ConfirmDelete => {
                let confirmed = match self.navigator.current() {
                    Route::TaskDetail(detail) if detail.is_confirming_delete() => {
                        Some(detail.task_id().clone())
                    }
                    _ => None,
                };

                if let Some(id) = confirmed {
                    self.tasks.dispatch(TaskAction::Delete { id });
                    self.navigator.back();
                }
                Command::none()
            }
            Message::TabPressed { shift } => {
                if shift {
                    operation::focus_previous()
                } else {
                    operation::focus_next()
                }
            }
            Message::ToggleFullscreen(mode) => {
                window::latest().and_then(move |window| window::set_mode(window, mode))
            }
            Message::LanguageChanged(language) => {
                self.language = language;
                crate::i18n::update_language(language);
                Command::none()
            }
        };

        Command::batch(vec![command, self.persist()])
    }

    /// Issues a write when the persisted reducer has one due.
    fn persist(&mut self) -> Command<Message> {
        if self.closing.is_some() {
            return Command::none();
        }
        match self.tasks.next_write() {
            Some(snapshot) => self.save(snapshot),
            None => Command::none(),
        }
    }

    /// Writes whatever is still unsaved, ignoring the cooldown, and closes
    /// the window once nothing is left in flight.
    fn flush_and_close(&mut self) -> Command<Message> {
        let Some(id) = self.closing else {
            return Command::none();
        };

        if self.tasks.is_saving() {
            return Command::none();
        }

        match self.tasks.final_write() {
            Some(snapshot) => self.save(snapshot),
            None => window::close(id),
        }
    }

    fn save(&self, snapshot: TaskList) -> Command<Message> {
        let Some(store) = self.store.clone() else {
            return Command::none();
        };

        Command::perform(
            persistence::save(store, self.tasks.key().to_owned(), snapshot),
            Message::Saved,
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tasks = self.tasks.state();

        let screen = match self.navigator.current() {
            Route::Home => home::view(tasks, self.tasks.is_hydrated(), self.language),
            Route::AddTask(form) => add_task::view(form),
            Route::TaskDetail(detail) => task_detail::view(detail, tasks),
        };

        let mut content = column![self.header()];

        if self.tasks.last_error().is_some() {
            content = content.push(
                container(
                    text(translate("save-failed"))
                        .size(13)
                        .style(styles::tinted(colors::ERROR)),
                )
                .padding([4, 20]),
            );
        }

        container(content.push(screen).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(styles::screen)
            .into()
    }

    fn header(&self) -> Element<'_, Message> {
        let title = text(translate(self.navigator.current().title_key()))
            .size(17)
            .font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..iced::Font::DEFAULT
            });

        let back: Element<'_, Message> = if self.navigator.can_go_back() {
            button(text(format!("‹ {}", translate("action-back"))).size(15))
                .on_press(Message::Back)
                .padding([4, 0])
                .style(button::text)
                .into()
        } else {
            text("").into()
        };

        container(
            row![
                container(back).width(Fill),
                title,
                container(text("")).width(Fill),
            ]
            .align_y(Center),
        )
        .padding([12, 16])
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().filter_map(|event| {
            let keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key),
                modifiers,
                ..
            } = event
            else {
                return None;
            };

            match (key, modifiers) {
                (key::Named::Tab, _) => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                (key::Named::Escape, _) => Some(Message::Back),
                (key::Named::ArrowUp, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Fullscreen))
                }
                (key::Named::ArrowDown, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Windowed))
                }
                _ => None,
            }
        });

        Subscription::batch(vec![keys, window::close_requests().map(Message::CloseRequested)])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::{StorageBackend, StorageConfig};

    fn config() -> Config {
        Config {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                data_dir: std::env::temp_dir(),
                key: "@tasks".into(),
                save_delay: Duration::ZERO,
            },
            language: Some(Language::English),
        }
    }

    fn hydrated_app() -> Tasks {
        let (mut app, _) = Tasks::new(config());
        let _ = app.update(Message::StorageOpened(Ok(Arc::new(MemoryStore::new()))));
        let _ = app.update(Message::Loaded(Ok(None)));
        app
    }

    fn add(app: &mut Tasks, title: &str) -> TaskId {
        let _ = app.update(Message::OpenAddTask);
        let _ = app.update(Message::DraftChanged(title.into()));
        let _ = app.update(Message::SubmitDraft);
        let _ = app.update(Message::Saved(Ok(())));
        let _ = app.update(Message::CooldownElapsed);
        app.tasks
            .state()
            .iter()
            .last()
            .map(|task| task.id().clone())
            .unwrap()
    }

    #[test]
    fn nothing_is_saved_while_loading() {
        let (mut app, _) = Tasks::new(config());
        let _ = app.update(Message::StorageOpened(Ok(Arc::new(MemoryStore::new()))));
        let _ = app.update(Message::ToggleTask(TaskId::from("x")));

        assert!(!app.tasks.is_hydrated());
        assert!(!app.tasks.is_saving());
    }

    #[test]
    fn submitting_a_draft_adds_and_returns_home() {
        let mut app = hydrated_app();

        let _ = app.update(Message::OpenAddTask);
        let _ = app.update(Message::DraftChanged("  Buy groceries ".into()));
        let _ = app.update(Message::SubmitDraft);

        assert_eq!(app.navigator.current(), &Route::Home);
        let titles: Vec<_> = app.tasks.state().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["Buy groceries"]);
        assert!(app.tasks.is_saving());
        assert!(app.title().ends_with("..."));
    }

    #[test]
    fn empty_draft_stays_on_the_form() {
        let mut app = hydrated_app();

        let _ = app.update(Message::OpenAddTask);
        let _ = app.update(Message::SubmitDraft);

        match app.navigator.current() {
            Route::AddTask(form) => assert!(form.error().is_some()),
            other => panic!("unexpected route {other:?}"),
        }
        assert!(app.tasks.state().is_empty());
    }

    #[test]
    fn detail_edit_and_delete() {
        let mut app = hydrated_app();
        let id = add(&mut app, "draft title");

        let _ = app.update(Message::OpenTask(id.clone()));
        let _ = app.update(Message::StartEditing);
        let _ = app.update(Message::EditChanged("final title".into()));
        let _ = app.update(Message::SaveEdit);
        assert_eq!(app.tasks.state().get(&id).unwrap().title(), "final title");

        let _ = app.update(Message::ConfirmDelete);
        assert!(app.tasks.state().contains(&id), "delete needs confirmation");

        let _ = app.update(Message::RequestDelete);
        let _ = app.update(Message::ConfirmDelete);
        assert!(!app.tasks.state().contains(&id));
        assert_eq!(app.navigator.current(), &Route::Home);
    }

    #[test]
    fn toggle_from_the_list() {
        let mut app = hydrated_app();
        let id = add(&mut app, "walk the dog");

        let _ = app.update(Message::ToggleTask(id.clone()));

        assert!(app.tasks.state().get(&id).unwrap().completed());
        assert_eq!(app.tasks.state().remaining(), 0);
    }

    #[test]
    fn unavailable_storage_still_hydrates() {
        let (mut app, _) = Tasks::new(config());

        let _ = app.update(Message::StorageOpened(Err(StorageError::Io("denied".into()))));

        assert!(app.tasks.is_hydrated());
        assert!(app.store.is_some());
    }

    #[test]
    fn changes_during_the_cooldown_are_written_after_it() {
        let mut app = hydrated_app();
        let _ = app.update(Message::OpenAddTask);
        let _ = app.update(Message::DraftChanged("first".into()));
        let _ = app.update(Message::SubmitDraft);
        let _ = app.update(Message::Saved(Ok(())));

        let id = app.tasks.state().iter().next().unwrap().id().clone();
        let _ = app.update(Message::ToggleTask(id));
        assert!(app.tasks.is_dirty());
        assert!(!app.tasks.is_saving());

        let _ = app.update(Message::CooldownElapsed);
        assert!(app.tasks.is_saving());
        assert!(!app.tasks.is_dirty());
    }

    #[test]
    fn change_made_during_a_write_is_flushed_on_close() {
        let mut app = hydrated_app();
        let _ = app.update(Message::OpenAddTask);
        let _ = app.update(Message::DraftChanged("pack bags".into()));
        let _ = app.update(Message::SubmitDraft);
        assert!(app.tasks.is_saving());

        let id = app.tasks.state().iter().next().unwrap().id().clone();
        let _ = app.update(Message::ToggleTask(id.clone()));
        assert!(app.tasks.is_dirty());

        let window = window::Id::unique();
        let _ = app.update(Message::CloseRequested(window));
        assert_eq!(app.closing, Some(window));
        assert!(app.tasks.is_dirty(), "waits for the write in flight");

        // The first write lands; the toggle goes out right away, without a cooldown.
        let _ = app.update(Message::Saved(Ok(())));
        assert!(app.tasks.is_saving());
        assert!(!app.tasks.is_dirty());
        assert!(app.tasks.state().get(&id).unwrap().completed());

        let _ = app.update(Message::Saved(Ok(())));
        assert!(!app.tasks.is_saving());
        assert!(!app.tasks.is_dirty());
    }

    #[test]
    fn close_without_pending_changes_writes_nothing() {
        let mut app = hydrated_app();

        let _ = app.update(Message::CloseRequested(window::Id::unique()));

        assert!(!app.tasks.is_saving());
        assert!(!app.tasks.is_dirty());
    }
}
