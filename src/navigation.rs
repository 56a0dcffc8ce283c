use crate::screen::add_task::AddTaskForm;
use crate::screen::task_detail::TaskDetail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    AddTask(AddTaskForm),
    TaskDetail(TaskDetail),
}

impl Route {
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home => "app-title",
            Route::AddTask(_) => "new-task-title",
            Route::TaskDetail(_) => "task-detail-title",
        }
    }
}

/// A stack of routes rooted at [`Route::Home`]. The root is never popped.
#[derive(Debug)]
pub struct Navigator {
    root: Route,
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            root: Route::Home,
            stack: Vec::new(),
        }
    }
}

impl Navigator {
    pub fn push(&mut self, route: Route) {
        tracing::debug!(route = route.title_key(), "navigate");
        self.stack.push(route);
    }

    /// Pops the top route. Returns `false` when already at the root.
    pub fn back(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Route {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    #[test]
    fn starts_at_home() {
        let navigator = Navigator::default();

        assert_eq!(navigator.current(), &Route::Home);
        assert!(!navigator.can_go_back());
    }

    #[test]
    fn back_never_pops_the_root() {
        let mut navigator = Navigator::default();
        navigator.push(Route::AddTask(AddTaskForm::default()));

        assert!(navigator.back());
        assert!(!navigator.back());
        assert_eq!(navigator.current(), &Route::Home);
    }

    #[test]
    fn current_is_the_most_recent_route() {
        let mut navigator = Navigator::default();
        let id = TaskId::from("42");
        navigator.push(Route::TaskDetail(TaskDetail::new(id.clone())));

        assert_eq!(navigator.current().title_key(), "task-detail-title");
        match navigator.current_mut() {
            Route::TaskDetail(detail) => assert_eq!(detail.task_id(), &id),
            other => panic!("unexpected route {other:?}"),
        }
    }
}
