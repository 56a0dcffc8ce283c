use super::persistence::{LoadError, SaveError};
use super::Reducer;

/// A reducer whose state is mirrored into a key-value store.
///
/// The container never performs I/O itself. The owner runs the load, feeds
/// the outcome to [`hydrate`](Self::hydrate), and after every update asks
/// [`next_write`](Self::next_write) whether a snapshot should be written.
///
/// Nothing is handed out for writing until hydration has completed, so the
/// initial (empty) state can never clobber what is already on disk.
///
/// A finished write is followed by a cooldown, during which further changes
/// accumulate and are written as one snapshot once it elapses.
#[derive(Debug)]
pub struct PersistedReducer<S: Reducer> {
    state: S,
    key: String,
    hydrated: bool,
    queued: Vec<S::Action>,
    changed_early: bool,
    dirty: bool,
    saving: bool,
    cooling: bool,
    last_error: Option<SaveError>,
}

impl<S: Reducer> PersistedReducer<S> {
    pub fn new(initial: S, key: impl Into<String>) -> Self {
        Self {
            state: initial,
            key: key.into(),
            hydrated: false,
            queued: Vec::new(),
            changed_early: false,
            dirty: false,
            saving: false,
            cooling: false,
            last_error: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether a write is in flight. The cooldown after it does not count.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn last_error(&self) -> Option<&SaveError> {
        self.last_error.as_ref()
    }

    /// Applies `action` and reports whether the state changed.
    ///
    /// Before hydration only actions that changed the state are kept for
    /// replay, so an action reported as a no-op never touches stored data.
    pub fn dispatch(&mut self, action: S::Action) -> bool {
        let next = self.state.reduce(action.clone());
        if next == self.state {
            return false;
        }
        self.state = next;

        if self.hydrated {
            self.dirty = true;
        } else {
            self.queued.push(action);
            self.changed_early = true;
        }

        true
    }

    /// Completes the one-time load. Later calls are ignored.
    pub fn hydrate(&mut self, loaded: Result<Option<S>, LoadError>) {
        if self.hydrated {
            tracing::debug!(key = %self.key, "already hydrated, ignoring");
            return;
        }

        let queued = std::mem::take(&mut self.queued);

        self.dirty = match loaded {
            Ok(Some(stored)) => {
                tracing::info!(key = %self.key, replayed = queued.len(), "hydrated from storage");
                self.state = queued
                    .into_iter()
                    .fold(stored.clone(), |state, action| state.reduce(action));
                self.state != stored
            }
            Ok(None) => {
                tracing::info!(key = %self.key, "no stored state, starting fresh");
                self.changed_early
            }
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to load stored state");
                self.changed_early
            }
        };

        self.changed_early = false;
        self.hydrated = true;
    }

    /// Snapshot to persist, if one is due. Marks a write as in flight.
    pub fn next_write(&mut self) -> Option<S> {
        if self.cooling {
            return None;
        }
        self.final_write()
    }

    /// Like [`next_write`](Self::next_write) but skips the cooldown. Used to
    /// flush outstanding changes before shutting down.
    pub fn final_write(&mut self) -> Option<S> {
        if !self.hydrated || !self.dirty || self.saving {
            return None;
        }

        self.dirty = false;
        self.saving = true;

        Some(self.state.clone())
    }

    /// Ends the in-flight write and starts the cooldown.
    pub fn write_finished(&mut self, result: Result<(), SaveError>) {
        self.saving = false;
        self.cooling = true;

        match result {
            Ok(()) => self.last_error = None,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to save state");
                self.last_error = Some(error);
            }
        }
    }

    pub fn cooldown_elapsed(&mut self) {
        self.cooling = false;
    }
}
