use shared::{domain::MovieId, protocol::MovieRecord};
use tracing::debug;

use crate::{
    draft::{DraftField, MovieDraft},
    error::{CatalogError, ValidationError},
    store::CatalogStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Editing { target: Option<MovieId> },
}

/// What a submit intent produced. The session stays open exactly when the
/// draft still needs the user's attention.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Persisted and the list re-fetched; the editor closed.
    Saved,
    /// Persisted, but the follow-up fetch failed; the editor closed and the
    /// local list lags the service until the next refresh.
    SavedListStale(CatalogError),
    /// Rejected locally; no request was issued and the draft is kept.
    Rejected(ValidationError),
    /// The service rejected or never received the save; the draft is kept.
    SaveFailed(CatalogError),
    /// Submit intent while no editor was open.
    NotEditing,
}

/// Tracks whether the user is idle, creating, or editing an existing record,
/// and owns the draft being worked on. Mediates between the form and the
/// store.
#[derive(Debug)]
pub struct EditingSession {
    state: EditorState,
    draft: MovieDraft,
}

impl EditingSession {
    pub fn new() -> Self {
        Self {
            state: EditorState::Idle,
            draft: MovieDraft::default(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The draft the form inputs should currently display.
    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    /// Opens an empty form for a new record.
    pub fn open_create(&mut self) {
        self.state = EditorState::Editing { target: None };
        self.draft = MovieDraft::from_record(None);
    }

    /// Opens a form pre-filled from `record`, targeting its id.
    pub fn open_edit(&mut self, record: &MovieRecord) {
        self.state = EditorState::Editing {
            target: Some(record.id),
        };
        self.draft = MovieDraft::from_record(Some(record));
    }

    /// Discards the draft with no side effect.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Replaces one field of the draft; ignored while idle.
    pub fn change_field(&mut self, field: DraftField, value: &str) {
        if self.is_editing() {
            self.draft.set(field, value);
        }
    }

    /// Validates the draft and pushes it through the store. See
    /// [`SubmitOutcome`] for how each result leaves the session.
    pub async fn submit(&mut self, store: &mut CatalogStore) -> SubmitOutcome {
        let EditorState::Editing { target } = self.state else {
            return SubmitOutcome::NotEditing;
        };
        let payload = match self.draft.validate() {
            Ok(payload) => payload,
            Err(err) => return SubmitOutcome::Rejected(err),
        };
        match store.submit(target, &payload).await {
            Ok(()) => {
                self.reset();
                SubmitOutcome::Saved
            }
            Err(err @ CatalogError::Save(_)) => SubmitOutcome::SaveFailed(err),
            Err(err) => {
                // The mutation was acknowledged; only the re-fetch failed.
                self.reset();
                SubmitOutcome::SavedListStale(err)
            }
        }
    }

    fn reset(&mut self) {
        self.state = EditorState::Idle;
        self.draft = MovieDraft::default();
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-step guard in front of [`CatalogStore::remove`]. A delete is armed
/// for one named record and fires only on an explicit confirmation; any
/// other response disarms it.
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    pending: Option<MovieRecord>,
}

impl DeleteConfirmation {
    /// Arms the guard for `record` and returns the prompt to show.
    pub fn request(&mut self, record: &MovieRecord) -> String {
        debug!(id = record.id.0, "delete requested");
        self.pending = Some(record.clone());
        format!("Really delete \"{}\"?", record.title)
    }

    /// The record a confirmation would currently delete, if any.
    pub fn pending(&self) -> Option<&MovieRecord> {
        self.pending.as_ref()
    }

    /// Declines the armed request; nothing is sent.
    pub fn deny(&mut self) {
        self.pending = None;
    }

    /// Fires the armed delete, or returns `None` when nothing is armed. The
    /// guard disarms either way.
    pub async fn confirm(
        &mut self,
        store: &mut CatalogStore,
    ) -> Option<Result<(), CatalogError>> {
        let record = self.pending.take()?;
        Some(store.remove(record.id).await)
    }
}
