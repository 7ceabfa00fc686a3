//! The list-and-edit controller.
//!
//! Owns everything the screen shows: the cached record list, the form draft,
//! the validation messages, the record being edited and the transient
//! success notice. Every mutation goes through the store and is followed by
//! a full refetch of the list; there is no local patching.
//!
//! The controller is driven from a single task through `&mut self`, so no
//! locking is involved. Nothing guards against double submits: two submits
//! in a row issue two requests.

use crate::app::store::RestaurantStore;
use crate::domain::{validate_draft, Field, FormErrors, Restaurant, RestaurantDraft, RestaurantId};

pub const LOAD_FAILED: &str = "Failed to load restaurants";
pub const SAVE_FAILED: &str = "Failed to save restaurant";
pub const DELETE_FAILED: &str = "Failed to delete restaurant";
pub const ADDED: &str = "Restaurant added successfully!";
pub const UPDATED: &str = "Restaurant updated successfully!";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this restaurant?";

/// Which screen the controller is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Idle,
    CreateOpen,
    EditOpen(RestaurantId),
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A fixed answer, for non-interactive callers.
impl Confirm for bool {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No form was open.
    NotOpen,
    /// Validation failed; nothing was sent.
    Invalid,
    /// The record as echoed by the backend, if it echoed one.
    Created(Option<Restaurant>),
    Updated(Option<Restaurant>),
    /// The backend call failed; the form stays open with the draft intact.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}

pub struct Controller<S> {
    store: S,
    records: Vec<Restaurant>,
    draft: RestaurantDraft,
    errors: FormErrors,
    mode: Mode,
    notice: Option<String>,
    mounted: bool,
}

impl<S: RestaurantStore> Controller<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
            draft: RestaurantDraft::default(),
            errors: FormErrors::default(),
            mode: Mode::Idle,
            notice: None,
            mounted: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    pub fn draft(&self) -> &RestaurantDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn edit_target(&self) -> Option<&RestaurantId> {
        match &self.mode {
            Mode::EditOpen(id) => Some(id),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_form_open(&self) -> bool {
        self.mode != Mode::Idle
    }

    /// Loads the list the first time the screen is shown. Later calls do nothing.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.refresh().await;
    }

    /// Replaces the cached list with the server's. On failure the previous
    /// list is kept and the general error is set.
    pub async fn refresh(&mut self) -> bool {
        match self.store.list_all().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "restaurant list refreshed");
                self.records = records;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load restaurants");
                self.errors.set_general(LOAD_FAILED);
                false
            }
        }
    }

    pub fn open_create(&mut self) {
        self.mode = Mode::CreateOpen;
        self.draft = RestaurantDraft::default();
        self.errors.clear();
        self.notice = None;
    }

    /// Opens the form on a cached record. Returns `false` for an unknown id.
    pub fn open_edit(&mut self, id: &RestaurantId) -> bool {
        let Some(record) = self.records.iter().find(|r| &r.id == id) else {
            return false;
        };
        self.draft = RestaurantDraft::from_record(record);
        self.mode = Mode::EditOpen(record.id.clone());
        self.errors.clear();
        self.notice = None;
        true
    }

    /// Applies a keystroke-level edit. Ignored while no form is open.
    pub fn set_field(&mut self, field: Field, value: &str) {
        if !self.is_form_open() {
            return;
        }
        self.draft.set(field, value);
        self.errors.clear_field(field);
        self.notice = None;
    }

    pub fn cancel(&mut self) {
        self.close_form();
        self.errors.clear();
        self.notice = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn close_form(&mut self) {
        self.mode = Mode::Idle;
        self.draft = RestaurantDraft::default();
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.is_form_open() {
            return SubmitOutcome::NotOpen;
        }

        let violations = validate_draft(&self.draft);
        self.errors = FormErrors::from_violations(&violations);
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "draft failed validation");
            return SubmitOutcome::Invalid;
        }

        let outcome = match &self.mode {
            Mode::EditOpen(id) => match self.store.update(id, &self.draft).await {
                Ok(record) => {
                    tracing::info!(id = %id, "restaurant updated");
                    self.notice = Some(UPDATED.to_string());
                    SubmitOutcome::Updated(record)
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "failed to update restaurant");
                    SubmitOutcome::Failed
                }
            },
            _ => match self.store.create(&self.draft).await {
                Ok(record) => {
                    match &record {
                        Some(r) => tracing::info!(id = %r.id, "restaurant created"),
                        None => tracing::info!("restaurant created (acknowledged without record)"),
                    }
                    self.notice = Some(ADDED.to_string());
                    SubmitOutcome::Created(record)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to create restaurant");
                    SubmitOutcome::Failed
                }
            },
        };

        if outcome == SubmitOutcome::Failed {
            self.errors.set_general(SAVE_FAILED);
            return outcome;
        }

        self.refresh().await;
        self.close_form();
        self.errors.clear_fields();
        outcome
    }

    /// Deletes a record after the user confirms, then refetches the list.
    pub async fn delete(&mut self, id: &RestaurantId, confirm: &mut impl Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Declined;
        }
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(id = %id, "restaurant deleted");
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "failed to delete restaurant");
                self.errors.set_general(DELETE_FAILED);
                DeleteOutcome::Failed
            }
        }
    }
}
