//! Edit View State

use crate::api::SaveOutcome;
use crate::error::ApiResult;
use crate::models::{Item, ItemField, ItemId};

/// Route parameter value that opens the form on an empty draft
pub const NEW_ROUTE_PARAM: &str = "new";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(ItemId),
}

impl EditMode {
    pub fn from_route_param(param: &str) -> Self {
        if param == NEW_ROUTE_PARAM {
            EditMode::Create
        } else {
            EditMode::Edit(ItemId::parse(param))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Loading,
    Editing,
    /// The item could not be loaded; submitting is blocked
    Unavailable,
    Submitting,
    Saved,
}

#[derive(Debug)]
pub enum EditAction {
    Loaded(ItemId, ApiResult<Item>),
    FieldChanged(ItemField, String),
    SubmitFinished(ApiResult<SaveOutcome>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub mode: EditMode,
    pub item: Item,
    pub phase: EditPhase,
    pub error: Option<String>,
}

impl EditState {
    pub fn new(mode: EditMode) -> Self {
        let phase = match mode {
            EditMode::Create => EditPhase::Editing,
            EditMode::Edit(_) => EditPhase::Loading,
        };
        Self {
            mode,
            item: Item::draft(),
            phase,
            error: None,
        }
    }

    /// Id to fetch on mount, if any
    pub fn id_to_load(&self) -> Option<&ItemId> {
        match (&self.mode, self.phase) {
            (EditMode::Edit(id), EditPhase::Loading) => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.item.is_persisted() {
            "Edit Item"
        } else {
            "Add Item"
        }
    }

    pub fn can_edit(&self) -> bool {
        self.phase == EditPhase::Editing
    }

    pub fn is_saved(&self) -> bool {
        self.phase == EditPhase::Saved
    }

    /// Start a submission and hand back the draft to send.
    /// Returns `None` while loading, submitting, or after a failed load.
    pub fn begin_submit(&mut self) -> Option<Item> {
        if !self.can_edit() {
            return None;
        }
        self.phase = EditPhase::Submitting;
        self.error = None;
        Some(self.item.clone())
    }

    pub fn apply(&mut self, action: EditAction) {
        match action {
            EditAction::Loaded(id, result) => {
                // Stale response for a previous route
                if self.id_to_load() != Some(&id) {
                    return;
                }
                match result {
                    Ok(mut item) => {
                        item.id.get_or_insert(id);
                        self.item = item;
                        self.phase = EditPhase::Editing;
                    }
                    Err(err) => {
                        self.phase = EditPhase::Unavailable;
                        self.error = Some(err.to_string());
                    }
                }
            }
            EditAction::FieldChanged(field, value) => {
                if self.can_edit() {
                    self.item.set_field(field, value);
                }
            }
            EditAction::SubmitFinished(result) => {
                if self.phase != EditPhase::Submitting {
                    return;
                }
                match result {
                    Ok(outcome) => {
                        if let SaveOutcome::Created { id: Some(id) } = outcome {
                            self.item.id = Some(id);
                        }
                        self.phase = EditPhase::Saved;
                    }
                    Err(err) => {
                        self.phase = EditPhase::Editing;
                        self.error = Some(err.to_string());
                    }
                }
            }
        }
    }
}
