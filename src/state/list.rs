//! List View State

use std::collections::HashSet;

use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
pub enum ListAction {
    LoadStarted,
    Loaded(ApiResult<Vec<Item>>),
    DeleteFinished(ItemId, ApiResult<()>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub items: Vec<Item>,
    pub phase: LoadPhase,
    pub error: Option<String>,
    deleting: HashSet<ItemId>,
}

impl ListState {
    /// Mark a delete as in flight. Returns false if one is already pending for `id`.
    pub fn begin_delete(&mut self, id: &ItemId) -> bool {
        self.deleting.insert(id.clone())
    }

    pub fn is_deleting(&self, id: &ItemId) -> bool {
        self.deleting.contains(id)
    }

    pub fn is_empty_and_ready(&self) -> bool {
        self.phase == LoadPhase::Ready && self.items.is_empty()
    }

    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::LoadStarted => {
                self.phase = LoadPhase::Loading;
                self.error = None;
            }
            ListAction::Loaded(Ok(items)) => {
                self.items = items;
                self.phase = LoadPhase::Ready;
            }
            ListAction::Loaded(Err(err)) => {
                self.phase = LoadPhase::Failed;
                self.error = Some(err.to_string());
            }
            ListAction::DeleteFinished(id, result) => {
                self.deleting.remove(&id);
                match result {
                    Ok(()) => {
                        self.remove(&id);
                        self.error = None;
                    }
                    // Already gone on the backend
                    Err(ApiError::NotFound(_)) => {
                        log::warn!("Item {} was already deleted", id);
                        self.remove(&id);
                    }
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
        }
    }

    fn remove(&mut self, id: &ItemId) {
        self.items.retain(|item| item.id.as_ref() != Some(id));
    }
}
