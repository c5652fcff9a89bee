//! View State
//!
//! Plain value types owned by each view, updated through `apply`.
//! Views hold these in a `RwSignal`; nothing here touches the DOM.

mod edit;
mod list;

pub use edit::{EditAction, EditMode, EditState};
pub use list::{ListAction, ListState, LoadPhase};
