//! UI Components
//!
//! Views for each route plus shared pieces.

mod error_banner;
mod home;
mod item_edit;
mod item_list;

pub use error_banner::ErrorBanner;
pub use home::Home;
pub use item_edit::ItemEdit;
pub use item_list::ItemList;
