//! UI Components
//!
//! Reusable TUI widgets for the unit admin screen.

pub mod dialogs;
pub mod form;
pub mod input_field;
pub mod layout;
pub mod row_actions;
pub mod statusline;
pub mod table;

// Re-exports
pub use dialogs::EditModal;
pub use form::{AddFormPanel, FieldName, FormError, UnitForm};
pub use row_actions::{RowAction, RowActions};
pub use statusline::{HelpBar, MessageType, StatusLine};
pub use table::{TableViewState, UnitTable};
