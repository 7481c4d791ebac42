//! Submissions form UI
//!
//! MVVM split:
//! - view_model.rs: reactive state and commands
//! - view.rs: page component
//! - row_card.rs: one card per submission row
//! - success.rs: terminal "sent" panel

mod row_card;
mod success;
mod view;
mod view_model;

pub use view::SubmissionsForm;
pub use view_model::SubmissionsFormViewModel;
