//! Sample submission form
//!
//! - state.rs: row store and row editor (pure, no reactivity)
//! - dispatcher.rs: submit state machine, generic over store and transport
//! - api.rs: HTTP transport
//! - ui/form: Leptos view model and components

pub mod api;
pub mod dispatcher;
pub mod error;
pub mod state;
pub mod ui;

pub use error::SubmitError;
pub use state::{FormState, RowField, SubmissionRow};
