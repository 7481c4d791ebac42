use crate::domain::a001_sample_submission::api::HttpTransport;
use crate::domain::a001_sample_submission::dispatcher::{self, FormStore};
use crate::domain::a001_sample_submission::state::{FormState, RowField};
use crate::shared::config::ApiConfig;
use crate::shared::date_utils::today;
use contracts::enums::Shipper;
use leptos::prelude::*;
use uuid::Uuid;

impl FormStore for RwSignal<FormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// ViewModel for the submissions form
#[derive(Clone, Copy)]
pub struct SubmissionsFormViewModel {
    pub state: RwSignal<FormState>,
    transport: StoredValue<HttpTransport>,
}

impl SubmissionsFormViewModel {
    pub fn new(api: &ApiConfig) -> Self {
        let transport = HttpTransport::from_config(api);
        log::debug!("Submissions will be posted to {}", transport.url());
        Self {
            state: RwSignal::new(FormState::new(today())),
            transport: StoredValue::new(transport),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.state.with(|s| s.submitted)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.submitting)
    }

    pub fn can_remove_rows(&self) -> bool {
        self.state.with(|s| s.can_remove_rows())
    }

    pub fn notice(&self) -> Option<String> {
        self.state.with(|s| s.notice.clone())
    }

    pub fn factory_name(&self) -> String {
        self.state.with(|s| s.factory_name.clone())
    }

    pub fn row_ids(&self) -> Vec<Uuid> {
        self.state.with(|s| s.row_ids())
    }

    /// 1-based position shown on the card
    pub fn row_number(&self, id: Uuid) -> usize {
        self.state.with(|s| s.index_of(id).map(|i| i + 1).unwrap_or(0))
    }

    pub fn field_value(&self, id: Uuid, field: RowField) -> String {
        self.state
            .with(|s| s.row(id).map(|r| r.field_value(field)).unwrap_or_default())
    }

    pub fn shipper(&self, id: Uuid) -> Shipper {
        self.state
            .with(|s| s.row(id).map(|r| r.shipper).unwrap_or_default())
    }

    pub fn set_factory_name(&self, value: String) {
        self.state.update(|s| s.set_factory_name(&value));
    }

    pub fn add_row_command(&self) {
        let today = today();
        self.state.update(|s| s.add_row(today));
    }

    /// Rows are addressed by id; the index is resolved at the moment of the edit
    pub fn remove_row_command(&self, id: Uuid) {
        self.state.update(|s| {
            if let Some(index) = s.index_of(id) {
                s.remove_row(index);
            }
        });
    }

    pub fn set_field(&self, id: Uuid, field: RowField, value: String) {
        self.state.update(|s| {
            if let Some(index) = s.index_of(id) {
                if !s.set_field(index, field, &value) {
                    log::warn!("Ignored value {:?} for {}", value, field.label());
                }
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.state.update(|s| s.dismiss_notice());
    }

    /// Send the batch; duplicate clicks while in flight are ignored by the dispatcher
    pub fn submit_command(&self) {
        let state = self.state;
        let transport = self.transport.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            dispatcher::submit(&state, &transport).await;
        });
    }

    /// "Submit Another Batch"
    pub fn reset_command(&self) {
        let today = today();
        self.state.update(|s| {
            s.reset(today);
        });
    }
}
