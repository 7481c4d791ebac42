use crate::domain::a001_sample_submission::ui::form::SubmissionsForm;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Endpoint settings for every view below
    provide_context(config);

    view! {
        <SubmissionsForm />
    }
}
