use super::row_card::RowCard;
use super::success::SubmittedPanel;
use super::view_model::SubmissionsFormViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use chrono::Datelike;
use leptos::prelude::*;

/// Whole portal page: the editable batch, or the confirmation once it was accepted
#[component]
pub fn SubmissionsForm() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = SubmissionsFormViewModel::new(&config.api);

    view! {
        <div class="portal">
            <Show
                when=move || vm.is_submitted()
                fallback=move || view! { <FormPage vm=vm /> }
            >
                <SubmittedPanel vm=vm />
            </Show>
        </div>
    }
}

#[component]
fn FormPage(vm: SubmissionsFormViewModel) -> impl IntoView {
    let copyright_year = today().year();

    view! {
        <header class="portal__header">
            <div class="portal__brand">
                <span class="portal__logo">{icon("package")}</span>
                <h1 class="portal__title">
                    "Factory"<span class="portal__accent">"Portal"</span>
                </h1>
            </div>
            <div class="portal__tagline">"Submit Samples & Dips"</div>
        </header>

        <main class="portal__content">
            <form
                class="submission-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                <section class="submission-form__factory">
                    <h2>"New Submission"</h2>
                    <p>"Enter your factory details and list the samples you are sending today."</p>
                    <Input
                        id="factory-name"
                        class="form__group--hero"
                        value=Signal::derive(move || vm.factory_name())
                        on_input=Callback::new(move |value: String| vm.set_factory_name(value))
                        placeholder="Enter Factory Name"
                        required=true
                    />
                </section>

                {move || vm.notice().map(move |text| view! {
                    <div class="notice notice--error" role="alert">
                        <span>{text}</span>
                        <button
                            type="button"
                            class="notice__close"
                            on:click=move |_| vm.dismiss_notice()
                        >
                            "×"
                        </button>
                    </div>
                })}

                <div class="submission-form__rows">
                    <For
                        each=move || vm.row_ids()
                        key=|id| *id
                        children=move |id| view! { <RowCard vm=vm row_id=id /> }
                    />
                </div>

                <div class="submission-form__actions">
                    <Button
                        variant="dashed"
                        on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.add_row_command())
                    >
                        {icon("plus")}
                        "Add Another Item"
                    </Button>
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || vm.is_submitting())
                    >
                        {move || if vm.is_submitting() { "Submitting..." } else { "Submit All Samples" }}
                    </Button>
                </div>
            </form>
        </main>

        <footer class="portal__footer">
            {format!("© {} Company Name. All rights reserved.", copyright_year)}
        </footer>
    }
}
