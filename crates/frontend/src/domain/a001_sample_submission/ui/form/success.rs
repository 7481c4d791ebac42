use super::view_model::SubmissionsFormViewModel;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn SubmittedPanel(vm: SubmissionsFormViewModel) -> impl IntoView {
    view! {
        <div class="submitted">
            <div class="submitted__card">
                <div class="submitted__badge">{icon("send")}</div>
                <h2>"Sent Successfully"</h2>
                <p>"Thank you! Your sample submission has been recorded in our system."</p>
                <Button
                    variant="link"
                    on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.reset_command())
                >
                    "Submit Another Batch"
                </Button>
            </div>
        </div>
    }
}
