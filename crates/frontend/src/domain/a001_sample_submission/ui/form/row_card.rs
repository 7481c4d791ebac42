use super::view_model::SubmissionsFormViewModel;
use crate::domain::a001_sample_submission::state::RowField;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::enums::{SampleType, Season, Shipper};
use leptos::prelude::*;
use uuid::Uuid;

/// Card with the fields of one submission row
#[component]
pub fn RowCard(vm: SubmissionsFormViewModel, row_id: Uuid) -> impl IntoView {
    let value = move |field: RowField| Signal::derive(move || vm.field_value(row_id, field));
    let setter = move |field: RowField| {
        Callback::new(move |new_value: String| vm.set_field(row_id, field, new_value))
    };
    let field_id = move |field: RowField| format!("{}-{:?}", row_id, field);

    view! {
        <div class="row-card">
            <div class="row-card__header">
                <div class="row-card__title">
                    <span class="row-card__number">{move || vm.row_number(row_id)}</span>
                    <h3>"Item Details"</h3>
                </div>
                <Show when=move || vm.can_remove_rows()>
                    <Button
                        variant="ghost"
                        title="Remove item"
                        on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.remove_row_command(row_id))
                    >
                        {icon("trash")}
                    </Button>
                </Show>
            </div>

            <div class="row-card__grid">
                <Input
                    label=RowField::StyleNumber.label()
                    id=field_id(RowField::StyleNumber)
                    value=value(RowField::StyleNumber)
                    on_input=setter(RowField::StyleNumber)
                    placeholder="e.g. ST-2024"
                    required=true
                />

                <Select
                    label=RowField::SampleType.label()
                    id=field_id(RowField::SampleType)
                    value=value(RowField::SampleType)
                    on_change=setter(RowField::SampleType)
                    options=SampleType::all().iter().map(|t| t.label()).collect()
                />

                <Select
                    label=RowField::Season.label()
                    id=field_id(RowField::Season)
                    value=value(RowField::Season)
                    on_change=setter(RowField::Season)
                    options=Season::all().iter().map(|s| s.label()).collect()
                />

                <Input
                    label=RowField::Year.label()
                    id=field_id(RowField::Year)
                    input_type="number"
                    value=value(RowField::Year)
                    on_input=setter(RowField::Year)
                    required=true
                />

                <Input
                    label=RowField::DateSent.label()
                    id=field_id(RowField::DateSent)
                    input_type="date"
                    value=value(RowField::DateSent)
                    on_input=setter(RowField::DateSent)
                    trailing_icon="calendar"
                    required=true
                />

                <Select
                    label=RowField::Shipper.label()
                    id=field_id(RowField::Shipper)
                    value=value(RowField::Shipper)
                    on_change=setter(RowField::Shipper)
                    options=Shipper::all().iter().map(|s| s.label()).collect()
                />

                <Show
                    when=move || vm.shipper(row_id).is_other()
                    fallback=|| view! { <div class="row-card__spacer"></div> }
                >
                    <Input
                        label=RowField::OtherShipper.label()
                        id=field_id(RowField::OtherShipper)
                        value=value(RowField::OtherShipper)
                        on_input=setter(RowField::OtherShipper)
                        placeholder="Carrier Name"
                        required=true
                    />
                </Show>

                <Input
                    label=RowField::TrackingNumber.label()
                    id=field_id(RowField::TrackingNumber)
                    value=value(RowField::TrackingNumber)
                    on_input=setter(RowField::TrackingNumber)
                    placeholder="Tracking ID"
                    trailing_icon="truck"
                    required=true
                />
            </div>
        </div>
    }
}
