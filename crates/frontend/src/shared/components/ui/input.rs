use crate::shared::icons::icon;
use leptos::prelude::*;

/// Labelled text input with an optional trailing icon
#[component]
pub fn Input(
    /// Label text rendered above the field
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    /// Icon name from `shared::icons`, drawn inside the right edge
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("form__group {}", additional_class())>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__control">
                <input
                    id=input_id
                    class="form__input"
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    required=required
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                {trailing_icon.map(|name| view! {
                    <span class="form__icon">{icon(name)}</span>
                })}
            </div>
        </div>
    }
}
