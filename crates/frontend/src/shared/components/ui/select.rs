use leptos::prelude::*;

/// Labelled select over a fixed list of labels.
/// Option value and visible text are the same string.
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected label
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    options: Vec<&'static str>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|option| {
                        let is_selected = move || value.get() == option;
                        view! {
                            <option value=option selected=is_selected>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
