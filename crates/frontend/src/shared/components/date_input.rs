use leptos::prelude::*;

/// DateInput component with native date picker
/// The value is always yyyy-mm-dd; an empty string means "not set"
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            id=id
            prop:value=value
            disabled=move || disabled.get()
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
