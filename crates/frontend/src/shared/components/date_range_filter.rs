use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Date range filter bar with explicit Apply and Reset actions
///
/// Editing the inputs only changes `date_from`/`date_to`; nothing is fetched
/// until Apply (or Reset) runs `on_apply`.
#[component]
pub fn DateRangeFilter(
    date_from: RwSignal<String>,
    date_to: RwSignal<String>,
    /// Number of filters currently applied (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    /// Disables the actions while a load is pending
    #[prop(into)]
    loading: Signal<bool>,
    on_apply: Callback<()>,
    /// Clears filters owned by the caller before Reset reloads
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
    /// Extra filter controls rendered after the dates
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let reset = move |_: leptos::ev::MouseEvent| {
        date_from.set(String::new());
        date_to.set(String::new());
        if let Some(on_reset) = on_reset {
            on_reset.run(());
        }
        on_apply.run(());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
            </div>
            <div class="filter-panel-content">
                <div class="form-group form-group--inline">
                    <label for="filter-date-from">"From"</label>
                    <DateInput
                        id="filter-date-from"
                        value=Signal::derive(move || date_from.get())
                        on_change=move |v| date_from.set(v)
                        disabled=loading
                    />
                </div>
                <div class="form-group form-group--inline">
                    <label for="filter-date-to">"To"</label>
                    <DateInput
                        id="filter-date-to"
                        value=Signal::derive(move || date_to.get())
                        on_change=move |v| date_to.set(v)
                        disabled=loading
                    />
                </div>
                {children.map(|c| c())}
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_apply.run(())
                        disabled=loading
                    >
                        "Apply"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=reset
                        disabled=loading
                    >
                        "Reset"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
