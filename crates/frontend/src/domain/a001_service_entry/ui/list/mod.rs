mod state;

use leptos::prelude::*;
use thaw::*;

use super::table::ServiceTable;
use crate::domain::a001_service_entry::api;
use crate::domain::a001_service_entry::totals::ServiceTotals;
use crate::domain::a003_therapist::api as therapist_api;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::fetch_state::spawn_fetch;
use crate::shared::icons::icon;
use crate::shared::money::format_inr;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAdmin;
use state::{create_state, ServiceListState, ServiceListing};

#[component]
pub fn ServiceListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <ServiceList />
        </RequireAdmin>
    }
}

#[component]
fn ServiceList() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let state = create_state();

    let load_data = move || {
        let filter = state.current_filter();
        let client = session.client();
        spawn_fetch(state.fetch, notifications, "Failed to load services", move || async move {
            api::fetch_all(client, filter.clone())
                .await
                .map(|entries| ServiceListing { filter, entries })
        });
    };

    Effect::new(move |_| {
        if !state.fetch.with_untracked(|s| s.loaded_once || s.loading) {
            load_data();
        }
        if !state.therapists.with_untracked(|s| s.loaded_once || s.loading) {
            let client = session.client();
            spawn_fetch(state.therapists, notifications, "Failed to load therapists", move || {
                therapist_api::fetch_all(client)
            });
        }
    });

    let loading = Signal::derive(move || state.fetch.with(|s| s.loading));
    let entries = Signal::derive(move || state.fetch.with(|s| s.data.entries.clone()));
    let totals = Memo::new(move |_| state.fetch.with(|s| ServiceTotals::from_entries(&s.data.entries)));
    // Counts the filter behind the rows on screen, not the inputs being edited
    let active_filters = Signal::derive(move || state.fetch.with(|s| s.data.filter.active_count()));

    view! {
        <div class="page">
            <PageHeader
                title="Service Entries"
                subtitle="Therapy sessions logged across all properties"
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Revenue"
                    icon_name="revenue"
                    value=Signal::derive(move || format_inr(totals.get().revenue))
                    tone=StatTone::Success
                />
                <StatCard
                    label="GST Collected"
                    icon_name="gst"
                    value=Signal::derive(move || format_inr(totals.get().gst))
                />
                <StatCard
                    label="Base Sales"
                    icon_name="trending"
                    value=Signal::derive(move || format_inr(totals.get().base_sales))
                />
                <StatCard
                    label="Services"
                    icon_name="services"
                    value=Signal::derive(move || totals.get().count.to_string())
                />
                <StatCard
                    label="Paid to Hotel"
                    icon_name="hotel"
                    value=Signal::derive(move || format_inr(totals.get().received_by_hotel))
                />
                <StatCard
                    label="Paid to Nirvaana"
                    icon_name="wallet"
                    value=Signal::derive(move || format_inr(totals.get().received_by_nirvaana))
                />
            </div>

            <DateRangeFilter
                date_from=state.date_from
                date_to=state.date_to
                active_filters_count=active_filters
                loading=loading
                on_apply=Callback::new(move |_| load_data())
                on_reset=Callback::new(move |_| state.clear_filter())
            >
                <TherapistSelect state=state disabled=loading />
            </DateRangeFilter>

            <ServiceTable
                entries=entries
                loading=loading
                empty_text="No service entries found"
            />
        </div>
    }
}

/// Narrows the list to one therapist; options come from the roster
#[component]
fn TherapistSelect(state: ServiceListState, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    view! {
        <div class="form-group form-group--inline">
            <label for="filter-therapist">"Therapist"</label>
            <select
                id="filter-therapist"
                on:change=move |ev| state.therapist_id.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="" selected=move || state.therapist_id.with(|id| id.is_empty())>
                    "All therapists"
                </option>
                {move || {
                    state.therapists.with(|s| s.data.clone()).into_iter().map(|t| {
                        let id = t.user_id.clone();
                        let is_selected = move || state.therapist_id.with(|current| *current == id);
                        view! {
                            <option value=t.user_id selected=is_selected>{t.full_name}</option>
                        }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}
