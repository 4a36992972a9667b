use contracts::domain::a001_service_entry::aggregate::ServiceEntry;
use leptos::prelude::*;
use thaw::*;

use super::table::ServiceTable;
use crate::domain::a001_service_entry::api;
use crate::domain::a001_service_entry::totals::ServiceTotals;
use crate::layout::notification_service::use_notifications;
use crate::shared::fetch_state::{spawn_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::money::format_inr;
use crate::system::auth::context::use_session;

/// The signed-in therapist's own service history
///
/// `reload` is bumped by the service form after a successful submit.
#[component]
pub fn MyServiceList(#[prop(into)] reload: Signal<u32>) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let fetch: RwSignal<FetchState<Vec<ServiceEntry>>> = RwSignal::new(FetchState::default());

    let load_data = move || {
        let client = session.client();
        spawn_fetch(fetch, notifications, "Failed to load your services", move || {
            api::fetch_mine(client)
        });
    };

    // Runs on mount and again whenever `reload` changes
    Effect::new(move |_| {
        reload.track();
        load_data();
    });

    let loading = Signal::derive(move || fetch.with(|s| s.loading));
    let totals = Memo::new(move |_| fetch.with(|s| ServiceTotals::from_entries(&s.data)));

    view! {
        <section class="card">
            <div class="card__header">
                <h3>"My Services"</h3>
                <span class="card__meta">
                    {move || {
                        let t = totals.get();
                        format!("{} sessions · {}", t.count, format_inr(t.revenue))
                    }}
                </span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| load_data()
                    disabled=loading
                >
                    {icon("refresh")}
                </Button>
            </div>
            <ServiceTable
                entries=Signal::derive(move || fetch.with(|s| s.data.clone()))
                loading=loading
                empty_text="You have not logged any services yet"
            />
        </section>
    }
}
