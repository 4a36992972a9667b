use contracts::dashboards::d100_admin_overview::dto::DashboardAnalytics;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d100_admin_overview::api;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::fetch_state::{spawn_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::money::format_inr;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAdmin;

const NO_VALUE: &str = "—";

/// Share of total sales collected by the hotel, in percent
fn hotel_share_percent(d: &DashboardAnalytics) -> Option<f64> {
    (d.total_sales > 0.0).then(|| d.hotel_received / d.total_sales * 100.0)
}

#[component]
pub fn AdminOverviewDashboard() -> impl IntoView {
    view! {
        <RequireAdmin>
            <Overview />
        </RequireAdmin>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let fetch: RwSignal<FetchState<Option<DashboardAnalytics>>> = RwSignal::new(FetchState::default());

    let load_data = move || {
        let client = session.client();
        spawn_fetch(fetch, notifications, "Failed to load dashboard", move || async move {
            api::get_dashboard(client).await.map(Some)
        });
    };

    Effect::new(move |_| {
        if !fetch.with_untracked(|s| s.loaded_once || s.loading) {
            load_data();
        }
    });

    let loading = Signal::derive(move || fetch.with(|s| s.loading));
    let metric = move |f: fn(&DashboardAnalytics) -> String| {
        Signal::derive(move || {
            fetch.with(|s| s.data.as_ref().map(f).unwrap_or_else(|| NO_VALUE.to_string()))
        })
    };

    let hotel_subtitle = Signal::derive(move || {
        fetch.with(|s| {
            s.data
                .as_ref()
                .and_then(hotel_share_percent)
                .map(|p| format!("{:.1}% of sales", p))
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Overview" subtitle="All properties, all time">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Sales"
                    icon_name="revenue"
                    value=metric(|d| format_inr(d.total_sales))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Base Sales"
                    icon_name="wallet"
                    value=metric(|d| format_inr(d.total_base_sales))
                />
                <StatCard
                    label="GST Collected"
                    icon_name="gst"
                    value=metric(|d| format_inr(d.total_gst))
                />
                <StatCard
                    label="Services"
                    icon_name="services"
                    value=metric(|d| d.total_services.to_string())
                />
                <StatCard
                    label="Customers"
                    icon_name="users"
                    value=metric(|d| d.customer_count.to_string())
                    subtitle="Unique phone numbers"
                />
                <StatCard
                    label="Paid to Hotel"
                    icon_name="hotel"
                    value=metric(|d| format_inr(d.hotel_received))
                    subtitle=hotel_subtitle
                />
                <StatCard
                    label="Paid to Nirvaana"
                    icon_name="wallet"
                    value=metric(|d| format_inr(d.nirvaana_received))
                />
                <StatCard
                    label="Most Popular Therapy"
                    icon_name="trending"
                    value=metric(|d| d.most_popular_therapy.clone())
                    tone=StatTone::Warning
                />
            </div>
        </div>
    }
}
