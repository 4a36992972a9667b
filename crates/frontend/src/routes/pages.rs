//! Therapist portal pages composed from domain views.

use leptos::prelude::*;

use crate::dashboards::MyIncentiveCard;
use crate::domain::a001_service_entry::ui::form::LogServiceForm;
use crate::domain::a001_service_entry::ui::my_list::MyServiceList;
use crate::domain::a002_attendance::ui::panel::AttendancePanel;
use crate::shared::components::page_header::PageHeader;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireTherapist;

#[component]
pub fn PortalHome() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .user()
            .map(|u| format!("Hello, {}", u.full_name))
            .unwrap_or_default()
    };

    view! {
        <RequireTherapist>
            <div class="page">
                <PageHeader title=greeting() subtitle="Attendance and this month's progress" />
                <div class="page__grid">
                    <MyIncentiveCard />
                    <AttendancePanel />
                </div>
            </div>
        </RequireTherapist>
    }
}

#[component]
pub fn PortalServices() -> impl IntoView {
    // Bumped after each logged service so the history reloads
    let reload = RwSignal::new(0u32);
    let on_logged = Callback::new(move |_| reload.update(|n| *n += 1));

    view! {
        <RequireTherapist>
            <div class="page">
                <PageHeader title="My Services" />
                <LogServiceForm on_logged=on_logged />
                <MyServiceList reload=reload />
            </div>
        </RequireTherapist>
    }
}
