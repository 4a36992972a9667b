use contracts::system::auth::UserRole;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use super::pages::{PortalHome, PortalServices};
use crate::dashboards::AdminOverviewDashboard;
use crate::domain::a001_service_entry::ui::list::ServiceListPage;
use crate::domain::a003_therapist::ui::list::TherapistListPage;
use crate::domain::a004_property::ui::list::PropertyListPage;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;

/// Landing path for a role
pub fn home_path(role: UserRole) -> &'static str {
    match role {
        UserRole::SuperAdmin => "/admin",
        UserRole::Therapist => "/portal",
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    let session = use_session();
    move || session.role().map(|role| view! { <Redirect path=home_path(role) /> })
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h2>"Page not found"</h2>
            <a href="/">"Back to start"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Router>
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <Shell>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomeRedirect />
                        <Route path=path!("/admin") view=AdminOverviewDashboard />
                        <Route path=path!("/admin/services") view=ServiceListPage />
                        <Route path=path!("/admin/therapists") view=TherapistListPage />
                        <Route path=path!("/admin/properties") view=PropertyListPage />
                        <Route path=path!("/portal") view=PortalHome />
                        <Route path=path!("/portal/services") view=PortalServices />
                    </Routes>
                </Shell>
            </Show>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_path_by_role() {
        assert_eq!(home_path(UserRole::SuperAdmin), "/admin");
        assert_eq!(home_path(UserRole::Therapist), "/portal");
    }
}
