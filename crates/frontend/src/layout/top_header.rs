//! Top bar: product title, signed-in user and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::notification_service::use_notifications;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let logout = move |_| {
        session.end();
        notifications.info("Signed out");
        navigate("/", NavigateOptions::default());
    };

    let user_name = move || session.user().map(|u| u.full_name).unwrap_or_default();
    let role_name = move || {
        session
            .role()
            .map(|r| r.display_name())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Wellness Operations"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">{user_name}</span>
                    <span class="top-header__user-role">{role_name}</span>
                </div>
                <button class="top-header__icon-btn" title="Sign out" on:click=logout>
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
