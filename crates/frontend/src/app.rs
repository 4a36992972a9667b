use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Transient notifications are shared by every view.
    provide_context(NotificationService::new());

    // The host sits outside the auth gate so the login page shows its toasts too.
    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
            <NotificationHost />
        </ConfigProvider>
    }
}
