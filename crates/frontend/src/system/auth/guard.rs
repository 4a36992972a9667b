use contracts::system::auth::UserRole;
use leptos::prelude::*;

use super::context::use_session;

/// Renders `children` only for a signed-in user with `role`
fn role_gate(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.role() == Some(role)
            fallback=|| view! { <div class="access-denied">"Access denied for your role."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin privileges
/// Shows an access-denied message otherwise
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    role_gate(UserRole::SuperAdmin, children)
}

/// Component that requires a therapist account
#[component]
pub fn RequireTherapist(children: ChildrenFn) -> impl IntoView {
    role_gate(UserRole::Therapist, children)
}
