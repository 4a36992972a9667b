use contracts::system::auth::UserRole;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

const fn item(href: &'static str, title: &'static str, icon: &'static str) -> NavItem {
    NavItem { href, title, icon }
}

/// Links visible to `role`
pub fn nav_items(role: UserRole) -> &'static [NavItem] {
    const ADMIN: &[NavItem] = &[
        item("/admin", "Overview", "trending"),
        item("/admin/services", "Service Entries", "services"),
        item("/admin/therapists", "Therapists", "users"),
        item("/admin/properties", "Properties", "hotel"),
    ];
    const THERAPIST: &[NavItem] = &[
        item("/portal", "My Day", "target"),
        item("/portal/services", "My Services", "services"),
    ];

    match role {
        UserRole::SuperAdmin => ADMIN,
        UserRole::Therapist => THERAPIST,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {move || {
                    session
                        .role()
                        .map(nav_items)
                        .unwrap_or_default()
                        .iter()
                        .map(|nav| view! {
                            <li>
                                <A href=nav.href exact=true>
                                    {icon(nav.icon)}
                                    <span>{nav.title}</span>
                                </A>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_links() {
        let hrefs: Vec<_> = nav_items(UserRole::SuperAdmin).iter().map(|n| n.href).collect();
        assert_eq!(
            hrefs,
            vec!["/admin", "/admin/services", "/admin/therapists", "/admin/properties"]
        );
    }

    #[test]
    fn test_therapist_links_stay_in_portal() {
        assert!(nav_items(UserRole::Therapist)
            .iter()
            .all(|n| n.href.starts_with("/portal")));
    }
}
