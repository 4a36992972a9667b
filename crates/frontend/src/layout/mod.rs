pub mod navbar;
pub mod notification_service;
pub mod top_header;

use leptos::prelude::*;
use navbar::Navbar;
use top_header::TopHeader;

/// Main application shell for a signed-in user.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Navbar   |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Navbar />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
