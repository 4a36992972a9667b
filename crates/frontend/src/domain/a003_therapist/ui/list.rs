use contracts::domain::a003_therapist::aggregate::TherapistProfile;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_therapist::api;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_placeholder::{BodyState, TableEmptyRow, TableLoadingRow};
use crate::shared::components::ui::Badge;
use crate::shared::fetch_state::{spawn_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::money::{format_amount, format_inr};
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAdmin;

const COLUMNS: u32 = 6;

#[component]
pub fn TherapistListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <TherapistList />
        </RequireAdmin>
    }
}

#[component]
fn TherapistList() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let fetch: RwSignal<FetchState<Vec<TherapistProfile>>> = RwSignal::new(FetchState::default());

    let load_data = move || {
        let client = session.client();
        spawn_fetch(fetch, notifications, "Failed to load therapists", move || {
            api::fetch_all(client)
        });
    };

    Effect::new(move |_| {
        if !fetch.with_untracked(|s| s.loaded_once || s.loading) {
            load_data();
        }
    });

    let loading = Signal::derive(move || fetch.with(|s| s.loading));

    view! {
        <div class="page">
            <PageHeader title="Therapists" subtitle="Roster and monthly targets">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Phone"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                        <TableHeaderCell class="table__cell--right">"Experience"</TableHeaderCell>
                        <TableHeaderCell class="table__cell--right">"Monthly target"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = fetch.with(|s| s.data.clone());
                        match BodyState::of(loading.get(), rows.len()) {
                            BodyState::Loading => view! { <TableLoadingRow colspan=COLUMNS /> }.into_any(),
                            BodyState::Empty => {
                                view! { <TableEmptyRow colspan=COLUMNS text="No therapists found" /> }.into_any()
                            }
                            BodyState::Rows(_) => rows.into_iter().map(|t| {
                                let (variant, label) = if t.is_active() {
                                    ("success", "Active")
                                } else {
                                    ("neutral", "Archived")
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{t.full_name}</TableCell>
                                        <TableCell>{t.phone}</TableCell>
                                        <TableCell>{t.email}</TableCell>
                                        <TableCell class="table__cell--right">
                                            {format!("{} yrs", format_amount(t.experience_years))}
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            {format_inr(t.monthly_target)}
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant=variant.to_string()>{label}</Badge>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any(),
                        }
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
