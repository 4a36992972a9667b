use contracts::domain::a004_property::aggregate::PropertyRecord;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_property::api;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_placeholder::{BodyState, TableEmptyRow, TableLoadingRow};
use crate::shared::components::ui::Badge;
use crate::shared::fetch_state::{spawn_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::money::format_percent;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAdmin;

const COLUMNS: u32 = 7;

/// "30%" for partner hotels, "—" when no share is agreed
fn revenue_share_label(p: &PropertyRecord) -> String {
    p.revenue_share_percentage
        .map(format_percent)
        .unwrap_or_else(|| "—".to_string())
}

fn contact_label(p: &PropertyRecord) -> String {
    match (p.contact_person.as_deref(), p.contact_number.as_deref()) {
        (Some(name), Some(phone)) => format!("{} ({})", name, phone),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => String::new(),
    }
}

#[component]
pub fn PropertyListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <PropertyList />
        </RequireAdmin>
    }
}

#[component]
fn PropertyList() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let fetch: RwSignal<FetchState<Vec<PropertyRecord>>> = RwSignal::new(FetchState::default());

    let load_data = move || {
        let client = session.client();
        spawn_fetch(fetch, notifications, "Failed to load properties", move || {
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
            <PageHeader title="Properties" subtitle="Hotels and own premises">
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
                        <TableHeaderCell>"Hotel"</TableHeaderCell>
                        <TableHeaderCell>"Location"</TableHeaderCell>
                        <TableHeaderCell>"Ownership"</TableHeaderCell>
                        <TableHeaderCell class="table__cell--right">"Hotel share"</TableHeaderCell>
                        <TableHeaderCell>"Payment cycle"</TableHeaderCell>
                        <TableHeaderCell>"Contact"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = fetch.with(|s| s.data.clone());
                        match BodyState::of(loading.get(), rows.len()) {
                            BodyState::Loading => view! { <TableLoadingRow colspan=COLUMNS /> }.into_any(),
                            BodyState::Empty => {
                                view! { <TableEmptyRow colspan=COLUMNS text="No properties found" /> }.into_any()
                            }
                            BodyState::Rows(_) => rows.into_iter().map(|p| {
                                let share = revenue_share_label(&p);
                                let contact = contact_label(&p);
                                let cycle = p.payment_cycle.unwrap_or_default().display_name();
                                let (variant, label) = if p.is_active() {
                                    ("success", "Active")
                                } else {
                                    ("neutral", "Archived")
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{p.hotel_name}</TableCell>
                                        <TableCell>{p.location}</TableCell>
                                        <TableCell>{p.ownership_type.display_name()}</TableCell>
                                        <TableCell class="table__cell--right">{share}</TableCell>
                                        <TableCell>{cycle}</TableCell>
                                        <TableCell>{contact}</TableCell>
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_property::aggregate::OwnershipType;

    fn property(share: Option<f64>, person: Option<&str>, phone: Option<&str>) -> PropertyRecord {
        PropertyRecord {
            hotel_name: "Lake View".into(),
            location: "Udaipur".into(),
            gst_number: None,
            ownership_type: OwnershipType::OutsideProperty,
            revenue_share_percentage: share,
            payment_cycle: None,
            contact_person: person.map(String::from),
            contact_number: phone.map(String::from),
            active: true,
            status: None,
        }
    }

    #[test]
    fn test_revenue_share_label() {
        assert_eq!(revenue_share_label(&property(Some(30.0), None, None)), "30%");
        assert_eq!(revenue_share_label(&property(None, None, None)), "—");
    }

    #[test]
    fn test_contact_label() {
        assert_eq!(contact_label(&property(None, Some("Anil"), Some("98"))), "Anil (98)");
        assert_eq!(contact_label(&property(None, None, Some("98"))), "98");
        assert_eq!(contact_label(&property(None, None, None)), "");
    }
}
