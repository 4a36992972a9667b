use contracts::domain::a001_service_entry::aggregate::ServiceEntry;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table_placeholder::{BodyState, TableEmptyRow, TableLoadingRow};
use crate::shared::components::ui::badge::PaymentBadge;
use crate::shared::date_utils::format_service_datetime_local;
use crate::shared::money::format_inr;

const COLUMNS: u32 = 9;

/// Service entries table shared by the admin and therapist screens
#[component]
pub fn ServiceTable(
    #[prop(into)]
    entries: Signal<Vec<ServiceEntry>>,
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    empty_text: String,
) -> impl IntoView {
    view! {
        <Table class="service-table">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                    <TableHeaderCell>"Time"</TableHeaderCell>
                    <TableHeaderCell>"Customer"</TableHeaderCell>
                    <TableHeaderCell>"Therapy"</TableHeaderCell>
                    <TableHeaderCell>"Duration"</TableHeaderCell>
                    <TableHeaderCell class="table__cell--right">"Base"</TableHeaderCell>
                    <TableHeaderCell class="table__cell--right">"GST"</TableHeaderCell>
                    <TableHeaderCell class="table__cell--right">"Total"</TableHeaderCell>
                    <TableHeaderCell>"Payment"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let rows = entries.get();
                    match BodyState::of(loading.get(), rows.len()) {
                        BodyState::Loading => view! { <TableLoadingRow colspan=COLUMNS /> }.into_any(),
                        BodyState::Empty => {
                            view! { <TableEmptyRow colspan=COLUMNS text=empty_text.clone() /> }.into_any()
                        }
                        BodyState::Rows(_) => rows
                            .into_iter()
                            .map(|entry| view! { <ServiceRow entry=entry /> })
                            .collect_view()
                            .into_any(),
                    }
                }}
            </TableBody>
        </Table>
    }
}

#[component]
fn ServiceRow(entry: ServiceEntry) -> impl IntoView {
    let (date, time) = format_service_datetime_local(&entry.date, &entry.time);
    let mode = entry
        .payment_mode
        .map(|m| m.display_name())
        .unwrap_or_default();

    view! {
        <TableRow>
            <TableCell>{date}</TableCell>
            <TableCell>{time}</TableCell>
            <TableCell>{entry.customer_name}</TableCell>
            <TableCell>{entry.therapy_type}</TableCell>
            <TableCell>{entry.therapy_duration}</TableCell>
            <TableCell class="table__cell--right">{format_inr(entry.base_price)}</TableCell>
            <TableCell class="table__cell--right">{format_inr(entry.gst_amount)}</TableCell>
            <TableCell class="table__cell--right">
                <strong>{format_inr(entry.total_amount)}</strong>
            </TableCell>
            <TableCell>
                <PaymentBadge payment=entry.payment_received_by />
                <span class="service-table__mode">{mode}</span>
            </TableCell>
        </TableRow>
    }
}
