use contracts::domain::a002_attendance::aggregate::{AttendanceAck, AttendanceRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_attendance::api;
use crate::layout::notification_service::use_notifications;
use crate::shared::api::ApiError;
use crate::shared::components::table_placeholder::{BodyState, TableEmptyRow, TableLoadingRow};
use crate::shared::date_utils::{format_date, format_timestamp_local, today_iso_utc};
use crate::shared::fetch_state::{spawn_fetch, FetchState};
use crate::shared::submit_state::SubmitState;
use crate::system::auth::context::use_session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayStatus {
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::NotCheckedIn => "Not checked in",
            DayStatus::CheckedIn => "On duty",
            DayStatus::CheckedOut => "Checked out",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            DayStatus::NotCheckedIn => "attendance-status attendance-status--off",
            DayStatus::CheckedIn => "attendance-status attendance-status--on",
            DayStatus::CheckedOut => "attendance-status attendance-status--done",
        }
    }
}

/// Status for `today` (YYYY-MM-DD) from the attendance history
pub fn day_status(records: &[AttendanceRecord], today: &str) -> DayStatus {
    match records.iter().find(|r| r.date == today) {
        Some(r) if r.check_out_time.is_some() => DayStatus::CheckedOut,
        Some(r) if r.check_in_time.is_some() => DayStatus::CheckedIn,
        _ => DayStatus::NotCheckedIn,
    }
}

fn optional_time(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(format_timestamp_local)
        .unwrap_or_else(|| "—".to_string())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Action {
    CheckIn,
    CheckOut,
}

/// Check-in / check-out controls and attendance history for the signed-in therapist
#[component]
pub fn AttendancePanel() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let history: RwSignal<FetchState<Vec<AttendanceRecord>>> = RwSignal::new(FetchState::default());
    let submit_state = RwSignal::new(SubmitState::Idle);
    let (location, set_location) = signal(String::new());

    let load_history = move || {
        let client = session.client();
        spawn_fetch(history, notifications, "Failed to load attendance", move || {
            api::fetch_mine(client)
        });
    };

    Effect::new(move |_| {
        if !history.with_untracked(|s| s.loaded_once || s.loading) {
            load_history();
        }
    });

    let status = Memo::new(move |_| history.with(|s| day_status(&s.data, &today_iso_utc())));
    let busy = move || submit_state.with(|s| s.is_submitting()) || history.with(|s| s.loading);

    let run = move |action: Action| {
        if !submit_state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }
        let client = session.client();
        let gps = location.get_untracked().trim().to_string();
        let gps = (!gps.is_empty()).then_some(gps);

        spawn_local(async move {
            let result: Result<AttendanceAck, ApiError> = match action {
                Action::CheckIn => api::check_in(client, gps).await,
                Action::CheckOut => api::check_out(client).await,
            };
            match result {
                Ok(ack) => {
                    let verb = match action {
                        Action::CheckIn => "Checked in",
                        Action::CheckOut => "Checked out",
                    };
                    notifications.success(format!("{} at {}", verb, format_timestamp_local(&ack.time)));
                    load_history();
                }
                Err(e) => {
                    let fallback = match action {
                        Action::CheckIn => "Check-in failed",
                        Action::CheckOut => "Check-out failed",
                    };
                    notifications.error(e.user_message(fallback));
                }
            }
            submit_state.update(|s| s.finish());
        });
    };

    view! {
        <section class="card">
            <div class="card__header">
                <h3>"Attendance"</h3>
                <span class=move || status.get().class()>
                    {move || status.get().label()}
                </span>
            </div>

            <div class="attendance-actions">
                <input
                    type="text"
                    class="attendance-actions__location"
                    placeholder="Location (optional)"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    disabled=move || busy() || status.get() != DayStatus::NotCheckedIn
                />
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| run(Action::CheckIn)
                        disabled=Signal::derive(move || busy() || status.get() != DayStatus::NotCheckedIn)
                    >
                        "Check In"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| run(Action::CheckOut)
                        disabled=Signal::derive(move || busy() || status.get() != DayStatus::CheckedIn)
                    >
                        "Check Out"
                    </Button>
                </Flex>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Check in"</TableHeaderCell>
                        <TableHeaderCell>"Check out"</TableHeaderCell>
                        <TableHeaderCell>"Location"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let (loading, records) = history.with(|s| (s.loading, s.data.clone()));
                        match BodyState::of(loading, records.len()) {
                            BodyState::Loading => view! { <TableLoadingRow colspan=4 /> }.into_any(),
                            BodyState::Empty => {
                                view! { <TableEmptyRow colspan=4 text="No attendance records" /> }.into_any()
                            }
                            BodyState::Rows(_) => records.into_iter().map(|r| view! {
                                <TableRow>
                                    <TableCell>{format_date(&r.date)}</TableCell>
                                    <TableCell>{optional_time(&r.check_in_time)}</TableCell>
                                    <TableCell>{optional_time(&r.check_out_time)}</TableCell>
                                    <TableCell>{r.gps_location.clone().unwrap_or_default()}</TableCell>
                                </TableRow>
                            }).collect_view().into_any(),
                        }
                    }}
                </TableBody>
            </Table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, check_in: bool, check_out: bool) -> AttendanceRecord {
        AttendanceRecord {
            date: date.into(),
            check_in_time: check_in.then(|| format!("{}T04:30:00+00:00", date)),
            check_out_time: check_out.then(|| format!("{}T12:30:00+00:00", date)),
            gps_location: None,
        }
    }

    #[test]
    fn test_day_status() {
        let today = "2026-10-18";
        assert_eq!(day_status(&[], today), DayStatus::NotCheckedIn);
        assert_eq!(
            day_status(&[record("2026-10-17", true, true)], today),
            DayStatus::NotCheckedIn
        );
        assert_eq!(
            day_status(&[record(today, true, false), record("2026-10-17", true, true)], today),
            DayStatus::CheckedIn
        );
        assert_eq!(day_status(&[record(today, true, true)], today), DayStatus::CheckedOut);
    }

    #[test]
    fn test_optional_time_placeholder() {
        assert_eq!(optional_time(&None), "—");
    }
}
