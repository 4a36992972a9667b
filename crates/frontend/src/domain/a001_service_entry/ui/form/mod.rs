mod view_model;

use contracts::domain::a001_service_entry::aggregate::{PaymentMode, PaymentReceivedBy};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_service_entry::api;
use crate::layout::notification_service::use_notifications;
use crate::shared::money::format_inr;
use crate::shared::submit_state::SubmitState;
use crate::system::auth::context::use_session;
use view_model::{ServiceFormModel, DURATIONS, THERAPY_TYPES};

/// Form for a therapist to log a completed service
#[component]
pub fn LogServiceForm(
    /// Called after the server accepted an entry
    on_logged: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let form = RwSignal::new(ServiceFormModel::default());
    let submit_state = RwSignal::new(SubmitState::Idle);

    let is_saving = move || submit_state.with(|s| s.is_submitting());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = match form.with_untracked(|f| f.validate()) {
            Ok(dto) => dto,
            Err(message) => {
                notifications.error(message);
                return;
            }
        };
        if !submit_state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let client = session.client();
        spawn_local(async move {
            match api::create(client, dto).await {
                Ok(created) => {
                    notifications.success(format!(
                        "Service logged. Total {} (GST {})",
                        format_inr(created.total_amount),
                        format_inr(created.gst_amount)
                    ));
                    form.set(ServiceFormModel::default());
                    on_logged.run(());
                }
                Err(e) => {
                    notifications.error(e.user_message("Failed to log service"));
                }
            }
            submit_state.update(|s| s.finish());
        });
    };

    let preview = move || {
        form.with(|f| f.gst_preview()).map(|(gst, total)| {
            view! {
                <div class="form-hint">
                    {format!("GST 18%: {} · Total: {} (estimate)", format_inr(gst), format_inr(total))}
                </div>
            }
        })
    };

    view! {
        <section class="card">
            <div class="card__header">
                <h3>"Log a Service"</h3>
            </div>
            <form class="service-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="customer_name">"Customer name *"</label>
                        <input
                            type="text"
                            id="customer_name"
                            prop:value=move || form.with(|f| f.customer_name.clone())
                            on:input=move |ev| form.update(|f| f.customer_name = event_target_value(&ev))
                            disabled=is_saving
                        />
                    </div>
                    <div class="form-group">
                        <label for="customer_phone">"Phone *"</label>
                        <input
                            type="tel"
                            id="customer_phone"
                            prop:value=move || form.with(|f| f.customer_phone.clone())
                            on:input=move |ev| form.update(|f| f.customer_phone = event_target_value(&ev))
                            disabled=is_saving
                        />
                    </div>
                    <div class="form-group">
                        <label for="customer_email">"Email (for feedback)"</label>
                        <input
                            type="email"
                            id="customer_email"
                            prop:value=move || form.with(|f| f.customer_email.clone())
                            on:input=move |ev| form.update(|f| f.customer_email = event_target_value(&ev))
                            disabled=is_saving
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="therapy_type">"Therapy"</label>
                        <select
                            id="therapy_type"
                            on:change=move |ev| form.update(|f| f.therapy_type = event_target_value(&ev))
                            disabled=is_saving
                        >
                            {THERAPY_TYPES.into_iter().map(|t| view! {
                                <option value=t selected=move || form.with(|f| f.therapy_type == t)>{t}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="therapy_duration">"Duration"</label>
                        <select
                            id="therapy_duration"
                            on:change=move |ev| form.update(|f| f.therapy_duration = event_target_value(&ev))
                            disabled=is_saving
                        >
                            {DURATIONS.into_iter().map(|d| view! {
                                <option value=d selected=move || form.with(|f| f.therapy_duration == d)>{d}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="base_price">"Base price (₹) *"</label>
                        <input
                            type="number"
                            id="base_price"
                            min="1"
                            step="0.01"
                            prop:value=move || form.with(|f| f.base_price.clone())
                            on:input=move |ev| form.update(|f| f.base_price = event_target_value(&ev))
                            disabled=is_saving
                        />
                        {preview}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="payment_received_by">"Payment received by"</label>
                        <select
                            id="payment_received_by"
                            on:change=move |ev| form.update(|f| f.payment_received_by = event_target_value(&ev))
                            disabled=is_saving
                        >
                            {PaymentReceivedBy::ALL.into_iter().map(|p| view! {
                                <option
                                    value=p.code()
                                    selected=move || form.with(|f| f.payment_received_by == p.code())
                                >
                                    {p.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="payment_mode">"Payment mode"</label>
                        <select
                            id="payment_mode"
                            on:change=move |ev| form.update(|f| f.payment_mode = event_target_value(&ev))
                            disabled=is_saving
                        >
                            <option value="" selected=move || form.with(|f| f.payment_mode.is_empty())>
                                "Not recorded"
                            </option>
                            {PaymentMode::ALL.into_iter().map(|m| view! {
                                <option
                                    value=m.code()
                                    selected=move || form.with(|f| f.payment_mode == m.code())
                                >
                                    {m.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <button type="submit" class="btn-primary" disabled=is_saving>
                    {move || submit_state.with(|s| s.label("Log Service", "Saving..."))}
                </button>
            </form>
        </section>
    }
}
