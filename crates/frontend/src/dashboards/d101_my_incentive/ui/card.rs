use contracts::dashboards::d101_my_incentive::dto::IncentiveSummary;
use leptos::prelude::*;

use crate::dashboards::d101_my_incentive::api;
use crate::layout::notification_service::use_notifications;
use crate::shared::fetch_state::{spawn_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::money::{format_inr, format_percent};
use crate::system::auth::context::use_session;

/// Line under the progress bar
fn incentive_hint(s: &IncentiveSummary) -> String {
    if s.above_threshold() {
        format!(
            "{} above threshold, incentive earned {}",
            format_inr(s.excess_amount),
            format_inr(s.incentive_earned)
        )
    } else {
        format!(
            "{} more to reach the incentive threshold",
            format_inr(s.threshold - s.actual_sales)
        )
    }
}

/// This month's target progress for the signed-in therapist
#[component]
pub fn MyIncentiveCard() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let fetch: RwSignal<FetchState<Option<IncentiveSummary>>> = RwSignal::new(FetchState::default());

    Effect::new(move |_| {
        if fetch.with_untracked(|s| s.loaded_once || s.loading) {
            return;
        }
        let client = session.client();
        spawn_fetch(fetch, notifications, "Failed to load incentive", move || async move {
            api::get_my_incentive(client).await.map(Some)
        });
    });

    let body = move || {
        let (loading, summary) = fetch.with(|s| (s.loading, s.data.clone()));
        match summary {
            Some(s) => {
                let width = format!("width: {:.2}%", s.progress_bar_value());
                let fill_class = if s.above_threshold() {
                    "progress__fill progress__fill--success"
                } else {
                    "progress__fill"
                };
                view! {
                    <div class="incentive">
                        <div class="incentive__figures">
                            <div>
                                <span class="incentive__label">"Sales this month"</span>
                                <strong>{format_inr(s.actual_sales)}</strong>
                            </div>
                            <div>
                                <span class="incentive__label">"Target"</span>
                                <strong>{format_inr(s.target)}</strong>
                            </div>
                            <div>
                                <span class="incentive__label">"Threshold"</span>
                                <strong>{format_inr(s.threshold)}</strong>
                            </div>
                            <div>
                                <span class="incentive__label">"Incentive"</span>
                                <strong>{format_inr(s.incentive_earned)}</strong>
                            </div>
                        </div>
                        <div class="progress">
                            <div class=fill_class style=width></div>
                        </div>
                        <div class="incentive__hint">
                            {format_percent(s.progress_percentage)}
                            " of target · "
                            {incentive_hint(&s)}
                        </div>
                    </div>
                }
                .into_any()
            }
            None if loading => view! { <div class="card__placeholder">"Loading..."</div> }.into_any(),
            None => view! { <div class="card__placeholder">"No incentive data"</div> }.into_any(),
        }
    };

    view! {
        <section class="card">
            <div class="card__header">
                {icon("award")}
                <h3>"My Incentive"</h3>
            </div>
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(actual: f64, excess: f64, earned: f64) -> IncentiveSummary {
        IncentiveSummary {
            target: 50000.0,
            threshold: 45000.0,
            actual_sales: actual,
            incentive_earned: earned,
            excess_amount: excess,
            progress_percentage: actual / 500.0,
        }
    }

    #[test]
    fn test_hint_below_threshold() {
        assert_eq!(
            incentive_hint(&summary(40000.0, 0.0, 0.0)),
            "₹5,000 more to reach the incentive threshold"
        );
    }

    #[test]
    fn test_hint_above_threshold() {
        assert_eq!(
            incentive_hint(&summary(55000.0, 10000.0, 500.0)),
            "₹10,000 above threshold, incentive earned ₹500"
        );
    }
}
