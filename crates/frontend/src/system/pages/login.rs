use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::notification_service::{use_notifications, NotificationKind};
use crate::shared::api::ApiError;
use crate::shared::submit_state::SubmitState;
use crate::system::auth::{api, context::use_session};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Route a finished login to exactly one notification and, on success, one session start
fn settle_login(
    result: Result<LoginResponse, ApiError>,
    on_login: impl FnOnce(String, UserInfo),
    mut notify: impl FnMut(NotificationKind, String),
) {
    match result {
        Ok(response) => {
            notify(
                NotificationKind::Success,
                format!("Welcome back, {}", response.user.full_name),
            );
            on_login(response.token, response.user);
        }
        Err(e) => {
            notify(NotificationKind::Error, e.user_message(LOGIN_FAILED));
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let submit_state = RwSignal::new(SubmitState::Idle);

    let session = use_session();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let is_loading = move || submit_state.with(|s| s.is_submitting());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !submit_state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = api::login(email_val, password_val).await;
            settle_login(
                result,
                |token, user| {
                    session.establish(token, user);
                    navigate("/", NavigateOptions::default());
                },
                |kind, message| match kind {
                    NotificationKind::Success => {
                        notifications.clear_errors();
                        notifications.success(message);
                    }
                    NotificationKind::Error => notifications.error(message),
                    NotificationKind::Info => notifications.info(message),
                },
            );
            submit_state.update(|s| s.finish());
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Wellness Operations"</h1>
                <h2>"Staff sign in"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=is_loading
                    >
                        {move || submit_state.with(|s| s.label("Sign In", "Signing in..."))}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::notification_service::NotificationQueue;
    use contracts::system::auth::UserRole;

    fn response() -> LoginResponse {
        LoginResponse {
            token: "jwt".into(),
            user: UserInfo {
                user_id: "u1".into(),
                email: "admin@spa.in".into(),
                full_name: "Meera".into(),
                role: UserRole::SuperAdmin,
                assigned_property_id: None,
            },
        }
    }

    #[test]
    fn test_success_notifies_once_and_starts_session_once() {
        let mut logins = Vec::new();
        let mut notes = Vec::new();
        settle_login(
            Ok(response()),
            |token, user| logins.push((token, user.user_id)),
            |kind, msg| notes.push((kind, msg)),
        );
        assert_eq!(logins, vec![("jwt".to_string(), "u1".to_string())]);
        assert_eq!(
            notes,
            vec![(NotificationKind::Success, "Welcome back, Meera".to_string())]
        );
    }

    #[test]
    fn test_failure_notifies_once_without_session() {
        let mut logins = 0;
        let mut notes = Vec::new();
        settle_login(
            Err(ApiError::Status {
                status: 401,
                detail: Some("Invalid credentials".into()),
            }),
            |_, _| logins += 1,
            |kind, msg| notes.push((kind, msg)),
        );
        assert_eq!(logins, 0);
        assert_eq!(
            notes,
            vec![(NotificationKind::Error, "Invalid credentials".to_string())]
        );
    }

    #[test]
    fn test_failure_without_detail_uses_generic_message() {
        let mut notes = Vec::new();
        settle_login(
            Err(ApiError::Network("offline".into())),
            |_, _| {},
            |kind, msg| notes.push((kind, msg)),
        );
        assert_eq!(notes, vec![(NotificationKind::Error, LOGIN_FAILED.to_string())]);
    }

    #[test]
    fn test_retry_after_failure_leaves_only_welcome() {
        let mut queue = NotificationQueue::default();
        let route = |queue: &mut NotificationQueue, kind: NotificationKind, msg: String| {
            if kind == NotificationKind::Success {
                queue.clear_kind(NotificationKind::Error);
            }
            queue.push(kind, msg);
        };

        settle_login(
            Err(ApiError::Status {
                status: 401,
                detail: Some("Invalid credentials".into()),
            }),
            |_, _| {},
            |kind, msg| route(&mut queue, kind, msg),
        );
        assert_eq!(queue.items().len(), 1);

        settle_login(Ok(response()), |_, _| {}, |kind, msg| route(&mut queue, kind, msg));
        let shown: Vec<_> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(shown, vec!["Welcome back, Meera"]);
    }
}
