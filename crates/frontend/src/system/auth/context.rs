use contracts::system::auth::{UserInfo, UserRole};
use leptos::prelude::*;

use super::storage;
use crate::shared::api::ApiClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn signed_in(token: String, user: UserInfo) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// The signed-in session, shared through context
///
/// `establish` starts a session after login, `end` tears it down on logout.
/// Views never touch storage directly; they ask the session for an [`ApiClient`].
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Session {
    /// Session restored from localStorage, or signed out if nothing was stored
    pub fn restore() -> Self {
        let state = match storage::load_session() {
            Some((token, user)) => {
                log::info!("Restored session for {}", user.email);
                AuthState::signed_in(token, user)
            }
            None => AuthState::default(),
        };
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn establish(&self, token: String, user: UserInfo) {
        storage::save_session(&token, &user);
        log::info!("Session established for {} ({:?})", user.email, user.role);
        self.state.set(AuthState::signed_in(token, user));
    }

    pub fn end(&self) {
        storage::clear_session();
        log::info!("Session ended");
        self.state.set(AuthState::default());
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.state.with(|s| s.role())
    }

    /// Client carrying the current bearer token; calls fail with `NotAuthenticated` after logout
    pub fn client(&self) -> ApiClient {
        match self.state.with_untracked(|s| s.token.clone()) {
            Some(token) => ApiClient::authenticated(token),
            None => ApiClient::anonymous(),
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(Session::restore());
    children()
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn therapist() -> UserInfo {
        UserInfo {
            user_id: "u2".into(),
            email: "asha@spa.in".into(),
            full_name: "Asha".into(),
            role: UserRole::Therapist,
            assigned_property_id: Some("p1".into()),
        }
    }

    #[test]
    fn test_signed_out_by_default() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), None);
    }

    #[test]
    fn test_signed_in_state() {
        let state = AuthState::signed_in("tok".into(), therapist());
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(UserRole::Therapist));
    }

    #[test]
    fn test_token_without_user_is_not_a_session() {
        let state = AuthState {
            token: Some("tok".into()),
            user: None,
        };
        assert!(!state.is_authenticated());
    }
}
