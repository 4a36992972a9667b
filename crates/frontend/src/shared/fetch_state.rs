//! Load state for fetch-and-render views
//!
//! A view keeps one `FetchState<T>` in an `RwSignal`. Each load takes a
//! generation number from [`FetchState::start`]; only the result carrying the
//! latest generation is applied, so a slow earlier response can never
//! overwrite a newer one.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::notification_service::NotificationService;
use crate::shared::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Issue a new generation; every earlier one becomes stale
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Applied,
    Failed(ApiError),
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub loaded_once: bool,
    generation: RequestGeneration,
}

impl<T> FetchState<T> {
    /// Mark a load as pending and return its generation
    pub fn start(&mut self) -> u64 {
        self.loading = true;
        self.generation.issue()
    }

    /// Apply a finished load. Failures keep the previous data.
    pub fn finish(&mut self, generation: u64, result: Result<T, ApiError>) -> FetchOutcome {
        if !self.generation.is_current(generation) {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.loaded_once = true;
                FetchOutcome::Applied
            }
            Err(err) => FetchOutcome::Failed(err),
        }
    }
}

/// Run `load` for `state` and report a failure as one error notification
pub fn spawn_fetch<T, F, Fut>(
    state: RwSignal<FetchState<T>>,
    notifications: NotificationService,
    failure_message: &'static str,
    load: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(generation) = state.try_update(|s| s.start()) else {
        return;
    };
    spawn_local(async move {
        let result = load().await;
        match state.try_update(|s| s.finish(generation, result)) {
            Some(FetchOutcome::Failed(err)) => {
                if err.is_unauthorized() {
                    log::info!("{}: request rejected, session is missing or expired", failure_message);
                } else {
                    log::warn!("{}: {}", failure_message, err);
                }
                notifications.error(err.user_message(failure_message));
            }
            Some(FetchOutcome::Stale) => {
                log::debug!("dropped stale response (generation {})", generation);
            }
            Some(FetchOutcome::Applied) | None => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_generation_wins() {
        let mut state: FetchState<Vec<u32>> = FetchState::default();
        let first = state.start();
        let second = state.start();

        assert_eq!(state.finish(second, Ok(vec![2, 2])), FetchOutcome::Applied);
        assert_eq!(state.finish(first, Ok(vec![1])), FetchOutcome::Stale);
        assert_eq!(state.data, vec![2, 2]);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_keeps_loading_flag() {
        let mut state: FetchState<Vec<u32>> = FetchState::default();
        let first = state.start();
        let _second = state.start();

        assert_eq!(state.finish(first, Ok(vec![1])), FetchOutcome::Stale);
        assert!(state.loading);
        assert!(state.data.is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state: FetchState<Vec<u32>> = FetchState::default();
        let g = state.start();
        state.finish(g, Ok(vec![7]));

        let g = state.start();
        let outcome = state.finish(g, Err(ApiError::Network("offline".into())));
        assert_eq!(outcome, FetchOutcome::Failed(ApiError::Network("offline".into())));
        assert_eq!(state.data, vec![7]);
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_first_load_stays_empty() {
        let mut state: FetchState<Option<String>> = FetchState::default();
        let g = state.start();
        state.finish(g, Err(ApiError::Status { status: 500, detail: None }));
        assert_eq!(state.data, None);
        assert!(!state.loaded_once);
    }
}
