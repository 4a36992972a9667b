use contracts::domain::a001_service_entry::aggregate::{ServiceEntry, ServiceListFilter};
use contracts::domain::a003_therapist::aggregate::TherapistProfile;
use leptos::prelude::*;

use crate::shared::fetch_state::FetchState;

/// Loaded entries together with the filter that produced them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceListing {
    pub filter: ServiceListFilter,
    pub entries: Vec<ServiceEntry>,
}

/// View-local state of the admin service list; dropped when the page unmounts
#[derive(Clone, Copy)]
pub struct ServiceListState {
    /// Raw date inputs (yyyy-mm-dd or empty)
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    /// Selected therapist `user_id`, empty for all therapists
    pub therapist_id: RwSignal<String>,
    pub fetch: RwSignal<FetchState<ServiceListing>>,
    /// Options of the therapist selector
    pub therapists: RwSignal<FetchState<Vec<TherapistProfile>>>,
}

impl ServiceListState {
    pub fn current_filter(&self) -> ServiceListFilter {
        ServiceListFilter::from_inputs(
            &self.date_from.get_untracked(),
            &self.date_to.get_untracked(),
            &self.therapist_id.get_untracked(),
        )
    }

    pub fn clear_filter(&self) {
        self.date_from.set(String::new());
        self.date_to.set(String::new());
        self.therapist_id.set(String::new());
    }
}

pub fn create_state() -> ServiceListState {
    ServiceListState {
        date_from: RwSignal::new(String::new()),
        date_to: RwSignal::new(String::new()),
        therapist_id: RwSignal::new(String::new()),
        fetch: RwSignal::new(FetchState::default()),
        therapists: RwSignal::new(FetchState::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiError;
    use crate::shared::fetch_state::FetchOutcome;

    #[test]
    fn test_failed_load_keeps_applied_filter() {
        let mut state: FetchState<ServiceListing> = FetchState::default();
        let first = ServiceListFilter::from_inputs("2026-10-01", "", "");
        let g = state.start();
        state.finish(
            g,
            Ok(ServiceListing {
                filter: first.clone(),
                entries: Vec::new(),
            }),
        );

        // a narrower filter whose load fails must not replace the shown one
        let g = state.start();
        let outcome = state.finish(g, Err(ApiError::Network("offline".into())));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(state.data.filter, first);
        assert_eq!(state.data.filter.active_count(), 1);
    }
}
