use contracts::domain::a001_service_entry::aggregate::{
    ServiceCreated, ServiceEntry, ServiceEntryCreate, ServiceListFilter,
};

use crate::shared::api::{build_query, ApiClient, ApiError};

/// All service entries (admin), narrowed by the supplied dates only
pub async fn fetch_all(
    client: ApiClient,
    filter: ServiceListFilter,
) -> Result<Vec<ServiceEntry>, ApiError> {
    let query = build_query(&filter)?;
    client.get_json_with_query("/api/services", &query).await
}

/// Service entries logged by the signed-in therapist
pub async fn fetch_mine(client: ApiClient) -> Result<Vec<ServiceEntry>, ApiError> {
    client.get_json("/api/services/my-services").await
}

/// Log a new service; GST and total are computed by the server
pub async fn create(
    client: ApiClient,
    dto: ServiceEntryCreate,
) -> Result<ServiceCreated, ApiError> {
    client.post_json("/api/services", &dto).await
}
