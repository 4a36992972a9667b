use contracts::domain::a004_property::aggregate::PropertyRecord;

use crate::shared::api::{ApiClient, ApiError};

/// All properties the business operates in
pub async fn fetch_all(client: ApiClient) -> Result<Vec<PropertyRecord>, ApiError> {
    client.get_json("/api/properties").await
}
