use contracts::dashboards::d101_my_incentive::dto::IncentiveSummary;

use crate::shared::api::{ApiClient, ApiError};

/// Current month's incentive position of the signed-in therapist
pub async fn get_my_incentive(client: ApiClient) -> Result<IncentiveSummary, ApiError> {
    client.get_json("/api/incentives/my-incentive").await
}
