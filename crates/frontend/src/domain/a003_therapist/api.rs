use contracts::domain::a003_therapist::aggregate::TherapistProfile;

use crate::shared::api::{ApiClient, ApiError};

/// Therapist roster (admin only)
pub async fn fetch_all(client: ApiClient) -> Result<Vec<TherapistProfile>, ApiError> {
    client.get_json("/api/therapists").await
}
