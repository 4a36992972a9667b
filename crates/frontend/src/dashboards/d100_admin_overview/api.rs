use contracts::dashboards::d100_admin_overview::dto::DashboardAnalytics;

use crate::shared::api::{ApiClient, ApiError};

/// Business-wide KPIs computed by the server
pub async fn get_dashboard(client: ApiClient) -> Result<DashboardAnalytics, ApiError> {
    client.get_json("/api/analytics/dashboard").await
}
