use serde::{Deserialize, Serialize};

/// Response of `GET /api/analytics/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAnalytics {
    pub total_base_sales: f64,
    pub total_gst: f64,
    pub total_sales: f64,
    pub hotel_received: f64,
    pub nirvaana_received: f64,
    pub customer_count: u64,
    /// "N/A" when no services exist yet
    pub most_popular_therapy: String,
    pub total_services: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_dashboard() {
        let json = r#"{"total_base_sales":0,"total_gst":0,"total_sales":0,
            "hotel_received":0,"nirvaana_received":0,"customer_count":0,
            "most_popular_therapy":"N/A","total_services":0}"#;
        let d: DashboardAnalytics = serde_json::from_str(json).unwrap();
        assert_eq!(d.total_services, 0);
        assert_eq!(d.most_popular_therapy, "N/A");
    }
}
