use contracts::domain::a002_attendance::aggregate::{
    AttendanceAck, AttendanceRecord, CheckInRequest,
};

use crate::shared::api::{ApiClient, ApiError};

/// Own attendance, newest first
pub async fn fetch_mine(client: ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    client.get_json("/api/attendance/my-attendance").await
}

pub async fn check_in(
    client: ApiClient,
    gps_location: Option<String>,
) -> Result<AttendanceAck, ApiError> {
    client
        .post_json("/api/attendance/check-in", &CheckInRequest { gps_location })
        .await
}

pub async fn check_out(client: ApiClient) -> Result<AttendanceAck, ApiError> {
    client.post_empty("/api/attendance/check-out").await
}
