use serde::{Deserialize, Serialize};

/// One day of attendance for the signed-in therapist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: String,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub gps_location: Option<String>,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.check_in_time.is_some() && self.check_out_time.is_none()
    }
}

/// Body of `POST /api/attendance/check-in`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub gps_location: Option<String>,
}

/// Response of check-in and check-out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceAck {
    pub message: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_record() {
        let json = r#"{"therapist_id":"u1","property_id":"p1","date":"2026-10-18",
            "check_in_time":"2026-10-18T04:30:00+00:00","gps_location":null}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_open());
    }

    #[test]
    fn test_closed_record() {
        let record = AttendanceRecord {
            date: "2026-10-18".into(),
            check_in_time: Some("2026-10-18T04:30:00+00:00".into()),
            check_out_time: Some("2026-10-18T12:30:00+00:00".into()),
            gps_location: None,
        };
        assert!(!record.is_open());
    }
}
