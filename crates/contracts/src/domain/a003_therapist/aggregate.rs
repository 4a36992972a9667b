use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapistProfile {
    pub user_id: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub experience_years: f64,
    pub assigned_property_id: String,
    #[serde(default)]
    pub monthly_target: f64,
    #[serde(default)]
    pub status: Option<String>,
}

impl TherapistProfile {
    /// Records without a status predate archiving and count as active
    pub fn is_active(&self) -> bool {
        self.status.as_deref().map_or(true, |s| s == "active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_active() {
        let json = r#"{"user_id":"u1","full_name":"Asha","phone":"1","email":"a@b",
            "experience_years":3.5,"assigned_property_id":"p1","monthly_target":50000}"#;
        let t: TherapistProfile = serde_json::from_str(json).unwrap();
        assert!(t.is_active());
        assert_eq!(t.monthly_target, 50000.0);
    }

    #[test]
    fn test_archived() {
        let json = r#"{"user_id":"u1","full_name":"Asha","phone":"1","email":"a@b",
            "assigned_property_id":"p1","status":"archived"}"#;
        let t: TherapistProfile = serde_json::from_str(json).unwrap();
        assert!(!t.is_active());
    }
}
