use serde::{Deserialize, Serialize};

/// Who collected the money for a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentReceivedBy {
    Hotel,
    Nirvaana,
}

impl PaymentReceivedBy {
    pub const ALL: [PaymentReceivedBy; 2] = [PaymentReceivedBy::Hotel, PaymentReceivedBy::Nirvaana];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentReceivedBy::Hotel => "hotel",
            PaymentReceivedBy::Nirvaana => "nirvaana",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentReceivedBy::Hotel => "Hotel",
            PaymentReceivedBy::Nirvaana => "Nirvaana",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Cash,
    Upi,
    Card,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 3] = [PaymentMode::Cash, PaymentMode::Upi, PaymentMode::Card];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "cash",
            PaymentMode::Upi => "upi",
            PaymentMode::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

/// A logged therapy session as returned by `/api/services` and `/api/services/my-services`
///
/// `total_amount` is expected to equal `base_price + gst_amount`; the server computes all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub date: String,
    pub time: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub therapy_type: String,
    pub therapy_duration: String,
    pub base_price: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
    pub payment_received_by: PaymentReceivedBy,
    #[serde(default)]
    pub payment_mode: Option<PaymentMode>,
    #[serde(default)]
    pub therapist_id: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
}

/// Body of `POST /api/services`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntryCreate {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub therapy_type: String,
    pub therapy_duration: String,
    pub base_price: f64,
    pub payment_received_by: PaymentReceivedBy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<PaymentMode>,
}

/// Response of `POST /api/services`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreated {
    pub message: String,
    pub service_id: String,
    pub gst_amount: f64,
    pub total_amount: f64,
}

/// Query parameters of `GET /api/services`
///
/// Absent values are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapist_id: Option<String>,
}

impl ServiceListFilter {
    /// Build a filter from raw input values, treating blank inputs as "not supplied"
    pub fn from_inputs(date_from: &str, date_to: &str, therapist_id: &str) -> Self {
        Self {
            date_from: non_blank(date_from),
            date_to: non_blank(date_to),
            therapist_id: non_blank(therapist_id),
        }
    }

    pub fn active_count(&self) -> usize {
        [&self.date_from, &self.date_to, &self.therapist_id]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_entry_decodes_listing_row() {
        let json = r#"{
            "therapist_id": "u1",
            "property_id": "p1",
            "customer_name": "Ravi",
            "customer_phone": "9876543210",
            "therapy_type": "Swedish",
            "therapy_duration": "60 min",
            "base_price": 1000,
            "gst_amount": 180,
            "total_amount": 1180,
            "payment_received_by": "hotel",
            "payment_mode": "upi",
            "date": "2026-10-01",
            "time": "14:02:26",
            "locked": true,
            "whatsapp_sent": false,
            "created_at": "2026-10-01T14:02:26+00:00"
        }"#;
        let entry: ServiceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.payment_received_by, PaymentReceivedBy::Hotel);
        assert_eq!(entry.payment_mode, Some(PaymentMode::Upi));
        assert_eq!(entry.total_amount, entry.base_price + entry.gst_amount);
    }

    #[test]
    fn test_service_entry_rejects_missing_amount() {
        let json = r#"{
            "customer_name": "Ravi",
            "therapy_type": "Swedish",
            "therapy_duration": "60 min",
            "base_price": 1000,
            "payment_received_by": "hotel",
            "date": "2026-10-01",
            "time": "14:02:26"
        }"#;
        assert!(serde_json::from_str::<ServiceEntry>(json).is_err());
    }

    #[test]
    fn test_create_omits_absent_optionals() {
        let body = ServiceEntryCreate {
            customer_name: "Ravi".into(),
            customer_phone: "98".into(),
            customer_email: None,
            therapy_type: "Thai".into(),
            therapy_duration: "90 min".into(),
            base_price: 2500.0,
            payment_received_by: PaymentReceivedBy::Nirvaana,
            payment_mode: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("customer_email").is_none());
        assert!(value.get("payment_mode").is_none());
        assert_eq!(value["payment_received_by"], "nirvaana");
    }

    #[test]
    fn test_filter_from_inputs() {
        let filter = ServiceListFilter::from_inputs("2026-10-01", "  ", "");
        assert_eq!(filter.date_from.as_deref(), Some("2026-10-01"));
        assert_eq!(filter.date_to, None);
        assert_eq!(filter.therapist_id, None);
        assert_eq!(filter.active_count(), 1);
        assert_eq!(ServiceListFilter::from_inputs("", "", "").active_count(), 0);

        let by_therapist = ServiceListFilter::from_inputs("", "", "u7");
        assert_eq!(by_therapist.therapist_id.as_deref(), Some("u7"));
        assert_eq!(by_therapist.active_count(), 1);
    }

    #[test]
    fn test_payment_codes() {
        assert_eq!(PaymentReceivedBy::from_code("hotel"), Some(PaymentReceivedBy::Hotel));
        assert_eq!(PaymentMode::from_code("upi"), Some(PaymentMode::Upi));
        assert_eq!(PaymentMode::from_code("cheque"), None);
    }
}
