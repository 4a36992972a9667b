use serde::{Deserialize, Serialize};

/// Whether the spa runs on its own premises or inside a partner hotel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipType {
    OurProperty,
    #[default]
    OutsideProperty,
}

impl OwnershipType {
    pub fn display_name(&self) -> &'static str {
        match self {
            OwnershipType::OurProperty => "Own property",
            OwnershipType::OutsideProperty => "Partner hotel",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCycle {
    #[default]
    Monthly,
    Biweekly,
}

impl PaymentCycle {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentCycle::Monthly => "Monthly",
            PaymentCycle::Biweekly => "Biweekly",
        }
    }
}

/// A row of `GET /api/properties`
///
/// The listing carries no id; properties are referenced elsewhere by the
/// `assigned_property_id` of users and therapists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub hotel_name: String,
    pub location: String,
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub ownership_type: OwnershipType,
    /// Hotel's share of base sales in percent; only partner hotels have one
    #[serde(default)]
    pub revenue_share_percentage: Option<f64>,
    #[serde(default)]
    pub payment_cycle: Option<PaymentCycle>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub status: Option<String>,
}

fn default_active() -> bool {
    true
}

impl PropertyRecord {
    /// Archived or deactivated properties are inactive
    pub fn is_active(&self) -> bool {
        self.active && self.status.as_deref().map_or(true, |s| s == "active")
    }
}
