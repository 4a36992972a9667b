use contracts::domain::a001_service_entry::aggregate::{
    PaymentMode, PaymentReceivedBy, ServiceEntryCreate,
};

/// Shown next to the price as an estimate; the server's figures are authoritative
pub const GST_RATE: f64 = 0.18;

pub const THERAPY_TYPES: [&str; 6] = [
    "Swedish Massage",
    "Deep Tissue Massage",
    "Hot Stone Massage",
    "Aromatherapy",
    "Shirodhara",
    "Abhyanga",
];

pub const DURATIONS: [&str; 4] = ["30 minutes", "60 minutes", "90 minutes", "120 minutes"];

/// Raw form inputs for logging a service
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceFormModel {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub therapy_type: String,
    pub therapy_duration: String,
    pub base_price: String,
    pub payment_received_by: String,
    /// Empty means not recorded
    pub payment_mode: String,
}

impl Default for ServiceFormModel {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            therapy_type: THERAPY_TYPES[0].to_string(),
            therapy_duration: DURATIONS[1].to_string(),
            base_price: String::new(),
            payment_received_by: PaymentReceivedBy::Hotel.code().to_string(),
            payment_mode: PaymentMode::Cash.code().to_string(),
        }
    }
}

impl ServiceFormModel {
    pub fn parsed_price(&self) -> Option<f64> {
        self.base_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// `(gst, total)` estimate for the entered price
    pub fn gst_preview(&self) -> Option<(f64, f64)> {
        self.parsed_price().map(|price| {
            let gst = (price * GST_RATE * 100.0).round() / 100.0;
            (gst, ((price + gst) * 100.0).round() / 100.0)
        })
    }

    pub fn validate(&self) -> Result<ServiceEntryCreate, String> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err("Customer name is required".into());
        }
        let customer_phone = self.customer_phone.trim();
        if customer_phone.is_empty() {
            return Err("Customer phone is required".into());
        }
        if self.therapy_type.trim().is_empty() || self.therapy_duration.trim().is_empty() {
            return Err("Select a therapy and duration".into());
        }
        let base_price = self
            .parsed_price()
            .ok_or_else(|| "Base price must be greater than 0".to_string())?;
        let payment_received_by = PaymentReceivedBy::from_code(&self.payment_received_by)
            .ok_or_else(|| "Select who received the payment".to_string())?;
        let email = self.customer_email.trim();

        Ok(ServiceEntryCreate {
            customer_name: customer_name.to_string(),
            customer_phone: customer_phone.to_string(),
            customer_email: (!email.is_empty()).then(|| email.to_string()),
            therapy_type: self.therapy_type.trim().to_string(),
            therapy_duration: self.therapy_duration.trim().to_string(),
            base_price,
            payment_received_by,
            payment_mode: PaymentMode::from_code(&self.payment_mode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ServiceFormModel {
        ServiceFormModel {
            customer_name: " Ravi Kumar ".into(),
            customer_phone: "9876543210".into(),
            base_price: "1000".into(),
            ..ServiceFormModel::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let dto = filled().validate().unwrap();
        assert_eq!(dto.customer_name, "Ravi Kumar");
        assert_eq!(dto.base_price, 1000.0);
        assert_eq!(dto.payment_received_by, PaymentReceivedBy::Hotel);
        assert_eq!(dto.payment_mode, Some(PaymentMode::Cash));
        assert_eq!(dto.customer_email, None);
    }

    #[test]
    fn test_price_must_be_positive() {
        for bad in ["0", "-10", "abc", ""] {
            let form = ServiceFormModel {
                base_price: bad.into(),
                ..filled()
            };
            assert_eq!(
                form.validate().unwrap_err(),
                "Base price must be greater than 0"
            );
        }
    }

    #[test]
    fn test_missing_customer() {
        let form = ServiceFormModel {
            customer_name: "  ".into(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err(), "Customer name is required");
    }

    #[test]
    fn test_payment_mode_optional() {
        let form = ServiceFormModel {
            payment_mode: String::new(),
            customer_email: "ravi@mail.in".into(),
            ..filled()
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.payment_mode, None);
        assert_eq!(dto.customer_email.as_deref(), Some("ravi@mail.in"));
    }

    #[test]
    fn test_gst_preview() {
        assert_eq!(filled().gst_preview(), Some((180.0, 1180.0)));
        let odd = ServiceFormModel {
            base_price: "999.99".into(),
            ..filled()
        };
        assert_eq!(odd.gst_preview(), Some((180.0, 1179.99)));
        assert_eq!(ServiceFormModel::default().gst_preview(), None);
    }
}
