use contracts::domain::a001_service_entry::aggregate::{PaymentReceivedBy, ServiceEntry};

/// Sums over the currently loaded service entries
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceTotals {
    pub count: usize,
    pub base_sales: f64,
    pub gst: f64,
    pub revenue: f64,
    pub received_by_hotel: f64,
    pub received_by_nirvaana: f64,
}

impl ServiceTotals {
    pub fn from_entries(entries: &[ServiceEntry]) -> Self {
        entries.iter().fold(
            Self {
                count: entries.len(),
                ..Self::default()
            },
            |mut acc, e| {
                acc.base_sales += e.base_price;
                acc.gst += e.gst_amount;
                acc.revenue += e.total_amount;
                match e.payment_received_by {
                    PaymentReceivedBy::Hotel => acc.received_by_hotel += e.total_amount,
                    PaymentReceivedBy::Nirvaana => acc.received_by_nirvaana += e.total_amount,
                }
                acc
            },
        )
    }
}
