use serde::{Deserialize, Serialize};

/// Response of `GET /api/incentives/my-incentive`, all figures computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveSummary {
    pub target: f64,
    pub threshold: f64,
    pub actual_sales: f64,
    pub incentive_earned: f64,
    pub excess_amount: f64,
    pub progress_percentage: f64,
}

impl IncentiveSummary {
    pub fn above_threshold(&self) -> bool {
        self.actual_sales > self.threshold
    }

    /// Progress clamped to 0..=100 for a progress bar
    pub fn progress_bar_value(&self) -> f64 {
        self.progress_percentage.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(actual: f64, progress: f64) -> IncentiveSummary {
        IncentiveSummary {
            target: 50000.0,
            threshold: 45000.0,
            actual_sales: actual,
            incentive_earned: 0.0,
            excess_amount: 0.0,
            progress_percentage: progress,
        }
    }

    #[test]
    fn test_threshold() {
        assert!(!summary(45000.0, 90.0).above_threshold());
        assert!(summary(45001.0, 90.0).above_threshold());
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(summary(60000.0, 120.0).progress_bar_value(), 100.0);
        assert_eq!(summary(0.0, 0.0).progress_bar_value(), 0.0);
    }
}
