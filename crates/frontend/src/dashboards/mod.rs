pub mod d100_admin_overview;
pub mod d101_my_incentive;

pub use d100_admin_overview::ui::AdminOverviewDashboard;
pub use d101_my_incentive::ui::MyIncentiveCard;
