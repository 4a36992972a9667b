pub mod d100_admin_overview;
pub mod d101_my_incentive;
