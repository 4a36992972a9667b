pub mod api;
pub mod totals;
pub mod ui;
