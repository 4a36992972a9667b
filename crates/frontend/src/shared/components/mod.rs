pub mod date_input;
pub mod date_range_filter;
pub mod page_header;
pub mod stat_card;
pub mod table_placeholder;
pub mod ui;
