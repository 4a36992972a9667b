pub mod api;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod fetch_state;
pub mod icons;
pub mod money;
pub mod submit_state;
