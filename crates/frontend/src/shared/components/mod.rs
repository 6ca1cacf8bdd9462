pub mod date_input;
pub mod month_selector;
pub mod monthly_chart;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
