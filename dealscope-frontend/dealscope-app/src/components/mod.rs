pub mod analyzed_deals_list;
pub mod badge;
pub mod country_context;
pub mod deal_card;
pub mod panel;
