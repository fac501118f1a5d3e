pub mod ai_coach;
pub mod footer;
pub mod navbar;
pub mod preset_selector;
pub mod sensitivity_card;
pub mod status_badge;
