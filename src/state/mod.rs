pub mod app_state;
pub mod roster;
pub mod theme;
