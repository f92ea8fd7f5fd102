pub mod button_panel;
pub mod display_panel;
pub mod input_panel;
pub mod notice;
