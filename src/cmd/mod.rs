pub mod actions;
pub mod menu;
