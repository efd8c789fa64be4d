pub mod chrome;
pub mod form;
pub mod header;
pub mod menu;
pub mod status_bar;
