pub mod canvas;
pub mod inspector;
pub mod menu_bar;
pub mod readouts;
pub mod source_bar;
