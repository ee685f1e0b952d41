pub mod canvas;
pub mod color;
pub mod config;
pub mod consts;
pub mod decode;
pub mod error;
pub mod geometry;
pub mod inspector;
pub mod labels;
pub mod load;
pub mod source;
pub mod state;
