pub mod app;
pub mod format;
pub mod render;
pub mod utils;
