pub mod app;
pub mod deferred;
pub mod form;
pub mod input;
pub mod item;
pub mod render;
pub mod text_input;
pub mod theme;

pub use app::run;
