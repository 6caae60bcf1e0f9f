pub mod app;
pub mod model;
pub mod source;
pub mod text;
pub mod ui;

pub use app::QuizApp;
