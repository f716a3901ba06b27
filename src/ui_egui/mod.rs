mod app;
pub mod dialogs;
pub mod host;
pub mod views;

pub use app::SchedulerApp;
