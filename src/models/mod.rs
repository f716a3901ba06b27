// Module exports for models

pub mod calendar_event;
pub mod folder;
pub mod settings;
