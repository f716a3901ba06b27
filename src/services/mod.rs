// Service module exports

pub mod api;
pub mod folder_browser;
pub mod materializer;
pub mod settings;
