pub mod agenda_view;
pub mod utils;
