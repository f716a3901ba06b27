pub mod folder_browser_dialog;
pub mod job_windows;
