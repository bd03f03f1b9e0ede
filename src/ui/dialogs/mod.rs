//! Datei-Dialoge, Alerts und transiente Hinweise.

mod alert;
mod file_dialogs;
mod notice;

pub use alert::show_alert;
pub use file_dialogs::handle_file_dialogs;
pub use notice::show_notice;
