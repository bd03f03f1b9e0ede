//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod notice;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Strecke, Szene, View, Dialoge).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use notice::{NoticeKind, TransientNotice};
pub use state::{AppState, UiState, ViewState};
