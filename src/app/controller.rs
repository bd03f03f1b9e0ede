//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::AddWaypoint { point } => handlers::drawing::add_waypoint(state, point),
            AppCommand::TriggerMarkerAction { action } => {
                handlers::drawing::trigger_marker_action(state, action)
            }
            AppCommand::ResetPath => handlers::drawing::reset_path(state),

            // === Datei-I/O ===
            AppCommand::RequestExport => handlers::file_io::request_export(state),
            AppCommand::WriteExport { path } => handlers::file_io::write_export(state, path)?,
            AppCommand::CancelExport => handlers::file_io::cancel_export(state),
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::ImportFile { path } => handlers::file_io::import(state, path),
            AppCommand::RejectMissingImportFile => handlers::file_io::reject_missing_file(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanView { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomView {
                steps,
                focus_screen,
            } => handlers::view::zoom_towards(state, steps, focus_screen),
            AppCommand::SetCursor { screen_pos } => handlers::view::set_cursor(state, screen_pos),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissAlert => handlers::dialog::dismiss_alert(state),
            AppCommand::DismissNotice => handlers::dialog::dismiss_notice(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
