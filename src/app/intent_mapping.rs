//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::MarkerAction;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapClicked { screen_pos } => {
            let viewport = state.view.viewport();
            let hit_action = state
                .scene
                .marker_at(
                    &state.view.map_view,
                    viewport,
                    screen_pos,
                    f64::from(state.options.marker_hit_radius_px),
                )
                .and_then(|id| state.scene.click_action(id));

            match hit_action {
                Some(action) => vec![AppCommand::TriggerMarkerAction { action }],
                None => vec![AppCommand::AddWaypoint {
                    point: state.view.map_view.screen_to_geo(screen_pos, viewport),
                }],
            }
        }
        AppIntent::CloseLoopRequested => vec![AppCommand::TriggerMarkerAction {
            action: MarkerAction::CloseAsLoop,
        }],
        AppIntent::FinishPathRequested => vec![AppCommand::TriggerMarkerAction {
            action: MarkerAction::CloseOpen,
        }],
        AppIntent::ResetPathRequested => vec![AppCommand::ResetPath],
        AppIntent::ExportRequested => vec![AppCommand::RequestExport],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::WriteExport { path }],
        AppIntent::ExportCancelled => vec![AppCommand::CancelExport],
        AppIntent::ImportRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ImportFileSelected { path } => vec![AppCommand::ImportFile { path }],
        AppIntent::ImportCancelled => vec![AppCommand::RejectMissingImportFile],
        AppIntent::AlertDismissed => vec![AppCommand::DismissAlert],
        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanView { delta }],
        AppIntent::CameraZoom {
            steps,
            focus_screen,
        } => vec![AppCommand::ZoomView {
            steps,
            focus_screen,
        }],
        AppIntent::CursorMoved { screen_pos } => vec![AppCommand::SetCursor { screen_pos }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
