use super::{add_points, make_state, temp_path};
use run_path_editor::app::use_cases::file_io::{INVALID_FILE_ALERT, NO_FILE_SELECTED_ALERT};
use run_path_editor::{AppController, AppIntent, AppState, NoticeKind, TerminalMarker, Waypoint};
use std::time::Instant;

fn wp(lat: f64, lng: f64) -> Waypoint {
    Waypoint::new(lat, lng)
}

/// Führt den Export-Ablauf bis zur geschriebenen Datei durch.
fn export_to(controller: &mut AppController, state: &mut AppState, path: &std::path::Path) {
    controller
        .handle_intent(state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte durchlaufen");
    assert!(state.ui.show_export_dialog, "Speichern-Dialog erwartet");
    state.ui.show_export_dialog = false;

    controller
        .handle_intent(
            state,
            AppIntent::ExportPathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("ExportPathSelected sollte durchlaufen");
}

fn import_from(controller: &mut AppController, state: &mut AppState, path: &std::path::Path) {
    controller
        .handle_intent(
            state,
            AppIntent::ImportFileSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("ImportFileSelected sollte durchlaufen");
}

#[test]
fn test_export_with_single_point_shows_notice_and_writes_nothing() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0)]);

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte durchlaufen");

    assert!(!state.ui.show_export_dialog);
    assert!(state.ui.pending_export.is_none());
    assert_eq!(
        state.ui.notice.current(Instant::now()),
        Some(NoticeKind::ExportBlocked)
    );
}

#[test]
fn test_export_then_import_restores_open_path() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let points = [wp(48.8566, 2.3522), wp(48.8606, 2.3376), wp(48.8530, 2.3499)];
    add_points(&mut controller, &mut state, &points);
    controller
        .handle_intent(&mut state, AppIntent::FinishPathRequested)
        .expect("FinishPathRequested sollte durchlaufen");

    let path = temp_path("open_path.geojson");
    export_to(&mut controller, &mut state, &path);
    assert!(path.exists(), "Exportdatei sollte existieren");
    assert!(state.ui.pending_export.is_none());

    let mut imported = make_state();
    import_from(&mut controller, &mut imported, &path);
    let _ = std::fs::remove_file(&path);

    assert!(imported.ui.alert.is_none());
    assert_eq!(imported.editor.route().points(), &points);
    assert!(!imported.is_drawing_open());
    assert!(matches!(
        imported.editor.terminal(),
        TerminalMarker::Separate(marker) if marker.position == points[2]
    ));
    assert!(imported.view.map_view.zoom > imported.options.initial_zoom);
    assert!(imported.scene.take_fit_request().is_none());
}

#[test]
fn test_export_then_import_restores_loop() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(
        &mut controller,
        &mut state,
        &[wp(45.0, 5.0), wp(45.01, 5.02), wp(45.02, 5.0)],
    );
    controller
        .handle_intent(&mut state, AppIntent::CloseLoopRequested)
        .expect("CloseLoopRequested sollte durchlaufen");

    let path = temp_path("loop_path.geojson");
    export_to(&mut controller, &mut state, &path);

    let mut imported = make_state();
    import_from(&mut controller, &mut imported, &path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(
        imported.editor.route().points(),
        state.editor.route().points()
    );
    assert!(imported.editor.route().is_loop());
    assert_eq!(imported.editor.terminal(), TerminalMarker::Coincident);
    assert_eq!(imported.scene.marker_count(), 1);
}

#[test]
fn test_import_malformed_file_alerts_and_keeps_route() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0), wp(2.0, 2.0)]);

    let path = temp_path("malformed.geojson");
    std::fs::write(&path, "{not json").expect("Testdatei schreiben");
    import_from(&mut controller, &mut state, &path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(state.ui.alert.as_deref(), Some(INVALID_FILE_ALERT));
    assert_eq!(state.editor.route().points(), &[wp(1.0, 1.0), wp(2.0, 2.0)]);
    assert!(state.is_drawing_open());

    controller
        .handle_intent(&mut state, AppIntent::AlertDismissed)
        .expect("AlertDismissed sollte durchlaufen");
    assert!(state.ui.alert.is_none());
}

#[test]
fn test_import_json_without_geojson_type_is_rejected() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0)]);

    let path = temp_path("plain.json");
    std::fs::write(&path, r#"{"name": "not a map"}"#).expect("Testdatei schreiben");
    import_from(&mut controller, &mut state, &path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(state.ui.alert.as_deref(), Some(INVALID_FILE_ALERT));
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_import_cancelled_shows_missing_file_alert() {
    let mut controller = AppController::new();
    let mut state = make_state();

    controller
        .handle_intent(&mut state, AppIntent::ImportRequested)
        .expect("ImportRequested sollte durchlaufen");
    assert!(state.ui.show_import_dialog);
    state.ui.show_import_dialog = false;

    controller
        .handle_intent(&mut state, AppIntent::ImportCancelled)
        .expect("ImportCancelled sollte durchlaufen");

    assert_eq!(state.ui.alert.as_deref(), Some(NO_FILE_SELECTED_ALERT));
}

#[test]
fn test_export_cancelled_discards_pending_text() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0), wp(2.0, 2.0)]);

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte durchlaufen");
    assert!(state.ui.pending_export.is_some());

    controller
        .handle_intent(&mut state, AppIntent::ExportCancelled)
        .expect("ExportCancelled sollte durchlaufen");

    assert!(state.ui.pending_export.is_none());
}

#[test]
fn test_export_to_missing_directory_returns_error() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0), wp(2.0, 2.0)]);
    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte durchlaufen");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ExportPathSelected {
            path: "/nonexistent/run_path_editor/run_path.geojson".to_string(),
        },
    );

    assert!(result.is_err());
}
