use super::{add_points, click_at, make_state};
use glam::DVec2;
use run_path_editor::{AppCommand, AppController, AppIntent, NoticeKind, TerminalMarker, Waypoint};
use std::time::Instant;

fn wp(lat: f64, lng: f64) -> Waypoint {
    Waypoint::new(lat, lng)
}

#[test]
fn test_map_clicks_append_points_and_draw_line() {
    let mut controller = AppController::new();
    let mut state = make_state();

    for (i, offset) in [0.0, 150.0, 300.0, 450.0].into_iter().enumerate() {
        controller
            .handle_intent(
                &mut state,
                AppIntent::MapClicked {
                    screen_pos: DVec2::new(200.0 + offset, 200.0 + offset / 3.0),
                },
            )
            .expect("MapClicked sollte durchlaufen");
        assert_eq!(state.point_count(), i + 1);
    }

    let line = state
        .scene
        .line(state.editor.line_id())
        .expect("Linie sollte existieren");
    assert_eq!(line.len(), 4);
    assert_eq!(state.scene.marker_count(), 2);
    assert!(state.is_drawing_open());
}

#[test]
fn test_click_on_start_marker_closes_loop() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0), wp(2.0, 2.0)]);

    // Ausschnitt so wählen, dass beide Punkte weit auseinander liegen
    state.view.map_view.center = wp(1.5, 1.5);
    state.view.map_view.zoom = 7.0;
    click_at(&mut controller, &mut state, wp(1.0, 1.0));

    assert_eq!(
        state.editor.route().points(),
        &[wp(1.0, 1.0), wp(2.0, 2.0), wp(1.0, 1.0)]
    );
    assert!(!state.is_drawing_open());
    assert_eq!(state.editor.terminal(), TerminalMarker::Coincident);
    assert_eq!(state.scene.marker_count(), 1);
}

#[test]
fn test_click_on_finish_marker_closes_without_mutation() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let points = [wp(1.0, 1.0), wp(2.0, 2.0), wp(1.0, 3.0)];
    add_points(&mut controller, &mut state, &points);
    state.view.map_view.center = wp(1.5, 2.0);
    state.view.map_view.zoom = 7.0;

    click_at(&mut controller, &mut state, wp(1.0, 3.0));

    assert_eq!(state.editor.route().points(), &points);
    assert!(!state.is_drawing_open());
    assert_eq!(state.scene.marker_count(), 2);
}

#[test]
fn test_click_on_start_marker_with_single_point_adds_nothing() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0)]);
    state.view.map_view.center = wp(1.0, 1.0);

    click_at(&mut controller, &mut state, wp(1.0, 1.0));

    assert_eq!(state.point_count(), 1);
    assert!(state.is_drawing_open());
}

#[test]
fn test_clicks_after_close_are_ignored() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0), wp(2.0, 2.0)]);
    controller
        .handle_intent(&mut state, AppIntent::FinishPathRequested)
        .expect("FinishPathRequested sollte durchlaufen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                screen_pos: DVec2::new(10.0, 10.0),
            },
        )
        .expect("MapClicked sollte durchlaufen");

    assert_eq!(state.point_count(), 2);
}

#[test]
fn test_reset_from_closed_loop_reopens_drawing() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(
        &mut controller,
        &mut state,
        &[wp(1.0, 1.0), wp(2.0, 2.0), wp(3.0, 1.0)],
    );
    controller
        .handle_intent(&mut state, AppIntent::CloseLoopRequested)
        .expect("CloseLoopRequested sollte durchlaufen");
    assert_eq!(state.point_count(), 4);

    controller
        .handle_intent(&mut state, AppIntent::ResetPathRequested)
        .expect("ResetPathRequested sollte durchlaufen");

    assert_eq!(state.point_count(), 0);
    assert!(state.is_drawing_open());
    assert_eq!(state.scene.marker_count(), 0);
    assert_eq!(state.scene.line_count(), 1);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ResetPath)
    ));
}

#[test]
fn test_second_point_shows_hint_until_close() {
    let mut controller = AppController::new();
    let mut state = make_state();
    add_points(&mut controller, &mut state, &[wp(1.0, 1.0), wp(2.0, 2.0)]);

    assert_eq!(
        state.ui.notice.current(Instant::now()),
        Some(NoticeKind::PathHint)
    );

    controller
        .handle_intent(&mut state, AppIntent::FinishPathRequested)
        .expect("FinishPathRequested sollte durchlaufen");

    assert_eq!(state.ui.notice.current(Instant::now()), None);
}

#[test]
fn test_status_label_tracks_last_path_action() {
    let mut controller = AppController::new();
    let mut state = make_state();
    assert_eq!(state.command_log.last_action_label(), None);

    add_points(&mut controller, &mut state, &[wp(1.0, 1.0), wp(2.0, 2.0)]);
    assert_eq!(state.command_log.last_action_label(), Some("Point added"));

    controller
        .handle_intent(&mut state, AppIntent::FinishPathRequested)
        .expect("FinishPathRequested sollte durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CursorMoved {
                screen_pos: Some(DVec2::new(10.0, 10.0)),
            },
        )
        .expect("CursorMoved sollte durchlaufen");

    assert_eq!(state.command_log.last_action_label(), Some("Finish path"));
}
