mod drawing;
mod io;

use run_path_editor::{AppCommand, AppController, AppIntent, AppState, Waypoint};

/// State mit realistischer Viewport-Größe.
pub fn make_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];
    state
}

/// Setzt Punkte mit exakten Koordinaten über den Command-Pfad.
pub fn add_points(controller: &mut AppController, state: &mut AppState, points: &[Waypoint]) {
    for point in points {
        controller
            .handle_command(state, AppCommand::AddWaypoint { point: *point })
            .expect("AddWaypoint sollte durchlaufen");
    }
}

/// Klickt auf die Bildschirmposition einer geografischen Koordinate.
pub fn click_at(controller: &mut AppController, state: &mut AppState, point: Waypoint) {
    let screen_pos = state
        .view
        .map_view
        .geo_to_screen(point, state.view.viewport());
    controller
        .handle_intent(state, AppIntent::MapClicked { screen_pos })
        .expect("MapClicked sollte durchlaufen");
}

/// Eindeutiger Pfad im Temp-Verzeichnis.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "run_path_editor_{}_{}",
        std::process::id(),
        name
    ))
}
