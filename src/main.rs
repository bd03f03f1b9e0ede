//! Run Path Editor.
//!
//! Strecken per Klick auf die Karte zeichnen, als Runde oder offen abschließen
//! und als GeoJSON importieren oder exportieren.

use eframe::egui;
use run_path_editor::app::use_cases;
use run_path_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Run Path Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Run Path Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Run Path Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let now = Instant::now();
        self.state.ui.notice.expire(now);

        let events = self.collect_ui_events(ctx, now);

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::CursorMoved { .. }
            )
        });

        self.process_events(events);

        self.drain_snap_requests();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context, now: Instant) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            &self.state.options,
        ));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::show_alert(ctx, self.state.ui.alert.as_deref()));
        events.extend(ui::show_notice(ctx, self.state.ui.notice.current(now)));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.options,
                ));

                render::paint_scene(
                    ui.painter(),
                    rect,
                    &self.state.scene,
                    &self.state.view.map_view,
                    &self.state.options,
                );

                if self.state.point_count() == 0 {
                    ui.painter().text(
                        rect.center_top() + egui::vec2(0.0, 24.0),
                        egui::Align2::CENTER_CENTER,
                        "Click on the map to place the start point",
                        egui::FontId::proportional(18.0),
                        egui::Color32::DARK_GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Ohne angebundene Routing-Engine werden Anfragen nur protokolliert.
    fn drain_snap_requests(&mut self) {
        if let Some(waypoints) = use_cases::snapping::take_request(&mut self.state) {
            log::debug!(
                "Routing-Anfrage mit {} Wegpunkten (keine Engine angebunden)",
                waypoints.len()
            );
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }

        if let Some(remaining) = self.state.ui.notice.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}
