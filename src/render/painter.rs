//! Zeichnet die [`MapScene`] mit dem egui-Painter in den Karten-Viewport.

use super::MapScene;
use crate::core::{MapView, MarkerStyle, Waypoint};
use crate::shared::EditorOptions;
use glam::DVec2;

fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

fn to_screen(view: &MapView, rect: egui::Rect, point: Waypoint) -> egui::Pos2 {
    let viewport_size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let local = view.geo_to_screen(point, viewport_size);
    rect.min + egui::vec2(local.x as f32, local.y as f32)
}

/// Gitterabstand in Grad abhängig vom Zoom-Level.
fn graticule_step(zoom: f64) -> f64 {
    match zoom {
        z if z < 4.0 => 10.0,
        z if z < 7.0 => 1.0,
        z if z < 10.0 => 0.1,
        z if z < 14.0 => 0.01,
        _ => 0.001,
    }
}

fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, view: &MapView, stroke: egui::Stroke) {
    let viewport_size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let top_left = view.screen_to_geo(DVec2::ZERO, viewport_size);
    let bottom_right = view.screen_to_geo(viewport_size, viewport_size);
    let step = graticule_step(view.zoom);

    let mut lng = (top_left.lng / step).floor() * step;
    while lng <= bottom_right.lng {
        let x = to_screen(view, rect, Waypoint::new(view.center.lat, lng)).x;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        lng += step;
    }

    let mut lat = (bottom_right.lat / step).floor() * step;
    while lat <= top_left.lat {
        let y = to_screen(view, rect, Waypoint::new(lat, view.center.lng)).y;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        lat += step;
    }
}

/// Zeichnet Hintergrund, Linien und Marker der Szene.
pub fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &MapScene,
    view: &MapView,
    options: &EditorOptions,
) {
    painter.rect_filled(rect, 0.0, color(options.map_background_color));
    paint_graticule(
        painter,
        rect,
        view,
        egui::Stroke::new(1.0, color(options.graticule_color)),
    );

    let path_stroke = egui::Stroke::new(options.path_width_px, color(options.path_color));
    for (_, points) in scene.lines() {
        if points.len() < 2 {
            continue;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|p| to_screen(view, rect, *p)).collect();
        painter.add(egui::Shape::line(screen, path_stroke));
    }

    // Nur gesetzt, wenn ein Host eine Routing-Engine anbindet
    if let Some(snapped) = scene.snapped_line().filter(|points| points.len() > 1) {
        let screen: Vec<egui::Pos2> = snapped.iter().map(|p| to_screen(view, rect, *p)).collect();
        painter.add(egui::Shape::line(
            screen,
            egui::Stroke::new(options.path_width_px, color(options.snapped_path_color)),
        ));
    }

    let radius = options.marker_radius_px;
    for (_, marker) in scene.markers() {
        let center = to_screen(view, rect, marker.position);
        if !rect.expand(radius).contains(center) {
            continue;
        }
        let fill = match marker.style {
            MarkerStyle::Start => color(options.start_marker_color),
            MarkerStyle::Finish => color(options.finish_marker_color),
        };
        painter.circle(
            center,
            radius,
            fill,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            marker.style.label(),
            egui::FontId::proportional(radius * 1.1),
            egui::Color32::WHITE,
        );
    }
}
