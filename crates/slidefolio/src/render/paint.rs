//! Small shape helpers shared by cards and the viewer.

use eframe::egui::{self, Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::theme::{self, Theme};

/// Accent-colored stand-in for media that cannot be drawn (videos,
/// missing images): a diagonal blend from the accent to a darker shade.
pub fn poster(painter: &Painter, rect: Rect, accent: Color32, radius: f32) {
    let dark = theme::lerp_color(accent, Color32::from_rgb(0x10, 0x18, 0x20), 0.65);
    painter.rect_filled(rect, radius, dark);

    let mut mesh = egui::Mesh::default();
    let light = Theme::with_opacity(accent, 0.55);
    let clear = Theme::with_opacity(accent, 0.0);
    mesh.colored_vertex(rect.left_top(), light);
    mesh.colored_vertex(rect.right_top(), clear);
    mesh.colored_vertex(rect.left_bottom(), clear);
    mesh.colored_vertex(rect.right_bottom(), clear);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Transparent at the top of `rect`, `color` at the bottom.
pub fn vertical_fade(painter: &Painter, rect: Rect, color: Color32) {
    let transparent = Theme::with_opacity(color, 0.0);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), transparent);
    mesh.colored_vertex(rect.right_top(), transparent);
    mesh.colored_vertex(rect.left_bottom(), color);
    mesh.colored_vertex(rect.right_bottom(), color);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Horizontal gradient between two colors filling `rect`.
pub fn horizontal_gradient(painter: &Painter, rect: Rect, left: Color32, right: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Round translucent badge with a play triangle.
pub fn play_badge(painter: &Painter, center: Pos2, radius: f32, opacity: f32) {
    painter.circle_filled(
        center,
        radius,
        Color32::from_black_alpha((opacity * 140.0) as u8),
    );
    painter.circle_stroke(
        center,
        radius,
        Stroke::new(2.0, Theme::with_opacity(Color32::WHITE, 0.8 * opacity)),
    );
    let r = radius * 0.45;
    let points = vec![
        egui::pos2(center.x - r * 0.6, center.y - r),
        egui::pos2(center.x + r, center.y),
        egui::pos2(center.x - r * 0.6, center.y + r),
    ];
    painter.add(Shape::convex_polygon(
        points,
        Theme::with_opacity(Color32::WHITE, opacity),
        Stroke::NONE,
    ));
}

/// Tiny framed-picture glyph marking an image card.
pub fn image_badge(painter: &Painter, center: Pos2, radius: f32) {
    painter.circle_filled(center, radius + 4.0, Color32::from_black_alpha(110));
    let frame = Rect::from_center_size(center, egui::vec2(radius * 1.3, radius));
    painter.rect_stroke(
        frame,
        1.5,
        Stroke::new(1.5, Color32::WHITE),
        egui::StrokeKind::Inside,
    );
    let points = vec![
        egui::pos2(frame.left() + 2.0, frame.bottom() - 2.0),
        egui::pos2(frame.center().x - 1.0, frame.top() + radius * 0.4),
        egui::pos2(frame.right() - 2.0, frame.bottom() - 2.0),
    ];
    painter.add(Shape::convex_polygon(points, Color32::WHITE, Stroke::NONE));
}

/// Chevron pointing left (`dir = -1.0`) or right (`dir = 1.0`).
pub fn chevron(painter: &Painter, center: Pos2, size: f32, dir: f32, stroke: Stroke) {
    let half = size / 2.0;
    let tip = egui::pos2(center.x + dir * half * 0.5, center.y);
    let top = egui::pos2(center.x - dir * half * 0.5, center.y - half);
    let bottom = egui::pos2(center.x - dir * half * 0.5, center.y + half);
    painter.line_segment([top, tip], stroke);
    painter.line_segment([tip, bottom], stroke);
}

/// An "X" mark.
pub fn cross(painter: &Painter, center: Pos2, size: f32, stroke: Stroke) {
    let half = size / 2.0;
    painter.line_segment(
        [
            center + egui::vec2(-half, -half),
            center + egui::vec2(half, half),
        ],
        stroke,
    );
    painter.line_segment(
        [
            center + egui::vec2(half, -half),
            center + egui::vec2(-half, half),
        ],
        stroke,
    );
}
