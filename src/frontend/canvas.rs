//! Structure canvas
//!
//! Paints a [`FrameView`] with the egui painter. Frame positions are in
//! canvas coordinates: list and array positions are box corners, tree
//! positions are circle centers.

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Ui, Vec2};

use crate::layout::{ArrayLayout, LayoutConfig, ListLayout, TreeLayout};
use crate::types::{Point, StructureKind};
use crate::view::{ElementView, FrameView};

const NODE_FILL: Color32 = Color32::from_rgb(102, 191, 255);
const HIGHLIGHT_FILL: Color32 = Color32::from_rgb(0, 228, 48);
const CURRENT_FILL: Color32 = Color32::from_rgb(255, 161, 0);
const NODE_TEXT: Color32 = Color32::from_gray(20);
const CORNER_RADIUS: f32 = 6.0;

fn to_screen(origin: Pos2, p: Point) -> Pos2 {
    origin + Vec2::new(p.x, p.y)
}

/// Paint `frame` into all remaining space. Returns the canvas rect.
pub fn render_canvas(ui: &mut Ui, frame: &FrameView, layout: &LayoutConfig) -> Rect {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    let line_color = ui.visuals().strong_text_color();
    let weak_color = ui.visuals().weak_text_color();

    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let origin = rect.min;
    match frame.kind {
        StructureKind::LinkedList => draw_list(&painter, origin, frame, &layout.list, line_color),
        StructureKind::Tree => draw_tree(&painter, origin, frame, &layout.tree, line_color),
        StructureKind::Array => draw_array(&painter, origin, frame, &layout.array, weak_color),
    }

    if frame.elements.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("The {} is empty", frame.kind),
            FontId::proportional(18.0),
            weak_color,
        );
    }

    rect
}

fn draw_box(painter: &egui::Painter, rect: Rect, element: &ElementView, fill: Color32) {
    painter.rect_filled(rect, CORNER_RADIUS, fill);
    painter.rect_stroke(
        rect,
        CORNER_RADIUS,
        Stroke::new(1.5, Color32::from_gray(40)),
        egui::StrokeKind::Outside,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        element.value.to_string(),
        FontId::proportional(20.0),
        NODE_TEXT,
    );
}

fn draw_list(
    painter: &egui::Painter,
    origin: Pos2,
    frame: &FrameView,
    layout: &ListLayout,
    line_color: Color32,
) {
    let size = Vec2::new(layout.node_width, layout.node_height);
    let stroke = Stroke::new(2.0, line_color);

    // Arrows leave the right edge of a node and enter the left edge of the next
    for (from, to, _) in frame.edge_positions() {
        let start = to_screen(origin, from) + Vec2::new(size.x, size.y * 0.5);
        let end = to_screen(origin, to) + Vec2::new(0.0, size.y * 0.5);
        painter.arrow(start, end - start, stroke);
    }

    for element in &frame.elements {
        let rect = Rect::from_min_size(to_screen(origin, element.position), size);
        let fill = if element.highlighted { CURRENT_FILL } else { NODE_FILL };
        draw_box(painter, rect, element, fill);
    }

    if let Some(head) = frame.elements.first() {
        let anchor = to_screen(origin, head.position) + Vec2::new(size.x * 0.5, -14.0);
        painter.text(
            anchor,
            Align2::CENTER_CENTER,
            "head",
            FontId::proportional(14.0),
            line_color,
        );
    }
}

fn draw_tree(
    painter: &egui::Painter,
    origin: Pos2,
    frame: &FrameView,
    layout: &TreeLayout,
    line_color: Color32,
) {
    for (from, to, _) in frame.edge_positions() {
        painter.line_segment(
            [to_screen(origin, from), to_screen(origin, to)],
            Stroke::new(2.0, line_color),
        );
    }

    for element in &frame.elements {
        let center = to_screen(origin, element.position);
        let fill = if element.highlighted { HIGHLIGHT_FILL } else { NODE_FILL };
        painter.circle_filled(center, layout.node_radius, fill);
        painter.circle_stroke(center, layout.node_radius, Stroke::new(1.5, Color32::from_gray(40)));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            element.value.to_string(),
            FontId::proportional(18.0),
            NODE_TEXT,
        );
    }
}

fn draw_array(
    painter: &egui::Painter,
    origin: Pos2,
    frame: &FrameView,
    layout: &ArrayLayout,
    label_color: Color32,
) {
    let size = Vec2::new(layout.box_width, layout.box_height);

    for (index, element) in frame.elements.iter().enumerate() {
        let rect = Rect::from_min_size(to_screen(origin, element.position), size);
        let fill = if element.highlighted { HIGHLIGHT_FILL } else { NODE_FILL };
        draw_box(painter, rect, element, fill);

        // Index labels stay under the fixed slot, not the moving box
        let slot = to_screen(origin, layout.slot(index));
        painter.text(
            slot + Vec2::new(size.x * 0.5, size.y + 14.0),
            Align2::CENTER_CENTER,
            index.to_string(),
            FontId::monospace(13.0),
            label_color,
        );
    }
}
