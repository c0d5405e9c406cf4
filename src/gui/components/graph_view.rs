// src/gui/components/graph_view.rs
//
// Co-occurrence network, fitted into the available width.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::graph::ForceGraph;

const HEIGHT: f32 = 420.0;
const PAD: f32 = 30.0;
const NODE_FILL: Color32 = Color32::from_rgb(0x88, 0x84, 0xD8);
const EDGE: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);

pub fn draw(ui: &mut egui::Ui, graph: &ForceGraph) -> Rect {
    let width = ui.available_width().max(320.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, HEIGHT), Sense::hover());
    let rect = resp.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let Some((min, max)) = graph.bounds() else { return rect };
    let span = Vec2::new((max[0] - min[0]).max(1.0), (max[1] - min[1]).max(1.0));
    let inner = rect.shrink(PAD);
    let scale = (inner.width() / span.x).min(inner.height() / span.y);
    let mid = Pos2::new((min[0] + max[0]) / 2.0, (min[1] + max[1]) / 2.0);
    let to_screen = |p: [f32; 2]| inner.center() + Vec2::new(p[0] - mid.x, p[1] - mid.y) * scale;

    let max_w = graph.links.iter().map(|l| l.weight).fold(1.0_f64, f64::max);
    for l in &graph.links {
        let a = to_screen(graph.nodes[l.source].pos);
        let b = to_screen(graph.nodes[l.target].pos);
        let w = 0.5 + 2.5 * (l.weight / max_w) as f32;
        painter.line_segment([a, b], Stroke::new(w, EDGE));
    }

    let text_color = ui.visuals().text_color();
    let hover = ui.ctx().pointer_hover_pos();
    for n in &graph.nodes {
        let p = to_screen(n.pos);
        let r = 4.0 + (n.degree as f32).sqrt() * 1.5;
        painter.circle_filled(p, r, NODE_FILL);
        let near = hover.is_some_and(|h| h.distance(p) <= r + 2.0);
        painter.text(
            p + Vec2::new(r + 3.0, 0.0),
            Align2::LEFT_CENTER,
            &n.id,
            FontId::proportional(if near { 14.0 } else { 11.0 }),
            text_color,
        );
    }
    rect
}
