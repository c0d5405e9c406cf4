// src/gui/components/charts.rs
//
// Painter-drawn charts. Each returns the rect it occupied so the capture
// tracker can crop it out of a screenshot later.

use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::{
    api::types::fmt_score,
    charts::{Bar, Rgb, Slice},
};

const PIE_SIZE: Vec2 = Vec2::new(420.0, 260.0);
const BAR_ROW_H: f32 = 20.0;
const LABEL_W: f32 = 140.0;
const VALUE_W: f32 = 48.0;

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Pie with a legend on the right.
pub fn pie(ui: &mut egui::Ui, slices: &[Slice]) -> Rect {
    let (resp, painter) = ui.allocate_painter(PIE_SIZE, Sense::hover());
    let rect = resp.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let radius = rect.height() * 0.4;
    let center = Pos2::new(rect.left() + radius + 20.0, rect.center().y);
    let text_color = ui.visuals().text_color();

    let mut start = -TAU / 4.0;
    for s in slices {
        let sweep = s.fraction as f32 * TAU;
        let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;
        // fan of thin triangles; convex_polygon needs convex input
        for k in 0..steps {
            let a0 = start + sweep * k as f32 / steps as f32;
            let a1 = start + sweep * (k + 1) as f32 / steps as f32;
            let p0 = center + radius * Vec2::angled(a0);
            let p1 = center + radius * Vec2::angled(a1);
            painter.add(Shape::convex_polygon(vec![center, p0, p1], color(s.color), Stroke::NONE));
        }

        let mid = start + sweep / 2.0;
        let label_at = center + radius * 0.65 * Vec2::angled(mid);
        painter.text(
            label_at,
            Align2::CENTER_CENTER,
            format!("{:.0}%", s.fraction * 100.0),
            FontId::proportional(12.0),
            Color32::BLACK,
        );
        start += sweep;
    }

    // legend
    let lx = center.x + radius + 40.0;
    for (i, s) in slices.iter().enumerate() {
        let y = rect.top() + 30.0 + i as f32 * 22.0;
        let swatch = Rect::from_min_size(Pos2::new(lx, y - 6.0), Vec2::splat(12.0));
        painter.rect_filled(swatch, 2.0, color(s.color));
        painter.text(
            Pos2::new(lx + 18.0, y),
            Align2::LEFT_CENTER,
            format!("{}: {}", s.label, s.value),
            FontId::proportional(13.0),
            text_color,
        );
    }
    rect
}

/// Horizontal bar chart. Group labels (topic bars) print once per group.
pub fn bars(ui: &mut egui::Ui, bars: &[Bar], fill: Rgb) -> Rect {
    let groups = bars.windows(2).filter(|w| w[0].group != w[1].group).count()
        + usize::from(bars.first().is_some_and(|b| !b.group.is_empty()));
    let height = (bars.len() + groups) as f32 * BAR_ROW_H + 16.0;
    let width = ui.available_width().clamp(320.0, 720.0);

    let (resp, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let rect = resp.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let track = (rect.width() - LABEL_W - VALUE_W - 16.0).max(10.0);
    let text_color = ui.visuals().text_color();
    let strong = ui.visuals().strong_text_color();

    let mut y = rect.top() + 8.0;
    let mut last_group: Option<&str> = None;
    for b in bars {
        if !b.group.is_empty() && last_group != Some(b.group.as_str()) {
            painter.text(
                Pos2::new(rect.left() + 8.0, y + BAR_ROW_H / 2.0),
                Align2::LEFT_CENTER,
                &b.group,
                FontId::proportional(13.0),
                strong,
            );
            y += BAR_ROW_H;
            last_group = Some(b.group.as_str());
        }

        painter.text(
            Pos2::new(rect.left() + LABEL_W, y + BAR_ROW_H / 2.0),
            Align2::RIGHT_CENTER,
            &b.label,
            FontId::proportional(12.0),
            text_color,
        );
        let w = if max > 0.0 { (b.value / max) as f32 * track } else { 0.0 };
        let bar = Rect::from_min_size(
            Pos2::new(rect.left() + LABEL_W + 8.0, y + 3.0),
            Vec2::new(w.max(1.0), BAR_ROW_H - 6.0),
        );
        painter.rect_filled(bar, 2.0, color(fill));
        painter.text(
            Pos2::new(bar.right() + 6.0, y + BAR_ROW_H / 2.0),
            Align2::LEFT_CENTER,
            format_value(b.value),
            FontId::monospace(11.0),
            text_color,
        );
        y += BAR_ROW_H;
    }
    rect
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { fmt_score(v) }
}
