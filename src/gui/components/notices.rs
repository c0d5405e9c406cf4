// src/gui/components/notices.rs
//
// Toasts in the top-right corner. They hide on their own after the TTL.

use eframe::egui::{self, Align2, Color32, RichText};

use crate::notice::{Notice, NoticeKind};

const OK_GREEN: Color32 = Color32::from_rgb(0x2E, 0x9E, 0x5B);
const ERR_RED: Color32 = Color32::from_rgb(0xDC, 0x3C, 0x3C);

pub fn draw(ctx: &egui::Context, notices: &[&Notice]) {
    if notices.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("notices"))
        .anchor(Align2::RIGHT_TOP, [-12.0, 48.0])
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            for n in notices {
                let (icon, fill) = match n.kind {
                    NoticeKind::Success => ("✓", OK_GREEN),
                    NoticeKind::Failure => ("✗", ERR_RED),
                };
                egui::Frame::popup(ui.style())
                    .fill(fill)
                    .show(ui, |ui| {
                        ui.label(RichText::new(format!("{icon} {}", n.text)).color(Color32::WHITE));
                    });
                ui.add_space(6.0);
            }
        });
}
