// src/gui/components/raster.rs
//
// Server-rendered PNGs (word cloud, co-occurrence heatmap) as textures.
// Decoded once per bundle revision.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::{api::AnalysisBundle, raster::decode_png_b64};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterKind {
    WordCloud,
    Cooccurrence,
}

#[derive(Default)]
pub struct RasterCache {
    rev: Option<u64>,
    wordcloud: Option<TextureHandle>,
    cooccurrence: Option<TextureHandle>,
}

impl RasterCache {
    /// Decode the bundle's rasters if `rev` differs from what's loaded.
    pub fn ensure(&mut self, ctx: &egui::Context, rev: u64, bundle: &AnalysisBundle) {
        if self.rev == Some(rev) {
            return;
        }
        self.rev = Some(rev);
        self.wordcloud = bundle.wordcloud_b64().and_then(|b| load(ctx, "wordcloud", b));
        self.cooccurrence = bundle.cooccurrence_b64().and_then(|b| load(ctx, "cooccurrence", b));
    }

    pub fn get(&self, kind: RasterKind) -> Option<&TextureHandle> {
        match kind {
            RasterKind::WordCloud => self.wordcloud.as_ref(),
            RasterKind::Cooccurrence => self.cooccurrence.as_ref(),
        }
    }
}

fn load(ctx: &egui::Context, name: &str, b64: &str) -> Option<TextureHandle> {
    match decode_png_b64(b64) {
        Ok(r) => {
            logd!("Raster: {} decoded {}x{}", name, r.width, r.height);
            let img = ColorImage::from_rgba_unmultiplied([r.width as usize, r.height as usize], &r.rgba);
            Some(ctx.load_texture(name, img, TextureOptions::LINEAR))
        }
        Err(e) => {
            loge!("Raster: {} failed to decode: {}", name, e);
            None
        }
    }
}

/// Show a texture scaled down to fit the available width.
pub fn show(ui: &mut egui::Ui, tex: &TextureHandle) {
    let sized = egui::load::SizedTexture::from_handle(tex);
    let max_w = ui.available_width().min(sized.size.x);
    ui.add(egui::Image::from_texture(sized).max_width(max_w));
}
