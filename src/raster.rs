// src/raster.rs
//
// PNG <-> base64 helpers for server rasters and chart snapshots.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbaImage};

use crate::error::ExportError;

/// Decoded RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode a base64 PNG (with or without a `data:` prefix).
pub fn decode_png_b64(b64: &str) -> Result<Raster, ExportError> {
    let payload = strip_data_prefix(b64.trim());
    let bytes = STANDARD.decode(payload)?;
    let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(Raster { width, height, rgba: img.into_raw() })
}

/// Encode RGBA8 pixels as a `data:image/png;base64,…` URL.
pub fn png_data_url(width: u32, height: u32, rgba: Vec<u8>) -> Result<String, ExportError> {
    let img = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
        ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("pixel buffer does not match {width}x{height}"),
        ))
    })?;

    let mut bytes: Vec<u8> = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(join!("data:image/png;base64,", &STANDARD.encode(&bytes)))
}

fn strip_data_prefix(s: &str) -> &str {
    match s.find(";base64,") {
        Some(ix) if s.starts_with("data:") => &s[ix + ";base64,".len()..],
        _ => s,
    }
}
