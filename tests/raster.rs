// tests/raster.rs

use social_dash::{
    error::ExportError,
    raster::{decode_png_b64, png_data_url},
};

#[test]
fn snapshot_pixels_survive_encoding() {
    let rgba = vec![255, 0, 0, 255, 0, 0, 255, 128];
    let url = png_data_url(2, 1, rgba.clone()).unwrap();
    assert!(url.starts_with("data:image/png;base64,"));

    // decoder accepts both the data URL and the bare payload
    let r = decode_png_b64(&url).unwrap();
    assert_eq!((r.width, r.height), (2, 1));
    assert_eq!(r.rgba, rgba);

    let bare = url.trim_start_matches("data:image/png;base64,");
    assert_eq!(decode_png_b64(bare).unwrap(), r);
}

#[test]
fn mismatched_buffer_is_an_error() {
    assert!(png_data_url(4, 4, vec![0; 3]).is_err());
}

#[test]
fn bad_base64_is_reported() {
    let err = decode_png_b64("not base64!!").unwrap_err();
    assert!(matches!(err, ExportError::Base64(_)));
}

#[test]
fn non_png_bytes_are_reported() {
    // "hello" in base64
    let err = decode_png_b64("aGVsbG8=").unwrap_err();
    assert!(matches!(err, ExportError::Image(_)));
}
