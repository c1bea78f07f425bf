//! Serializes the surface to a downloadable JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, RgbaImage};

use crate::error::{SketchError, SketchResult};
use crate::surface::Surface;

pub const JPEG_QUALITY: u8 = 90;

/// Download name for an export taken at `millis` since the UNIX epoch.
pub fn export_file_name(millis: u64) -> String {
    format!("{millis}.jpg")
}

/// Composite the surface over opaque white. JPEG has no alpha channel, and white
/// is what the canvas shows behind transparent pixels.
pub fn flatten_onto_white(pixels: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(pixels.width(), pixels.height(), |x, y| {
        let [r, g, b, a] = pixels.get_pixel(x, y).0;
        let alpha = u32::from(a);
        let over_white = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        Rgb([over_white(r), over_white(g), over_white(b)])
    })
}

/// Encode the current surface contents as JPEG bytes.
pub fn encode_jpeg(surface: &Surface) -> SketchResult<Vec<u8>> {
    let rgb = flatten_onto_white(surface.pixels());
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(SketchError::Encode)?;
    Ok(bytes)
}

/// Hand `bytes` to the user under `file_name`.
///
/// Native builds ask where to save with the file name pre-filled; a cancelled
/// dialog is not an error.
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(file_name: &str, bytes: &[u8]) -> SketchResult<()> {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(file_name)
        .add_filter("JPEG image", &["jpg", "jpeg"])
        .save_file()
    else {
        log::debug!("Export of {} cancelled", file_name);
        return Ok(());
    };

    std::fs::write(&path, bytes)?;
    log::info!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Hand `bytes` to the user under `file_name`.
///
/// On the web this triggers a browser download through a temporary anchor element.
#[cfg(target_arch = "wasm32")]
pub fn deliver(file_name: &str, bytes: &[u8]) -> SketchResult<()> {
    use web_sys::js_sys::{Array, Uint8Array};
    use web_sys::wasm_bindgen::JsCast;

    let js_err = |e: web_sys::wasm_bindgen::JsValue| SketchError::Export(format!("{e:?}"));

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/jpeg");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Export("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Export("anchor element cast failed".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Downloaded {} ({} bytes)", file_name, bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};

    #[test]
    fn test_file_name_uses_timestamp() {
        assert_eq!(export_file_name(1_700_000_000_123), "1700000000123.jpg");
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let mut pixels = RgbaImage::new(2, 1);
        pixels.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        let rgb = flatten_onto_white(&pixels);
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(rgb.get_pixel(1, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_encoded_bytes_are_jpeg() {
        let surface = Surface::new(64, 48);
        let bytes = encode_jpeg(&surface).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }
}
