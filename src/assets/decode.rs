use anyhow::Context;

use crate::foundation::error::SpryteResult;
use crate::raster::pixmap::{PixelBounds, Pixmap};

/// Decode encoded image bytes into a straight-RGBA8 [`Pixmap`].
///
/// Accepts any format the `image` crate recognizes. The result keeps straight
/// alpha: the compositor copies color channels verbatim and never blends, so
/// there is no premultiply step here. Decoding is the engine's only IO-adjacent
/// seam and runs before any sprite exists.
pub fn decode_image(bytes: &[u8]) -> SpryteResult<Pixmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let stride = width as usize * 4;
    Pixmap::from_parts(PixelBounds::of_size(width, height), stride, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Rgba8;
    use crate::raster::pixmap::PixelSource;

    fn png_bytes(pixels: &[[u8; 4]], width: u32, height: u32) -> Vec<u8> {
        let mut img = image::RgbaImage::new(width, height);
        for (i, px) in pixels.iter().enumerate() {
            let x = i as u32 % width;
            let y = i as u32 / width;
            img.put_pixel(x, y, image::Rgba(*px));
        }
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decode_png_preserves_pixels_and_layout() {
        let bytes = png_bytes(
            &[[255, 0, 0, 255], [0, 255, 0, 128], [0, 0, 255, 255], [10, 20, 30, 0]],
            2,
            2,
        );
        let p = decode_image(&bytes).unwrap();
        assert_eq!(p.bounds(), PixelBounds::of_size(2, 2));
        assert_eq!(p.sample(0, 0), Rgba8::new(255, 0, 0, 255));
        assert_eq!(p.sample(1, 0), Rgba8::new(0, 255, 0, 128));
        assert_eq!(p.sample(0, 1), Rgba8::new(0, 0, 255, 255));
        assert_eq!(p.sample(1, 1), Rgba8::new(10, 20, 30, 0));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_image(b"not an image").is_err());
    }
}
