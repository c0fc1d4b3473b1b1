use rayon::prelude::*;

use crate::foundation::core::{Rect, ViewTransform};
use crate::raster::pixmap::{PixelSource, Pixmap};
use crate::sprite::Sprite;

/// A sprite that owns a private, deep-copied RGBA8 image.
///
/// Construction copies the source into a zero-based local frame, so the
/// source (including a sub-view into a larger decoded image) can be dropped
/// or mutated afterwards without affecting the sprite. The image is
/// immutable for the sprite's lifetime.
#[derive(Clone, Debug)]
pub struct SimpleSprite {
    /// Screen-space placement offset (X). Consumed by [`Sprite::bounds`]
    /// for culling; the sampler consumes the camera transform alone.
    pub x: f64,
    /// Screen-space placement offset (Y).
    pub y: f64,
    /// Declared for a future affine sampler; not consumed when drawing.
    pub rotation: f64,
    /// Declared for a future affine sampler; not consumed when drawing.
    pub scale_x: f64,
    /// Declared for a future affine sampler; not consumed when drawing.
    pub scale_y: f64,
    image: Pixmap,
}

impl SimpleSprite {
    /// Build a sprite by deep-copying a pixel source.
    ///
    /// The owned image is sized exactly to the source bounds and normalized
    /// to a zero origin: pixel `(i, j)` equals the source sample at
    /// `(i + min_x, j + min_y)`, channel for channel. A zero-sized source
    /// yields a zero-sized sprite, not an error.
    pub fn from_source(src: &impl PixelSource) -> Self {
        let sb = src.bounds();
        let mut image = Pixmap::new(sb.width(), sb.height());
        for (dy, sy) in (sb.min_y..sb.max_y).enumerate() {
            for (dx, sx) in (sb.min_x..sb.max_x).enumerate() {
                image.set(dx as i32, dy as i32, src.sample(sx, sy));
            }
        }
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            image,
        }
    }

    /// The privately owned image.
    pub fn image(&self) -> &Pixmap {
        &self.image
    }
}

impl Sprite for SimpleSprite {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.x + f64::from(self.image.width()),
            self.y + f64::from(self.image.height()),
        )
    }

    /// Reverse-mapping rasterization: iterate destination pixels, map each
    /// through the inverse camera transform, and copy the sampled R/G/B.
    ///
    /// A pixel is covered only when its sample coordinate lands strictly
    /// inside the owned image on all four sides, which excludes the image's
    /// zero row and column. Iterating the destination makes zoom cost
    /// independent of the scale factor at an O(destination) price per sprite.
    ///
    /// Rows rasterize in parallel; each pixel is written at most once per
    /// call, so draw-order semantics across sprites are unaffected.
    fn draw(&self, view: ViewTransform, dst: &mut Pixmap) {
        let db = dst.bounds();
        if db.is_empty() {
            return;
        }
        let sw = i64::from(self.image.width());
        let sh = i64::from(self.image.height());
        let src = self.image.data();
        let src_stride = self.image.stride();
        let row_bytes = db.width() as usize * 4;
        let stride = dst.stride();

        dst.data_mut()
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(row_idx, row)| {
                let y = db.min_y + row_idx as i32;
                let (_, sy) = view.sample_coords(db.min_x, y);
                if sy <= 0 || sy >= sh {
                    return;
                }
                let src_row = sy as usize * src_stride;
                for (col_idx, px) in row[..row_bytes].chunks_exact_mut(4).enumerate() {
                    let x = db.min_x + col_idx as i32;
                    let (sx, _) = view.sample_coords(x, y);
                    if sx <= 0 || sx >= sw {
                        continue;
                    }
                    let base = src_row + sx as usize * 4;
                    px[0] = src[base];
                    px[1] = src[base + 1];
                    px[2] = src[base + 2];
                    // px[3] stays: alpha is the caller's concern.
                }
            });
    }
}
