pub mod simple;

use crate::foundation::core::{Rect, ViewTransform};
use crate::raster::pixmap::Pixmap;

/// The sprite capability: report a screen footprint, draw into a destination.
///
/// Further variants fit behind this seam without touching the compositor:
/// interpolated (inter-pixel filtering when zoomed), instanced (shared image
/// behind an `Arc`), screen-anchored (transform-free HUD blits), tiled
/// backgrounds, procedural (noise-driven color). Only [`simple::SimpleSprite`]
/// exists today.
pub trait Sprite {
    /// Screen-space footprint used for camera culling.
    fn bounds(&self) -> Rect;

    /// Rasterize into `dst` through the camera transform.
    ///
    /// Implementations mutate only the red, green and blue channels of
    /// pixels they decide to cover; destination alpha and uncovered pixels
    /// stay untouched.
    fn draw(&self, view: ViewTransform, dst: &mut Pixmap);
}
