//! Spryte is a camera-driven 2D sprite compositing engine.
//!
//! Spryte turns an ordered collection of sprites plus a camera transform into
//! pixels: each frame, the world culls sprites against the camera's screen
//! footprint and rasterizes the survivors into a caller-owned RGBA8 buffer.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: source bytes -> [`Pixmap`] (straight RGBA8, front-loaded IO)
//! 2. **Construct**: [`Pixmap`] / [`PixmapView`] -> [`SimpleSprite`] (private deep copy)
//! 3. **Compose**: [`SpriteWorld::draw`] culls against the camera footprint and
//!    dispatches sprites in list order (back-to-front, last writer wins per pixel)
//! 4. **Rasterize**: each sprite reverse-maps destination pixels to source
//!    samples through the inverse camera transform
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total over pixels**: compositing never fails; degenerate buffers,
//!   inverted rectangles and zero scales produce empty draws, not errors.
//! - **No IO in the compositor**: decoding happens up front in [`decode_image`];
//!   the draw path only ever touches memory it was handed.
//! - **Straight RGBA8 end-to-end**: sprites copy R/G/B verbatim and never
//!   touch destination alpha; blending is the caller's concern.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod foundation;
mod raster;
mod sprite;
mod world;

pub use assets::decode::decode_image;
pub use composition::model::{Scene, SpriteSpec};
pub use foundation::core::{Canvas, Point, Rect, Rgba8, Vec2, ViewTransform};
pub use foundation::error::{SpryteError, SpryteResult};
pub use raster::pixmap::{PixelBounds, PixelSource, Pixmap, PixmapView};
pub use sprite::Sprite;
pub use sprite::simple::SimpleSprite;
pub use world::compositor::{Camera, FixedCamera, SpriteWorld};
