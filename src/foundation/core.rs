pub use kurbo::{Point, Vec2};

/// Straight (non-premultiplied) RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. The compositor carries it but never writes it.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// An opaque color from its three color channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A loose axis-aligned rectangle in screen space.
///
/// Unlike `kurbo::Rect` no min/max ordering is enforced: `x1` may exceed `x2`
/// in degenerate constructions, and [`Rect::overlaps`] stays symmetric and
/// total over such values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Low X edge.
    pub x1: f64,
    /// Low Y edge.
    pub y1: f64,
    /// High X edge.
    pub x2: f64,
    /// High Y edge.
    pub y2: f64,
}

impl Rect {
    /// Build a rectangle from its four edges, as given.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Whether two rectangles are not disjoint on either axis.
    ///
    /// Touching edges count as overlapping; zero-extent rectangles overlap
    /// anything that contains their edge.
    pub fn overlaps(self, other: Rect) -> bool {
        !(self.x2 < other.x1
            || self.y2 < other.y1
            || other.x2 < self.x1
            || other.y2 < self.y1)
    }
}

/// Mapping from a screen-space pixel coordinate to a source sample coordinate.
///
/// The sampler consumes `offset` and `scale` only. `rotation_rad` is carried
/// for a future affine sampler and is NOT applied by [`ViewTransform::sample_coords`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewTransform {
    /// Screen-space offset added before the scale divide.
    pub offset: Vec2,
    /// Rotation in radians; declared but not applied by the sampler.
    pub rotation_rad: f64,
    /// Per-axis zoom factor; destination pixels map to `coord / scale`.
    pub scale: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl ViewTransform {
    /// Build a transform from an offset and scale, with zero rotation.
    pub fn new(offset: Vec2, scale: Vec2) -> Self {
        Self {
            offset,
            rotation_rad: 0.0,
            scale,
        }
    }

    /// Map a destination pixel coordinate to a source sample coordinate.
    ///
    /// `sx = floor((x + offset.x) / scale.x)`, same for y. The float-to-int
    /// cast saturates, so a zero or infinite quotient yields a coordinate
    /// that fails every in-bounds coverage test instead of wrapping.
    pub fn sample_coords(self, x: i32, y: i32) -> (i64, i64) {
        let sx = ((f64::from(x) + self.offset.x) / self.scale.x).floor();
        let sy = ((f64::from(y) + self.offset.y) / self.scale.y).floor();
        (sx as i64, sy as i64)
    }
}
