use crate::foundation::core::Rgba8;
use crate::foundation::error::{SpryteError, SpryteResult};

/// Integer pixel-grid bounds. `max_x`/`max_y` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelBounds {
    /// Inclusive low X coordinate.
    pub min_x: i32,
    /// Inclusive low Y coordinate.
    pub min_y: i32,
    /// Exclusive high X coordinate.
    pub max_x: i32,
    /// Exclusive high Y coordinate.
    pub max_y: i32,
}

impl PixelBounds {
    /// Build bounds from the four edges, as given.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Zero-origin bounds covering `width x height` pixels.
    pub fn of_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32)
    }

    /// Pixel width; inverted bounds clamp to zero.
    pub fn width(self) -> u32 {
        (i64::from(self.max_x) - i64::from(self.min_x)).max(0) as u32
    }

    /// Pixel height; inverted bounds clamp to zero.
    pub fn height(self) -> u32 {
        (i64::from(self.max_y) - i64::from(self.min_y)).max(0) as u32
    }

    /// Whether the bounds contain no pixels.
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether `(x, y)` lies inside the bounds.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// The shared region of two bounds (possibly empty).
    pub fn intersect(self, other: PixelBounds) -> PixelBounds {
        PixelBounds::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
    }
}

/// Read-only pixel sampling capability: a 2D RGBA grid with integer bounds.
///
/// Sources may have a non-zero origin (a decoded image, or a rectangular
/// sub-view into one). Sampling outside the bounds yields transparent black.
pub trait PixelSource {
    /// The grid's absolute bounds.
    fn bounds(&self) -> PixelBounds;

    /// Sample the color at an absolute coordinate.
    fn sample(&self, x: i32, y: i32) -> Rgba8;
}

/// An owned row-major RGBA8 pixel grid with explicit bounds and a byte stride.
///
/// The backing store is channel-interleaved (R, G, B, A per pixel) with
/// `data.len() == stride * height`; `stride` may exceed `width * 4` for
/// row-padded layouts. Out-of-bounds reads return transparent black and
/// out-of-bounds writes are ignored, so pixel access is total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    bounds: PixelBounds,
    stride: usize,
    data: Vec<u8>,
}

impl Pixmap {
    /// A zeroed (transparent black) pixmap with a zero origin and tight stride.
    pub fn new(width: u32, height: u32) -> Self {
        let bounds = PixelBounds::of_size(width, height);
        let stride = bounds.width() as usize * 4;
        let data = vec![0u8; stride * bounds.height() as usize];
        Self {
            bounds,
            stride,
            data,
        }
    }

    /// Wrap an existing backing store.
    ///
    /// Fails if `stride` cannot hold a row or `data` is not exactly
    /// `stride * height` bytes.
    pub fn from_parts(bounds: PixelBounds, stride: usize, data: Vec<u8>) -> SpryteResult<Self> {
        let row_bytes = (bounds.width() as usize)
            .checked_mul(4)
            .ok_or_else(|| SpryteError::validation("pixmap row byte size overflow"))?;
        if stride < row_bytes {
            return Err(SpryteError::validation(format!(
                "pixmap stride {stride} is smaller than row size {row_bytes}"
            )));
        }
        let expected = stride
            .checked_mul(bounds.height() as usize)
            .ok_or_else(|| SpryteError::validation("pixmap byte size overflow"))?;
        if data.len() != expected {
            return Err(SpryteError::validation(format!(
                "pixmap byte length {} does not match stride * height = {expected}",
                data.len()
            )));
        }
        Ok(Self {
            bounds,
            stride,
            data,
        })
    }

    /// The grid's absolute bounds.
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    /// Bytes per row of the backing store.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// The raw channel-interleaved backing store.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw backing store.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of the pixel at an absolute coordinate.
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let lx = (i64::from(x) - i64::from(self.bounds.min_x)) as usize;
        let ly = (i64::from(y) - i64::from(self.bounds.min_y)) as usize;
        Some(ly * self.stride + lx * 4)
    }

    /// The color at an absolute coordinate, if inside the bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        let base = self.index_of(x, y)?;
        Some(Rgba8::new(
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        ))
    }

    /// Write the color at an absolute coordinate; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some(base) = self.index_of(x, y) {
            self.data[base] = color.r;
            self.data[base + 1] = color.g;
            self.data[base + 2] = color.b;
            self.data[base + 3] = color.a;
        }
    }

    /// Fill every pixel with `color`, leaving any stride padding untouched.
    pub fn fill(&mut self, color: Rgba8) {
        if self.bounds.is_empty() {
            return;
        }
        let row_bytes = self.bounds.width() as usize * 4;
        let px = [color.r, color.g, color.b, color.a];
        for row in self.data.chunks_exact_mut(self.stride) {
            for out in row[..row_bytes].chunks_exact_mut(4) {
                out.copy_from_slice(&px);
            }
        }
    }

    /// A borrowed sub-view, clipped to this pixmap's bounds.
    ///
    /// The view keeps absolute coordinates: sampling the view at `(x, y)`
    /// reads the same pixel as sampling the pixmap there.
    pub fn view(&self, bounds: PixelBounds) -> PixmapView<'_> {
        PixmapView {
            source: self,
            bounds: self.bounds.intersect(bounds),
        }
    }
}

impl PixelSource for Pixmap {
    fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    fn sample(&self, x: i32, y: i32) -> Rgba8 {
        self.get(x, y).unwrap_or(Rgba8::transparent())
    }
}

/// A rectangular view into a [`Pixmap`] with a possibly non-zero origin.
#[derive(Clone, Copy, Debug)]
pub struct PixmapView<'a> {
    source: &'a Pixmap,
    bounds: PixelBounds,
}

impl PixelSource for PixmapView<'_> {
    fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    fn sample(&self, x: i32, y: i32) -> Rgba8 {
        if !self.bounds.contains(x, y) {
            return Rgba8::transparent();
        }
        self.source.sample(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pixmap_is_transparent_black() {
        let p = Pixmap::new(3, 2);
        assert_eq!(p.width(), 3);
        assert_eq!(p.height(), 2);
        assert_eq!(p.stride(), 12);
        assert!(p.data().iter().all(|&b| b == 0));
        assert_eq!(p.get(2, 1), Some(Rgba8::transparent()));
    }

    #[test]
    fn get_set_roundtrip_and_oob_access_is_total() {
        let mut p = Pixmap::new(2, 2);
        let c = Rgba8::new(1, 2, 3, 4);
        p.set(1, 0, c);
        assert_eq!(p.get(1, 0), Some(c));

        p.set(5, 5, c); // ignored
        assert_eq!(p.get(5, 5), None);
        assert_eq!(p.sample(5, 5), Rgba8::transparent());
        assert_eq!(p.sample(-1, 0), Rgba8::transparent());
    }

    #[test]
    fn from_parts_validates_stride_and_length() {
        let bounds = PixelBounds::of_size(2, 2);
        assert!(Pixmap::from_parts(bounds, 4, vec![0u8; 8]).is_err());
        assert!(Pixmap::from_parts(bounds, 8, vec![0u8; 15]).is_err());
        let p = Pixmap::from_parts(bounds, 12, vec![0u8; 24]).unwrap();
        assert_eq!(p.stride(), 12);
    }

    #[test]
    fn padded_stride_addresses_pixels_correctly() {
        let bounds = PixelBounds::of_size(2, 2);
        let mut p = Pixmap::from_parts(bounds, 12, vec![0u8; 24]).unwrap();
        let c = Rgba8::opaque(9, 8, 7);
        p.set(0, 1, c);
        assert_eq!(p.get(0, 1), Some(c));
        assert_eq!(&p.data()[12..16], &[9, 8, 7, 255]);
    }

    #[test]
    fn fill_skips_stride_padding() {
        let bounds = PixelBounds::of_size(1, 2);
        let mut p = Pixmap::from_parts(bounds, 8, vec![0u8; 16]).unwrap();
        p.fill(Rgba8::opaque(5, 5, 5));
        assert_eq!(&p.data()[0..4], &[5, 5, 5, 255]);
        assert_eq!(&p.data()[4..8], &[0, 0, 0, 0]);
        assert_eq!(&p.data()[8..12], &[5, 5, 5, 255]);
    }

    #[test]
    fn nonzero_origin_bounds_address_absolute_coordinates() {
        let bounds = PixelBounds::new(10, 20, 12, 22);
        let mut p = Pixmap::from_parts(bounds, 8, vec![0u8; 16]).unwrap();
        let c = Rgba8::opaque(1, 1, 1);
        p.set(11, 21, c);
        assert_eq!(p.get(11, 21), Some(c));
        assert_eq!(p.get(1, 1), None);
    }

    #[test]
    fn view_keeps_absolute_coordinates_and_clips() {
        let mut p = Pixmap::new(3, 2);
        let c = Rgba8::opaque(40, 50, 60);
        p.set(1, 0, c);

        let v = p.view(PixelBounds::new(1, 0, 5, 5));
        assert_eq!(v.bounds(), PixelBounds::new(1, 0, 3, 2));
        assert_eq!(v.sample(1, 0), c);
        // Inside the pixmap but outside the view.
        assert_eq!(v.sample(0, 0), Rgba8::transparent());
    }

    #[test]
    fn zero_sized_pixmap_is_usable() {
        let mut p = Pixmap::new(0, 0);
        assert!(p.bounds().is_empty());
        p.fill(Rgba8::opaque(1, 2, 3));
        p.set(0, 0, Rgba8::opaque(1, 2, 3));
        assert_eq!(p.get(0, 0), None);
    }

    #[test]
    fn inverted_bounds_clamp_to_empty() {
        let b = PixelBounds::new(5, 5, 2, 2);
        assert_eq!(b.width(), 0);
        assert_eq!(b.height(), 0);
        assert!(b.is_empty());
        assert!(!b.contains(3, 3));
    }
}
