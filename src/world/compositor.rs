use crate::foundation::core::{Rect, ViewTransform};
use crate::raster::pixmap::{PixelBounds, Pixmap};
use crate::sprite::Sprite;

/// The camera capability: expose the current view transform.
pub trait Camera {
    /// The transform mapping screen pixels to sample coordinates this frame.
    fn view(&self) -> ViewTransform;
}

/// A camera holding one fixed transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedCamera {
    view: ViewTransform,
}

impl FixedCamera {
    /// Build a camera from a view transform.
    pub fn new(view: ViewTransform) -> Self {
        Self { view }
    }
}

impl Camera for FixedCamera {
    fn view(&self) -> ViewTransform {
        self.view
    }
}

/// An ordered collection of sprites composited back-to-front.
///
/// Insertion order is draw order: on overlap, later sprites overwrite the
/// RGB of earlier ones pixel by pixel (last writer wins per pixel). The
/// world owns its sprites; the destination buffer is borrowed per call.
#[derive(Default)]
pub struct SpriteWorld {
    sprites: Vec<Box<dyn Sprite>>,
}

impl SpriteWorld {
    /// An empty world.
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
        }
    }

    /// Append a sprite; it draws after every sprite already present, so it
    /// ends up frontmost on overlap.
    pub fn push(&mut self, sprite: Box<dyn Sprite>) {
        self.sprites.push(sprite);
    }

    /// Number of sprites in the world.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the world holds no sprites.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Composite one frame: cull against the camera footprint, then draw
    /// surviving sprites in list order into `dst`.
    ///
    /// A single synchronous pass; sprites that fail the overlap test are
    /// skipped entirely. Degenerate destinations are a no-op.
    #[tracing::instrument(skip(self, camera, dst))]
    pub fn draw(&self, camera: &dyn Camera, dst: &mut Pixmap) {
        let view = camera.view();
        let footprint = camera_footprint(view, dst.bounds());

        let mut drawn = 0usize;
        for sprite in &self.sprites {
            if footprint.overlaps(sprite.bounds()) {
                sprite.draw(view, dst);
                drawn += 1;
            }
        }
        tracing::debug!(drawn, culled = self.sprites.len() - drawn, "composited frame");
    }
}

/// The screen-space rectangle the camera observes: centered on the camera
/// offset with half-extents of half the destination dimensions.
fn camera_footprint(view: ViewTransform, db: PixelBounds) -> Rect {
    let half_w = f64::from(db.width()) / 2.0;
    let half_h = f64::from(db.height()) / 2.0;
    Rect::new(
        view.offset.x - half_w,
        view.offset.y - half_h,
        view.offset.x + half_w,
        view.offset.y + half_h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    struct ProbeSprite {
        bounds: Rect,
        draws: Rc<Cell<usize>>,
    }

    impl Sprite for ProbeSprite {
        fn bounds(&self) -> Rect {
            self.bounds
        }

        fn draw(&self, _view: ViewTransform, dst: &mut Pixmap) {
            self.draws.set(self.draws.get() + 1);
            let b = dst.bounds();
            dst.set(
                b.min_x,
                b.min_y,
                crate::foundation::core::Rgba8::opaque(1, 1, 1),
            );
        }
    }

    fn probe(bounds: Rect) -> (Box<ProbeSprite>, Rc<Cell<usize>>) {
        let draws = Rc::new(Cell::new(0));
        (
            Box::new(ProbeSprite {
                bounds,
                draws: draws.clone(),
            }),
            draws,
        )
    }

    #[test]
    fn footprint_is_centered_on_camera_offset() {
        let view = ViewTransform::new(Vec2::new(100.0, 50.0), Vec2::new(1.0, 1.0));
        let fp = camera_footprint(view, PixelBounds::of_size(640, 480));
        assert_eq!(fp, Rect::new(100.0 - 320.0, 50.0 - 240.0, 100.0 + 320.0, 50.0 + 240.0));
    }

    #[test]
    fn sprites_outside_footprint_are_skipped_entirely() {
        let (inside, inside_draws) = probe(Rect::new(0.0, 0.0, 4.0, 4.0));
        let (outside, outside_draws) = probe(Rect::new(900.0, 900.0, 904.0, 904.0));

        let mut world = SpriteWorld::new();
        world.push(inside);
        world.push(outside);

        let camera = FixedCamera::default();
        let mut dst = Pixmap::new(16, 16);
        world.draw(&camera, &mut dst);

        assert_eq!(inside_draws.get(), 1);
        assert_eq!(outside_draws.get(), 0);
    }

    #[test]
    fn footprint_edge_contact_still_draws() {
        // 16x16 destination, camera at origin: footprint reaches x = 8.
        let (touching, draws) = probe(Rect::new(8.0, 0.0, 12.0, 4.0));
        let mut world = SpriteWorld::new();
        world.push(touching);

        let mut dst = Pixmap::new(16, 16);
        world.draw(&FixedCamera::default(), &mut dst);
        assert_eq!(draws.get(), 1);
    }

    #[test]
    fn empty_world_and_empty_destination_are_noops() {
        let world = SpriteWorld::new();
        assert!(world.is_empty());
        let mut dst = Pixmap::new(8, 8);
        world.draw(&FixedCamera::default(), &mut dst);
        assert!(dst.data().iter().all(|&b| b == 0));

        let (sprite, draws) = probe(Rect::new(0.0, 0.0, 1.0, 1.0));
        let mut world = SpriteWorld::new();
        world.push(sprite);
        let mut empty = Pixmap::new(0, 0);
        world.draw(&FixedCamera::default(), &mut empty);
        // Zero-extent footprint still touches a sprite sitting on its corner.
        assert_eq!(draws.get(), 1);
    }
}
