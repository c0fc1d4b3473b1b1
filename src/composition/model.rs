use crate::foundation::core::{Canvas, Rgba8, ViewTransform};
use crate::foundation::error::{SpryteError, SpryteResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A renderable scene description.
///
/// A scene is pure data that can be built programmatically or round-tripped
/// through JSON; file IO stays with the caller (the `spryte` binary resolves
/// image paths relative to the scene file it loaded).
pub struct Scene {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Camera transform applied to every sprite this frame.
    #[serde(default)]
    pub camera: ViewTransform,
    /// Background fill written before compositing.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Sprites in back-to-front draw order.
    pub sprites: Vec<SpriteSpec>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One sprite entry in a scene.
pub struct SpriteSpec {
    /// Image path, relative to the scene file.
    pub image: String,
    /// Placement offset X.
    #[serde(default)]
    pub x: f64,
    /// Placement offset Y.
    #[serde(default)]
    pub y: f64,
    /// Rotation in radians; carried, not applied by the sampler.
    #[serde(default)]
    pub rotation: f64,
    /// Horizontal scale; carried, not applied by the sampler.
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    /// Vertical scale; carried, not applied by the sampler.
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

fn default_background() -> Rgba8 {
    Rgba8::opaque(0, 0, 0)
}

fn default_scale() -> f64 {
    1.0
}

impl Scene {
    /// Check the scene for data errors before any decoding happens.
    pub fn validate(&self) -> SpryteResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SpryteError::validation("scene canvas must be non-empty"));
        }
        for (idx, sprite) in self.sprites.iter().enumerate() {
            if sprite.image.is_empty() {
                return Err(SpryteError::validation(format!(
                    "sprite {idx} has an empty image path"
                )));
            }
        }
        Ok(())
    }

    /// Parse a scene from JSON text.
    pub fn from_json_str(json: &str) -> SpryteResult<Scene> {
        serde_json::from_str(json).map_err(|e| SpryteError::serde(format!("parse scene JSON: {e}")))
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json_string(&self) -> SpryteResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SpryteError::serde(format!("serialize scene JSON: {e}")))
    }
}
