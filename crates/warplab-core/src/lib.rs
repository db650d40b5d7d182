//! Warplab Core - Image transform pipeline
//!
//! This crate provides the core image processing functionality for Warplab:
//! JPEG/PNG decoding, the deterministic transform pipeline, and PNG export.

pub mod decode;
pub mod encode;
pub mod pipeline;
pub mod transform;

pub use pipeline::apply_pipeline;
pub use transform::{gaussian_blur, reflect, rotate, scale, sharpen, shear, translate};

/// Pixel translation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Translate {
    /// Horizontal shift in pixels (-200 to 200, positive = right)
    pub shift_x: i32,
    /// Vertical shift in pixels (-200 to 200, positive = down)
    pub shift_y: i32,
}

/// Uniform scaling parameters.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scale {
    /// Scale factor applied to both axes (0.1 to 3.0)
    pub factor: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

/// Rotation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotate {
    /// Rotation angle in degrees (0 to 360, positive = counter-clockwise)
    pub angle: f64,
}

/// Shear parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shear {
    /// Horizontal shear factor (-1.0 to 1.0)
    pub shear_x: f64,
    /// Vertical shear factor (-1.0 to 1.0)
    pub shear_y: f64,
}

/// Mirror axis for the reflection stage.
///
/// `Horizontal` mirrors across the horizontal center line (top becomes
/// bottom); `Vertical` mirrors across the vertical center line (left
/// becomes right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ReflectAxis {
    #[default]
    Horizontal,
    Vertical,
}

/// Reflection parameters. Exactly one axis per application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Reflect {
    pub axis: ReflectAxis,
}

/// Gaussian blur parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Blur {
    /// Kernel size (odd, 1 to 25); larger = stronger blur.
    /// Callers must keep this odd - the stage does not validate.
    pub level: u32,
}

impl Default for Blur {
    fn default() -> Self {
        Self { level: 1 }
    }
}

/// Channel selector for the sharpen stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum SharpenChannel {
    /// Replace all three channels with the sharpened result.
    #[default]
    All,
    /// Replace only the red channel; green and blue keep their pre-stage values.
    Red,
    /// Replace only the green channel.
    Green,
    /// Replace only the blue channel.
    Blue,
}

/// Sharpen parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sharpen {
    /// Sharpen strength (1 to 10); sets the kernel center weight to `4 + level`.
    pub level: u8,
    /// Which channel(s) of the result to keep.
    pub channel: SharpenChannel,
}

impl Default for Sharpen {
    fn default() -> Self {
        Self {
            level: 1,
            channel: SharpenChannel::All,
        }
    }
}

/// The full set of optional transforms for one pipeline evaluation.
///
/// One field per transform kind, in the fixed application order. A `None`
/// field is a disabled stage. The order is part of the contract and cannot
/// be changed by the caller: [`TransformPlan::steps`] always yields
/// translate, scale, rotate, shear, reflect, blur, sharpen.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformPlan {
    pub translate: Option<Translate>,
    pub scale: Option<Scale>,
    pub rotate: Option<Rotate>,
    pub shear: Option<Shear>,
    pub reflect: Option<Reflect>,
    pub blur: Option<Blur>,
    pub sharpen: Option<Sharpen>,
}

/// One enabled pipeline stage with its parameters.
///
/// Produced by [`TransformPlan::steps`]; consumers dispatch with an
/// exhaustive `match`, so adding a transform kind is a compile error until
/// every pipeline is updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformStep {
    Translate(Translate),
    Scale(Scale),
    Rotate(Rotate),
    Shear(Shear),
    Reflect(Reflect),
    Blur(Blur),
    Sharpen(Sharpen),
}

impl TransformPlan {
    /// Create a plan with every stage disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether every stage is disabled.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// The enabled stages, in the fixed application order.
    pub fn steps(&self) -> impl Iterator<Item = TransformStep> + '_ {
        [
            self.translate.map(TransformStep::Translate),
            self.scale.map(TransformStep::Scale),
            self.rotate.map(TransformStep::Rotate),
            self.shear.map(TransformStep::Shear),
            self.reflect.map(TransformStep::Reflect),
            self.blur.map(TransformStep::Blur),
            self.sharpen.map(TransformStep::Sharpen),
        ]
        .into_iter()
        .flatten()
    }
}
