//! The transform pipeline: fixed-order composition of enabled stages.
//!
//! One evaluation per host-shell trigger (parameter change or new
//! upload). The pipeline is a pure function: it never mutates its input,
//! holds no state between calls, and recomputes from scratch on every
//! invocation. Parameter ranges are the host shell's responsibility;
//! nothing is re-validated here.

use crate::decode::DecodedImage;
use crate::transform::{gaussian_blur, reflect, rotate, scale, sharpen, shear, translate};
use crate::{TransformPlan, TransformStep};

/// Apply every enabled stage of `plan` to `image`, in the fixed order.
///
/// Each stage consumes the previous stage's output, so later stages see
/// accumulated results (blur runs on the rotated image, not the
/// original). A plan with no enabled stage returns a byte-identical
/// copy of the input.
pub fn apply_pipeline(image: &DecodedImage, plan: &TransformPlan) -> DecodedImage {
    if plan.is_identity() {
        return image.clone();
    }

    let mut current = image.clone();
    for step in plan.steps() {
        current = match step {
            TransformStep::Translate(p) => translate(&current, p.shift_x, p.shift_y),
            TransformStep::Scale(p) => scale(&current, p.factor),
            TransformStep::Rotate(p) => rotate(&current, p.angle),
            TransformStep::Shear(p) => shear(&current, p.shear_x, p.shear_y),
            TransformStep::Reflect(p) => reflect(&current, p.axis),
            TransformStep::Blur(p) => gaussian_blur(&current, p.level),
            TransformStep::Sharpen(p) => sharpen(&current, p.level, p.channel),
        };
    }
    current
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{Blur, Reflect, ReflectAxis, Rotate, Scale, Sharpen, SharpenChannel, Shear, Translate};
    use proptest::prelude::*;

    /// Strategy for image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=24, 1u32..=24)
    }

    /// Strategy for a full in-range plan with each stage independently
    /// enabled or disabled.
    fn plan_strategy() -> impl Strategy<Value = TransformPlan> {
        (
            proptest::option::of((-200i32..=200, -200i32..=200)),
            proptest::option::of(0.1f64..=3.0),
            proptest::option::of(0.0f64..=360.0),
            proptest::option::of((-1.0f64..=1.0, -1.0f64..=1.0)),
            proptest::option::of(prop_oneof![
                Just(ReflectAxis::Horizontal),
                Just(ReflectAxis::Vertical)
            ]),
            proptest::option::of((0u32..=12).prop_map(|i| 2 * i + 1)),
            proptest::option::of((
                1u8..=10,
                prop_oneof![
                    Just(SharpenChannel::All),
                    Just(SharpenChannel::Red),
                    Just(SharpenChannel::Green),
                    Just(SharpenChannel::Blue)
                ],
            )),
        )
            .prop_map(
                |(translate, scale, rotate, shear, reflect, blur, sharpen)| TransformPlan {
                    translate: translate.map(|(shift_x, shift_y)| Translate { shift_x, shift_y }),
                    scale: scale.map(|factor| Scale { factor }),
                    rotate: rotate.map(|angle| Rotate { angle }),
                    shear: shear.map(|(shear_x, shear_y)| Shear { shear_x, shear_y }),
                    reflect: reflect.map(|axis| Reflect { axis }),
                    blur: blur.map(|level| Blur { level }),
                    sharpen: sharpen.map(|(level, channel)| Sharpen { level, channel }),
                },
            )
    }

    fn pattern_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 37 + y * 11) % 256) as u8);
                pixels.push(((x * 7 + y * 53) % 256) as u8);
                pixels.push(((x + y * 2) % 256) as u8);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: the empty plan is the identity, byte-exact.
        #[test]
        fn prop_empty_plan_is_identity((width, height) in dimensions_strategy()) {
            let img = pattern_image(width, height);
            let result = apply_pipeline(&img, &TransformPlan::default());
            prop_assert_eq!(result, img);
        }

        /// Property: the pipeline is deterministic.
        #[test]
        fn prop_pipeline_is_deterministic(
            (width, height) in dimensions_strategy(),
            plan in plan_strategy(),
        ) {
            let img = pattern_image(width, height);
            let a = apply_pipeline(&img, &plan);
            let b = apply_pipeline(&img, &plan);
            prop_assert_eq!(a, b);
        }

        /// Property: output buffer always matches its dimensions, and only
        /// the scale stage can change them.
        #[test]
        fn prop_dimensions_consistent(
            (width, height) in dimensions_strategy(),
            plan in plan_strategy(),
        ) {
            let img = pattern_image(width, height);
            let result = apply_pipeline(&img, &plan);

            prop_assert_eq!(
                result.pixels.len(),
                (result.width * result.height * 3) as usize
            );

            if plan.scale.is_none() {
                prop_assert_eq!((result.width, result.height), (width, height));
            } else {
                prop_assert!(result.width >= 1 && result.height >= 1);
            }
        }

        /// Property: reflection alone is an involution.
        #[test]
        fn prop_reflection_involution(
            (width, height) in dimensions_strategy(),
            horizontal in any::<bool>(),
        ) {
            let axis = if horizontal { ReflectAxis::Horizontal } else { ReflectAxis::Vertical };
            let plan = TransformPlan {
                reflect: Some(Reflect { axis }),
                ..Default::default()
            };

            let img = pattern_image(width, height);
            let twice = apply_pipeline(&apply_pipeline(&img, &plan), &plan);
            prop_assert_eq!(twice, img);
        }

        /// Property: sharpening a single channel never touches the others.
        #[test]
        fn prop_sharpen_channel_isolation(
            (width, height) in dimensions_strategy(),
            level in 1u8..=10,
        ) {
            let img = pattern_image(width, height);
            let plan = TransformPlan {
                sharpen: Some(Sharpen { level, channel: SharpenChannel::Blue }),
                ..Default::default()
            };
            let result = apply_pipeline(&img, &plan);

            for i in (0..img.pixels.len()).step_by(3) {
                prop_assert_eq!(result.pixels[i], img.pixels[i]);
                prop_assert_eq!(result.pixels[i + 1], img.pixels[i + 1]);
            }
        }

        /// Property: translation by zero, rotation by zero and shear by
        /// zero are all byte-exact no-ops.
        #[test]
        fn prop_zero_parameters_are_noops((width, height) in dimensions_strategy()) {
            let img = pattern_image(width, height);
            let plan = TransformPlan {
                translate: Some(Translate { shift_x: 0, shift_y: 0 }),
                rotate: Some(Rotate { angle: 0.0 }),
                shear: Some(Shear { shear_x: 0.0, shear_y: 0.0 }),
                scale: Some(Scale { factor: 1.0 }),
                ..Default::default()
            };
            let result = apply_pipeline(&img, &plan);
            prop_assert_eq!(result, img);
        }
    }
}
