// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Vec2};

use crate::anchor::{AnchorMode, CropAxis};
use crate::extent::{ContentExtent, ViewportExtent};

/// Uniform scale followed by an axis-aligned translation.
///
/// Applied to content drawn at its intrinsic size, the transform first scales
/// by [`scale`](Self::scale) about the origin and then translates by
/// `(dx, dy)`. Offsets produced by [`compute_crop`] are always whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal offset in viewport pixels.
    pub dx: f64,
    /// Vertical offset in viewport pixels.
    pub dy: f64,
}

impl CropTransform {
    /// The transform that leaves content untouched.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0);

    /// Creates a transform from a scale and an offset.
    #[must_use]
    pub const fn new(scale: f64, dx: f64, dy: f64) -> Self {
        Self { scale, dx, dy }
    }

    /// Returns the translation part as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// Returns the equivalent affine map: `translate(dx, dy) * scale(scale)`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.scale)
    }

    /// Returns where the content rectangle lands in viewport coordinates.
    ///
    /// Returns `None` if the content has no intrinsic size.
    #[must_use]
    pub fn content_rect_in_viewport(&self, content: ContentExtent) -> Option<Rect> {
        let rect = content.to_rect()?;
        Some(self.to_affine().transform_rect_bbox(rect))
    }

    /// Returns the part of the content (in intrinsic pixel coordinates) that
    /// remains visible inside `viewport`.
    ///
    /// Returns `None` if the content has no intrinsic size or the scale is
    /// not positive.
    #[must_use]
    pub fn visible_content_rect(
        &self,
        viewport: ViewportExtent,
        content: ContentExtent,
    ) -> Option<Rect> {
        let content_rect = content.to_rect()?;
        if self.scale.is_nan() || self.scale <= 0.0 {
            return None;
        }
        let view_in_content = self
            .to_affine()
            .inverse()
            .transform_rect_bbox(viewport.to_rect());
        Some(view_in_content.intersect(content_rect))
    }
}

impl Default for CropTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<CropTransform> for Affine {
    fn from(transform: CropTransform) -> Self {
        transform.to_affine()
    }
}

/// Result of fitting content into a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CropFit {
    /// Draw the content at its intrinsic size through this transform.
    Transform(CropTransform),
    /// The content has no intrinsic size: stretch it to exactly fill the
    /// viewport, with no scale or translation.
    Fill,
}

impl CropFit {
    /// Returns the transform, or `None` for [`CropFit::Fill`].
    #[must_use]
    pub fn transform(&self) -> Option<CropTransform> {
        match self {
            Self::Transform(transform) => Some(*transform),
            Self::Fill => None,
        }
    }

    /// Returns `true` for [`CropFit::Fill`].
    #[must_use]
    pub fn is_fill(&self) -> bool {
        matches!(self, Self::Fill)
    }
}

/// Returns the axis along which `content` overflows `viewport` once scaled to
/// cover it.
///
/// Aspect ratios are compared by cross-multiplying in 64-bit integers, so no
/// division is involved. Equal ratios report [`CropAxis::Vertical`] with zero
/// overflow. Returns `None` if the content has no intrinsic size.
#[must_use]
pub fn crop_axis(viewport: ViewportExtent, content: ContentExtent) -> Option<CropAxis> {
    if !content.has_intrinsic_size() {
        return None;
    }
    let wide = i64::from(content.intrinsic_width) * i64::from(viewport.height);
    let tall = i64::from(viewport.width) * i64::from(content.intrinsic_height);
    Some(if wide > tall {
        CropAxis::Horizontal
    } else {
        CropAxis::Vertical
    })
}

/// Computes the scale and offset that make `content` cover `viewport`
/// without distortion, keeping the `anchor` edge flush.
///
/// - Content with no positive intrinsic size yields [`CropFit::Fill`].
/// - When the content is relatively wider than the viewport, the height
///   constrains: `scale = vh / ih`, and only [`AnchorMode::RightCrop`] shifts
///   the content (by the full horizontal overflow). Every other anchor keeps
///   the left edge flush.
/// - Otherwise the width constrains: `scale = vw / iw`, and only
///   [`AnchorMode::BottomCrop`] shifts the content (by the full vertical
///   overflow). Every other anchor keeps the top edge flush.
///
/// Offsets are rounded to the nearest whole pixel, halves toward positive
/// infinity. The scale keeps full precision.
///
/// ```
/// use edgecrop_fit::{AnchorMode, ContentExtent, CropFit, ViewportExtent, compute_crop};
///
/// // A square photo in a 2:1 strip: width constrains, the top is cropped.
/// let fit = compute_crop(
///     ViewportExtent::new(100, 50),
///     ContentExtent::new(100, 100),
///     AnchorMode::BottomCrop,
/// );
/// let CropFit::Transform(t) = fit else { unreachable!() };
/// assert_eq!((t.scale, t.dx, t.dy), (1.0, 0.0, -50.0));
/// ```
#[must_use]
pub fn compute_crop(
    viewport: ViewportExtent,
    content: ContentExtent,
    anchor: AnchorMode,
) -> CropFit {
    let Some(axis) = crop_axis(viewport, content) else {
        return CropFit::Fill;
    };
    let vw = f64::from(viewport.width);
    let vh = f64::from(viewport.height);
    let iw = f64::from(content.intrinsic_width);
    let ih = f64::from(content.intrinsic_height);
    let rate = anchor.crop_axis_rate(axis);

    let (scale, dx, dy) = match axis {
        CropAxis::Horizontal => {
            let scale = vh / ih;
            (scale, (vw - iw * scale) * rate, 0.0)
        }
        CropAxis::Vertical => {
            let scale = vw / iw;
            (scale, 0.0, (vh - ih * scale) * rate)
        }
    };

    CropFit::Transform(CropTransform::new(
        scale,
        round_half_up(dx),
        round_half_up(dy),
    ))
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// This is `floor(value + 0.5)`, written with casts so it works without `std`
/// or `libm`. Inputs are bounded by viewport sizes, well inside `i64`.
fn round_half_up(value: f64) -> f64 {
    let shifted = value + 0.5;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by u32 viewport sizes"
    )]
    let truncated = shifted as i64 as f64;
    if truncated > shifted {
        truncated - 1.0
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{CropFit, CropTransform, compute_crop, crop_axis, round_half_up};
    use crate::{AnchorMode, ContentExtent, CropAxis, ViewportExtent};

    fn transform(vw: u32, vh: u32, iw: i32, ih: i32, anchor: AnchorMode) -> CropTransform {
        match compute_crop(
            ViewportExtent::new(vw, vh),
            ContentExtent::new(iw, ih),
            anchor,
        ) {
            CropFit::Transform(t) => t,
            CropFit::Fill => panic!("expected a transform for {iw}x{ih} content"),
        }
    }

    #[test]
    fn same_aspect_scales_without_offset() {
        let t = transform(100, 50, 200, 100, AnchorMode::BottomCrop);
        assert_eq!(t, CropTransform::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn wide_content_right_crop_keeps_right_edge() {
        let t = transform(100, 100, 200, 100, AnchorMode::RightCrop);
        assert_eq!(t, CropTransform::new(1.0, -100.0, 0.0));
    }

    #[test]
    fn tall_content_bottom_crop_keeps_bottom_edge() {
        let t = transform(100, 50, 100, 100, AnchorMode::BottomCrop);
        assert_eq!(t, CropTransform::new(1.0, 0.0, -50.0));
    }

    #[test]
    fn square_content_in_tall_viewport_is_height_constrained() {
        // 100 * 100 > 50 * 100, so the content counts as relatively wider.
        let t = transform(50, 100, 100, 100, AnchorMode::BottomCrop);
        assert_eq!(t, CropTransform::new(1.0, 0.0, 0.0));
        let t = transform(50, 100, 100, 100, AnchorMode::RightCrop);
        assert_eq!(t, CropTransform::new(1.0, -50.0, 0.0));
    }

    #[test]
    fn unsized_content_fills() {
        for anchor in AnchorMode::ALL {
            for viewport in [ViewportExtent::ZERO, ViewportExtent::new(320, 240)] {
                let fit = compute_crop(viewport, ContentExtent::new(0, 0), anchor);
                assert_eq!(fit, CropFit::Fill);
                assert!(fit.is_fill());
                assert_eq!(fit.transform(), None);
            }
        }
    }

    #[test]
    fn inert_anchors_stay_flush_start() {
        // Wide content: vertical anchors are inert.
        for anchor in [
            AnchorMode::TopCrop,
            AnchorMode::BottomCrop,
            AnchorMode::LeftCrop,
        ] {
            let t = transform(100, 100, 300, 100, anchor);
            assert_eq!((t.dx, t.dy), (0.0, 0.0));
        }
        // Tall content: horizontal anchors are inert.
        for anchor in [
            AnchorMode::TopCrop,
            AnchorMode::LeftCrop,
            AnchorMode::RightCrop,
        ] {
            let t = transform(100, 100, 100, 300, anchor);
            assert_eq!((t.dx, t.dy), (0.0, 0.0));
        }
    }

    #[test]
    fn equal_ratio_takes_width_branch() {
        assert_eq!(
            crop_axis(ViewportExtent::new(40, 30), ContentExtent::new(80, 60)),
            Some(CropAxis::Vertical)
        );
        assert_eq!(
            crop_axis(ViewportExtent::new(40, 30), ContentExtent::new(81, 60)),
            Some(CropAxis::Horizontal)
        );
        assert_eq!(
            crop_axis(ViewportExtent::new(40, 30), ContentExtent::UNSIZED),
            None
        );
    }

    #[test]
    fn empty_viewport_is_total() {
        // Zero width: the content is relatively wider, so height constrains.
        let t = transform(0, 100, 10, 10, AnchorMode::RightCrop);
        assert_eq!(t, CropTransform::new(10.0, -100.0, 0.0));

        // Zero height: width constrains and all of the content overflows.
        let t = transform(100, 0, 10, 10, AnchorMode::BottomCrop);
        assert_eq!(t, CropTransform::new(10.0, 0.0, -100.0));

        let t = transform(0, 0, 10, 10, AnchorMode::BottomCrop);
        assert_eq!(t, CropTransform::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn offsets_round_half_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(-0.0), 0.0);

        // 7x3 into 2x2: scale 2/3, dx = 2 - 7 * 2/3 = -2.666… → -3.
        let t = transform(2, 2, 7, 3, AnchorMode::RightCrop);
        assert_eq!(t.dx, -3.0);
        // 2x5 into 3x3: scale 1.5, dy = 3 - 7.5 = -4.5 → -4.
        let t = transform(3, 3, 2, 5, AnchorMode::BottomCrop);
        assert_eq!(t.dy, -4.0);
    }

    #[test]
    fn affine_matches_scale_then_translate() {
        let t = transform(100, 100, 200, 100, AnchorMode::RightCrop);
        let affine = t.to_affine();
        assert_eq!(affine * Point::new(200.0, 100.0), Point::new(100.0, 100.0));
        assert_eq!(affine * Point::ORIGIN, Point::new(-100.0, 0.0));
    }

    #[test]
    fn visible_region_follows_anchor() {
        let viewport = ViewportExtent::new(100, 100);
        let content = ContentExtent::new(200, 100);

        let right = transform(100, 100, 200, 100, AnchorMode::RightCrop);
        assert_eq!(
            right.visible_content_rect(viewport, content),
            Some(Rect::new(100.0, 0.0, 200.0, 100.0))
        );
        assert_eq!(
            right.content_rect_in_viewport(content),
            Some(Rect::new(-100.0, 0.0, 100.0, 100.0))
        );

        let left = transform(100, 100, 200, 100, AnchorMode::LeftCrop);
        assert_eq!(
            left.visible_content_rect(viewport, content),
            Some(Rect::new(0.0, 0.0, 100.0, 100.0))
        );

        let zero = CropTransform::new(0.0, 0.0, 0.0);
        assert_eq!(zero.visible_content_rect(viewport, content), None);
        assert_eq!(
            right.visible_content_rect(viewport, ContentExtent::UNSIZED),
            None
        );
    }
}
