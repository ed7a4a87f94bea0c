// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Rect, Size};

/// Size of the area content is drawn into, in whole device pixels.
///
/// This is the host's layout bounds with padding removed on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportExtent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ViewportExtent {
    /// An empty viewport, as seen before the first layout pass.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a viewport extent.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Derives the viewport from an integer layout frame and its padding.
    ///
    /// Padding that exceeds the frame clamps the affected dimension to zero.
    #[must_use]
    pub fn from_frame(width: i32, height: i32, padding: FramePadding) -> Self {
        let inner_w = i64::from(width) - i64::from(padding.left) - i64::from(padding.right);
        let inner_h = i64::from(height) - i64::from(padding.top) - i64::from(padding.bottom);
        Self {
            width: u32::try_from(inner_w.max(0)).unwrap_or(u32::MAX),
            height: u32::try_from(inner_h.max(0)).unwrap_or(u32::MAX),
        }
    }

    /// Derives the viewport from floating-point layout bounds and insets.
    ///
    /// Fractional pixels are truncated and negative results clamp to zero.
    #[must_use]
    pub fn from_bounds(bounds: Rect, padding: Insets) -> Self {
        let inner = bounds.abs() - padding;
        Self {
            width: whole_pixels(inner.width()),
            height: whole_pixels(inner.height()),
        }
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the extent as a [`Size`].
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Returns the viewport rectangle anchored at the origin.
    ///
    /// This is what content is stretched to when it has no intrinsic size.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        self.to_size().to_rect()
    }
}

impl From<(u32, u32)> for ViewportExtent {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

fn whole_pixels(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is in 0..u32::MAX and truncation to whole pixels is intended"
    )]
    {
        value as u32
    }
}

/// Integer padding on each side of a layout frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct FramePadding {
    /// Left padding in pixels.
    pub left: i32,
    /// Top padding in pixels.
    pub top: i32,
    /// Right padding in pixels.
    pub right: i32,
    /// Bottom padding in pixels.
    pub bottom: i32,
}

impl FramePadding {
    /// No padding.
    pub const ZERO: Self = Self::uniform(0);

    /// Creates padding from the four sides.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates the same padding on every side.
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Natural pixel size of the content, as reported by its provider.
///
/// Either dimension may be zero or negative, meaning the content has no
/// intrinsic size (for example a solid color). That is a legal state and
/// makes the content stretch to fill the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentExtent {
    /// Intrinsic width in pixels.
    pub intrinsic_width: i32,
    /// Intrinsic height in pixels.
    pub intrinsic_height: i32,
}

impl ContentExtent {
    /// Content with no intrinsic size.
    pub const UNSIZED: Self = Self::new(-1, -1);

    /// Creates a content extent.
    #[must_use]
    pub const fn new(intrinsic_width: i32, intrinsic_height: i32) -> Self {
        Self {
            intrinsic_width,
            intrinsic_height,
        }
    }

    /// Returns `true` if both dimensions are positive.
    #[must_use]
    pub const fn has_intrinsic_size(self) -> bool {
        self.intrinsic_width > 0 && self.intrinsic_height > 0
    }

    /// Returns the content rectangle at its intrinsic size, anchored at the
    /// origin, or `None` if the content has no intrinsic size.
    #[must_use]
    pub fn to_rect(self) -> Option<Rect> {
        self.has_intrinsic_size().then(|| {
            Rect::new(
                0.0,
                0.0,
                f64::from(self.intrinsic_width),
                f64::from(self.intrinsic_height),
            )
        })
    }
}

impl From<(i32, i32)> for ContentExtent {
    fn from((intrinsic_width, intrinsic_height): (i32, i32)) -> Self {
        Self::new(intrinsic_width, intrinsic_height)
    }
}
