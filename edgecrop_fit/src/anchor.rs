// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Which edge of the content stays flush with the viewport when cropping.
///
/// Cropping only ever happens along one axis. The horizontal anchors
/// ([`LeftCrop`](Self::LeftCrop), [`RightCrop`](Self::RightCrop)) only have an
/// effect when the content overflows horizontally, and the vertical anchors
/// only when it overflows vertically. An anchor that does not match the crop
/// axis behaves like the flush-start anchor for that axis (left or top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnchorMode {
    /// Keep the top edge visible, crop the bottom.
    TopCrop,
    /// Keep the bottom edge visible, crop the top.
    #[default]
    BottomCrop,
    /// Keep the left edge visible, crop the right.
    LeftCrop,
    /// Keep the right edge visible, crop the left.
    RightCrop,
}

impl AnchorMode {
    /// All anchor modes, in attribute-value order.
    pub const ALL: [Self; 4] = [
        Self::TopCrop,
        Self::BottomCrop,
        Self::LeftCrop,
        Self::RightCrop,
    ];

    /// Returns the canonical name used by [`Display`](fmt::Display) and
    /// [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopCrop => "top_crop",
            Self::BottomCrop => "bottom_crop",
            Self::LeftCrop => "left_crop",
            Self::RightCrop => "right_crop",
        }
    }

    /// Returns the numeric value this mode has in declarative attributes.
    ///
    /// Values are `1` (top), `2` (bottom), `3` (left) and `4` (right).
    #[must_use]
    pub const fn attr_value(self) -> i32 {
        match self {
            Self::TopCrop => 1,
            Self::BottomCrop => 2,
            Self::LeftCrop => 3,
            Self::RightCrop => 4,
        }
    }

    /// Looks up an anchor mode by its attribute value.
    ///
    /// Returns `None` for values outside `1..=4`; see [`TryFrom<i32>`] for the
    /// fallible form.
    #[must_use]
    pub const fn from_attr_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::TopCrop),
            2 => Some(Self::BottomCrop),
            3 => Some(Self::LeftCrop),
            4 => Some(Self::RightCrop),
            _ => None,
        }
    }

    /// Returns the fraction of the overflow along `axis` that is shifted out
    /// at the start edge.
    ///
    /// `1.0` means the end edge is flush (the start is cropped); `0.0` means
    /// the start edge is flush (the end is cropped).
    #[must_use]
    pub const fn crop_axis_rate(self, axis: CropAxis) -> f64 {
        match (axis, self) {
            (CropAxis::Horizontal, Self::RightCrop) | (CropAxis::Vertical, Self::BottomCrop) => {
                1.0
            }
            _ => 0.0,
        }
    }
}

impl fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnchorMode {
    type Err = ParseAnchorModeError;

    /// Parses `top_crop`/`bottom_crop`/`left_crop`/`right_crop`, or the short
    /// forms `top`/`bottom`/`left`/`right`. Matching ignores ASCII case and
    /// surrounding whitespace, and accepts `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (edge, suffix) = match trimmed.find(['_', '-']) {
            Some(split) => (&trimmed[..split], Some(&trimmed[split + 1..])),
            None => (trimmed, None),
        };
        if suffix.is_some_and(|suffix| !suffix.eq_ignore_ascii_case("crop")) {
            return Err(ParseAnchorModeError::Name);
        }
        Self::ALL
            .into_iter()
            .find(|mode| {
                mode.name()
                    .strip_suffix("_crop")
                    .is_some_and(|short| short.eq_ignore_ascii_case(edge))
            })
            .ok_or(ParseAnchorModeError::Name)
    }
}

impl TryFrom<i32> for AnchorMode {
    type Error = ParseAnchorModeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_attr_value(value).ok_or(ParseAnchorModeError::AttrValue(value))
    }
}

impl From<AnchorMode> for i32 {
    fn from(mode: AnchorMode) -> Self {
        mode.attr_value()
    }
}

/// Error returned when a raw value does not name an [`AnchorMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseAnchorModeError {
    /// The string is not one of the recognized anchor names.
    Name,
    /// The attribute value is outside `1..=4`.
    AttrValue(i32),
}

impl fmt::Display for ParseAnchorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str(
                "unrecognized anchor mode; expected one of top_crop, bottom_crop, left_crop, right_crop",
            ),
            Self::AttrValue(value) => {
                write!(f, "anchor attribute value {value} is outside 1..=4")
            }
        }
    }
}

impl core::error::Error for ParseAnchorModeError {}

/// The axis along which content overflows the viewport and gets cropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CropAxis {
    /// Content is relatively wider than the viewport; height constrains.
    Horizontal,
    /// Content is relatively taller than (or as wide as) the viewport; width
    /// constrains.
    Vertical,
}
