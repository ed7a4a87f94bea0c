// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use edgecrop_fit::AnchorMode;

/// Construction-time configuration for a [`CropController`](crate::CropController).
///
/// The lenient constructors never fail: a missing value selects the default
/// anchor, and an unrecognized one is logged and replaced by the default
/// ([`AnchorMode::BottomCrop`]). Use [`AnchorMode`]'s `FromStr` or
/// `TryFrom<i32>` directly when a hard error is wanted instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CropConfig {
    /// Which edge stays flush when the content is cropped.
    pub anchor: AnchorMode,
}

impl CropConfig {
    /// Creates a config with the given anchor.
    #[must_use]
    pub const fn new(anchor: AnchorMode) -> Self {
        Self { anchor }
    }

    /// Builds a config from a numeric declarative attribute (`1..=4`).
    #[must_use]
    pub fn from_attr(value: Option<i32>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        match AnchorMode::try_from(value) {
            Ok(anchor) => Self::new(anchor),
            Err(err) => {
                log::warn!("{err}; using {}", AnchorMode::default());
                Self::default()
            }
        }
    }

    /// Builds a config from a textual anchor name such as `"top_crop"`.
    #[must_use]
    pub fn from_name(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        match value.parse::<AnchorMode>() {
            Ok(anchor) => Self::new(anchor),
            Err(err) => {
                log::warn!("{err} (got {value:?}); using {}", AnchorMode::default());
                Self::default()
            }
        }
    }
}

impl From<AnchorMode> for CropConfig {
    fn from(anchor: AnchorMode) -> Self {
        Self::new(anchor)
    }
}
