// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits implemented by the host view binding.
//!
//! The controller never inherits from or owns a platform widget. Instead the
//! host exposes two narrow capabilities: reporting the content's intrinsic
//! size ([`ContentSource`]) and accepting a computed placement
//! ([`Paintable`]).

use edgecrop_fit::{ContentExtent, CropFit, CropTransform, ViewportExtent};
use kurbo::{Affine, Rect};

/// How the host must lay out and draw its content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Draw the content into `content_bounds` (its intrinsic rectangle at the
    /// origin) through `transform`.
    Transformed {
        /// Scale and offset mapping content into the viewport.
        transform: CropTransform,
        /// The content's own bounds, `(0, 0, intrinsic_width, intrinsic_height)`.
        content_bounds: Rect,
    },
    /// Stretch the content to exactly `bounds`, the viewport rectangle, with
    /// no transform.
    Filled {
        /// The viewport rectangle, `(0, 0, width, height)`.
        bounds: Rect,
    },
}

impl Placement {
    /// Turns a fit result into the placement the host applies.
    #[must_use]
    pub fn from_fit(fit: CropFit, viewport: ViewportExtent, content: ContentExtent) -> Self {
        match (fit, content.to_rect()) {
            (CropFit::Transform(transform), Some(content_bounds)) => Self::Transformed {
                transform,
                content_bounds,
            },
            _ => Self::Filled {
                bounds: viewport.to_rect(),
            },
        }
    }

    /// Returns the transform, or `None` for a filled placement.
    #[must_use]
    pub fn transform(&self) -> Option<CropTransform> {
        match self {
            Self::Transformed { transform, .. } => Some(*transform),
            Self::Filled { .. } => None,
        }
    }

    /// Returns the bounds the content draws into before any transform.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        match self {
            Self::Transformed { content_bounds, .. } => *content_bounds,
            Self::Filled { bounds } => *bounds,
        }
    }

    /// Returns the draw transform: the crop transform, or identity when
    /// filled.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.transform()
            .map_or(Affine::IDENTITY, |transform| transform.to_affine())
    }
}

/// Supplies the content's intrinsic size.
///
/// The controller reads this fresh on every recompute, since content can
/// change independently of the layout bounds.
pub trait ContentSource {
    /// Returns the content's intrinsic extent, or `None` if there is no
    /// content to draw.
    fn intrinsic_extent(&self) -> Option<ContentExtent>;
}

/// Receives placements and reports which one is currently in effect.
pub trait Paintable {
    /// Returns the placement the host is currently rendering with.
    ///
    /// Hosts that reset their draw state behind the controller's back (for
    /// example when content is swapped) should report that here so the next
    /// paint recomputes.
    fn applied_placement(&self) -> Option<Placement>;

    /// Draws the content at `content_bounds` through `transform`.
    fn apply_transform(&mut self, transform: CropTransform, content_bounds: Rect);

    /// Stretches the content to `bounds` with no transform.
    fn apply_fill_bounds(&mut self, bounds: Rect);
}
