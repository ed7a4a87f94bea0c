// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edgecrop Fit: edge-anchored "cover" fitting for images.
//!
//! A "center crop" scales content uniformly until it covers the viewport and
//! then trims the overflow equally from both sides. This crate computes the
//! same uniform scale but keeps one edge of the content flush with the
//! viewport instead, so the overflow is cropped only on the opposite side.
//!
//! The crate is a small, headless geometry layer:
//! - [`ViewportExtent`] and [`ContentExtent`] describe the two sizes involved.
//! - [`AnchorMode`] selects which edge stays visible.
//! - [`compute_crop`] produces a [`CropFit`]: either a [`CropTransform`]
//!   (uniform scale + whole-pixel offset) or [`CropFit::Fill`] for content
//!   with no intrinsic size.
//!
//! It does **not** own any widget state or rendering backend. Deciding when
//! to recompute and how to publish the result lives in `edgecrop_view`.
//!
//! ## Minimal example
//!
//! ```rust
//! use edgecrop_fit::{AnchorMode, ContentExtent, CropFit, ViewportExtent, compute_crop};
//!
//! // A 200x100 banner shown in a 100x100 square, keeping its right edge.
//! let fit = compute_crop(
//!     ViewportExtent::new(100, 100),
//!     ContentExtent::new(200, 100),
//!     AnchorMode::RightCrop,
//! );
//!
//! let transform = fit.transform().unwrap();
//! assert_eq!(transform.scale, 1.0);
//! assert_eq!(transform.dx, -100.0);
//! assert_eq!(transform.dy, 0.0);
//!
//! // Content without an intrinsic size is stretched instead.
//! let fill = compute_crop(
//!     ViewportExtent::new(100, 100),
//!     ContentExtent::new(0, 0),
//!     AnchorMode::RightCrop,
//! );
//! assert_eq!(fill, CropFit::Fill);
//! ```
//!
//! ## Design notes
//!
//! - Scaling is always uniform and the offset is applied on one axis only.
//! - Anchors are per-axis: `LeftCrop`/`RightCrop` matter only when the
//!   content overflows horizontally, `TopCrop`/`BottomCrop` only when it
//!   overflows vertically. An inert anchor keeps the start edge flush.
//! - Aspect ratios are compared by integer cross-multiplication.
//! - Rotation and non-uniform scale are out of scope.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`AnchorMode`] (snake_case
//!   names), the extent types and [`CropTransform`].
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod extent;
mod fit;

pub use anchor::{AnchorMode, CropAxis, ParseAnchorModeError};
pub use extent::{ContentExtent, FramePadding, ViewportExtent};
pub use fit::{CropFit, CropTransform, compute_crop, crop_axis};
