// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edgecrop View: keeps an edge-anchored crop in sync with a host widget.
//!
//! [`edgecrop_fit`] computes a crop transform from sizes alone. This crate
//! adds the widget-side policy around it:
//!
//! - **Host capabilities** ([`ContentSource`], [`Paintable`]): the host
//!   binding reports the content's intrinsic size and accepts placements.
//!   There is no inheritance from platform widgets.
//! - **Placement** ([`Placement`]): either a transform plus the content's
//!   intrinsic bounds, or "stretch to these viewport bounds".
//! - **Controller** ([`CropController`]): caches the placement, marks it
//!   stale on bounds or anchor changes, and re-checks it at paint time.
//! - **Config** ([`CropConfig`]): validated, construction-time anchor
//!   selection with a lenient fallback to [`AnchorMode::BottomCrop`].
//!
//! ## Lifecycle
//!
//! ```text
//! bounds changed ──▶ Stale ──▶ recompute ──▶ Fresh ──▶ publish to host
//! anchor changed ──▶ Stale
//! paint ──▶ Stale, or host placement ≠ cache? ──▶ recompute
//!       └─▶ otherwise reuse the cached placement
//! ```
//!
//! The controller starts [`CacheState::Stale`]. Each recompute reads the
//! content size fresh from the host, so content swaps are picked up even
//! when the bounds did not change. [`RecomputeReason`] and
//! [`CropController::debug_info`] explain what happened last.
//!
//! ## Diagnostics
//!
//! Recomputes are reported through the [`log`] facade: `trace` for every
//! recompute, `debug` when the paint-time check heals a mismatch, and `warn`
//! when a config value is replaced by the default. Install any `log`
//! backend to see them.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo` and `edgecrop_fit`.
//! - `serde`: `Serialize`/`Deserialize` for [`CropConfig`].
//!
//! This crate is `no_std`.
//!
//! [`AnchorMode::BottomCrop`]: edgecrop_fit::AnchorMode::BottomCrop

#![no_std]

mod config;
mod controller;
mod host;
mod reason;

pub use config::CropConfig;
pub use controller::{CacheState, CropController, CropControllerDebugInfo};
pub use host::{ContentSource, Paintable, Placement};
pub use reason::RecomputeReason;
