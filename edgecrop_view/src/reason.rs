// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability for recomputes.
//!
//! The controller records one [`RecomputeReason`] per recompute. It answers
//! "why did this frame re-fit the image?" without keeping a history.

use core::fmt;

/// Why the cached placement was (or will be) recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecomputeReason {
    /// Nothing has been computed yet.
    Uninitialized,
    /// The host reported new layout bounds.
    BoundsChanged,
    /// The anchor mode changed.
    AnchorChanged,
    /// The embedder invalidated the cache explicitly.
    Invalidated,
    /// At paint time the host was not rendering with the cached placement.
    ///
    /// This is the self-healing path for invalidations that never reached
    /// the controller, such as content swapped without a bounds change.
    PlacementMismatch,
}

impl fmt::Display for RecomputeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uninitialized => "uninitialized",
            Self::BoundsChanged => "bounds changed",
            Self::AnchorChanged => "anchor changed",
            Self::Invalidated => "invalidated",
            Self::PlacementMismatch => "placement mismatch",
        })
    }
}
