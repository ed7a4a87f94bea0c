// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached placement plus the policy deciding when to recompute it.

use edgecrop_fit::{AnchorMode, ViewportExtent, compute_crop};

use crate::config::CropConfig;
use crate::host::{ContentSource, Paintable, Placement};
use crate::reason::RecomputeReason;

/// Whether the cached placement can be painted as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheState {
    /// The cached placement matches the current viewport, anchor and content.
    Fresh,
    /// The placement must be recomputed before the next paint.
    Stale,
}

/// Keeps an edge-anchored crop placement in sync with its host.
///
/// `CropController` reacts to the host's lifecycle events:
///
/// - [`on_bounds_changed`](Self::on_bounds_changed): the layout bounds moved;
///   recompute immediately.
/// - [`on_paint`](Self::on_paint): a frame is about to be drawn; recompute
///   only if the cache is stale or the host no longer holds the cached
///   placement.
///
/// Anchor changes and explicit [`invalidate`](Self::invalidate) calls mark
/// the cache stale so that the next paint picks them up.
///
/// All calls are expected on the host's UI thread; nothing here blocks or
/// locks.
///
/// # Example
///
/// ```
/// use edgecrop_fit::{AnchorMode, ContentExtent, CropTransform, ViewportExtent};
/// use edgecrop_view::{CacheState, ContentSource, CropController, Paintable, Placement};
/// use kurbo::Rect;
///
/// #[derive(Default)]
/// struct Host {
///     applied: Option<Placement>,
/// }
///
/// impl ContentSource for Host {
///     fn intrinsic_extent(&self) -> Option<ContentExtent> {
///         Some(ContentExtent::new(200, 100))
///     }
/// }
///
/// impl Paintable for Host {
///     fn applied_placement(&self) -> Option<Placement> {
///         self.applied
///     }
///     fn apply_transform(&mut self, transform: CropTransform, content_bounds: Rect) {
///         self.applied = Some(Placement::Transformed { transform, content_bounds });
///     }
///     fn apply_fill_bounds(&mut self, bounds: Rect) {
///         self.applied = Some(Placement::Filled { bounds });
///     }
/// }
///
/// let mut host = Host::default();
/// let mut controller = CropController::with_anchor(AnchorMode::RightCrop);
/// assert_eq!(controller.state(), CacheState::Stale);
///
/// controller.on_bounds_changed(ViewportExtent::new(100, 100), &mut host);
/// assert_eq!(controller.state(), CacheState::Fresh);
///
/// let placement = controller.on_paint(&mut host).unwrap();
/// assert_eq!(placement.transform(), Some(CropTransform::new(1.0, -100.0, 0.0)));
/// ```
#[derive(Clone, Debug)]
pub struct CropController {
    anchor: AnchorMode,
    viewport: ViewportExtent,
    placement: Option<Placement>,
    /// Why the cache is stale; `None` means fresh.
    pending: Option<RecomputeReason>,
    last_reason: Option<RecomputeReason>,
    revision: u64,
}

impl Default for CropController {
    fn default() -> Self {
        Self::new(CropConfig::default())
    }
}

impl CropController {
    /// Creates a stale controller from a construction-time config.
    ///
    /// The viewport starts empty until the first
    /// [`on_bounds_changed`](Self::on_bounds_changed).
    #[must_use]
    pub fn new(config: CropConfig) -> Self {
        Self {
            anchor: config.anchor,
            viewport: ViewportExtent::ZERO,
            placement: None,
            pending: Some(RecomputeReason::Uninitialized),
            last_reason: None,
            revision: 0,
        }
    }

    /// Creates a stale controller with the given anchor mode.
    #[must_use]
    pub fn with_anchor(anchor: AnchorMode) -> Self {
        Self::new(CropConfig::new(anchor))
    }

    /// Returns the current anchor mode.
    #[must_use]
    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor
    }

    /// Sets the anchor mode.
    ///
    /// Returns `true` if the mode changed, in which case the cache is now
    /// stale and the next paint recomputes.
    pub fn set_anchor_mode(&mut self, anchor: AnchorMode) -> bool {
        if self.anchor == anchor {
            return false;
        }
        self.anchor = anchor;
        self.mark_stale(RecomputeReason::AnchorChanged);
        true
    }

    /// Returns the last viewport reported by the host.
    #[must_use]
    pub fn viewport(&self) -> ViewportExtent {
        self.viewport
    }

    /// Returns whether the cached placement is usable.
    #[must_use]
    pub fn state(&self) -> CacheState {
        if self.pending.is_some() {
            CacheState::Stale
        } else {
            CacheState::Fresh
        }
    }

    /// Returns the cached placement, if any.
    ///
    /// A stale controller may still return the previous placement.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Returns why the most recent recompute happened.
    #[must_use]
    pub fn last_reason(&self) -> Option<RecomputeReason> {
        self.last_reason
    }

    /// Returns the number of placements published so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Marks the cache stale without any other change.
    ///
    /// Use this when the content is swapped and the host knows about it; the
    /// paint-time placement check catches the cases it does not.
    pub fn invalidate(&mut self) {
        self.mark_stale(RecomputeReason::Invalidated);
    }

    /// Handles a layout bounds change.
    ///
    /// Stores `viewport`, marks the cache stale and recomputes right away, so
    /// the placement is ready before the paint that usually follows.
    pub fn on_bounds_changed<H>(&mut self, viewport: ViewportExtent, host: &mut H)
    where
        H: ContentSource + Paintable + ?Sized,
    {
        self.viewport = viewport;
        self.mark_stale(RecomputeReason::BoundsChanged);
        let _ = self.recompute(host);
    }

    /// Handles a paint request and returns the placement to draw with.
    ///
    /// Recomputes first if the cache is stale, or if the host is no longer
    /// rendering with the cached placement. Returns `None` while the host has
    /// no content.
    pub fn on_paint<H>(&mut self, host: &mut H) -> Option<Placement>
    where
        H: ContentSource + Paintable + ?Sized,
    {
        if self.pending.is_none() {
            match self.placement {
                Some(cached) if host.applied_placement() == Some(cached) => return Some(cached),
                _ => {
                    log::debug!("host placement no longer matches the cache; recomputing");
                    self.mark_stale(RecomputeReason::PlacementMismatch);
                }
            }
        }
        self.recompute(host)
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CropControllerDebugInfo {
        CropControllerDebugInfo {
            anchor: self.anchor,
            viewport: self.viewport,
            state: self.state(),
            placement: self.placement,
            pending_reason: self.pending,
            last_reason: self.last_reason,
            revision: self.revision,
        }
    }

    fn mark_stale(&mut self, reason: RecomputeReason) {
        self.pending = Some(reason);
    }

    fn recompute<H>(&mut self, host: &mut H) -> Option<Placement>
    where
        H: ContentSource + Paintable + ?Sized,
    {
        let reason = self.pending.unwrap_or(RecomputeReason::Invalidated);
        let Some(content) = host.intrinsic_extent() else {
            log::trace!("no content to place ({reason}); staying stale");
            self.placement = None;
            return None;
        };

        let fit = compute_crop(self.viewport, content, self.anchor);
        let placement = Placement::from_fit(fit, self.viewport, content);
        match placement {
            Placement::Transformed {
                transform,
                content_bounds,
            } => host.apply_transform(transform, content_bounds),
            Placement::Filled { bounds } => host.apply_fill_bounds(bounds),
        }

        self.placement = Some(placement);
        self.pending = None;
        self.last_reason = Some(reason);
        self.revision += 1;
        log::trace!(
            "recomputed placement #{} ({reason}): viewport {}x{}, content {}x{}, anchor {}: {placement:?}",
            self.revision,
            self.viewport.width,
            self.viewport.height,
            content.intrinsic_width,
            content.intrinsic_height,
            self.anchor,
        );
        Some(placement)
    }
}

/// Debug snapshot of a [`CropController`] state.
#[derive(Clone, Copy, Debug)]
pub struct CropControllerDebugInfo {
    /// Current anchor mode.
    pub anchor: AnchorMode,
    /// Last viewport reported by the host.
    pub viewport: ViewportExtent,
    /// Whether the cached placement is usable.
    pub state: CacheState,
    /// Cached placement, if any.
    pub placement: Option<Placement>,
    /// Why the cache is stale, if it is.
    pub pending_reason: Option<RecomputeReason>,
    /// Why the most recent recompute happened.
    pub last_reason: Option<RecomputeReason>,
    /// Number of placements published so far.
    pub revision: u64,
}
