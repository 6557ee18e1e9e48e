//! Tap-to-place: turn one tap into either nothing or one irreversible placement.

use crate::assets::AssetStatus;
use crate::error::PlacementError;
use crate::runtime::{Anchor, ArSession};
use crate::scene::{anchor_scene_group, build_scene_group, SceneGraph, SceneGroup};
use crate::tracking::{HitCandidate, Surface, TapPoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    AssetsNotReady,
    AlreadyPlaced,
    NotTracking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed(SceneGroup),
    NoQualifyingHit,
    Skipped(SkipReason),
}

/// Set once on the first successful placement and never reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PlacementState {
    #[default]
    NotPlaced,
    Placed {
        anchor: Anchor,
        group: SceneGroup,
    },
}

impl PlacementState {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementState::Placed { .. })
    }
}

/// First candidate, in provider order, that lies inside a tracked surface polygon.
///
/// Deliberately first match rather than best match: with a nearest-first
/// provider this is the closest valid surface.
pub fn select_hit<S: Surface>(candidates: &[HitCandidate<S>]) -> Option<&HitCandidate<S>> {
    candidates.iter().find(|hit| hit.qualifies())
}

#[derive(Debug, Default)]
pub struct PlacementController {
    state: PlacementState,
}

impl PlacementController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    pub fn is_placed(&self) -> bool {
        self.state.is_placed()
    }

    /// Check the gates in order, then ray-cast and place at the first qualifying hit.
    ///
    /// At most one anchor is created per call. An anchor failure leaves both
    /// `scene` and the placement state untouched so a later tap may succeed.
    pub fn handle_tap<S: ArSession>(
        &mut self,
        tap: TapPoint,
        assets: &AssetStatus,
        session: &mut S,
        scene: &mut SceneGraph,
    ) -> Result<PlacementOutcome, PlacementError> {
        let Some(asset_set) = assets.assets() else {
            log::debug!("tap at {tap} ignored: assets not ready");
            return Ok(PlacementOutcome::Skipped(SkipReason::AssetsNotReady));
        };
        if self.state.is_placed() {
            log::debug!("tap at {tap} ignored: group already placed");
            return Ok(PlacementOutcome::Skipped(SkipReason::AlreadyPlaced));
        }
        let tracking = session.tracking_state();
        if !tracking.is_tracking() {
            log::debug!("tap at {tap} ignored: camera {tracking:?}");
            return Ok(PlacementOutcome::Skipped(SkipReason::NotTracking));
        }

        let hits = session.hit_test(tap);
        let Some(hit_pose) = select_hit(&hits).map(|hit| hit.hit_pose) else {
            log::debug!("tap at {tap}: none of {} hits on a surface polygon", hits.len());
            return Ok(PlacementOutcome::NoQualifyingHit);
        };

        // Nothing reaches the root until both the group and the anchor exist.
        let mark = scene.len();
        let group = build_scene_group(scene, asset_set)?;
        let anchor = match session.create_anchor(hit_pose) {
            Ok(anchor) => anchor,
            Err(err) => {
                log::warn!("anchor creation at {:?} failed: {err}", hit_pose.position);
                scene.truncate(mark);
                return Err(err.into());
            }
        };
        if let Err(err) = anchor_scene_group(scene, &group, anchor.clone()) {
            scene.truncate(mark);
            return Err(err.into());
        }
        log::info!(
            "placed group on anchor {:?} at {:?}",
            anchor.id,
            anchor.pose.position
        );
        self.state = PlacementState::Placed { anchor, group };
        Ok(PlacementOutcome::Placed(group))
    }
}
