//! Seams to the external AR runtime and asset pipeline.
//!
//! Nothing in here tracks the camera, detects surfaces or decodes models. Hosts
//! implement these traits on top of whatever engine they embed.

use futures::future::LocalBoxFuture;

use crate::error::{AnchorError, AssetError};
use crate::pose::Pose;
use crate::tracking::{HitCandidate, Surface, TapPoint, TrackingState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

/// Fixed pose bound to the real-world frame. Created once per successful placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    pub id: AnchorId,
    pub pose: Pose,
}

/// A loaded, drawable asset. Opaque: only the renderer interprets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renderable {
    pub id: u64,
    pub source: String,
}

/// The current frame of an AR session.
pub trait ArSession {
    type Surface: Surface;

    /// Camera tracking state for this frame.
    fn tracking_state(&self) -> TrackingState;

    /// Ray-cast from the camera through `tap`.
    ///
    /// Callers rely on the result being ordered nearest hit first; this crate
    /// cannot verify that and does not re-sort.
    fn hit_test(&self, tap: TapPoint) -> Vec<HitCandidate<Self::Surface>>;

    fn create_anchor(&mut self, pose: Pose) -> Result<Anchor, AnchorError>;

    /// Surfaces whose state changed since the previous frame.
    fn updated_surfaces(&self) -> Vec<Self::Surface>;
}

/// Asynchronous asset source. Futures run on the UI thread, so they need not be `Send`.
pub trait RenderableLoader {
    fn load<'a>(&'a self, source: &'a str) -> LocalBoxFuture<'a, Result<Renderable, AssetError>>;
}
