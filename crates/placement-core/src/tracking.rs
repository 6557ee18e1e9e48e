//! Trackables and hit-test results reported by the AR runtime.

use glam::Vec2;

use crate::pose::Pose;

/// Screen-space tap position in pixels.
pub type TapPoint = Vec2;

/// Tracking state shared by the camera and by individual trackables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    NotTracking,
    Tracking,
    Stopped,
}

impl TrackingState {
    #[inline]
    pub fn is_tracking(self) -> bool {
        self == TrackingState::Tracking
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackableKind {
    Surface,
    Point,
    Other,
}

/// A detected planar region with a tracked polygon boundary. Read-only here.
pub trait Surface {
    fn tracking_state(&self) -> TrackingState;

    /// Whether `pose`, projected onto the surface, falls inside its polygon.
    fn is_pose_in_polygon(&self, pose: &Pose) -> bool;
}

/// The trackable a hit landed on. Only surfaces carry a handle because nothing
/// else can be placed on.
#[derive(Clone, Debug)]
pub enum Trackable<S> {
    Surface(S),
    Point,
    Other,
}

impl<S> Trackable<S> {
    pub fn kind(&self) -> TrackableKind {
        match self {
            Trackable::Surface(_) => TrackableKind::Surface,
            Trackable::Point => TrackableKind::Point,
            Trackable::Other => TrackableKind::Other,
        }
    }

    pub fn as_surface(&self) -> Option<&S> {
        match self {
            Trackable::Surface(s) => Some(s),
            _ => None,
        }
    }
}

/// One ray-cast intersection, valid for the tap that produced it.
#[derive(Clone, Debug)]
pub struct HitCandidate<S> {
    pub trackable: Trackable<S>,
    pub hit_pose: Pose,
}

impl<S> HitCandidate<S> {
    pub fn new(trackable: Trackable<S>, hit_pose: Pose) -> Self {
        Self {
            trackable,
            hit_pose,
        }
    }

    #[inline]
    pub fn kind(&self) -> TrackableKind {
        self.trackable.kind()
    }
}

impl<S: Surface> HitCandidate<S> {
    /// A hit qualifies for placement when it lies on a surface and inside
    /// that surface's polygon.
    pub fn qualifies(&self) -> bool {
        self.trackable
            .as_surface()
            .is_some_and(|surface| surface.is_pose_in_polygon(&self.hit_pose))
    }
}
