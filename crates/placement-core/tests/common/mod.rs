// Scripted stand-ins for the AR runtime and asset pipeline.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashSet;

use futures::future::{self, LocalBoxFuture};
use glam::Vec3;
use placement_core::*;

#[derive(Clone, Debug)]
pub struct FakeSurface {
    pub state: TrackingState,
    pub in_polygon: bool,
}

impl FakeSurface {
    pub fn tracking(in_polygon: bool) -> Self {
        Self {
            state: TrackingState::Tracking,
            in_polygon,
        }
    }
}

impl Surface for FakeSurface {
    fn tracking_state(&self) -> TrackingState {
        self.state
    }

    fn is_pose_in_polygon(&self, _pose: &Pose) -> bool {
        self.in_polygon
    }
}

pub fn hit_at(trackable: Trackable<FakeSurface>, x: f32) -> HitCandidate<FakeSurface> {
    HitCandidate::new(trackable, Pose::from_translation(Vec3::new(x, 0.0, -1.0)))
}

pub fn surface_hit(in_polygon: bool, x: f32) -> HitCandidate<FakeSurface> {
    hit_at(Trackable::Surface(FakeSurface::tracking(in_polygon)), x)
}

pub struct FakeSession {
    pub tracking: TrackingState,
    pub hits: Vec<HitCandidate<FakeSurface>>,
    pub surfaces: Vec<FakeSurface>,
    pub anchor_failure: Option<AnchorError>,
    pub anchors_created: Vec<Anchor>,
    pub hit_tests: Cell<usize>,
}

impl FakeSession {
    pub fn tracking_with(hits: Vec<HitCandidate<FakeSurface>>) -> Self {
        Self {
            tracking: TrackingState::Tracking,
            hits,
            surfaces: Vec::new(),
            anchor_failure: None,
            anchors_created: Vec::new(),
            hit_tests: Cell::new(0),
        }
    }
}

impl ArSession for FakeSession {
    type Surface = FakeSurface;

    fn tracking_state(&self) -> TrackingState {
        self.tracking
    }

    fn hit_test(&self, _tap: TapPoint) -> Vec<HitCandidate<FakeSurface>> {
        self.hit_tests.set(self.hit_tests.get() + 1);
        self.hits.clone()
    }

    fn create_anchor(&mut self, pose: Pose) -> Result<Anchor, AnchorError> {
        if !self.tracking.is_tracking() {
            return Err(AnchorError::NotTracking);
        }
        if let Some(err) = &self.anchor_failure {
            return Err(err.clone());
        }
        let anchor = Anchor {
            id: AnchorId(self.anchors_created.len() as u64 + 1),
            pose,
        };
        self.anchors_created.push(anchor.clone());
        Ok(anchor)
    }

    fn updated_surfaces(&self) -> Vec<FakeSurface> {
        self.surfaces.clone()
    }
}

/// Resolves immediately; sources listed in `failing` produce an error.
#[derive(Default)]
pub struct FakeLoader {
    pub failing: HashSet<String>,
    pub loads: Cell<usize>,
}

impl RenderableLoader for FakeLoader {
    fn load<'a>(&'a self, source: &'a str) -> LocalBoxFuture<'a, Result<Renderable, AssetError>> {
        self.loads.set(self.loads.get() + 1);
        let result = if self.failing.contains(source) {
            Err(AssetError::new(source, "not found"))
        } else {
            Ok(Renderable {
                id: self.loads.get() as u64,
                source: source.to_string(),
            })
        };
        Box::pin(future::ready(result))
    }
}

pub fn ready_assets() -> AssetStatus {
    let loader = FakeLoader::default();
    AssetStatus::from(pollster::block_on(load_assets(
        &loader,
        &AssetSources::default(),
    )))
}
