use std::cell::Cell;

use anyhow::{bail, Context};
use futures::future::{self, LocalBoxFuture};
use glam::{Quat, Vec2, Vec3};

use placement_core::{
    group_anchor_pose, Anchor, AnchorError, AnchorId, ArSession, AssetError,
    AssetSources, HitCandidate, PlacementOutcome, PlacementScreen, Pose, Renderable,
    RenderableLoader, Surface, TapPoint, Trackable, TrackingState,
};

// Scripted session timeline, in frames
const CAMERA_TRACKING_FROM: u32 = 3;
const SURFACE_TRACKING_FROM: u32 = 6;
const ANCHOR_POOL_RECOVERS_AT: u32 = 9;
const TOTAL_FRAMES: u32 = 12;

// Floor plane one metre below the camera, 4 m x 4 m centred ahead of it
const FLOOR_Y: f32 = -1.0;
const FLOOR_HALF_EXTENT: f32 = 2.0;
const FLOOR_CENTER_Z: f32 = -2.0;

#[derive(Clone, Debug)]
struct SimPlane {
    state: TrackingState,
}

impl Surface for SimPlane {
    fn tracking_state(&self) -> TrackingState {
        self.state
    }

    fn is_pose_in_polygon(&self, pose: &Pose) -> bool {
        let p = pose.position;
        p.x.abs() <= FLOOR_HALF_EXTENT && (p.z - FLOOR_CENTER_Z).abs() <= FLOOR_HALF_EXTENT
    }
}

/// Headless stand-in for a device session: a camera at the origin looking down -Z
/// over a single floor plane.
struct SimSession {
    frame: u32,
    viewport: Vec2,
    next_anchor: u64,
}

impl SimSession {
    fn new(viewport: Vec2) -> Self {
        Self {
            frame: 0,
            viewport,
            next_anchor: 1,
        }
    }

    fn advance(&mut self) {
        self.frame += 1;
    }

    fn plane_state(&self) -> TrackingState {
        if self.frame >= SURFACE_TRACKING_FROM {
            TrackingState::Tracking
        } else {
            TrackingState::NotTracking
        }
    }

    /// Ray through `tap` on a 90 degree frustum.
    fn ray(&self, tap: TapPoint) -> Vec3 {
        let ndc = (tap / self.viewport) * 2.0 - Vec2::ONE;
        let aspect = self.viewport.x / self.viewport.y;
        Vec3::new(ndc.x * aspect, -ndc.y, -1.0).normalize()
    }
}

impl ArSession for SimSession {
    type Surface = SimPlane;

    fn tracking_state(&self) -> TrackingState {
        if self.frame >= CAMERA_TRACKING_FROM {
            TrackingState::Tracking
        } else {
            TrackingState::NotTracking
        }
    }

    fn hit_test(&self, tap: TapPoint) -> Vec<HitCandidate<SimPlane>> {
        let dir = self.ray(tap);
        let mut hits = Vec::new();
        // A feature point floating half a metre ahead always comes first
        hits.push(HitCandidate::new(
            Trackable::Point,
            Pose::from_translation(dir * 0.5),
        ));
        if dir.y < -1e-4 {
            let t = FLOOR_Y / dir.y;
            hits.push(HitCandidate::new(
                Trackable::Surface(SimPlane {
                    state: self.plane_state(),
                }),
                Pose::new(dir * t, Quat::IDENTITY),
            ));
        }
        hits
    }

    fn create_anchor(&mut self, pose: Pose) -> Result<Anchor, AnchorError> {
        if !self.tracking_state().is_tracking() {
            return Err(AnchorError::NotTracking);
        }
        if self.frame < ANCHOR_POOL_RECOVERS_AT {
            return Err(AnchorError::ResourceExhausted);
        }
        let id = AnchorId(self.next_anchor);
        self.next_anchor += 1;
        Ok(Anchor { id, pose })
    }

    fn updated_surfaces(&self) -> Vec<SimPlane> {
        if self.frame >= SURFACE_TRACKING_FROM - 1 {
            vec![SimPlane {
                state: self.plane_state(),
            }]
        } else {
            Vec::new()
        }
    }
}

#[derive(Default)]
struct SimLoader {
    next_id: Cell<u64>,
}

impl RenderableLoader for SimLoader {
    fn load<'a>(&'a self, source: &'a str) -> LocalBoxFuture<'a, Result<Renderable, AssetError>> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let result = if source.ends_with(".sfb") {
            Ok(Renderable {
                id,
                source: source.to_string(),
            })
        } else {
            Err(AssetError::new(source, "unsupported asset format"))
        };
        Box::pin(future::ready(result))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("placement-native starting");

    let viewport = Vec2::new(1080.0, 1920.0);
    let mut session = SimSession::new(viewport);
    let mut screen = PlacementScreen::new(AssetSources::default());

    screen.on_resume(true);
    if let Some(banner) = screen.banner() {
        log::info!("[banner] {banner}");
    }

    // Taps before loading completes are dropped
    let early = screen.on_tap(viewport * 0.5, Some(&mut session));
    log::info!("tap before load: {early:?}");

    let loader = SimLoader::default();
    pollster::block_on(screen.begin_loading(&loader));
    if let Some(msg) = screen.message() {
        bail!("{}: {msg:?}", msg.text());
    }

    // Tap the lower middle of the screen, where the floor is
    let tap = Vec2::new(viewport.x * 0.5, viewport.y * 0.8);
    while session.frame < TOTAL_FRAMES {
        session.advance();
        if screen.on_frame(Some(&session)) {
            log::info!("[frame {}] surface found, banner hidden", session.frame);
        }
        if !screen.consumes_touch() {
            continue;
        }
        let outcome = screen.on_tap(tap, Some(&mut session));
        match (outcome, screen.message()) {
            (Some(PlacementOutcome::Placed(group)), _) => {
                let pose = group_anchor_pose(screen.scene(), &group)
                    .context("placed group has no anchor")?;
                log::info!(
                    "[frame {}] placed at {:?} with {} nodes in scene",
                    session.frame,
                    pose.position,
                    screen.scene().len()
                );
                for id in group.visuals() {
                    let world = screen.scene().world_position(id)?;
                    log::info!("  visual {:?} at {world:?}", id);
                }
            }
            (Some(other), _) => log::info!("[frame {}] tap: {other:?}", session.frame),
            (None, Some(msg)) => log::warn!("[frame {}] {}", session.frame, msg.text()),
            (None, None) => {}
        }
    }

    screen.on_pause();
    if !screen.placement().is_placed() {
        bail!("no placement after {TOTAL_FRAMES} frames");
    }
    log::info!("placement-native done");
    Ok(())
}
