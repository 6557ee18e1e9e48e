//! Host-facing screen state: lifecycle, touch routing and user messages
//! wrapped around the placement controller.

use crate::assets::{load_assets, AssetSet, AssetSources, AssetStatus};
use crate::constants::{ASSET_LOAD_FAILED_MESSAGE, FINDING_SURFACE_MESSAGE, PLACEMENT_FAILED_MESSAGE};
use crate::error::{AssetError, PlacementError};
use crate::placement::{PlacementController, PlacementOutcome, PlacementState};
use crate::runtime::{ArSession, RenderableLoader};
use crate::scene::SceneGraph;
use crate::status::SurfaceStatusNotifier;
use crate::tracking::TapPoint;

/// Error surfaced to the user. Loading failures are permanent, placement failures are not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserMessage {
    AssetLoadFailed(AssetError),
    PlacementFailed(PlacementError),
}

impl UserMessage {
    pub fn text(&self) -> &'static str {
        match self {
            UserMessage::AssetLoadFailed(_) => ASSET_LOAD_FAILED_MESSAGE,
            UserMessage::PlacementFailed(_) => PLACEMENT_FAILED_MESSAGE,
        }
    }
}

#[derive(Debug, Default)]
pub struct PlacementScreen {
    sources: AssetSources,
    assets: AssetStatus,
    controller: PlacementController,
    scene: SceneGraph,
    status: SurfaceStatusNotifier,
    message: Option<UserMessage>,
    resumed: bool,
}

impl PlacementScreen {
    pub fn new(sources: AssetSources) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    pub fn sources(&self) -> &AssetSources {
        &self.sources
    }

    pub fn assets(&self) -> &AssetStatus {
        &self.assets
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn placement(&self) -> &PlacementState {
        self.controller.state()
    }

    pub fn message(&self) -> Option<&UserMessage> {
        self.message.as_ref()
    }

    /// Text of the status banner, if one is showing.
    pub fn banner(&self) -> Option<&'static str> {
        match &self.message {
            Some(msg) => Some(msg.text()),
            None => self
                .status
                .is_message_visible()
                .then_some(FINDING_SURFACE_MESSAGE),
        }
    }

    /// Load the three renderables and record the outcome.
    ///
    /// Hosts that drive the loads themselves can call
    /// [`PlacementScreen::on_assets_loaded`] directly instead.
    pub async fn begin_loading<L: RenderableLoader + ?Sized>(&mut self, loader: &L) {
        let sources = self.sources.clone();
        let result = load_assets(loader, &sources).await;
        self.on_assets_loaded(result);
    }

    /// Completion of the joined asset loads. Only the first result is kept.
    pub fn on_assets_loaded(&mut self, result: Result<AssetSet, AssetError>) {
        if !matches!(self.assets, AssetStatus::Loading) {
            log::warn!("ignoring duplicate asset load completion");
            return;
        }
        if let Err(err) = &result {
            log::error!("{ASSET_LOAD_FAILED_MESSAGE}: {err}");
            self.message = Some(UserMessage::AssetLoadFailed(err.clone()));
        }
        self.assets = AssetStatus::from(result);
    }

    /// `session_present` is false when the runtime could not create a session yet.
    pub fn on_resume(&mut self, session_present: bool) {
        self.resumed = true;
        if session_present {
            self.status.show_finding_message();
        }
    }

    pub fn on_pause(&mut self) {
        self.resumed = false;
    }

    /// Per-frame tick. Returns `true` on the frame a surface is first found.
    pub fn on_frame<S: ArSession>(&mut self, frame: Option<&S>) -> bool {
        let Some(frame) = frame else {
            return false;
        };
        if !self.resumed {
            return false;
        }
        self.status
            .on_update(frame.tracking_state(), &frame.updated_surfaces())
    }

    /// Until the group is placed every touch is claimed for placement;
    /// afterwards touches propagate to the scene.
    pub fn consumes_touch(&self) -> bool {
        !self.controller.is_placed()
    }

    /// Route a tap to the controller. `None` means the tap was not handled
    /// here: it propagates to the scene, the screen is paused, there is no
    /// frame yet, or placement failed (see [`PlacementScreen::message`]).
    pub fn on_tap<S: ArSession>(
        &mut self,
        tap: TapPoint,
        frame: Option<&mut S>,
    ) -> Option<PlacementOutcome> {
        if !self.resumed || !self.consumes_touch() {
            return None;
        }
        let frame = frame?;
        match self
            .controller
            .handle_tap(tap, &self.assets, frame, &mut self.scene)
        {
            Ok(outcome) => {
                // A failed attempt is stale once another tap is handled; load failures stay.
                if matches!(self.message, Some(UserMessage::PlacementFailed(_))) {
                    self.message = None;
                }
                Some(outcome)
            }
            Err(err) => {
                log::error!("placement failed: {err}");
                self.message = Some(UserMessage::PlacementFailed(err));
                None
            }
        }
    }
}
