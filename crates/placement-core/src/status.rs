//! "Finding a surface" indicator: shown on resume, hidden once a surface tracks.

use crate::tracking::{Surface, TrackingState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceStatus {
    #[default]
    Hidden,
    Searching,
    Found,
}

#[derive(Debug, Default)]
pub struct SurfaceStatusNotifier {
    status: SurfaceStatus,
}

impl SurfaceStatusNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SurfaceStatus {
        self.status
    }

    pub fn is_message_visible(&self) -> bool {
        self.status == SurfaceStatus::Searching
    }

    /// Show the searching message. No-op while it is already showing.
    ///
    /// Showing again after a surface was found is allowed: a resumed session
    /// has to re-acquire its surfaces.
    pub fn show_finding_message(&mut self) {
        if self.status != SurfaceStatus::Searching {
            log::debug!("searching for surfaces");
            self.status = SurfaceStatus::Searching;
        }
    }

    /// Per-frame poll. Returns `true` on the single tick that latches "found".
    pub fn on_update<S: Surface>(&mut self, camera: TrackingState, updated: &[S]) -> bool {
        if self.status != SurfaceStatus::Searching || !camera.is_tracking() {
            return false;
        }
        if !updated.iter().any(|s| s.tracking_state().is_tracking()) {
            return false;
        }
        log::info!("surface found");
        self.status = SurfaceStatus::Found;
        true
    }
}
