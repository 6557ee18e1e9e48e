use thiserror::Error;

/// A renderable failed to load. Fatal for the screen: placement never becomes possible.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("failed to load renderable `{source_id}`: {reason}")]
pub struct AssetError {
    pub source_id: String,
    pub reason: String,
}

impl AssetError {
    pub fn new(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("anchor limit reached")]
    ResourceExhausted,
    #[error("session is not tracking")]
    NotTracking,
    #[error("anchor creation failed: {0}")]
    Runtime(String),
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene node {0}")]
    UnknownNode(usize),
    #[error("attaching node {child} under {parent} would create a cycle")]
    Cycle { parent: usize, child: usize },
}

/// Failure of a single tap attempt. The screen stays usable and the user may tap again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("anchor creation failed")]
    AnchorCreationFailed(#[from] AnchorError),
    #[error(transparent)]
    Scene(#[from] SceneError),
}
