//! Tap-to-place for AR sessions: pick the first tapped point that lies on a
//! tracked surface, anchor it, and hang a fixed three-model group off the anchor.
//!
//! Camera tracking, surface detection, rendering and asset decoding belong to
//! the host runtime and are reached through the traits in [`runtime`].

pub mod assets;
pub mod constants;
pub mod error;
pub mod placement;
pub mod pose;
pub mod runtime;
pub mod scene;
pub mod screen;
pub mod status;
pub mod tracking;

pub use assets::*;
pub use error::*;
pub use placement::*;
pub use pose::Pose;
pub use runtime::*;
pub use scene::*;
pub use screen::*;
pub use status::*;
pub use tracking::*;
