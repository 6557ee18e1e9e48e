//! Loading the three renderables the placed group needs.

use crate::constants::{PRIMARY_ASSET, SECONDARY_LEFT_ASSET, SECONDARY_RIGHT_ASSET};
use crate::error::AssetError;
use crate::runtime::{Renderable, RenderableLoader};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetSources {
    pub primary: String,
    pub secondary_right: String,
    pub secondary_left: String,
}

impl Default for AssetSources {
    fn default() -> Self {
        Self {
            primary: PRIMARY_ASSET.to_string(),
            secondary_right: SECONDARY_RIGHT_ASSET.to_string(),
            secondary_left: SECONDARY_LEFT_ASSET.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetSet {
    pub primary: Renderable,
    pub secondary_right: Renderable,
    pub secondary_left: Renderable,
}

/// Load all three sources concurrently. Resolves once every load has
/// finished, or with the first error.
pub async fn load_assets<L: RenderableLoader + ?Sized>(
    loader: &L,
    sources: &AssetSources,
) -> Result<AssetSet, AssetError> {
    let (primary, secondary_right, secondary_left) = futures::try_join!(
        loader.load(&sources.primary),
        loader.load(&sources.secondary_right),
        loader.load(&sources.secondary_left),
    )?;
    log::debug!(
        "loaded renderables {} / {} / {}",
        primary.source,
        secondary_right.source,
        secondary_left.source
    );
    Ok(AssetSet {
        primary,
        secondary_right,
        secondary_left,
    })
}

/// Readiness gate for placement. Never leaves `Ready` or `Failed`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AssetStatus {
    #[default]
    Loading,
    Ready(AssetSet),
    Failed(AssetError),
}

impl AssetStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetStatus::Ready(_))
    }

    pub fn assets(&self) -> Option<&AssetSet> {
        match self {
            AssetStatus::Ready(set) => Some(set),
            _ => None,
        }
    }
}

impl From<Result<AssetSet, AssetError>> for AssetStatus {
    fn from(result: Result<AssetSet, AssetError>) -> Self {
        match result {
            Ok(set) => AssetStatus::Ready(set),
            Err(err) => AssetStatus::Failed(err),
        }
    }
}
