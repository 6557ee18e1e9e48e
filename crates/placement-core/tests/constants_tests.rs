// Layout constants and their relationships.

use placement_core::constants::*;

#[test]
fn secondaries_are_mirrored_about_the_primary() {
    let right = offset_vec3(SECONDARY_RIGHT_OFFSET);
    let left = offset_vec3(SECONDARY_LEFT_OFFSET);
    assert_eq!(right, -left);
    assert_eq!(right.y, 0.0);
    assert_eq!(right.z, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn primary_sits_away_from_the_viewer() {
    // -Z is away from the camera
    assert!(PRIMARY_OFFSET[2] < 0.0);
    assert_eq!(offset_vec3(BASE_OFFSET), glam::Vec3::ZERO);
}

#[test]
fn asset_sources_are_distinct() {
    assert_ne!(PRIMARY_ASSET, SECONDARY_RIGHT_ASSET);
    assert_ne!(PRIMARY_ASSET, SECONDARY_LEFT_ASSET);
    assert_ne!(SECONDARY_RIGHT_ASSET, SECONDARY_LEFT_ASSET);
}
