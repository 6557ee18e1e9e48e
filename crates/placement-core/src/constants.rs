use glam::Vec3;

// Fixed layout of the placed group, in node-local units.
// Axes: x = right, y = height, z = towards the viewer.

// Scene layout
pub const BASE_OFFSET: [f32; 3] = [0.0, 0.0, 0.0]; // pivot under the anchor root
pub const PRIMARY_OFFSET: [f32; 3] = [0.0, 0.0, -2.0]; // primary visual, pushed away from the viewer
pub const SECONDARY_RIGHT_OFFSET: [f32; 3] = [1.0, 0.0, 0.0]; // relative to the primary
pub const SECONDARY_LEFT_OFFSET: [f32; 3] = [-1.0, 0.0, 0.0]; // relative to the primary

// Number of nodes carrying a renderable in a placed group
pub const VISUAL_NODE_COUNT: usize = 3;

// Default asset sources, opaque to this crate
pub const PRIMARY_ASSET: &str = "b1s.sfb";
pub const SECONDARY_RIGHT_ASSET: &str = "sb1s.sfb";
pub const SECONDARY_LEFT_ASSET: &str = "LampPost.sfb";

// Status chrome
pub const FINDING_SURFACE_MESSAGE: &str = "Searching for surfaces...";
pub const ASSET_LOAD_FAILED_MESSAGE: &str = "Unable to load renderable";
pub const PLACEMENT_FAILED_MESSAGE: &str = "Unable to anchor here, tap again";

#[inline]
pub fn offset_vec3(offset: [f32; 3]) -> Vec3 {
    Vec3::new(offset[0], offset[1], offset[2])
}
