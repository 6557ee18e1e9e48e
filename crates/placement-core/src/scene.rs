//! Minimal local scene graph: an arena of nodes under a single root.
//!
//! Nodes only carry a local translation. Orientation comes from the anchor a
//! subtree hangs off, which is all the placed group needs.

use glam::Vec3;
use smallvec::SmallVec;

use crate::assets::AssetSet;
use crate::constants::{
    offset_vec3, BASE_OFFSET, PRIMARY_OFFSET, SECONDARY_LEFT_OFFSET, SECONDARY_RIGHT_OFFSET,
    VISUAL_NODE_COUNT,
};
use crate::error::SceneError;
use crate::pose::Pose;
use crate::runtime::{Anchor, Renderable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    pub local_position: Vec3,
    pub renderable: Option<Renderable>,
    pub anchor: Option<Anchor>,
}

#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Number of nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every node added after `len` (as returned by [`SceneGraph::len`]).
    ///
    /// Only valid while those nodes are detached from the surviving tree.
    pub fn truncate(&mut self, len: usize) {
        let keep = len + 1;
        if keep >= self.nodes.len() {
            return;
        }
        self.nodes.truncate(keep);
        for node in &mut self.nodes {
            node.children.retain(|c| c.0 < keep);
            if node.parent.is_some_and(|p| p.0 >= keep) {
                node.parent = None;
            }
        }
    }

    /// Add a detached node. It is not reachable from the root until attached.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: SmallVec::new(),
            ..node
        });
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Attach `child` under `parent`, detaching it from any previous parent.
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.check(parent)?;
        self.check(child)?;
        if child == Self::ROOT || self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::Cycle {
                parent: parent.0,
                child: child.0,
            });
        }
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// World-space position: local translations summed up to the nearest
    /// anchored ancestor, then mapped through that anchor's pose.
    pub fn world_position(&self, id: NodeId) -> Result<Vec3, SceneError> {
        self.check(id)?;
        let mut local = Vec3::ZERO;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current.0];
            local += node.local_position;
            if let Some(anchor) = &node.anchor {
                return Ok(anchor.pose.transform_point(local));
            }
            cursor = node.parent;
        }
        Ok(local)
    }

    /// Every node carrying a renderable in the subtree rooted at `id`, depth first.
    pub fn visual_nodes(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            if node.renderable.is_some() {
                out.push(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    fn check(&self, id: NodeId) -> Result<(), SceneError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownNode(id.0))
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut cursor = Some(of);
        while let Some(current) = cursor {
            if current == candidate {
                return true;
            }
            cursor = self.nodes[current.0].parent;
        }
        false
    }
}

/// Handles to the nodes of a placed group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneGroup {
    /// Node holding the anchor, attached to the scene root.
    pub anchor_node: NodeId,
    pub base: NodeId,
    pub pivot: NodeId,
    pub primary: NodeId,
    pub secondary_right: NodeId,
    pub secondary_left: NodeId,
}

impl SceneGroup {
    pub fn visuals(&self) -> [NodeId; VISUAL_NODE_COUNT] {
        [self.primary, self.secondary_right, self.secondary_left]
    }
}

/// Build the fixed group hierarchy as detached nodes and return the base node.
///
/// ```text
/// base
/// └── pivot                 (0, 0, 0)
///     └── primary           (0, 0, -2)
///         ├── secondary R   (+1, 0, 0)
///         └── secondary L   (-1, 0, 0)
/// ```
fn build_group_nodes(scene: &mut SceneGraph, assets: &AssetSet) -> Result<[NodeId; 5], SceneError> {
    let base = scene.add_node(Node::default());
    let pivot = scene.add_node(Node {
        local_position: offset_vec3(BASE_OFFSET),
        ..Node::default()
    });
    scene.attach_child(base, pivot)?;

    let primary = scene.add_node(visual(&assets.primary, PRIMARY_OFFSET));
    scene.attach_child(pivot, primary)?;

    let right = scene.add_node(visual(&assets.secondary_right, SECONDARY_RIGHT_OFFSET));
    scene.attach_child(primary, right)?;

    let left = scene.add_node(visual(&assets.secondary_left, SECONDARY_LEFT_OFFSET));
    scene.attach_child(primary, left)?;

    Ok([base, pivot, primary, right, left])
}

fn visual(renderable: &Renderable, offset: [f32; 3]) -> Node {
    Node {
        local_position: offset_vec3(offset),
        renderable: Some(renderable.clone()),
        ..Node::default()
    }
}

/// Build the group under a fresh, still unanchored node, entirely detached
/// from the root. On error the scene is left as it was.
pub fn build_scene_group(scene: &mut SceneGraph, assets: &AssetSet) -> Result<SceneGroup, SceneError> {
    let mark = scene.len();
    let built = assemble_group(scene, assets);
    if built.is_err() {
        scene.truncate(mark);
    }
    built
}

fn assemble_group(scene: &mut SceneGraph, assets: &AssetSet) -> Result<SceneGroup, SceneError> {
    let anchor_node = scene.add_node(Node::default());
    let [base, pivot, primary, secondary_right, secondary_left] = build_group_nodes(scene, assets)?;
    scene.attach_child(anchor_node, base)?;
    Ok(SceneGroup {
        anchor_node,
        base,
        pivot,
        primary,
        secondary_right,
        secondary_left,
    })
}

/// Bind `anchor` to a group from [`build_scene_group`] and make it visible
/// under the scene root.
pub fn anchor_scene_group(
    scene: &mut SceneGraph,
    group: &SceneGroup,
    anchor: Anchor,
) -> Result<(), SceneError> {
    scene.attach_child(SceneGraph::ROOT, group.anchor_node)?;
    scene.nodes[group.anchor_node.0].anchor = Some(anchor);
    Ok(())
}

/// Pose of a group's anchor, if `group` was built in `scene`.
pub fn group_anchor_pose(scene: &SceneGraph, group: &SceneGroup) -> Option<Pose> {
    scene
        .node(group.anchor_node)
        .and_then(|n| n.anchor.as_ref())
        .map(|a| a.pose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_rejects_cycles() {
        let mut scene = SceneGraph::new();
        let a = scene.add_node(Node::default());
        let b = scene.add_node(Node::default());
        scene.attach_child(a, b).unwrap();
        assert_eq!(
            scene.attach_child(b, a),
            Err(SceneError::Cycle { parent: 2, child: 1 })
        );
        assert!(scene.attach_child(a, a).is_err());
        assert!(scene.attach_child(a, SceneGraph::ROOT).is_err());
    }

    #[test]
    fn reattach_moves_child() {
        let mut scene = SceneGraph::new();
        let a = scene.add_node(Node::default());
        let b = scene.add_node(Node::default());
        let c = scene.add_node(Node::default());
        scene.attach_child(a, c).unwrap();
        scene.attach_child(b, c).unwrap();
        assert!(scene.children(a).is_empty());
        assert_eq!(scene.children(b), &[c]);
        assert_eq!(scene.parent(c), Some(b));
    }

    #[test]
    fn len_excludes_root() {
        let mut scene = SceneGraph::new();
        assert_eq!(scene.len(), 0);
        assert!(scene.is_empty());
        scene.add_node(Node::default());
        assert_eq!(scene.len(), 1);
        assert!(!scene.is_empty());
    }

    #[test]
    fn truncate_drops_detached_group() {
        let mut scene = SceneGraph::new();
        let kept = scene.add_node(Node::default());
        scene.attach_child(SceneGraph::ROOT, kept).unwrap();
        let mark = scene.len();

        let a = scene.add_node(Node::default());
        let b = scene.add_node(Node::default());
        scene.attach_child(a, b).unwrap();
        scene.truncate(mark);

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.children(SceneGraph::ROOT), &[kept]);
        assert!(scene.node(a).is_none());
    }

    #[test]
    fn unknown_node_is_an_error() {
        let mut scene = SceneGraph::new();
        assert_eq!(
            scene.attach_child(SceneGraph::ROOT, NodeId(7)),
            Err(SceneError::UnknownNode(7))
        );
        assert!(scene.world_position(NodeId(7)).is_err());
    }
}
