use crate::coords::Vec3;
use crate::paint::Rgba;

use super::arena::NodeArena;
use super::{
    Camera, GeometryBackend, GeometryDesc, GeometryHandle, GeometryKey, Material, NodeId, NodeOp,
    Shape3d, TransitionNode,
};

/// Allocation counters since the graph was created.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SceneStats {
    pub nodes_allocated: u64,
    pub nodes_reused: u64,
    pub nodes_released: u64,
    pub geometry_allocated: u64,
    pub geometry_reused: u64,
    pub geometry_released: u64,
}

/// Per-sketch retained transform tree. See the module docs for the frame protocol.
pub struct SceneGraph {
    nodes: NodeArena<TransitionNode>,
    root: NodeId,
    current: NodeId,
    branch_stack: Vec<NodeId>,
    live: Vec<NodeId>,
    last_frame: Vec<NodeId>,
    camera: Camera,
    ambient_light: Option<Rgba>,
    stats: SceneStats,
}

impl SceneGraph {
    pub fn new() -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.insert(TransitionNode::new(None, NodeOp::Root));
        Self {
            nodes,
            root,
            current: root,
            branch_stack: Vec::new(),
            live: vec![root],
            last_frame: Vec::new(),
            camera: Camera::default(),
            ambient_light: None,
            stats: SceneStats::default(),
        }
    }

    // ── frame protocol ────────────────────────────────────────────────────

    /// Mark phase. Resets the root and makes everything from the previous frame
    /// available for adoption.
    pub fn begin_frame(&mut self) {
        let last = std::mem::take(&mut self.live);

        if let Some(root) = self.nodes.get_mut(self.root) {
            root.set_transform(Vec3::zero(), Vec3::zero());
        }
        self.current = self.root;
        self.branch_stack.clear();
        self.live.push(self.root);

        for &id in &last {
            if let Some(node) = self.nodes.get_mut(id) {
                node.mark();
            }
        }
        self.last_frame = last;
    }

    /// Sweep phase. Releases every node and piece of geometry that was available
    /// but not adopted during this frame.
    pub fn end_frame<B: GeometryBackend + ?Sized>(&mut self, backend: &mut B) {
        let last = std::mem::take(&mut self.last_frame);

        for id in last {
            let Some(node) = self.nodes.get_mut(id) else {
                continue;
            };

            let unclaimed_children: Vec<NodeId> = node.available_children.drain(..).collect();
            let unclaimed_shapes = node.take_unclaimed_shapes();
            node.children.retain(|c| !unclaimed_children.contains(c));

            for handle in unclaimed_shapes {
                self.release_geometry(backend, handle);
            }
            for child in unclaimed_children {
                self.remove_subtree(backend, child);
            }
        }
    }

    /// Releases every node and piece of geometry and starts over with a fresh root.
    pub fn teardown<B: GeometryBackend + ?Sized>(&mut self, backend: &mut B) {
        let drained: Vec<TransitionNode> = self.nodes.drain().collect();
        for mut node in drained {
            for handle in node.take_all_shapes() {
                self.release_geometry(backend, handle);
            }
            if node.op != NodeOp::Root {
                self.stats.nodes_released += 1;
            }
        }

        self.root = self.nodes.insert(TransitionNode::new(None, NodeOp::Root));
        self.current = self.root;
        self.branch_stack.clear();
        self.live = vec![self.root];
        self.last_frame.clear();
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Nests a translation under the current node and makes it current.
    pub fn translate(&mut self, offset: Vec3) -> NodeId {
        let id = self.adopt_or_create(NodeOp::Translate);
        self.set_node_transform(id, offset, Vec3::zero());
        self.current = id;
        id
    }

    /// Nests a rotation (Euler angles, radians) under the current node and makes it current.
    pub fn rotate(&mut self, angles: Vec3) -> NodeId {
        let id = self.adopt_or_create(NodeOp::Rotate);
        self.set_node_transform(id, Vec3::zero(), angles);
        self.current = id;
        id
    }

    /// Opens an identity branch under the current node; paired with [`pop_branch`].
    ///
    /// [`pop_branch`]: SceneGraph::pop_branch
    pub fn push_branch(&mut self) -> NodeId {
        let id = self.adopt_or_create(NodeOp::Branch);
        self.set_node_transform(id, Vec3::zero(), Vec3::zero());
        self.branch_stack.push(self.current);
        self.current = id;
        id
    }

    /// Returns to the node that was current when the matching branch was opened.
    ///
    /// # Panics
    /// Panics if no branch is open.
    #[track_caller]
    pub fn pop_branch(&mut self) {
        match self.branch_stack.pop() {
            Some(id) => self.current = id,
            None => panic!("scene node stack popped more times than pushed"),
        }
    }

    #[inline]
    pub fn branch_depth(&self) -> usize {
        self.branch_stack.len()
    }

    /// Drops open branches and returns to the root.
    pub fn reset_branches(&mut self) {
        self.branch_stack.clear();
        self.current = self.root;
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Attaches `shape` to the current node, reusing matching geometry from the
    /// previous frame when possible.
    pub fn add_geometry<B: GeometryBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        shape: Shape3d,
        material: &Material,
    ) -> GeometryHandle {
        let key = GeometryKey::new(&shape, material);
        let node_id = self.current;
        let Some(node) = self.nodes.get_mut(node_id) else {
            unreachable!("current scene node is always live");
        };

        let handle = match node.available_shapes.get_mut(&key).and_then(Vec::pop) {
            Some(handle) => {
                self.stats.geometry_reused += 1;
                handle
            }
            None => {
                let desc = GeometryDesc { shape, material: material.clone(), node: node_id };
                let handle = backend.create_geometry(&desc);
                self.stats.geometry_allocated += 1;
                log::trace!("scene3d: allocated {:?} as {:?}", key.kind, handle);
                handle
            }
        };

        node.current_shapes.entry(key).or_default().push(handle);
        handle
    }

    // ── environment ───────────────────────────────────────────────────────

    #[inline]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[inline]
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    #[inline]
    pub fn ambient_light(&self) -> Option<Rgba> {
        self.ambient_light
    }

    #[inline]
    pub fn set_ambient_light(&mut self, color: Option<Rgba>) {
        self.ambient_light = color;
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn current(&self) -> NodeId {
        self.current
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&TransitionNode> {
        self.nodes.get(id)
    }

    /// Number of nodes in the tree, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    /// Path from the root down to `id`, both included. Empty for a released node.
    pub fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(cur) = cursor {
            let Some(node) = self.nodes.get(cur) else {
                return Vec::new();
            };
            chain.push(cur);
            cursor = node.parent;
        }
        chain.reverse();
        chain
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn adopt_or_create(&mut self, op: NodeOp) -> NodeId {
        let parent_id = self.current;

        let found = self.nodes.get(parent_id).and_then(|parent| {
            parent
                .available_children
                .iter()
                .position(|&c| self.nodes.get(c).is_some_and(|n| n.op == op))
        });

        let adopted = match (found, self.nodes.get_mut(parent_id)) {
            (Some(i), Some(parent)) => parent.available_children.remove(i),
            _ => None,
        };

        let id = match adopted {
            Some(id) => {
                self.stats.nodes_reused += 1;
                id
            }
            None => {
                let id = self.nodes.insert(TransitionNode::new(Some(parent_id), op));
                if let Some(parent) = self.nodes.get_mut(parent_id) {
                    parent.children.push(id);
                }
                self.stats.nodes_allocated += 1;
                log::trace!("scene3d: allocated {op:?} node");
                id
            }
        };

        self.live.push(id);
        id
    }

    fn set_node_transform(&mut self, id: NodeId, position: Vec3, rotation: Vec3) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.set_transform(position, rotation);
        }
    }

    fn remove_subtree<B: GeometryBackend + ?Sized>(&mut self, backend: &mut B, id: NodeId) {
        let mut pending = vec![id];
        while let Some(cur) = pending.pop() {
            let Some(mut node) = self.nodes.remove(cur) else {
                continue;
            };
            for handle in node.take_all_shapes() {
                self.release_geometry(backend, handle);
            }
            pending.extend(node.children.drain(..));
            self.stats.nodes_released += 1;
            log::trace!("scene3d: released {:?} node", node.op);
        }
    }

    fn release_geometry<B: GeometryBackend + ?Sized>(&mut self, backend: &mut B, handle: GeometryHandle) {
        backend.release_geometry(handle);
        self.stats.geometry_released += 1;
        log::trace!("scene3d: released {handle:?}");
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Backend double that hands out sequential handles and tracks what is alive.
    #[derive(Default)]
    struct Counting {
        next: u64,
        created: u64,
        live: HashSet<GeometryHandle>,
    }

    impl GeometryBackend for Counting {
        fn create_geometry(&mut self, _desc: &GeometryDesc) -> GeometryHandle {
            self.next += 1;
            self.created += 1;
            let h = GeometryHandle(self.next);
            self.live.insert(h);
            h
        }

        fn release_geometry(&mut self, handle: GeometryHandle) {
            assert!(self.live.remove(&handle), "double release of {handle:?}");
        }
    }

    fn unit_box() -> Shape3d {
        Shape3d::Box { width: 1.0, height: 1.0, length: 1.0, chamfer: 0.0 }
    }

    fn frame(g: &mut SceneGraph, b: &mut Counting, body: impl FnOnce(&mut SceneGraph, &mut Counting)) {
        g.begin_frame();
        body(g, b);
        g.end_frame(b);
    }

    // ── geometry pooling ──────────────────────────────────────────────────

    #[test]
    fn identical_shape_two_frames_allocates_once() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();
        let m = Material::default();

        for _ in 0..2 {
            frame(&mut g, &mut b, |g, b| {
                g.add_geometry(b, unit_box(), &m);
            });
        }

        assert_eq!(b.created, 1);
        assert_eq!(b.live.len(), 1);
        assert_eq!(g.stats().geometry_reused, 1);
    }

    #[test]
    fn different_shape_on_second_frame_releases_first() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();
        let m = Material::default();

        frame(&mut g, &mut b, |g, b| {
            g.add_geometry(b, unit_box(), &m);
        });
        frame(&mut g, &mut b, |g, b| {
            g.add_geometry(b, Shape3d::Sphere { radius: 1.0 }, &m);
        });

        assert_eq!(b.created, 2);
        assert_eq!(b.live.len(), 1);
        assert_eq!(g.stats().geometry_released, 1);
    }

    #[test]
    fn material_change_forces_new_geometry() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();

        frame(&mut g, &mut b, |g, b| {
            g.add_geometry(b, unit_box(), &Material::default());
        });
        frame(&mut g, &mut b, |g, b| {
            let red = Material { fill: Rgba::new(1.0, 0.0, 0.0, 1.0), ..Material::default() };
            g.add_geometry(b, unit_box(), &red);
        });

        assert_eq!(b.created, 2);
        assert_eq!(b.live.len(), 1);
    }

    #[test]
    fn duplicates_in_one_frame_each_get_geometry() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();
        let m = Material::default();

        for _ in 0..3 {
            frame(&mut g, &mut b, |g, b| {
                g.add_geometry(b, unit_box(), &m);
                g.add_geometry(b, unit_box(), &m);
            });
        }

        assert_eq!(b.created, 2);
    }

    // ── node pooling ──────────────────────────────────────────────────────

    #[test]
    fn nested_transforms_are_reused_structurally() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();
        let m = Material::default();

        for i in 0..3 {
            frame(&mut g, &mut b, |g, b| {
                g.push_branch();
                g.translate(Vec3::new(i as f64, 0.0, 0.0));
                g.rotate(Vec3::new(0.0, 0.5, 0.0));
                g.add_geometry(b, unit_box(), &m);
                g.pop_branch();
            });
        }

        let s = g.stats();
        assert_eq!(s.nodes_allocated, 3);
        assert_eq!(s.nodes_reused, 6);
        assert_eq!(s.nodes_released, 0);
        assert_eq!(b.created, 1);
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn adopted_node_takes_new_transform() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();

        frame(&mut g, &mut b, |g, _| {
            g.translate(Vec3::new(1.0, 2.0, 3.0));
        });
        let mut id = None;
        frame(&mut g, &mut b, |g, _| {
            id = Some(g.translate(Vec3::new(4.0, 5.0, 6.0)));
        });

        let node = g.node(id.unwrap()).unwrap();
        assert_eq!(node.position(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(node.rotation(), Vec3::zero());
    }

    #[test]
    fn operation_type_must_match_for_adoption() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();

        frame(&mut g, &mut b, |g, _| {
            g.translate(Vec3::new(1.0, 0.0, 0.0));
        });
        frame(&mut g, &mut b, |g, _| {
            g.rotate(Vec3::new(1.0, 0.0, 0.0));
        });

        let s = g.stats();
        assert_eq!(s.nodes_allocated, 2);
        assert_eq!(s.nodes_reused, 0);
        assert_eq!(s.nodes_released, 1);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn dropped_subtree_releases_its_geometry() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();
        let m = Material::default();

        frame(&mut g, &mut b, |g, b| {
            g.push_branch();
            g.translate(Vec3::new(1.0, 0.0, 0.0));
            g.add_geometry(b, unit_box(), &m);
            g.add_geometry(b, Shape3d::Sphere { radius: 2.0 }, &m);
            g.pop_branch();
        });
        frame(&mut g, &mut b, |_, _| {});

        assert!(b.live.is_empty());
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.stats().nodes_released, 2);
    }

    // ── branches ──────────────────────────────────────────────────────────

    #[test]
    fn pop_branch_returns_to_pre_push_node() {
        let mut g = SceneGraph::new();
        g.begin_frame();
        let t = g.translate(Vec3::new(1.0, 0.0, 0.0));
        g.push_branch();
        g.rotate(Vec3::new(0.0, 0.0, 1.0));
        g.pop_branch();
        assert_eq!(g.current(), t);
        assert_eq!(g.branch_depth(), 0);
    }

    #[test]
    #[should_panic(expected = "scene node stack popped")]
    fn pop_branch_without_push_panics() {
        let mut g = SceneGraph::new();
        g.pop_branch();
    }

    #[test]
    fn ancestry_runs_root_to_leaf() {
        let mut g = SceneGraph::new();
        g.begin_frame();
        let a = g.translate(Vec3::new(1.0, 0.0, 0.0));
        let b = g.rotate(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(g.ancestry(b), vec![g.root(), a, b]);
    }

    // ── teardown ──────────────────────────────────────────────────────────

    #[test]
    fn teardown_releases_everything() {
        let mut g = SceneGraph::new();
        let mut b = Counting::default();
        let m = Material::default();

        g.begin_frame();
        g.add_geometry(&mut b, unit_box(), &m);
        g.translate(Vec3::new(0.0, 1.0, 0.0));
        g.add_geometry(&mut b, unit_box(), &m);
        g.end_frame(&mut b);

        g.teardown(&mut b);
        assert!(b.live.is_empty());
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.current(), g.root());
    }
}
