use std::collections::{HashMap, VecDeque};

use crate::coords::Vec3;

use super::{GeometryHandle, GeometryKey, NodeId};

/// What a transition node was created for. Only nodes with the same operation are
/// adopted for one another, so a rotation never inherits a translation's node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeOp {
    Root,
    /// Opened by `push()`; identity transform.
    Branch,
    Translate,
    Rotate,
}

/// One transform node of the retained tree.
#[derive(Debug)]
pub struct TransitionNode {
    pub(crate) parent: Option<NodeId>,
    pub(crate) op: NodeOp,
    pub(crate) position: Vec3,
    pub(crate) rotation: Vec3,
    pub(crate) children: Vec<NodeId>,
    pub(crate) available_children: VecDeque<NodeId>,
    pub(crate) current_shapes: HashMap<GeometryKey, Vec<GeometryHandle>>,
    pub(crate) available_shapes: HashMap<GeometryKey, Vec<GeometryHandle>>,
}

impl TransitionNode {
    pub(crate) fn new(parent: Option<NodeId>, op: NodeOp) -> Self {
        Self {
            parent,
            op,
            position: Vec3::zero(),
            rotation: Vec3::zero(),
            children: Vec::new(),
            available_children: VecDeque::new(),
            current_shapes: HashMap::new(),
            available_shapes: HashMap::new(),
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn op(&self) -> NodeOp {
        self.op
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler angles in radians.
    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Geometry claimed by this node in the current frame.
    pub fn geometry(&self) -> impl Iterator<Item = GeometryHandle> + '_ {
        self.current_shapes.values().flatten().copied()
    }

    pub(crate) fn set_transform(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Mark phase: every child and every piece of geometry becomes available for
    /// adoption. Anything left over from an earlier mark is kept.
    pub(crate) fn mark(&mut self) {
        self.available_children.clear();
        self.available_children.extend(self.children.iter().copied());

        for (key, handles) in self.current_shapes.drain() {
            self.available_shapes.entry(key).or_default().extend(handles);
        }
    }

    /// Geometry handles that were never claimed since the last mark.
    pub(crate) fn take_unclaimed_shapes(&mut self) -> Vec<GeometryHandle> {
        self.available_shapes.drain().flat_map(|(_, v)| v).collect()
    }

    /// Every geometry handle owned by this node.
    pub(crate) fn take_all_shapes(&mut self) -> Vec<GeometryHandle> {
        let mut all = self.take_unclaimed_shapes();
        all.extend(self.current_shapes.drain().flat_map(|(_, v)| v));
        all
    }
}
