//! Nodes with assigned coordinates.

use orgchart_core::{draw::NodeKind, geometry::Point, identifier::NodeId, person::RawNode};

/// A hierarchy node with its place on the depth and breadth axes.
///
/// Coordinates are relative to the inner drawing area, i.e. the canvas with
/// its margins removed.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode<'a> {
    id: NodeId,
    record: &'a RawNode,
    level: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: f32,
    breadth: f32,
}

impl<'a> PositionedNode<'a> {
    pub(super) fn new(
        id: NodeId,
        record: &'a RawNode,
        level: usize,
        parent: Option<NodeId>,
        children: Vec<NodeId>,
        depth: f32,
        breadth: f32,
    ) -> Self {
        Self {
            id,
            record,
            level,
            parent,
            children,
            depth,
            breadth,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn record(&self) -> &'a RawNode {
        self.record
    }

    /// Tree depth of the node (root = 0)
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Coordinate along the depth axis
    pub fn depth_axis(&self) -> f32 {
        self.depth
    }

    /// Coordinate along the breadth axis
    pub fn breadth_axis(&self) -> f32 {
        self.breadth
    }

    /// Screen position: depth runs along x, breadth along y
    pub fn screen_point(&self) -> Point {
        Point::new(self.depth, self.breadth)
    }

    pub fn kind(&self) -> NodeKind {
        if self.children.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Internal
        }
    }
}
