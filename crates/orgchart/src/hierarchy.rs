//! Tree model builder.
//!
//! [`Hierarchy::build`] turns a nested [`RawNode`] into a flat arena of
//! [`HierarchyNode`]s. Each node knows its depth, its children (in input
//! order) and the [`NodeId`] of its parent. Parent links are plain indices into
//! the arena, so ownership only ever flows from the arena to the nodes.
//!
//! The arena is filled in pre-order: the root is always at index 0, and every
//! node's index is smaller than the indices of all of its descendants.

use std::ops::Index;

use log::{debug, trace};

use orgchart_core::{identifier::NodeId, person::RawNode};

use crate::error::OrgChartError;

/// One node of a [`Hierarchy`], borrowing the record it wraps
#[derive(Debug, Clone)]
pub struct HierarchyNode<'a> {
    record: &'a RawNode,
    depth: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<'a> HierarchyNode<'a> {
    /// The input record this node wraps
    pub fn record(&self) -> &'a RawNode {
        self.record
    }

    /// Distance from the root; the root has depth 0
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in input order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A rooted tree stored as an arena of [`HierarchyNode`]s.
///
/// # Examples
///
/// ```
/// use orgchart::hierarchy::Hierarchy;
/// use orgchart_core::person::RawNode;
///
/// let root = RawNode::new("Harry", "Employer", "email@test.com", 15.0)
///     .with_child(RawNode::new("Ron", "Employer", "email@test.com", 10.0))
///     .with_child(RawNode::new("Albus", "Employer", "email@test.com", 10.0));
///
/// let hierarchy = Hierarchy::build(&root).unwrap();
/// assert_eq!(hierarchy.len(), 3);
/// assert_eq!(hierarchy.max_depth(), 1);
///
/// let names: Vec<_> = hierarchy
///     .children(hierarchy.root())
///     .iter()
///     .map(|&id| hierarchy[id].record().name())
///     .collect();
/// assert_eq!(names, ["Ron", "Albus"]);
/// ```
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    nodes: Vec<HierarchyNode<'a>>,
}

impl<'a> Hierarchy<'a> {
    /// Wraps `root` and all of its descendants.
    ///
    /// The walk uses an explicit stack, so very deep trees built in memory do
    /// not grow the call stack. Trees read from JSON are capped earlier by
    /// [`RawNode::from_json_str`].
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::InvalidInput`] if any record carries a value
    /// that is not a finite number.
    pub fn build(root: &'a RawNode) -> Result<Self, OrgChartError> {
        let mut nodes: Vec<HierarchyNode<'a>> = Vec::with_capacity(root.count());
        let mut stack: Vec<(&'a RawNode, Option<NodeId>, usize)> = vec![(root, None, 0)];

        while let Some((record, parent, depth)) = stack.pop() {
            if !record.value().is_finite() {
                return Err(OrgChartError::InvalidInput(format!(
                    "`{}` has a non-finite value ({})",
                    record.name(),
                    record.value()
                )));
            }

            let id = NodeId::new(nodes.len());
            if let Some(parent) = parent {
                nodes[parent.index()].children.push(id);
            }
            trace!(id:% = id, name = record.name(), depth; "Hierarchy node added");

            nodes.push(HierarchyNode {
                record,
                depth,
                parent,
                children: Vec::with_capacity(record.children().len()),
            });

            // Reverse so the first child is popped (and numbered) first.
            stack.extend(
                record
                    .children()
                    .iter()
                    .rev()
                    .map(|child| (child, Some(id), depth + 1)),
            );
        }

        debug!(nodes = nodes.len(); "Hierarchy built");
        Ok(Self { nodes })
    }

    /// The root node; always the first node of the arena
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Looks up a node, returning `None` for ids from another hierarchy
    pub fn get(&self, id: NodeId) -> Option<&HierarchyNode<'a>> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self[id].children
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self[id].is_leaf()
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a hierarchy has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node; 0 for a single-node tree
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// All nodes in pre-order, root first
    pub fn descendants(&self) -> impl DoubleEndedIterator<Item = (NodeId, &HierarchyNode<'a>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    /// Leaves in left-to-right order
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants()
            .filter(|(_, node)| node.is_leaf())
            .map(|(id, _)| id)
    }
}

impl<'a> Index<NodeId> for Hierarchy<'a> {
    type Output = HierarchyNode<'a>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

/// Convenience wrapper around [`Hierarchy::build`]
pub fn build(root: &RawNode) -> Result<Hierarchy<'_>, OrgChartError> {
    Hierarchy::build(root)
}
