//! Connector curves between nodes and their parents.
//!
//! Every non-root node gets one cubic Bézier running from the node to its
//! parent. Both control points sit halfway along the depth axis, one level
//! with each endpoint, which gives the curve its S shape when depth is drawn
//! left to right.

use log::debug;

use orgchart_core::{draw::CurveSegment, geometry::Point, identifier::NodeId};

use crate::{
    error::OrgChartError,
    layout::{Layout, PositionedNode},
};

/// A connector together with the nodes it joins
#[derive(Debug, Clone, PartialEq)]
pub struct LinkPath {
    child: NodeId,
    parent: NodeId,
    curve: CurveSegment,
}

impl LinkPath {
    pub fn child(&self) -> NodeId {
        self.child
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn curve(&self) -> &CurveSegment {
        &self.curve
    }
}

/// Computes the connector from `child` to its parent.
///
/// The curve starts exactly at the child's screen point and ends exactly at
/// the parent's. Only coordinates already stored in `layout` are used.
///
/// # Errors
///
/// Returns [`OrgChartError::MissingParent`] if `child` is a root, or if its
/// parent is not part of `layout`.
///
/// # Examples
///
/// ```
/// use orgchart::{hierarchy::Hierarchy, layout, links::link_path};
/// use orgchart_core::{geometry::Insets, person::RawNode};
///
/// let root = RawNode::new("Harry", "", "", 0.0).with_child(RawNode::new("Ron", "", "", 0.0));
/// let hierarchy = Hierarchy::build(&root).unwrap();
/// let layout = layout::layout(&hierarchy, 200.0, 100.0, Insets::default()).unwrap();
///
/// let ron = layout.get(hierarchy.children(hierarchy.root())[0]);
/// let curve = link_path(&layout, ron).unwrap();
/// assert_eq!(curve.to_path_data(), "M100,100C50,100 50,100 0,100");
///
/// assert!(link_path(&layout, layout.root()).is_err());
/// ```
pub fn link_path(
    layout: &Layout<'_>,
    child: &PositionedNode<'_>,
) -> Result<CurveSegment, OrgChartError> {
    let parent = child
        .parent()
        .and_then(|parent| layout.try_get(parent))
        .ok_or(OrgChartError::MissingParent(child.id()))?;

    let mid = (child.depth_axis() + parent.depth_axis()) / 2.0;

    Ok(CurveSegment::new(
        child.screen_point(),
        Point::new(mid, child.breadth_axis()),
        Point::new(mid, parent.breadth_axis()),
        parent.screen_point(),
    ))
}

/// Computes one [`LinkPath`] per non-root node, in pre-order.
///
/// # Errors
///
/// Returns [`OrgChartError::MissingParent`] if a node refers to a parent that
/// is not part of `layout`.
pub fn link_paths(layout: &Layout<'_>) -> Result<Vec<LinkPath>, OrgChartError> {
    let links = layout
        .nodes()
        .iter()
        .filter_map(|node| node.parent().map(|parent| (node, parent)))
        .map(|(node, parent)| {
            Ok(LinkPath {
                child: node.id(),
                parent,
                curve: link_path(layout, node)?,
            })
        })
        .collect::<Result<Vec<_>, OrgChartError>>()?;

    debug!(links = links.len(); "Link paths generated");
    Ok(links)
}
