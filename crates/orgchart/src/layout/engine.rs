//! Tree layout engine
//!
//! Assigns depth and breadth coordinates to every node of a [`Hierarchy`]:
//!
//! 1. Depth: node levels are spread evenly over the inner height, the root
//!    at 0 and the deepest level at the far edge.
//! 2. Breadth: leaves get equal slots across the inner width in left-to-right
//!    order; every internal node then sits at the mean breadth of its
//!    children, computed bottom-up.
//!
//! Because each subtree owns a contiguous run of leaf slots and a parent
//! always lands inside its children's range, siblings can never cross.

use log::{debug, info, trace};

use orgchart_core::geometry::{Insets, Size};

use crate::{
    error::OrgChartError,
    hierarchy::Hierarchy,
    layout::{Layout, PositionedNode},
};

/// Layout engine configured with a canvas size and margins.
///
/// # Examples
///
/// ```
/// use orgchart::{hierarchy::Hierarchy, layout::LayoutEngine};
/// use orgchart_core::{geometry::{Insets, Size}, person::RawNode};
///
/// let root = RawNode::new("Harry", "", "", 0.0)
///     .with_child(RawNode::new("Ron", "", "", 0.0))
///     .with_child(RawNode::new("Albus", "", "", 0.0));
/// let hierarchy = Hierarchy::build(&root).unwrap();
///
/// let layout = LayoutEngine::new(Size::new(300.0, 200.0))
///     .with_margins(Insets::uniform(50.0))
///     .calculate(&hierarchy)
///     .unwrap();
///
/// let root = layout.get(hierarchy.root());
/// assert_eq!(root.depth_axis(), 0.0);
/// assert_eq!(root.breadth_axis(), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    canvas: Size,
    margins: Insets,
}

impl LayoutEngine {
    /// Create an engine for a canvas of the given size, without margins
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            margins: Insets::default(),
        }
    }

    /// Set the margins kept free around the tree
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn margins(&self) -> Insets {
        self.margins
    }

    /// Size of the drawing area left once the margins are removed.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::InvalidLayoutBounds`] when either inner
    /// dimension is zero or negative, or when any input is not finite.
    pub fn inner_size(&self) -> Result<Size, OrgChartError> {
        let inner = self.canvas.sub_padding(self.margins);
        if self.canvas.is_finite() && self.margins.is_finite() && inner.is_positive() {
            Ok(inner)
        } else {
            Err(OrgChartError::InvalidLayoutBounds {
                canvas: self.canvas,
                margins: self.margins,
            })
        }
    }

    /// Calculate the layout for a hierarchy.
    ///
    /// The result holds exactly one [`PositionedNode`] per hierarchy node, in
    /// the hierarchy's pre-order. No state is kept between calls, so the same
    /// input always produces the same layout.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::InvalidLayoutBounds`] if the canvas is too
    /// small for the margins.
    pub fn calculate<'a>(&self, hierarchy: &Hierarchy<'a>) -> Result<Layout<'a>, OrgChartError> {
        let inner = self.inner_size()?;
        let max_depth = hierarchy.max_depth();
        info!(
            nodes = hierarchy.len(),
            max_depth,
            inner_width = inner.width(),
            inner_height = inner.height();
            "Calculating tree layout"
        );

        let depths = Self::depth_positions(hierarchy, max_depth, inner.height());
        let breadths = Self::breadth_positions(hierarchy, inner.width());

        let nodes: Vec<PositionedNode<'a>> = hierarchy
            .descendants()
            .map(|(id, node)| {
                let depth = depths[id.index()];
                let breadth = breadths[id.index()];
                trace!(id:% = id, depth, breadth; "Node positioned");
                PositionedNode::new(
                    id,
                    node.record(),
                    node.depth(),
                    node.parent(),
                    node.children().to_vec(),
                    depth,
                    breadth,
                )
            })
            .collect();

        debug!(nodes = nodes.len(); "Layout calculated");
        Ok(Layout::new(nodes, inner, self.margins, max_depth))
    }

    /// Depth-axis coordinate per node, indexed by arena position
    fn depth_positions(hierarchy: &Hierarchy<'_>, max_depth: usize, extent: f32) -> Vec<f32> {
        hierarchy
            .descendants()
            .map(|(_, node)| {
                if max_depth == 0 {
                    0.0
                } else {
                    node.depth() as f32 / max_depth as f32 * extent
                }
            })
            .collect()
    }

    /// Breadth-axis coordinate per node, indexed by arena position
    fn breadth_positions(hierarchy: &Hierarchy<'_>, extent: f32) -> Vec<f32> {
        let mut breadths = vec![0.0f32; hierarchy.len()];

        // Step 1: equal slots for the leaves, half a slot of padding at each edge
        let leaves: Vec<_> = hierarchy.leaves().collect();
        let slot = extent / leaves.len() as f32;
        for (slot_index, leaf) in leaves.iter().enumerate() {
            breadths[leaf.index()] = (slot_index as f32 + 0.5) * slot;
        }

        // Step 2: parents at the mean of their children. Children always come
        // after their parent in the arena, so a reverse walk is bottom-up.
        for (id, node) in hierarchy.descendants().rev() {
            if node.is_leaf() {
                continue;
            }
            let sum: f32 = node
                .children()
                .iter()
                .map(|child| breadths[child.index()])
                .sum();
            breadths[id.index()] = sum / node.children().len() as f32;
        }

        breadths
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use orgchart_core::person::RawNode;

    use super::*;

    fn person(name: &str) -> RawNode {
        RawNode::new(name, "Employer", "email@test.com", 10.0)
    }

    fn engine() -> LayoutEngine {
        LayoutEngine::new(Size::new(800.0, 800.0)).with_margins(Insets::new(50.0, 90.0, 30.0, 90.0))
    }

    #[test]
    fn test_inner_size() {
        let inner = engine().inner_size().unwrap();
        assert_approx_eq!(f32, inner.width(), 620.0);
        assert_approx_eq!(f32, inner.height(), 720.0);
    }

    #[test]
    fn test_canvas_width_equal_to_margins_fails() {
        let engine =
            LayoutEngine::new(Size::new(180.0, 800.0)).with_margins(Insets::new(50.0, 90.0, 30.0, 90.0));
        assert!(matches!(
            engine.inner_size(),
            Err(OrgChartError::InvalidLayoutBounds { .. })
        ));
    }

    #[test]
    fn test_canvas_height_smaller_than_margins_fails() {
        let root = person("Solo");
        let hierarchy = Hierarchy::build(&root).unwrap();
        let engine =
            LayoutEngine::new(Size::new(800.0, 60.0)).with_margins(Insets::new(50.0, 90.0, 30.0, 90.0));
        assert!(matches!(
            engine.calculate(&hierarchy),
            Err(OrgChartError::InvalidLayoutBounds { .. })
        ));
    }

    #[test]
    fn test_non_finite_canvas_fails() {
        let engine = LayoutEngine::new(Size::new(f32::INFINITY, 800.0));
        assert!(engine.inner_size().is_err());
        let engine = LayoutEngine::new(Size::new(800.0, 800.0)).with_margins(Insets::uniform(f32::NAN));
        assert!(engine.inner_size().is_err());
    }

    #[test]
    fn test_single_node_is_centered_at_depth_zero() {
        let root = person("Solo");
        let hierarchy = Hierarchy::build(&root).unwrap();
        let layout = engine().calculate(&hierarchy).unwrap();

        assert_eq!(layout.len(), 1);
        let node = layout.get(hierarchy.root());
        assert_approx_eq!(f32, node.depth_axis(), 0.0);
        assert_approx_eq!(f32, node.breadth_axis(), 310.0);
    }

    #[test]
    fn test_leaf_slots() {
        let root = person("Root")
            .with_child(person("A"))
            .with_child(person("B"))
            .with_child(person("C"))
            .with_child(person("D"));
        let hierarchy = Hierarchy::build(&root).unwrap();
        let layout = LayoutEngine::new(Size::new(400.0, 100.0))
            .calculate(&hierarchy)
            .unwrap();

        let breadths: Vec<f32> = hierarchy
            .leaves()
            .map(|id| layout.get(id).breadth_axis())
            .collect();
        for (actual, expected) in breadths.iter().zip([50.0, 150.0, 250.0, 350.0]) {
            assert_approx_eq!(f32, *actual, expected);
        }
        assert_approx_eq!(f32, layout.get(hierarchy.root()).breadth_axis(), 200.0);
    }

    #[test]
    fn test_parent_uses_mean_not_midpoint_of_extremes() {
        // Root children: a leaf and a subtree with three leaves.
        // Leaves sit at 50, 150, 250, 350 on a 400 wide area.
        // B = mean(150, 250, 350) = 250; Root = mean(A=50, B=250) = 150.
        // The midpoint of extremes would put Root at 200 instead.
        let root = person("Root").with_child(person("A")).with_child(
            person("B")
                .with_child(person("B1"))
                .with_child(person("B2"))
                .with_child(person("B3")),
        );
        let hierarchy = Hierarchy::build(&root).unwrap();
        let layout = LayoutEngine::new(Size::new(400.0, 100.0))
            .calculate(&hierarchy)
            .unwrap();

        let b = hierarchy.children(hierarchy.root())[1];
        assert_approx_eq!(f32, layout.get(b).breadth_axis(), 250.0);
        assert_approx_eq!(f32, layout.get(hierarchy.root()).breadth_axis(), 150.0);
    }

    #[test]
    fn test_depth_levels_span_inner_height() {
        let root = person("Root").with_child(person("A").with_child(person("A1").with_child(person("A11"))));
        let hierarchy = Hierarchy::build(&root).unwrap();
        let layout = LayoutEngine::new(Size::new(100.0, 300.0))
            .calculate(&hierarchy)
            .unwrap();

        let depths: Vec<f32> = layout.nodes().iter().map(PositionedNode::depth_axis).collect();
        for (actual, expected) in depths.iter().zip([0.0, 100.0, 200.0, 300.0]) {
            assert_approx_eq!(f32, *actual, expected);
        }
    }
}
