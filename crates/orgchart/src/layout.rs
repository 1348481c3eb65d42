//! Tree layout.
//!
//! The engine works on two named axes rather than on `x`/`y`:
//!
//! - the **depth axis** grows with tree depth, spanning the inner height of
//!   the canvas;
//! - the **breadth axis** spreads siblings apart, spanning the inner width.
//!
//! Both are measured from the top-left corner of the inner area (the canvas
//! minus its margins). [`PositionedNode::screen_point`] is the single place
//! where they are mapped onto screen coordinates.

mod engine;
mod positioned;

pub use engine::LayoutEngine;
pub use positioned::PositionedNode;

use std::ops::Index;

use orgchart_core::{
    geometry::{Insets, Size},
    identifier::NodeId,
};

use crate::{error::OrgChartError, hierarchy::Hierarchy};

/// The positioned nodes of one hierarchy, in pre-order
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    nodes: Vec<PositionedNode<'a>>,
    inner_size: Size,
    margins: Insets,
    max_depth: usize,
}

impl<'a> Layout<'a> {
    fn new(
        nodes: Vec<PositionedNode<'a>>,
        inner_size: Size,
        margins: Insets,
        max_depth: usize,
    ) -> Self {
        Self {
            nodes,
            inner_size,
            margins,
            max_depth,
        }
    }

    /// All positioned nodes, root first
    pub fn nodes(&self) -> &[PositionedNode<'a>] {
        &self.nodes
    }

    /// Looks up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not come from the hierarchy this layout was
    /// calculated for.
    pub fn get(&self, id: NodeId) -> &PositionedNode<'a> {
        &self.nodes[id.index()]
    }

    /// Like [`Layout::get`], but returns `None` for foreign ids
    pub fn try_get(&self, id: NodeId) -> Option<&PositionedNode<'a>> {
        self.nodes.get(id.index())
    }

    pub fn root(&self) -> &PositionedNode<'a> {
        &self.nodes[0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Size of the area the nodes were spread over
    pub fn inner_size(&self) -> Size {
        self.inner_size
    }

    /// Margins between the canvas edge and the inner area
    pub fn margins(&self) -> Insets {
        self.margins
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<'a> Index<NodeId> for Layout<'a> {
    type Output = PositionedNode<'a>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id)
    }
}

/// Lays out `hierarchy` on a `canvas_width` by `canvas_height` canvas.
///
/// Shorthand for [`LayoutEngine::new`] with [`LayoutEngine::with_margins`]
/// followed by [`LayoutEngine::calculate`].
///
/// # Errors
///
/// Returns [`OrgChartError::InvalidLayoutBounds`] if the canvas is too small
/// for the margins.
pub fn layout<'a>(
    hierarchy: &Hierarchy<'a>,
    canvas_width: f32,
    canvas_height: f32,
    margins: Insets,
) -> Result<Layout<'a>, OrgChartError> {
    LayoutEngine::new(Size::new(canvas_width, canvas_height))
        .with_margins(margins)
        .calculate(hierarchy)
}
