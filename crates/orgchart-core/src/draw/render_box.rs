//! Node boxes ready for a drawing surface.

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::NodeId,
};

/// Whether a node has reports.
///
/// Surfaces use this to pick a style; the engine never reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The node has one or more children
    Internal,
    /// The node has no children
    Leaf,
}

impl NodeKind {
    /// CSS class suffix, `"internal"` or `"leaf"`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Leaf => "leaf",
        }
    }
}

/// One line of text inside a [`RenderBox`], anchored at its start point
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    text: String,
    anchor: Point,
}

impl LabelLine {
    pub fn new(text: impl Into<String>, anchor: Point) -> Self {
        Self {
            text: text.into(),
            anchor,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start of the line's baseline, in chart coordinates
    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

/// A drawable rectangle for one chart node.
///
/// The three label lines are always stored as name, title, email, top to
/// bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBox {
    node: NodeId,
    top_left: Point,
    size: Size,
    lines: [LabelLine; 3],
    kind: NodeKind,
}

impl RenderBox {
    pub fn new(
        node: NodeId,
        top_left: Point,
        size: Size,
        lines: [LabelLine; 3],
        kind: NodeKind,
    ) -> Self {
        Self {
            node,
            top_left,
            size,
            lines,
            kind,
        }
    }

    /// The hierarchy node this box was projected from
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.top_left, self.size)
    }

    /// Label lines: name, title, email
    pub fn lines(&self) -> &[LabelLine; 3] {
        &self.lines
    }

    pub fn name(&self) -> &str {
        self.lines[0].text()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_internal(&self) -> bool {
        self.kind == NodeKind::Internal
    }
}
