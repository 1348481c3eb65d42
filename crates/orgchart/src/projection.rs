//! Render projection.
//!
//! Turns positioned nodes into [`RenderBox`]es: a fixed-size rectangle
//! centered on the node's screen point, plus three label lines (name, title,
//! email) stacked one line height apart with the title on the box's center
//! line.

use log::debug;
use serde::Deserialize;

use orgchart_core::{
    draw::{LabelLine, RenderBox},
    geometry::{Point, Size},
};

use crate::layout::PositionedNode;

/// Geometry of the label lines inside a box
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    line_height: f32,
    text_inset: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            line_height: 16.0,
            text_inset: 5.0,
        }
    }
}

impl LabelStyle {
    pub fn new(line_height: f32, text_inset: f32) -> Self {
        Self {
            line_height,
            text_inset,
        }
    }

    /// Vertical distance between consecutive lines
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Horizontal distance from the box's left edge to the start of each line
    pub fn text_inset(&self) -> f32 {
        self.text_inset
    }
}

/// Projects one positioned node onto a box of `box_size`
pub fn project_node(node: &PositionedNode<'_>, box_size: Size, style: &LabelStyle) -> RenderBox {
    let center = node.screen_point();
    let top_left = center.sub_point(box_size.half_extent());
    let text_x = top_left.x() + style.text_inset();

    let record = node.record();
    let texts = [record.name(), record.title(), record.email()];
    let lines = [0usize, 1, 2].map(|line| {
        let offset = (line as f32 - 1.0) * style.line_height();
        LabelLine::new(texts[line], Point::new(text_x, center.y() + offset))
    });

    RenderBox::new(node.id(), top_left, box_size, lines, node.kind())
}

/// Projects every node, keeping the input order.
///
/// # Examples
///
/// ```
/// use orgchart::{hierarchy::Hierarchy, layout, projection::{project, LabelStyle}};
/// use orgchart_core::{geometry::{Insets, Size}, person::RawNode};
///
/// let root = RawNode::new("Harry", "Employer", "email@test.com", 15.0);
/// let hierarchy = Hierarchy::build(&root).unwrap();
/// let layout = layout::layout(&hierarchy, 300.0, 100.0, Insets::default()).unwrap();
///
/// let boxes = project(layout.nodes(), Size::new(150.0, 55.0), &LabelStyle::default());
/// assert_eq!(boxes.len(), 1);
/// assert_eq!(boxes[0].top_left().x(), -75.0);
/// assert_eq!(boxes[0].top_left().y(), 122.5);
/// assert!(!boxes[0].is_internal());
/// ```
pub fn project(nodes: &[PositionedNode<'_>], box_size: Size, style: &LabelStyle) -> Vec<RenderBox> {
    let boxes: Vec<RenderBox> = nodes
        .iter()
        .map(|node| project_node(node, box_size, style))
        .collect();
    debug!(
        boxes = boxes.len(),
        internal = boxes.iter().filter(|render_box| render_box.is_internal()).count();
        "Render boxes projected"
    );
    boxes
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use orgchart_core::{draw::NodeKind, geometry::Insets, person::RawNode};

    use super::*;
    use crate::{hierarchy::Hierarchy, layout::layout};

    fn person(name: &str) -> RawNode {
        RawNode::new(name, "Employer", format!("{}@test.com", name.to_lowercase()), 10.0)
    }

    #[test]
    fn test_boxes_are_centered_on_positions() {
        let root = person("Harry").with_child(person("Ron")).with_child(person("Albus"));
        let hierarchy = Hierarchy::build(&root).unwrap();
        let layout = layout(&hierarchy, 400.0, 300.0, Insets::default()).unwrap();
        let size = Size::new(150.0, 55.0);

        let boxes = project(layout.nodes(), size, &LabelStyle::default());
        assert_eq!(boxes.len(), layout.len());
        for (render_box, node) in boxes.iter().zip(layout.nodes()) {
            assert_eq!(render_box.node(), node.id());
            assert_eq!(render_box.size(), size);
            assert_approx_eq!(f32, render_box.center().x(), node.screen_point().x());
            assert_approx_eq!(f32, render_box.center().y(), node.screen_point().y());
            assert_approx_eq!(f32, render_box.top_left().x(), node.depth_axis() - 75.0);
            assert_approx_eq!(f32, render_box.top_left().y(), node.breadth_axis() - 27.5);
        }
    }

    #[test]
    fn test_label_lines_stack_in_order() {
        let root = person("Harry");
        let hierarchy = Hierarchy::build(&root).unwrap();
        let layout = layout(&hierarchy, 400.0, 300.0, Insets::default()).unwrap();
        let style = LabelStyle::new(20.0, 8.0);

        let render_box = project_node(layout.root(), Size::new(150.0, 55.0), &style);
        let [name, title, email] = render_box.lines();
        assert_eq!(name.text(), "Harry");
        assert_eq!(title.text(), "Employer");
        assert_eq!(email.text(), "harry@test.com");

        let center = render_box.center();
        assert_approx_eq!(f32, title.anchor().y(), center.y());
        assert_approx_eq!(f32, title.anchor().y() - name.anchor().y(), 20.0);
        assert_approx_eq!(f32, email.anchor().y() - title.anchor().y(), 20.0);
        for line in render_box.lines() {
            assert_approx_eq!(f32, line.anchor().x(), render_box.top_left().x() + 8.0);
        }
    }

    #[test]
    fn test_kind_follows_children() {
        let root = person("Harry").with_child(person("Ron").with_child(person("Kid")));
        let hierarchy = Hierarchy::build(&root).unwrap();
        let layout = layout(&hierarchy, 400.0, 300.0, Insets::default()).unwrap();

        let kinds: Vec<NodeKind> = project(layout.nodes(), Size::new(10.0, 10.0), &LabelStyle::default())
            .iter()
            .map(RenderBox::kind)
            .collect();
        assert_eq!(kinds, [NodeKind::Internal, NodeKind::Internal, NodeKind::Leaf]);
    }
}
