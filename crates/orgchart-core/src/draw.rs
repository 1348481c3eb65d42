//! Drawable output of the chart engine.
//!
//! Everything in this module is already in screen coordinates (see
//! [`geometry`](crate::geometry)) and carries no references back into the
//! hierarchy it came from, so a drawing surface can consume it directly.
//!
//! - [`CurveSegment`]: a cubic Bézier connector between a node and its parent
//! - [`RenderBox`]: a node's rectangle, label lines and [`NodeKind`]

mod curve;
mod render_box;

pub use curve::CurveSegment;
pub use render_box::{LabelLine, NodeKind, RenderBox};
