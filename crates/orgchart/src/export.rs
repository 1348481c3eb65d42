//! Drawing surfaces.
//!
//! The engine never draws by itself. A host hands it a [`Surface`], and the
//! engine feeds the surface connectors first and boxes second, so that boxes
//! cover the curve ends.

pub mod svg;

use std::io;

use thiserror::Error;

use orgchart_core::draw::{CurveSegment, RenderBox};

/// Something that can draw chart primitives
pub trait Surface {
    /// Draw one connector curve
    fn draw_link(&mut self, link: &CurveSegment) -> Result<(), Error>;

    /// Draw one node box with its label lines
    fn draw_box(&mut self, render_box: &RenderBox) -> Result<(), Error>;
}

/// Errors raised by a [`Surface`]
#[derive(Debug, Error)]
pub enum Error {
    /// The surface cannot be set up with the requested style
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
