//! SVG drawing surface.
//!
//! Produces the same element structure the chart has always had:
//!
//! ```text
//! <svg>
//!   <rect/>                                  optional background
//!   <g transform="translate(left, top)">     margins
//!     <path class="link" d="M..C.."/>        one per connector
//!     <g class="node node--internal">        one per box
//!       <rect class="box"/>
//!       <text/> <text/> <text/>              name, title, email
//!     </g>
//!   </g>
//! </svg>
//! ```

use std::{fs, path::Path};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Group, Path as SvgPath, Rectangle, Text},
};

use orgchart_core::{
    color::Color,
    draw::{CurveSegment, RenderBox},
    geometry::{Bounds, Insets, Point, Size},
};

use crate::{
    config::StyleConfig,
    export::{Error, Surface},
};

/// Colors resolved from a [`StyleConfig`]
#[derive(Debug, Clone)]
struct Palette {
    background: Option<Color>,
    box_fill: Color,
    box_stroke: Color,
    link_stroke: Color,
}

impl Palette {
    fn from_style(style: &StyleConfig) -> Result<Self, String> {
        Ok(Self {
            background: style.background_color()?,
            box_fill: style.box_fill()?,
            box_stroke: style.box_stroke()?,
            link_stroke: style.link_stroke()?,
        })
    }
}

/// A [`Surface`] that accumulates an SVG document in memory
#[derive(Debug)]
pub struct SvgSurface {
    canvas: Size,
    margins: Insets,
    palette: Palette,
    links: Vec<SvgPath>,
    nodes: Vec<Group>,
    content: Option<Bounds>,
}

impl SvgSurface {
    /// Sets up a surface for a canvas of `canvas` with the given margins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if any configured color cannot be parsed.
    pub fn new(style: &StyleConfig, canvas: Size, margins: Insets) -> Result<Self, Error> {
        let palette = Palette::from_style(style).map_err(Error::Render)?;
        debug!(width = canvas.width(), height = canvas.height(); "SVG surface ready");

        Ok(Self {
            canvas,
            margins,
            palette,
            links: Vec::new(),
            nodes: Vec::new(),
            content: None,
        })
    }

    fn include(&mut self, bounds: Bounds) {
        self.content = Some(match self.content {
            Some(content) => content.merge(&bounds),
            None => bounds,
        });
    }

    /// Area covered by the document: the canvas, grown to include anything
    /// drawn past its edges
    fn view_box(&self) -> Bounds {
        let canvas = Bounds::new_from_top_left(Point::default(), self.canvas);
        match self.content {
            Some(content) => canvas.merge(&content.translate(self.margins.origin())),
            None => canvas,
        }
    }

    /// Assembles the final document
    pub fn into_document(self) -> Document {
        let view_box = self.view_box();
        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view_box.min_x(),
                    view_box.min_y(),
                    view_box.width(),
                    view_box.height()
                ),
            )
            .set("width", view_box.width())
            .set("height", view_box.height());

        if let Some(background) = &self.palette.background {
            doc = doc.add(
                Rectangle::new()
                    .set("x", view_box.min_x())
                    .set("y", view_box.min_y())
                    .set("width", view_box.width())
                    .set("height", view_box.height())
                    .set("fill", background),
            );
        }

        let origin = self.margins.origin();
        let mut chart =
            Group::new().set("transform", format!("translate({},{})", origin.x(), origin.y()));
        for link in self.links {
            chart = chart.add(link);
        }
        for node in self.nodes {
            chart = chart.add(node);
        }

        doc.add(chart)
    }

    /// Renders the document to a string
    pub fn finish(self) -> String {
        self.into_document().to_string()
    }

    /// Writes the document to `path`
    pub fn write_to(self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Writing SVG file");

        if let Err(err) = fs::write(path, self.finish()) {
            error!(path = path.display().to_string(), err:err; "Failed to write SVG file");
            return Err(Error::Io(err));
        }
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn draw_link(&mut self, link: &CurveSegment) -> Result<(), Error> {
        let path = SvgPath::new()
            .set("class", "link")
            .set("d", link.to_path_data())
            .set("fill", "none")
            .set("stroke", &self.palette.link_stroke);

        self.links.push(path);
        Ok(())
    }

    fn draw_box(&mut self, render_box: &RenderBox) -> Result<(), Error> {
        let top_left = render_box.top_left();
        let size = render_box.size();

        let rect = Rectangle::new()
            .set("class", "box")
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", &self.palette.box_fill)
            .set("stroke", &self.palette.box_stroke);

        let mut node = Group::new()
            .set("class", format!("node node--{}", render_box.kind().as_str()))
            .add(rect);

        for line in render_box.lines() {
            node = node.add(
                Text::new(line.text())
                    .set("x", line.anchor().x())
                    .set("y", line.anchor().y())
                    .set("dominant-baseline", "middle"),
            );
        }

        self.nodes.push(node);
        self.include(render_box.bounds());
        Ok(())
    }
}
