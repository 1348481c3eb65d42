//! Orgchart - Tree layout and SVG rendering for organization charts.
//!
//! A chart goes through four stages:
//!
//! 1. [`hierarchy`] turns a nested [`person::RawNode`] into an indexed tree
//!    with depths and parent links.
//! 2. [`layout`] places every node on a depth axis and a breadth axis inside
//!    the canvas margins.
//! 3. [`links`] draws one connector curve from each node to its parent.
//! 4. [`projection`] turns positions into boxes with three label lines.
//!
//! [`ChartBuilder`] runs all four and hands the result to a drawing
//! [`export::Surface`], SVG by default.

pub mod config;
pub mod export;
pub mod hierarchy;
pub mod layout;
pub mod links;
pub mod projection;

mod error;

pub use orgchart_core::{color, draw, geometry, identifier, person};

pub use error::OrgChartError;

use std::path::Path;

use log::{debug, error, info, trace};

use orgchart_core::{
    draw::{CurveSegment, RenderBox},
    person::RawNode,
};

use config::AppConfig;
use export::{Surface, svg::SvgSurface};
use hierarchy::Hierarchy;
use layout::LayoutEngine;

/// Everything needed to draw one chart: connectors and boxes, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    links: Vec<CurveSegment>,
    nodes: Vec<RenderBox>,
}

impl RenderedChart {
    /// Connector curves, one per non-root node
    pub fn links(&self) -> &[CurveSegment] {
        &self.links
    }

    /// Node boxes, root first
    pub fn nodes(&self) -> &[RenderBox] {
        &self.nodes
    }

    /// Number of boxes marked as internal
    pub fn internal_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_internal()).count()
    }

    /// Feeds the chart to `surface`, connectors first so that boxes cover
    /// the curve ends.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::Export`] if the surface rejects a primitive.
    pub fn draw_on(&self, surface: &mut dyn Surface) -> Result<(), OrgChartError> {
        for link in &self.links {
            surface.draw_link(link)?;
        }
        for node in &self.nodes {
            surface.draw_box(node)?;
        }
        Ok(())
    }
}

/// Builder for laying out and rendering organization charts.
///
/// # Examples
///
/// ```
/// use orgchart::{ChartBuilder, config::AppConfig, person::RawNode};
///
/// let root = RawNode::new("Harry", "Employer", "harry@test.com", 15.0)
///     .with_child(RawNode::new("Ron", "Employer", "ron@test.com", 10.0))
///     .with_child(RawNode::new("Albus", "Employer", "albus@test.com", 7.5));
///
/// let builder = ChartBuilder::new(AppConfig::default());
///
/// let chart = builder.render_tree(&root).unwrap();
/// assert_eq!(chart.nodes().len(), 3);
/// assert_eq!(chart.links().len(), 2);
///
/// let svg = builder.render_svg(&root).unwrap();
/// assert!(svg.contains("node node--internal"));
/// ```
#[derive(Debug, Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Runs hierarchy, layout, links and projection for `root`.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::InvalidInput`] for records the layout cannot
    /// use, and [`OrgChartError::InvalidLayoutBounds`] when the configured
    /// canvas leaves no room inside its margins.
    pub fn render_tree(&self, root: &RawNode) -> Result<RenderedChart, OrgChartError> {
        info!(root = root.name(); "Building hierarchy");
        let hierarchy = Hierarchy::build(root)?;
        debug!(nodes = hierarchy.len(), max_depth = hierarchy.max_depth(); "Hierarchy built");

        let layout_config = self.config.layout();
        let layout = LayoutEngine::new(layout_config.canvas_size())
            .with_margins(layout_config.margins())
            .calculate(&hierarchy)?;

        let links = links::link_paths(&layout)?
            .into_iter()
            .map(|link| *link.curve())
            .collect();

        let style = self.config.style();
        let nodes = projection::project(layout.nodes(), style.box_size(), &style.label_style());

        let chart = RenderedChart { links, nodes };
        trace!(chart:?; "Rendered chart");
        Ok(chart)
    }

    /// Renders `root` and draws it on `surface`.
    ///
    /// # Errors
    ///
    /// See [`ChartBuilder::render_tree`] and [`RenderedChart::draw_on`].
    pub fn draw(&self, root: &RawNode, surface: &mut dyn Surface) -> Result<(), OrgChartError> {
        let chart = self.render_tree(root)?;
        chart.draw_on(surface)?;
        info!(
            nodes = chart.nodes().len(),
            links = chart.links().len();
            "Chart drawn"
        );
        Ok(())
    }

    /// Renders `root` to an SVG document string.
    ///
    /// The surface is set up before anything else runs; if that fails no
    /// layout work is done.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::Surface`] if the configured style cannot be
    /// turned into a surface, otherwise the errors of [`ChartBuilder::draw`].
    pub fn render_svg(&self, root: &RawNode) -> Result<String, OrgChartError> {
        let svg = self.drawn_svg_surface(root)?.finish();
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Renders `root` and writes the SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::Io`] if the file cannot be written, otherwise
    /// the errors of [`ChartBuilder::render_svg`].
    pub fn export_svg(&self, root: &RawNode, path: impl AsRef<Path>) -> Result<(), OrgChartError> {
        self.drawn_svg_surface(root)?.write_to(path)?;
        Ok(())
    }

    fn drawn_svg_surface(&self, root: &RawNode) -> Result<SvgSurface, OrgChartError> {
        let mut surface = self.svg_surface()?;
        self.draw(root, &mut surface)?;
        Ok(surface)
    }

    fn svg_surface(&self) -> Result<SvgSurface, OrgChartError> {
        let layout_config = self.config.layout();
        SvgSurface::new(
            self.config.style(),
            layout_config.canvas_size(),
            layout_config.margins(),
        )
        .map_err(|err| {
            error!(err:err; "Failed to set up SVG surface");
            OrgChartError::Surface(err.to_string())
        })
    }
}
