//! CLI logic for the orgchart renderer.
//!
//! Reads a JSON chart, lays it out, and writes the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use orgchart::{ChartBuilder, OrgChartError, person::RawNode};

/// Run the orgchart CLI application
///
/// Reads the chart at `args.input`, renders it with the loaded configuration,
/// and writes the resulting SVG to `args.output`.
///
/// # Errors
///
/// Returns `OrgChartError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed or empty chart documents
/// - Layout and rendering errors
pub fn run(args: &Args) -> Result<(), OrgChartError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing chart"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let root = RawNode::from_json_str(&source)?;

    let builder = ChartBuilder::new(app_config);
    builder.export_svg(&root, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
