//! Configuration types for chart rendering.
//!
//! This module provides configuration structures that control how charts are
//! laid out and styled. All types implement [`serde::Deserialize`] with every
//! field optional, so a configuration file only needs to name what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas size and margins.
//! - [`StyleConfig`] - Box size, label geometry and colors.
//!
//! # Example
//!
//! ```
//! # use orgchart::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().canvas_size().width(), 800.0);
//! assert_eq!(config.style().box_size().height(), 55.0);
//! assert!(config.style().link_stroke().is_ok());
//! ```

use serde::Deserialize;

use orgchart_core::{
    color::Color,
    geometry::{Insets, Size},
};

use crate::projection::LabelStyle;

/// Top-level configuration combining layout and style settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its two sections
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Canvas geometry
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    canvas_width: f32,
    canvas_height: f32,
    margins: Insets,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 800.0,
            margins: Insets::new(50.0, 90.0, 30.0, 90.0),
        }
    }
}

impl LayoutConfig {
    pub fn new(canvas: Size, margins: Insets) -> Self {
        Self {
            canvas_width: canvas.width(),
            canvas_height: canvas.height(),
            margins,
        }
    }

    /// Full canvas size, margins included
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    pub fn margins(&self) -> Insets {
        self.margins
    }
}

/// Visual styling of boxes, labels and connectors.
///
/// Colors are kept as strings and parsed on use, so a bad color surfaces when
/// a drawing surface is set up rather than when the file is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    box_width: f32,
    box_height: f32,
    line_height: f32,
    text_inset: f32,
    background_color: Option<String>,
    box_fill: String,
    box_stroke: String,
    link_stroke: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let labels = LabelStyle::default();
        Self {
            box_width: 150.0,
            box_height: 55.0,
            line_height: labels.line_height(),
            text_inset: labels.text_inset(),
            background_color: None,
            box_fill: "lightgray".to_string(),
            box_stroke: "darkgray".to_string(),
            link_stroke: "#1798c1".to_string(),
        }
    }
}

impl StyleConfig {
    /// Size of every node box
    pub fn box_size(&self) -> Size {
        Size::new(self.box_width, self.box_height)
    }

    /// Label line geometry
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle::new(self.line_height, self.text_inset)
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }

    /// Fill color of node boxes
    pub fn box_fill(&self) -> Result<Color, String> {
        parse_color("box_fill", &self.box_fill)
    }

    /// Outline color of node boxes
    pub fn box_stroke(&self) -> Result<Color, String> {
        parse_color("box_stroke", &self.box_stroke)
    }

    /// Stroke color of connector curves
    pub fn link_stroke(&self) -> Result<Color, String> {
        parse_color("link_stroke", &self.link_stroke)
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_chart() {
        let config = AppConfig::default();
        assert_eq!(config.layout().canvas_size(), Size::new(800.0, 800.0));
        assert_eq!(config.layout().margins(), Insets::new(50.0, 90.0, 30.0, 90.0));
        assert_eq!(config.style().box_size(), Size::new(150.0, 55.0));
        assert_eq!(config.style().label_style(), LabelStyle::default());
        assert_eq!(config.style().background_color(), Ok(None));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            canvas_width = 1200.0
            margins = { top = 10.0, left = 20.0 }

            [style]
            link_stroke = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().canvas_size(), Size::new(1200.0, 800.0));
        assert_eq!(config.layout().margins(), Insets::new(10.0, 0.0, 0.0, 20.0));
        assert_eq!(config.style().box_size(), Size::new(150.0, 55.0));
        assert!(config.style().link_stroke().is_ok());
    }

    #[test]
    fn test_invalid_color_names_key() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            box_fill = "not-a-color"
            "#,
        )
        .unwrap();
        let err = config.style().box_fill().unwrap_err();
        assert!(err.contains("box_fill"), "unexpected message: {err}");
    }

    #[test]
    fn test_default_colors_all_parse() {
        let style = StyleConfig::default();
        assert_eq!(style.box_fill().unwrap().to_string(), "#d3d3d3");
        assert_eq!(style.box_stroke().unwrap().to_string(), "#a9a9a9");
        assert_eq!(style.link_stroke().unwrap().to_string(), "#1798c1");
    }

    #[test]
    fn test_grey_spelling_in_config() {
        let style: StyleConfig = toml::from_str("box_fill = \"lightgrey\"").unwrap();
        assert_eq!(style.box_fill().unwrap().to_string(), "#d3d3d3");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout().canvas_size(), Size::new(800.0, 800.0));
    }
}
