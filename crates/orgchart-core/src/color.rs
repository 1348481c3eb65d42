//! Color handling for chart styling
//!
//! [`Color`] wraps `DynamicColor` from the color crate so that any CSS color
//! string accepted in a configuration file can be written back out as an SVG
//! paint value.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// A parsed CSS color
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string such as `"#1798c1"`, `"rgb(0, 0, 0)"` or `"lightgray"`.
    ///
    /// The `grey` spellings of the CSS named colors are accepted as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use orgchart_core::color::Color;
    ///
    /// let link = Color::new("#1798c1").unwrap();
    /// assert_eq!(link.to_string(), "#1798c1");
    /// assert_eq!(Color::new("lightgrey"), Color::new("lightgray"));
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .or_else(|err| {
                let lower = color_str.to_ascii_lowercase();
                if lower.contains("grey") {
                    DynamicColor::from_str(&lower.replace("grey", "gray"))
                } else {
                    Err(err)
                }
            })
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Returns the alpha component, between 0.0 and 1.0
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

/// Writes 8-bit sRGB: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        } else {
            let alpha = (f32::from(rgba.a) / 255.0 * 1000.0).round() / 1000.0;
            write!(f, "rgba({}, {}, {}, {alpha})", rgba.r, rgba.g, rgba.b)
        }
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
