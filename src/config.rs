use std::str::FromStr;

use crate::color::Rgb;
use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::grid::{COLS, ROWS};

/// How a lit letter is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// The letter's 5x5 glyph.
    Glyph,
    /// A solid block covering the letter's cell.
    Block,
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "glyph" => Ok(Style::Glyph),
            "block" => Ok(Style::Block),
            other => Err(format!("unknown style {other:?}, expected glyph or block")),
        }
    }
}

/// Geometry and colours of the LED panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub grid_cols: usize,
    pub grid_rows: usize,

    pub char_width: usize,
    pub char_height: usize,
    pub char_spacing_x: usize,
    pub char_spacing_y: usize,

    pub color_on: Rgb,
    pub color_off: Rgb,
    /// Unlit letters, only painted when `show_dim_letters` is set
    pub color_dim: Rgb,
    pub color_dot: Rgb,
    pub show_dim_letters: bool,

    /// Distance of the minute dots from the panel edges
    pub dot_margin: usize,
    pub dot_size: usize,

    pub style: Style,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            grid_cols: COLS,
            grid_rows: ROWS,
            char_width: GLYPH_WIDTH,
            char_height: GLYPH_HEIGHT,
            char_spacing_x: 1,
            char_spacing_y: 1,
            color_on: Rgb::WHITE,
            color_off: Rgb::BLACK,
            color_dim: Rgb::grey(20),
            color_dot: Rgb::WHITE,
            show_dim_letters: false,
            dot_margin: 1,
            dot_size: 2,
            style: Style::Glyph,
        }
    }
}

impl PanelConfig {
    /// Applies the user-facing knobs: letter colour, brightness in percent
    /// (clamped to 1-100) and the grey level of unlit letters (0 hides them).
    pub fn with_appearance(mut self, color: Rgb, brightness: u8, dim: u8) -> Self {
        let brightness = brightness.clamp(1, 100);
        self.color_on = color.scaled(brightness);
        self.color_dot = color.scaled(brightness);
        self.color_dim = Rgb::grey(dim);
        self.show_dim_letters = dim > 0;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!((config.grid_cols, config.grid_rows), (11, 10));
        assert!(!config.show_dim_letters);
        assert_eq!(config.style, Style::Glyph);
    }

    #[test]
    fn test_with_appearance() {
        let config = PanelConfig::default().with_appearance(Rgb::new(200, 100, 0), 50, 40);
        assert_eq!(config.color_on, Rgb::new(100, 50, 0));
        assert_eq!(config.color_dot, config.color_on);
        assert_eq!(config.color_dim, Rgb::grey(40));
        assert!(config.show_dim_letters);
    }

    #[test]
    fn test_brightness_is_clamped() {
        let dark = PanelConfig::default().with_appearance(Rgb::WHITE, 0, 0);
        assert_eq!(dark.color_on, Rgb::grey(2));
        assert!(!dark.show_dim_letters);

        let bright = PanelConfig::default().with_appearance(Rgb::WHITE, 200, 0);
        assert_eq!(bright.color_on, Rgb::WHITE);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("glyph".parse(), Ok(Style::Glyph));
        assert_eq!("BLOCK".parse(), Ok(Style::Block));
        assert!("fancy".parse::<Style>().is_err());
    }
}
