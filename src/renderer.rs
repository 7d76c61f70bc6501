use std::collections::BTreeSet;

use crate::color::Rgb;
use crate::config::{PanelConfig, Style};
use crate::display::Display;
use crate::font;
use crate::grid::{self, Cell};

/// Inclusive pixel rectangle `(x0, y0, x1, y1)`. May reach past the panel edge.
pub type Bounds = (i32, i32, i32, i32);

/// Maps letter cells and minute dots onto panel pixels.
pub struct FaceRenderer {
    config: PanelConfig,
    offset_x: i32,
    offset_y: i32,
}

impl FaceRenderer {
    pub fn new(config: PanelConfig) -> Self {
        let grid_width = config.grid_cols * config.char_width
            + config.grid_cols.saturating_sub(1) * config.char_spacing_x;
        let grid_height = config.grid_rows * config.char_height
            + config.grid_rows.saturating_sub(1) * config.char_spacing_y;

        // the default grid is one pixel wider than the panel, so this can go negative
        let offset_x = (Display::WIDTH as i32 - grid_width as i32).div_euclid(2);
        let offset_y = (Display::HEIGHT as i32 - grid_height as i32).div_euclid(2);

        Self {
            config,
            offset_x,
            offset_y,
        }
    }

    pub fn cell_bounds(&self, (row, col): Cell) -> Bounds {
        let cfg = &self.config;
        let x0 = self.offset_x + (col * (cfg.char_width + cfg.char_spacing_x)) as i32;
        let y0 = self.offset_y + (row * (cfg.char_height + cfg.char_spacing_y)) as i32;
        (
            x0,
            y0,
            x0 + cfg.char_width as i32 - 1,
            y0 + cfg.char_height as i32 - 1,
        )
    }

    /// Squares for the first `dots` corners: top-left, top-right, bottom-right, bottom-left.
    pub fn dot_bounds(&self, dots: u8) -> Vec<Bounds> {
        let margin = self.config.dot_margin as i32;
        let size = self.config.dot_size as i32;
        let right = Display::WIDTH as i32 - margin - size;
        let bottom = Display::HEIGHT as i32 - margin - size;

        [(margin, margin), (right, margin), (right, bottom), (margin, bottom)]
            .into_iter()
            .take(usize::from(dots.min(4)))
            .map(|(x, y)| (x, y, x + size - 1, y + size - 1))
            .collect()
    }

    /// Paints a full clock face into `display`.
    pub fn paint(&self, display: &mut Display, lit: &BTreeSet<Cell>, dots: u8) {
        let cfg = &self.config;
        display.fill(cfg.color_off);

        if cfg.show_dim_letters {
            for row in 0..cfg.grid_rows {
                for col in 0..cfg.grid_cols {
                    if !lit.contains(&(row, col)) {
                        self.paint_cell(display, (row, col), cfg.color_dim);
                    }
                }
            }
        }

        for cell in lit {
            self.paint_cell(display, *cell, cfg.color_on);
        }

        for bounds in self.dot_bounds(dots) {
            display.fill_rect(bounds, cfg.color_dot);
        }
    }

    fn paint_cell(&self, display: &mut Display, cell: Cell, color: Rgb) {
        let bounds = self.cell_bounds(cell);
        match self.config.style {
            Style::Block => display.fill_rect(bounds, color),
            Style::Glyph => {
                let glyph = grid::letter(cell).map(font::glyph).unwrap_or_default();
                for (dx, dy) in font::pixels(glyph) {
                    display.set(bounds.0 + dx as i32, bounds.1 + dy as i32, color);
                }
            }
        }
    }

    /// Copies the framebuffer into an RGBA8 frame of `Display::WIDTH * Display::HEIGHT` pixels.
    pub fn draw(&self, display: &Display, output_frame: &mut [u8]) {
        for (i, pixel) in output_frame.chunks_exact_mut(4).enumerate() {
            let x = i % Display::WIDTH;
            let y = i / Display::WIDTH;
            let color = display.get(x, y).unwrap_or(self.config.color_off);
            pixel.copy_from_slice(&color.to_rgba());
        }
    }
}
