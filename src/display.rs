use crate::color::Rgb;

/// Framebuffer of the 64x64 RGB LED panel.
pub struct Display {
    pub pixels: [[Rgb; Self::WIDTH]; Self::HEIGHT],
}

impl Display {
    pub const WIDTH: usize = 64;
    pub const HEIGHT: usize = 64;

    pub fn new() -> Self {
        Self {
            pixels: [[Rgb::BLACK; Self::WIDTH]; Self::HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.fill(Rgb::BLACK);
    }

    pub fn fill(&mut self, color: Rgb) {
        for row in self.pixels.iter_mut() {
            for pixel in row.iter_mut() {
                *pixel = color;
            }
        }
    }

    /// Sets one pixel; coordinates off the panel are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *pixel = color;
        }
    }

    /// Fills the inclusive rectangle `(x0, y0)..=(x1, y1)`, clipped to the panel.
    pub fn fill_rect(&mut self, (x0, y0, x1, y1): (i32, i32, i32, i32), color: Rgb) {
        for y in y0.max(0)..=y1.min(Self::HEIGHT as i32 - 1) {
            for x in x0.max(0)..=x1.min(Self::WIDTH as i32 - 1) {
                self.pixels[y as usize][x as usize] = color;
            }
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    #[cfg(test)]
    pub(crate) fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .flatten()
            .filter(|pixel| **pixel != Rgb::BLACK)
            .count()
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
