use std::str::FromStr;

use crate::error::ClockError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Scales each channel by `percent` (clamped to 0-100).
    pub fn scaled(self, percent: u8) -> Self {
        let percent = u16::from(percent.min(100));
        let scale = |c: u8| (u16::from(c) * percent / 100) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

const NAMED: [(&str, Rgb); 8] = [
    ("white", Rgb::new(255, 255, 255)),
    ("warm", Rgb::new(255, 200, 150)),
    ("cool", Rgb::new(200, 220, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("orange", Rgb::new(255, 140, 0)),
    ("yellow", Rgb::new(255, 255, 0)),
];

impl FromStr for Rgb {
    type Err = ClockError;

    /// Accepts a colour name or `RRGGBB` hex, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some((_, rgb)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*rgb);
        }

        let hex = lower.strip_prefix('#').unwrap_or(&lower);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ClockError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ClockError::InvalidColor(s.to_string()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}
