//! 5x5 bitmap font covering every letter on the face.
//!
//! Each glyph is five rows; bit 4 of a row is the leftmost pixel.

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 5;

pub type Glyph = [u8; GLYPH_HEIGHT];

const BLANK: Glyph = [0b00000; GLYPH_HEIGHT];

pub fn glyph(ch: char) -> Glyph {
    let upper = ch.to_uppercase().next().unwrap_or(ch);
    match upper {
        'A' => [0b01110, 0b10001, 0b11111, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b11110],
        'C' => [0b01111, 0b10000, 0b10000, 0b10000, 0b01111],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000],
        'G' => [0b01111, 0b10000, 0b10011, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b11100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b11110, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'Y' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        // umlauts trade the top row for the two dots
        'Ä' => [0b10001, 0b01110, 0b10001, 0b11111, 0b10001],
        'Ö' => [0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        'Ü' => [0b10001, 0b00000, 0b10001, 0b10001, 0b01110],
        _ => BLANK,
    }
}

/// Offsets `(dx, dy)` of the set pixels of a glyph.
pub fn pixels(glyph: Glyph) -> impl Iterator<Item = (usize, usize)> {
    (0..GLYPH_HEIGHT).flat_map(move |dy| {
        (0..GLYPH_WIDTH)
            .filter(move |dx| glyph[dy] & (0b10000 >> dx) != 0)
            .map(move |dx| (dx, dy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID;

    #[test]
    fn test_every_grid_letter_has_a_glyph() {
        for ch in GRID.iter().flatten() {
            assert_ne!(glyph(*ch), BLANK, "{ch}");
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('ü'), glyph('Ü'));
    }

    #[test]
    fn test_unknown_is_blank() {
        assert_eq!(glyph(' '), BLANK);
        assert_eq!(glyph('7'), BLANK);
        assert_eq!(pixels(glyph('?')).count(), 0);
    }

    #[test]
    fn test_glyph_rows_fit_width() {
        for ch in ('A'..='Z').chain(['Ä', 'Ö', 'Ü']) {
            assert!(glyph(ch).iter().all(|row| *row < 1 << GLYPH_WIDTH), "{ch}");
        }
    }

    #[test]
    fn test_pixels() {
        let t: Vec<_> = pixels(glyph('T')).collect();
        assert_eq!(t.len(), 5 + 4);
        assert_eq!(&t[..5], &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert!(t[5..].iter().all(|&(dx, _)| dx == 2));
        assert_eq!(pixels(glyph('E')).count(), 5 + 1 + 4 + 1 + 5);
    }
}
