use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ClockError;

pub const COLS: usize = 11;
pub const ROWS: usize = 10;

/// (row, col) of a single letter on the grid.
pub type Cell = (usize, usize);

/// Bernese German letter layout, modelled on the Swiss QLOCKTWO face.
pub const GRID: [[char; COLS]; ROWS] = [
    ['E', 'S', 'K', 'I', 'S', 'C', 'H', 'A', 'F', 'Ü', 'F'],
    ['V', 'I', 'E', 'R', 'T', 'U', 'B', 'F', 'Z', 'Ä', 'Ä'],
    ['Z', 'W', 'Ä', 'N', 'Z', 'G', 'S', 'I', 'V', 'O', 'R'],
    ['A', 'B', 'O', 'H', 'A', 'U', 'B', 'I', 'E', 'G', 'E'],
    ['E', 'I', 'S', 'Z', 'W', 'Ö', 'I', 'S', 'D', 'R', 'Ü'],
    ['V', 'I', 'E', 'R', 'I', 'F', 'Ü', 'F', 'I', 'Q', 'T'],
    ['S', 'Ä', 'C', 'H', 'S', 'I', 'S', 'I', 'B', 'N', 'I'],
    ['A', 'C', 'H', 'T', 'I', 'N', 'Ü', 'N', 'I', 'E', 'L'],
    ['Z', 'Ä', 'N', 'I', 'E', 'R', 'B', 'Ö', 'U', 'F', 'I'],
    ['Z', 'W', 'Ö', 'U', 'F', 'I', 'N', 'A', 'U', 'H', 'R'],
];

/// Inclusive column range of a word within one grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl Span {
    const fn new(row: usize, start: usize, end: usize) -> Self {
        Self { row, start, end }
    }

    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (self.start..=self.end).map(move |col| (self.row, col))
    }

    /// The letters this span covers, or `None` if it leaves the grid.
    pub fn text(self) -> Option<String> {
        if self.row >= ROWS || self.start > self.end || self.end >= COLS {
            return None;
        }
        Some(GRID[self.row][self.start..=self.end].iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Word {
    Es,
    Isch,
    Fuef,
    Zaeae,
    Viert,
    Zwaenzg,
    Vor,
    Ab,
    Haubi,
    Eis,
    Zwoei,
    Drue,
    Vieri,
    Fuefi,
    Saechsi,
    Sibni,
    Achti,
    Nueni,
    Zaeni,
    Oeufi,
    Zwoeufi,
    Uhr,
}

impl Word {
    pub const ALL: [Word; 22] = [
        Word::Es,
        Word::Isch,
        Word::Fuef,
        Word::Zaeae,
        Word::Viert,
        Word::Zwaenzg,
        Word::Vor,
        Word::Ab,
        Word::Haubi,
        Word::Eis,
        Word::Zwoei,
        Word::Drue,
        Word::Vieri,
        Word::Fuefi,
        Word::Saechsi,
        Word::Sibni,
        Word::Achti,
        Word::Nueni,
        Word::Zaeni,
        Word::Oeufi,
        Word::Zwoeufi,
        Word::Uhr,
    ];

    /// The word key, spelled exactly as it appears on the grid.
    pub const fn key(self) -> &'static str {
        match self {
            Word::Es => "ES",
            Word::Isch => "ISCH",
            Word::Fuef => "FÜF",
            Word::Zaeae => "ZÄÄ",
            Word::Viert => "VIERT",
            Word::Zwaenzg => "ZWÄNZG",
            Word::Vor => "VOR",
            Word::Ab => "AB",
            Word::Haubi => "HAUBI",
            Word::Eis => "EIS",
            Word::Zwoei => "ZWÖI",
            Word::Drue => "DRÜ",
            Word::Vieri => "VIERI",
            Word::Fuefi => "FÜFI",
            Word::Saechsi => "SÄCHSI",
            Word::Sibni => "SIBNI",
            Word::Achti => "ACHTI",
            Word::Nueni => "NÜNI",
            Word::Zaeni => "ZÄNI",
            Word::Oeufi => "ÖUFI",
            Word::Zwoeufi => "ZWÖUFI",
            Word::Uhr => "UHR",
        }
    }

    pub const fn span(self) -> Span {
        match self {
            Word::Es => Span::new(0, 0, 1),
            Word::Isch => Span::new(0, 3, 6),
            Word::Fuef => Span::new(0, 8, 10),
            Word::Zaeae => Span::new(1, 8, 10),
            Word::Viert => Span::new(1, 0, 4),
            Word::Zwaenzg => Span::new(2, 0, 5),
            Word::Vor => Span::new(2, 8, 10),
            Word::Ab => Span::new(3, 0, 1),
            Word::Haubi => Span::new(3, 3, 7),
            Word::Eis => Span::new(4, 0, 2),
            Word::Zwoei => Span::new(4, 3, 6),
            Word::Drue => Span::new(4, 8, 10),
            Word::Vieri => Span::new(5, 0, 4),
            Word::Fuefi => Span::new(5, 5, 8),
            Word::Saechsi => Span::new(6, 0, 5),
            Word::Sibni => Span::new(6, 6, 10),
            Word::Achti => Span::new(7, 0, 4),
            Word::Nueni => Span::new(7, 5, 8),
            Word::Zaeni => Span::new(8, 0, 3),
            Word::Oeufi => Span::new(8, 7, 10),
            Word::Zwoeufi => Span::new(9, 0, 5),
            Word::Uhr => Span::new(9, 8, 10),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Word {
    type Err = ClockError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Word::ALL
            .iter()
            .copied()
            .find(|word| word.key() == key)
            .ok_or_else(|| ClockError::UnknownWord(key.to_string()))
    }
}

/// Hour-of-12 words, index 0 is one o'clock.
const HOUR_WORDS: [Word; 12] = [
    Word::Eis,
    Word::Zwoei,
    Word::Drue,
    Word::Vieri,
    Word::Fuefi,
    Word::Saechsi,
    Word::Sibni,
    Word::Achti,
    Word::Nueni,
    Word::Zaeni,
    Word::Oeufi,
    Word::Zwoeufi,
];

pub fn lookup_span(key: &str) -> Result<Span, ClockError> {
    key.parse::<Word>().map(Word::span)
}

/// Union of all cells covered by `words`. Overlapping spans collapse.
pub fn cells_for_words(words: &[Word]) -> BTreeSet<Cell> {
    words.iter().flat_map(|word| word.span().cells()).collect()
}

pub fn hour_word(hour: u32) -> Result<Word, ClockError> {
    match hour {
        1..=12 => Ok(HOUR_WORDS[hour as usize - 1]),
        _ => Err(ClockError::InvalidHour(hour)),
    }
}

pub fn letter(cell: Cell) -> Option<char> {
    GRID.get(cell.0).and_then(|row| row.get(cell.1)).copied()
}

/// Checks that every word's span spells the word on the grid.
///
/// Run once at startup; an error here means the tables are wrong.
pub fn verify() -> Result<(), ClockError> {
    check(Word::ALL.iter().map(|word| (word.key(), word.span())))
}

/// Checks `(key, span)` pairs against the grid. A span leaving the grid reads as "".
fn check(entries: impl IntoIterator<Item = (&'static str, Span)>) -> Result<(), ClockError> {
    for (key, span) in entries {
        let found = span.text().unwrap_or_default();
        if found != key {
            return Err(ClockError::GridMismatch {
                word: key,
                expected: key.to_string(),
                found,
            });
        }
    }
    Ok(())
}
