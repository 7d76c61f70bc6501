//! Time-to-words translation for the Bernese face.
//!
//! Minutes are read in five-minute intervals. Up to :24 the phrase names the
//! current hour ("füf ab sibni"); from :25 on it names the coming hour, using
//! the half-hour idiom where "haubi achti" is 7:30.

use std::collections::BTreeSet;

use crate::error::ClockError;
use crate::grid::{self, Cell, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Word(Word),
    Hour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HourRef {
    Current,
    Next,
}

struct Template {
    hour: HourRef,
    slots: &'static [Slot],
}

use Slot::{Hour as H, Word as W};

/// Phrase for each interval (`minute / 5`), after "ES ISCH".
const TEMPLATES: [Template; 12] = [
    // :00
    Template {
        hour: HourRef::Current,
        slots: &[H, W(Word::Uhr)],
    },
    // :05
    Template {
        hour: HourRef::Current,
        slots: &[W(Word::Fuef), W(Word::Ab), H],
    },
    // :10
    Template {
        hour: HourRef::Current,
        slots: &[W(Word::Zaeae), W(Word::Ab), H],
    },
    // :15
    Template {
        hour: HourRef::Current,
        slots: &[W(Word::Viert), W(Word::Ab), H],
    },
    // :20
    Template {
        hour: HourRef::Current,
        slots: &[W(Word::Zwaenzg), W(Word::Ab), H],
    },
    // :25
    Template {
        hour: HourRef::Next,
        slots: &[W(Word::Fuef), W(Word::Vor), W(Word::Haubi), H],
    },
    // :30
    Template {
        hour: HourRef::Next,
        slots: &[W(Word::Haubi), H],
    },
    // :35
    Template {
        hour: HourRef::Next,
        slots: &[W(Word::Fuef), W(Word::Ab), W(Word::Haubi), H],
    },
    // :40
    Template {
        hour: HourRef::Next,
        slots: &[W(Word::Zwaenzg), W(Word::Vor), H],
    },
    // :45
    Template {
        hour: HourRef::Next,
        slots: &[W(Word::Viert), W(Word::Vor), H],
    },
    // :50
    Template {
        hour: HourRef::Next,
        slots: &[W(Word::Zaeae), W(Word::Vor), H],
    },
    // :55
    Template {
        hour: HourRef::Next,
        slots: &[W(Word::Fuef), W(Word::Vor), H],
    },
];

/// Words to light and the number of minute dots (0-4) for one time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub words: Vec<Word>,
    pub dots: u8,
}

impl Translation {
    pub fn cells(&self) -> BTreeSet<Cell> {
        grid::cells_for_words(&self.words)
    }

    /// Space separated word keys, e.g. `ES ISCH HAUBI ACHTI`.
    pub fn phrase(&self) -> String {
        self.words
            .iter()
            .map(|word| word.key())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 24-hour to 1-12.
fn to_hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn next_hour12(hour12: u32) -> u32 {
    if hour12 >= 12 {
        1
    } else {
        hour12 + 1
    }
}

pub fn translate(hour: u32, minute: u32) -> Result<Translation, ClockError> {
    if hour > 23 || minute > 59 {
        return Err(ClockError::InvalidTime { hour, minute });
    }

    let hour12 = to_hour12(hour);
    let interval = (minute / 5) as usize;
    let dots = (minute % 5) as u8;

    let template = &TEMPLATES[interval];
    let hour_word = grid::hour_word(match template.hour {
        HourRef::Current => hour12,
        HourRef::Next => next_hour12(hour12),
    })?;

    let mut words = Vec::with_capacity(2 + template.slots.len());
    words.push(Word::Es);
    words.push(Word::Isch);
    words.extend(template.slots.iter().map(|slot| match slot {
        Slot::Word(word) => *word,
        Slot::Hour => hour_word,
    }));

    Ok(Translation { words, dots })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Word::*;

    fn words(hour: u32, minute: u32) -> Vec<Word> {
        translate(hour, minute).unwrap().words
    }

    /// The hour word of a phrase, skipping a trailing "UHR".
    fn hour_of(hour: u32, minute: u32) -> Word {
        let words = words(hour, minute);
        match words[words.len() - 1] {
            Uhr => words[words.len() - 2],
            last => last,
        }
    }

    fn all_times() -> impl Iterator<Item = (u32, u32)> {
        (0..24).flat_map(|h| (0..60).map(move |m| (h, m)))
    }

    #[test]
    fn test_literal_scenarios() {
        let cases: [(u32, u32, &[Word], u8); 5] = [
            (7, 0, &[Es, Isch, Sibni, Uhr], 0),
            (7, 5, &[Es, Isch, Fuef, Ab, Sibni], 0),
            (7, 25, &[Es, Isch, Fuef, Vor, Haubi, Achti], 0),
            (7, 47, &[Es, Isch, Viert, Vor, Achti], 2),
            (0, 0, &[Es, Isch, Zwoeufi, Uhr], 0),
        ];
        for (hour, minute, expected, dots) in cases {
            let translation = translate(hour, minute).unwrap();
            assert_eq!(translation.words, expected, "{hour:02}:{minute:02}");
            assert_eq!(translation.dots, dots, "{hour:02}:{minute:02}");
        }
    }

    #[test]
    fn test_every_interval_of_seven() {
        let expected: [&str; 12] = [
            "ES ISCH SIBNI UHR",
            "ES ISCH FÜF AB SIBNI",
            "ES ISCH ZÄÄ AB SIBNI",
            "ES ISCH VIERT AB SIBNI",
            "ES ISCH ZWÄNZG AB SIBNI",
            "ES ISCH FÜF VOR HAUBI ACHTI",
            "ES ISCH HAUBI ACHTI",
            "ES ISCH FÜF AB HAUBI ACHTI",
            "ES ISCH ZWÄNZG VOR ACHTI",
            "ES ISCH VIERT VOR ACHTI",
            "ES ISCH ZÄÄ VOR ACHTI",
            "ES ISCH FÜF VOR ACHTI",
        ];
        for (interval, phrase) in expected.iter().enumerate() {
            for offset in 0..5 {
                let minute = interval as u32 * 5 + offset;
                assert_eq!(translate(7, minute).unwrap().phrase(), *phrase, "07:{minute:02}");
            }
        }
    }

    #[test]
    fn test_word_count_per_interval() {
        let counts = [4, 5, 5, 5, 5, 6, 4, 6, 5, 5, 5, 5];
        for (interval, count) in counts.iter().enumerate() {
            assert_eq!(words(3, interval as u32 * 5).len(), *count, "interval {interval}");
        }
    }

    #[test]
    fn test_es_isch_always_first() {
        for (hour, minute) in all_times() {
            assert_eq!(words(hour, minute)[..2], [Es, Isch], "{hour:02}:{minute:02}");
        }
    }

    #[test]
    fn test_dots_follow_minute() {
        for (hour, minute) in all_times() {
            let dots = translate(hour, minute).unwrap().dots;
            assert_eq!(u32::from(dots), minute % 5);
            assert!(dots <= 4);
            assert_eq!(dots == 0, minute % 5 == 0);
        }
    }

    #[test]
    fn test_exactly_one_hour_word() {
        for (hour, minute) in all_times() {
            let count = words(hour, minute)
                .iter()
                .filter(|w| (1..=12).any(|h| grid::hour_word(h).unwrap() == **w))
                .count();
            assert_eq!(count, 1, "{hour:02}:{minute:02}");
        }
    }

    #[test]
    fn test_uhr_only_on_the_hour() {
        for (hour, minute) in all_times() {
            let words = words(hour, minute);
            assert_eq!(words.contains(&Uhr), minute < 5, "{hour:02}:{minute:02}");
            if minute < 5 {
                assert_eq!(words.last(), Some(&Uhr));
            }
        }
    }

    #[test]
    fn test_hour_wraparound() {
        assert_eq!(words(0, 0), [Es, Isch, Zwoeufi, Uhr]);
        assert_eq!(words(12, 0), [Es, Isch, Zwoeufi, Uhr]);
        assert_eq!(words(23, 0), [Es, Isch, Oeufi, Uhr]);
        assert_eq!(words(13, 0), [Es, Isch, Eis, Uhr]);
        assert_eq!(words(14, 0), [Es, Isch, Zwoei, Uhr]);
    }

    #[test]
    fn test_next_hour_boundary() {
        assert_eq!(hour_of(7, 24), Sibni);
        assert_eq!(hour_of(7, 25), Achti);
        assert_eq!(hour_of(19, 24), Sibni);
        assert_eq!(hour_of(19, 25), Achti);
    }

    #[test]
    fn test_twelve_wraps_to_one() {
        for minute in 25..60 {
            assert_eq!(hour_of(12, minute), Eis, "12:{minute:02}");
            assert_eq!(hour_of(0, minute), Eis, "00:{minute:02}");
        }
        for minute in 0..25 {
            assert_eq!(hour_of(12, minute), Zwoeufi, "12:{minute:02}");
        }
        assert_eq!(hour_of(11, 30), Zwoeufi);
        assert_eq!(hour_of(23, 55), Zwoeufi);
    }

    #[test]
    fn test_twelve_hour_clock_repeats() {
        for hour in 0..12 {
            for minute in 0..60 {
                assert_eq!(translate(hour, minute), translate(hour + 12, minute));
            }
        }
    }

    #[test]
    fn test_translate_is_pure() {
        for (hour, minute) in all_times() {
            assert_eq!(translate(hour, minute), translate(hour, minute));
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            translate(24, 0),
            Err(ClockError::InvalidTime { hour: 24, minute: 0 })
        );
        assert_eq!(
            translate(0, 60),
            Err(ClockError::InvalidTime { hour: 0, minute: 60 })
        );
        assert!(translate(u32::MAX, u32::MAX).is_err());
        assert!(translate(23, 59).is_ok());
    }

    #[test]
    fn test_cells_match_words() {
        let translation = translate(7, 30).unwrap();
        let expected = grid::cells_for_words(&[Es, Isch, Haubi, Achti]);
        assert_eq!(translation.cells(), expected);
        assert_eq!(translation.cells().len(), 2 + 4 + 5 + 5);
    }
}
