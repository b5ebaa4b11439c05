//! Fixed-shape patterns and line matching
//!
//! A line is encoded relative to the evaluated player: own stones become `2`,
//! opponent stones `1`, empty cells `0`. Templates use the same encoding.

use crate::board::Cell;

const OWN: u8 = 2;
const OPP: u8 = 1;
const EMPTY: u8 = 0;

/// Recognized shapes, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `OOOOO`
    Five,
    /// `_OOOO_`
    OpenFour,
    /// `OOOO`
    Four,
    /// `_OOO_`
    OpenThree,
    /// `OOO`
    Three,
    /// `_OO_`
    OpenTwo,
    /// `OO`
    Two,
}

impl Pattern {
    /// All patterns in matching priority order
    pub const PRIORITY: [Pattern; 7] = [
        Pattern::Five,
        Pattern::OpenFour,
        Pattern::Four,
        Pattern::OpenThree,
        Pattern::Three,
        Pattern::OpenTwo,
        Pattern::Two,
    ];

    /// Encoded template with own stones as `2`
    pub fn template(self) -> &'static [u8] {
        match self {
            Pattern::Five => &[OWN, OWN, OWN, OWN, OWN],
            Pattern::OpenFour => &[EMPTY, OWN, OWN, OWN, OWN, EMPTY],
            Pattern::Four => &[OWN, OWN, OWN, OWN],
            Pattern::OpenThree => &[EMPTY, OWN, OWN, OWN, EMPTY],
            Pattern::Three => &[OWN, OWN, OWN],
            Pattern::OpenTwo => &[EMPTY, OWN, OWN, EMPTY],
            Pattern::Two => &[OWN, OWN],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Five => "five",
            Pattern::OpenFour => "open_four",
            Pattern::Four => "four",
            Pattern::OpenThree => "open_three",
            Pattern::Three => "three",
            Pattern::OpenTwo => "open_two",
            Pattern::Two => "two",
        }
    }
}

/// Encode a line from `player`'s point of view.
pub fn encode(line: &[Cell], player: Cell) -> Vec<u8> {
    line.iter()
        .map(|&cell| {
            if cell == Cell::Empty {
                EMPTY
            } else if cell == player {
                OWN
            } else {
                OPP
            }
        })
        .collect()
}

/// True iff `template` occurs contiguously in `encoded`.
#[inline]
pub fn matches(encoded: &[u8], template: &[u8]) -> bool {
    encoded.len() >= template.len() && encoded.windows(template.len()).any(|w| w == template)
}

/// Highest-priority pattern `player` has on this line, if any.
pub fn first_match(line: &[Cell], player: Cell) -> Option<Pattern> {
    let encoded = encode(line, player);
    Pattern::PRIORITY
        .into_iter()
        .find(|pattern| matches(&encoded, pattern.template()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell::{Empty as E, Max as X, Min as O};

    #[test]
    fn test_encode_is_relative_to_player() {
        let line = [E, X, O];
        assert_eq!(encode(&line, X), vec![0, 2, 1]);
        assert_eq!(encode(&line, O), vec![0, 1, 2]);
    }

    #[test]
    fn test_matches_contiguous_only() {
        assert!(matches(&[1, 2, 2, 0], &[2, 2]));
        assert!(!matches(&[2, 1, 2], &[2, 2]));
        assert!(!matches(&[2], &[2, 2]));
    }

    #[test]
    fn test_open_four_beats_four_and_three() {
        assert_eq!(first_match(&[E, X, X, X, X, E], X), Some(Pattern::OpenFour));
    }

    #[test]
    fn test_blocked_four_is_four() {
        assert_eq!(first_match(&[O, X, X, X, X, E], X), Some(Pattern::Four));
        assert_eq!(first_match(&[X, X, X, X, E, E], X), Some(Pattern::Four));
    }

    #[test]
    fn test_open_and_closed_shapes() {
        assert_eq!(first_match(&[E, O, O, O, E, X], O), Some(Pattern::OpenThree));
        assert_eq!(first_match(&[X, O, O, O, E, E], O), Some(Pattern::Three));
        assert_eq!(first_match(&[E, E, O, O, E, E], O), Some(Pattern::OpenTwo));
        assert_eq!(first_match(&[O, O, X, E, E, E], O), Some(Pattern::Two));
    }

    #[test]
    fn test_five_has_top_priority() {
        assert_eq!(first_match(&[E, X, X, X, X, X, E], X), Some(Pattern::Five));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_match(&[X, E, X, E, X, E], X), None);
        assert_eq!(first_match(&[O, O, O, E, E, E], X), None);
        assert_eq!(first_match(&[X], X), None);
    }

    #[test]
    fn test_priority_order_is_strongest_first() {
        let lengths: Vec<usize> = Pattern::PRIORITY.iter().map(|p| p.template().len()).collect();
        assert_eq!(lengths, vec![5, 6, 4, 5, 3, 4, 2]);
        assert_eq!(Pattern::PRIORITY[0].name(), "five");
    }
}
