//! Peg colors
//!
//! The classic palette has six colors. Palette order matters: it fixes the
//! enumeration order of the code universe and therefore the minimax tie-break.

use std::fmt;

/// Number of colors in the palette
pub const PALETTE_SIZE: usize = 6;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

/// Error type for unrecognized peg letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegError(pub char);

impl fmt::Display for PegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown peg color '{}' (expected one of R, G, B, Y, O, P)",
            self.0
        )
    }
}

impl std::error::Error for PegError {}

impl Peg {
    /// Every color, in palette order
    pub const ALL: [Self; PALETTE_SIZE] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
    ];

    /// Position of this color in the palette (0-5)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at a palette position
    ///
    /// Returns `None` if `index >= PALETTE_SIZE`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PALETTE_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// One-letter notation used for parsing and display
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Purple => 'P',
        }
    }

    /// Parse a peg from its one-letter notation (case-insensitive)
    ///
    /// # Errors
    /// Returns `PegError` if the letter is not part of the palette.
    pub const fn from_letter(letter: char) -> Result<Self, PegError> {
        match letter.to_ascii_uppercase() {
            'R' => Ok(Self::Red),
            'G' => Ok(Self::Green),
            'B' => Ok(Self::Blue),
            'Y' => Ok(Self::Yellow),
            'O' => Ok(Self::Orange),
            'P' => Ok(Self::Purple),
            _ => Err(PegError(letter)),
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_order_matches_index() {
        for (i, peg) in Peg::ALL.iter().enumerate() {
            assert_eq!(peg.index(), i);
            assert_eq!(Peg::from_index(i), Some(*peg));
        }
        assert_eq!(Peg::from_index(PALETTE_SIZE), None);
    }

    #[test]
    fn letters_round_trip() {
        for peg in Peg::ALL {
            assert_eq!(Peg::from_letter(peg.letter()), Ok(peg));
        }
    }

    #[test]
    fn lowercase_letters_accepted() {
        assert_eq!(Peg::from_letter('r'), Ok(Peg::Red));
        assert_eq!(Peg::from_letter('p'), Ok(Peg::Purple));
    }

    #[test]
    fn unknown_letter_rejected() {
        assert_eq!(Peg::from_letter('X'), Err(PegError('X')));
        assert_eq!(Peg::from_letter('1'), Err(PegError('1')));
    }
}
