//! Mastermind code representation
//!
//! A Code is an ordered sequence of exactly four pegs. Duplicates are allowed.

use super::peg::{PALETTE_SIZE, Peg, PegError};
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// Total number of distinct codes (6^4 = 1296)
pub const UNIVERSE_SIZE: usize = PALETTE_SIZE.pow(CODE_LENGTH as u32);

/// A 4-peg Mastermind code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([Peg; CODE_LENGTH]);

/// Error type for invalid code strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidPeg(PegError),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} pegs, got {len}")
            }
            Self::InvalidPeg(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl From<PegError> for CodeError {
    fn from(e: PegError) -> Self {
        Self::InvalidPeg(e)
    }
}

impl Code {
    /// Create a code from its pegs
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Peg; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// Get the pegs of this code
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Peg; CODE_LENGTH] {
        &self.0
    }

    /// Position of this code in the universe enumeration
    ///
    /// Base-6 number with the first peg as the most significant digit, so
    /// `RRRR` is 0 and `PPPP` is 1295.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, peg| acc * PALETTE_SIZE + peg.index())
    }

    /// Code at a universe position
    ///
    /// Returns `None` if `index >= UNIVERSE_SIZE`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= UNIVERSE_SIZE {
            return None;
        }

        let mut pegs = [Peg::Red; CODE_LENGTH];
        let mut rest = index;
        for slot in pegs.iter_mut().rev() {
            *slot = Peg::from_index(rest % PALETTE_SIZE)?;
            rest /= PALETTE_SIZE;
        }

        Some(Self(pegs))
    }

    /// Per-color peg counts, indexed by palette position
    #[inline]
    pub(crate) fn color_counts(&self) -> [u8; PALETTE_SIZE] {
        let mut counts = [0u8; PALETTE_SIZE];
        for peg in &self.0 {
            counts[peg.index()] += 1;
        }
        counts
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a code from peg letters, e.g. `"RRGG"` or `"rgby"`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Peg};
    ///
    /// let code: Code = "RRGB".parse().unwrap();
    /// assert_eq!(code.pegs(), &[Peg::Red, Peg::Red, Peg::Green, Peg::Blue]);
    ///
    /// assert!("RRG".parse::<Code>().is_err());
    /// assert!("RRGX".parse::<Code>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.trim().chars().collect();

        if letters.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(letters.len()));
        }

        let mut pegs = [Peg::Red; CODE_LENGTH];
        for (slot, &letter) in pegs.iter_mut().zip(&letters) {
            *slot = Peg::from_letter(letter)?;
        }

        Ok(Self(pegs))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_code() {
        let code: Code = "RGBY".parse().unwrap();
        assert_eq!(
            code.pegs(),
            &[Peg::Red, Peg::Green, Peg::Blue, Peg::Yellow]
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        let upper: Code = "OPRG".parse().unwrap();
        let lower: Code = "oprg".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!("RGB".parse::<Code>(), Err(CodeError::InvalidLength(3)));
        assert_eq!("RGBYO".parse::<Code>(), Err(CodeError::InvalidLength(5)));
        assert_eq!("".parse::<Code>(), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn parse_invalid_peg() {
        assert_eq!(
            "RGBZ".parse::<Code>(),
            Err(CodeError::InvalidPeg(PegError('Z')))
        );
    }

    #[test]
    fn display_uses_letters() {
        let code = Code::new([Peg::Purple, Peg::Orange, Peg::Red, Peg::Red]);
        assert_eq!(code.to_string(), "PORR");
    }

    #[test]
    fn index_bounds() {
        assert_eq!("RRRR".parse::<Code>().unwrap().index(), 0);
        assert_eq!("RRRG".parse::<Code>().unwrap().index(), 1);
        assert_eq!("GRRR".parse::<Code>().unwrap().index(), 216);
        assert_eq!("PPPP".parse::<Code>().unwrap().index(), UNIVERSE_SIZE - 1);
        assert_eq!(Code::from_index(UNIVERSE_SIZE), None);
    }

    #[test]
    fn index_inverts_from_index() {
        for i in [0, 7, 215, 216, 777, 1295] {
            assert_eq!(Code::from_index(i).unwrap().index(), i);
        }
    }

    #[test]
    fn color_counts_with_duplicates() {
        let code: Code = "RRGR".parse().unwrap();
        let counts = code.color_counts();
        assert_eq!(counts[Peg::Red.index()], 3);
        assert_eq!(counts[Peg::Green.index()], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 4);
    }
}
