//! Mastermind feedback scoring
//!
//! A score is the `(blacks, whites)` pair returned for a guess:
//! - blacks = pegs with the right color in the right position
//! - whites = further color matches at the remaining positions
//!
//! Each peg of either code is consumed at most once across both counts.

use super::code::{CODE_LENGTH, Code};
use super::peg::PALETTE_SIZE;
use std::fmt;
use std::str::FromStr;

/// Size of a dense score index space (`blacks * 5 + whites`, both 0-4)
pub const SCORE_INDEX_SPACE: usize = (CODE_LENGTH + 1) * (CODE_LENGTH + 1);

/// Feedback for a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    blacks: u8,
    whites: u8,
}

/// Error type for scores that no pair of codes can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    OutOfRange { blacks: u8, whites: u8 },
    Unreachable { blacks: u8, whites: u8 },
    Malformed(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { blacks, whites } => write!(
                f,
                "Score {blacks}B {whites}W exceeds {CODE_LENGTH} pegs in total"
            ),
            Self::Unreachable { blacks, whites } => {
                write!(f, "Score {blacks}B {whites}W can never occur")
            }
            Self::Malformed(input) => write!(f, "Invalid score string: {input}"),
        }
    }
}

impl std::error::Error for ScoreError {}

impl Score {
    /// Exact match: the guess is the secret
    pub const WIN: Self = Self {
        blacks: CODE_LENGTH as u8,
        whites: 0,
    };

    /// Create a validated score
    ///
    /// # Errors
    /// Returns `ScoreError` if `blacks + whites` exceeds the code length, or
    /// for the one in-range pair that cannot occur: all but one peg exact with
    /// the last peg a color-only match.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Score;
    ///
    /// let score = Score::new(2, 1).unwrap();
    /// assert_eq!((score.blacks(), score.whites()), (2, 1));
    ///
    /// assert!(Score::new(3, 2).is_err());
    /// assert!(Score::new(3, 1).is_err());
    /// ```
    pub fn new(blacks: u8, whites: u8) -> Result<Self, ScoreError> {
        let total = usize::from(blacks) + usize::from(whites);
        if total > CODE_LENGTH {
            return Err(ScoreError::OutOfRange { blacks, whites });
        }
        if usize::from(blacks) == CODE_LENGTH - 1 && whites == 1 {
            return Err(ScoreError::Unreachable { blacks, whites });
        }
        Ok(Self { blacks, whites })
    }

    /// Number of exact position matches
    #[inline]
    #[must_use]
    pub const fn blacks(self) -> u8 {
        self.blacks
    }

    /// Number of color-only matches
    #[inline]
    #[must_use]
    pub const fn whites(self) -> u8 {
        self.whites
    }

    /// Check if this score means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.blacks as usize == CODE_LENGTH
    }

    /// Dense index into a `SCORE_INDEX_SPACE`-sized bucket array
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.blacks as usize * (CODE_LENGTH + 1) + self.whites as usize
    }

    /// Score a guess against a candidate secret
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches (blacks), tallying the colors of the
    ///    non-matching positions of each code separately
    /// 2. Second pass: whites = sum over colors of the smaller tally
    ///
    /// The result is symmetric in its arguments.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Score};
    ///
    /// let guess: Code = "RRGG".parse().unwrap();
    /// let secret: Code = "RGBR".parse().unwrap();
    /// let score = Score::evaluate(&guess, &secret);
    ///
    /// // R exact; remaining R and G match by color only
    /// assert_eq!(score, Score::new(1, 2).unwrap());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Code, candidate: &Code) -> Self {
        let mut blacks = 0u8;
        let mut guess_rest = [0u8; PALETTE_SIZE];
        let mut candidate_rest = [0u8; PALETTE_SIZE];

        for (g, c) in guess.pegs().iter().zip(candidate.pegs()) {
            if g == c {
                blacks += 1;
            } else {
                guess_rest[g.index()] += 1;
                candidate_rest[c.index()] += 1;
            }
        }

        let whites = guess_rest
            .iter()
            .zip(&candidate_rest)
            .map(|(&g, &c)| g.min(c))
            .sum();

        Self { blacks, whites }
    }

    /// Parse a score from user input
    ///
    /// Accepts:
    /// - digit pairs: `"21"`, `"2,1"`, `"2 1"`
    /// - peg notation: `"BBW"` (`B`/`b` black, `W`/`w` white, `-`/`_` ignored)
    /// - `"win"` for an exact match
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Score;
    ///
    /// let digits = Score::parse("2,1").unwrap();
    /// let pegs = Score::parse("BBW").unwrap();
    /// assert_eq!(digits, pegs);
    /// assert_eq!(Score::parse("win").unwrap(), Score::WIN);
    /// ```
    ///
    /// # Errors
    /// Returns `ScoreError` for malformed input or impossible scores.
    pub fn parse(input: &str) -> Result<Self, ScoreError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ScoreError::Malformed(String::new()));
        }
        if trimmed.eq_ignore_ascii_case("win") {
            return Ok(Self::WIN);
        }

        let digits: Vec<u32> = trimmed
            .chars()
            .filter(|c| !matches!(c, ',' | ' '))
            .map(|c| c.to_digit(10))
            .collect::<Option<_>>()
            .unwrap_or_default();

        if let &[blacks, whites] = digits.as_slice() {
            return Self::new(blacks as u8, whites as u8);
        }

        let mut blacks = 0u8;
        let mut whites = 0u8;
        for c in trimmed.chars() {
            match c {
                'B' | 'b' => blacks = blacks.saturating_add(1),
                'W' | 'w' => whites = whites.saturating_add(1),
                '-' | '_' | ' ' => {}
                _ => return Err(ScoreError::Malformed(trimmed.to_string())),
            }
        }

        Self::new(blacks, whites)
    }
}

impl FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}W", self.blacks, self.whites)
    }
}
