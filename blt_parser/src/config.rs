// ********* Input data structures ***********

use snafu::Snafu;
use std::fmt::Display;

/// The 1-based number of a candidate, as written in a BLT file.
///
/// Candidate `i` is described by the `i-1`-th entry of [`Election::candidates`].
pub type CandidateId = u32;

/// One ranking pattern and the number of voters who cast it.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Ballot {
    pub(crate) count: u64,
    pub(crate) preferences: Vec<Vec<CandidateId>>,
}

impl Ballot {
    /// The number of voters who cast this exact ranking.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The preference groups, most preferred first.
    ///
    /// A group with a single candidate is a strict preference. A group with
    /// more candidates marks them as ranked equally.
    /// An empty list is an exhausted (abstaining) ballot.
    pub fn preferences(&self) -> &[Vec<CandidateId>] {
        &self.preferences
    }
}

/// An election, as read from a BLT file.
///
/// It cannot be modified once it has been parsed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Election {
    pub(crate) num_candidates: u32,
    pub(crate) num_seats: u32,
    pub(crate) withdrawn: Vec<CandidateId>,
    pub(crate) ballots: Vec<Ballot>,
    pub(crate) candidates: Vec<String>,
    pub(crate) title: String,
}

impl Election {
    /// The number of candidates declared in the header.
    pub fn num_candidates(&self) -> u32 {
        self.num_candidates
    }

    pub fn num_seats(&self) -> u32 {
        self.num_seats
    }

    /// The withdrawn candidates, in the order of the file. Duplicates are kept.
    pub fn withdrawn(&self) -> &[CandidateId] {
        &self.withdrawn
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }

    /// The names of the candidates. The list may be shorter than
    /// `num_candidates` for malformed files.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The title of the election, or an empty string if the file has none.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The total number of voters, summed over all the ballots.
    pub fn total_count(&self) -> u64 {
        self.ballots.iter().map(|b| b.count).sum()
    }
}

// ******** Output data structures *********

/// A ballot in which candidate numbers have been replaced by names.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct NamedBallot {
    pub count: u64,
    pub preferences: Vec<Vec<String>>,
}

/// A named ballot without the boundaries between the preference groups.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct FlatNamedBallot {
    pub count: u64,
    pub preferences: Vec<String>,
}

// ********* Errors **********

/// A location in the input, 1-based.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that abort the parsing of a BLT file.
///
/// No partial election is returned when one of them occurs.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
    #[snafu(display("unexpected end of input at {position}"))]
    EndOfInput { position: Position },

    #[snafu(display("unexpected character '{character}' at {position}"))]
    UnexpectedCharacter { character: char, position: Position },

    #[snafu(display("integer too large at {position}"))]
    IntegerOverflow { position: Position },

    #[snafu(display("invalid UTF-8 sequence at {position}"))]
    InvalidUtf8 { position: Position },

    #[snafu(display("could not read input at {position}"))]
    Io {
        source: std::io::Error,
        position: Position,
    },
}

/// Errors raised when building the views with candidate names.
#[derive(Eq, PartialEq, Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LookupError {
    #[snafu(display(
        "candidate index {index} does not refer to one of the {num_names} candidate names"
    ))]
    InvalidCandidateIndex { index: CandidateId, num_names: usize },
}
