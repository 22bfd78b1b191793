/*!
Reader for election files in the BLT format.

The BLT format is the plain-text format used by most programs that count
Single Transferable Vote (STV) elections. It lists the number of candidates
and seats, the withdrawn candidates, the ballots with their counts and
rankings, the names of the candidates and an optional title.

```
use blt_parser::parse_str;

let election = parse_str("3 1\n2 1 2=3 0\n0\n\"Anna\" \"Bob\" \"Clara\"\n\"Club\"\n")?;

assert_eq!(election.num_seats(), 1);
assert_eq!(election.ballots()[0].preferences(), &[vec![1], vec![2, 3]]);
assert_eq!(election.flat_named_ballots()?[0].preferences, vec!["Anna", "Bob", "Clara"]);
assert_eq!(election.title(), "Club");
# Ok::<(), Box<dyn std::error::Error>>(())
```

See the [manual] for a description of the format.
*/

mod config;
mod lexer;
pub mod manual;
mod parser;
mod scanner;
mod views;

use log::info;
use std::io::{BufReader, Read};
use std::str::FromStr;

pub use crate::config::*;

/// Parses a complete BLT file from the given reader.
///
/// The whole input is consumed. Either the full election is returned, or
/// the first error that was encountered.
pub fn parse<R: Read>(reader: R) -> Result<Election, ParseError> {
    let mut scanner = scanner::Scanner::new(BufReader::new(reader));
    let election = parser::read_election(&mut scanner)?;
    info!(
        "Parsed election {:?}: {} candidates, {} seats, {} ballots",
        election.title(),
        election.num_candidates(),
        election.num_seats(),
        election.ballots().len()
    );
    Ok(election)
}

/// Parses a complete BLT file held in memory.
pub fn parse_str(s: &str) -> Result<Election, ParseError> {
    parse(s.as_bytes())
}

impl FromStr for Election {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Election, ParseError> {
        parse_str(s)
    }
}
