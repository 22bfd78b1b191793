use log::{debug, warn};
use snafu::prelude::*;
use std::io::BufRead;

use crate::config::*;
use crate::scanner::Scanner;

/// Reads a complete election, section after section.
///
/// The sections come in a fixed order: header, withdrawn candidates,
/// ballots, candidate names and title. The first error aborts the parsing.
pub(crate) fn read_election<R: BufRead>(scanner: &mut Scanner<R>) -> Result<Election, ParseError> {
    let num_candidates = scanner.read_u32()?;
    let num_seats = scanner.read_u32()?;
    debug!(
        "read_election: num_candidates: {:?} num_seats: {:?}",
        num_candidates, num_seats
    );

    let withdrawn = read_withdrawn(scanner)?;
    debug!("read_election: withdrawn: {:?}", withdrawn);

    let ballots = read_ballots(scanner)?;
    debug!("read_election: {:?} ballots", ballots.len());

    let candidates = read_candidates(scanner, num_candidates)?;
    if candidates.len() != num_candidates as usize {
        warn!(
            "read_election: {} candidates declared but {} names found",
            num_candidates,
            candidates.len()
        );
    }

    let title = read_title(scanner)?;
    debug!("read_election: title: {:?}", title);

    if !scanner.at_end()? {
        warn!(
            "read_election: ignoring the content after the title at {}",
            scanner.position()
        );
    }

    Ok(Election {
        num_candidates,
        num_seats,
        withdrawn,
        ballots,
        candidates,
        title,
    })
}

// Withdrawn candidates are written as negative numbers before the ballots.
fn read_withdrawn<R: BufRead>(scanner: &mut Scanner<R>) -> Result<Vec<CandidateId>, ParseError> {
    let mut withdrawn: Vec<CandidateId> = Vec::new();
    while scanner.eat('-')? {
        withdrawn.push(scanner.read_u32()?);
    }
    Ok(withdrawn)
}

// The list of ballot lines, closed by a line with a single 0.
//
// The first number of each line is read here: a 0 closes the whole list,
// any other value is the count of the ballot that follows.
fn read_ballots<R: BufRead>(scanner: &mut Scanner<R>) -> Result<Vec<Ballot>, ParseError> {
    let mut ballots: Vec<Ballot> = Vec::new();
    loop {
        match scanner.read_int()? {
            0 => break,
            count => ballots.push(read_ballot(scanner, count)?),
        }
    }
    Ok(ballots)
}

// Whether the next preference starts a new group or joins the current one.
enum GroupState {
    AwaitingValue,
    // The last value was followed by '=': the next one is ranked equally.
    Tied(Vec<CandidateId>),
}

// The preferences of one ballot line, after its count, up to and including the closing 0.
fn read_ballot<R: BufRead>(scanner: &mut Scanner<R>, count: u64) -> Result<Ballot, ParseError> {
    let mut preferences: Vec<Vec<CandidateId>> = Vec::new();
    let mut state = GroupState::AwaitingValue;
    loop {
        let value = scanner.read_u32()?;
        if value == 0 {
            if let GroupState::Tied(group) = state {
                preferences.push(group);
            }
            break;
        }
        let mut group = match state {
            GroupState::Tied(group) => group,
            GroupState::AwaitingValue => Vec::new(),
        };
        group.push(value);
        state = if scanner.eat('=')? {
            GroupState::Tied(group)
        } else {
            preferences.push(group);
            GroupState::AwaitingValue
        };
    }
    Ok(Ballot { count, preferences })
}

// One quoted name per declared candidate.
//
// The names are mandatory: the input cannot end before all of them are read.
// The list stops early at the first slot that does not start with a quote.
fn read_candidates<R: BufRead>(
    scanner: &mut Scanner<R>,
    num_candidates: u32,
) -> Result<Vec<String>, ParseError> {
    let mut names: Vec<String> = Vec::new();
    for _ in 0..num_candidates {
        match scanner.peek()? {
            Some('"') => {
                scanner.next_char()?;
                names.push(scanner.read_quoted()?);
            }
            Some(_) => break,
            None => {
                return EndOfInputSnafu {
                    position: scanner.position(),
                }
                .fail()
            }
        }
    }
    Ok(names)
}

fn read_title<R: BufRead>(scanner: &mut Scanner<R>) -> Result<String, ParseError> {
    if scanner.eat('"')? {
        scanner.read_quoted()
    } else {
        Ok(String::new())
    }
}
