// Views of an election with the names of the candidates instead of their numbers.

use snafu::prelude::*;

use crate::config::*;

fn lookup(candidates: &[String], index: CandidateId) -> Result<String, LookupError> {
    let num_names = candidates.len();
    (index as usize)
        .checked_sub(1)
        .and_then(|idx| candidates.get(idx))
        .cloned()
        .context(InvalidCandidateIndexSnafu { index, num_names })
}

fn lookup_all(candidates: &[String], group: &[CandidateId]) -> Result<Vec<String>, LookupError> {
    group.iter().map(|cid| lookup(candidates, *cid)).collect()
}

impl Ballot {
    /// The same ballot, with the names of the candidates.
    ///
    /// The groups of equally ranked candidates are preserved.
    pub fn named(&self, candidates: &[String]) -> Result<NamedBallot, LookupError> {
        let preferences = self
            .preferences
            .iter()
            .map(|group| lookup_all(candidates, group))
            .collect::<Result<Vec<Vec<String>>, LookupError>>()?;
        Ok(NamedBallot {
            count: self.count,
            preferences,
        })
    }

    /// The names of all the ranked candidates, in order, without the information about ties.
    pub fn flat_named(&self, candidates: &[String]) -> Result<FlatNamedBallot, LookupError> {
        let mut preferences: Vec<String> = Vec::new();
        for group in self.preferences.iter() {
            preferences.extend(lookup_all(candidates, group)?);
        }
        Ok(FlatNamedBallot {
            count: self.count,
            preferences,
        })
    }
}

impl Election {
    pub fn named_withdrawn(&self) -> Result<Vec<String>, LookupError> {
        lookup_all(&self.candidates, &self.withdrawn)
    }

    pub fn named_ballots(&self) -> Result<Vec<NamedBallot>, LookupError> {
        self.ballots
            .iter()
            .map(|b| b.named(&self.candidates))
            .collect()
    }

    pub fn flat_named_ballots(&self) -> Result<Vec<FlatNamedBallot>, LookupError> {
        self.ballots
            .iter()
            .map(|b| b.flat_named(&self.candidates))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["Anna".to_string(), "Bob".to_string(), "Clara".to_string()]
    }

    fn election(withdrawn: Vec<CandidateId>, ballots: Vec<Ballot>) -> Election {
        Election {
            num_candidates: 3,
            num_seats: 1,
            withdrawn,
            ballots,
            candidates: names(),
            title: "".to_string(),
        }
    }

    #[test]
    fn named_ballot_keeps_groups() {
        let b = Ballot {
            count: 5,
            preferences: vec![vec![2, 3], vec![1]],
        };
        assert_eq!(
            b.named(&names()).unwrap(),
            NamedBallot {
                count: 5,
                preferences: vec![
                    vec!["Bob".to_string(), "Clara".to_string()],
                    vec!["Anna".to_string()]
                ],
            }
        );
    }

    #[test]
    fn flat_ballot_is_the_concatenation_of_groups() {
        let b = Ballot {
            count: 5,
            preferences: vec![vec![3], vec![2, 1]],
        };
        let named = b.named(&names()).unwrap();
        let flat = b.flat_named(&names()).unwrap();
        assert_eq!(flat.count, named.count);
        assert_eq!(flat.preferences, named.preferences.concat());
        assert_eq!(flat.preferences, vec!["Clara", "Bob", "Anna"]);
    }

    #[test]
    fn empty_ballot() {
        let b = Ballot {
            count: 2,
            preferences: vec![],
        };
        assert!(b.named(&names()).unwrap().preferences.is_empty());
        assert!(b.flat_named(&names()).unwrap().preferences.is_empty());
    }

    #[test]
    fn election_views() {
        let e = election(
            vec![3, 3],
            vec![
                Ballot {
                    count: 1,
                    preferences: vec![vec![1], vec![2]],
                },
                Ballot {
                    count: 4,
                    preferences: vec![vec![1, 2]],
                },
            ],
        );
        assert_eq!(e.named_withdrawn().unwrap(), vec!["Clara", "Clara"]);
        let named = e.named_ballots().unwrap();
        let flat = e.flat_named_ballots().unwrap();
        assert_eq!(named.len(), 2);
        assert_eq!(flat.len(), 2);
        assert_eq!(named[1].preferences, vec![vec!["Anna", "Bob"]]);
        assert_eq!(flat[1].preferences, vec!["Anna", "Bob"]);
        assert_eq!(flat[1].count, 4);
    }

    #[test]
    fn out_of_range_indices() {
        let e = election(vec![4], vec![]);
        assert_eq!(
            e.named_withdrawn(),
            Err(LookupError::InvalidCandidateIndex {
                index: 4,
                num_names: 3
            })
        );
        let e = election(vec![0], vec![]);
        assert_eq!(
            e.named_withdrawn(),
            Err(LookupError::InvalidCandidateIndex {
                index: 0,
                num_names: 3
            })
        );
        let e = election(
            vec![],
            vec![Ballot {
                count: 1,
                preferences: vec![vec![1], vec![7]],
            }],
        );
        assert!(e.named_ballots().is_err());
        assert!(e.flat_named_ballots().is_err());
    }
}
