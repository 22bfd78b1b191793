use log::{debug, info, warn};

use blt_parser::{Election, LookupError, ParseError};
use snafu::{prelude::*, Snafu};

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::blt::config_reader::*;

pub mod config_reader;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CliError {
    #[snafu(display("Error opening file {path}"))]
    OpeningInput { source: io::Error, path: String },
    #[snafu(display("Error reading the election in {path}"))]
    ParsingBlt { source: ParseError, path: String },
    #[snafu(display("Error looking up the names of the candidates"))]
    NamingCandidates { source: LookupError },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson { source: io::Error, path: String },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error formatting the summary"))]
    FormattingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingOutput { source: io::Error, path: String },
    #[snafu(display("Configuration file {path} has no parent directory"))]
    MissingParentDir { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type CliResult<T> = Result<T, CliError>;

const STDIN: &str = "-";
const STDOUT: &str = "stdout";

/// How the candidates are written in the summary.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SummaryView {
    /// Candidate numbers, as in the BLT file.
    Numeric,
    /// Candidate names, with the groups of equal rankings.
    Named,
    /// Candidate names, without the groups.
    Flat,
}

fn parse_view(s: &str) -> CliResult<SummaryView> {
    match s {
        "numeric" => Ok(SummaryView::Numeric),
        "named" => Ok(SummaryView::Named),
        "flat" => Ok(SummaryView::Flat),
        x => whatever!(
            "Unknown view {:?}: expected one of numeric, named, flat",
            x
        ),
    }
}

/// The settings of one run, after merging the command line and the configuration file.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RunSettings {
    pub input: Option<String>,
    pub output: Option<String>,
    pub view: SummaryView,
    pub reference: Option<String>,
}

// Paths in a configuration file are relative to the directory of that file.
fn resolve_path(root: &Path, p: String) -> String {
    if p == STDIN || p == STDOUT || Path::new(&p).is_absolute() {
        p
    } else {
        let full: PathBuf = root.join(p);
        full.as_path().display().to_string()
    }
}

fn resolve_settings(args: &Args) -> CliResult<RunSettings> {
    let config: RunConfig = match args.config.clone() {
        Some(config_path) => {
            let config = read_config(&config_path)?;
            info!("config: {:?}", config);
            let root = Path::new(config_path.as_str())
                .parent()
                .context(MissingParentDirSnafu {
                    path: config_path.clone(),
                })?;
            RunConfig {
                input: config.input.map(|p| resolve_path(root, p)),
                output: config.output.map(|p| resolve_path(root, p)),
                view: config.view,
                reference: config.reference.map(|p| resolve_path(root, p)),
            }
        }
        None => RunConfig::default(),
    };

    let view = match args.view.clone().or(config.view) {
        Some(s) => parse_view(s.as_str())?,
        None => SummaryView::Named,
    };

    Ok(RunSettings {
        input: args.input.clone().or(config.input),
        output: args.out.clone().or(config.output),
        view,
        reference: args.reference.clone().or(config.reference),
    })
}

fn read_election(input: &Option<String>) -> CliResult<Election> {
    match input.as_deref() {
        None | Some(STDIN) => {
            info!("Reading election from the standard input");
            blt_parser::parse(io::stdin().lock()).context(ParsingBltSnafu {
                path: "<stdin>".to_string(),
            })
        }
        Some(path) => {
            info!("Attempting to read election file {:?}", path);
            let file = File::open(path).context(OpeningInputSnafu { path })?;
            blt_parser::parse(file).context(ParsingBltSnafu { path })
        }
    }
}

fn ballot_to_json(count: u64, preferences: JSValue) -> JSValue {
    json!({ "count": count, "preferences": preferences })
}

fn build_summary_js(election: &Election, view: SummaryView) -> CliResult<JSValue> {
    let (withdrawn, ballots): (JSValue, Vec<JSValue>) = match view {
        SummaryView::Numeric => (
            json!(election.withdrawn()),
            election
                .ballots()
                .iter()
                .map(|b| ballot_to_json(b.count(), json!(b.preferences())))
                .collect(),
        ),
        SummaryView::Named => (
            json!(election
                .named_withdrawn()
                .context(NamingCandidatesSnafu {})?),
            election
                .named_ballots()
                .context(NamingCandidatesSnafu {})?
                .iter()
                .map(|b| ballot_to_json(b.count, json!(b.preferences)))
                .collect(),
        ),
        SummaryView::Flat => (
            json!(election
                .named_withdrawn()
                .context(NamingCandidatesSnafu {})?),
            election
                .flat_named_ballots()
                .context(NamingCandidatesSnafu {})?
                .iter()
                .map(|b| ballot_to_json(b.count, json!(b.preferences)))
                .collect(),
        ),
    };
    Ok(json!({
        "title": election.title(),
        "numCandidates": election.num_candidates(),
        "numSeats": election.num_seats(),
        "candidates": election.candidates(),
        "withdrawn": withdrawn,
        "ballots": ballots,
        "totalCount": election.total_count(),
    }))
}

fn write_output(output: &Option<String>, content: &str) -> CliResult<()> {
    match output.as_deref() {
        None | Some(STDOUT) => {
            println!("{}", content);
            Ok(())
        }
        Some(path) => {
            info!("Writing summary to {:?}", path);
            fs::write(path, content).context(WritingOutputSnafu { path })
        }
    }
}

fn check_reference(reference_path: &str, pretty_js_stats: &str) -> CliResult<()> {
    let summary_ref = read_summary(reference_path)?;
    debug!("reference summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(FormattingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        whatever!("Difference detected between calculated summary and reference summary")
    }
    Ok(())
}

/// Reads the election, writes its summary and compares it with the reference, if any.
pub fn run(args: &Args) -> CliResult<()> {
    let settings = resolve_settings(args)?;
    debug!("settings: {:?}", settings);

    let election = read_election(&settings.input)?;
    let summary_js = build_summary_js(&election, settings.view)?;
    let pretty_js_stats =
        serde_json::to_string_pretty(&summary_js).context(FormattingJsonSnafu {})?;
    write_output(&settings.output, pretty_js_stats.as_str())?;

    if let Some(reference_path) = settings.reference {
        check_reference(reference_path.as_str(), pretty_js_stats.as_str())?;
    }
    Ok(())
}
