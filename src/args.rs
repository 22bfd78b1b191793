use clap::Parser;

/// This is a reader for election files in the BLT format.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the input, output and view to use.
    /// For more information about the file format, read the documentation of the blt_parser crate.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing the summary of an election in JSON format. If provided, timblt will
    /// check that the produced summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the election will be written in JSON format to the given
    /// location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path, '-' or empty) The BLT file to read. The standard input is read if it is '-' or if no input is provided.
    /// Setting this option overrides what may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default named) How to write the candidates in the summary: 'numeric', 'named' or 'flat'.
    #[clap(long, value_parser)]
    pub view: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
