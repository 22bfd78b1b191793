use crate::blt::*;
use snafu::prelude::*;

use serde::{Deserialize, Serialize};

/// The content of a JSON configuration file.
///
/// All the entries are optional and can be overridden on the command line.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// The BLT file, or '-' for the standard input.
    pub input: Option<String>,
    /// The summary file, or 'stdout'.
    pub output: Option<String>,
    pub view: Option<String>,
    /// A reference summary to compare with.
    pub reference: Option<String>,
}

pub fn read_config(path: &str) -> CliResult<RunConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })
}

pub fn read_summary(path: &str) -> CliResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    if !js.is_object() {
        whatever!("The summary in {} is not a JSON object", path)
    }
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config() {
        let config: RunConfig = serde_json::from_str(r#"{"view": "flat"}"#).unwrap();
        assert_eq!(
            config,
            RunConfig {
                view: Some("flat".to_string()),
                ..RunConfig::default()
            }
        );
    }

    #[test]
    fn missing_config() {
        assert!(matches!(
            read_config("/does/not/exist.json"),
            Err(CliError::OpeningJson { .. })
        ));
    }
}
