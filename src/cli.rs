use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  query_json --query '$.users[0].name' ./data.json
  query_json --query '$.products[?(@.price > 100)]' ./data.json
  query_json --query '$.users[*].email' --raw ./data.json";

/// Command-line arguments for query_json
#[derive(Parser, Debug)]
#[command(name = "query_json")]
#[command(about = "Evaluate a JSONPath query against a JSON file")]
#[command(disable_version_flag = true, after_help = EXAMPLES)]
pub struct Args {
    /// JSONPath query (e.g., $.root[0], $.users[*].name)
    ///
    /// Filters support ==, !=, <, <=, >, >=, && and ||. For regular
    /// expressions use match(@.name, 'A.*') or search(@.name, 'li') in place
    /// of =~.
    #[arg(long)]
    pub query: Option<String>,

    /// Pretty print JSON output (use --pretty=false for compact output)
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "true",
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
        value_name = "BOOL"
    )]
    pub pretty: bool,

    /// Output raw values (no JSON formatting for strings)
    #[arg(long)]
    pub raw: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON file to query
    #[arg(value_name = "JSON_FILE")]
    pub file: Option<PathBuf>,
}

impl Args {
    /// The query string, empty when `--query` was not given
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    /// Output settings selected on the command line
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            pretty: self.pretty,
            raw: self.raw,
        }
    }
}

/// How a result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub pretty: bool,
    pub raw: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            raw: false,
        }
    }
}

/// Full usage text, including options and examples
pub fn usage() -> String {
    Args::command().render_help().to_string()
}
