//! Command line argument parsing for the logic schema tools.

use clap::{ArgAction, Parser};
use std::path::Path;

/// Command line arguments for the logic schema tools
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path(s) of the logic schema files (the isomorphism checker takes exactly two)
    #[arg(value_name = "SCHEMA", required = true, num_args = 1..=2)]
    pub schemas: Vec<String>,

    /// Forbid renaming variables (only used by the isomorphism checker)
    #[arg(long, action = ArgAction::SetTrue)]
    pub fixed_variable_names: bool,

    /// Forbid reordering body literals and derivation rules (only used by the isomorphism checker)
    #[arg(long, action = ArgAction::SetTrue)]
    pub fixed_literal_order: bool,

    /// Forbid renaming derived predicates (only used by the isomorphism checker)
    #[arg(long, action = ArgAction::SetTrue)]
    pub fixed_derived_predicate_names: bool,

    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }

    /// The two schemas to compare, or `None` unless exactly two were given.
    pub fn schema_pair(&self) -> Option<(&str, &str)> {
        match self.schemas.as_slice() {
            [left, right] => Some((left, right)),
            _ => None,
        }
    }

    /// File stem of a schema path, for log output.
    pub fn schema_name(path: &str) -> String {
        Path::new(path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown_schema".into())
    }

    pub fn variable_renaming_allowed(&self) -> bool {
        !self.fixed_variable_names
    }

    pub fn literal_reordering_allowed(&self) -> bool {
        !self.fixed_literal_order
    }

    pub fn derived_predicate_renaming_allowed(&self) -> bool {
        !self.fixed_derived_predicate_names
    }

    /// `EnvFilter` directive matching the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
