use std::process::ExitCode;

use clap::Parser;
use common::Config;
use isomorphism::{IsomorphismComparator, IsomorphismOptions};
use parser::LogicSchema;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exit status when the schemas are not isomorphic.
const NOT_ISOMORPHIC: u8 = 1;
/// Exit status when the inputs could not be read or parsed.
const FAILED: u8 = 2;

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .init();

    let Some((left_path, right_path)) = config.schema_pair() else {
        error!("Expected exactly two schemas, got {}", config.schemas().len());
        return ExitCode::from(FAILED);
    };

    let (left, right) = match (LogicSchema::parse(left_path), LogicSchema::parse(right_path)) {
        (Ok(left), Ok(right)) => (left, right),
        (Err(err), _) => {
            error!("FAILED: {left_path} - {err}");
            return ExitCode::from(FAILED);
        }
        (_, Err(err)) => {
            error!("FAILED: {right_path} - {err}");
            return ExitCode::from(FAILED);
        }
    };

    let options = IsomorphismOptions::new(
        config.variable_renaming_allowed(),
        config.literal_reordering_allowed(),
        config.derived_predicate_renaming_allowed(),
    );
    info!(
        "Comparing '{}' with '{}' ({options})",
        Config::schema_name(left_path),
        Config::schema_name(right_path)
    );

    let comparator = IsomorphismComparator::new(options, &left, &right);
    let isomorphic = comparator.are_isomorphic_schemas();
    let stats = comparator.stats();
    info!(
        "    Search: {} candidates, {} rollbacks, {} obligations",
        stats.candidates, stats.rollbacks, stats.obligations
    );

    if isomorphic {
        println!("isomorphic");
        ExitCode::SUCCESS
    } else {
        println!("not isomorphic");
        ExitCode::from(NOT_ISOMORPHIC)
    }
}
