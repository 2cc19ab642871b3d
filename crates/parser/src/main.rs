use std::process::ExitCode;

use clap::Parser;
use common::Config;
use parser::LogicSchema;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .init();

    let mut failed = 0usize;
    for path in config.schemas() {
        match LogicSchema::parse(path) {
            Ok(schema) => {
                info!("Success parse schema '{}'", Config::schema_name(path));
                info!("    Statistics:");
                info!("     Base predicates: {}", schema.base_predicates().count());
                info!(
                    "     Derived predicates: {}",
                    schema.derived_predicates().count()
                );
                info!("     Derivation rules: {}", schema.derivation_rules().count());
                info!("     Constraints: {}", schema.constraints().len());
                println!("{schema}");
            }
            Err(err) => {
                failed += 1;
                error!("FAILED: {path} - {err}");
            }
        }
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
