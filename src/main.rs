// src/main.rs

use dashbling_config::errors::LoadError;
use dashbling_config::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        report(&err);
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::Invalid(invalid)) => {
            eprintln!("dashbling-config: configuration is invalid:");
            for message in invalid.errors() {
                eprintln!("  - {message}");
            }
        }
        _ => eprintln!("dashbling-config error: {err:?}"),
    }
}
