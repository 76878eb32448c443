// crates/emojisplit/src/main.rs

use anyhow::Result;

use emojisplit::cli::build_cli;
use emojisplit::{load_index, run, AppConfig, AtomicFileWriter, Outcome};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches)?;
    init_logging(config.verbose);
    log::debug!("Configuration: {:?}", config);

    println!("Processing: {}", config.infile.display());

    // A missing index aborts before anything is read or written.
    let index = load_index(&config)?;

    let report = run(&config, &index, &AtomicFileWriter);
    for invocation in &report.invocations {
        match &invocation.result {
            Ok(Outcome::Written(outfile)) => {
                println!("Processed: {} -> {}", config.infile.display(), outfile.display());
            }
            Ok(Outcome::SkippedEmpty(outfile)) => {
                log::info!(
                    "Nothing kept for {}; not writing {}",
                    invocation.marker,
                    outfile.display()
                );
            }
            Err(_) => {}
        }
    }

    for message in report.distinct_failure_messages() {
        eprintln!("Error: {}", message);
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

/// Initialize logging: warnings by default, everything at debug with --verbose.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
