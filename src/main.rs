//! appbox's main application entry point.
//! Handles command-line argument parsing, configuration loading and hands the
//! entry list over to the processor.

use appbox::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
    reader::read_entries,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration from file and flags
/// 2. Reads the entry list
/// 3. Provisions every entry whose folder does not exist yet
fn run(args: Args) -> Result<()> {
    let config = get_config(&args)?;
    let entries = read_entries(&config.input_path)?;

    let processor = Processor::new(&config);
    let summary = processor.run(&entries)?;

    log::debug!("Run finished: {summary}");
    Ok(())
}
