use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use mongoscope::cli::{self, Args};
use mongoscope::explorer::Explorer;
use mongoscope::report;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> mongoscope::Result<()> {
    let explorer = Explorer::connect_with_sample_size(&args.uri, &args.database, args.sample_size)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match (&args.collection, &args.query) {
        (None, _) => report::database_overview(&explorer, &mut out)?,
        (Some(collection), None) => {
            let limit = args.limit.unwrap_or(report::DEFAULT_DUMP_LIMIT);
            report::collection_report(&explorer, collection, limit, &mut out)?;
        }
        (Some(collection), Some(query)) => {
            let filter = cli::parse_query(query)?;
            let limit = args.limit.unwrap_or(report::DEFAULT_QUERY_LIMIT);
            report::query_report(&explorer, collection, filter, limit, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
