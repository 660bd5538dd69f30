//! # gbff2gff
//!
//! GenBank flat file (GBFF) to GFF3 converter.
//!
//! ## Usage
//!
//! ```bash
//! gbff2gff <GBFF> <GFF> [OPTIONS]
//!
//! Required arguments:
//!   <GBFF>                  Path to GBFF file (.gz/.bz2 accepted)
//!   <GFF>                   Path to output GFF3 file
//!
//! Optional arguments:
//!   -t, --threads <THREADS> Number of threads [default: 1]
//!   -k, --keep-duplicates   Keep all values of repeated qualifiers
//!   -v, --verbose           Verbose logging
//!   -q, --quiet             Only log warnings and errors
//!   -h, --help              Print help
//!   -V, --version           Print version
//! ```
//!
//! ## Examples
//!
//! ```bash
//! gbff2gff sequence.gbff sequence.gff3
//! ```
//!
//! ```bash
//! gbff2gff GCF_000005845.2_genomic.gbff.gz ecoli.gff3 -t 4 -k
//! ```
use clap::error::ErrorKind;
use clap::Parser;
use gbff2gff::{run, Args, Config, Gbff2GffError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(args.log_level())
        .init()
    {
        eprintln!("failed to initialize logger: {err}");
    }

    match convert(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(1)
        }
    }
}

fn convert(args: &Args) -> Result<(), Gbff2GffError> {
    log::debug!("{:?}", args);
    args.check()?;

    let config = Config::from_args(args);
    let stats = run(&config)?;

    log::info!(
        "Converted {} -> {}: {} records, {} features",
        config.input.display(),
        config.output.display(),
        stats.records,
        stats.features
    );
    log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
    log::info!("Memory: {:.2} MB", stats.mem_delta_mb);

    Ok(())
}
