use crate::cli::Args;
use crate::gbff::DuplicatePolicy;
use std::path::PathBuf;

/// Normalized configuration for a conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input GBFF path.
    pub input: PathBuf,
    /// Output GFF3 path.
    pub output: PathBuf,
    /// Number of threads used to render records.
    pub threads: usize,
    /// Handling of repeated qualifier keys.
    pub duplicates: DuplicatePolicy,
}

impl Config {
    /// Builds a conversion config from CLI arguments.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use clap::Parser;
    /// use gbff2gff::{Args, Config};
    ///
    /// let args = Args::parse_from(["gbff2gff", "in.gbff", "out.gff3", "-k"]);
    /// let config = Config::from_args(&args);
    /// ```
    pub fn from_args(args: &Args) -> Self {
        let duplicates = if args.keep_duplicates {
            DuplicatePolicy::Collect
        } else {
            DuplicatePolicy::LastWins
        };

        Self {
            input: args.gbff.clone(),
            output: args.output.clone(),
            threads: args.threads,
            duplicates,
        }
    }

    /// Single-threaded, last-write-wins conversion between two paths.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            threads: 1,
            duplicates: DuplicatePolicy::default(),
        }
    }
}
