//! GenBank flat file to GFF3 converter
//! Alejandro Gonzales-Irribarren, 2025

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "gbff2gff",
    version = env!("CARGO_PKG_VERSION"),
    author = "Alejandro Gonzales-Irribarren <alejandrxgzi@gmail.com>",
    about = "GenBank flat file (GBFF) to GFF3 converter"
)]
pub struct Args {
    /// GenBank flat file to convert.
    ///
    /// Plain text, gzip (.gz) or bzip2 (.bz2) compressed input is accepted.
    #[clap(help = "Path to GBFF file", value_name = "GBFF", required = true)]
    pub gbff: PathBuf,

    /// GFF3 output path; overwritten if it exists.
    #[clap(help = "Path to output GFF3 file", value_name = "GFF", required = true)]
    pub output: PathBuf,

    /// Number of threads used to render records; default is 1.
    #[clap(
        short = 't',
        long,
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = 1
    )]
    pub threads: usize,

    /// Keep every value of a repeated qualifier (e.g. several /note lines)
    /// instead of only the last one.
    #[clap(
        short = 'k',
        long = "keep-duplicates",
        help = "Keep all values of repeated qualifiers"
    )]
    pub keep_duplicates: bool,

    /// Log per-record details.
    #[clap(short = 'v', long, help = "Verbose logging", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[clap(short = 'q', long, help = "Only log warnings and errors")]
    pub quiet: bool,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Log level requested on the command line.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    /// The output must not overwrite the input.
    fn check_output(&self) -> Result<(), ArgError> {
        if self.output == self.gbff {
            let err = format!("output {:?} is the same file as the input", self.output);
            Err(ArgError::InvalidOutput(err))
        } else {
            Ok(())
        }
    }

    /// Checks the number of threads for validity. The number of threads must be greater than 0
    /// and less than or equal to the number of logical CPUs.
    fn check_threads(&self) -> Result<(), ArgError> {
        if self.threads == 0 {
            let err = "number of threads must be greater than 0".to_string();
            Err(ArgError::InvalidThreads(err))
        } else if self.threads > num_cpus::get() {
            let err = "number of threads must be less than or equal to the number of logical CPUs"
                .to_string();
            Err(ArgError::InvalidThreads(err))
        } else {
            Ok(())
        }
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_output()?;
        self.check_threads()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The output path would clobber the input.
    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    /// The number of threads is invalid.
    #[error("Invalid number of threads: {0}")]
    InvalidThreads(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let args = Args::try_parse_from(["gbff2gff", "in.gbff", "out.gff3"]).unwrap();
        assert_eq!(args.gbff, PathBuf::from("in.gbff"));
        assert_eq!(args.output, PathBuf::from("out.gff3"));
        assert_eq!(args.threads, 1);
        assert!(!args.keep_duplicates);
        assert_eq!(args.log_level(), LevelFilter::Info);
        assert!(args.check().is_ok());
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Args::try_parse_from(["gbff2gff", "in.gbff"]).is_err());
        assert!(Args::try_parse_from(["gbff2gff", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_rejects_zero_threads() {
        let args = Args::try_parse_from(["gbff2gff", "-t", "0", "in.gbff", "out.gff3"]).unwrap();
        assert!(matches!(args.check(), Err(ArgError::InvalidThreads(_))));
    }

    #[test]
    fn test_rejects_same_paths() {
        let args = Args::try_parse_from(["gbff2gff", "x.gbff", "x.gbff"]).unwrap();
        assert!(matches!(args.check(), Err(ArgError::InvalidOutput(_))));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["gbff2gff", "-v", "-q", "a", "b"]).is_err());
    }
}
