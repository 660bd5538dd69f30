//! # gbff2gff
//!
//! GenBank flat file (GBFF) to GFF3 converter.
//!
//! Every record of a GBFF file is split off on its `//` terminator, its FEATURES
//! table is walked with the fixed-column rules of the format, and each feature
//! becomes one GFF3 line:
//!
//! ```text
//! <seqid>  GenBank  <type>  <start>  <end>  .  <strand>  <phase>  <attributes>
//! ```
//!
//! Only the first interval of a `join(...)` location is reported, so a spliced
//! feature spanning several exons comes out as its first segment. Unreadable
//! locations degrade to `1..1` instead of failing the conversion.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use gbff2gff::{run, Config};
//!
//! let stats = run(&Config::new("sequence.gbff", "sequence.gff3"))?;
//! println!("Conversion completed in {:?}", stats.elapsed);
//! println!("Memory used: {:.2} MB", stats.mem_delta_mb);
//! ```
//!
//! ## Examples
//!
//! ### Keeping repeated qualifiers
//!
//! ```rust, ignore
//! use gbff2gff::{gbff::DuplicatePolicy, run, Config};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("sequence.gbff.gz"),
//!     output: PathBuf::from("sequence.gff3"),
//!     threads: 4,
//!     duplicates: DuplicatePolicy::Collect,
//! };
//!
//! let stats = run(&config)?;
//! ```
//!
//! ### Converting text in memory
//!
//! ```rust, ignore
//! use gbff2gff::{convert_str, ConvertOptions};
//!
//! let (gff, counts) = convert_str(&gbff_text, &ConvertOptions::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod gbff;
pub mod gff;
pub mod memory;

pub use cli::Args;
pub use config::Config;
pub use convert::{convert_str, run, ConvertCounts, ConvertOptions, RunStats};
pub use error::{Gbff2GffError, Result};
pub use memory::max_mem_usage_mb;
