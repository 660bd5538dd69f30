use crate::config::Config;
use crate::detect::{detect_compression, Compression};
use crate::error::{Gbff2GffError, Result};
use crate::gbff::{
    extract_qualifiers, format_attributes, split_records, DuplicatePolicy, FeatureScanner,
    Location, Record,
};
use crate::gff::{sequence_region, GffRecord, GFF_VERSION_HEADER};
use crate::memory::MemoryProbe;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Summary statistics for a conversion run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the conversion.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
    /// Records converted.
    pub records: usize,
    /// Feature lines written.
    pub features: usize,
}

/// Options for an in-memory conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    /// Handling of repeated qualifier keys.
    pub duplicates: DuplicatePolicy,
    /// Worker threads; `1` renders records on the calling thread.
    pub threads: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::LastWins,
            threads: 1,
        }
    }
}

/// Number of records and feature lines produced by a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertCounts {
    pub records: usize,
    pub features: usize,
}

/// Runs a file-to-file conversion with the provided configuration.
///
/// The whole input is read (and decompressed) into memory, converted with
/// [`convert_str`] and written to `config.output`, replacing any existing file.
///
/// # Arguments
///
/// * `config` - Configuration containing input/output paths, threads and the
///   duplicate-qualifier policy
///
/// # Returns
///
/// Returns RunStats containing timing, memory usage and record/feature counts.
///
/// # Errors
///
/// Returns [`Gbff2GffError::FileNotFound`] when the input does not exist and
/// [`Gbff2GffError::Io`] for any other read or write failure.
///
/// # Example
///
/// ```rust, ignore
/// use gbff2gff::{run, Config};
///
/// let stats = run(&Config::new("sequence.gbff", "sequence.gff3"))?;
/// println!("{} features in {:?}", stats.features, stats.elapsed);
/// ```
pub fn run(config: &Config) -> Result<RunStats> {
    let start = Instant::now();
    let probe = MemoryProbe::start();

    let text = read_input(&config.input)?;
    let options = ConvertOptions {
        duplicates: config.duplicates,
        threads: config.threads,
    };
    let (gff, counts) = convert_str(&text, &options)?;
    write_output(&config.output, &gff)?;

    Ok(RunStats {
        elapsed: start.elapsed(),
        mem_delta_mb: probe.delta_mb(),
        records: counts.records,
        features: counts.features,
    })
}

/// Converts GBFF text into GFF3 text.
///
/// Records are rendered independently; with more than one thread they are
/// rendered on a Rayon pool, but output order always follows input order.
///
/// # Arguments
///
/// * `text` - Complete GBFF input
/// * `options` - Duplicate-qualifier policy and thread count
///
/// # Returns
///
/// Returns the GFF3 text, header included, and the number of records and
/// feature lines it holds.
///
/// # Errors
///
/// Only fails when the thread pool cannot be built.
///
/// # Example
///
/// ```
/// use gbff2gff::{convert_str, ConvertOptions};
///
/// let gbff = "LOCUS       AB123   500 bp    DNA\n\
///             FEATURES             Location/Qualifiers\n\
///             \x20    gene            100..200\n\
///             \x20                    /locus_tag=\"g1\"\n\
///             //\n";
/// let (gff, counts) = convert_str(gbff, &ConvertOptions::default()).unwrap();
/// assert_eq!(counts.features, 1);
/// assert!(gff.ends_with("AB123\tGenBank\tgene\t100\t200\t.\t+\t.\tID=g1;Name=g1\n"));
/// ```
pub fn convert_str(text: &str, options: &ConvertOptions) -> Result<(String, ConvertCounts)> {
    let records: Vec<Record<'_>> = split_records(text).collect();

    let rendered: Vec<(String, usize)> = if options.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()?;
        pool.install(|| {
            records
                .par_iter()
                .map(|record| render_record(record, options.duplicates))
                .collect()
        })
    } else {
        records
            .iter()
            .map(|record| render_record(record, options.duplicates))
            .collect()
    };

    let capacity = rendered.iter().map(|(chunk, _)| chunk.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity + GFF_VERSION_HEADER.len() + 1);
    out.push_str(GFF_VERSION_HEADER);
    out.push('\n');

    let mut counts = ConvertCounts::default();
    for (chunk, features) in rendered {
        out.push_str(&chunk);
        counts.records += 1;
        counts.features += features;
    }

    Ok((out, counts))
}

/// Renders one record: its `##sequence-region` directive, if the length is
/// known, followed by one line per feature in table order.
fn render_record(record: &Record<'_>, duplicates: DuplicatePolicy) -> (String, usize) {
    let mut out = String::new();
    if let Some(length) = record.length {
        out.push_str(&sequence_region(record.seqid, length));
        out.push('\n');
    }

    let mut features = 0;
    for feature in FeatureScanner::new(record.lines.iter().copied()) {
        let location = Location::parse(feature.location);
        let qualifiers = extract_qualifiers(feature.qualifier_lines.iter().copied(), duplicates);
        let line = GffRecord {
            seqid: record.seqid,
            kind: feature.kind,
            start: location.start,
            end: location.end,
            strand: location.strand,
            attributes: format_attributes(&qualifiers, feature.kind),
        };
        out.push_str(&line.to_string());
        out.push('\n');
        features += 1;
    }

    log::debug!(
        "record {}: length {:?}, {} features",
        record.seqid,
        record.length,
        features
    );
    (out, features)
}

/// Reads the whole input, decompressing gzip or bzip2 when detected.
fn read_input(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|err| not_found_or_io(err, path))?;
    let compression = detect_compression(path).map_err(|err| not_found_or_io(err, path))?;
    if compression.is_compressed() {
        log::debug!("decompressing {} ({:?})", path.display(), compression);
    }

    let mut reader: Box<dyn Read> = match compression {
        Compression::None => Box::new(BufReader::with_capacity(128 * 1024, file)),
        Compression::Gzip => Box::new(BufReader::with_capacity(
            128 * 1024,
            flate2::read::MultiGzDecoder::new(file),
        )),
        Compression::Bzip2 => Box::new(BufReader::with_capacity(
            128 * 1024,
            bzip2::read::BzDecoder::new(file),
        )),
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

fn not_found_or_io(err: io::Error, path: &Path) -> Gbff2GffError {
    if err.kind() == io::ErrorKind::NotFound {
        Gbff2GffError::FileNotFound(path.to_path_buf())
    } else {
        Gbff2GffError::Io(err)
    }
}

/// Writes the rendered GFF3 text to `path`.
fn write_output(path: &Path, gff: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(256 * 1024, file);
    writer.write_all(gff.as_bytes())?;
    writer.flush()?;
    Ok(())
}
