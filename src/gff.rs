use crate::gbff::Strand;
use std::fmt;

/// First line of every output file.
pub const GFF_VERSION_HEADER: &str = "##gff-version 3";

/// Value of the GFF3 source column.
pub const SOURCE: &str = "GenBank";

/// One GFF3 feature line.
///
/// `Display` renders the nine tab-separated columns without a trailing newline.
///
/// # Example
///
/// ```
/// use gbff2gff::gbff::Strand;
/// use gbff2gff::gff::GffRecord;
///
/// let record = GffRecord {
///     seqid: "AB123",
///     kind: "CDS",
///     start: 300,
///     end: 150,
///     strand: Strand::Reverse,
///     attributes: ".".to_string(),
/// };
/// assert_eq!(record.to_string(), "AB123\tGenBank\tCDS\t300\t150\t.\t-\t0\t.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GffRecord<'a> {
    pub seqid: &'a str,
    pub kind: &'a str,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    pub attributes: String,
}

impl GffRecord<'_> {
    /// `0` for CDS features, `.` for everything else.
    pub fn phase(&self) -> &'static str {
        if self.kind == "CDS" {
            "0"
        } else {
            "."
        }
    }
}

impl fmt::Display for GffRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t.\t{}\t{}\t{}",
            self.seqid,
            SOURCE,
            self.kind,
            self.start,
            self.end,
            self.strand,
            self.phase(),
            self.attributes
        )
    }
}

/// Renders the `##sequence-region` directive for a sequence of known length.
pub fn sequence_region(seqid: &str, length: u64) -> String {
    format!("##sequence-region {seqid} 1 {length}")
}
