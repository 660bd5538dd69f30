/// Line closing a GBFF record.
pub const RECORD_TERMINATOR: &str = "//";

/// Sequence id used when neither `LOCUS` nor `ACCESSION` gives one.
pub const UNKNOWN_SEQID: &str = "unknown";

/// One GBFF record, borrowed from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    /// Sequence id from `LOCUS`, else `ACCESSION`, else `unknown`.
    pub seqid: &'a str,
    /// Sequence length from `LOCUS`, only when purely numeric.
    pub length: Option<u64>,
    /// Every line of the record, terminator excluded.
    pub lines: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Builds a record from the text between two terminators.
    ///
    /// # Arguments
    ///
    /// * `chunk` - Text of one record, terminator line excluded
    ///
    /// # Returns
    ///
    /// Returns a Record borrowing its id and lines from `chunk`. A missing id
    /// falls back to [`UNKNOWN_SEQID`] and a non-numeric length to `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use gbff2gff::gbff::Record;
    ///
    /// let record = Record::parse("LOCUS       NC_000913  4641652 bp    DNA\n");
    /// assert_eq!(record.seqid, "NC_000913");
    /// assert_eq!(record.length, Some(4641652));
    /// ```
    pub fn parse(chunk: &'a str) -> Self {
        Self::from_lines(chunk.lines().collect())
    }

    /// Builds a record from its already split lines.
    pub fn from_lines(lines: Vec<&'a str>) -> Self {
        let mut locus_id = None;
        let mut length = None;
        let mut accession = None;

        for &line in &lines {
            if line.starts_with("LOCUS") {
                let tokens: Vec<&'a str> = line.split_whitespace().collect();
                if tokens.len() >= 3 {
                    locus_id = Some(tokens[1]);
                    length = parse_length(tokens[2]);
                }
            } else if line.starts_with("ACCESSION") && accession.is_none() {
                accession = line.split_whitespace().nth(1);
            }
        }

        let seqid = locus_id.or(accession).unwrap_or_else(|| {
            log::warn!("record without LOCUS or ACCESSION id, using {UNKNOWN_SEQID:?}");
            UNKNOWN_SEQID
        });

        Self {
            seqid,
            length,
            lines,
        }
    }
}

/// Splits GBFF text into records on `//` lines, skipping blank chunks.
///
/// Both `\n` and `\r\n` line endings are accepted. Text after the last
/// terminator still forms a record when it is not blank.
///
/// # Arguments
///
/// * `text` - Complete GBFF input
///
/// # Returns
///
/// Returns an iterator over the records in input order.
///
/// # Example
///
/// ```
/// use gbff2gff::gbff::split_records;
///
/// let text = "LOCUS       A 10 bp\n//\n\n//\nLOCUS       B 20 bp\r\n//\r\n";
/// let ids: Vec<_> = split_records(text).map(|r| r.seqid).collect();
/// assert_eq!(ids, ["A", "B"]);
/// ```
pub fn split_records(text: &str) -> Records<'_> {
    Records {
        lines: text.lines(),
    }
}

/// Iterator over the records of a GBFF text, see [`split_records`].
pub struct Records<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk: Vec<&'a str> = Vec::new();

        for line in self.lines.by_ref() {
            if !is_terminator(line) {
                chunk.push(line);
            } else if is_blank(&chunk) {
                chunk.clear();
            } else {
                return Some(Record::from_lines(chunk));
            }
        }

        (!is_blank(&chunk)).then(|| Record::from_lines(chunk))
    }
}

fn is_blank(chunk: &[&str]) -> bool {
    chunk.iter().all(|line| line.trim().is_empty())
}

fn is_terminator(line: &str) -> bool {
    line.trim_end_matches('\r') == RECORD_TERMINATOR
}

/// The length token counts only when it is made of ASCII digits alone.
fn parse_length(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locus_header() {
        let record = Record::parse(
            "LOCUS       AB123                    500 bp    DNA     linear   BCT 01-JAN-2000\n",
        );
        assert_eq!(record.seqid, "AB123");
        assert_eq!(record.length, Some(500));
    }

    #[test]
    fn test_accession_fallback() {
        let record = Record::parse("LOCUS       X\nACCESSION   U00096 AE000111\n");
        assert_eq!(record.seqid, "U00096");
        assert_eq!(record.length, None);
    }

    #[test]
    fn test_locus_wins_over_accession() {
        let record = Record::parse("ACCESSION   U00096\nLOCUS       ECOLI 12 bp\n");
        assert_eq!(record.seqid, "ECOLI");
    }

    #[test]
    fn test_unknown_seqid() {
        let record = Record::parse("DEFINITION  nothing useful\n");
        assert_eq!(record.seqid, UNKNOWN_SEQID);
        assert_eq!(record.length, None);
    }

    #[test]
    fn test_non_numeric_length() {
        let record = Record::parse("LOCUS       AB123 500bp DNA\n");
        assert_eq!(record.seqid, "AB123");
        assert_eq!(record.length, None);
    }

    #[test]
    fn test_split_skips_blank_chunks() {
        let text = "LOCUS       A 1 bp\n//\n   \n//\nLOCUS       B 2 bp\n//\n";
        let records: Vec<_> = split_records(text).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seqid, "A");
        assert_eq!(records[1].length, Some(2));
    }

    #[test]
    fn test_trailing_record_without_terminator() {
        let records: Vec<_> = split_records("LOCUS       A 1 bp\n//\nLOCUS       B 2 bp\n").collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].seqid, "B");
    }

    #[test]
    fn test_crlf_terminators() {
        let text = "LOCUS       A 1 bp\r\n//\r\n\r\n//\r\nLOCUS       B 2 bp\r\n//\r\n";
        let records: Vec<_> = split_records(text).collect();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].seqid, records[0].length), ("A", Some(1)));
        assert_eq!((records[1].seqid, records[1].length), ("B", Some(2)));
        assert_eq!(records[1].lines, ["LOCUS       B 2 bp"]);
    }

    #[test]
    fn test_terminator_must_be_whole_line() {
        let text = "LOCUS       A 1 bp\n  /note=\"see http://\"\n//\n";
        let records: Vec<_> = split_records(text).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines.len(), 2);
    }

    #[test]
    fn test_crlf_lines() {
        let record = Record::parse("LOCUS       A 7 bp\r\n");
        assert_eq!(record.seqid, "A");
        assert_eq!(record.length, Some(7));
    }
}
