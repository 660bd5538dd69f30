use once_cell::sync::Lazy;
use regex::Regex;
use std::iter::Peekable;

/// Feature header: type starting at column 6, then whitespace, then the location.
static FEATURE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {5}(\w+)\s+(.+)").expect("valid feature header pattern"));

/// Column (0-based) where a feature type starts.
const TYPE_COLUMN: usize = 5;
/// Width of the blank indent carried by qualifier and continuation lines.
const QUALIFIER_INDENT: usize = 21;

/// One entry of a FEATURES table, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature<'a> {
    /// Feature key, e.g. `gene` or `CDS`.
    pub kind: &'a str,
    /// Raw location expression, trimmed.
    pub location: &'a str,
    /// Qualifier and continuation lines, untrimmed and in source order.
    pub qualifier_lines: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeFeatures,
    InFeatures,
    Done,
}

/// Walks the lines of one record and yields its features in source order.
///
/// Scanning starts after the `FEATURES` line and stops for good at the first
/// line starting with `ORIGIN` or `//`.
///
/// # Example
///
/// ```
/// use gbff2gff::gbff::FeatureScanner;
///
/// let text = "FEATURES             Location/Qualifiers\n     \
///             gene            100..200\n                     \
///             /locus_tag=\"g1\"\nORIGIN\n";
/// let features: Vec<_> = FeatureScanner::new(text.lines()).collect();
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].kind, "gene");
/// assert_eq!(features[0].location, "100..200");
/// assert_eq!(features[0].qualifier_lines.len(), 1);
/// ```
pub struct FeatureScanner<I>
where
    I: Iterator,
{
    lines: Peekable<I>,
    state: ScanState,
}

impl<'a, I> FeatureScanner<I>
where
    I: Iterator<Item = &'a str>,
{
    /// Creates a scanner over the lines of one record.
    ///
    /// # Arguments
    ///
    /// * `lines` - Record lines without line terminators, e.g. `text.lines()`
    pub fn new(lines: I) -> Self {
        Self {
            lines: lines.peekable(),
            state: ScanState::BeforeFeatures,
        }
    }

    /// Consumes the qualifier lines directly following a header, leaving the
    /// first non-qualifier line in place.
    fn take_qualifier_lines(&mut self) -> Vec<&'a str> {
        let mut taken = Vec::new();
        while let Some(line) = self.lines.next_if(|line| is_qualifier_line(line)) {
            taken.push(line);
        }
        taken
    }
}

impl<'a, I> Iterator for FeatureScanner<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Feature<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state != ScanState::Done {
            let Some(line) = self.lines.next() else {
                self.state = ScanState::Done;
                break;
            };

            if line.starts_with("FEATURES") {
                self.state = ScanState::InFeatures;
                continue;
            }

            if line.starts_with("ORIGIN") || line.starts_with("//") {
                self.state = ScanState::Done;
                break;
            }

            if self.state != ScanState::InFeatures || !is_feature_header(line) {
                continue;
            }

            match split_header(line) {
                Some((kind, location)) => {
                    let qualifier_lines = self.take_qualifier_lines();
                    return Some(Feature {
                        kind,
                        location,
                        qualifier_lines,
                    });
                }
                None => log::warn!("skipping unreadable feature header: {:?}", line.trim()),
            }
        }

        None
    }
}

/// A header has a blank 5-column indent and a non-space character at column 6.
fn is_feature_header(line: &str) -> bool {
    let mut chars = line.chars();
    let indent_blank = chars
        .by_ref()
        .take(TYPE_COLUMN)
        .filter(|c| c.is_whitespace())
        .count()
        == TYPE_COLUMN;
    indent_blank && chars.next().is_some_and(|c| c != ' ')
}

/// Qualifier and continuation lines start with at least 21 blank columns.
fn is_qualifier_line(line: &str) -> bool {
    line.chars()
        .take(QUALIFIER_INDENT)
        .filter(|c| c.is_whitespace())
        .count()
        == QUALIFIER_INDENT
}

fn split_header(line: &str) -> Option<(&str, &str)> {
    let caps = FEATURE_HEADER.captures(line)?;
    let kind = caps.get(1)?.as_str();
    let location = caps.get(2)?.as_str().trim();
    Some((kind, location))
}
