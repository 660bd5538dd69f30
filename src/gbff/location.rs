use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// First `<digits>..<digits>` pair inside a `join(...)` expression.
static FIRST_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\.\.([0-9]+)").expect("valid range pattern"));

/// Position returned whenever a location expression cannot be read.
const FALLBACK: (u64, u64) = (1, 1);

/// Represents the strand of a GenBank feature.
///
/// GenBank only distinguishes the forward strand from the `complement(...)` wrapper,
/// so there is no unknown variant here.
///
/// # Example
///
/// ```
/// use gbff2gff::gbff::Strand;
///
/// assert_eq!(Strand::Reverse.to_string(), "-");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    /// Positive strand (`+`).
    Forward,
    /// Negative strand (`-`).
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => f.write_str("+"),
            Strand::Reverse => f.write_str("-"),
        }
    }
}

/// A resolved GenBank location: 1-based, closed interval plus strand.
///
/// `start <= end` is not enforced; `complement(300..150)` resolves to
/// `start = 300, end = 150` and is written out as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
}

impl Location {
    /// Resolves a GenBank location expression into its first interval.
    ///
    /// Handles `complement(...)`, `join(...)` (first segment only), `a..b` ranges,
    /// single positions and the `<`/`>` fuzzy markers. Anything that cannot be
    /// read degrades to `1..1` on the detected strand; this never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use gbff2gff::gbff::{Location, Strand};
    ///
    /// let loc = Location::parse("complement(<10..>250)");
    /// assert_eq!((loc.start, loc.end, loc.strand), (10, 250, Strand::Reverse));
    ///
    /// let loc = Location::parse("join(12..78,134..202)");
    /// assert_eq!((loc.start, loc.end), (12, 78));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        let (strand, body) = match raw
            .strip_prefix("complement(")
            .and_then(|inner| inner.strip_suffix(')'))
        {
            Some(inner) => (Strand::Reverse, inner),
            None => (Strand::Forward, raw),
        };

        let span = if body.starts_with("join(") {
            first_join_range(body)
        } else if let Some((start, end)) = body.split_once("..") {
            parse_position(start).zip(parse_position(end))
        } else {
            parse_position(body).map(|pos| (pos, pos))
        };

        let (start, end) = span.unwrap_or(FALLBACK);
        Self { start, end, strand }
    }
}

/// Finds the first `a..b` pair anywhere in a `join(...)` body.
fn first_join_range(body: &str) -> Option<(u64, u64)> {
    let caps = FIRST_RANGE.captures(body)?;
    let start = caps.get(1)?.as_str().parse().ok()?;
    let end = caps.get(2)?.as_str().parse().ok()?;
    Some((start, end))
}

/// Parses one side of a range, dropping leading `<`/`>` fuzzy markers.
fn parse_position(raw: &str) -> Option<u64> {
    raw.trim()
        .trim_start_matches(['<', '>'])
        .trim()
        .parse()
        .ok()
}
