use hashbrown::HashMap;

/// How repeated qualifier keys inside one feature are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// A repeated key overwrites the previous value.
    #[default]
    LastWins,
    /// Every value of a repeated key is kept, in source order.
    Collect,
}

/// Qualifiers of a single feature, keyed without the leading `/`.
///
/// Values have their outer quotes removed. Under [`DuplicatePolicy::LastWins`]
/// every key holds exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifierMap {
    inner: HashMap<String, Vec<String>>,
}

impl QualifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns every value recorded for `key`, in source order.
    pub fn values(&self, key: &str) -> &[String] {
        self.inner.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn insert(&mut self, key: String, value: String, policy: DuplicatePolicy) {
        let values = self.inner.entry(key).or_default();
        if policy == DuplicatePolicy::LastWins {
            values.clear();
        }
        values.push(value);
    }
}

/// Pending `/key=value` pair while its continuation lines are still arriving.
#[derive(Debug, Default)]
struct Pending {
    key: Option<String>,
    value: String,
}

impl Pending {
    /// Moves the pending pair into `map`. Empty keys (a bare `/`) are dropped.
    fn flush_into(&mut self, map: &mut QualifierMap, policy: DuplicatePolicy) {
        let value = std::mem::take(&mut self.value);
        if let Some(key) = self.key.take().filter(|key| !key.is_empty()) {
            map.insert(key, strip_quotes(&value).to_string(), policy);
        }
    }

    fn start(&mut self, qualifier: &str) {
        match qualifier.split_once('=') {
            Some((key, value)) => {
                self.key = Some(key.to_string());
                self.value = value.to_string();
            }
            None => {
                self.key = Some(qualifier.to_string());
                self.value.clear();
            }
        }
    }

    fn continue_with(&mut self, line: &str) {
        self.value.push(' ');
        self.value.push_str(line);
    }
}

/// Builds the qualifier map of one feature from its raw qualifier lines.
///
/// Lines starting with `/` open a new qualifier; any other line continues the
/// current value, joined with a single space.
///
/// # Example
///
/// ```
/// use gbff2gff::gbff::{extract_qualifiers, DuplicatePolicy};
///
/// let lines = [
///     "                     /locus_tag=\"ABC123\"",
///     "                     /note=\"hello; world\"",
///     "                     /pseudo",
/// ];
/// let map = extract_qualifiers(lines, DuplicatePolicy::LastWins);
/// assert_eq!(map.get("locus_tag"), Some("ABC123"));
/// assert_eq!(map.get("note"), Some("hello; world"));
/// assert_eq!(map.get("pseudo"), Some(""));
/// ```
pub fn extract_qualifiers<'a, I>(lines: I, policy: DuplicatePolicy) -> QualifierMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = QualifierMap::new();
    let mut pending = Pending::default();

    for line in lines {
        let line = line.trim();
        if let Some(qualifier) = line.strip_prefix('/') {
            pending.flush_into(&mut map, policy);
            pending.start(qualifier);
        } else {
            pending.continue_with(line);
        }
    }
    pending.flush_into(&mut map, policy);

    map
}

/// Removes at most one leading and one trailing `"`.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: &str = "                     ";

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| format!("{PAD}{l}")).collect()
    }

    fn extract(raw: &[&str], policy: DuplicatePolicy) -> QualifierMap {
        let owned = lines(raw);
        extract_qualifiers(owned.iter().map(String::as_str), policy)
    }

    #[test]
    fn test_empty_feature() {
        let map = extract(&[], DuplicatePolicy::LastWins);
        assert!(map.is_empty());
    }

    #[test]
    fn test_quoted_and_flag_qualifiers() {
        let map = extract(
            &["/gene=\"thrL\"", "/codon_start=1", "/pseudo"],
            DuplicatePolicy::LastWins,
        );
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("gene"), Some("thrL"));
        assert_eq!(map.get("codon_start"), Some("1"));
        assert_eq!(map.get("pseudo"), Some(""));
    }

    #[test]
    fn test_continuation_lines() {
        let map = extract(
            &[
                "/product=\"bifunctional aspartokinase/homoserine",
                "dehydrogenase I\"",
                "/translation=\"MRVLKFGG",
                "SSLADAE\"",
            ],
            DuplicatePolicy::LastWins,
        );
        assert_eq!(
            map.get("product"),
            Some("bifunctional aspartokinase/homoserine dehydrogenase I")
        );
        assert_eq!(map.get("translation"), Some("MRVLKFGG SSLADAE"));
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let map = extract(&["/note=\"a=b=c\""], DuplicatePolicy::LastWins);
        assert_eq!(map.get("note"), Some("a=b=c"));
    }

    #[test]
    fn test_only_one_quote_pair_removed() {
        let map = extract(&["/note=\"\"inner\"\""], DuplicatePolicy::LastWins);
        assert_eq!(map.get("note"), Some("\"inner\""));
    }

    #[test]
    fn test_last_write_wins() {
        let map = extract(
            &["/note=\"first\"", "/note=\"second\""],
            DuplicatePolicy::LastWins,
        );
        assert_eq!(map.get("note"), Some("second"));
        assert_eq!(map.values("note"), ["second".to_string()]);
    }

    #[test]
    fn test_collect_keeps_every_value() {
        let map = extract(
            &["/note=\"first\"", "/db_xref=\"GI:1\"", "/note=\"second\""],
            DuplicatePolicy::Collect,
        );
        assert_eq!(map.get("note"), Some("second"));
        assert_eq!(
            map.values("note"),
            ["first".to_string(), "second".to_string()]
        );
        assert!(map.values("missing").is_empty());
    }

    #[test]
    fn test_bare_slash_is_dropped() {
        let map = extract(&["/", "/gene=\"x\""], DuplicatePolicy::LastWins);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("gene"));
    }

    #[test]
    fn test_leading_continuation_is_ignored() {
        let map = extract(&["dangling text", "/gene=\"x\""], DuplicatePolicy::LastWins);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("gene"), Some("x"));
    }
}
