use super::qualifier::QualifierMap;

/// Number of translation characters kept before the `...` marker.
const TRANSLATION_PREVIEW: usize = 50;

/// Renders the GFF3 attribute column for one feature.
///
/// Only a fixed set of qualifiers is carried over, in this order: `ID`/`Name`
/// (from `locus_tag`, else `gene`), `product`, `gene` (not on `gene` features),
/// `protein_id`, `translation` (truncated) and `note`. Returns `.` when none of
/// them is present.
///
/// # Example
///
/// ```
/// use gbff2gff::gbff::{extract_qualifiers, format_attributes, DuplicatePolicy};
///
/// let map = extract_qualifiers(
///     ["/locus_tag=\"ABC123\"", "/product=\"Hypothetical protein\""],
///     DuplicatePolicy::LastWins,
/// );
/// assert_eq!(
///     format_attributes(&map, "CDS"),
///     "ID=ABC123;Name=ABC123;product=Hypothetical protein"
/// );
/// ```
pub fn format_attributes(qualifiers: &QualifierMap, feature_type: &str) -> String {
    let mut attrs: Vec<String> = Vec::new();

    if let Some(id) = qualifiers
        .get("locus_tag")
        .or_else(|| qualifiers.get("gene"))
    {
        attrs.push(format!("ID={id}"));
        attrs.push(format!("Name={id}"));
    }

    if qualifiers.contains_key("product") {
        attrs.push(format!("product={}", escaped_values(qualifiers, "product")));
    }

    if feature_type != "gene" {
        if let Some(gene) = qualifiers.get("gene") {
            attrs.push(format!("gene={gene}"));
        }
    }

    if let Some(protein_id) = qualifiers.get("protein_id") {
        attrs.push(format!("protein_id={protein_id}"));
    }

    if let Some(translation) = qualifiers.get("translation") {
        attrs.push(format!("translation={}", truncate_translation(translation)));
    }

    if qualifiers.contains_key("note") {
        attrs.push(format!("note={}", escaped_values(qualifiers, "note")));
    }

    if attrs.is_empty() {
        ".".to_string()
    } else {
        attrs.join(";")
    }
}

/// Percent-escapes the GFF3 reserved characters `;`, `=` and `&`.
///
/// # Example
///
/// ```
/// use gbff2gff::gbff::escape_value;
///
/// assert_eq!(escape_value("a;b=c&d"), "a%3Bb%3Dc%26d");
/// ```
pub fn escape_value(value: &str) -> String {
    value
        .replace(';', "%3B")
        .replace('=', "%3D")
        .replace('&', "%26")
}

/// Escapes every value of `key`; repeated values become a GFF3 multi-value list.
fn escaped_values(qualifiers: &QualifierMap, key: &str) -> String {
    match qualifiers.values(key) {
        [single] => escape_value(single),
        many => many
            .iter()
            .map(|value| escape_value(value).replace(',', "%2C"))
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn truncate_translation(translation: &str) -> String {
    match translation.char_indices().nth(TRANSLATION_PREVIEW) {
        Some((cut, _)) => format!("{}...", &translation[..cut]),
        None => translation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gbff::{extract_qualifiers, DuplicatePolicy};

    fn map(lines: &[&str]) -> QualifierMap {
        extract_qualifiers(lines.iter().copied(), DuplicatePolicy::LastWins)
    }

    #[test]
    fn test_no_recognized_qualifiers() {
        assert_eq!(format_attributes(&map(&[]), "CDS"), ".");
        assert_eq!(
            format_attributes(&map(&["/codon_start=1", "/db_xref=\"GI:1\""]), "CDS"),
            "."
        );
    }

    #[test]
    fn test_locus_tag_takes_precedence() {
        let qualifiers = map(&["/gene=\"thrA\"", "/locus_tag=\"b0002\""]);
        assert_eq!(
            format_attributes(&qualifiers, "CDS"),
            "ID=b0002;Name=b0002;gene=thrA"
        );
    }

    #[test]
    fn test_gene_not_repeated_on_gene_features() {
        let qualifiers = map(&["/gene=\"thrA\""]);
        assert_eq!(format_attributes(&qualifiers, "gene"), "ID=thrA;Name=thrA");
        assert_eq!(
            format_attributes(&qualifiers, "mRNA"),
            "ID=thrA;Name=thrA;gene=thrA"
        );
    }

    #[test]
    fn test_note_escaping() {
        let qualifiers = map(&["/note=\"hello; world\""]);
        assert_eq!(format_attributes(&qualifiers, "misc_feature"), "note=hello%3B world");
    }

    #[test]
    fn test_product_escaping() {
        let qualifiers = map(&["/product=\"A&B=C;D\""]);
        assert_eq!(
            format_attributes(&qualifiers, "CDS"),
            "product=A%26B%3DC%3BD"
        );
    }

    #[test]
    fn test_full_ordering() {
        let qualifiers = map(&[
            "/note=\"n\"",
            "/translation=\"MKT\"",
            "/protein_id=\"AAC73113.1\"",
            "/gene=\"thrA\"",
            "/product=\"p\"",
            "/locus_tag=\"b0002\"",
        ]);
        assert_eq!(
            format_attributes(&qualifiers, "CDS"),
            "ID=b0002;Name=b0002;product=p;gene=thrA;protein_id=AAC73113.1;translation=MKT;note=n"
        );
    }

    #[test]
    fn test_translation_truncated() {
        let protein = "M".repeat(80);
        let line = format!("/translation=\"{protein}\"");
        let qualifiers = map(&[line.as_str()]);
        let expected = format!("translation={}...", "M".repeat(50));
        assert_eq!(format_attributes(&qualifiers, "CDS"), expected);
    }

    #[test]
    fn test_translation_at_limit_kept() {
        let protein = "A".repeat(50);
        let line = format!("/translation=\"{protein}\"");
        let qualifiers = map(&[line.as_str()]);
        assert_eq!(
            format_attributes(&qualifiers, "CDS"),
            format!("translation={protein}")
        );
    }

    #[test]
    fn test_collected_notes_become_multi_value() {
        let qualifiers = extract_qualifiers(
            ["/note=\"a, b\"", "/note=\"c;d\""],
            DuplicatePolicy::Collect,
        );
        assert_eq!(
            format_attributes(&qualifiers, "gene"),
            "note=a%2C b,c%3Bd"
        );
    }
}
