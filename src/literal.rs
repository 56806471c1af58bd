use regex_syntax::{hir::literal::Extractor, parse};

/// Extract literal prefixes from a rule pattern for use as Aho-Corasick
/// pre-filter candidates. Returns lower-cased literals of at least `min_len`
/// bytes, or an empty vec when the pattern must be tried on every input.
///
/// The prefilter runs ASCII case-insensitively while rules are matched with
/// Unicode case folding, so the extraction gives up (returns empty) whenever
/// the two could disagree:
/// - the pattern cannot be parsed by `regex_syntax`,
/// - the literal set is infinite or any member is shorter than `min_len`,
/// - a literal contains non-ASCII text, or `k`/`s` (which fold to the Kelvin
///   sign and long s).
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(literals.len());
    for lit in literals {
        let Ok(s) = std::str::from_utf8(lit.as_bytes()) else {
            return Vec::new();
        };
        if s.len() < min_len || !prefilter_safe(s) {
            return Vec::new();
        }
        out.push(s.to_ascii_lowercase());
    }
    out.sort();
    out.dedup();
    out
}

fn prefilter_safe(literal: &str) -> bool {
    literal
        .bytes()
        .all(|b| b.is_ascii() && !matches!(b.to_ascii_lowercase(), b'k' | b's'))
}
