use aho_corasick::AhoCorasick;
use rayon::prelude::*;

use crate::error::Result;
use crate::literal::extract_literals;

/// Shortest literal worth handing to the prefilter.
const MIN_LITERAL_LEN: usize = 3;

/// Build the full rule regex: case-insensitive, matched anywhere in the input.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i)(?:{})", pattern)
}

// ---------------------------------------------------------------------------
// CompiledRules — ordered first-match-wins list behind a literal prefilter
// ---------------------------------------------------------------------------

/// Core matching engine: Aho-Corasick literal prefilter + fancy-regex confirm.
///
/// `T` is the data attached to each rule (the icon it resolves to).
pub(crate) struct CompiledRules<T> {
    /// Case-insensitive automaton over every extracted literal.
    prefilter: AhoCorasick,
    /// Maps automaton pattern id → rule index.
    literal_to_rule: Vec<usize>,
    /// Rules with no usable literal, tried on every input. Sorted.
    always: Vec<usize>,
    /// Compiled rule regexes, indexed by rule index.
    regexes: Vec<fancy_regex::Regex>,
    /// Rule data, indexed by rule index.
    data: Vec<T>,
}

impl<T> CompiledRules<T> {
    /// Build from `(pattern, data)` pairs. Order is priority.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self> {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        let regexes: Vec<fancy_regex::Regex> = patterns
            .par_iter()
            .map(|p| fancy_regex::Regex::new(&full_pattern(p)).map_err(crate::error::Error::from))
            .collect::<Result<Vec<_>>>()?;

        let mut literals: Vec<String> = Vec::new();
        let mut literal_to_rule: Vec<usize> = Vec::new();
        let mut always: Vec<usize> = Vec::new();

        for (idx, pattern) in patterns.iter().enumerate() {
            let lits = extract_literals(pattern, MIN_LITERAL_LEN);
            if lits.is_empty() {
                always.push(idx);
                continue;
            }
            for lit in lits {
                literals.push(lit);
                literal_to_rule.push(idx);
            }
        }

        let prefilter = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&literals)?;

        tracing::debug!(
            rules = regexes.len(),
            literals = literals.len(),
            always = always.len(),
            "compiled icon rules"
        );

        Ok(Self {
            prefilter,
            literal_to_rule,
            always,
            regexes,
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    /// Rules worth confirming against `text`, as a mask indexed by rule.
    fn candidate_mask(&self, text: &str) -> Vec<bool> {
        let mut mask = vec![false; self.regexes.len()];
        for m in self.prefilter.find_overlapping_iter(text) {
            mask[self.literal_to_rule[m.pattern().as_usize()]] = true;
        }
        for &idx in &self.always {
            mask[idx] = true;
        }
        mask
    }

    /// Data of the first rule (in original order) matching `text`.
    ///
    /// A rule whose regex gives up (backtrack limit) counts as not matching.
    pub fn match_first(&self, text: &str) -> Option<&T> {
        self.candidate_mask(text)
            .into_iter()
            .enumerate()
            .filter(|&(_, candidate)| candidate)
            .find(|&(idx, _)| match self.regexes[idx].is_match(text) {
                Ok(matched) => matched,
                Err(err) => {
                    tracing::debug!(rule = idx, error = %err, "icon rule aborted");
                    false
                }
            })
            .map(|(idx, _)| &self.data[idx])
    }
}
