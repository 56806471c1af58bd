use std::path::Path;

use rayon::prelude::*;

use super::db;
use super::error::Result;
use super::helpers::contains_ignore_ascii_case;
use super::parser::CompiledRules;
use super::types::IconRef;

/// Fixed rule list behind [`resolve_device_icon`]. Order is priority.
const DEVICE_ICON_RULES: [(&str, IconRef); 3] = [
    ("iPhone", IconRef::Iphone),
    ("iPad", IconRef::Ipad),
    ("android", IconRef::Android),
];

/// Map a user-agent (or any client identification string) to an icon reference.
///
/// Checks, in order and case-insensitively, whether the input contains
/// `iPhone`, `iPad` or `android` anywhere; the first hit wins. Anything else,
/// including the empty string, resolves to [`IconRef::Laptop`].
///
/// ```
/// use device_icon::{resolve_device_icon, IconRef};
///
/// assert_eq!(resolve_device_icon("Mozilla/5.0 (Linux; Android 11)"), IconRef::Android);
/// assert_eq!(resolve_device_icon(""), IconRef::Laptop);
/// ```
pub fn resolve_device_icon(identifier: &str) -> IconRef {
    DEVICE_ICON_RULES
        .iter()
        .find(|(needle, _)| contains_ignore_ascii_case(identifier, needle))
        .map(|&(_, icon)| icon)
        .unwrap_or(IconRef::Laptop)
}

/// Reusable resolver compiled from an icon rule database.
///
/// The database is an ordered YAML mapping from icon reference to a list of
/// case-insensitive regex patterns:
///
/// ```yaml
/// icon-iphone:
///   - 'iPhone'
/// icon-ipad:
///   - 'iPad'
/// ```
///
/// Patterns match anywhere in the input. The first icon (in file order) with a
/// matching pattern wins; no match resolves to [`IconRef::Laptop`].
pub struct IconResolver {
    rules: CompiledRules<IconRef>,
}

impl IconResolver {
    /// Build from the rule database bundled with the crate. Resolves exactly
    /// like [`resolve_device_icon`].
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(db::BUILTIN_RULES_YAML)
    }

    /// Load a rule database from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let rules = db::load_rules(path.as_ref())?;
        Self::from_rules(rules)
    }

    /// Parse a rule database from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let rules = db::parse_rules(yaml)?;
        Self::from_rules(rules)
    }

    fn from_rules(rules: db::IconRuleMap) -> Result<Self> {
        let rules = CompiledRules::build(db::flatten(rules))?;
        Ok(Self { rules })
    }

    /// Number of compiled patterns.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Icon of the first matching rule; no match gives [`IconRef::Laptop`].
    pub fn resolve(&self, identifier: &str) -> IconRef {
        self.rules
            .match_first(identifier)
            .copied()
            .unwrap_or(IconRef::Laptop)
    }

    /// Resolve a batch in parallel. Output order follows input order.
    pub fn resolve_all<S>(&self, identifiers: &[S]) -> Vec<IconRef>
    where
        S: AsRef<str> + Sync,
    {
        identifiers
            .par_iter()
            .map(|id| self.resolve(id.as_ref()))
            .collect()
    }
}
