use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;
use crate::types::IconRef;

// ---------------------------------------------------------------------------
// Icon rules  (regexes/icons.yml)
//
// Format: top-level mapping  icon_ref → [regex_pattern, ...]
// ---------------------------------------------------------------------------

/// Raw deserialization target for an icon rule file.
/// Uses IndexMap to preserve YAML insertion order (first-match-wins).
pub(crate) type IconRuleMap = IndexMap<IconRef, Vec<String>>;

/// Rule database compiled into the crate.
pub(crate) const BUILTIN_RULES_YAML: &str = include_str!("../regexes/icons.yml");

pub(crate) fn parse_rules(yaml: &str) -> Result<IconRuleMap> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub(crate) fn load_rules(path: &Path) -> Result<IconRuleMap> {
    let content = std::fs::read_to_string(path)?;
    parse_rules(&content)
}

/// Flatten the mapping into `(pattern, icon)` pairs, keeping priority order.
pub(crate) fn flatten(rules: IconRuleMap) -> Vec<(String, IconRef)> {
    rules
        .into_iter()
        .flat_map(|(icon, patterns)| patterns.into_iter().map(move |p| (p, icon)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_keep_file_order() {
        let rules = parse_rules(BUILTIN_RULES_YAML).unwrap();
        let order: Vec<IconRef> = rules.keys().copied().collect();
        assert_eq!(order, vec![IconRef::Iphone, IconRef::Ipad, IconRef::Android]);
    }

    #[test]
    fn flatten_expands_pattern_lists() {
        let rules = parse_rules("icon-ipad: [iPad, Tablet]\nicon-android: [android]\n").unwrap();
        assert_eq!(
            flatten(rules),
            vec![
                ("iPad".to_string(), IconRef::Ipad),
                ("Tablet".to_string(), IconRef::Ipad),
                ("android".to_string(), IconRef::Android),
            ]
        );
    }

    #[test]
    fn unknown_icon_key_is_an_error() {
        assert!(parse_rules("icon-watch: [Watch]\n").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_rules(Path::new("regexes/does-not-exist.yml")).unwrap_err();
        assert!(matches!(err, crate::Error::IO(_)));
    }
}
