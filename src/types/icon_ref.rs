use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Symbolic reference to the icon asset representing a device category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconRef {
    #[serde(rename = "icon-iphone")]
    Iphone,
    #[serde(rename = "icon-ipad")]
    Ipad,
    #[serde(rename = "icon-android")]
    Android,
    /// Fallback for desktops and anything unrecognized.
    #[default]
    #[serde(rename = "icon-laptop")]
    Laptop,
}

impl IconRef {
    /// Every icon reference, in resolution priority order. The fallback is last.
    pub const ALL: [IconRef; 4] = [Self::Iphone, Self::Ipad, Self::Android, Self::Laptop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iphone => "icon-iphone",
            Self::Ipad => "icon-ipad",
            Self::Android => "icon-android",
            Self::Laptop => "icon-laptop",
        }
    }

    /// Fragment form (`#icon-iphone`) used to reference a symbol from an SVG sprite.
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Iphone => "#icon-iphone",
            Self::Ipad => "#icon-ipad",
            Self::Android => "#icon-android",
            Self::Laptop => "#icon-laptop",
        }
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconRef {
    type Err = Error;

    /// Accepts both the plain (`icon-ipad`) and anchor (`#icon-ipad`) forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix('#').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == name)
            .ok_or_else(|| Error::UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_prefixed_name() {
        for icon in IconRef::ALL {
            assert_eq!(icon.anchor(), format!("#{}", icon.as_str()));
        }
    }

    #[test]
    fn parses_both_forms() {
        assert_eq!("icon-ipad".parse::<IconRef>().unwrap(), IconRef::Ipad);
        assert_eq!("#icon-android".parse::<IconRef>().unwrap(), IconRef::Android);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            "icon-watch".parse::<IconRef>(),
            Err(Error::UnknownIcon(name)) if name == "icon-watch"
        ));
        assert!("ICON-IPAD".parse::<IconRef>().is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let yaml = serde_yaml::to_string(&IconRef::Iphone).unwrap();
        assert_eq!(yaml.trim(), "icon-iphone");
        let back: IconRef = serde_yaml::from_str("icon-laptop").unwrap();
        assert_eq!(back, IconRef::Laptop);
    }

    #[test]
    fn default_is_fallback() {
        assert_eq!(IconRef::default(), IconRef::Laptop);
        assert_eq!(IconRef::ALL.last(), Some(&IconRef::Laptop));
    }
}
