//! Style categories.

use serde::{Deserialize, Serialize};

use super::StyleError;

/// Grouping tag used to filter the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Serif,
    Script,
    Fancy,
    Decoration,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Basic,
        Category::Serif,
        Category::Script,
        Category::Fancy,
        Category::Decoration,
    ];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Serif => "serif",
            Category::Script => "script",
            Category::Fancy => "fancy",
            Category::Decoration => "decoration",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StyleError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "Basic".parse::<Category>(),
            Err(StyleError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Decoration).unwrap();
        assert_eq!(json, "\"decoration\"");
    }
}
