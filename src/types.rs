//! Content categories shared by every stage.
//!
//! Each category is one collection of landing pages. The category decides
//! the collection file name under the content root and, through
//! [`RoutesConfig`](crate::config::RoutesConfig), the URL prefix of its pages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five landing-page collections.
///
/// Ordering follows declaration order and is the order collections are
/// scanned, validated, reported and exported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Comparisons,
    Compliance,
    Glossary,
    Platforms,
    Templates,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Comparisons,
        Category::Compliance,
        Category::Glossary,
        Category::Platforms,
        Category::Templates,
    ];

    /// Tag used in the record's `category` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Comparisons => "comparisons",
            Category::Compliance => "compliance",
            Category::Glossary => "glossary",
            Category::Platforms => "platforms",
            Category::Templates => "templates",
        }
    }

    /// Collection file name under the content root (`comparisons.json`).
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Name of the exported page array in the web app (`comparisonsPages`).
    pub fn collection_name(self) -> &'static str {
        match self {
            Category::Comparisons => "comparisonsPages",
            Category::Compliance => "compliancePages",
            Category::Glossary => "glossaryPages",
            Category::Platforms => "platformsPages",
            Category::Templates => "templatesPages",
        }
    }

    /// Heading used in CLI reports.
    pub fn label(self) -> &'static str {
        match self {
            Category::Comparisons => "Comparisons",
            Category::Compliance => "Compliance",
            Category::Glossary => "Glossary",
            Category::Platforms => "Platforms",
            Category::Templates => "Templates",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
