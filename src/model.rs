//! Typed landing-page records.
//!
//! These structs mirror the JSON records authored in the collection files
//! (camelCase keys). They are only decoded after [`validate`](crate::validate)
//! has accepted the raw JSON, so a decode failure here means the validator
//! and the model have drifted apart, not that the content is bad.
//!
//! [`Section`] is a closed sum type: an unrecognized `type` tag cannot reach
//! this layer, and every consumer has to handle all six variants.

use crate::types::Category;
use serde::{Deserialize, Deserializer, Serialize};

/// `type` tags of the six section variants, in declaration order.
pub const SECTION_TYPES: [&str; 6] = [
    "comparison-table",
    "benefits",
    "checklist",
    "how-it-works",
    "prose",
    "use-cases-grid",
];

/// One static SEO landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub slug: String,
    pub category: Category,
    pub meta: Meta,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub hero: Hero,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_title: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub features: Vec<IconItem>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    pub faqs: Vec<Faq>,
    pub cta: Cta,
}

/// Optional lists may be authored as `null`; read that as empty, the same
/// as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// SEO metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Absolute path, e.g. `/compare/newoldstamp`.
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub title: String,
    pub description: String,
    /// Theme token from the configured palette.
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub icon: String,
    pub text: String,
}

/// Short highlight metric (`"10k+"`, `"teams onboarded"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Icon + title + description card, shared by features, benefits and use cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Section {
    ComparisonTable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        competitor: String,
        rows: Vec<ComparisonRow>,
    },
    Benefits {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<IconItem>,
    },
    Checklist {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<String>,
    },
    HowItWorks {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        steps: Vec<Step>,
    },
    Prose {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        paragraphs: Vec<String>,
    },
    UseCasesGrid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<IconItem>,
    },
}

impl Section {
    /// The `type` tag this variant is authored with.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Section::ComparisonTable { .. } => SECTION_TYPES[0],
            Section::Benefits { .. } => SECTION_TYPES[1],
            Section::Checklist { .. } => SECTION_TYPES[2],
            Section::HowItWorks { .. } => SECTION_TYPES[3],
            Section::Prose { .. } => SECTION_TYPES[4],
            Section::UseCasesGrid { .. } => SECTION_TYPES[5],
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Section::ComparisonTable { title, .. }
            | Section::Benefits { title, .. }
            | Section::Checklist { title, .. }
            | Section::HowItWorks { title, .. }
            | Section::Prose { title, .. }
            | Section::UseCasesGrid { title, .. } => title.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub feature: String,
    pub siggly: Cell,
    pub competitor: Cell,
}

/// Tri-state comparison cell: yes, no, or partial support with a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Flag(bool),
    Caption(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Closing call-to-action block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::valid_record;
    use serde_json::json;

    #[test]
    fn decodes_valid_record() {
        let page: LandingPage =
            serde_json::from_value(valid_record(Category::Comparisons, "wisestamp")).unwrap();
        assert_eq!(page.slug, "wisestamp");
        assert_eq!(page.category, Category::Comparisons);
        assert_eq!(page.meta.canonical, "/compare/wisestamp");
        assert_eq!(page.breadcrumbs.last().unwrap().url, "/compare/wisestamp");
        assert_eq!(page.sections.len(), 2);
    }

    #[test]
    fn section_tags_are_kebab_case() {
        let section: Section = serde_json::from_value(json!({
            "type": "how-it-works",
            "steps": [{"step": 1, "title": "Connect", "description": "Link Google Workspace."}]
        }))
        .unwrap();
        assert_eq!(section.type_tag(), "how-it-works");
        assert_eq!(section.title(), None);
    }

    #[test]
    fn unknown_section_tag_does_not_decode() {
        let result: Result<Section, _> =
            serde_json::from_value(json!({"type": "pricing-slider", "min": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn cells_are_tri_state() {
        let row: ComparisonRow = serde_json::from_value(json!({
            "feature": "Bulk deployment",
            "siggly": true,
            "competitor": "Paid add-on"
        }))
        .unwrap();
        assert_eq!(row.siggly, Cell::Flag(true));
        assert_eq!(row.competitor, Cell::Caption("Paid add-on".to_string()));
    }

    #[test]
    fn numeric_cell_is_rejected() {
        let result: Result<ComparisonRow, _> = serde_json::from_value(json!({
            "feature": "Seats",
            "siggly": 10,
            "competitor": false
        }));
        assert!(result.is_err());
    }

    #[test]
    fn type_tags_cover_every_variant() {
        let sections = [
            json!({"type": "comparison-table", "competitor": "X", "rows": []}),
            json!({"type": "benefits", "items": []}),
            json!({"type": "checklist", "items": []}),
            json!({"type": "how-it-works", "steps": []}),
            json!({"type": "prose", "paragraphs": []}),
            json!({"type": "use-cases-grid", "items": []}),
        ];
        let tags: Vec<&str> = sections
            .into_iter()
            .map(|v| serde_json::from_value::<Section>(v).unwrap().type_tag())
            .collect();
        assert_eq!(tags, SECTION_TYPES);
    }

    #[test]
    fn null_optional_lists_decode_as_empty() {
        let mut record = valid_record(Category::Platforms, "gmail");
        for key in ["stats", "features", "sections"] {
            record[key] = json!(null);
        }
        let page: LandingPage = serde_json::from_value(record).unwrap();
        assert!(page.stats.is_empty());
        assert!(page.features.is_empty());
        assert!(page.sections.is_empty());
    }

    #[test]
    fn optional_blocks_are_omitted_when_serialized() {
        let mut record = valid_record(Category::Glossary, "dkim");
        let obj = record.as_object_mut().unwrap();
        obj.remove("stats");
        obj.remove("testimonial");
        let page: LandingPage = serde_json::from_value(record).unwrap();
        let out = serde_json::to_value(&page).unwrap();
        assert!(out.get("stats").is_none());
        assert!(out.get("testimonial").is_none());
        assert!(out.get("featuresTitle").is_some());
    }
}
