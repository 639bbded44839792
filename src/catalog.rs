//! The immutable content catalog.
//!
//! A [`Catalog`] is built once from a [`ScanManifest`] and handed by
//! reference to whatever consumes the pages. Building it runs the full
//! validation pass first; typed decoding only happens for content that
//! passed, so a catalog always holds well-formed records.
//!
//! ## Export Format
//!
//! [`Catalog::to_export_json`] writes the catalog as a single JSON document
//! for the site build:
//!
//! ```text
//! {
//!   "collections": [
//!     {
//!       "category": "comparisons",
//!       "collection": "comparisonsPages",
//!       "fingerprint": "<sha-256 of the source file>",
//!       "pages": [ { "slug": "newoldstamp", ... } ]
//!     }
//!   ]
//! }
//! ```

use crate::model::LandingPage;
use crate::scan::ScanManifest;
use crate::types::Category;
use crate::validate::{self, StructureError, ValidationReport};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error("content has {} validation error(s)", .0.errors.len())]
    Invalid(ValidationReport),
    #[error("{category} record #{index} passed validation but failed to decode: {source}")]
    Decode {
        category: Category,
        index: usize,
        source: serde_json::Error,
    },
}

/// One category's pages in authored order.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub category: Category,
    pub fingerprint: String,
    pub pages: Vec<LandingPage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    collections: BTreeMap<Category, Collection>,
}

/// A canonical route served by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub category: Category,
    pub slug: String,
    pub canonical: String,
    pub title: String,
}

#[derive(Serialize)]
struct ExportManifest<'a> {
    collections: Vec<ExportCollection<'a>>,
}

#[derive(Serialize)]
struct ExportCollection<'a> {
    category: Category,
    collection: &'static str,
    fingerprint: &'a str,
    pages: &'a [LandingPage],
}

impl Catalog {
    /// Validate every scanned collection and decode the typed records.
    pub fn build(manifest: &ScanManifest) -> Result<Catalog, CatalogError> {
        let report = validate::validate_all_collections(&manifest.collections, &manifest.config)?;
        if !report.is_ok() {
            return Err(CatalogError::Invalid(report));
        }

        let mut collections = BTreeMap::new();
        for (&category, records) in &manifest.collections {
            let pages = decode_pages(category, records)?;
            let fingerprint = manifest
                .sources
                .get(&category)
                .map(|s| s.fingerprint.clone())
                .unwrap_or_default();
            collections.insert(
                category,
                Collection {
                    category,
                    fingerprint,
                    pages,
                },
            );
        }

        let catalog = Catalog { collections };
        tracing::info!(pages = catalog.len(), "catalog built");
        Ok(catalog)
    }

    pub fn get(&self, category: Category, slug: &str) -> Option<&LandingPage> {
        self.pages(category).iter().find(|p| p.slug == slug)
    }

    /// Pages of a category in authored order; empty if the category is absent.
    pub fn pages(&self, category: Category) -> &[LandingPage] {
        self.collections
            .get(&category)
            .map(|c| c.pages.as_slice())
            .unwrap_or_default()
    }

    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    pub fn len(&self) -> usize {
        self.collections.values().map(|c| c.pages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every canonical route, by category then authored order.
    pub fn routes(&self) -> Vec<Route> {
        self.collections()
            .flat_map(|c| {
                c.pages.iter().map(|p| Route {
                    category: c.category,
                    slug: p.slug.clone(),
                    canonical: p.meta.canonical.clone(),
                    title: p.meta.title.clone(),
                })
            })
            .collect()
    }

    pub fn to_export_json(&self) -> serde_json::Result<String> {
        let manifest = ExportManifest {
            collections: self
                .collections()
                .map(|c| ExportCollection {
                    category: c.category,
                    collection: c.category.collection_name(),
                    fingerprint: &c.fingerprint,
                    pages: &c.pages,
                })
                .collect(),
        };
        serde_json::to_string_pretty(&manifest)
    }
}

fn decode_pages(category: Category, records: &Value) -> Result<Vec<LandingPage>, CatalogError> {
    let records = records.as_array().ok_or(StructureError::NotAnArray {
        category,
        found: validate::json_type(records),
    })?;
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record.clone()).map_err(|source| CatalogError::Decode {
                category,
                index,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crate::scan::scan;
    use crate::test_helpers::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn build_from_fixtures() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let catalog = Catalog::build(&manifest).unwrap();
        assert_eq!(catalog.collections().count(), 5);
        let page = find_page(&catalog, Category::Comparisons, "newoldstamp");
        assert_eq!(page.meta.canonical, "/compare/newoldstamp");
        assert!(matches!(page.sections[0], Section::ComparisonTable { .. }));
        assert_eq!(catalog.len(), catalog.routes().len());
    }

    #[test]
    fn invalid_content_returns_report() {
        let tmp = TempDir::new().unwrap();
        write_collection(
            tmp.path(),
            Category::Comparisons,
            &json!([
                valid_record(Category::Comparisons, "newoldstamp"),
                valid_record(Category::Comparisons, "newoldstamp"),
            ]),
        );
        let manifest = scan(tmp.path()).unwrap();
        match Catalog::build(&manifest) {
            Err(CatalogError::Invalid(report)) => {
                assert_eq!(report.errors.len(), 1);
                assert_eq!(report.errors[0].slug, "newoldstamp");
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn accepted_records_always_decode() {
        let edits: [fn(&mut Value); 10] = [
            |_| {},
            |r| r["stats"] = Value::Null,
            |r| r["features"] = Value::Null,
            |r| r["sections"] = Value::Null,
            |r| r["testimonial"] = Value::Null,
            |r| r["featuresTitle"] = Value::Null,
            |r| r["hero"]["badge"] = Value::Null,
            |r| r["cta"]["variant"] = Value::Null,
            |r| r["sections"][0]["title"] = Value::Null,
            |r| r["faqs"] = json!([]),
        ];
        let records: Vec<Value> = edits
            .iter()
            .enumerate()
            .map(|(i, edit)| {
                let mut record = valid_record(Category::Glossary, &format!("term-{i}"));
                edit(&mut record);
                record
            })
            .collect();
        let records = Value::Array(records);

        let config = crate::config::CatalogConfig::default();
        let report = validate::validate_collection(&records, Category::Glossary, &config).unwrap();
        assert!(report.is_ok(), "{:#?}", report.errors);

        let tmp = TempDir::new().unwrap();
        write_collection(tmp.path(), Category::Glossary, &records);
        let catalog = Catalog::build(&scan(tmp.path()).unwrap()).unwrap();
        assert_eq!(catalog.len(), edits.len());
        assert!(find_page(&catalog, Category::Glossary, "term-3").sections.is_empty());
        assert!(find_page(&catalog, Category::Glossary, "term-1").stats.is_empty());
    }

    #[test]
    fn structure_error_propagates() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("glossary.json"), "[1, 2]").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert!(matches!(
            Catalog::build(&manifest),
            Err(CatalogError::Structure(StructureError::RecordNotObject { index: 0, .. }))
        ));
    }

    #[test]
    fn lookups_and_order() {
        let tmp = TempDir::new().unwrap();
        write_collection(
            tmp.path(),
            Category::Platforms,
            &json!([
                valid_record(Category::Platforms, "outlook"),
                valid_record(Category::Platforms, "gmail"),
            ]),
        );
        let catalog = Catalog::build(&scan(tmp.path()).unwrap()).unwrap();
        let slugs: Vec<_> = catalog
            .pages(Category::Platforms)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["outlook", "gmail"]);
        assert!(catalog.get(Category::Platforms, "apple-mail").is_none());
        assert!(catalog.pages(Category::Glossary).is_empty());
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn routes_follow_category_order() {
        let tmp = TempDir::new().unwrap();
        write_collection(
            tmp.path(),
            Category::Templates,
            &json!([valid_record(Category::Templates, "minimal")]),
        );
        write_collection(
            tmp.path(),
            Category::Compliance,
            &json!([valid_record(Category::Compliance, "gdpr")]),
        );
        let catalog = Catalog::build(&scan(tmp.path()).unwrap()).unwrap();
        let canonicals: Vec<_> = catalog.routes().into_iter().map(|r| r.canonical).collect();
        assert_eq!(
            canonicals,
            vec!["/compliance/gdpr", "/email-signature-templates/minimal"]
        );
    }

    #[test]
    fn export_json_shape() {
        let tmp = TempDir::new().unwrap();
        write_collection(
            tmp.path(),
            Category::Glossary,
            &json!([valid_record(Category::Glossary, "dkim")]),
        );
        let manifest = scan(tmp.path()).unwrap();
        let catalog = Catalog::build(&manifest).unwrap();
        let exported: Value = serde_json::from_str(&catalog.to_export_json().unwrap()).unwrap();
        let collection = &exported["collections"][0];
        assert_eq!(collection["category"], "glossary");
        assert_eq!(collection["collection"], "glossaryPages");
        assert_eq!(
            collection["fingerprint"],
            manifest.sources[&Category::Glossary].fingerprint.as_str()
        );
        assert_eq!(collection["pages"][0]["slug"], "dkim");
        assert_eq!(collection["pages"][0]["featuresTitle"], "Why teams switch");
    }
}
