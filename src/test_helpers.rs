//! Shared test utilities for the siggly-content test suite.
//!
//! Provides a well-formed record builder, fixture setup, and lookups over
//! validation reports and catalogs.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut record = valid_record(Category::Comparisons, "wisestamp");
//! record["hero"]["variant"] = json!("neon");
//! let report = validate_collection(&json!([record]), Category::Comparisons, &config).unwrap();
//! assert_eq!(find_error(&report, "hero.variant").slug, "wisestamp");
//! ```

use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::model::LandingPage;
use crate::naming::canonical_path;
use crate::types::Category;
use crate::validate::{ErrorKind, ValidationError, ValidationReport};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Write a collection file into a content directory.
pub fn write_collection(root: &Path, category: Category, records: &Value) {
    std::fs::write(
        root.join(category.file_name()),
        serde_json::to_string_pretty(records).unwrap(),
    )
    .unwrap();
}

// =========================================================================
// Record builder
// =========================================================================

/// A record that passes validation under the default config.
///
/// Carries every optional block so tests can strip what they don't need.
pub fn valid_record(category: Category, slug: &str) -> Value {
    let routes = CatalogConfig::default().routes;
    let prefix = routes.prefix(category);
    let canonical = canonical_path(prefix, slug);
    json!({
        "slug": slug,
        "category": category.as_str(),
        "meta": {
            "title": format!("{slug} | Siggly"),
            "description": format!("Everything about {slug}."),
            "keywords": [slug, "email signature"],
            "canonical": canonical,
        },
        "breadcrumbs": [
            {"name": "Home", "url": "/"},
            {"name": category.label(), "url": prefix},
            {"name": slug, "url": canonical},
        ],
        "hero": {
            "badge": {"icon": "sparkles", "text": "New"},
            "title": format!("{slug} made simple"),
            "description": "Centrally managed email signatures.",
            "variant": "violet",
        },
        "stats": [{"value": "10k+", "label": "signatures deployed"}],
        "featuresTitle": "Why teams switch",
        "features": [
            {"icon": "users", "title": "Directory sync", "description": "Pulls titles from your directory."}
        ],
        "sections": [
            {
                "type": "comparison-table",
                "title": "Feature by feature",
                "competitor": "Legacy Tool",
                "rows": [
                    {"feature": "Central management", "siggly": true, "competitor": false},
                    {"feature": "Analytics", "siggly": true, "competitor": "Paid add-on"},
                ],
            },
            {"type": "checklist", "items": ["Consistent branding", "Legal disclaimers"]},
        ],
        "testimonial": {
            "quote": "Rollout took an afternoon.",
            "authorName": "Dana Reyes",
            "authorTitle": "IT Lead",
        },
        "faqs": [{"question": "Is there a free trial?", "answer": "Yes, 14 days."}],
        "cta": {"title": "Start free", "description": "No credit card required.", "variant": "dark"},
    })
}

// =========================================================================
// Report lookups: panic with a clear message on miss
// =========================================================================

/// Error kinds in report order.
pub fn kinds(report: &ValidationReport) -> Vec<ErrorKind> {
    report.errors.iter().map(|e| e.kind.clone()).collect()
}

/// Find the first error at a field path. Panics if not found.
pub fn find_error<'a>(report: &'a ValidationReport, path: &str) -> &'a ValidationError {
    report
        .errors
        .iter()
        .find(|e| e.path == path)
        .unwrap_or_else(|| {
            let paths: Vec<&str> = report.errors.iter().map(|e| e.path.as_str()).collect();
            panic!("no error at '{path}'. Errors at: {paths:?}")
        })
}

/// Find a page in a catalog. Panics if not found.
pub fn find_page<'a>(catalog: &'a Catalog, category: Category, slug: &str) -> &'a LandingPage {
    catalog.get(category, slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = catalog.pages(category).iter().map(|p| p.slug.as_str()).collect();
        panic!("page '{category}/{slug}' not found. Available: {slugs:?}")
    })
}
