//! Build-time validation of landing-page collections.
//!
//! The validator walks the raw JSON of each collection and checks every
//! record against the record shape and the content invariants:
//!
//! - slugs are URL-safe and unique within their category
//! - `category` matches the collection the record lives in
//! - `meta.canonical` is `{route prefix}/{slug}` for the collection's category
//! - breadcrumbs start at Home and end at `meta.canonical`
//! - `sections[].type` is one of the six known variants, and each variant
//!   carries its required fields
//! - comparison cells are `true`, `false` or a short caption
//! - `hero.variant` and `cta.variant` are known theme tokens
//!
//! ## Failure Semantics
//!
//! Validation never stops at the first defect. Every problem is collected
//! into a [`ValidationReport`] so content authors can fix a whole batch in
//! one pass; the caller decides whether a non-empty report blocks the build
//! or is only logged.
//!
//! The only hard failure is a [`StructureError`]: a collection that is not a
//! JSON array, or an element that is not a JSON object. That is corruption of
//! the input itself rather than a content mistake.
//!
//! ## Determinism
//!
//! Validation is a pure function of its inputs. Errors are ordered by
//! category, then record index, then field order within the record, so two
//! runs over the same content produce identical reports.

use crate::config::CatalogConfig;
use crate::naming::{canonical_path, is_url_safe_slug, record_label};
use crate::types::Category;
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Input that is too corrupt to validate record by record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("{category} collection must be a JSON array, found {found}")]
    NotAnArray {
        category: Category,
        found: &'static str,
    },
    #[error("{category} record #{index} must be a JSON object, found {found}")]
    RecordNotObject {
        category: Category,
        index: usize,
        found: &'static str,
    },
}

/// What went wrong with a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("duplicate slug '{slug}' (first used by record #{first_index})")]
    DuplicateSlug { slug: String, first_index: usize },
    #[error("slug '{slug}' is already used by {other_category} record #{other_index}")]
    CrossCategoryDuplicate {
        slug: String,
        other_category: Category,
        other_index: usize,
    },
    #[error("category '{found}' does not belong in the {expected} collection")]
    CategoryMismatch { expected: Category, found: String },
    #[error("canonical is '{found}', expected '{expected}'")]
    CanonicalMismatch { expected: String, found: String },
    #[error("last breadcrumb points to '{found}', canonical is '{canonical}'")]
    BreadcrumbMismatch { canonical: String, found: String },
    #[error("first breadcrumb should be '{expected}', found '{found}'")]
    BreadcrumbRoot { expected: String, found: String },
    #[error("unknown section type '{found}'")]
    UnknownSectionType { found: String },
    #[error("{section_type} section requires a non-empty '{field}'")]
    MissingSectionField {
        section_type: &'static str,
        field: &'static str,
    },
    #[error("required field is missing or empty")]
    MissingField,
    #[error("expected {expected}, found {found}")]
    InvalidField {
        expected: &'static str,
        found: &'static str,
    },
    #[error("slug '{slug}' is not URL-safe (lowercase letters, digits, single dashes)")]
    InvalidSlug { slug: String },
    #[error("unknown theme variant '{found}'")]
    UnknownVariant { found: String },
    #[error("comparison cell must be true, false or a caption of 1-{max_len} characters")]
    InvalidComparisonCell { max_len: usize },
    #[error("collection has no records")]
    EmptyCollection,
}

/// One content defect, located by category, record and field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}/{}{}: {}", .category, .slug, at_path(.path), .kind)]
pub struct ValidationError {
    pub category: Category,
    /// Record slug, or `#<index>` when the slug is missing or unusable,
    /// or `*` for collection-level errors.
    pub slug: String,
    /// Position of the record in its collection.
    pub index: Option<usize>,
    /// Field path within the record, e.g. `sections[2].rows`.
    pub path: String,
    pub kind: ErrorKind,
}

fn at_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at {path}")
    }
}

/// Everything one validation run found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects in deterministic order.
    pub errors: Vec<ValidationError>,
    /// Number of records examined per category.
    pub checked: BTreeMap<Category, usize>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn records_checked(&self) -> usize {
        self.checked.values().sum()
    }

    pub fn errors_in(&self, category: Category) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.category == category)
    }

    /// `Ok(())` for a clean run, otherwise the ordered, non-empty error list.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.checked.extend(other.checked);
    }
}

/// Validate one collection against the rules for `category`.
///
/// `records` is the collection's raw JSON. Returns `Err` only for structural
/// corruption; content defects are returned inside the report.
pub fn validate_collection(
    records: &Value,
    category: Category,
    config: &CatalogConfig,
) -> Result<ValidationReport, StructureError> {
    let records = records.as_array().ok_or(StructureError::NotAnArray {
        category,
        found: json_type(records),
    })?;
    if let Some((index, record)) = records.iter().enumerate().find(|(_, r)| !r.is_object()) {
        return Err(StructureError::RecordNotObject {
            category,
            index,
            found: json_type(record),
        });
    }

    let mut report = ValidationReport::default();
    report.checked.insert(category, records.len());

    if records.is_empty() {
        report.errors.push(ValidationError {
            category,
            slug: "*".to_string(),
            index: None,
            path: String::new(),
            kind: ErrorKind::EmptyCollection,
        });
        return Ok(report);
    }

    // First insertion wins; every later collision is reported.
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let Some(obj) = record.as_object() else {
            continue;
        };
        let slug = obj.get("slug").and_then(Value::as_str);
        let mut check = RecordCheck {
            category,
            index,
            label: record_label(index, slug),
            config,
            errors: &mut report.errors,
        };
        if let Some(slug) = slug.filter(|s| !s.is_empty()) {
            match seen.get(slug) {
                Some(&first_index) => check.report(
                    "slug",
                    ErrorKind::DuplicateSlug {
                        slug: slug.to_string(),
                        first_index,
                    },
                ),
                None => {
                    seen.insert(slug, index);
                }
            }
        }
        check.record(obj);
    }

    tracing::debug!(
        category = %category,
        records = records.len(),
        errors = report.errors.len(),
        "validated collection"
    );
    Ok(report)
}

/// Validate every collection, in parallel, and apply cross-category rules.
///
/// Collections are validated independently; the merged report lists them in
/// category order regardless of which worker finished first.
pub fn validate_all_collections(
    collections: &BTreeMap<Category, Value>,
    config: &CatalogConfig,
) -> Result<ValidationReport, StructureError> {
    let entries: Vec<(&Category, &Value)> = collections.iter().collect();
    let reports: Vec<Result<ValidationReport, StructureError>> = entries
        .par_iter()
        .map(|(category, records)| validate_collection(records, **category, config))
        .collect();

    let mut merged = ValidationReport::default();
    for report in reports {
        merged.merge(report?);
    }

    if config.validation.unique_slugs_across_categories {
        merged.errors.extend(cross_category_duplicates(collections));
    }

    tracing::info!(
        collections = collections.len(),
        records = merged.records_checked(),
        errors = merged.errors.len(),
        "validation finished"
    );
    Ok(merged)
}

/// Slugs reused across categories. Within-category repeats are left to
/// [`validate_collection`]; only the first use per category is compared.
fn cross_category_duplicates(collections: &BTreeMap<Category, Value>) -> Vec<ValidationError> {
    let mut owners: HashMap<&str, (Category, usize)> = HashMap::new();
    let mut errors = Vec::new();
    for (&category, records) in collections {
        let Some(records) = records.as_array() else {
            continue;
        };
        let mut local: HashMap<&str, usize> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            let Some(slug) = record.get("slug").and_then(Value::as_str) else {
                continue;
            };
            if slug.is_empty() || local.contains_key(slug) {
                continue;
            }
            local.insert(slug, index);
            match owners.get(slug) {
                Some(&(other_category, other_index)) => errors.push(ValidationError {
                    category,
                    slug: slug.to_string(),
                    index: Some(index),
                    path: "slug".to_string(),
                    kind: ErrorKind::CrossCategoryDuplicate {
                        slug: slug.to_string(),
                        other_category,
                        other_index,
                    },
                }),
                None => {
                    owners.insert(slug, (category, index));
                }
            }
        }
    }
    errors
}

// ============================================================================
// Per-record checks
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum SectionKind {
    ComparisonTable,
    Benefits,
    Checklist,
    HowItWorks,
    Prose,
    UseCasesGrid,
}

impl SectionKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "comparison-table" => Some(Self::ComparisonTable),
            "benefits" => Some(Self::Benefits),
            "checklist" => Some(Self::Checklist),
            "how-it-works" => Some(Self::HowItWorks),
            "prose" => Some(Self::Prose),
            "use-cases-grid" => Some(Self::UseCasesGrid),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::ComparisonTable => "comparison-table",
            Self::Benefits => "benefits",
            Self::Checklist => "checklist",
            Self::HowItWorks => "how-it-works",
            Self::Prose => "prose",
            Self::UseCasesGrid => "use-cases-grid",
        }
    }
}

struct RecordCheck<'a> {
    category: Category,
    index: usize,
    label: String,
    config: &'a CatalogConfig,
    errors: &'a mut Vec<ValidationError>,
}

impl RecordCheck<'_> {
    fn report(&mut self, path: impl Into<String>, kind: ErrorKind) {
        self.errors.push(ValidationError {
            category: self.category,
            slug: self.label.clone(),
            index: Some(self.index),
            path: path.into(),
            kind,
        });
    }

    fn record(&mut self, obj: &Map<String, Value>) {
        let slug = self.required_str(obj, "", "slug");
        if let Some(slug) = slug
            && !is_url_safe_slug(slug)
        {
            self.report(
                "slug",
                ErrorKind::InvalidSlug {
                    slug: slug.to_string(),
                },
            );
        }

        if let Some(found) = self.required_str(obj, "", "category")
            && found != self.category.as_str()
        {
            self.report(
                "category",
                ErrorKind::CategoryMismatch {
                    expected: self.category,
                    found: found.to_string(),
                },
            );
        }

        let canonical = self.meta(obj, slug);
        self.breadcrumbs(obj, canonical);
        self.hero(obj);

        if let Some(stats) = self.optional_objects(obj, "", "stats") {
            for (i, stat) in stats {
                let path = indexed("stats", i);
                self.required_str(stat, &path, "value");
                self.required_str(stat, &path, "label");
            }
        }

        self.optional_str(obj, "", "featuresTitle");
        if let Some(features) = self.optional_objects(obj, "", "features") {
            for (i, item) in features {
                self.icon_item(item, &indexed("features", i));
            }
        }

        if let Some(sections) = self.optional_array(obj, "", "sections") {
            for (i, section) in sections.iter().enumerate() {
                self.section(section, &indexed("sections", i));
            }
        }

        if let Some(testimonial) = self.optional_object(obj, "", "testimonial") {
            for key in ["quote", "authorName", "authorTitle"] {
                self.required_str(testimonial, "testimonial", key);
            }
        }

        if let Some(faqs) = self.required_objects(obj, "", "faqs") {
            for (i, faq) in faqs {
                let path = indexed("faqs", i);
                self.required_str(faq, &path, "question");
                self.required_str(faq, &path, "answer");
            }
        }

        if let Some(cta) = self.required_object(obj, "", "cta") {
            self.required_str(cta, "cta", "title");
            self.required_str(cta, "cta", "description");
            if let Some(variant) = self.optional_str(cta, "cta", "variant") {
                self.variant(variant, "cta.variant");
            }
        }
    }

    /// Checks `meta` and returns the canonical URL when one is present.
    fn meta<'v>(&mut self, obj: &'v Map<String, Value>, slug: Option<&str>) -> Option<&'v str> {
        let meta = self.required_object(obj, "", "meta")?;
        self.required_str(meta, "meta", "title");
        self.required_str(meta, "meta", "description");
        if let Some(keywords) = self.required_array(meta, "meta", "keywords") {
            self.string_items(keywords, "meta.keywords");
        }

        let canonical = self.required_str(meta, "meta", "canonical")?;
        if let Some(slug) = slug {
            let expected = canonical_path(self.config.routes.prefix(self.category), slug);
            if canonical != expected {
                self.report(
                    "meta.canonical",
                    ErrorKind::CanonicalMismatch {
                        expected,
                        found: canonical.to_string(),
                    },
                );
            }
        }
        Some(canonical)
    }

    fn breadcrumbs(&mut self, obj: &Map<String, Value>, canonical: Option<&str>) {
        let Some(trail) = self.required_array(obj, "", "breadcrumbs") else {
            return;
        };
        let mut names = Vec::with_capacity(trail.len());
        let mut urls = Vec::with_capacity(trail.len());
        for (i, crumb) in trail.iter().enumerate() {
            let path = indexed("breadcrumbs", i);
            let Some(crumb) = self.expect_object(crumb, &path) else {
                names.push(None);
                urls.push(None);
                continue;
            };
            names.push(self.required_str(crumb, &path, "name"));
            urls.push(self.required_str(crumb, &path, "url"));
        }

        let config = self.config;
        let home = &config.breadcrumbs;
        for (key, expected, found) in [
            ("name", home.home_name.as_str(), names.first()),
            ("url", home.home_url.as_str(), urls.first()),
        ] {
            if let Some(Some(found)) = found
                && *found != expected
            {
                self.report(
                    format!("breadcrumbs[0].{key}"),
                    ErrorKind::BreadcrumbRoot {
                        expected: expected.to_string(),
                        found: found.to_string(),
                    },
                );
            }
        }

        if let (Some(canonical), Some(Some(last))) = (canonical, urls.last())
            && *last != canonical
        {
            self.report(
                format!("{}.url", indexed("breadcrumbs", urls.len() - 1)),
                ErrorKind::BreadcrumbMismatch {
                    canonical: canonical.to_string(),
                    found: last.to_string(),
                },
            );
        }
    }

    fn hero(&mut self, obj: &Map<String, Value>) {
        let Some(hero) = self.required_object(obj, "", "hero") else {
            return;
        };
        if let Some(badge) = self.optional_object(hero, "hero", "badge") {
            self.required_str(badge, "hero.badge", "icon");
            self.required_str(badge, "hero.badge", "text");
        }
        self.required_str(hero, "hero", "title");
        self.required_str(hero, "hero", "description");
        if let Some(variant) = self.required_str(hero, "hero", "variant") {
            self.variant(variant, "hero.variant");
        }
    }

    fn variant(&mut self, token: &str, path: &str) {
        if !self.config.validation.is_known_variant(token) {
            self.report(
                path,
                ErrorKind::UnknownVariant {
                    found: token.to_string(),
                },
            );
        }
    }

    fn icon_item(&mut self, item: &Map<String, Value>, path: &str) {
        for key in ["icon", "title", "description"] {
            self.required_str(item, path, key);
        }
    }

    fn section(&mut self, section: &Value, path: &str) {
        let Some(obj) = self.expect_object(section, path) else {
            return;
        };
        // Without a known tag the remaining fields mean nothing; don't read them.
        let kind = match obj.get("type") {
            Some(Value::String(tag)) => SectionKind::from_tag(tag).ok_or_else(|| {
                if tag.trim().is_empty() {
                    "<missing>".to_string()
                } else {
                    tag.clone()
                }
            }),
            None | Some(Value::Null) => Err("<missing>".to_string()),
            Some(other) => Err(format!("<{}>", json_type(other))),
        };
        let kind = match kind {
            Ok(kind) => kind,
            Err(found) => {
                self.report(join(path, "type"), ErrorKind::UnknownSectionType { found });
                return;
            }
        };

        self.optional_str(obj, path, "title");
        match kind {
            SectionKind::ComparisonTable => {
                self.section_str(obj, path, kind, "competitor");
                if let Some(rows) = self.section_array(obj, path, kind, "rows") {
                    let rows_path = join(path, "rows");
                    for (i, row) in rows.iter().enumerate() {
                        let row_path = indexed(&rows_path, i);
                        let Some(row) = self.expect_object(row, &row_path) else {
                            continue;
                        };
                        self.required_str(row, &row_path, "feature");
                        self.cell(row, &row_path, "siggly");
                        self.cell(row, &row_path, "competitor");
                    }
                }
            }
            SectionKind::Benefits | SectionKind::UseCasesGrid => {
                if let Some(items) = self.section_array(obj, path, kind, "items") {
                    let items_path = join(path, "items");
                    for (i, item) in items.iter().enumerate() {
                        let item_path = indexed(&items_path, i);
                        if let Some(item) = self.expect_object(item, &item_path) {
                            self.icon_item(item, &item_path);
                        }
                    }
                }
            }
            SectionKind::Checklist => {
                if let Some(items) = self.section_array(obj, path, kind, "items") {
                    self.string_items(items, &join(path, "items"));
                }
            }
            SectionKind::HowItWorks => {
                if let Some(steps) = self.section_array(obj, path, kind, "steps") {
                    let steps_path = join(path, "steps");
                    for (i, step) in steps.iter().enumerate() {
                        let step_path = indexed(&steps_path, i);
                        let Some(step) = self.expect_object(step, &step_path) else {
                            continue;
                        };
                        self.step_number(step, &step_path);
                        self.required_str(step, &step_path, "title");
                        self.required_str(step, &step_path, "description");
                    }
                }
            }
            SectionKind::Prose => {
                if let Some(paragraphs) = self.section_array(obj, path, kind, "paragraphs") {
                    self.string_items(paragraphs, &join(path, "paragraphs"));
                }
            }
        }
    }

    fn step_number(&mut self, step: &Map<String, Value>, path: &str) {
        let path = join(path, "step");
        match step.get("step") {
            None | Some(Value::Null) => self.report(path, ErrorKind::MissingField),
            Some(Value::Number(n))
                if n.as_u64().is_some_and(|n| n > 0 && n <= u64::from(u32::MAX)) => {}
            Some(other) => self.report(
                path,
                ErrorKind::InvalidField {
                    expected: "positive integer",
                    found: json_type(other),
                },
            ),
        }
    }

    fn cell(&mut self, row: &Map<String, Value>, path: &str, key: &str) {
        let path = join(path, key);
        let max_len = self.config.validation.max_cell_caption_len;
        match row.get(key) {
            None | Some(Value::Null) => self.report(path, ErrorKind::MissingField),
            Some(Value::Bool(_)) => {}
            Some(Value::String(s))
                if !s.trim().is_empty() && s.chars().count() <= max_len => {}
            Some(_) => self.report(path, ErrorKind::InvalidComparisonCell { max_len }),
        }
    }

    // ------------------------------------------------------------------------
    // Field accessors: each reports its own defect and yields the value when
    // it is usable.
    // ------------------------------------------------------------------------

    fn required_str<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v str> {
        let path = join(parent, key);
        match obj.get(key) {
            None | Some(Value::Null) => {
                self.report(path, ErrorKind::MissingField);
                None
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.report(path, ErrorKind::MissingField);
                None
            }
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                self.report(
                    path,
                    ErrorKind::InvalidField {
                        expected: "string",
                        found: json_type(other),
                    },
                );
                None
            }
        }
    }

    fn optional_str<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v str> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(_) => self.required_str(obj, parent, key),
        }
    }

    fn expect_object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(obj) => Some(obj),
            other => {
                self.report(
                    path,
                    ErrorKind::InvalidField {
                        expected: "object",
                        found: json_type(other),
                    },
                );
                None
            }
        }
    }

    fn required_object<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v Map<String, Value>> {
        let path = join(parent, key);
        match obj.get(key) {
            None | Some(Value::Null) => {
                self.report(path, ErrorKind::MissingField);
                None
            }
            Some(value) => self.expect_object(value, &path),
        }
    }

    fn optional_object<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v Map<String, Value>> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => self.expect_object(value, &join(parent, key)),
        }
    }

    /// A required array. Breadcrumbs and other trails may not be empty;
    /// `faqs` may.
    fn required_array<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v Vec<Value>> {
        let path = join(parent, key);
        match obj.get(key) {
            None | Some(Value::Null) => {
                self.report(path, ErrorKind::MissingField);
                None
            }
            Some(Value::Array(items)) if items.is_empty() && key == "breadcrumbs" => {
                self.report(path, ErrorKind::MissingField);
                None
            }
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.report(
                    path,
                    ErrorKind::InvalidField {
                        expected: "array",
                        found: json_type(other),
                    },
                );
                None
            }
        }
    }

    fn optional_array<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v Vec<Value>> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(_) => self.required_array(obj, parent, key),
        }
    }

    /// Object elements of an array, with non-objects reported and skipped.
    fn objects<'v>(
        &mut self,
        items: &'v [Value],
        path: &str,
    ) -> Vec<(usize, &'v Map<String, Value>)> {
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| self.expect_object(item, &indexed(path, i)).map(|o| (i, o)))
            .collect()
    }

    fn required_objects<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<Vec<(usize, &'v Map<String, Value>)>> {
        let items = self.required_array(obj, parent, key)?;
        Some(self.objects(items, &join(parent, key)))
    }

    fn optional_objects<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<Vec<(usize, &'v Map<String, Value>)>> {
        let items = self.optional_array(obj, parent, key)?;
        Some(self.objects(items, &join(parent, key)))
    }

    fn string_items(&mut self, items: &[Value], path: &str) {
        for (i, item) in items.iter().enumerate() {
            let item_path = indexed(path, i);
            match item {
                Value::String(s) if s.trim().is_empty() => {
                    self.report(item_path, ErrorKind::MissingField)
                }
                Value::String(_) => {}
                other => self.report(
                    item_path,
                    ErrorKind::InvalidField {
                        expected: "string",
                        found: json_type(other),
                    },
                ),
            }
        }
    }

    fn section_str(&mut self, obj: &Map<String, Value>, path: &str, kind: SectionKind, key: &'static str) {
        match obj.get(key) {
            None | Some(Value::Null) => self.missing_section_field(path, kind, key),
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.missing_section_field(path, kind, key)
            }
            Some(Value::String(_)) => {}
            Some(other) => self.report(
                join(path, key),
                ErrorKind::InvalidField {
                    expected: "string",
                    found: json_type(other),
                },
            ),
        }
    }

    fn section_array<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        path: &str,
        kind: SectionKind,
        key: &'static str,
    ) -> Option<&'v Vec<Value>> {
        match obj.get(key) {
            None | Some(Value::Null) => {
                self.missing_section_field(path, kind, key);
                None
            }
            Some(Value::Array(items)) if items.is_empty() => {
                self.missing_section_field(path, kind, key);
                None
            }
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.report(
                    join(path, key),
                    ErrorKind::InvalidField {
                        expected: "array",
                        found: json_type(other),
                    },
                );
                None
            }
        }
    }

    fn missing_section_field(&mut self, path: &str, kind: SectionKind, field: &'static str) {
        self.report(
            join(path, field),
            ErrorKind::MissingSectionField {
                section_type: kind.tag(),
                field,
            },
        );
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn indexed(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// JSON type name used in error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
