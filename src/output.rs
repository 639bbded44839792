//! CLI output formatting.
//!
//! Output is **content-centric**: each collection leads with its label and
//! record count, each record with its positional index and slug, and source
//! files or field paths follow as indented context lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Collections
//! 001 Comparisons (2 records)
//!     Source: comparisons.json
//!     001 newoldstamp
//!     002 wisestamp
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Check
//!
//! ```text
//! Comparisons (2 records)
//!     newoldstamp at slug: duplicate slug 'newoldstamp' (first used by record #0)
//! Glossary (4 records)
//!     ok
//!
//! Checked 6 records in 2 collections: 1 error
//! ```
//!
//! ## Export
//!
//! ```text
//! 001 Comparisons → 2 pages
//! 002 Glossary → 4 pages
//!
//! Exported 6 pages → dist/catalog.json
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::catalog::{Catalog, Route};
use crate::naming::record_label;
use crate::pricing::Quote;
use crate::scan::ScanManifest;
use crate::types::Category;
use crate::validate::ValidationReport;
use serde_json::Value;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn collection_header(category: Category, records: usize) -> String {
    format!("{} ({})", category.label(), plural(records, "record", "records"))
}

// ============================================================================
// Scan
// ============================================================================

/// Format the inventory of scanned collections.
pub fn format_scan_output(manifest: &ScanManifest) -> Vec<String> {
    let mut lines = vec!["Collections".to_string()];

    for (pos, (category, records)) in manifest.collections.iter().enumerate() {
        let count = manifest.record_count(*category);
        lines.push(format!(
            "{} {}",
            format_index(pos + 1),
            collection_header(*category, count)
        ));
        if let Some(source) = manifest.sources.get(category) {
            lines.push(format!("{}Source: {}", indent(1), source.file));
        }
        match records.as_array() {
            Some(items) => {
                for (i, record) in items.iter().enumerate() {
                    let slug = record.get("slug").and_then(Value::as_str);
                    lines.push(format!(
                        "{}{} {}",
                        indent(1),
                        format_index(i + 1),
                        record_label(i, slug)
                    ));
                }
            }
            None => lines.push(format!("{}(not a JSON array)", indent(1))),
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if manifest.root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }

    lines
}

pub fn print_scan_output(manifest: &ScanManifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format a validation report grouped by collection.
pub fn format_check_output(report: &ValidationReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (&category, &records) in &report.checked {
        lines.push(collection_header(category, records));
        let mut clean = true;
        for error in report.errors_in(category) {
            clean = false;
            let location = if error.path.is_empty() {
                error.slug.clone()
            } else {
                format!("{} at {}", error.slug, error.path)
            };
            lines.push(format!("{}{}: {}", indent(1), location, error.kind));
        }
        if clean {
            lines.push(format!("{}ok", indent(1)));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Checked {} in {}: {}",
        plural(report.records_checked(), "record", "records"),
        plural(report.checked.len(), "collection", "collections"),
        if report.is_ok() {
            "no errors".to_string()
        } else {
            plural(report.errors.len(), "error", "errors")
        }
    ));
    lines
}

pub fn print_check_output(report: &ValidationReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Export
// ============================================================================

/// Format the export summary: one line per collection, then the target file.
pub fn format_export_output(catalog: &Catalog, output_file: &Path) -> Vec<String> {
    let mut lines: Vec<String> = catalog
        .collections()
        .enumerate()
        .map(|(pos, c)| {
            format!(
                "{} {} \u{2192} {}",
                format_index(pos + 1),
                c.category.label(),
                plural(c.pages.len(), "page", "pages")
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Exported {} \u{2192} {}",
        plural(catalog.len(), "page", "pages"),
        output_file.display()
    ));
    lines
}

pub fn print_export_output(catalog: &Catalog, output_file: &Path) {
    for line in format_export_output(catalog, output_file) {
        println!("{}", line);
    }
}

// ============================================================================
// Routes
// ============================================================================

/// One line per route: canonical path, then the page title.
pub fn format_routes(routes: &[Route]) -> Vec<String> {
    routes
        .iter()
        .map(|r| format!("{} \u{2192} {}", r.canonical, r.title))
        .collect()
}

pub fn print_routes(routes: &[Route]) {
    for line in format_routes(routes) {
        println!("{}", line);
    }
}

// ============================================================================
// Pricing
// ============================================================================

pub fn format_quote(quote: &Quote) -> Vec<String> {
    vec![
        format!("Team size: {}", quote.team_size),
        format!("Monthly: ${}", quote.monthly),
        format!("Annual: ${}", quote.annual),
    ]
}

pub fn print_quote(quote: &Quote) {
    for line in format_quote(quote) {
        println!("{}", line);
    }
}
