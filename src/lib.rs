//! # Siggly Content
//!
//! Content catalog and build-time validator for the Siggly SEO landing
//! pages: comparison pages, compliance guides, glossary entries, platform
//! guides and signature templates.
//!
//! Every landing page is a static record: SEO metadata, breadcrumbs, a hero
//! block, optional stats, features, typed content sections and a
//! testimonial, then FAQs and a closing call to action. The records are
//! authored as JSON, one file per collection, and checked here before the
//! site is built so broken links, duplicate routes and malformed sections
//! never reach a visitor.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      content/*.json  →  ScanManifest      (raw JSON + config)
//! 2. Validate  ScanManifest    →  ValidationReport  (every defect, one pass)
//! 3. Catalog   ScanManifest    →  Catalog           (typed, immutable)
//! 4. Export    Catalog         →  dist/catalog.json
//! ```
//!
//! Validation runs on raw JSON rather than on the typed model so that a
//! single run can report every defect (an unknown section type, a missing
//! field, a wrongly-typed cell) instead of stopping at the first decode
//! error. Only content that passes is decoded into [`model::LandingPage`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Reads collection files and `config.toml` from the content root |
//! | [`validate`] | Per-collection and catalog-wide validation, error taxonomy |
//! | [`catalog`] | Immutable typed catalog, route listing, JSON export |
//! | [`model`] | Typed landing-page records and the section sum type |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`types`] | The five content categories |
//! | [`naming`] | Slug and canonical-route conventions |
//! | [`pricing`] | Team pricing calculator |
//! | [`output`] | CLI report formatting |
//! | [`logging`] | Diagnostic `tracing` setup |

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod naming;
pub mod output;
pub mod pricing;
pub mod scan;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
