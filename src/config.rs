//! Catalog configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! are overridden by an optional `config.toml` in the content root:
//!
//! ```text
//! content/
//! ├── config.toml          # Optional overrides
//! ├── comparisons.json
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [routes]
//! comparisons = "/compare"
//! compliance = "/compliance"
//! glossary = "/glossary"
//! platforms = "/platforms"
//! templates = "/email-signature-templates"
//!
//! [breadcrumbs]
//! home_name = "Home"
//! home_url = "/"
//!
//! [validation]
//! theme_variants = ["dark", "light", "slate", "violet", "indigo", "emerald"]
//! max_cell_caption_len = 80
//! unique_slugs_across_categories = false
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//!
//! [pricing]
//! base_monthly = 29
//! per_seat = 1
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Catalog configuration loaded from `config.toml`.
///
/// All fields have defaults matching the production site. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Canonical URL prefix per category.
    pub routes: RoutesConfig,
    /// Root entry every breadcrumb trail starts with.
    pub breadcrumbs: BreadcrumbConfig,
    /// Content rules that are policy rather than shape.
    pub validation: ValidationConfig,
    /// Parallel validation settings.
    pub processing: ProcessingConfig,
    /// Team pricing calculator.
    pub pricing: PricingConfig,
}

impl CatalogConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let prefix = self.routes.prefix(category);
            if !prefix.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "routes.{category} must start with '/' (got '{prefix}')"
                )));
            }
        }
        if !self.breadcrumbs.home_url.starts_with('/') {
            return Err(ConfigError::Validation(
                "breadcrumbs.home_url must start with '/'".into(),
            ));
        }
        if self.validation.theme_variants.is_empty() {
            return Err(ConfigError::Validation(
                "validation.theme_variants must not be empty".into(),
            ));
        }
        if self.validation.max_cell_caption_len == 0 {
            return Err(ConfigError::Validation(
                "validation.max_cell_caption_len must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Canonical URL prefixes. A page's canonical path is `{prefix}/{slug}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutesConfig {
    pub comparisons: String,
    pub compliance: String,
    pub glossary: String,
    pub platforms: String,
    pub templates: String,
}

impl RoutesConfig {
    pub fn prefix(&self, category: Category) -> &str {
        match category {
            Category::Comparisons => &self.comparisons,
            Category::Compliance => &self.compliance,
            Category::Glossary => &self.glossary,
            Category::Platforms => &self.platforms,
            Category::Templates => &self.templates,
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            comparisons: "/compare".to_string(),
            compliance: "/compliance".to_string(),
            glossary: "/glossary".to_string(),
            platforms: "/platforms".to_string(),
            templates: "/email-signature-templates".to_string(),
        }
    }
}

/// The Home entry at the start of every breadcrumb trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbConfig {
    pub home_name: String,
    pub home_url: String,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            home_name: "Home".to_string(),
            home_url: "/".to_string(),
        }
    }
}

/// Content policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Theme tokens accepted by `hero.variant` and `cta.variant`.
    pub theme_variants: Vec<String>,
    /// Longest caption allowed in a comparison-table cell.
    pub max_cell_caption_len: usize,
    /// Reject a slug that appears in more than one category.
    pub unique_slugs_across_categories: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            theme_variants: ["dark", "light", "slate", "violet", "indigo", "emerald"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_cell_caption_len: 80,
            unique_slugs_across_categories: false,
        }
    }
}

impl ValidationConfig {
    pub fn is_known_variant(&self, token: &str) -> bool {
        self.theme_variants.iter().any(|v| v == token)
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel validation workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Team pricing: `base_monthly + per_seat * team_size` per month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub base_monthly: u32,
    pub per_seat: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_monthly: 29,
            per_seat: 1,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(CatalogConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<CatalogConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CatalogConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<CatalogConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Siggly Content Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content root, next to the collection files.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Canonical routes
# ---------------------------------------------------------------------------
# Every page's meta.canonical must be "{prefix}/{slug}" for its category,
# and its last breadcrumb must point at the same URL.
[routes]
comparisons = "/compare"
compliance = "/compliance"
glossary = "/glossary"
platforms = "/platforms"
templates = "/email-signature-templates"

# ---------------------------------------------------------------------------
# Breadcrumbs
# ---------------------------------------------------------------------------
# First entry of every breadcrumb trail.
[breadcrumbs]
home_name = "Home"
home_url = "/"

# ---------------------------------------------------------------------------
# Validation policy
# ---------------------------------------------------------------------------
[validation]
# Theme tokens accepted by hero.variant and cta.variant. Anything else is
# reported instead of rendering an unstyled page.
theme_variants = ["dark", "light", "slate", "violet", "indigo", "emerald"]

# Longest caption allowed in a comparison-table cell ("Partial", "Add-on").
max_cell_caption_len = 80

# Slugs only need to be unique within a category because each category has
# its own URL prefix. Turn this on if the router flattens categories.
unique_slugs_across_categories = false

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel validation workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4

# ---------------------------------------------------------------------------
# Pricing calculator
# ---------------------------------------------------------------------------
# Monthly price = base_monthly + per_seat * team size.
[pricing]
base_monthly = 29
per_seat = 1
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_routes_match_site() {
        let config = CatalogConfig::default();
        assert_eq!(config.routes.prefix(Category::Comparisons), "/compare");
        assert_eq!(
            config.routes.prefix(Category::Templates),
            "/email-signature-templates"
        );
    }

    #[test]
    fn default_palette() {
        let config = CatalogConfig::default();
        assert!(config.validation.is_known_variant("violet"));
        assert!(!config.validation.is_known_variant("neon"));
        assert!(!config.validation.unique_slugs_across_categories);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[routes]
templates = "/templates"
"#;
        let config: CatalogConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.routes.templates, "/templates");
        // Defaults preserved
        assert_eq!(config.routes.comparisons, "/compare");
        assert_eq!(config.breadcrumbs.home_url, "/");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.pricing.base_monthly, 29);
        assert_eq!(config.validation.max_cell_caption_len, 80);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[validation]
theme_variants = ["dark", "rose"]
unique_slugs_across_categories = true
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.validation.theme_variants, vec!["dark", "rose"]);
        assert!(config.validation.unique_slugs_across_categories);
        // Sibling key keeps its default
        assert_eq!(config.validation.max_cell_caption_len, 80);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[routes\ncompare = ").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[validation]
theme_variant = ["dark"]
"#;
        let result: Result<CatalogConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<CatalogConfig, _> = toml::from_str("[router]\nprefix = \"/\"\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_relative_route_prefix() {
        let mut config = CatalogConfig::default();
        config.routes.glossary = "glossary".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("routes.glossary"));
    }

    #[test]
    fn validate_empty_palette() {
        let mut config = CatalogConfig::default();
        config.validation.theme_variants.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_zero_caption_length() {
        let mut config = CatalogConfig::default();
        config.validation.max_cell_caption_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[breadcrumbs]\nhome_url = \"home\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_replaces_arrays_whole() {
        let base = stock_defaults_value();
        let overlay: toml::Value =
            toml::from_str("[validation]\ntheme_variants = [\"dark\"]").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.validation.theme_variants, vec!["dark"]);
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config.routes.compliance, "/compliance");
    }

    // =========================================================================
    // Processing tests
    // =========================================================================

    #[test]
    fn effective_threads_auto() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&ProcessingConfig::default()), cores);
    }

    #[test]
    fn effective_threads_user_constrains_down() {
        let config = ProcessingConfig {
            max_processes: Some(1),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    #[test]
    fn effective_threads_zero_means_one() {
        let config = ProcessingConfig {
            max_processes: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: CatalogConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = CatalogConfig::default();
        assert_eq!(config.routes.templates, defaults.routes.templates);
        assert_eq!(
            config.validation.theme_variants,
            defaults.validation.theme_variants
        );
        assert_eq!(config.pricing.base_monthly, 29);
        assert_eq!(config.processing.max_processes, None);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for section in ["routes", "breadcrumbs", "validation", "processing", "pricing"] {
            assert!(val.get(section).is_some(), "missing [{section}]");
        }
    }
}
