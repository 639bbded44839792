use clap::{Parser, Subcommand};
use siggly_content::catalog::Catalog;
use siggly_content::{config, logging, output, pricing, scan, validate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "siggly-content")]
#[command(about = "Validate and export the Siggly landing-page catalog")]
#[command(long_about = "\
Validate and export the Siggly landing-page catalog

Each collection is a JSON array of landing-page records in the content
directory:

  content/
  ├── config.toml          # Optional overrides (see gen-config)
  ├── comparisons.json     # /compare/{slug}
  ├── compliance.json      # /compliance/{slug}
  ├── glossary.json        # /glossary/{slug}
  ├── platforms.json       # /platforms/{slug}
  └── templates.json       # /email-signature-templates/{slug}

'check' reports every defect in one pass: duplicate slugs, records in the
wrong collection, canonical URLs and breadcrumbs that disagree, unknown
section types and missing section fields.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every collection and report all defects
    Check {
        /// Report defects but exit successfully
        #[arg(long)]
        warn_only: bool,
    },
    /// List the collections and records in the content directory
    Scan,
    /// Validate, then write the catalog to <output>/catalog.json
    Export,
    /// Print the canonical route of every page
    Routes,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Quote the monthly and annual price for a team
    Price {
        /// Number of people on the team
        #[arg(long)]
        team_size: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose).map_err(|e| e as Box<dyn std::error::Error>)?;
    tracing::debug!(source = %cli.source.display(), "parsed cli");

    match cli.command {
        Command::Check { warn_only } => {
            let manifest = scan::scan(&cli.source)?;
            init_thread_pool(&manifest.config.processing);
            let report =
                validate::validate_all_collections(&manifest.collections, &manifest.config)?;
            output::print_check_output(&report);
            if !report.is_ok() {
                if warn_only {
                    tracing::warn!(errors = report.errors.len(), "content has validation errors");
                } else {
                    return Err(format!(
                        "content validation failed with {} error(s)",
                        report.errors.len()
                    )
                    .into());
                }
            }
        }
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
        }
        Command::Export => {
            let catalog = build_catalog(&cli.source)?;
            std::fs::create_dir_all(&cli.output)?;
            let output_file = cli.output.join("catalog.json");
            std::fs::write(&output_file, catalog.to_export_json()?)?;
            output::print_export_output(&catalog, &output_file);
        }
        Command::Routes => {
            let catalog = build_catalog(&cli.source)?;
            output::print_routes(&catalog.routes());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Price { team_size } => {
            let pricing_config = if cli.source.join("config.toml").exists() {
                config::load_config(&cli.source)?.pricing
            } else {
                config::PricingConfig::default()
            };
            output::print_quote(&pricing::quote(&pricing_config, team_size));
        }
    }

    Ok(())
}

/// Scan and build the catalog, printing the report when content is invalid.
fn build_catalog(source: &std::path::Path) -> Result<Catalog, Box<dyn std::error::Error>> {
    let manifest = scan::scan(source)?;
    init_thread_pool(&manifest.config.processing);
    match Catalog::build(&manifest) {
        Ok(catalog) => Ok(catalog),
        Err(siggly_content::catalog::CatalogError::Invalid(report)) => {
            output::print_check_output(&report);
            Err(format!(
                "content validation failed with {} error(s)",
                report.errors.len()
            )
            .into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; config can only lower it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
