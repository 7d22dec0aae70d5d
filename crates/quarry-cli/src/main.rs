//! quarry CLI: run declarative queries over a product catalog.

mod demo;
mod render;

use clap::{Parser, Subcommand, ValueEnum};
use quarry_core::prelude::{
    Catalog, CatalogFormat, PredicateSet, Product, ProductField, QuarryConfig,
};
use quarry_io::writers::jsonl::JsonlWriter;
use quarry_io::CatalogSource;
use quarry_operators::{AsQuery, Query};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quarry")]
#[command(about = "Declarative queries (filter, sort, project, any/all, first/last) over a product catalog", long_about = None)]
struct Cli {
    /// Catalog file, JSON or CSV (overrides QUARRY_CATALOG). Defaults to the embedded sample.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Catalog format (overrides QUARRY_CATALOG_FORMAT)
    #[arg(long, global = true)]
    catalog_format: Option<CatalogFormat>,

    /// Log filter directive (overrides QUARRY_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort, and optionally project products
    Query {
        /// Predicate such as "price >= 30" or "name ~ Alice"; repeat to AND them
        #[arg(short = 'w', long = "where")]
        predicates: Vec<String>,

        /// Field to sort by
        #[arg(long)]
        sort: Option<ProductField>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Emit only this field of each match
        #[arg(long)]
        select: Option<ProductField>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Output::Table)]
        output: Output,

        /// Write results to this file instead of stdout
        #[arg(long)]
        out: Option<String>,
    },

    /// Print whether any product matches
    Any {
        #[arg(short = 'w', long = "where")]
        predicates: Vec<String>,
    },

    /// Print whether every product matches (true for an empty catalog)
    All {
        #[arg(short = 'w', long = "where")]
        predicates: Vec<String>,
    },

    /// Print the first matching product, or "none"
    First {
        #[arg(short = 'w', long = "where")]
        predicates: Vec<String>,
    },

    /// Print the last matching product, or "none"
    Last {
        #[arg(short = 'w', long = "where")]
        predicates: Vec<String>,
    },

    /// Run the built-in sample queries
    Demo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    Table,
    Jsonl,
}

fn main() {
    let cli = Cli::parse();

    let mut config = QuarryConfig::from_env();
    apply_cli_overrides(&mut config, &cli);
    init_tracing(&config.log_filter);

    if let Err(e) = run(&cli.command, &config, &mut io::stdout().lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn apply_cli_overrides(cfg: &mut QuarryConfig, cli: &Cli) {
    if let Some(path) = &cli.catalog {
        cfg.catalog_path = Some(path.clone());
    }
    if let Some(format) = cli.catalog_format {
        cfg.catalog_format = format;
    }
    if let Some(filter) = &cli.log {
        cfg.log_filter = filter.clone();
    }
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run<W: Write>(
    command: &Commands,
    config: &QuarryConfig,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = CatalogSource::from_config(config);
    let catalog = source.load()?;
    tracing::info!(source = ?source, products = catalog.len(), "catalog loaded");
    execute(command, &catalog, out)
}

fn execute<W: Write>(
    command: &Commands,
    catalog: &Catalog,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Query {
            predicates,
            sort,
            desc,
            select,
            output,
            out: out_path,
        } => {
            let preds = PredicateSet::parse_all(predicates)?;
            let result = run_query(catalog, &preds, *sort, *desc);
            tracing::debug!(matched = result.count(), "query evaluated");
            match out_path {
                Some(path) => {
                    let mut w = JsonlWriter::to_path(path, select.map(|f| vec![f]))?;
                    let n = w.write_products(result.iter())?;
                    tracing::info!(path = %path, rows = n, "results written");
                }
                None => emit(out, &result, *select, *output)?,
            }
        }
        Commands::Any { predicates } => {
            let preds = PredicateSet::parse_all(predicates)?;
            writeln!(out, "{}", catalog.as_slice().query().any(|p| preds.matches(p)))?;
        }
        Commands::All { predicates } => {
            let preds = PredicateSet::parse_all(predicates)?;
            writeln!(out, "{}", catalog.as_slice().query().all(|p| preds.matches(p)))?;
        }
        Commands::First { predicates } => {
            let preds = PredicateSet::parse_all(predicates)?;
            let hit = quarry_operators::first_match(catalog.as_slice(), |p| preds.matches(p));
            render::write_optional(out, hit)?;
        }
        Commands::Last { predicates } => {
            let preds = PredicateSet::parse_all(predicates)?;
            let hit = quarry_operators::last_match(catalog.as_slice(), |p| preds.matches(p));
            render::write_optional(out, hit)?;
        }
        Commands::Demo => demo::run_demo(out, catalog)?,
    }

    Ok(())
}

fn run_query<'a>(
    catalog: &'a Catalog,
    preds: &PredicateSet,
    sort: Option<ProductField>,
    descending: bool,
) -> Query<'a, Product> {
    let filtered = catalog.as_slice().query().filter(|p| preds.matches(p));
    match sort {
        Some(field) => sort_by_field(&filtered, field, descending),
        None => filtered,
    }
}

fn sort_by_field<'a>(
    q: &Query<'a, Product>,
    field: ProductField,
    descending: bool,
) -> Query<'a, Product> {
    // Text fields compare by reference instead of cloning a key per comparison.
    let by_name = |a: &Product, b: &Product| a.name.cmp(&b.name);
    let by_category = |a: &Product, b: &Product| a.category.cmp(&b.category);
    match (field, descending) {
        (ProductField::Id, false) => q.sort_ascending(|p| p.id),
        (ProductField::Id, true) => q.sort_descending(|p| p.id),
        (ProductField::Name, false) => q.sort_ascending_by(by_name),
        (ProductField::Name, true) => q.sort_descending_by(by_name),
        (ProductField::Category, false) => q.sort_ascending_by(by_category),
        (ProductField::Category, true) => q.sort_descending_by(by_category),
        (ProductField::Price, false) => q.sort_ascending(|p| p.price),
        (ProductField::Price, true) => q.sort_descending(|p| p.price),
        (ProductField::Stock, false) => q.sort_ascending(|p| p.stock),
        (ProductField::Stock, true) => q.sort_descending(|p| p.stock),
    }
}

fn emit<W: Write>(
    out: &mut W,
    result: &Query<'_, Product>,
    select: Option<ProductField>,
    output: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    match (select, output) {
        (Some(field), Output::Table) => {
            for value in result.project(|p| field.render(p)) {
                writeln!(out, "{}", value)?;
            }
        }
        (Some(field), Output::Jsonl) => {
            let values = result.project(|p| field.to_json(p));
            JsonlWriter::to_writer(&mut *out, None).write_values(&values)?;
        }
        (None, Output::Table) => {
            render::write_table(out, &result.clone().into_refs())?;
        }
        (None, Output::Jsonl) => {
            JsonlWriter::to_writer(&mut *out, None).write_products(result.iter())?;
        }
    }
    Ok(())
}
