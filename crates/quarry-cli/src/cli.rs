//! Command-line arguments.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use quarry::spec::Id;
use rust_decimal::Decimal;

/// Largest catalog `--size` accepts.
pub const MAX_CATALOG_SIZE: u64 = 1_000_000;

/// Quarry - query a seeded entity catalog with composable specifications
#[derive(Debug, Parser)]
#[command(name = "quarry")]
#[command(version)]
#[command(about = "Query a seeded entity catalog with composable specifications", long_about = None)]
pub struct Cli {
    /// Raise logging to debug (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Number of entities in the seeded catalog
    #[arg(
        long,
        default_value_t = 50,
        global = true,
        value_parser = clap::value_parser!(u64).range(..=MAX_CATALOG_SIZE)
    )]
    pub size: u64,

    /// Reference instant the catalog's creation dates are spread around (RFC 3339)
    #[arg(long, global = true)]
    pub reference: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the whole seeded catalog
    List,

    /// Print the entities matching the given filters
    Query(QueryArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Filters for `quarry query`.
///
/// Every filter given becomes one clause. Clauses are combined with ALL OF,
/// or ANY OF with `--any`. With no filters, ALL OF matches everything and
/// ANY OF matches nothing.
#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    /// Only active entities
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Only inactive entities
    #[arg(long)]
    pub inactive: bool,

    /// Id equals
    #[arg(long)]
    pub id: Option<Id>,

    /// Lowest id, inclusive
    #[arg(long)]
    pub id_min: Option<Id>,

    /// Highest id, inclusive
    #[arg(long)]
    pub id_max: Option<Id>,

    /// Id is one of a comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<Id>,

    /// Name equals (case-sensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Name equals, ignoring case
    #[arg(long)]
    pub name_ignore_case: Option<String>,

    /// Name contains
    #[arg(long)]
    pub name_contains: Option<String>,

    /// Name starts with
    #[arg(long)]
    pub name_starts_with: Option<String>,

    /// Name ends with
    #[arg(long)]
    pub name_ends_with: Option<String>,

    /// Whole name matches a regular expression
    #[arg(long)]
    pub name_regex: Option<String>,

    /// Shortest name length in characters, inclusive
    #[arg(long)]
    pub name_len_min: Option<usize>,

    /// Longest name length in characters, inclusive
    #[arg(long)]
    pub name_len_max: Option<usize>,

    /// Price strictly greater than
    #[arg(long)]
    pub price_gt: Option<Decimal>,

    /// Price strictly less than
    #[arg(long)]
    pub price_lt: Option<Decimal>,

    /// Lowest price, inclusive
    #[arg(long)]
    pub price_min: Option<Decimal>,

    /// Highest price, inclusive
    #[arg(long)]
    pub price_max: Option<Decimal>,

    /// Created strictly before (RFC 3339)
    #[arg(long)]
    pub created_before: Option<DateTime<Utc>>,

    /// Created strictly after (RFC 3339)
    #[arg(long)]
    pub created_after: Option<DateTime<Utc>>,

    /// Match when any filter holds instead of all
    #[arg(long)]
    pub any: bool,

    /// Negate the combined filter
    #[arg(long)]
    pub negate: bool,

    /// Print only the first match
    #[arg(long)]
    pub first: bool,
}
