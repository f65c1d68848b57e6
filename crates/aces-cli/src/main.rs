//! aces - *aces-dev* reference OpenColorIO config generation CLI
//!
//! Derives OpenColorIO configs from the *aces-dev* CTL transform tree.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "aces")]
#[command(author, version, about = "aces-dev reference OpenColorIO config generation")]
#[command(long_about = "
Derives OpenColorIO configs from the aces-dev CTL transform tree.

The conversion graph built from the CTL transforms drives everything:
colorspaces, reference chains, displays and views all map one to one
onto the transform tree.

Examples:
  aces generate -t aces-dev/transforms/ctl -o config.ocio
  aces generate --settings settings.yaml
  aces generate -t ctl/ --describe short --no-validate
  aces transforms -t ctl/ --family odt
  aces transforms -t ctl/ --yaml
  aces path -t ctl/ odt/Rec709_100nits_dim ACES2065-1
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the reference config
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// List classified CTL transforms
    #[command(visible_alias = "t")]
    Transforms(TransformsArgs),

    /// Resolve the conversion path between two colorspace nodes
    #[command(visible_alias = "p")]
    Path(PathArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Settings file (YAML), command line flags override it
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Root directory of the CTL transform tree
    #[arg(short, long)]
    transforms: Option<PathBuf>,

    /// Config file to write, prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Description style: short, long, short_union, long_union
    #[arg(short, long)]
    describe: Option<String>,

    /// Skip config validation
    #[arg(long)]
    no_validate: bool,

    /// Glob patterns CTL transform paths must match
    #[arg(long)]
    include: Vec<String>,

    /// Glob patterns excluding CTL transform paths
    #[arg(long)]
    exclude: Vec<String>,
}

#[derive(Args)]
struct TransformsArgs {
    /// Root directory of the CTL transform tree
    #[arg(short, long)]
    transforms: PathBuf,

    /// Only list transforms of this family
    #[arg(short, long)]
    family: Option<String>,

    /// Machine-readable output (YAML)
    #[arg(long)]
    yaml: bool,
}

#[derive(Args)]
struct PathArgs {
    /// Root directory of the CTL transform tree
    #[arg(short, long)]
    transforms: PathBuf,

    /// Source node, e.g. csc/ACEScg
    source: String,

    /// Target node, e.g. ACES2065-1
    target: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Transforms(args) => commands::transforms::run(args, cli.verbose),
        Commands::Path(args) => commands::path::run(args, cli.verbose),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
