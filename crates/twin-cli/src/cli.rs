use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use twin_types::EntityKind;

#[derive(Parser)]
#[command(
    name = "twinrepo",
    about = "In-memory digital-twin repository — inspect entities and resolve value paths",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with the device gateway configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use a simulated chiller instead of connecting to a device.
    #[arg(long, global = true)]
    pub simulate: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List stored identifiers of one entity kind
    List(ListArgs),
    /// Show one stored entity as JSON
    Get(GetArgs),
    /// Resolve a value path to a scalar leaf
    Resolve(ResolveArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    Shells,
    Submodels,
    ConceptDescriptions,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Shells => EntityKind::Shell,
            KindArg::Submodels => EntityKind::Submodel,
            KindArg::ConceptDescriptions => EntityKind::ConceptDescription,
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub kind: KindArg,
}

#[derive(Args)]
pub struct GetArgs {
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Full identifier of the entity.
    pub identifier: String,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Path segments, e.g. `submodels chiller_runtime temperature`.
    /// All-digit segments are treated as indices.
    #[arg(required = true)]
    pub segments: Vec<String>,
}
