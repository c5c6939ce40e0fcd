//! datagen CLI - converts data generator reports into the line format read by code generators
//!
//! Run the vanilla server's data generator first:
//!
//! ```text
//! java -DbundlerMainClass=net.minecraft.data.Main -jar server.jar --all
//! ```
//!
//! then point each subcommand at the matching file or folder under `generated/`.

use clap::{ArgAction, Parser, Subcommand};
use datagen::fs_utils::write_lines_to_file;
use datagen::generate;
use datagen::output::write_lines;
use datagen::{ResolveOptions, TagLoadOptions};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "datagen")]
#[command(version, about = "Converts data generator reports into a compact line format", long_about = None)]
struct Cli {
    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert block state data (reports/blocks.json)
    Blocks {
        /// Path to blocks.json
        blocks_json: PathBuf,
    },

    /// List the keys of a registry (reports/registries.json)
    Registry {
        /// Path to registries.json
        registries_json: PathBuf,

        /// Registry name, e.g. `block` or `minecraft:block`
        registry: String,
    },

    /// List in-code names of a registry's entries in protocol id order
    RegistryNames {
        /// Path to registries.json
        registries_json: PathBuf,

        /// Registry name, e.g. `item` or `minecraft:item`
        registry: String,

        /// Prefix for every name, e.g. `ITEM_`
        prefix: String,
    },

    /// List in-code names of entity types
    EntityNames {
        /// Path to registries.json
        registries_json: PathBuf,
    },

    /// Resolve tag files (data/minecraft/tags/<kind>)
    Tags {
        /// Tags folder
        tags_dir: PathBuf,

        /// Namespace prepended to tag names
        #[arg(short, long, default_value = datagen::identifier::DEFAULT_NAMESPACE)]
        namespace: String,

        /// Maximum reference chain length before giving up
        #[arg(long, default_value_t = datagen::tags::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Blocks { blocks_json } => generate::block_states(&blocks_json),
        Commands::Registry { registries_json, registry } => {
            generate::registry_keys(&registries_json, &registry)
        }
        Commands::RegistryNames { registries_json, registry, prefix } => {
            generate::registry_names(&registries_json, &registry, &prefix)
        }
        Commands::EntityNames { registries_json } => generate::entity_names(&registries_json),
        Commands::Tags { tags_dir, namespace, max_depth } => generate::resolved_tags(
            &tags_dir,
            &TagLoadOptions { namespace },
            ResolveOptions { max_depth },
        ),
    };

    let lines = match result {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!(error = %e, "conversion failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let written = match &cli.output {
        Some(path) => write_lines_to_file(path, &lines),
        None => write_lines(io::stdout().lock(), &lines),
    };

    if let Err(e) = written {
        tracing::error!(error = %e, "failed to write output");
        eprintln!("Error: failed to write output: {}", e);
        process::exit(1);
    }
}
