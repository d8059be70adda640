//! mapped-source CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "mapped-source")]
#[command(version)]
#[command(about = "Inspect and edit text files that carry a source map", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text length and mapping points of a file as JSON
    Info {
        /// Text file to read
        file: PathBuf,

        /// Map file to use instead of the sourceMappingURL comment
        #[arg(long)]
        map: Option<PathBuf>,
    },

    /// Print the original location of a byte offset
    Lookup {
        /// Text file to read
        file: PathBuf,

        /// Byte offset into the text
        offset: usize,

        /// Map file to use instead of the sourceMappingURL comment
        #[arg(long)]
        map: Option<PathBuf>,
    },

    /// Save the byte range START..END of a file, keeping its mappings
    Slice {
        /// Text file to read
        file: PathBuf,

        /// First byte of the slice
        start: usize,

        /// End of the slice (exclusive)
        end: usize,

        /// Write output to FILE (the map goes to FILE.map)
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Value of the map's sourceRoot field [default: the input map's]
        #[arg(long)]
        source_root: Option<String>,

        /// Write the map without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Join files in order into one file with a combined map
    Concat {
        /// Text files to join
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write output to FILE (the map goes to FILE.map)
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Value of the map's sourceRoot field [default: empty]
        #[arg(long)]
        source_root: Option<String>,

        /// Write the map without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Load a file with its map and save it again
    Resave {
        /// Text file to read
        file: PathBuf,

        /// Map file to use instead of the sourceMappingURL comment
        #[arg(long)]
        map: Option<PathBuf>,

        /// Write output to FILE (the map goes to FILE.map)
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Value of the map's sourceRoot field [default: the input map's]
        #[arg(long)]
        source_root: Option<String>,

        /// Write the map without indentation
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mapped_source=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file, map } => {
            commands::info::execute(commands::info::InfoArgs { file, map })
        }
        Commands::Lookup { file, offset, map } => {
            commands::lookup::execute(commands::lookup::LookupArgs { file, offset, map })
        }
        Commands::Slice {
            file,
            start,
            end,
            output,
            source_root,
            compact,
        } => commands::slice::execute(commands::slice::SliceArgs {
            file,
            start,
            end,
            output,
            source_root,
            compact,
        }),
        Commands::Concat {
            files,
            output,
            source_root,
            compact,
        } => commands::concat::execute(commands::concat::ConcatArgs {
            files,
            output,
            options: commands::save_options(source_root, compact),
        }),
        Commands::Resave {
            file,
            map,
            output,
            source_root,
            compact,
        } => commands::resave::execute(commands::resave::ResaveArgs {
            file,
            map,
            output,
            source_root,
            compact,
        }),
    }
}
