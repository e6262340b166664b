mod config;
mod pipeline;
mod scan;
mod store;
mod util;
mod walk;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use config::Config;

#[derive(Parser)]
#[command(name = "cstream", version, about = "Streaming code clone detector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream source files from a directory into the corpus and report clones
    Scan {
        /// Directory to scan (default: current directory)
        path: Option<PathBuf>,

        /// Show detailed report with clone locations
        #[arg(short, long)]
        report: bool,

        /// Show all clones (default: top 20)
        #[arg(long)]
        show_all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Chunk size in lines (overrides CHUNKSIZE, default 5)
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Accepted source file extension (overrides SOURCE_EXT, default .java)
        #[arg(long)]
        extension: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            path,
            report,
            show_all,
            json,
            chunk_size,
            extension,
        } => {
            let target = path.unwrap_or_else(|| PathBuf::from("."));
            let mut config = Config::from_env();
            if let Some(n) = chunk_size {
                config.chunk_size = config::parse_chunk_size(Some(&n.to_string()));
            }
            if let Some(ext) = extension {
                config.extension = config::parse_extension(Some(&ext));
            }
            if let Err(err) = scan::run(&target, &config, report, show_all, json) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}
