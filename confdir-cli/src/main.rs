mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use confdir_core::confdir::Confdir;
use confdir_core::error::ConfdirError;
use confdir_core::sources::RawSources;

#[derive(Parser)]
#[command(name = "confdir")]
#[command(about = "Browse a conference programme and export it to your calendar")]
struct Cli {
    /// Use this data directory instead of the configured one
    #[arg(long, global = true, value_name = "DIR")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the merged programme, grouped by day
    Program {
        /// Only show this day (YYYY-MM-DD)
        #[arg(long)]
        day: Option<String>,

        /// Only show minisymposia whose title contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// List every talk under its session
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show one talk by its title slug
    Talk {
        slug: String,

        /// Minisymposium title slug, to pick between colliding talk titles
        #[arg(long)]
        ms: Option<String>,
    },
    /// List registered participants
    Participants {
        /// Only show entries whose name or affiliation contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List poster presentations
    Posters {
        /// Only show groups or posters whose title contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Write a minisymposium (or one of its sessions) as an .ics file
    Export {
        /// Minisymposium title slug or id code (e.g. MS3)
        ms: String,

        /// Only this session (1-based ordinal)
        #[arg(short, long)]
        session: Option<usize>,

        /// Output path (defaults to <slug>.ics in the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sources = load_sources(cli.data)?;

    match cli.command {
        Commands::Program {
            day,
            filter,
            verbose,
        } => commands::program::run(&sources, day.as_deref(), filter.as_deref(), verbose),
        Commands::Talk { slug, ms } => commands::talk::run(&sources, &slug, ms.as_deref()),
        Commands::Participants { filter } => {
            commands::participants::run(&sources, filter.as_deref())
        }
        Commands::Posters { filter } => commands::posters::run(&sources, filter.as_deref()),
        Commands::Export { ms, session, out } => {
            commands::export::run(&sources, &ms, session, out.as_deref())
        }
    }
}

fn load_sources(data: Option<PathBuf>) -> Result<RawSources> {
    let confdir = match data {
        Some(dir) => Confdir::at(dir),
        None => Confdir::load()?,
    };

    match confdir.sources() {
        Ok(sources) => Ok(sources),
        Err(ConfdirError::DataDirNotFound(path)) => {
            anyhow::bail!(
                "No conference data found at '{}'.\n\n\
                Point confdir at your data directory with:\n  \
                confdir --data <DIR> program\n\n\
                or set data_dir in ~/.config/confdir/config.toml",
                path
            );
        }
        Err(e) => Err(e.into()),
    }
}
