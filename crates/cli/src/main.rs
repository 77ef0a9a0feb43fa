use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "lazysets")]
#[command(about = "Support queries, hulls and Minkowski differences of convex sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Support function and vector along every direction (one CSV row each)
    Support {
        #[arg(long)]
        set: PathBuf,
        #[arg(long)]
        directions: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Minkowski difference `left ⊖ right` as a constraint list
    Difference {
        #[arg(long)]
        left: PathBuf,
        #[arg(long)]
        right: PathBuf,
        /// Use the zonotope facet enumeration instead of the polyhedral algorithm
        #[arg(long, default_value_t = false)]
        zonotope: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Radii of the symmetric interval hull
    Hull {
        #[arg(long)]
        set: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Point membership; prints `true` or `false`
    Contains {
        #[arg(long)]
        set: PathBuf,
        /// Comma-separated coordinates
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Support {
            set,
            directions,
            out,
        } => {
            let prov = commands::support(&set, &directions, &out)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
        }
        Action::Difference {
            left,
            right,
            zonotope,
            out,
        } => {
            let prov = commands::difference(&left, &right, zonotope, &out)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
        }
        Action::Hull { set, out } => {
            let prov = commands::hull(&set, &out)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
        }
        Action::Contains { set, point } => {
            println!("{}", commands::contains(&set, &point)?);
        }
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&provenance::report_block())?);
        }
    }
    Ok(())
}
