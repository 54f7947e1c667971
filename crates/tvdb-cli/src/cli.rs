use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tvdb",
    about = "Replay a TV series scenario and query the catalog",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML scenario replayed into the catalog before the command runs
    #[arg(short, long, global = true)]
    pub scenario: Option<PathBuf>,

    /// TOML catalog configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay the scenario and print entity counts
    Load,
    /// Show seasons still missing episodes
    Missing,
    /// Suggest series in a user's favorite genre
    Suggest(UserArgs),
    /// Average rating of a user's favorite series
    Rating(UserArgs),
    /// Average review score of one series
    Average(SeriesArgs),
    /// Most awaited upcoming season
    Awaited(AwaitedArgs),
    /// Best actors of a transmission service
    BestActors(ServiceArgs),
    /// Series an actor appears in
    ActorSeries(ActorArgs),
}

#[derive(Args)]
pub struct UserArgs {
    pub username: String,
}

#[derive(Args)]
pub struct SeriesArgs {
    pub title: String,
}

#[derive(Args)]
pub struct AwaitedArgs {
    /// Current date as dd::mm::yyyy (defaults to today)
    pub date: Option<String>,
}

#[derive(Args)]
pub struct ServiceArgs {
    pub service: String,
}

#[derive(Args)]
pub struct ActorArgs {
    /// Actor as "name surname"
    pub actor: String,
}
