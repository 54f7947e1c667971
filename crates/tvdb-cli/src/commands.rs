use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tvdb_sdk::{ReleaseDate, TvSeriesDb, NO_SUGGESTION};

use crate::cli::*;
use crate::scenario::Scenario;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let db = open_catalog(&cli)?;
    let format = cli.format.clone();

    match cli.command {
        Command::Load => cmd_load(&db, &format),
        Command::Missing => cmd_missing(&db, &format),
        Command::Suggest(args) => cmd_suggest(&db, &format, args),
        Command::Rating(args) => cmd_rating(&db, &format, args),
        Command::Average(args) => cmd_average(&db, &format, args),
        Command::Awaited(args) => cmd_awaited(&db, &format, args),
        Command::BestActors(args) => cmd_best_actors(&db, &format, args),
        Command::ActorSeries(args) => cmd_actor_series(&db, &format, args),
    }
}

/// Builds the catalog from `--config` and replays `--scenario` into it.
pub fn open_catalog(cli: &Cli) -> anyhow::Result<TvSeriesDb> {
    let db = match &cli.config {
        Some(path) => TvSeriesDb::from_config_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TvSeriesDb::new(),
    };
    if let Some(path) = &cli.scenario {
        Scenario::from_file(path)?.apply(&db)?;
    }
    Ok(db)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_load(db: &TvSeriesDb, format: &OutputFormat) -> anyhow::Result<()> {
    let stats = db.stats()?;
    if let OutputFormat::Json = format {
        return print_json(&stats);
    }
    println!("{} Catalog loaded", "✓".green().bold());
    println!("  Services: {}", stats.services.to_string().bold());
    println!("  Series:   {} ({} seasons, {} episodes)", stats.series.to_string().bold(), stats.seasons, stats.episodes);
    println!("  Actors:   {}", stats.actors.to_string().bold());
    println!("  Users:    {} ({} reviews)", stats.users.to_string().bold(), stats.reviews);
    Ok(())
}

fn cmd_missing(db: &TvSeriesDb, format: &OutputFormat) -> anyhow::Result<()> {
    let report = db.check_missing_episodes()?;
    if let OutputFormat::Json = format {
        return print_json(&report);
    }
    if report.is_empty() {
        println!("{} No seasons are missing episodes.", "✓".green());
        return Ok(());
    }
    for (title, seasons) in report.iter() {
        let seasons: Vec<String> = seasons.iter().map(u32::to_string).collect();
        println!("{}: seasons {}", title.yellow().bold(), seasons.join(", "));
    }
    Ok(())
}

fn cmd_suggest(db: &TvSeriesDb, format: &OutputFormat, args: UserArgs) -> anyhow::Result<()> {
    let suggestions = db.suggest_tv_series(&args.username)?;
    if let OutputFormat::Json = format {
        return print_json(&suggestions);
    }
    if suggestions.len() == 1 && suggestions[0] == NO_SUGGESTION {
        println!("No suggestions for {}.", args.username.bold());
        return Ok(());
    }
    for title in &suggestions {
        println!("  {}", title.cyan());
    }
    Ok(())
}

fn cmd_rating(db: &TvSeriesDb, format: &OutputFormat, args: UserArgs) -> anyhow::Result<()> {
    let rating = db.average_rating(&args.username)?;
    if let OutputFormat::Json = format {
        return print_json(&rating);
    }
    match rating {
        Some(value) => println!("{}: {}", args.username.bold(), format!("{value:.2}").green()),
        None => println!("{}: {}", args.username.bold(), "no reviewed favorites".dimmed()),
    }
    Ok(())
}

fn cmd_average(db: &TvSeriesDb, format: &OutputFormat, args: SeriesArgs) -> anyhow::Result<()> {
    let average = db.series_average(&args.title)?;
    if let OutputFormat::Json = format {
        return print_json(&average);
    }
    match average {
        Some(value) => println!("{}: {}", args.title.yellow().bold(), format!("{value:.2}").green()),
        None => println!("{}: {}", args.title.yellow().bold(), "no reviews".dimmed()),
    }
    Ok(())
}

fn cmd_awaited(db: &TvSeriesDb, format: &OutputFormat, args: AwaitedArgs) -> anyhow::Result<()> {
    let current = match args.date.as_deref() {
        Some(raw) => ReleaseDate::parse_query(raw)?,
        None => ReleaseDate::today(),
    };
    let awaited = db.most_awaited(current)?;
    if let OutputFormat::Json = format {
        return print_json(&awaited);
    }
    match awaited {
        Some(season) => println!(
            "Most awaited: {} (releases {})",
            season.to_string().yellow().bold(),
            season.release_date
        ),
        None => println!("No upcoming seasons after {}.", current),
    }
    Ok(())
}

fn cmd_best_actors(
    db: &TvSeriesDb,
    format: &OutputFormat,
    args: ServiceArgs,
) -> anyhow::Result<()> {
    let actors = db.best_actors(&args.service)?;
    if let OutputFormat::Json = format {
        return print_json(&actors);
    }
    if actors.is_empty() {
        println!("No best actors on {}.", args.service.bold());
        return Ok(());
    }
    for actor in &actors {
        println!("  {}", actor.cyan());
    }
    Ok(())
}

fn cmd_actor_series(db: &TvSeriesDb, format: &OutputFormat, args: ActorArgs) -> anyhow::Result<()> {
    let series = db.series_of_actor(&args.actor)?;
    if let OutputFormat::Json = format {
        return print_json(&series);
    }
    if series.is_empty() {
        println!("{} is not cast in any series.", args.actor.bold());
        return Ok(());
    }
    for title in &series {
        println!("  {}", title.yellow());
    }
    Ok(())
}
