//! bis-planner command line front end.
//!
//! Usage:
//!   bis-planner [--catalog FILE] [--class ID] <command>
//!
//! Commands:
//!   classes                         List playable classes
//!   bis <slot>                      Show the best-in-slot pick for a slot
//!   search <slot> [query]           Search a slot's items by name or source
//!   compare <current> <candidate>   Compare two items by id
//!   plan [slot=item-id ...]         Equip items and show totals and upgrades

use bis_planner::build_info;
use bis_planner::core::PlannerSession;
use bis_planner::items::{
    classify_upgrade, compare_stats, score_item, Item, ItemId, ItemSlot, StatBlock,
    StatComparison, UpgradeRecommendation,
};
use bis_planner::utils::config::{detect_catalog_source, load_from_source};
use bis_planner::{CatalogError, PlannerData};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum Command {
    Classes,
    Bis(ItemSlot),
    Search { slot: ItemSlot, query: String },
    Compare { current: ItemId, candidate: ItemId },
    Plan(Vec<(ItemSlot, ItemId)>),
    Help,
    Version,
}

#[derive(Debug, PartialEq)]
struct CliConfig {
    catalog_path: Option<PathBuf>,
    class_id: Option<String>,
    command: Command,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("no item with id {0} in the {1} catalog")]
    UnknownItem(ItemId, String),
    #[error("item {id} belongs in {actual}, not {requested}")]
    WrongSlot {
        id: ItemId,
        requested: ItemSlot,
        actual: ItemSlot,
    },
    #[error("no playable class with a catalog")]
    NoPlayableClass,
}

fn parse_slot(value: &str) -> Result<ItemSlot, String> {
    value.parse::<ItemSlot>().map_err(|e| e.to_string())
}

fn parse_assignment(value: &str) -> Result<(ItemSlot, ItemId), String> {
    let (slot, id) = value
        .split_once('=')
        .ok_or_else(|| format!("expected slot=item-id, got '{value}'"))?;
    Ok((parse_slot(slot)?, ItemId::new(id)))
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut catalog_path = None;
    let mut class_id = None;
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                i += 1;
                let path = args.get(i).ok_or("--catalog requires a file path")?;
                catalog_path = Some(PathBuf::from(path));
            }
            "--class" => {
                i += 1;
                class_id = Some(args.get(i).ok_or("--class requires a class id")?.clone());
            }
            "--help" | "-h" => positional = vec!["help".to_string()],
            "--version" | "-v" => positional = vec!["version".to_string()],
            other if other.starts_with("--") => return Err(format!("Unknown option: {other}")),
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let command = match positional.first().map(String::as_str) {
        None | Some("help") => Command::Help,
        Some("version") => Command::Version,
        Some("classes") => Command::Classes,
        Some("bis") => {
            let slot = positional.get(1).ok_or("bis requires a slot")?;
            Command::Bis(parse_slot(slot)?)
        }
        Some("search") => {
            let slot = positional.get(1).ok_or("search requires a slot")?;
            Command::Search {
                slot: parse_slot(slot)?,
                query: positional[2..].join(" "),
            }
        }
        Some("compare") => match (positional.get(1), positional.get(2)) {
            (Some(current), Some(candidate)) => Command::Compare {
                current: ItemId::new(current.as_str()),
                candidate: ItemId::new(candidate.as_str()),
            },
            _ => return Err("compare requires two item ids".to_string()),
        },
        Some("plan") => Command::Plan(
            positional[1..]
                .iter()
                .map(|a| parse_assignment(a))
                .collect::<Result<_, _>>()?,
        ),
        Some(other) => return Err(format!("Unknown command: {other}")),
    };

    Ok(CliConfig {
        catalog_path,
        class_id,
        command,
    })
}

fn print_usage() {
    println!(
        "bis-planner - best-in-slot gear planner\n\
         \n\
         Usage: bis-planner [OPTIONS] <COMMAND>\n\
         \n\
         Commands:\n\
         \x20 classes                        List playable classes\n\
         \x20 bis <slot>                     Show the best-in-slot pick for a slot\n\
         \x20 search <slot> [query]          Search a slot by item name or source\n\
         \x20 compare <current> <candidate>  Compare two items by id\n\
         \x20 plan [slot=item-id ...]        Equip items, show totals and upgrades\n\
         \n\
         Options:\n\
         \x20 --catalog FILE   Planner data file (default: $BIS_PLANNER_CATALOG,\n\
         \x20                  ~/.bis-planner/catalog.json, then built-in sample)\n\
         \x20 --class ID       Class to plan for (default: first playable class)\n\
         \x20 --version, -v    Show version information\n\
         \x20 --help, -h       Show this help"
    );
}

// ── Output ───────────────────────────────────────────────────────────

fn format_stats(stats: &StatBlock) -> String {
    if stats.is_empty() {
        return "no stats".to_string();
    }
    stats
        .iter()
        .map(|(stat, value)| format!("{} {}", stat.format_value(value), stat.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_item(item: &Item) {
    println!(
        "  [{}] {} ({}, ilvl {}, req {}) score {:.1}",
        item.id,
        item.name,
        item.quality.name(),
        item.item_level,
        item.required_level,
        score_item(item)
    );
    let drop_rate = item
        .source
        .drop_rate
        .map(|rate| format!(", {rate}% drop"))
        .unwrap_or_default();
    println!(
        "      {} - {}{}",
        item.source.kind.name(),
        item.source.location,
        drop_rate
    );
    println!("      {}", format_stats(&item.stats));
}

fn print_stat_rows(rows: &[StatComparison]) {
    for row in rows {
        let sign = if row.difference > 0.0 { "+" } else { "" };
        println!(
            "      {:<16} {:>6} -> {:<6} ({}{})",
            row.stat.name(),
            row.stat.format_value(row.current),
            row.stat.format_value(row.candidate),
            sign,
            row.stat.format_value(row.difference)
        );
    }
}

fn print_recommendation(rec: &UpgradeRecommendation) {
    let current = rec
        .current
        .as_ref()
        .map(|item| item.name.as_str())
        .unwrap_or("(empty)");
    let status = if rec.is_equipped() {
        "equipped"
    } else {
        rec.verdict.name()
    };
    println!(
        "{:<10} {} -> {} [{}]",
        rec.slot.name(),
        current,
        rec.best_in_slot.name,
        status
    );
    if !rec.is_equipped() {
        print_stat_rows(&rec.stat_changes);
    }
}

// ── Commands ─────────────────────────────────────────────────────────

fn open_session(data: &PlannerData, class_id: Option<&str>) -> Result<PlannerSession, RunError> {
    let class_id = match class_id {
        Some(id) => id.to_string(),
        None => data
            .default_class()
            .map(|class| class.id.to_string())
            .ok_or(RunError::NoPlayableClass)?,
    };
    Ok(PlannerSession::open(data, &class_id)?)
}

fn find_item(session: &PlannerSession, id: &ItemId) -> Result<Item, RunError> {
    session
        .catalog()
        .find(id)
        .cloned()
        .ok_or_else(|| RunError::UnknownItem(id.clone(), session.class_id().to_string()))
}

fn check_slot(slot: ItemSlot, item: &Item) -> Result<(), RunError> {
    if slot.accepts(item.slot) {
        Ok(())
    } else {
        Err(RunError::WrongSlot {
            id: item.id.clone(),
            requested: slot,
            actual: item.slot,
        })
    }
}

fn run(config: CliConfig) -> Result<(), RunError> {
    let command = match config.command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        command => command,
    };

    let source = detect_catalog_source(config.catalog_path.as_deref());
    let data = load_from_source(&source)?;

    if command == Command::Classes {
        for class in data.roster().iter() {
            let status = match data.catalog(class.id.as_str()) {
                Ok(_) => "available".to_string(),
                Err(e) => e.to_string(),
            };
            println!("{:<12} {:<12} {}", class.id, class.name, status);
        }
        return Ok(());
    }

    let mut session = open_session(&data, config.class_id.as_deref())?;

    match command {
        Command::Bis(slot) => match session.catalog().lookup_best_in_slot(slot) {
            Some(item) => {
                println!("Best in slot for {}:", slot.name());
                print_item(item);
            }
            None => println!("No best-in-slot recommendation for {} yet", slot.name()),
        },
        Command::Search { slot, query } => {
            let results = session.catalog().search(&query, slot);
            println!("{} result(s) for {}", results.len(), slot.name());
            for item in results {
                print_item(item);
            }
        }
        Command::Compare { current, candidate } => {
            let current = find_item(&session, &current)?;
            let candidate = find_item(&session, &candidate)?;
            println!(
                "{} ({:.1}) -> {} ({:.1}): {}",
                current.name,
                score_item(&current),
                candidate.name,
                score_item(&candidate),
                classify_upgrade(&current, &candidate).name()
            );
            print_stat_rows(&compare_stats(Some(&current.stats), &candidate.stats));
        }
        Command::Plan(assignments) => {
            for (slot, id) in assignments {
                let item = find_item(&session, &id)?;
                check_slot(slot, &item)?;
                session.equip(slot, item);
            }

            println!("Equipped ({} of {} slots):", session.gear().len(), ItemSlot::ALL.len());
            for (slot, item) in session.gear().iter_equipped() {
                println!("  {:<10} {}", slot.name(), item.name);
            }
            println!("Totals: {}", format_stats(&session.total_stats()));
            println!("Gear score: {:.1}", session.gear().total_score());
            println!();
            for rec in session.recommendations() {
                print_recommendation(&rec);
            }
        }
        Command::Classes | Command::Help | Command::Version => {}
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Run 'bis-planner --help' for usage.");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
