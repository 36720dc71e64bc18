//! Command-line shim and entry point.
//!
//! This binary is the thin integration layer between the showroom library and
//! a terminal: it loads configuration, initializes a catalog session, runs one
//! inventory query from the command-line flags, and prints the resulting view
//! models. All catalog behavior lives in the library; nothing here does more
//! than argument translation and output.
//!
//! # Usage
//!
//! ```text
//! showroom [--config <path>]
//!          [--search <text>]
//!          [--category <label>] [--transmission <label>]
//!          [--sort <make|model|price|year>] [--direction <asc|desc>]
//! ```
//!
//! The configuration path may also come from the `SHOWROOM_CONFIG` environment
//! variable; the flag wins when both are set. Without a configuration file the
//! built-in seed catalog is used and tracing stays off.

use showroom::query::InventoryQuery;
use showroom::ui::{CandidateSummary, InventoryView};
use showroom::{
    initialize, Category, Config, Result, ShowroomError, SortDirection, SortKey, Transmission,
};

fn main() {
    if let Err(error) = run() {
        eprintln!("showroom: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;

    let config = match args.config_path() {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let store = initialize(&config)?;
    let snapshot = store.snapshot()?;

    let view = InventoryView::compute(&snapshot.inventory, &args.query);
    let summary = CandidateSummary::compute(&snapshot.candidates);

    render(&view, &summary);
    Ok(())
}

/// Parsed command-line arguments.
struct CliArgs {
    config: Option<String>,
    query: InventoryQuery,
}

impl CliArgs {
    /// Parses the flag list, building the inventory query as it goes.
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = None;
        let mut query = InventoryQuery::default();

        while let Some(flag) = args.next() {
            let mut value_for = |name: &str| -> Result<String> {
                args.next()
                    .ok_or_else(|| ShowroomError::Config(format!("{name} requires a value")))
            };

            match flag.as_str() {
                "--config" => config = Some(value_for("--config")?),
                "--search" => query.search = value_for("--search")?,
                "--category" => {
                    let label = value_for("--category")?;
                    query.category = Some(Category::from_label(&label).ok_or_else(|| {
                        ShowroomError::Config(format!("unknown category: {label}"))
                    })?);
                }
                "--transmission" => {
                    let label = value_for("--transmission")?;
                    query.transmission =
                        Some(Transmission::from_label(&label).ok_or_else(|| {
                            ShowroomError::Config(format!("unknown transmission: {label}"))
                        })?);
                }
                "--sort" => {
                    let label = value_for("--sort")?;
                    query.sort_key = SortKey::from_label(&label).ok_or_else(|| {
                        ShowroomError::Config(format!("unknown sort key: {label}"))
                    })?;
                }
                "--direction" => {
                    let label = value_for("--direction")?;
                    query.direction = SortDirection::from_label(&label).ok_or_else(|| {
                        ShowroomError::Config(format!("unknown direction: {label}"))
                    })?;
                }
                other => {
                    return Err(ShowroomError::Config(format!("unknown flag: {other}")));
                }
            }
        }

        Ok(Self { config, query })
    }

    /// Resolves the configuration path from the flag or the environment.
    fn config_path(&self) -> Option<String> {
        self.config
            .clone()
            .or_else(|| std::env::var("SHOWROOM_CONFIG").ok())
    }
}

/// Prints the inventory listing and candidates summary.
fn render(view: &InventoryView, summary: &CandidateSummary) {
    if view.active_filters.is_empty() {
        println!("Inventory ({} vehicles)", view.total_count);
    } else {
        println!(
            "Inventory ({} vehicles, {} matching | {})",
            view.total_count,
            view.match_count,
            view.active_filters.join(" · ")
        );
    }
    println!();

    if view.cards.is_empty() {
        if view.is_filtered_empty() {
            println!("  No vehicles match the selected filters.");
        } else {
            println!("  The inventory is empty.");
        }
    }

    for card in &view.cards {
        let mut details = Vec::new();
        if let Some(category) = &card.category {
            details.push(category.as_str());
        }
        if let Some(transmission) = &card.transmission {
            details.push(transmission.as_str());
        }

        println!("  #{:<4} {:<28} {:>14}  {}", card.id, card.title, card.price, details.join(" · "));
        println!("        {}", card.description);
    }

    println!();
    println!(
        "Candidates: {} | total {}, average {}",
        summary.count, summary.total, summary.average
    );
}
