//! cloudhub CLI entry point.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cloudhub_client::cli::{Cli, Commands, OutputFormat};
use cloudhub_client::output::{json, pretty};
use cloudhub_client::source::select_source;
use cloudhub_client::Config;
use cloudhub_core::calendar::{build_grid_for, events_on_day};
use cloudhub_core::listing::run_query;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let today = Local::now().date_naive();

    let source = select_source(cli.data.clone().or(config.data_path.clone()), &config, today);
    let items = source.fetch_items().await?;
    tracing::info!(source = %source.describe(), count = items.len(), "Loaded items");

    match cli.command {
        Commands::List(list_cmd) => {
            let query = list_cmd.to_query(&config)?;
            tracing::debug!(
                search = %query.search_text,
                categories = query.categories.len(),
                price = %query.price_filter,
                sort = %query.sort_by,
                page_size = query.page_size,
                "Running query"
            );

            let result = run_query(&items, &query)?;
            tracing::info!(
                total = result.total_matching,
                returned = result.len(),
                has_more = result.has_more,
                "Query complete"
            );

            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&result)),
                OutputFormat::Pretty => {
                    anstream::println!("{}", pretty::format_query_result(&result))
                }
            }
        }
        Commands::Calendar(calendar_cmd) => {
            let cursor = calendar_cmd.resolve_cursor(today)?;
            let grid = build_grid_for(cursor, &items, today, &Local)?;
            let selected = calendar_cmd
                .selected_date(cursor)?
                .map(|date| (date, events_on_day(&items, date, &Local)));
            tracing::info!(
                year = grid.year,
                month = grid.month + 1,
                days_with_events = grid.days().filter(|day| day.has_event).count(),
                "Built month grid"
            );

            match cli.format {
                OutputFormat::Json => {
                    let events = selected.as_ref().map(|(_, events)| events);
                    let value = serde_json::json!({ "grid": grid, "events": events });
                    println!("{}", json::format_json(&value));
                }
                OutputFormat::Pretty => {
                    anstream::println!("{}", pretty::format_calendar(&grid));
                    if let Some((date, events)) = &selected {
                        anstream::println!("\n{}", pretty::format_day_events(*date, events));
                    }
                }
            }
        }
    }

    Ok(())
}
