//! # Remex
//!
//! Print a collection from the backend as plain text.
//!
//! Usage: `remex [reminders|expenses|categories]`

use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use remex::{Config, DisplayFields, RecordListView, RemoteCollection};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let which = std::env::args().nth(1).unwrap_or_else(|| "reminders".to_string());

    let mut view = match which.as_str() {
        "reminders" => RecordListView::reminders(Arc::new(RemoteCollection::reminders(&config)?)),
        "expenses" => RecordListView::new(
            "Expenses",
            Arc::new(RemoteCollection::expenses(&config)?),
            DisplayFields::expense(),
        ),
        "categories" => RecordListView::new(
            "Categories",
            Arc::new(RemoteCollection::categories(&config)?),
            DisplayFields::category(),
        ),
        other => {
            return Err(anyhow!(
                "Unknown collection '{}' (expected reminders, expenses or categories)",
                other
            ))
        }
    };

    info!("Listing {} from {}", which, config.api_base_url);

    view.mount();
    view.settle().await;
    print!("{}", view.render());
    view.unmount();

    Ok(())
}
