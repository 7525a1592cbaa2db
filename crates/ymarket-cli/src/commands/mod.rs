//! Subcommand definitions and handlers.
//!
//! Every handler takes a ready client and campaign, performs a single API
//! call, and prints the result to stdout as pretty JSON. Calls that return
//! nothing print `{"status": "OK"}`.

mod feeds;
mod hidden;
mod offers;
mod outlets;
mod prices;
mod regions;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) use feeds::{run_feeds, FeedsCommands};
pub(crate) use hidden::{run_hidden, HiddenCommands};
pub(crate) use offers::{run_offers, OffersCommands};
pub(crate) use outlets::{run_outlets, OutletsCommands};
pub(crate) use prices::{run_prices, PricesCommands};
pub(crate) use regions::{run_regions, RegionsCommands};

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_ok() -> anyhow::Result<()> {
    print_json(&serde_json::json!({ "status": "OK" }))
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
