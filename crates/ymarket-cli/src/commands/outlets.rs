use std::path::PathBuf;

use clap::Subcommand;
use serde_json::Value;
use ymarket::{MarketClient, PointOfSale, PointsOfSaleQuery};

use super::{print_json, print_ok, read_json_file};

/// Sub-commands available under `outlets`.
#[derive(Debug, Subcommand)]
pub enum OutletsCommands {
    /// List points of sale
    List {
        /// Continuation token from a previous page
        #[arg(long)]
        page_token: Option<String>,
        /// Page size when following a continuation token
        #[arg(long, requires = "page_token")]
        limit: Option<u32>,
        /// Page number, starting at 1
        #[arg(long, requires = "page_size")]
        page: Option<u32>,
        #[arg(long, requires = "page")]
        page_size: Option<u32>,
        #[arg(long)]
        region_id: Option<i64>,
        #[arg(long)]
        shop_outlet_code: Option<String>,
    },
    /// Show one point of sale
    Get {
        #[arg(long)]
        outlet_id: i64,
    },
    /// Create a point of sale from a JSON file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a point of sale with the contents of a JSON file
    Update {
        #[arg(long)]
        outlet_id: i64,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a point of sale
    Delete {
        #[arg(long)]
        outlet_id: i64,
    },
}

/// `PointOfSale` never serializes its id, so add it back for display.
fn outlet_json(outlet: &PointOfSale) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(outlet)?;
    if let (Some(id), Some(fields)) = (outlet.id, value.as_object_mut()) {
        fields.insert("id".to_string(), Value::from(id));
    }
    Ok(value)
}

pub(crate) async fn run_outlets(
    client: &MarketClient,
    campaign_id: i64,
    command: OutletsCommands,
) -> anyhow::Result<()> {
    match command {
        OutletsCommands::List {
            page_token,
            limit,
            page,
            page_size,
            region_id,
            shop_outlet_code,
        } => {
            let mut query = PointsOfSaleQuery::new();
            if let (Some(page), Some(page_size)) = (page, page_size) {
                query = query.page(page, page_size);
            }
            if let Some(token) = page_token {
                query = query.page_token(token, limit.unwrap_or(50));
            }
            if let Some(region_id) = region_id {
                query = query.region_id(region_id);
            }
            if let Some(code) = shop_outlet_code {
                query = query.shop_outlet_code(code);
            }

            let page = client.list_points_of_sale(campaign_id, &query).await?;
            let outlets = page
                .outlets
                .iter()
                .map(outlet_json)
                .collect::<anyhow::Result<Vec<_>>>()?;
            print_json(&serde_json::json!({
                "outlets": outlets,
                "paging": page.paging,
                "pager": page.pager,
            }))
        }
        OutletsCommands::Get { outlet_id } => {
            let outlet = client.get_point_of_sale(campaign_id, outlet_id).await?;
            print_json(&outlet_json(&outlet)?)
        }
        OutletsCommands::Create { file } => {
            let outlet: PointOfSale = read_json_file(&file)?;
            let created = client.create_point_of_sale(campaign_id, &outlet).await?;
            tracing::info!(campaign_id, outlet_id = created.id, "point of sale created");
            print_json(&created)
        }
        OutletsCommands::Update { outlet_id, file } => {
            let outlet: PointOfSale = read_json_file(&file)?;
            client
                .update_point_of_sale(campaign_id, outlet_id, &outlet)
                .await?;
            tracing::info!(campaign_id, outlet_id, "point of sale updated");
            print_ok()
        }
        OutletsCommands::Delete { outlet_id } => {
            client.delete_point_of_sale(campaign_id, outlet_id).await?;
            tracing::info!(campaign_id, outlet_id, "point of sale deleted");
            print_ok()
        }
    }
}
