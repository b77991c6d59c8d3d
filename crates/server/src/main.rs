//! catalogbot: product search webhook for conversational agents.
//!
//! Usage:
//!     catalogbot serve --bind 0.0.0.0:3000
//!     catalogbot search --category phones --price 50000
//!     catalogbot --catalog products.json search --brand sony --format json

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use catalogbot_filter::filter_products;
use catalogbot_query::FilterCriteria;
use catalogbot_reply::{search_reply, ReplyConfig};
use catalogbot_server::{load_catalog, serve, ServerConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalogbot")]
#[command(about = "Product search webhook for conversational agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON catalog file (defaults to the built-in catalog)
    #[arg(long, env = "CATALOGBOT_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Currency symbol printed before prices
    #[arg(long, env = "CATALOGBOT_CURRENCY", default_value = "₹", global = true)]
    currency: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the webhook server
    Serve {
        /// Listen address
        #[arg(long, env = "CATALOGBOT_BIND", default_value = "0.0.0.0:3000")]
        bind: SocketAddr,
    },

    /// Search the catalog from the command line
    Search {
        /// Category or synonym (phones, earbuds, ...)
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        brand: Option<String>,

        /// Inclusive maximum price
        #[arg(short, long)]
        price: Option<i64>,

        #[arg(short = 'f', long)]
        feature: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalogbot=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let reply = ReplyConfig {
        currency_symbol: cli.currency,
    };

    match cli.command {
        Commands::Serve { bind } => {
            serve(ServerConfig {
                bind,
                catalog_path: cli.catalog,
                reply,
            })
            .await?;
        }
        Commands::Search {
            category,
            brand,
            price,
            feature,
            format,
        } => {
            let mut criteria = FilterCriteria::default();
            if let Some(category) = category {
                criteria = criteria.with_category(&category);
            }
            if let Some(brand) = brand {
                criteria = criteria.with_brand(&brand);
            }
            if let Some(price) = price {
                criteria = criteria.with_max_price(price);
            }
            if let Some(feature) = feature {
                criteria = criteria.with_feature(&feature);
            }

            run_search(cli.catalog.as_deref(), &criteria, &reply, &format)?;
        }
    }

    Ok(())
}

fn run_search(
    catalog_path: Option<&Path>,
    criteria: &FilterCriteria,
    reply: &ReplyConfig,
    format: &str,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let results = filter_products(catalog.products(), criteria);

    if format == "json" {
        let output = serde_json::json!({
            "criteria": criteria,
            "results": results,
            "fulfillmentText": search_reply(&results, reply),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if let Some(category) = criteria.unknown_category() {
            println!("Note: '{}' is not a known category", category);
        }
        println!("{}", search_reply(&results, reply));
        println!("---");
        println!("Total: {} of {} products", results.len(), catalog.len());
    }

    Ok(())
}
