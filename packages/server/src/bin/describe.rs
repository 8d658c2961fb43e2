//! CLI for trying out AI listing descriptions
//!
//! Drives the same listing form the marketplace uses: sets the title and
//! category, presses "generate", and prints the result.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use ecofinds_core::config::Config;
use ecofinds_core::domains::listings::models::{Category, Listing, NewListing};
use ecofinds_core::domains::listings::{GenerateOutcome, ListingForm};
use ecofinds_core::kernel::{BaseListingStore, BaseNavigator, BaseNotifier, ServerDeps, ToastKind};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "describe")]
#[command(about = "Generate a listing description with Gemini")]
struct Cli {
    /// Product title
    #[arg(long)]
    title: String,

    /// Listing category (e.g. ELECTRONICS, HOME_GARDEN)
    #[arg(long, default_value = "OTHER")]
    category: Category,

    /// Override the configured model
    #[arg(long)]
    model: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Toasts go to the log
struct TracingNotifier;

impl BaseNotifier for TracingNotifier {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Success => tracing::info!(toast = message),
            ToastKind::Error => tracing::warn!(toast = message),
        }
    }
}

struct NoNavigation;

impl BaseNavigator for NoNavigation {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigation ignored");
    }
}

/// The CLI never saves, so there is nothing to store
struct NoStore;

#[async_trait]
impl BaseListingStore for NoStore {
    async fn products(&self) -> Result<Vec<Listing>> {
        Ok(Vec::new())
    }

    async fn add_product(&self, _listing: NewListing) -> Result<Listing> {
        anyhow::bail!("describe does not save listings")
    }

    async fn update_product(&self, _listing: Listing) -> Result<Listing> {
        anyhow::bail!("describe does not save listings")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ecofinds_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(model) = cli.model {
        config.genai_model = model;
    }
    tracing::info!(model = %config.genai_model, "Configuration loaded");

    let deps = Arc::new(ServerDeps::from_config(
        &config,
        Arc::new(NoStore),
        Arc::new(TracingNotifier),
        Arc::new(NoNavigation),
    ));

    let form = ListingForm::new(deps, None);
    form.set_title(cli.title);
    form.set_category(cli.category);

    let response = match form.generate_description().await {
        GenerateOutcome::Generated(description) => Response {
            success: true,
            description: Some(description),
            message: None,
        },
        GenerateOutcome::MissingTitle => Response {
            success: false,
            description: None,
            message: Some("Please enter a product title first.".to_string()),
        },
        GenerateOutcome::AlreadyGenerating => Response {
            success: false,
            description: None,
            message: Some("A description is already being generated.".to_string()),
        },
        GenerateOutcome::Failed(e) => Response {
            success: false,
            description: None,
            message: Some(e.to_string()),
        },
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if let Some(description) = &response.description {
        println!("{}", description);
    } else if let Some(message) = &response.message {
        eprintln!("{}", message);
    }

    if !response.success {
        std::process::exit(1);
    }

    Ok(())
}
