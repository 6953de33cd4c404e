//! Command-line report runner.
//!
//! Loads the product catalog either from local JSON files or from the
//! remote inventory API, computes the dashboard snapshot, and writes the
//! CSV and XLSX report artifacts. PDF export needs a rendered dashboard
//! capture and is not available headless.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use stocklens_analytics::{FilterSelection, ReportSnapshot};
use stocklens_app::{Action, DashboardState, reduce, run_export};
use stocklens_catalog::{Category, Product};
use stocklens_gateway::{ApiGateway, ProductQuery};
use stocklens_observability::LogFormat;
use stocklens_reports::{CapturedFrame, ExportFormat, RenderSurface, ReportError};

const USAGE: &str =
    "usage: stocklens --remote [out_dir] | stocklens <products.json> [categories.json] [out_dir]";

/// Headless runs have no rendered dashboard to photograph.
struct HeadlessSurface;

impl RenderSurface for HeadlessSurface {
    fn capture(&self) -> Result<CapturedFrame, ReportError> {
        Err(ReportError::Surface(
            "no rendered dashboard in headless mode".to_string(),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    stocklens_observability::init(LogFormat::Text);

    let args: Vec<String> = env::args().skip(1).collect();
    let (products, categories, out_dir) = match args.first().map(String::as_str) {
        Some("--remote") => {
            let (products, categories) = fetch_remote().await?;
            (products, categories, dir_arg(args.get(1)))
        }
        Some(products_path) => {
            let products = read_json(products_path)?;
            let categories = match args.get(1) {
                Some(path) => read_json(path)?,
                None => Vec::new(),
            };
            (products, categories, dir_arg(args.get(2)))
        }
        None => anyhow::bail!(USAGE),
    };

    let snapshot = ReportSnapshot::compute(
        &products,
        &categories,
        &FilterSelection::default(),
        Utc::now(),
    );
    tracing::info!(
        products = snapshot.totals.total_products,
        low_stock = snapshot.totals.low_stock_products,
        "snapshot computed"
    );

    let mut state = reduce(DashboardState::default(), Action::ToggleExportMenu);
    for format in [ExportFormat::Csv, ExportFormat::Workbook] {
        let (next, artifact) = run_export(format, &snapshot, &HeadlessSurface, &out_dir, state);
        state = next;
        if artifact.is_none() {
            anyhow::bail!("{} export failed", format.as_str());
        }
    }
    Ok(())
}

async fn fetch_remote() -> Result<(Vec<Product>, Vec<Category>)> {
    let gateway = ApiGateway::from_env();
    if let (Ok(email), Ok(password)) = (env::var("STOCKLENS_EMAIL"), env::var("STOCKLENS_PASSWORD"))
    {
        gateway
            .sign_in(&email, &password)
            .await
            .context("sign-in failed")?;
    }
    let products = gateway
        .list_products(&ProductQuery::default())
        .await
        .context("failed to list products")?;
    let categories = gateway
        .list_categories()
        .await
        .context("failed to list categories")?;
    Ok((products, categories))
}

fn dir_arg(arg: Option<&String>) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {path}"))
}
