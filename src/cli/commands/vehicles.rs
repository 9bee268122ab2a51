//! Vehicles command - list live vehicles page by page

use log::debug;
use transit_live::adapters::HttpTransitApi;
use transit_live::config::ClientConfig;
use transit_live::core::models::FilterSelection;
use transit_live::core::services::VehicleListController;
use transit_live::output::{OutputMode, VehicleListResult};

/// List vehicles matching `filter`, loading up to `pages` pages
pub async fn vehicles(
    config: &ClientConfig,
    filter: FilterSelection,
    pages: usize,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let api = HttpTransitApi::new(config)?;
    debug!("Listing vehicles from {}", api.base_url());
    let list = VehicleListController::new(api);

    list.set_filter(filter).await;
    for page in 1..pages.max(1) {
        if !list.load_more().await {
            debug!("Pagination stopped after {page} page(s)");
            break;
        }
    }

    let state = list.snapshot();
    VehicleListResult::from(&state).render(mode);

    if state.error().is_some() && state.records().is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
