//! Filters command - list the routes and trips that can be filtered by

use transit_live::adapters::HttpTransitApi;
use transit_live::config::ClientConfig;
use transit_live::core::services::FilterSelectionController;
use transit_live::output::{FilterOptionsResult, OutputMode};

/// Load and display the available filter options
pub async fn filters(config: &ClientConfig, mode: OutputMode) -> anyhow::Result<()> {
    let controller = FilterSelectionController::new(HttpTransitApi::new(config)?);
    let options = controller.load().await;

    let failed = options.error.is_some();
    FilterOptionsResult { options }.render(mode);

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
