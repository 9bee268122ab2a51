//! Show command - one vehicle with its route, trip and map pin

use transit_live::adapters::HttpTransitApi;
use transit_live::config::ClientConfig;
use transit_live::core::services::DetailController;
use transit_live::output::{OutputMode, VehicleDetailResult};

/// Resolve and display a single vehicle
pub async fn show(config: &ClientConfig, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let detail = DetailController::new(HttpTransitApi::new(config)?);
    detail.open(id).await;

    let result = VehicleDetailResult::from(detail.snapshot());
    result.render(mode);

    if result.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}
