//! Download fresh extracts from a data warehouse export endpoint.
//!
//! Each extract is fetched from `<base-url>/<file name>`. Nothing is written
//! until every download succeeds and the set loads cleanly, so a failed
//! fetch leaves the existing extracts in place.

use log::info;
use std::path::Path;

/// File names of the three extracts, as the dashboard's build expects them.
pub const STATE_SERIES_FILE: &str = "state_series.csv";
pub const COUNTY_SERIES_FILE: &str = "county_series.csv";
pub const DEMOGRAPHY_FILE: &str = "demography.csv";

const EXTRACT_FILES: [&str; 3] = [STATE_SERIES_FILE, COUNTY_SERIES_FILE, DEMOGRAPHY_FILE];

/// Join a base URL and a file name with exactly one slash.
pub fn extract_url(base_url: &str, file: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), file)
}

async fn download(client: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("GET {} returned {}", url, response.status());
    }
    let body = response.text().await?;
    if body.trim().is_empty() {
        anyhow::bail!("GET {} returned an empty body", url);
    }
    Ok(body)
}

/// Fetch all three extracts, check that they load, then write them to `out_dir`.
pub async fn run_fetch(base_url: &str, out_dir: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let mut bodies = Vec::with_capacity(EXTRACT_FILES.len());
    for file in EXTRACT_FILES {
        let url = extract_url(base_url, file);
        info!("Fetching {}", url);
        let body = download(&client, &url).await?;
        info!("  {} bytes for {}", body.len(), file);
        bodies.push(body);
    }

    let dataset = cov_db::load_dataset(&bodies[0], &bodies[1], &bodies[2])
        .map_err(|e| anyhow::anyhow!("fetched extracts do not load: {:#}", e))?;
    if dataset.state.is_empty() {
        anyhow::bail!("fetched {} has no usable rows", STATE_SERIES_FILE);
    }

    let out = Path::new(out_dir);
    tokio::fs::create_dir_all(out).await?;
    for (file, body) in EXTRACT_FILES.iter().zip(&bodies) {
        tokio::fs::write(out.join(file), body).await?;
    }

    info!(
        "Fetch complete. {} state rows, {} county rows, {} demography rows written to {}",
        dataset.state.len(),
        dataset.county.len(),
        dataset.demography.len(),
        out_dir
    );
    Ok(())
}
